//! Screen transitions behind a curtain.
//!
//! The [`TransitionSequencer`] closes the curtain, swaps screen content
//! through a [`ContentLoader`], then opens the curtain again. Every step
//! is polled from [`TransitionSequencer::update`], so the whole workflow
//! runs on the caller's frame loop without threads.

mod screen;
mod sequencer;

pub use screen::{RegistryError, Screen, ScreenRegistry};
pub use sequencer::{SequencerConfig, TransitionSequencer, DEFAULT_SETTLE_SECS};

/// Loads and unloads screen content in the background.
///
/// Operations are polled once per frame until [`is_done`](Self::is_done)
/// returns true. There is no timeout: an operation that never completes
/// stalls the transition.
pub trait ContentLoader {
    /// In-flight load or unload
    type Operation;

    fn load(&mut self, resource: &str) -> Self::Operation;

    fn unload(&mut self, resource: &str) -> Self::Operation;

    fn is_done(&mut self, operation: &Self::Operation) -> bool;

    /// Make freshly loaded content the active presentation target
    fn set_active(&mut self, resource: &str);
}

/// Input-blocking layer toggled around a transition
pub trait InteractionSurface {
    fn set_interactable(&mut self, interactable: bool);
}

/// Milestones of one transition, in the order they happen
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransitionEvent {
    InteractionDisabled,
    CurtainClosed,
    LoadStarted(String),
    Loaded(String),
    UnloadStarted(String),
    Unloaded(String),
    ScreenChanged { from: Screen, to: Screen },
    Settled,
    CurtainOpened,
    InteractionEnabled,
}
