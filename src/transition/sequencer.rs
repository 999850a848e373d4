use crate::animation::QuadMesh;
use crate::curtain::{CurtainFlags, CurtainRig, PanelSurface};

use super::{ContentLoader, InteractionSurface, Screen, ScreenRegistry, TransitionEvent};

/// Pause between swapping content and opening the curtain
pub const DEFAULT_SETTLE_SECS: f32 = 0.5;

/// Configuration for a [`TransitionSequencer`]
#[derive(Clone, Debug)]
pub struct SequencerConfig {
    /// Registry index of the screen shown by [`TransitionSequencer::start`]
    pub starting_screen: usize,
    /// Seconds to wait after the content swap before opening the curtain
    pub settle_secs: f32,
}

impl SequencerConfig {
    pub fn starting_screen(mut self, index: usize) -> Self {
        self.starting_screen = index;
        self
    }

    pub fn settle(mut self, secs: f32) -> Self {
        self.settle_secs = secs;
        self
    }
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            starting_screen: 1,
            settle_secs: DEFAULT_SETTLE_SECS,
        }
    }
}

/// Curtain command a transition issues
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CurtainMove {
    Close,
    Open,
}

enum Step<Op> {
    /// The rig was busy with someone else's animation; retry the move once idle
    AwaitingRig(CurtainMove),
    Closing,
    Loading(Op),
    Unloading(Op),
    /// Seconds left before the curtain opens
    Settling(f32),
    Opening,
}

enum StepPoll<Op> {
    /// Still waiting, check again next frame
    Pending(Step<Op>),
    /// Move on to the next step within the same frame
    Next(Step<Op>),
    Finished,
}

struct Workflow<Op> {
    target: Screen,
    step: Step<Op>,
}

/// Drives screen changes behind a curtain.
///
/// A transition runs these steps in order, each waiting for the previous
/// one to complete: block interaction, close the curtain, load the new
/// screen, unload the old one, activate the new one, settle, open the
/// curtain, unblock interaction. Only one transition runs at a time and
/// it cannot be cancelled.
pub struct TransitionSequencer<M, L, S>
where
    M: QuadMesh + PanelSurface,
    L: ContentLoader,
    S: InteractionSurface,
{
    registry: ScreenRegistry,
    rig: CurtainRig<M>,
    loader: L,
    surface: S,
    config: SequencerConfig,
    current: Screen,
    transitioning: bool,
    workflow: Option<Workflow<L::Operation>>,
    events: Vec<TransitionEvent>,
}

impl<M, L, S> TransitionSequencer<M, L, S>
where
    M: QuadMesh + PanelSurface,
    L: ContentLoader,
    S: InteractionSurface,
{
    pub fn new(
        registry: ScreenRegistry,
        rig: CurtainRig<M>,
        loader: L,
        surface: S,
        config: SequencerConfig,
    ) -> Self {
        Self {
            registry,
            rig,
            loader,
            surface,
            config,
            current: Screen::NONE,
            transitioning: false,
            workflow: None,
            events: Vec::new(),
        }
    }

    /// Transition from nothing to the configured starting screen
    pub fn start(&mut self) -> bool {
        let start = match self.registry.screen(self.config.starting_screen) {
            Some(screen) if !screen.is_none() => screen,
            _ => {
                log::warn!(
                    "Starting screen {} is not navigable, using the first screen",
                    self.config.starting_screen
                );
                self.registry.next(Screen::NONE)
            }
        };
        self.go_to(start)
    }

    /// Begin a transition to `screen`.
    ///
    /// Ignored when `screen` is already current, is not a navigation
    /// target, or another transition is running.
    pub fn go_to(&mut self, screen: Screen) -> bool {
        if screen == self.current {
            return false;
        }
        if screen.is_none() || !self.registry.contains(screen) {
            log::warn!("Ignoring transition to unknown screen {}", screen.index());
            return false;
        }
        if self.transitioning {
            log::debug!(
                "Transition in progress, ignoring request for '{}'",
                self.registry.name(screen)
            );
            return false;
        }

        log::info!(
            "Transition '{}' -> '{}'",
            self.registry.name(self.current),
            self.registry.name(screen)
        );
        self.transitioning = true;
        self.surface.set_interactable(false);
        self.events.push(TransitionEvent::InteractionDisabled);
        let step = self.issue(CurtainMove::Close);
        self.workflow = Some(Workflow {
            target: screen,
            step,
        });
        true
    }

    /// Go to the screen after the current one, wrapping around
    pub fn next(&mut self) -> bool {
        if self.transitioning {
            return false;
        }
        self.go_to(self.registry.next(self.current))
    }

    /// Go to the screen before the current one, wrapping around
    pub fn previous(&mut self) -> bool {
        if self.transitioning {
            return false;
        }
        self.go_to(self.registry.previous(self.current))
    }

    /// Advance the curtain and the running transition by `dt` seconds
    pub fn update(&mut self, dt: f32) -> CurtainFlags {
        let flags = self.rig.update(dt);

        if let Some(workflow) = self.workflow.take() {
            self.workflow = self.advance(workflow, dt);
        }

        flags
    }

    fn advance(
        &mut self,
        workflow: Workflow<L::Operation>,
        dt: f32,
    ) -> Option<Workflow<L::Operation>> {
        let target = workflow.target;
        let mut step = workflow.step;
        // Steps entered during this frame have not waited any time yet
        let mut elapsed = dt;

        loop {
            match self.poll_step(target, step, elapsed) {
                StepPoll::Pending(pending) => {
                    return Some(Workflow {
                        target,
                        step: pending,
                    })
                }
                StepPoll::Next(next) => {
                    step = next;
                    elapsed = 0.0;
                }
                StepPoll::Finished => return None,
            }
        }
    }

    fn poll_step(
        &mut self,
        target: Screen,
        step: Step<L::Operation>,
        elapsed: f32,
    ) -> StepPoll<L::Operation> {
        match step {
            Step::AwaitingRig(curtain_move) => {
                if self.rig.is_animating() {
                    return StepPoll::Pending(Step::AwaitingRig(curtain_move));
                }
                StepPoll::Next(self.issue(curtain_move))
            }
            Step::Closing => {
                if self.rig.is_animating() {
                    return StepPoll::Pending(Step::Closing);
                }
                self.events.push(TransitionEvent::CurtainClosed);

                let resource = self.registry.resource(target).to_owned();
                if resource.is_empty() {
                    log::debug!("'{}' has no content, skipping swap", self.registry.name(target));
                    return StepPoll::Next(Step::Settling(self.config.settle_secs));
                }
                log::debug!("Loading '{}'", resource);
                let operation = self.loader.load(&resource);
                self.events.push(TransitionEvent::LoadStarted(resource));
                StepPoll::Next(Step::Loading(operation))
            }
            Step::Loading(operation) => {
                if !self.loader.is_done(&operation) {
                    return StepPoll::Pending(Step::Loading(operation));
                }
                let resource = self.registry.resource(target).to_owned();
                self.events.push(TransitionEvent::Loaded(resource));

                let previous = self.registry.resource(self.current).to_owned();
                if previous.is_empty() {
                    self.activate(target);
                    return StepPoll::Next(Step::Settling(self.config.settle_secs));
                }
                log::debug!("Unloading '{}'", previous);
                let operation = self.loader.unload(&previous);
                self.events.push(TransitionEvent::UnloadStarted(previous));
                StepPoll::Next(Step::Unloading(operation))
            }
            Step::Unloading(operation) => {
                if !self.loader.is_done(&operation) {
                    return StepPoll::Pending(Step::Unloading(operation));
                }
                let previous = self.registry.resource(self.current).to_owned();
                self.events.push(TransitionEvent::Unloaded(previous));
                self.activate(target);
                StepPoll::Next(Step::Settling(self.config.settle_secs))
            }
            Step::Settling(remaining) => {
                let remaining = remaining - elapsed;
                if remaining > 0.0 {
                    return StepPoll::Pending(Step::Settling(remaining));
                }
                self.events.push(TransitionEvent::Settled);
                StepPoll::Next(self.issue(CurtainMove::Open))
            }
            Step::Opening => {
                if self.rig.is_animating() {
                    return StepPoll::Pending(Step::Opening);
                }
                self.events.push(TransitionEvent::CurtainOpened);
                self.surface.set_interactable(true);
                self.events.push(TransitionEvent::InteractionEnabled);
                self.transitioning = false;
                log::info!("Transition to '{}' complete", self.registry.name(self.current));
                StepPoll::Finished
            }
        }
    }

    /// Command the rig, or wait for it to go idle if it rejects the command
    fn issue(&mut self, curtain_move: CurtainMove) -> Step<L::Operation> {
        let accepted = match curtain_move {
            CurtainMove::Close => self.rig.close_curtain(),
            CurtainMove::Open => self.rig.open_curtain(),
        };
        match (accepted, curtain_move) {
            (false, _) => {
                log::debug!("Curtain busy, deferring {:?}", curtain_move);
                Step::AwaitingRig(curtain_move)
            }
            (true, CurtainMove::Close) => Step::Closing,
            (true, CurtainMove::Open) => Step::Opening,
        }
    }

    fn activate(&mut self, target: Screen) {
        let resource = self.registry.resource(target).to_owned();
        self.loader.set_active(&resource);
        let from = self.current;
        self.current = target;
        self.events.push(TransitionEvent::ScreenChanged { from, to: target });
    }

    /// Take every event recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<TransitionEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn current_screen(&self) -> Screen {
        self.current
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn registry(&self) -> &ScreenRegistry {
        &self.registry
    }

    pub fn rig(&self) -> &CurtainRig<M> {
        &self.rig
    }

    pub fn rig_mut(&mut self) -> &mut CurtainRig<M> {
        &mut self.rig
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
