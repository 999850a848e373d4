//! Per-panel curtain animation.
//!
//! A curtain panel is a textured quad. Opening and closing never move the
//! geometry; instead the texture coordinates slide sideways, with the top
//! edge leading and the bottom edge catching up (see [`WipeProfile`]).

mod panel;
pub mod uv;
mod wipe;

pub use panel::{PanelAnimator, PanelState, SlideDirection};
pub use uv::{QuadUvs, Uv};
pub use wipe::WipeProfile;

/// A mesh with exactly four texture coordinates that a [`PanelAnimator`] can drive
pub trait QuadMesh {
    /// Current texture coordinates, in bottom-left, top-left, bottom-right,
    /// top-right order
    fn uvs(&self) -> QuadUvs;

    /// Replace all four texture coordinates
    fn set_uvs(&mut self, uvs: &QuadUvs);
}
