//! Multi-panel curtain rig.
//!
//! A [`CurtainRig`] fans open/close commands out to every panel it owns and
//! keeps its own busy timer, so callers can ask a single question
//! ("is the curtain still moving?") instead of polling each panel.

mod config;
mod demo;
mod rig;

use bitflags::bitflags;

pub use config::{CurtainConfig, DEFAULT_CURTAIN_DURATION};
pub use demo::DemoInput;
pub use rig::CurtainRig;

bitflags! {
    /// What changed during one [`CurtainRig::update`]
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct CurtainFlags: u8 {
        /// At least one panel wrote new texture coordinates
        const UVS_CHANGED     = 0b01;
        /// The rig's busy timer crossed zero on this update
        const ANIMATION_ENDED = 0b10;
    }
}

/// Render-side handle for a single panel
pub trait PanelSurface {
    /// Enable or disable rendering of the panel
    fn set_active(&mut self, active: bool);

    /// Draw ordering for the panel
    fn set_sorting(&mut self, _layer: &str, _order: i32) {}
}
