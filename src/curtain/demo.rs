//! Interactive demo controls for a curtain rig

use crate::animation::QuadMesh;

use super::{CurtainRig, PanelSurface};

/// Input a demo front-end forwards to the rig
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemoInput {
    /// Snap the curtain into view
    ShowKey,
    /// Snap the curtain away and hide it
    HideKey,
    /// Alternate between opening and closing
    Click,
}

impl<M: QuadMesh + PanelSurface> CurtainRig<M> {
    /// Apply one demo input. Ignored unless demo mode is enabled.
    ///
    /// Returns true if the input changed the rig.
    pub fn handle_input(&mut self, input: DemoInput) -> bool {
        if !self.config().demo_mode {
            return false;
        }

        match input {
            DemoInput::ShowKey => {
                self.show_curtain_instant();
                true
            }
            DemoInput::HideKey => {
                self.hide_curtain_instant();
                true
            }
            DemoInput::Click => {
                if self.is_animating() {
                    return false;
                }
                self.toggle = !self.toggle;
                if self.toggle {
                    self.open_curtain()
                } else {
                    self.close_curtain()
                }
            }
        }
    }

    /// Demo-mode toggle, true when the last click opened the curtain
    pub fn toggle_state(&self) -> bool {
        self.toggle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::PanelState;
    use crate::curtain::CurtainConfig;
    use crate::mesh::{split_curtain, Quad};

    fn demo_rig() -> CurtainRig<Quad> {
        CurtainRig::new(split_curtain(), CurtainConfig::new(0.5).demo_mode(true))
    }

    #[test]
    fn test_inputs_ignored_outside_demo_mode() {
        let mut rig = CurtainRig::new(split_curtain(), CurtainConfig::new(0.5));
        assert!(!rig.handle_input(DemoInput::Click));
        assert!(!rig.handle_input(DemoInput::HideKey));
        assert!(!rig.is_animating());
        assert!(rig.panels().iter().all(|p| p.mesh().is_active()));
    }

    #[test]
    fn test_click_alternates_open_and_close() {
        let mut rig = demo_rig();

        assert!(rig.handle_input(DemoInput::Click));
        assert!(rig.toggle_state());
        assert!(rig.panels().iter().all(|p| p.state() == PanelState::Open));

        while rig.is_animating() {
            rig.update(0.125);
        }

        assert!(rig.handle_input(DemoInput::Click));
        assert!(!rig.toggle_state());
        assert!(rig.panels().iter().all(|p| p.state() == PanelState::Closed));
    }

    #[test]
    fn test_click_while_animating_keeps_toggle() {
        let mut rig = demo_rig();
        rig.handle_input(DemoInput::Click);
        assert!(!rig.handle_input(DemoInput::Click));
        assert!(rig.toggle_state());
    }

    #[test]
    fn test_keys_snap_instantly() {
        let mut rig = demo_rig();
        rig.handle_input(DemoInput::HideKey);
        assert!(rig.panels().iter().all(|p| !p.mesh().is_active()));
        rig.handle_input(DemoInput::ShowKey);
        assert!(rig.panels().iter().all(|p| p.mesh().is_active()));
    }
}
