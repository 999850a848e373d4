use crate::animation::{PanelAnimator, QuadMesh};

use super::{CurtainConfig, CurtainFlags, PanelSurface};

/// Callback fired when the rig's animation finishes
pub type AnimationEndCallback = Box<dyn FnMut()>;

/// A group of curtain panels animated together.
///
/// Open and close requests are ignored while the rig is busy. The busy
/// timer is owned by the rig and runs independently of the panel timers.
pub struct CurtainRig<M: QuadMesh + PanelSurface> {
    panels: Vec<PanelAnimator<M>>,
    config: CurtainConfig,
    /// Normalized once at construction
    duration: f32,
    timer: f32,
    /// Demo-mode click toggle, true means the last click opened
    pub(super) toggle: bool,
    listeners: Vec<AnimationEndCallback>,
}

impl<M: QuadMesh + PanelSurface> CurtainRig<M> {
    pub fn new(panels: Vec<PanelAnimator<M>>, config: CurtainConfig) -> Self {
        let duration = config.effective_duration();
        if duration != config.duration_secs {
            log::warn!(
                "Curtain duration {} is not positive, using {}",
                config.duration_secs,
                duration
            );
        }

        let mut rig = Self {
            panels,
            config,
            duration,
            timer: 0.0,
            toggle: false,
            listeners: Vec::new(),
        };
        let layer = rig.config.sorting_layer.clone();
        rig.set_sorting_layer(&layer, rig.config.sorting_order);
        rig
    }

    /// Register a callback for the end of every open or close animation
    pub fn on_animation_end<F: FnMut() + 'static>(&mut self, callback: F) {
        self.listeners.push(Box::new(callback));
    }

    /// Start opening every panel. Returns false if the rig was busy.
    pub fn open_curtain(&mut self) -> bool {
        if self.is_animating() {
            log::debug!("Curtain busy, ignoring open");
            return false;
        }
        self.set_panels_active(true);
        self.timer = self.duration;
        for panel in &mut self.panels {
            panel.open(self.duration);
        }
        log::debug!("Opening curtain over {}s", self.duration);
        true
    }

    /// Start closing every panel. Returns false if the rig was busy.
    pub fn close_curtain(&mut self) -> bool {
        if self.is_animating() {
            log::debug!("Curtain busy, ignoring close");
            return false;
        }
        self.set_panels_active(true);
        self.timer = self.duration;
        for panel in &mut self.panels {
            panel.close(self.duration);
        }
        log::debug!("Closing curtain over {}s", self.duration);
        true
    }

    /// Snap every panel to its captured UVs and make them visible.
    /// Not guarded by the busy timer.
    pub fn show_curtain_instant(&mut self) {
        for panel in &mut self.panels {
            panel.show_instant();
        }
        self.set_panels_active(true);
    }

    /// Snap every panel to its slid-away UVs and hide them.
    /// Not guarded by the busy timer.
    pub fn hide_curtain_instant(&mut self) {
        for panel in &mut self.panels {
            panel.hide_instant();
        }
        self.set_panels_active(false);
    }

    /// Advance every panel and the busy timer by `dt` seconds
    pub fn update(&mut self, dt: f32) -> CurtainFlags {
        let mut flags = CurtainFlags::empty();

        for panel in &mut self.panels {
            if panel.tick(dt) {
                flags |= CurtainFlags::UVS_CHANGED;
            }
        }

        if self.timer > 0.0 {
            self.timer -= dt;
            if self.timer <= 0.0 {
                log::debug!("Curtain animation ended");
                flags |= CurtainFlags::ANIMATION_ENDED;
                for listener in &mut self.listeners {
                    listener();
                }
            }
        }

        flags
    }

    pub fn is_animating(&self) -> bool {
        self.timer > 0.0
    }

    /// Forward a sorting layer and order to every panel surface
    pub fn set_sorting_layer(&mut self, layer: &str, order: i32) {
        for panel in &mut self.panels {
            panel.mesh_mut().set_sorting(layer, order);
        }
    }

    /// Duration of one animation after the fallback was applied
    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn config(&self) -> &CurtainConfig {
        &self.config
    }

    pub fn panels(&self) -> &[PanelAnimator<M>] {
        &self.panels
    }

    fn set_panels_active(&mut self, active: bool) {
        for panel in &mut self.panels {
            panel.mesh_mut().set_active(active);
        }
    }
}
