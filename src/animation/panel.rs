use super::uv::{QuadUvs, BOTTOM_CORNERS, TOP_CORNERS};
use super::{QuadMesh, WipeProfile};

/// Which way a panel's texture slides when it opens
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlideDirection {
    Negative,
    #[default]
    Still,
    Positive,
}

impl SlideDirection {
    /// Signed unit for this direction (-1, 0 or +1)
    pub fn sign(self) -> f32 {
        match self {
            SlideDirection::Negative => -1.0,
            SlideDirection::Still => 0.0,
            SlideDirection::Positive => 1.0,
        }
    }
}

impl From<i32> for SlideDirection {
    fn from(value: i32) -> Self {
        match value.signum() {
            -1 => SlideDirection::Negative,
            1 => SlideDirection::Positive,
            _ => SlideDirection::Still,
        }
    }
}

/// Resting state a panel is animating towards (or sitting in)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelState {
    Closed,
    Open,
}

impl PanelState {
    fn sign(self) -> f32 {
        match self {
            PanelState::Open => 1.0,
            PanelState::Closed => -1.0,
        }
    }
}

/// Animates the texture coordinates of one curtain quad.
///
/// `open` resets to the captured UVs and slides them by `direction` over the
/// duration. `close` jumps to the slid position and slides back. The caller
/// drives the animation by calling [`PanelAnimator::tick`] once per frame.
pub struct PanelAnimator<M: QuadMesh> {
    mesh: M,
    direction: SlideDirection,
    profile: WipeProfile,
    /// Captured once from the mesh, never modified
    original: QuadUvs,
    current: QuadUvs,
    state: PanelState,
    /// Seconds left in the running animation
    timer: f32,
    duration: f32,
}

impl<M: QuadMesh> PanelAnimator<M> {
    /// Take ownership of `mesh` and capture its current UVs as the reference
    pub fn new(mesh: M, direction: SlideDirection) -> Self {
        let original = mesh.uvs();
        Self {
            mesh,
            direction,
            profile: WipeProfile::DEFAULT,
            original,
            current: original,
            state: PanelState::Closed,
            timer: 0.0,
            duration: 0.0,
        }
    }

    /// Start opening over `duration` seconds. No-op if already open.
    ///
    /// `duration` must be positive; a non-positive value leaves the panel
    /// reset but never animating.
    pub fn open(&mut self, duration: f32) {
        if self.state == PanelState::Open {
            return;
        }
        self.state = PanelState::Open;
        self.show_instant();
        self.start(duration);
    }

    /// Start closing over `duration` seconds. No-op if already closed.
    pub fn close(&mut self, duration: f32) {
        if self.state == PanelState::Closed {
            return;
        }
        self.state = PanelState::Closed;
        self.hide_instant();
        self.start(duration);
    }

    fn start(&mut self, duration: f32) {
        self.duration = duration;
        self.timer = duration;
    }

    /// Advance the running animation by `dt` seconds.
    ///
    /// Returns true if the UVs were written to the mesh.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.timer <= 0.0 {
            return false;
        }

        let step = self.direction.sign() * self.state.sign() * (dt / self.duration);

        // Threshold is tested against the timer before this tick's decrement
        if self.profile.moves_bottom(self.timer, self.duration) {
            let bottom_step = step * self.profile.bottom_speed;
            for corner in BOTTOM_CORNERS {
                self.current[corner] = self.current[corner].offset_u(bottom_step);
            }
        }
        for corner in TOP_CORNERS {
            self.current[corner] = self.current[corner].offset_u(step);
        }

        self.timer -= dt;
        if self.timer <= 0.0 {
            for uv in self.current.iter_mut() {
                *uv = uv.snapped();
            }
        }

        self.mesh.set_uvs(&self.current);
        true
    }

    /// Snap to the captured UVs without animating
    pub fn show_instant(&mut self) {
        self.current = self.original;
        self.mesh.set_uvs(&self.current);
    }

    /// Snap to the captured UVs slid by `direction` without animating
    pub fn hide_instant(&mut self) {
        let offset = self.direction.sign();
        self.current = self.original.map(|uv| uv.offset_u(offset));
        self.mesh.set_uvs(&self.current);
    }

    pub fn is_animating(&self) -> bool {
        self.timer > 0.0
    }

    /// Seconds left in the running animation (zero or negative when at rest)
    pub fn remaining(&self) -> f32 {
        self.timer
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn direction(&self) -> SlideDirection {
        self.direction
    }

    pub fn uvs(&self) -> &QuadUvs {
        &self.current
    }

    pub fn original_uvs(&self) -> &QuadUvs {
        &self.original
    }

    pub fn mesh(&self) -> &M {
        &self.mesh
    }

    pub fn mesh_mut(&mut self) -> &mut M {
        &mut self.mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::uv::{BOTTOM_LEFT, BOTTOM_RIGHT, TOP_LEFT, TOP_RIGHT};
    use crate::mesh::Quad;

    // Power-of-two step so the timer lands exactly on zero
    const DT: f32 = 0.0625;

    fn run(panel: &mut PanelAnimator<Quad>, seconds: f32) {
        let ticks = (seconds / DT) as usize;
        for _ in 0..ticks {
            panel.tick(DT);
        }
    }

    fn opened_panel(direction: SlideDirection) -> PanelAnimator<Quad> {
        let mut panel = PanelAnimator::new(Quad::unit(), direction);
        panel.open(1.0);
        run(&mut panel, 1.0);
        panel
    }

    #[test]
    fn test_new_panel_is_closed_and_idle() {
        let panel = PanelAnimator::new(Quad::unit(), SlideDirection::Positive);
        assert_eq!(panel.state(), PanelState::Closed);
        assert!(!panel.is_animating());
        assert_eq!(panel.uvs(), panel.original_uvs());
    }

    #[test]
    fn test_open_ends_slid_by_direction() {
        let panel = opened_panel(SlideDirection::Positive);
        assert!(!panel.is_animating());
        for (uv, original) in panel.uvs().iter().zip(panel.original_uvs()) {
            assert_eq!(uv.u, original.u + 1.0);
            assert_eq!(uv.v, original.v);
        }
        assert_eq!(panel.mesh().uvs(), *panel.uvs());
    }

    #[test]
    fn test_close_returns_to_original() {
        let mut panel = opened_panel(SlideDirection::Negative);
        panel.close(1.0);
        assert!(panel.is_animating());
        run(&mut panel, 1.0);

        assert!(!panel.is_animating());
        assert_eq!(panel.uvs(), panel.original_uvs());
        assert!(panel.uvs().iter().all(|uv| uv.is_whole()));
    }

    #[test]
    fn test_close_jumps_to_hidden_baseline() {
        let mut panel = opened_panel(SlideDirection::Positive);
        panel.close(1.0);
        let hidden = panel.original_uvs().map(|uv| uv.offset_u(1.0));
        assert_eq!(*panel.uvs(), hidden);
    }

    #[test]
    fn test_first_ticks_move_top_only() {
        let mut panel = PanelAnimator::new(Quad::unit(), SlideDirection::Positive);
        panel.open(1.0);
        let before = *panel.uvs();

        // remaining 1.0 and 0.9375 are both above 85%
        panel.tick(DT);
        panel.tick(DT);

        let after = panel.uvs();
        assert_eq!(after[TOP_LEFT].u, before[TOP_LEFT].u + 2.0 * DT);
        assert_eq!(after[TOP_RIGHT].u, before[TOP_RIGHT].u + 2.0 * DT);
        assert_eq!(after[BOTTOM_LEFT], before[BOTTOM_LEFT]);
        assert_eq!(after[BOTTOM_RIGHT], before[BOTTOM_RIGHT]);
    }

    #[test]
    fn test_bottom_catches_up_faster() {
        let mut panel = PanelAnimator::new(Quad::unit(), SlideDirection::Positive);
        panel.open(1.0);
        // 1.0, 0.9375, 0.875 are top-only; 0.8125 moves both
        for _ in 0..3 {
            panel.tick(DT);
        }
        let before = *panel.uvs();
        panel.tick(DT);
        let after = panel.uvs();

        let top_delta = after[TOP_LEFT].u - before[TOP_LEFT].u;
        let bottom_delta = after[BOTTOM_LEFT].u - before[BOTTOM_LEFT].u;
        assert!((top_delta - DT).abs() < 1e-6);
        assert!((bottom_delta - DT * 1.15).abs() < 1e-6);
    }

    #[test]
    fn test_open_twice_is_noop() {
        let mut panel = PanelAnimator::new(Quad::unit(), SlideDirection::Positive);
        panel.open(1.0);
        run(&mut panel, 0.5);
        let uvs = *panel.uvs();
        let remaining = panel.remaining();

        panel.open(1.0);

        assert_eq!(*panel.uvs(), uvs);
        assert_eq!(panel.remaining(), remaining);
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut panel = PanelAnimator::new(Quad::unit(), SlideDirection::Positive);
        panel.close(1.0);
        assert!(!panel.is_animating());
        assert_eq!(panel.uvs(), panel.original_uvs());
    }

    #[test]
    fn test_tick_at_rest_does_nothing() {
        let mut panel = PanelAnimator::new(Quad::unit(), SlideDirection::Positive);
        assert!(!panel.tick(0.016));
        assert_eq!(panel.uvs(), panel.original_uvs());
    }

    #[test]
    fn test_large_final_step_still_snaps() {
        let mut panel = PanelAnimator::new(Quad::unit(), SlideDirection::Negative);
        panel.open(1.0);
        panel.tick(0.3);
        panel.tick(0.3);
        panel.tick(0.7);
        assert!(!panel.is_animating());
        assert!(panel.uvs().iter().all(|uv| uv.is_whole()));
        assert_eq!(panel.uvs()[TOP_LEFT].u, panel.original_uvs()[TOP_LEFT].u - 1.0);
    }

    #[test]
    fn test_instant_show_hide() {
        let mut panel = PanelAnimator::new(Quad::unit(), SlideDirection::Negative);
        panel.hide_instant();
        assert_eq!(panel.uvs()[TOP_RIGHT].u, panel.original_uvs()[TOP_RIGHT].u - 1.0);
        assert_eq!(panel.mesh().uvs(), *panel.uvs());

        panel.show_instant();
        assert_eq!(panel.uvs(), panel.original_uvs());
        // Instant snaps never touch the state machine
        assert_eq!(panel.state(), PanelState::Closed);
    }

    #[test]
    fn test_still_panel_never_moves() {
        let mut panel = PanelAnimator::new(Quad::unit(), SlideDirection::Still);
        panel.open(1.0);
        run(&mut panel, 1.0);
        assert_eq!(panel.uvs(), panel.original_uvs());
    }

    #[test]
    fn test_direction_from_int() {
        assert_eq!(SlideDirection::from(-3), SlideDirection::Negative);
        assert_eq!(SlideDirection::from(0), SlideDirection::Still);
        assert_eq!(SlideDirection::from(1), SlideDirection::Positive);
    }
}
