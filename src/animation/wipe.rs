/// Shape of the skewed two-phase wipe.
///
/// The top edge of a panel moves for the whole animation. The bottom edge
/// waits until the remaining time drops below `skew_threshold` of the
/// duration, then moves `bottom_speed` times faster to catch up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WipeProfile {
    /// Fraction of the duration (counting down) above which the bottom edge is frozen
    pub skew_threshold: f32,
    /// Speed multiplier applied to the bottom edge once it starts moving
    pub bottom_speed: f32,
}

impl WipeProfile {
    /// Lagging bottom edge: frozen for the first 15%, then 1.15x speed
    pub const DEFAULT: Self = Self {
        skew_threshold: 0.85,
        bottom_speed: 1.15,
    };

    /// Whether the bottom edge moves on a tick that starts with `remaining`
    /// seconds left out of `duration`.
    ///
    /// A timer sitting exactly on the threshold still counts as top-only.
    pub fn moves_bottom(&self, remaining: f32, duration: f32) -> bool {
        remaining < duration * self.skew_threshold
    }
}

impl Default for WipeProfile {
    fn default() -> Self {
        Self::DEFAULT
    }
}
