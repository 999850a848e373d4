/// Fallback used when a rig is configured with a non-positive duration
pub const DEFAULT_CURTAIN_DURATION: f32 = 1.5;

/// Configuration for a [`CurtainRig`](super::CurtainRig)
#[derive(Clone, Debug)]
pub struct CurtainConfig {
    /// Length of one open or close animation in seconds
    pub duration_secs: f32,
    /// React to [`DemoInput`](super::DemoInput)
    pub demo_mode: bool,
    /// Sorting layer forwarded to every panel surface
    pub sorting_layer: String,
    /// Order within the sorting layer
    pub sorting_order: i32,
}

impl CurtainConfig {
    pub fn new(duration_secs: f32) -> Self {
        Self {
            duration_secs,
            ..Self::default()
        }
    }

    pub fn duration(mut self, duration_secs: f32) -> Self {
        self.duration_secs = duration_secs;
        self
    }

    pub fn demo_mode(mut self, enabled: bool) -> Self {
        self.demo_mode = enabled;
        self
    }

    pub fn sorting(mut self, layer: impl Into<String>, order: i32) -> Self {
        self.sorting_layer = layer.into();
        self.sorting_order = order;
        self
    }

    /// Duration with the fallback applied
    pub(crate) fn effective_duration(&self) -> f32 {
        if self.duration_secs <= 0.0 {
            DEFAULT_CURTAIN_DURATION
        } else {
            self.duration_secs
        }
    }
}

impl Default for CurtainConfig {
    fn default() -> Self {
        Self {
            duration_secs: 1.0,
            demo_mode: false,
            sorting_layer: "Default".to_string(),
            sorting_order: 0,
        }
    }
}
