use std::time::Duration;

use crate::feed::DEFAULT_MAX_ITEMS;
use crate::rotation::WindowMode;

/// How long each window stays on screen before rotating.
pub const DEFAULT_ROTATION_INTERVAL: Duration = Duration::from_secs(6);

/// Gap between transition start and the cursor advance, sized to match
/// a frontend exit animation.
pub const DEFAULT_TRANSITION_DELAY: Duration = Duration::from_millis(300);

/// Timing and window configuration for the ticker engine.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Time each window stays on screen
    pub rotation_interval: Duration,
    /// Delay between phase one and phase two of an advance
    pub transition_delay: Duration,
    /// Window sizing policy
    pub window_mode: WindowMode,
    /// Feed length cap
    pub max_items: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rotation_interval: DEFAULT_ROTATION_INTERVAL,
            transition_delay: DEFAULT_TRANSITION_DELAY,
            window_mode: WindowMode::default(),
            max_items: DEFAULT_MAX_ITEMS,
        }
    }
}
