//! UI layout and timing constants.

/// Default window width in pixels
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
/// Default window height in pixels
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;

/// Seconds a toast notification stays on screen
pub const NOTIFICATION_LIFETIME: f32 = 4.0;
/// Fraction of the lifetime over which a toast fades out
pub const NOTIFICATION_FADE_FRACTION: f32 = 0.25;
/// Maximum toasts shown at once (oldest dropped first)
pub const NOTIFICATION_MAX_VISIBLE: usize = 5;

/// Cap on frame delta to avoid animation jumps after a stall
pub const MAX_ANIMATION_DT: f32 = 0.1;
