use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Time between automatic testimonial advances.
pub const AUTOPLAY_INTERVAL_MS: u32 = 6_000;

/// Length of each half of the testimonial fade (out, then in).
pub const CAROUSEL_FADE_MS: u32 = 250;

/// Delay before the hero block fades in after mount.
pub const HERO_REVEAL_DELAY_MS: u32 = 100;

/// Fraction of a block that must be on screen before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Window scroll offset (px) past which the nav switches to its solid style.
pub const NAV_SCROLL_THRESHOLD: f64 = 40.0;
