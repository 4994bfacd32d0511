use log::Level;

/// Viewport width (CSS px) at or below which the music grid turns into a slider.
pub const SLIDER_BREAKPOINT: f64 = 768.0;

pub const AUTOPLAY_INTERVAL_MS: u32 = 5000;

/// Page offset past which the scroll-to-top button shows up.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

// Reveal elements once their top edge is above innerHeight / divisor
pub const REVEAL_VIEWPORT_DIVISOR: f64 = 1.3;
pub const REVEAL_OBSERVER_THRESHOLD: f64 = 0.1;
pub const REVEAL_OBSERVER_ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Chatty navigation logs when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
