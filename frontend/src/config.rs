use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose effect wiring while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Animate-on-scroll library
pub const AOS_ONCE: bool = true;
pub const AOS_OFFSET_PX: u32 = 100;
pub const AOS_DURATION_MS: u32 = 800;
pub const AOS_EASING: &str = "ease-out-cubic";

// Signup simulation, stand-ins for a mailing list round trip
pub const SIGNUP_LATENCY_MS: u32 = 1_500;
pub const SIGNUP_RESET_MS: u32 = 3_000;
pub const SIGNUP_SUCCESS_BACKGROUND: &str = "#22c55e";

pub const PARALLAX_SHIFT_FACTOR: f64 = 0.3;
pub const PARALLAX_ZOOM_FACTOR: f64 = 0.0002;

pub const INDICATOR_HIDE_AFTER_PX: f64 = 100.0;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px";

// Fractions of the viewport height measured from the top
pub const BLEND_START: f64 = 0.8;
pub const BLEND_END: f64 = 0.3;
pub const BLEND_ROOT_MARGIN: &str = "100px";
