use log::Level;

pub const SITE_NAME: &str = "Studio Zapminds";
pub const CONTACT_EMAIL: &str = "hello@zapcom.studio";

/// Delay between two progress ticks of the preloader.
pub const PRELOADER_TICK_MS: u32 = 150;
/// Upper bound (exclusive) of a single random progress increment.
pub const PRELOADER_MAX_INCREMENT: f64 = 15.0;
/// How long the bar holds at 100% before the overlay starts fading.
pub const PRELOADER_SETTLE_MS: u32 = 500;
/// Length of the overlay fade-out; completion fires after it.
pub const PRELOADER_EXIT_MS: u32 = 800;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
