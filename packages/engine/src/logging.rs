//! Logging setup
//!
//! In the browser the `log` records go to `console.*` through `console_log`.
//! Native builds (tests, tooling) only get the level filter; whoever embeds
//! the crate installs their own logger.

use log::LevelFilter;

/// Install the console logger and set the level. Safe to call more than once;
/// the logger is installed by the first call, later calls only change the level.
pub fn init_logging(level: LevelFilter) {
    install_backend();
    log::set_max_level(level);
}

#[cfg(target_arch = "wasm32")]
fn install_backend() {
    // Fails only when a logger is already installed
    if console_log::init().is_err() {
        log::debug!("console logger already installed");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn install_backend() {}
