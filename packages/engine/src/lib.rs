//! Wreckyard Engine - destruction core of the build & destroy sandbox
//!
//! Architecture:
//! - domain/      - Kinds and tuning (config)
//! - systems/     - Rigid bodies, scene registry, destruction mechanics
//! - simulation/  - Orchestration and the WASM facade
//! - logging      - `log` backend (console in the browser)

pub mod domain;
pub mod logging;
pub mod simulation;
pub mod systems;

// Short paths used across the crate
pub use systems::destruction;
pub use systems::rigid_body;
pub use systems::scene;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    logging::init_logging(log::LevelFilter::Info);

    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&"💥 Wreckyard WASM Engine initialized!".into());
}

/// Raise or lower log verbosity from JS (`"error"` .. `"trace"`, or `"off"`)
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter: log::LevelFilter = level
        .parse()
        .map_err(|_| JsValue::from_str(&format!("unknown log level: {level}")))?;
    logging::init_logging(filter);
    Ok(())
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{BodyKind, ConfigError, SandboxConfig, ShapeKind, ToolMode, WeaponKind};
pub use simulation::{BodySnapshot, PerfStats, Sandbox, SandboxCore};
