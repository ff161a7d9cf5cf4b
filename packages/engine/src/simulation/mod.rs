//! Sandbox - orchestration of the destruction core
//!
//! `SandboxCore` owns the scene, the toolbar state, the tuning and the RNG,
//! and exposes the operations the host drives: pointer events, weapon
//! placement and taps, clear/resize, and the per-frame step.
//! The actual mechanics live in `systems::destruction`; this module only
//! wires them to the owned state.

use std::sync::Arc;

use rand::rngs::StdRng;

use crate::destruction::{DetonationReport, PointerOutcome, ToolController};
use crate::domain::{ConfigError, SandboxConfig, ShapeKind, ToolMode, WeaponKind};
use crate::rigid_body::{BodyId, Vec2};
use crate::scene::{Scene, StepResult};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "render/snapshot.rs"]
mod snapshot;
mod facade;

pub use facade::Sandbox;
pub use perf_stats::PerfStats;
pub use snapshot::BodySnapshot;

use perf_stats::EventCounters;
use perf_timer::StepTimer;

/// Seed used when the host does not provide one
pub const DEFAULT_SEED: u64 = 0x5eed_b0b0;

/// The sandbox state
pub struct SandboxCore {
    config: Arc<SandboxConfig>,
    scene: Scene,
    tools: ToolController,
    rng: StdRng,

    // Viewport
    width: f32,
    height: f32,

    // Settings
    gravity_x: f32,
    gravity_y: f32,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
    events: EventCounters,
}

impl SandboxCore {
    /// Create a sandbox with its four walls around a `width` x `height` viewport
    pub fn new(width: f32, height: f32) -> Self {
        init::create_sandbox_core(width, height, DEFAULT_SEED, SandboxConfig::default())
    }

    pub fn with_seed(width: f32, height: f32, seed: u64) -> Self {
        init::create_sandbox_core(width, height, seed, SandboxConfig::default())
    }

    /// Replace the tuning from a JSON document. The scene is cleared and the
    /// walls are rebuilt with the new thickness.
    pub fn load_config_json(&mut self, json: &str) -> Result<(), ConfigError> {
        let config = SandboxConfig::from_json(json).map_err(|e| {
            log::warn!("rejected sandbox config: {e}");
            e
        })?;
        init::apply_config(self, config);
        Ok(())
    }

    pub fn config(&self) -> &SandboxConfig {
        &self.config
    }

    pub fn config_json(&self) -> String {
        self.config.to_json()
    }

    pub fn width(&self) -> f32 { self.width }

    pub fn height(&self) -> f32 { self.height }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn now_ms(&self) -> f64 { self.scene.now_ms() }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    // === SETTINGS ===

    pub fn set_mode(&mut self, mode: ToolMode) {
        settings::set_mode(self, mode);
    }

    pub fn mode(&self) -> ToolMode {
        self.tools.mode()
    }

    pub fn set_shape(&mut self, shape: ShapeKind) {
        settings::set_shape(self, shape);
    }

    pub fn shape(&self) -> ShapeKind {
        self.tools.shape_kind()
    }

    pub fn set_snap_enabled(&mut self, enabled: bool) {
        settings::set_snap_enabled(self, enabled);
    }

    pub fn set_size(&mut self, size: f32) {
        settings::set_size(self, size);
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        settings::set_gravity(self, x, y);
    }

    /// Gravity checkbox: straight down at 1, or off
    pub fn set_gravity_enabled(&mut self, enabled: bool) {
        settings::set_gravity_enabled(self, enabled);
    }

    pub fn gravity(&self) -> Vec2 {
        Vec2::new(self.gravity_x, self.gravity_y)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === COMMANDS ===

    /// Canvas pointer-down in scene coordinates
    pub fn pointer_down(&mut self, x: f32, y: f32) -> PointerOutcome {
        commands::pointer_down(self, x, y)
    }

    /// Drop a weapon at (x, y). Snapped like shapes.
    pub fn place_weapon(&mut self, x: f32, y: f32, kind: WeaponKind) -> BodyId {
        commands::place_weapon(self, x, y, kind)
    }

    /// Tap-to-explode: detonate the topmost weapon under (x, y)
    pub fn tap(&mut self, x: f32, y: f32) -> Option<DetonationReport> {
        commands::tap(self, x, y)
    }

    pub fn detonate(&mut self, id: BodyId) -> Option<DetonationReport> {
        commands::detonate(self, id)
    }

    /// Remove every dynamic body; the walls stay
    pub fn clear(&mut self) -> usize {
        commands::clear(self)
    }

    /// Viewport resized: rebuild the walls
    pub fn resize(&mut self, width: f32, height: f32) {
        commands::resize(self, width, height);
    }

    // === STEP ===

    /// Advance the simulation by `dt_ms`
    pub fn step(&mut self, dt_ms: f32) -> StepResult {
        step::step(self, dt_ms)
    }

    // === QUERIES ===

    pub fn body_count(&self) -> usize {
        self.scene.len()
    }

    pub fn dynamic_body_count(&self) -> usize {
        self.scene.dynamic_count()
    }

    pub fn pending_removals(&self) -> usize {
        self.scene.pending_removals()
    }

    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        snapshot::snapshot(self)
    }

    pub fn snapshot_json(&self) -> String {
        snapshot::snapshot_json(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
