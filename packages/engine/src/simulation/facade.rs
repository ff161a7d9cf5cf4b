use wasm_bindgen::prelude::*;

use crate::domain::{ShapeKind, ToolMode, WeaponKind};

use super::perf_stats::PerfStats;
use super::SandboxCore;

/// JS-facing handle around [`SandboxCore`].
///
/// Body IDs cross the boundary as `u32`, with 0 meaning "nothing happened".
#[wasm_bindgen]
pub struct Sandbox {
    core: SandboxCore,
}

#[wasm_bindgen]
impl Sandbox {
    /// Create a sandbox for a canvas of the given size
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            core: SandboxCore::new(width, height),
        }
    }

    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(width: f32, height: f32, seed: u32) -> Self {
        Self {
            core: SandboxCore::with_seed(width, height, u64::from(seed)),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_config_json(&json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    pub fn get_config_json(&self) -> String {
        self.core.config_json()
    }

    // === TOOLBAR ===

    pub fn set_mode(&mut self, mode: ToolMode) {
        self.core.set_mode(mode);
    }

    pub fn set_shape(&mut self, shape: ShapeKind) {
        self.core.set_shape(shape);
    }

    pub fn set_snap_enabled(&mut self, enabled: bool) {
        self.core.set_snap_enabled(enabled);
    }

    pub fn set_size(&mut self, size: f32) {
        self.core.set_size(size);
    }

    pub fn set_gravity_enabled(&mut self, enabled: bool) {
        self.core.set_gravity_enabled(enabled);
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.core.set_gravity(x, y);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === INPUT ===

    /// Canvas pointer-down. Returns the spawned or erased body ID, 0 on a miss.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> u32 {
        self.core.pointer_down(x, y).body_id()
    }

    /// Drop a weapon dragged from the toolbar. Returns its body ID.
    pub fn place_weapon(&mut self, x: f32, y: f32, kind: WeaponKind) -> u32 {
        self.core.place_weapon(x, y, kind)
    }

    /// Tap-to-explode. Returns true if a weapon detonated.
    pub fn tap(&mut self, x: f32, y: f32) -> bool {
        self.core.tap(x, y).is_some()
    }

    pub fn detonate(&mut self, id: u32) -> bool {
        self.core.detonate(id).is_some()
    }

    /// Clear all dynamic bodies. Returns how many were removed.
    pub fn clear(&mut self) -> u32 {
        self.core.clear() as u32
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.core.resize(width, height);
    }

    /// Advance by `dt_ms`. Returns how many bodies expired this step.
    pub fn step(&mut self, dt_ms: f32) -> u32 {
        self.core.step(dt_ms).expired.len() as u32
    }

    // === QUERIES ===

    pub fn body_count(&self) -> usize {
        self.core.body_count()
    }

    pub fn dynamic_body_count(&self) -> usize {
        self.core.dynamic_body_count()
    }

    pub fn pending_removals(&self) -> usize {
        self.core.pending_removals()
    }

    /// JSON array of `{ id, x, y, angle, shape, color, is_static, kind }`
    pub fn snapshot_json(&self) -> String {
        self.core.snapshot_json()
    }
}
