use wasm_bindgen::prelude::*;

/// Per-step counters. Event counters (detonations, impulses, fragments
/// spawned) cover everything that happened since the previous step.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) body_count: u32,
    pub(super) dynamic_bodies: u32,
    pub(super) pending_removals: u32,
    pub(super) detonations: u32,
    pub(super) impulses_applied: u32,
    pub(super) fragments_spawned: u32,
    pub(super) fragments_expired: u32,
    pub(super) erased: u32,
    pub(super) spawned: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

/// Gameplay events accumulated between two steps
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct EventCounters {
    pub(crate) detonations: u32,
    pub(crate) impulses_applied: u32,
    pub(crate) fragments_spawned: u32,
    pub(crate) erased: u32,
    pub(crate) spawned: u32,
}

impl EventCounters {
    pub(crate) fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn dynamic_bodies(&self) -> u32 { self.dynamic_bodies }
    #[wasm_bindgen(getter)]
    pub fn pending_removals(&self) -> u32 { self.pending_removals }
    #[wasm_bindgen(getter)]
    pub fn detonations(&self) -> u32 { self.detonations }
    #[wasm_bindgen(getter)]
    pub fn impulses_applied(&self) -> u32 { self.impulses_applied }
    #[wasm_bindgen(getter)]
    pub fn fragments_spawned(&self) -> u32 { self.fragments_spawned }
    #[wasm_bindgen(getter)]
    pub fn fragments_expired(&self) -> u32 { self.fragments_expired }
    #[wasm_bindgen(getter)]
    pub fn erased(&self) -> u32 { self.erased }
    #[wasm_bindgen(getter)]
    pub fn spawned(&self) -> u32 { self.spawned }
}
