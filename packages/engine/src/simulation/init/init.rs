use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::destruction::ToolController;
use crate::domain::SandboxConfig;
use crate::scene::Scene;

use super::perf_stats::{EventCounters, PerfStats};
use super::SandboxCore;

pub(super) fn create_sandbox_core(
    width: f32,
    height: f32,
    seed: u64,
    config: SandboxConfig,
) -> SandboxCore {
    let mut scene = Scene::new();
    scene.set_bounds(width, height, config.wall_thickness);

    SandboxCore {
        tools: ToolController::new(&config),
        gravity_x: 0.0,
        gravity_y: 1.0,
        config: Arc::new(config),
        scene,
        rng: StdRng::seed_from_u64(seed),
        width,
        height,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        events: EventCounters::default(),
    }
}

/// Swap in new tuning. Mode, shape, snap toggle and slider size survive;
/// the snap step follows the config.
pub(super) fn apply_config(core: &mut SandboxCore, config: SandboxConfig) {
    core.tools.set_snap_step(config.snap_step);
    core.config = Arc::new(config);
    core.scene.clear_dynamic();
    core.scene.set_bounds(core.width, core.height, core.config.wall_thickness);
    log::info!("sandbox config loaded, scene reset");
}
