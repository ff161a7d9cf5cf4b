use crate::domain::{ShapeKind, ToolMode};

use super::perf_stats::PerfStats;
use super::SandboxCore;

pub(super) fn set_mode(core: &mut SandboxCore, mode: ToolMode) {
    core.tools.set_mode(mode);
}

pub(super) fn set_shape(core: &mut SandboxCore, shape: ShapeKind) {
    core.tools.set_shape_kind(shape);
}

pub(super) fn set_snap_enabled(core: &mut SandboxCore, enabled: bool) {
    core.tools.set_snap_enabled(enabled);
}

pub(super) fn set_size(core: &mut SandboxCore, size: f32) {
    core.tools.set_size(size);
}

pub(super) fn set_gravity(core: &mut SandboxCore, x: f32, y: f32) {
    core.gravity_x = x;
    core.gravity_y = y;
}

pub(super) fn set_gravity_enabled(core: &mut SandboxCore, enabled: bool) {
    core.gravity_x = 0.0;
    core.gravity_y = if enabled { 1.0 } else { 0.0 };
}

pub(super) fn enable_perf_metrics(core: &mut SandboxCore, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(core: &SandboxCore) -> PerfStats {
    core.perf_stats.clone()
}
