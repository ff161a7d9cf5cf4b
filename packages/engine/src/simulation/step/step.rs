use crate::scene::StepResult;

use super::{SandboxCore, StepTimer};

pub(super) fn step(core: &mut SandboxCore, dt_ms: f32) -> StepResult {
    let perf_on = core.perf_enabled;
    if perf_on {
        core.perf_stats.reset();
    }
    let step_start = StepTimer::start_if(perf_on);

    let dt = if dt_ms.is_finite() { dt_ms.max(0.0) } else { 0.0 };
    let gravity = core.gravity() * core.config.gravity_scale;

    let result = core.scene.step(dt, gravity);
    for id in &result.expired {
        log::trace!("fragment #{id} expired");
    }

    core.frame += 1;

    let events = core.events.take();
    if let Some(t0) = step_start {
        let stats = &mut core.perf_stats;
        stats.step_ms = t0.elapsed_ms();
        stats.body_count = core.scene.len() as u32;
        stats.dynamic_bodies = core.scene.dynamic_count() as u32;
        stats.pending_removals = core.scene.pending_removals() as u32;
        stats.fragments_expired = result.expired.len() as u32;
        stats.detonations = events.detonations;
        stats.impulses_applied = events.impulses_applied;
        stats.fragments_spawned = events.fragments_spawned;
        stats.erased = events.erased;
        stats.spawned = events.spawned;
    }

    result
}
