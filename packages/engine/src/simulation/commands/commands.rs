use crate::destruction::{self, DetonationReport, PointerOutcome};
use crate::domain::WeaponKind;
use crate::rigid_body::{BodyId, Vec2};

use super::SandboxCore;

pub(super) fn pointer_down(core: &mut SandboxCore, x: f32, y: f32) -> PointerOutcome {
    let outcome = core
        .tools
        .on_pointer_down(&mut core.scene, &core.config, Vec2::new(x, y), &mut core.rng);

    match outcome {
        PointerOutcome::Spawned(_) => core.events.spawned += 1,
        PointerOutcome::Erased(_) => core.events.erased += 1,
        PointerOutcome::Missed => {}
    }
    outcome
}

pub(super) fn place_weapon(core: &mut SandboxCore, x: f32, y: f32, kind: WeaponKind) -> BodyId {
    let pos = core.tools.placement_point(Vec2::new(x, y));
    destruction::place_weapon(&mut core.scene, &core.config, pos, kind, core.tools.size())
}

pub(super) fn tap(core: &mut SandboxCore, x: f32, y: f32) -> Option<DetonationReport> {
    let point = Vec2::new(x, y);
    let report = destruction::on_tap_detect(&mut core.scene, &core.config, point, &mut core.rng)?;
    record_detonation(core, &report);
    Some(report)
}

pub(super) fn detonate(core: &mut SandboxCore, id: BodyId) -> Option<DetonationReport> {
    let report = destruction::detonate(&mut core.scene, &core.config, id, &mut core.rng)?;
    record_detonation(core, &report);
    Some(report)
}

fn record_detonation(core: &mut SandboxCore, report: &DetonationReport) {
    core.events.detonations += 1;
    core.events.impulses_applied += report.impulses.len() as u32;
    core.events.fragments_spawned += report.fragments.len() as u32;
}

pub(super) fn clear(core: &mut SandboxCore) -> usize {
    let cancelled = core.scene.pending_removals();
    let removed = core.scene.clear_dynamic();
    log::info!("cleared {removed} bodies, cancelled {cancelled} pending removals");
    removed
}

pub(super) fn resize(core: &mut SandboxCore, width: f32, height: f32) {
    core.width = width.max(1.0);
    core.height = height.max(1.0);
    core.scene
        .set_bounds(core.width, core.height, core.config.wall_thickness);
    log::info!("viewport resized to {}x{}", core.width, core.height);
}
