use super::*;
use crate::domain::BodyKind;

const W: f32 = 800.0;
const H: f32 = 600.0;
const FRAME_MS: f32 = 16.0;

fn sandbox() -> SandboxCore {
    SandboxCore::with_seed(W, H, 42)
}

fn spawn_rect(core: &mut SandboxCore, x: f32, y: f32) -> BodyId {
    core.set_mode(ToolMode::Spawn);
    core.set_shape(ShapeKind::Rectangle);
    match core.pointer_down(x, y) {
        PointerOutcome::Spawned(id) => id,
        other => panic!("expected a spawn, got {other:?}"),
    }
}

#[test]
fn new_sandbox_has_only_walls() {
    let core = sandbox();
    assert_eq!(core.body_count(), 4);
    assert_eq!(core.dynamic_body_count(), 0);
    assert_eq!(core.scene().static_count(), 4);
    assert_eq!(core.mode(), ToolMode::Spawn);
    assert_eq!(core.shape(), ShapeKind::Rectangle);
    assert_eq!(core.gravity(), Vec2::new(0.0, 1.0));
}

#[test]
fn tnt_tap_blasts_neighbours_and_leaves_debris() {
    let mut core = sandbox();
    let near = spawn_rect(&mut core, 200.0, 100.0);
    let far = spawn_rect(&mut core, 401.0, 100.0);
    let tnt = core.place_weapon(100.0, 100.0, WeaponKind::Tnt);

    let report = core.tap(100.0, 100.0).expect("tnt under the pointer");

    assert_eq!(report.weapon, tnt);
    assert_eq!(report.kind, WeaponKind::Tnt);
    assert!(!core.scene().contains(tnt));
    assert_eq!(report.fragments.len(), 12);
    assert_eq!(core.dynamic_body_count(), 2 + 12);
    assert_eq!(core.pending_removals(), 12);

    let hit = report
        .impulses
        .iter()
        .find(|i| i.body == near)
        .expect("body at distance 100 is inside the radius");
    assert!(hit.magnitude > 0.0);
    assert!(hit.vector().x > 0.0, "push points away from the origin");
    assert!(report.impulses.iter().all(|i| i.body != far));

    let pushed = core.scene().get(near).unwrap().force;
    assert!(pushed.x > 0.0);
    assert_eq!(core.scene().get(far).unwrap().force, Vec2::zero());
}

#[test]
fn fragments_are_not_caught_in_their_own_blast() {
    let mut core = sandbox();
    core.place_weapon(300.0, 300.0, WeaponKind::Tnt);
    let report = core.tap(300.0, 300.0).unwrap();
    for id in &report.fragments {
        assert!(report.impulses.iter().all(|i| i.body != *id));
    }
}

#[test]
fn grenade_and_bomb_leave_no_debris() {
    let mut core = sandbox();
    core.place_weapon(200.0, 200.0, WeaponKind::Grenade);
    core.place_weapon(500.0, 200.0, WeaponKind::Bomb);

    assert!(core.tap(200.0, 200.0).unwrap().fragments.is_empty());
    assert!(core.tap(500.0, 200.0).unwrap().fragments.is_empty());
    assert_eq!(core.dynamic_body_count(), 0);
    assert_eq!(core.pending_removals(), 0);
}

#[test]
fn weapon_detonates_only_once() {
    let mut core = sandbox();
    let bomb = core.place_weapon(400.0, 300.0, WeaponKind::Bomb);

    assert!(core.detonate(bomb).is_some());
    assert!(core.detonate(bomb).is_none());
    assert!(core.tap(400.0, 300.0).is_none());
}

#[test]
fn tap_on_plain_shape_does_nothing() {
    let mut core = sandbox();
    let id = spawn_rect(&mut core, 400.0, 300.0);
    assert!(core.tap(400.0, 300.0).is_none());
    assert!(core.scene().contains(id));
    assert!(core.tap(10.0, 10.0).is_none());
}

#[test]
fn snapped_spawn_lands_on_grid() {
    let mut core = sandbox();
    core.set_snap_enabled(true);
    let id = spawn_rect(&mut core, 37.0, 53.0);
    assert_eq!(core.scene().get(id).unwrap().pos, Vec2::new(40.0, 60.0));

    let bomb = core.place_weapon(37.0, 53.0, WeaponKind::Bomb);
    assert_eq!(core.scene().get(bomb).unwrap().pos, Vec2::new(40.0, 60.0));
}

#[test]
fn erase_removes_nearest_newest_and_misses_cleanly() {
    let mut core = sandbox();
    let older = spawn_rect(&mut core, 300.0, 300.0);
    let newer = spawn_rect(&mut core, 310.0, 300.0);

    core.set_mode(ToolMode::Erase);
    assert_eq!(core.pointer_down(600.0, 500.0), PointerOutcome::Missed);
    assert_eq!(core.dynamic_body_count(), 2);

    assert_eq!(core.pointer_down(305.0, 300.0), PointerOutcome::Erased(newer));
    assert!(core.scene().contains(older));
    assert_eq!(core.body_count(), 5);
}

#[test]
fn erase_never_touches_walls() {
    let mut core = sandbox();
    core.set_mode(ToolMode::Erase);
    // Center of the floor wall
    assert_eq!(core.pointer_down(W / 2.0, H + 40.0), PointerOutcome::Missed);
    assert_eq!(core.scene().static_count(), 4);
}

#[test]
fn clear_keeps_walls_and_cancels_timers() {
    let mut core = sandbox();
    for i in 0..4 {
        spawn_rect(&mut core, 100.0 + i as f32 * 100.0, 200.0);
    }
    core.place_weapon(600.0, 400.0, WeaponKind::Tnt);
    assert_eq!(core.dynamic_body_count(), 5);

    let removed = core.clear();
    assert_eq!(removed, 5);
    assert_eq!(core.body_count(), 4);
    assert!(core.scene().bodies().iter().all(|b| b.is_static));

    core.place_weapon(300.0, 300.0, WeaponKind::Tnt);
    core.tap(300.0, 300.0).unwrap();
    assert_eq!(core.pending_removals(), 12);
    core.clear();
    assert_eq!(core.pending_removals(), 0);
    assert_eq!(core.body_count(), 4);
}

#[test]
fn fragments_expire_within_their_lifetime() {
    let mut core = sandbox();
    core.place_weapon(400.0, 300.0, WeaponKind::Tnt);
    core.tap(400.0, 300.0).unwrap();

    let mut expired = 0;
    while core.now_ms() < 14_000.0 + f64::from(FRAME_MS) {
        expired += core.step(FRAME_MS).expired.len();
    }

    assert_eq!(expired, 12);
    assert_eq!(core.pending_removals(), 0);
    assert_eq!(core.dynamic_body_count(), 0);
}

#[test]
fn fragments_outlive_the_minimum_lifetime() {
    let mut core = sandbox();
    core.place_weapon(400.0, 300.0, WeaponKind::Tnt);
    core.tap(400.0, 300.0).unwrap();

    while core.now_ms() + f64::from(FRAME_MS) < 8_000.0 {
        assert!(core.step(FRAME_MS).expired.is_empty());
    }
    assert_eq!(core.dynamic_body_count(), 12);
}

#[test]
fn gravity_toggle_controls_falling() {
    let mut core = sandbox();
    let id = spawn_rect(&mut core, 400.0, 100.0);

    core.set_gravity_enabled(false);
    core.step(FRAME_MS);
    assert_eq!(core.scene().get(id).unwrap().pos.y, 100.0);

    core.set_gravity_enabled(true);
    for _ in 0..10 {
        core.step(FRAME_MS);
    }
    assert!(core.scene().get(id).unwrap().pos.y > 100.0);
}

#[test]
fn infinite_size_never_reaches_the_blast() {
    let mut core = sandbox();
    core.set_size(f32::INFINITY);
    let id = spawn_rect(&mut core, 400.0, 300.0);
    core.set_size(50.0);
    core.place_weapon(400.0, 250.0, WeaponKind::Grenade);

    let report = core.tap(400.0, 250.0).unwrap();
    core.step(FRAME_MS);

    let body = core.scene().get(id).unwrap();
    assert!(body.mass.is_finite());
    assert!(body.pos.x.is_finite() && body.pos.y.is_finite());
    assert!(report.impulses.iter().all(|i| i.vector().x.is_finite() && i.vector().y.is_finite()));
}

#[test]
fn bad_dt_is_ignored() {
    let mut core = sandbox();
    core.step(f32::NAN);
    core.step(-16.0);
    assert_eq!(core.now_ms(), 0.0);
    assert_eq!(core.frame(), 2);
}

#[test]
fn perf_stats_count_step_events() {
    let mut core = sandbox();
    core.enable_perf_metrics(true);

    spawn_rect(&mut core, 200.0, 300.0);
    core.place_weapon(300.0, 300.0, WeaponKind::Tnt);
    let report = core.tap(300.0, 300.0).unwrap();
    core.step(FRAME_MS);

    let stats = core.get_perf_stats();
    assert_eq!(stats.spawned(), 1);
    assert_eq!(stats.detonations(), 1);
    assert_eq!(stats.fragments_spawned(), 12);
    assert_eq!(stats.impulses_applied(), report.impulses.len() as u32);
    assert_eq!(stats.body_count(), 4 + 1 + 12);
    assert_eq!(stats.pending_removals(), 12);
    assert!(stats.step_ms() >= 0.0);

    core.step(FRAME_MS);
    assert_eq!(core.get_perf_stats().detonations(), 0);

    core.enable_perf_metrics(false);
    assert_eq!(core.get_perf_stats().body_count(), 0);
}

#[test]
fn load_config_rejects_garbage_and_resets_on_success() {
    let mut core = sandbox();
    spawn_rect(&mut core, 200.0, 200.0);

    assert!(matches!(core.load_config_json("{ nope"), Err(ConfigError::Parse(_))));
    assert!(matches!(
        core.load_config_json(r#"{ "pick_radius": -1 }"#),
        Err(ConfigError::Invalid { field: "pick_radius", .. })
    ));
    assert_eq!(core.dynamic_body_count(), 1, "rejected config leaves the scene alone");

    let json = r#"{
        "snap_step": 10,
        "weapons": { "tnt": { "force": 0.07, "radius": 300, "fragments": 3 } }
    }"#;
    core.load_config_json(json).unwrap();
    assert_eq!(core.dynamic_body_count(), 0);
    assert_eq!(core.scene().static_count(), 4);
    assert_eq!(core.config().snap_step, 10.0);

    core.set_snap_enabled(true);
    let id = spawn_rect(&mut core, 37.0, 53.0);
    assert_eq!(core.scene().get(id).unwrap().pos, Vec2::new(40.0, 50.0));

    core.place_weapon(400.0, 300.0, WeaponKind::Tnt);
    assert_eq!(core.tap(400.0, 300.0).unwrap().fragments.len(), 3);
}

#[test]
fn resize_rebuilds_walls() {
    let mut core = sandbox();
    let old = core.scene().bound_ids().to_vec();
    spawn_rect(&mut core, 100.0, 100.0);

    core.resize(1024.0, 768.0);

    let walls = core.scene().bound_ids().to_vec();
    assert_eq!(walls.len(), 4);
    assert!(old.iter().all(|id| !core.scene().contains(*id)));
    assert_eq!(core.scene().static_count(), 4);
    assert_eq!(core.dynamic_body_count(), 1);

    let right = core.scene().get(walls[1]).unwrap();
    assert_eq!(right.pos.x, 1024.0 + 40.0);
    let floor = core.scene().get(walls[2]).unwrap();
    assert_eq!(floor.pos.y, 768.0 + 40.0);
}

#[test]
fn snapshot_lists_every_body_in_order() {
    let mut core = sandbox();
    let rect = spawn_rect(&mut core, 100.0, 100.0);
    let bomb = core.place_weapon(300.0, 100.0, WeaponKind::Bomb);

    let snap = core.snapshot();
    assert_eq!(snap.len(), 6);
    assert_eq!(snap[4].id, rect);
    assert_eq!(snap[5].kind, Some(BodyKind::Weapon(WeaponKind::Bomb)));
    assert_eq!(snap[5].id, bomb);

    let json: serde_json::Value = serde_json::from_str(&core.snapshot_json()).unwrap();
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 6);
    assert_eq!(arr[5]["kind"]["type"], "weapon");
    assert_eq!(arr[5]["kind"]["kind"], "bomb");
    assert_eq!(arr[0]["is_static"], true);
}
