//! Weapons - placement, tap detection, detonation
//!
//! Lifecycle of a weapon body:
//!
//! ```text
//! placed --(tap / detonate)--> detonating --(blast + debris queued)--> removed
//! ```
//!
//! The body's destroying flag is the guard on the first edge: whichever call
//! latches it runs the detonation, every later call is a no-op.

use rand::Rng;

use crate::domain::{BodyKind, SandboxConfig, WeaponKind};
use crate::rigid_body::{Body, BodyId, Vec2};
use crate::scene::Scene;

use super::explosion::{explode, BlastImpulse, ExplosionRequest};
use super::fragments::spawn_fragments;

/// Everything a single detonation did to the scene
#[derive(Clone, Debug)]
pub struct DetonationReport {
    pub weapon: BodyId,
    pub kind: WeaponKind,
    pub origin: Vec2,
    pub impulses: Vec<BlastImpulse>,
    pub fragments: Vec<BodyId>,
}

/// Build (but do not insert) a tagged weapon body.
pub fn weapon_body(kind: WeaponKind, pos: Vec2, size: f32, config: &SandboxConfig) -> Body {
    let material = config.weapon_material;
    let density = config.density;
    let tag = Some(BodyKind::Weapon(kind));
    match kind {
        WeaponKind::Bomb => {
            Body::circle(pos, (size / 2.0).max(12.0), material, density, tag)
                .with_color(0x222222ff)
        }
        WeaponKind::Tnt => {
            Body::rect(pos, size * 0.9, (size * 0.6).max(18.0), material, density, tag)
                .with_color(0xb14d2aff)
        }
        WeaponKind::Grenade => {
            Body::circle(pos, (size / 2.2).max(8.0), material, density, tag)
                .with_color(0x2f7a2fff)
        }
    }
}

/// Insert an inert weapon at `pos`. Never fails.
pub fn place_weapon(
    scene: &mut Scene,
    config: &SandboxConfig,
    pos: Vec2,
    kind: WeaponKind,
    size: f32,
) -> BodyId {
    let id = scene.add(weapon_body(kind, pos, size, config));
    log::debug!("placed {} #{} at ({:.1}, {:.1})", kind.name(), id, pos.x, pos.y);
    id
}

/// Detonate the topmost body under `point` if it is an armed weapon.
pub fn on_tap_detect<R: Rng + ?Sized>(
    scene: &mut Scene,
    config: &SandboxConfig,
    point: Vec2,
    rng: &mut R,
) -> Option<DetonationReport> {
    let id = scene.point_query(point)?;
    detonate(scene, config, id, rng)
}

/// Run the detonation of weapon `id`.
///
/// Returns `None` when `id` is absent, static, not a weapon, or already
/// destroying. Otherwise the blast is applied to every other dynamic body,
/// debris is spawned for kinds that carry it, and only then is the weapon
/// body removed.
pub fn detonate<R: Rng + ?Sized>(
    scene: &mut Scene,
    config: &SandboxConfig,
    id: BodyId,
    rng: &mut R,
) -> Option<DetonationReport> {
    let body = scene.get_mut(id)?;
    if body.is_static {
        return None;
    }
    let kind = body.kind()?.weapon()?;
    if !body.mark_destroying() {
        return None;
    }
    let origin = body.pos;

    let spec = config.weapons.spec(kind);
    let request = ExplosionRequest { origin, force: spec.force, radius: spec.radius };
    let impulses = explode(scene, &request, Some(id), config.spin_chaos, rng);

    let fragments = if spec.fragments > 0 {
        spawn_fragments(scene, &config.fragments, config.density, origin, spec.fragments, rng)
    } else {
        Vec::new()
    };

    scene.remove(id);

    log::debug!(
        "{} #{} detonated: {} bodies hit, {} fragments",
        kind.name(),
        id,
        impulses.len(),
        fragments.len()
    );

    Some(DetonationReport { weapon: id, kind, origin, impulses, fragments })
}
