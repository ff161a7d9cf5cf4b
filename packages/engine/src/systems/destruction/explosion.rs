//! Explosion - radial impulse with linear falloff
//!
//! Split in two passes so the maths is testable without a live scene:
//! [`plan_explosion`] reads bodies and returns one [`BlastImpulse`] per target,
//! [`apply_explosion`] pushes those impulses into the scene.

use rand::Rng;

use crate::rigid_body::{Body, BodyId, Vec2};
use crate::scene::Scene;

/// Distances below this are clamped so a body sitting on the origin
/// gets a finite push.
pub const MIN_BLAST_DISTANCE: f32 = 1.0;

/// One blast, consumed immediately
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExplosionRequest {
    pub origin: Vec2,
    pub force: f32,
    pub radius: f32,
}

/// The push a single body receives from a blast
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlastImpulse {
    pub body: BodyId,
    /// Unit vector from the origin to the body (zero if they coincide)
    pub direction: Vec2,
    /// Clamped distance used for the falloff
    pub distance: f32,
    /// `1 - distance / radius`, in `(0, 1)`
    pub falloff: f32,
    /// `force * falloff * mass`
    pub magnitude: f32,
    /// Added to the body's angular velocity
    pub spin: f32,
}

impl BlastImpulse {
    #[inline]
    pub fn vector(&self) -> Vec2 {
        self.direction * self.magnitude
    }
}

/// Linear falloff, or `None` when `distance` is at or beyond the radius.
#[inline]
pub fn falloff(distance: f32, radius: f32) -> Option<f32> {
    let d = distance.max(MIN_BLAST_DISTANCE);
    if d >= radius {
        return None;
    }
    Some(1.0 - d / radius)
}

/// Compute the impulse for every dynamic body inside the blast radius.
///
/// `exclude` keeps the detonating weapon out of its own target set.
/// `spin_chaos` scales the random angular kick (`uniform(-0.5, 0.5) * spin_chaos * falloff`).
pub fn plan_explosion<R: Rng + ?Sized>(
    bodies: &[Body],
    request: &ExplosionRequest,
    exclude: Option<BodyId>,
    spin_chaos: f32,
    rng: &mut R,
) -> Vec<BlastImpulse> {
    let mut impulses = Vec::new();
    for body in bodies {
        if body.is_static || Some(body.id) == exclude {
            continue;
        }

        let offset = body.pos - request.origin;
        let raw_distance = offset.length();
        // `f32::max` would turn a NaN position into the minimum distance
        if !raw_distance.is_finite() {
            continue;
        }
        let distance = raw_distance.max(MIN_BLAST_DISTANCE);
        let Some(falloff) = falloff(distance, request.radius) else {
            continue;
        };
        let magnitude = request.force * falloff * body.mass;
        if !magnitude.is_finite() {
            continue;
        }

        impulses.push(BlastImpulse {
            body: body.id,
            direction: offset.normalize(),
            distance,
            falloff,
            magnitude,
            spin: rng.gen_range(-0.5f32..0.5) * spin_chaos * falloff,
        });
    }
    impulses
}

/// Apply planned impulses at each body's center. Bodies that disappeared
/// since planning are skipped. Returns how many were applied.
pub fn apply_explosion(scene: &mut Scene, impulses: &[BlastImpulse]) -> usize {
    let mut applied = 0;
    for impulse in impulses {
        let Some(body) = scene.get_mut(impulse.body) else {
            continue;
        };
        body.apply_force(impulse.vector());
        let spun = body.angular_vel + impulse.spin;
        body.set_angular_velocity(spun);
        applied += 1;
    }
    applied
}

/// Plan and apply in one go.
pub fn explode<R: Rng + ?Sized>(
    scene: &mut Scene,
    request: &ExplosionRequest,
    exclude: Option<BodyId>,
    spin_chaos: f32,
    rng: &mut R,
) -> Vec<BlastImpulse> {
    let impulses = plan_explosion(scene.bodies(), request, exclude, spin_chaos, rng);
    apply_explosion(scene, &impulses);
    impulses
}
