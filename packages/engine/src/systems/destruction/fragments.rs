use rand::Rng;

use crate::domain::{BodyKind, FragmentSpec};
use crate::rigid_body::{Body, BodyId, Vec2};
use crate::scene::Scene;

use super::random_color;

/// Spawn `count` debris rectangles around `origin` and schedule each one for
/// removal after a random lifetime in `[lifetime_min_ms, lifetime_max_ms)`.
///
/// Returns the new body IDs in spawn order.
pub fn spawn_fragments<R: Rng + ?Sized>(
    scene: &mut Scene,
    spec: &FragmentSpec,
    density: f32,
    origin: Vec2,
    count: u32,
    rng: &mut R,
) -> Vec<BodyId> {
    let mut ids = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let width = fragment_side(spec, rng);
        let height = fragment_side(spec, rng);
        let pos = origin
            + Vec2::new(
                (rng.gen::<f32>() - 0.5) * spec.jitter,
                (rng.gen::<f32>() - 0.5) * spec.jitter,
            );

        let tag = Some(BodyKind::Fragment);
        let mut body = Body::rect(pos, width, height, spec.material, density, tag)
            .with_color(random_color(rng));
        body.set_velocity(Vec2::new(
            (rng.gen::<f32>() - 0.5) * spec.speed_x,
            (rng.gen::<f32>() - spec.lift_bias) * spec.speed_y,
        ));

        let id = scene.add(body);
        scene.schedule_removal(id, fragment_lifetime(spec, rng));
        ids.push(id);
    }

    log::trace!("spawned {} fragments at ({:.1}, {:.1})", ids.len(), origin.x, origin.y);
    ids
}

#[inline]
fn fragment_side<R: Rng + ?Sized>(spec: &FragmentSpec, rng: &mut R) -> f32 {
    (spec.size_min + (rng.gen::<f32>() * spec.size_span).round()).max(1.0)
}

#[inline]
fn fragment_lifetime<R: Rng + ?Sized>(spec: &FragmentSpec, rng: &mut R) -> f64 {
    if spec.lifetime_max_ms > spec.lifetime_min_ms {
        rng.gen_range(spec.lifetime_min_ms..spec.lifetime_max_ms)
    } else {
        spec.lifetime_min_ms
    }
}
