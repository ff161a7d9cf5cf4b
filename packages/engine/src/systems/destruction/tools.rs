use rand::Rng;

use crate::domain::{BodyKind, MaterialSpec, SandboxConfig, ShapeKind, ToolMode};
use crate::rigid_body::{Body, BodyId, Vec2};
use crate::scene::Scene;

use super::random_color;

const GLASS_COLOR: u32 = 0xadd8e680;

/// Upper bound of the size slider
pub const MAX_TOOL_SIZE: f32 = 1000.0;

/// Result of a pointer-down on the canvas
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerOutcome {
    Spawned(BodyId),
    Erased(BodyId),
    /// Erase found nothing within the pick radius
    Missed,
}

impl PointerOutcome {
    /// Affected body, or 0 for a miss (host-facing encoding)
    pub fn body_id(self) -> BodyId {
        match self {
            PointerOutcome::Spawned(id) | PointerOutcome::Erased(id) => id,
            PointerOutcome::Missed => 0,
        }
    }
}

/// Quantize `v` to the nearest multiple of `step`.
#[inline]
pub fn snap_value(v: f32, step: f32) -> f32 {
    (v / step).round() * step
}

/// Toolbar state: current mode, shape, snapping and size slider.
///
/// Setters are last-write-wins and cannot fail.
#[derive(Clone, Debug)]
pub struct ToolController {
    mode: ToolMode,
    shape: ShapeKind,
    snap_enabled: bool,
    snap_step: f32,
    size: f32,
}

impl ToolController {
    pub fn new(config: &SandboxConfig) -> Self {
        Self {
            mode: ToolMode::default(),
            shape: ShapeKind::default(),
            snap_enabled: false,
            snap_step: config.snap_step,
            size: config.default_size,
        }
    }

    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ToolMode) {
        self.mode = mode;
    }

    pub fn shape_kind(&self) -> ShapeKind {
        self.shape
    }

    pub fn set_shape_kind(&mut self, shape: ShapeKind) {
        self.shape = shape;
    }

    pub fn snap_enabled(&self) -> bool {
        self.snap_enabled
    }

    pub fn set_snap_enabled(&mut self, enabled: bool) {
        self.snap_enabled = enabled;
    }

    pub fn set_snap_step(&mut self, step: f32) {
        if step > 0.0 && step.is_finite() {
            self.snap_step = step;
        }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Size slider. Clamped to `[1, MAX_TOOL_SIZE]`; NaN and infinities are ignored.
    pub fn set_size(&mut self, size: f32) {
        if !size.is_finite() {
            return;
        }
        self.size = size.clamp(1.0, MAX_TOOL_SIZE);
    }

    /// Where a body dropped at `point` actually lands.
    pub fn placement_point(&self, point: Vec2) -> Vec2 {
        if self.snap_enabled {
            Vec2::new(snap_value(point.x, self.snap_step), snap_value(point.y, self.snap_step))
        } else {
            point
        }
    }

    /// Dispatch a pointer-down according to the current mode.
    pub fn on_pointer_down<R: Rng + ?Sized>(
        &self,
        scene: &mut Scene,
        config: &SandboxConfig,
        point: Vec2,
        rng: &mut R,
    ) -> PointerOutcome {
        match self.mode {
            ToolMode::Spawn => {
                let pos = self.placement_point(point);
                let body = shape_body(self.shape, pos, self.size, config, rng);
                let id = scene.add(body);
                log::trace!("spawned {} #{id} at ({:.1}, {:.1})", self.shape.name(), pos.x, pos.y);
                PointerOutcome::Spawned(id)
            }
            ToolMode::Erase => match erase_at(scene, point, config.pick_radius) {
                Some(id) => PointerOutcome::Erased(id),
                None => PointerOutcome::Missed,
            },
        }
    }
}

/// Build (but do not insert) a building shape of `kind`.
pub fn shape_body<R: Rng + ?Sized>(
    kind: ShapeKind,
    pos: Vec2,
    size: f32,
    config: &SandboxConfig,
    rng: &mut R,
) -> Body {
    let material = config.shape_material;
    let density = config.density;
    let tag = Some(BodyKind::Shape(kind));
    match kind {
        ShapeKind::Rectangle => {
            Body::rect(pos, size, (size * 0.6).max(20.0), material, density, tag)
                .with_color(random_color(rng))
        }
        ShapeKind::Circle => {
            Body::circle(pos, (size / 2.0).max(8.0), material, density, tag)
                .with_color(random_color(rng))
        }
        ShapeKind::Beam => {
            Body::rect(pos, size * 2.0, (size * 0.4).max(10.0), material, density, tag)
                .with_color(random_color(rng))
        }
        ShapeKind::Glass => {
            Body::rect(pos, size, (size * 0.4).max(15.0), material, density, tag)
                .with_color(GLASS_COLOR)
        }
        ShapeKind::Trampoline => {
            let bouncy = MaterialSpec { restitution: config.trampoline_restitution, ..material };
            Body::rect(pos, size, (size * 0.3).max(8.0), bouncy, density, tag)
                .with_color(random_color(rng))
        }
    }
}

/// Remove the newest dynamic body whose center is strictly closer than
/// `pick_radius` to `point`. At most one body is removed.
pub fn erase_at(scene: &mut Scene, point: Vec2, pick_radius: f32) -> Option<BodyId> {
    let id = scene
        .dynamic_bodies()
        .rev()
        .find(|b| b.pos.distance(point) < pick_radius)
        .map(|b| b.id)?;
    scene.remove(id);
    log::debug!("erased #{} at ({:.1}, {:.1})", id, point.x, point.y);
    Some(id)
}
