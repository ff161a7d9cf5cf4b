use serde::Serialize;

use crate::domain::{BodyKind, MaterialSpec};

use super::vec2::Vec2;

/// Scene-unique body handle. 0 is never assigned.
pub type BodyId = u32;

/// Velocity retained per step (air drag)
const AIR_FRICTION: f32 = 0.99;

/// Collision geometry in local coordinates (centered on `pos`)
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Rect { width: f32, height: f32 },
    Circle { radius: f32 },
}

impl Shape {
    pub fn area(&self) -> f32 {
        match *self {
            Shape::Rect { width, height } => width * height,
            Shape::Circle { radius } => std::f32::consts::PI * radius * radius,
        }
    }
}

/// A rigid body as seen by the destruction core
#[derive(Clone, Debug)]
pub struct Body {
    // === Physics State ===
    /// Assigned by the scene on insertion
    pub id: BodyId,
    /// World position (center of mass)
    pub pos: Vec2,
    /// Velocity (pixels per step)
    pub velocity: Vec2,
    /// Force accumulated since the last step
    pub force: Vec2,
    /// Rotation angle (radians)
    pub angle: f32,
    /// Angular velocity (radians per step)
    pub angular_vel: f32,
    pub mass: f32,
    pub is_static: bool,

    // === Shape / material ===
    pub shape: Shape,
    pub friction: f32,
    pub restitution: f32,
    /// RGBA
    pub color: u32,

    kind: Option<BodyKind>,
    destroying: bool,
}

impl Body {
    /// Dynamic rectangle. Mass is `area * density`.
    pub fn rect(
        pos: Vec2,
        width: f32,
        height: f32,
        material: MaterialSpec,
        density: f32,
        kind: Option<BodyKind>,
    ) -> Self {
        Self::new(pos, Shape::Rect { width, height }, material, density, kind)
    }

    /// Dynamic circle. Mass is `area * density`.
    pub fn circle(
        pos: Vec2,
        radius: f32,
        material: MaterialSpec,
        density: f32,
        kind: Option<BodyKind>,
    ) -> Self {
        Self::new(pos, Shape::Circle { radius }, material, density, kind)
    }

    /// Immovable rectangle used for the scene walls
    pub fn static_rect(pos: Vec2, width: f32, height: f32) -> Self {
        let mut body = Self::new(
            pos,
            Shape::Rect { width, height },
            MaterialSpec { friction: 1.0, restitution: 0.0 },
            1.0,
            Some(BodyKind::Bounds),
        );
        body.is_static = true;
        body.color = 0x2a2a2aff;
        body
    }

    fn new(
        pos: Vec2,
        shape: Shape,
        material: MaterialSpec,
        density: f32,
        kind: Option<BodyKind>,
    ) -> Self {
        // Mass stays strictly positive
        let mass = (shape.area() * density).max(f32::EPSILON);
        Self {
            id: 0,
            pos,
            velocity: Vec2::zero(),
            force: Vec2::zero(),
            angle: 0.0,
            angular_vel: 0.0,
            mass,
            is_static: false,
            shape,
            friction: material.friction,
            restitution: material.restitution,
            color: 0xffffffff,
            kind,
            destroying: false,
        }
    }

    pub fn with_color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    /// Tag fixed at construction
    #[inline]
    pub fn kind(&self) -> Option<BodyKind> {
        self.kind
    }

    #[inline]
    pub fn is_destroying(&self) -> bool {
        self.destroying
    }

    /// Latch the destroying flag. Returns `true` only for the call that set it.
    pub fn mark_destroying(&mut self) -> bool {
        if self.destroying {
            return false;
        }
        self.destroying = true;
        true
    }

    /// Accumulate a force at the center of mass (consumed by the next step)
    pub fn apply_force(&mut self, force: Vec2) {
        if self.is_static {
            return;
        }
        self.force += force;
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        if self.is_static {
            return;
        }
        self.velocity = velocity;
    }

    pub fn set_angular_velocity(&mut self, value: f32) {
        if self.is_static {
            return;
        }
        self.angular_vel = value;
    }

    /// Point containment against the rotated geometry
    pub fn contains_point(&self, point: Vec2) -> bool {
        let local = (point - self.pos).rotate(-self.angle);
        match self.shape {
            Shape::Rect { width, height } => {
                local.x.abs() <= width * 0.5 && local.y.abs() <= height * 0.5
            }
            Shape::Circle { radius } => local.length_squared() <= radius * radius,
        }
    }

    /// Semi-implicit Euler step. `dt_ms` is the frame delta in milliseconds,
    /// `gravity` is already scaled to pixels per ms².
    pub fn integrate(&mut self, dt_ms: f32, gravity: Vec2) {
        if self.is_static {
            return;
        }
        let dt2 = dt_ms * dt_ms;
        let accel = self.force * (1.0 / self.mass) + gravity;
        self.velocity = (self.velocity + accel * dt2) * AIR_FRICTION;
        self.pos += self.velocity;
        self.angle += self.angular_vel;
        self.angular_vel *= AIR_FRICTION;
        self.force = Vec2::zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAT: MaterialSpec = MaterialSpec { friction: 0.3, restitution: 0.1 };

    #[test]
    fn test_mass_scales_with_area() {
        let small = Body::rect(Vec2::zero(), 10.0, 10.0, MAT, 0.001, None);
        let big = Body::rect(Vec2::zero(), 20.0, 10.0, MAT, 0.001, None);
        assert!((small.mass - 0.1).abs() < 1e-6);
        assert!((big.mass - 2.0 * small.mass).abs() < 1e-6);
    }

    #[test]
    fn test_destroying_latches_once() {
        let mut body = Body::circle(Vec2::zero(), 5.0, MAT, 0.001, None);
        assert!(!body.is_destroying());
        assert!(body.mark_destroying());
        assert!(!body.mark_destroying());
        assert!(body.is_destroying());
    }

    #[test]
    fn test_contains_point_respects_rotation() {
        let mut body = Body::rect(Vec2::new(100.0, 100.0), 40.0, 10.0, MAT, 0.001, None);
        assert!(body.contains_point(Vec2::new(118.0, 100.0)));
        assert!(!body.contains_point(Vec2::new(100.0, 118.0)));

        body.angle = std::f32::consts::FRAC_PI_2;
        assert!(!body.contains_point(Vec2::new(118.0, 100.0)));
        assert!(body.contains_point(Vec2::new(100.0, 118.0)));
    }

    #[test]
    fn test_static_bodies_ignore_forces() {
        let mut wall = Body::static_rect(Vec2::zero(), 80.0, 600.0);
        wall.apply_force(Vec2::new(5.0, 0.0));
        wall.set_angular_velocity(1.0);
        wall.integrate(16.0, Vec2::new(0.0, 0.001));
        assert_eq!(wall.pos, Vec2::zero());
        assert_eq!(wall.angular_vel, 0.0);
        assert_eq!(wall.kind(), Some(BodyKind::Bounds));
    }

    #[test]
    fn test_integrate_consumes_force() {
        let mut body = Body::circle(Vec2::zero(), 10.0, MAT, 0.001, None);
        body.apply_force(Vec2::new(body.mass, 0.0));
        body.integrate(1.0, Vec2::zero());
        assert!(body.pos.x > 0.0);
        assert_eq!(body.force, Vec2::zero());
    }
}
