//! RigidBody - the body handle shared with the physics collaborator
//!
//! Bodies store their geometry in local coordinates (centered on `pos`).
//! The destruction core only touches the fields the collaborator exposes:
//! position, velocity, angular velocity, mass, the static flag and the kind tag.

mod body;
mod vec2;

pub use body::{Body, BodyId, Shape};
pub use vec2::Vec2;
