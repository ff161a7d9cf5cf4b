//! Destruction - tools, weapons, explosions and debris
//!
//! Every operation takes the [`Scene`](crate::scene::Scene) it acts on and the
//! RNG it draws from explicitly; nothing here holds global state.

mod explosion;
mod fragments;
mod tools;
mod weapons;

pub use explosion::{
    apply_explosion, explode, falloff, plan_explosion, BlastImpulse, ExplosionRequest,
    MIN_BLAST_DISTANCE,
};
pub use fragments::spawn_fragments;
pub use tools::{erase_at, shape_body, snap_value, PointerOutcome, ToolController, MAX_TOOL_SIZE};
pub use weapons::{detonate, on_tap_detect, place_weapon, weapon_body, DetonationReport};

use rand::Rng;

/// Opaque random RGBA colour
#[inline]
pub(crate) fn random_color<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    (rng.gen_range(0..0x0100_0000u32) << 8) | 0xff
}
