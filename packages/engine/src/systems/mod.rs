//! Systems - bodies, the scene they live in, and what destroys them

pub mod destruction;
pub mod rigid_body;
pub mod scene;
