//! Scene - the registry of live bodies plus its clock and removal timers
//!
//! Stands in for the physics collaborator: bodies are integrated with a
//! plain Euler step (no collision detection, no constraint solving).

mod registry;
mod schedule;

pub use registry::{Scene, StepResult};
pub use schedule::{RemovalSchedule, ScheduledRemoval, TaskId};
