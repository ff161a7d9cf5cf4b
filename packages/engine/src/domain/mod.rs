//! Domain - what the sandbox is made of (kinds, tuning)

pub mod config;
pub mod kinds;

pub use config::{ConfigError, FragmentSpec, MaterialSpec, SandboxConfig, WeaponSpec, WeaponTable};
pub use kinds::{BodyKind, ShapeKind, ToolMode, WeaponKind};
