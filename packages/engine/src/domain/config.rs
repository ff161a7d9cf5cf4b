//! Sandbox tuning
//!
//! Every constant the destruction mechanics depend on lives here so the host
//! can override it with a JSON document. Fields missing from the document keep
//! their defaults (`#[serde(default)]`), so `{}` is a valid config.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::kinds::WeaponKind;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Friction and bounciness handed to the physics collaborator
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    pub friction: f32,
    pub restitution: f32,
}

/// Blast parameters for one weapon kind
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeaponSpec {
    pub force: f32,
    pub radius: f32,
    /// Debris bodies spawned on detonation (0 = plain explosion)
    #[serde(default)]
    pub fragments: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponTable {
    pub bomb: WeaponSpec,
    pub tnt: WeaponSpec,
    pub grenade: WeaponSpec,
}

impl WeaponTable {
    pub fn spec(&self, kind: WeaponKind) -> WeaponSpec {
        match kind {
            WeaponKind::Bomb => self.bomb,
            WeaponKind::Tnt => self.tnt,
            WeaponKind::Grenade => self.grenade,
        }
    }
}

impl Default for WeaponTable {
    fn default() -> Self {
        Self {
            grenade: WeaponSpec { force: 0.12, radius: 100.0, fragments: 0 },
            bomb: WeaponSpec { force: 0.09, radius: 160.0, fragments: 0 },
            tnt: WeaponSpec { force: 0.07, radius: 300.0, fragments: 12 },
        }
    }
}

/// Debris burst tuning. Random draws `u` are uniform in `[0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FragmentSpec {
    /// Side length is `size_min + round(u * size_span)`
    pub size_min: f32,
    pub size_span: f32,
    /// Offset from the origin is `(u - 0.5) * jitter` per axis
    pub jitter: f32,
    /// Horizontal launch speed is `(u - 0.5) * speed_x`
    pub speed_x: f32,
    /// Vertical launch speed is `(u - lift_bias) * speed_y`
    pub speed_y: f32,
    pub lift_bias: f32,
    pub lifetime_min_ms: f64,
    pub lifetime_max_ms: f64,
    pub material: MaterialSpec,
}

impl Default for FragmentSpec {
    fn default() -> Self {
        Self {
            size_min: 6.0,
            size_span: 12.0,
            jitter: 30.0,
            speed_x: 10.0,
            speed_y: 8.0,
            lift_bias: 0.8,
            lifetime_min_ms: 8000.0,
            lifetime_max_ms: 14000.0,
            material: MaterialSpec { friction: 0.3, restitution: 0.2 },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// Erase picks the newest dynamic body whose center is closer than this
    pub pick_radius: f32,
    /// Grid step used when snapping is on
    pub snap_step: f32,
    /// Initial value of the size slider
    pub default_size: f32,
    pub wall_thickness: f32,
    /// Mass per unit area
    pub density: f32,
    /// Scales the gravity vector before integration
    pub gravity_scale: f32,
    /// Peak extra angular velocity an explosion adds at its origin
    pub spin_chaos: f32,
    pub shape_material: MaterialSpec,
    pub weapon_material: MaterialSpec,
    pub trampoline_restitution: f32,
    pub weapons: WeaponTable,
    pub fragments: FragmentSpec,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            pick_radius: 50.0,
            snap_step: 20.0,
            default_size: 50.0,
            wall_thickness: 80.0,
            density: 0.001,
            gravity_scale: 0.001,
            spin_chaos: 0.2,
            shape_material: MaterialSpec { friction: 0.3, restitution: 0.1 },
            weapon_material: MaterialSpec { friction: 0.4, restitution: 0.2 },
            trampoline_restitution: 1.2,
            weapons: WeaponTable::default(),
            fragments: FragmentSpec::default(),
        }
    }
}

impl SandboxConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SandboxConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("pick_radius", self.pick_radius)?;
        positive("snap_step", self.snap_step)?;
        positive("default_size", self.default_size)?;
        positive("density", self.density)?;
        non_negative("wall_thickness", self.wall_thickness)?;

        for kind in WeaponKind::ALL {
            let spec = self.weapons.spec(kind);
            positive(weapon_radius_field(kind), spec.radius)?;
            non_negative(weapon_force_field(kind), spec.force)?;
        }

        let frag = &self.fragments;
        non_negative("fragments.size_min", frag.size_min)?;
        non_negative("fragments.size_span", frag.size_span)?;
        if frag.size_min + frag.size_span <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "fragments.size_min",
                reason: "fragments need a non-zero size".to_string(),
            });
        }
        if !(frag.lifetime_min_ms >= 0.0 && frag.lifetime_min_ms <= frag.lifetime_max_ms) {
            return Err(ConfigError::Invalid {
                field: "fragments.lifetime_min_ms",
                reason: format!(
                    "window [{}, {}] is empty or negative",
                    frag.lifetime_min_ms, frag.lifetime_max_ms
                ),
            });
        }
        Ok(())
    }
}

fn weapon_radius_field(kind: WeaponKind) -> &'static str {
    match kind {
        WeaponKind::Bomb => "weapons.bomb.radius",
        WeaponKind::Tnt => "weapons.tnt.radius",
        WeaponKind::Grenade => "weapons.grenade.radius",
    }
}

fn weapon_force_field(kind: WeaponKind) -> &'static str {
    match kind {
        WeaponKind::Bomb => "weapons.bomb.force",
        WeaponKind::Tnt => "weapons.tnt.force",
        WeaponKind::Grenade => "weapons.grenade.force",
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason: format!("must be > 0, got {value}") })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason: format!("must be >= 0, got {value}") })
    }
}
