//! Closed kind enums shared by the tools, the weapons and the host facade.
//!
//! Every body in the scene is tagged with at most one [`BodyKind`]. Dispatch on
//! the tag is always an exhaustive `match`, never a string comparison.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// How a pointer-down on the canvas is interpreted
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolMode {
    Spawn,
    Erase,
}

/// Building shapes selectable from the toolbar
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Beam,
    Glass,
    Trampoline,
}

/// Placeable explosives
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeaponKind {
    Bomb,
    Tnt,
    Grenade,
}

/// Tag carried by a body. Set once when the body is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "kind", rename_all = "lowercase")]
pub enum BodyKind {
    Shape(ShapeKind),
    Weapon(WeaponKind),
    Fragment,
    Bounds,
}

impl Default for ToolMode {
    fn default() -> Self {
        ToolMode::Spawn
    }
}

impl Default for ShapeKind {
    fn default() -> Self {
        ShapeKind::Rectangle
    }
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Beam => "beam",
            ShapeKind::Glass => "glass",
            ShapeKind::Trampoline => "trampoline",
        }
    }
}

impl WeaponKind {
    pub const ALL: [WeaponKind; 3] = [WeaponKind::Bomb, WeaponKind::Tnt, WeaponKind::Grenade];

    pub fn name(self) -> &'static str {
        match self {
            WeaponKind::Bomb => "bomb",
            WeaponKind::Tnt => "tnt",
            WeaponKind::Grenade => "grenade",
        }
    }
}

impl BodyKind {
    #[inline]
    pub fn weapon(self) -> Option<WeaponKind> {
        match self {
            BodyKind::Weapon(kind) => Some(kind),
            BodyKind::Shape(_) | BodyKind::Fragment | BodyKind::Bounds => None,
        }
    }

    #[inline]
    pub fn is_weapon(self) -> bool {
        self.weapon().is_some()
    }
}
