use serde::Serialize;

use crate::domain::BodyKind;
use crate::rigid_body::{Body, BodyId, Shape};

use super::SandboxCore;

/// What the renderer needs to draw one body
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BodySnapshot {
    pub id: BodyId,
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    pub shape: Shape,
    pub color: u32,
    pub is_static: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<BodyKind>,
}

impl From<&Body> for BodySnapshot {
    fn from(body: &Body) -> Self {
        Self {
            id: body.id,
            x: body.pos.x,
            y: body.pos.y,
            angle: body.angle,
            shape: body.shape,
            color: body.color,
            is_static: body.is_static,
            kind: body.kind(),
        }
    }
}

pub(super) fn snapshot(core: &SandboxCore) -> Vec<BodySnapshot> {
    core.scene.bodies().iter().map(BodySnapshot::from).collect()
}

/// JSON array of body snapshots, oldest body first
pub(super) fn snapshot_json(core: &SandboxCore) -> String {
    match serde_json::to_string(&snapshot(core)) {
        Ok(json) => json,
        Err(e) => {
            log::error!("snapshot serialization failed: {e}");
            "[]".to_string()
        }
    }
}
