use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::Projection;

/// Which projection the host camera uses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionKind {
    /// Perspective projection (field of view + wall distance).
    Perspective,
    /// Orthographic projection (fixed frustum height).
    Orthographic,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection parameters.
///
/// Only the fields relevant to the selected [`ProjectionKind`] feed the
/// view-volume derivation; `znear`/`zfar` exist for the host renderer to
/// read back when it builds its projection matrix.
pub struct CameraOptions {
    /// Active projection kind.
    pub kind: ProjectionKind,
    /// Vertical field of view in degrees (perspective).
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0))]
    pub fovy: f32,
    /// Eye-to-wall-plane distance in world units (perspective).
    pub distance: f32,
    /// Visible vertical extent in world units (orthographic).
    pub frustum_height: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            kind: ProjectionKind::Perspective,
            fovy: 75.0,
            distance: 15.0,
            frustum_height: 20.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}

impl CameraOptions {
    /// The projection parameters for the active kind.
    #[must_use]
    pub fn projection(&self) -> Projection {
        match self.kind {
            ProjectionKind::Perspective => Projection::Perspective {
                fovy: self.fovy,
                distance: self.distance,
            },
            ProjectionKind::Orthographic => Projection::Orthographic {
                frustum_height: self.frustum_height,
            },
        }
    }
}
