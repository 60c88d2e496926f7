use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Tilt", inline)]
#[serde(default)]
/// Pointer influence parameters.
pub struct TiltOptions {
    /// World-space distance within which instances respond to the pointer.
    #[schemars(title = "Influence Radius", range(min = 0.5, max = 50.0))]
    pub influence_radius: f32,
    /// Tilt scale at the pointer itself, radians per world unit of offset.
    #[schemars(title = "Max Tilt", range(min = 0.0, max = 2.0))]
    pub max_tilt: f32,
    /// Low-pass coefficient in (0, 1]; 1 snaps instantly.
    #[schemars(title = "Smoothing", range(min = 0.01, max = 1.0))]
    pub smoothing: f32,
}

impl Default for TiltOptions {
    fn default() -> Self {
        Self {
            influence_radius: 6.0,
            max_tilt: 0.5,
            smoothing: 0.15,
        }
    }
}
