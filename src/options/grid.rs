use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Grid", inline)]
#[serde(default)]
/// Grid layout parameters.
pub struct GridOptions {
    /// World units between instance centers. Must be positive.
    #[schemars(title = "Spacing", range(min = 0.1, max = 10.0))]
    pub spacing: f32,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self { spacing: 1.5 }
    }
}
