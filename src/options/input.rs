use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How the input mode is chosen at startup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum InputModeConfig {
    /// Pick gyroscope on mobile devices with an orientation API, mouse
    /// everywhere else.
    #[default]
    Auto,
    /// Always use the mouse path.
    Mouse,
    /// Prefer the gyroscope path; still falls back to mouse when the
    /// orientation API is missing or consent is denied.
    Gyroscope,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Input source selection.
pub struct InputOptions {
    /// Startup input-mode policy.
    pub mode: InputModeConfig,
}
