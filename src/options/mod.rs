//! Centralized wall configuration with TOML preset support.
//!
//! All tweakable settings (camera projection, grid spacing, tilt dynamics,
//! input source) are consolidated here. Options serialize to/from TOML so
//! hosts can ship wall presets as files.

mod camera;
mod grid;
mod input;
mod tilt;

use std::path::Path;

pub use camera::{CameraOptions, ProjectionKind};
pub use grid::GridOptions;
pub use input::{InputModeConfig, InputOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use tilt::TiltOptions;

use crate::error::WallError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[tilt]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Camera projection parameters.
    pub camera: CameraOptions,
    /// Grid layout parameters.
    pub grid: GridOptions,
    /// Pointer influence parameters.
    pub tilt: TiltOptions,
    /// Input source selection.
    #[schemars(skip)]
    pub input: InputOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Check every precondition the core relies on instead of validating.
    ///
    /// The layout and tilt passes assume positive spacing, radius, and
    /// projection extents, and a smoothing coefficient in (0, 1]; a value
    /// outside these ranges is rejected here, at configuration time.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::Config`] naming the first offending field.
    pub fn validate(&self) -> Result<(), WallError> {
        let check = |ok: bool, msg: &str| {
            if ok {
                Ok(())
            } else {
                Err(WallError::Config(msg.to_owned()))
            }
        };
        check(self.grid.spacing > 0.0, "grid.spacing must be positive")?;
        check(
            self.tilt.influence_radius > 0.0,
            "tilt.influence_radius must be positive",
        )?;
        check(self.tilt.max_tilt >= 0.0, "tilt.max_tilt must not be negative")?;
        check(
            self.tilt.smoothing > 0.0 && self.tilt.smoothing <= 1.0,
            "tilt.smoothing must be in (0, 1]",
        )?;
        check(
            self.camera.fovy > 0.0 && self.camera.fovy < 180.0,
            "camera.fovy must be in (0, 180)",
        )?;
        check(self.camera.distance > 0.0, "camera.distance must be positive")?;
        check(
            self.camera.frustum_height > 0.0,
            "camera.frustum_height must be positive",
        )
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::Io`] when the file cannot be read and
    /// [`WallError::OptionsParse`] when it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, WallError> {
        let content = std::fs::read_to_string(path).map_err(WallError::Io)?;
        toml::from_str(&content).map_err(|e| WallError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`WallError::OptionsParse`] on serialization failure and
    /// [`WallError::Io`] when the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), WallError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| WallError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(WallError::Io)?;
        }
        std::fs::write(path, content).map_err(WallError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Projection;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[grid]
spacing = 2.5
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.grid.spacing, 2.5);
        // Everything else should be default
        assert_eq!(opts.tilt.smoothing, 0.15);
        assert_eq!(opts.camera.kind, ProjectionKind::Perspective);
        assert_eq!(opts.input.mode, InputModeConfig::Auto);
    }

    #[test]
    fn defaults_validate() {
        assert!(Options::default().validate().is_ok());
    }

    #[test]
    fn zero_spacing_is_rejected() {
        let mut opts = Options {
            grid: GridOptions { spacing: 0.0 },
            ..Options::default()
        };
        assert!(opts.validate().is_err());
        opts.grid.spacing = -1.5;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn out_of_range_smoothing_is_rejected() {
        let mut opts = Options {
            tilt: TiltOptions {
                smoothing: 0.0,
                ..TiltOptions::default()
            },
            ..Options::default()
        };
        assert!(opts.validate().is_err());
        opts.tilt.smoothing = 1.0;
        assert!(opts.validate().is_ok());
        opts.tilt.smoothing = 1.01;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn projection_follows_kind() {
        let mut opts = Options::default();
        assert_eq!(
            opts.camera.projection(),
            Projection::Perspective {
                fovy: 75.0,
                distance: 15.0
            }
        );
        opts.camera.kind = ProjectionKind::Orthographic;
        assert_eq!(
            opts.camera.projection(),
            Projection::Orthographic {
                frustum_height: 20.0
            }
        );
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value = serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        // UI-exposed sections should be present
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("grid"));
        assert!(props.contains_key("tilt"));

        // Input-mode selection is a host decision, not a UI slider
        assert!(!props.contains_key("input"));
    }
}
