//! Input-mode selection state machine.
//!
//! The mode is decided once at startup from the device capabilities (or
//! forced by configuration) and never re-evaluated; the only later
//! transitions are out of the permission gate. Nothing ever returns to
//! `Uninitialized`.
//!
//! Policy for the permission gate: whenever gyroscope activation does not
//! succeed (denied consent, or the gated API turned out to be missing) the
//! machine falls back to [`InputMode::Mouse`] so the wall is never inert.

use crate::options::InputModeConfig;

/// What the startup environment probe found.
///
/// Hosts fill this in from their platform (user agent, API presence); the
/// core only consumes the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceCapabilities {
    /// Whether the device identifies as mobile.
    pub is_mobile: bool,
    /// Whether a device-orientation API exists at all.
    pub has_orientation_api: bool,
    /// Whether the orientation API sits behind an explicit user-consent
    /// gate.
    pub needs_permission: bool,
}

/// Active input mode. Fixed for the engine's lifetime once it leaves
/// [`Uninitialized`](Self::Uninitialized).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// No mode chosen yet; no input is interpreted.
    #[default]
    Uninitialized,
    /// Pointer-move events drive the wall.
    Mouse,
    /// Gyroscope chosen, waiting for the user's consent action.
    GyroscopeAwaitingPermission,
    /// Orientation events drive a virtual cursor.
    GyroscopeActive,
}

impl InputMode {
    /// Decide the startup mode from configuration and device capabilities.
    #[must_use]
    pub fn select(config: InputModeConfig, caps: DeviceCapabilities) -> Self {
        match config {
            InputModeConfig::Mouse => Self::Mouse,
            InputModeConfig::Gyroscope => Self::from_orientation_caps(caps),
            InputModeConfig::Auto => {
                if caps.is_mobile {
                    Self::from_orientation_caps(caps)
                } else {
                    Self::Mouse
                }
            }
        }
    }

    fn from_orientation_caps(caps: DeviceCapabilities) -> Self {
        if !caps.has_orientation_api {
            return Self::Mouse;
        }
        if caps.needs_permission {
            Self::GyroscopeAwaitingPermission
        } else {
            Self::GyroscopeActive
        }
    }

    /// Resolve the permission gate. Out of
    /// [`GyroscopeAwaitingPermission`](Self::GyroscopeAwaitingPermission),
    /// consent activates the gyroscope and anything else falls back to
    /// mouse; in every other state the outcome is ignored.
    #[must_use]
    pub fn resolve_permission(self, granted: bool) -> Self {
        match self {
            Self::GyroscopeAwaitingPermission => {
                if granted {
                    Self::GyroscopeActive
                } else {
                    log::info!("gyroscope permission denied, falling back to mouse input");
                    Self::Mouse
                }
            }
            other => other,
        }
    }
}
