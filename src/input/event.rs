/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`WallCommand`](super::WallCommand) values. Hosts
/// translate whatever their platform delivers (winit window events, DOM
/// events) into these before handing them to the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Device orientation sample.
    ///
    /// Platforms may deliver partial samples; an event with a missing beta
    /// or gamma is dropped without any state change.
    OrientationChanged {
        /// Front-back tilt in degrees, in [-180, 180].
        beta: Option<f32>,
        /// Left-right tilt in degrees, in [-90, 90].
        gamma: Option<f32>,
    },
    /// The render surface was resized.
    Resized {
        /// New surface width in physical pixels.
        width: f32,
        /// New surface height in physical pixels.
        height: f32,
    },
    /// The user granted gyroscope access on a permission-gated platform.
    PermissionGranted,
    /// The user denied gyroscope access.
    PermissionDenied,
}
