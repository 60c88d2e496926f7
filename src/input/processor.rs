//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns the input-mode state machine and is the only
//! thing sitting between raw platform events and the engine's
//! [`handle_command`](crate::engine::WallEngine::handle_command) path. It
//! filters events that don't belong to the active mode and collapses both
//! input sources (real cursor, gyroscope-derived virtual cursor) into one
//! command vocabulary.

use glam::Vec2;

use super::event::InputEvent;
use super::mode::{DeviceCapabilities, InputMode};
use crate::camera::Viewport;
use crate::options::InputModeConfig;
use crate::tilt::orientation_to_device;

/// Commands the processor emits for the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WallCommand {
    /// The effective pointer moved to a device-pixel position. Emitted for
    /// real cursor moves and for gyroscope samples alike.
    PointerMoved {
        /// Pointer position in device pixels.
        device: Vec2,
    },
    /// The render surface changed size; re-layout is required.
    Resize {
        /// The new viewport.
        viewport: Viewport,
    },
}

/// Converts raw input events into [`WallCommand`]s.
///
/// The mode is decided once at construction from configuration and the
/// host's capability probe; afterwards only the permission gate can move it
/// (and only toward `GyroscopeActive` or the mouse fallback).
///
/// Cursor moves are interpreted in `Mouse` mode and also while the
/// permission gate is still open, so the wall responds even before the user
/// answers the consent prompt. Orientation samples are interpreted only
/// once the gyroscope is active.
#[derive(Debug)]
pub struct InputProcessor {
    mode: InputMode,
}

impl InputProcessor {
    /// Create a processor, deciding the input mode from configuration and
    /// device capabilities.
    #[must_use]
    pub fn new(config: InputModeConfig, caps: DeviceCapabilities) -> Self {
        let mode = InputMode::select(config, caps);
        log::debug!("input mode selected: {mode:?}");
        Self { mode }
    }

    /// The currently active input mode.
    #[must_use]
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Process a raw input event and return zero or one commands.
    ///
    /// `viewport` is needed to place the gyroscope's virtual cursor.
    pub fn handle_event(&mut self, event: InputEvent, viewport: Viewport) -> Option<WallCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::OrientationChanged { beta, gamma } => {
                self.handle_orientation(beta, gamma, viewport)
            }
            InputEvent::Resized { width, height } => Some(WallCommand::Resize {
                viewport: Viewport::new(width, height),
            }),
            InputEvent::PermissionGranted => {
                self.mode = self.mode.resolve_permission(true);
                None
            }
            InputEvent::PermissionDenied => {
                self.mode = self.mode.resolve_permission(false);
                None
            }
        }
    }

    fn handle_cursor_moved(&self, x: f32, y: f32) -> Option<WallCommand> {
        match self.mode {
            InputMode::Mouse | InputMode::GyroscopeAwaitingPermission => {
                Some(WallCommand::PointerMoved {
                    device: Vec2::new(x, y),
                })
            }
            InputMode::Uninitialized | InputMode::GyroscopeActive => None,
        }
    }

    /// Orientation sample — map to a virtual cursor. Partial samples are
    /// dropped silently.
    fn handle_orientation(
        &self,
        beta: Option<f32>,
        gamma: Option<f32>,
        viewport: Viewport,
    ) -> Option<WallCommand> {
        if self.mode != InputMode::GyroscopeActive {
            return None;
        }
        let (beta, gamma) = (beta?, gamma?);
        Some(WallCommand::PointerMoved {
            device: orientation_to_device(beta, gamma, viewport),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    fn gyro_processor() -> InputProcessor {
        InputProcessor::new(
            InputModeConfig::Gyroscope,
            DeviceCapabilities {
                is_mobile: true,
                has_orientation_api: true,
                needs_permission: false,
            },
        )
    }

    #[test]
    fn mouse_mode_passes_cursor_moves_through() {
        let mut p = InputProcessor::new(InputModeConfig::Mouse, DeviceCapabilities::default());
        let cmd = p.handle_event(InputEvent::CursorMoved { x: 10.0, y: 20.0 }, viewport());
        assert_eq!(
            cmd,
            Some(WallCommand::PointerMoved {
                device: Vec2::new(10.0, 20.0)
            })
        );
    }

    #[test]
    fn mouse_mode_ignores_orientation() {
        let mut p = InputProcessor::new(InputModeConfig::Mouse, DeviceCapabilities::default());
        let cmd = p.handle_event(
            InputEvent::OrientationChanged {
                beta: Some(45.0),
                gamma: Some(0.0),
            },
            viewport(),
        );
        assert_eq!(cmd, None);
    }

    #[test]
    fn gyroscope_maps_orientation_to_virtual_cursor() {
        let mut p = gyro_processor();
        assert_eq!(p.mode(), InputMode::GyroscopeActive);
        let cmd = p.handle_event(
            InputEvent::OrientationChanged {
                beta: Some(45.0),
                gamma: Some(0.0),
            },
            viewport(),
        );
        assert_eq!(
            cmd,
            Some(WallCommand::PointerMoved {
                device: Vec2::new(400.0, 375.0)
            })
        );
    }

    #[test]
    fn partial_orientation_sample_is_dropped() {
        let mut p = gyro_processor();
        for (beta, gamma) in [(None, Some(1.0)), (Some(1.0), None), (None, None)] {
            let cmd = p.handle_event(InputEvent::OrientationChanged { beta, gamma }, viewport());
            assert_eq!(cmd, None);
        }
    }

    #[test]
    fn gyroscope_active_ignores_real_cursor() {
        let mut p = gyro_processor();
        let cmd = p.handle_event(InputEvent::CursorMoved { x: 1.0, y: 1.0 }, viewport());
        assert_eq!(cmd, None);
    }

    #[test]
    fn cursor_works_while_permission_gate_is_open() {
        let mut p = InputProcessor::new(
            InputModeConfig::Gyroscope,
            DeviceCapabilities {
                is_mobile: true,
                has_orientation_api: true,
                needs_permission: true,
            },
        );
        assert_eq!(p.mode(), InputMode::GyroscopeAwaitingPermission);
        let cmd = p.handle_event(InputEvent::CursorMoved { x: 5.0, y: 5.0 }, viewport());
        assert!(cmd.is_some());

        // Denial falls back to mouse; cursor keeps working
        assert_eq!(p.handle_event(InputEvent::PermissionDenied, viewport()), None);
        assert_eq!(p.mode(), InputMode::Mouse);
    }

    #[test]
    fn resize_emits_in_any_mode() {
        let mut p = gyro_processor();
        let cmd = p.handle_event(
            InputEvent::Resized {
                width: 400.0,
                height: 300.0,
            },
            viewport(),
        );
        assert_eq!(
            cmd,
            Some(WallCommand::Resize {
                viewport: Viewport::new(400.0, 300.0)
            })
        );
    }
}
