//! Viewport and view-volume derivation.
//!
//! The camera itself (position, matrices, GPU resources) belongs to the
//! host renderer. The wall core only reads projection parameters to work
//! out how much world space is visible, which drives grid coverage and the
//! pointer-to-world mapping.

use glam::Vec2;

/// Renderable surface size in physical pixels.
///
/// Replaced wholesale on resize; read-only everywhere else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Surface width in physical pixels.
    pub width: f32,
    /// Surface height in physical pixels.
    pub height: f32,
}

impl Viewport {
    /// Create a viewport from pixel dimensions.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Aspect ratio (width / height).
    #[must_use]
    pub fn aspect(self) -> f32 {
        self.width / self.height
    }
}

/// Projection parameters the core reads from the host camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Perspective projection; the wall plane sits `distance` in front of
    /// the eye.
    Perspective {
        /// Vertical field of view in degrees.
        fovy: f32,
        /// Eye-to-wall-plane distance in world units.
        distance: f32,
    },
    /// Orthographic projection with a fixed vertical extent; the horizontal
    /// extent follows the viewport aspect.
    Orthographic {
        /// Visible vertical extent in world units.
        frustum_height: f32,
    },
}

/// The world-space rectangle visible through the current projection.
///
/// Recomputed whenever the viewport or projection parameters change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewVolume {
    /// Visible width in world units.
    pub width: f32,
    /// Visible height in world units.
    pub height: f32,
}

impl ViewVolume {
    /// Derive the visible extent from projection parameters and viewport
    /// aspect.
    #[must_use]
    pub fn derive(projection: Projection, viewport: Viewport) -> Self {
        let height = match projection {
            Projection::Perspective { fovy, distance } => {
                2.0 * distance * (fovy.to_radians() / 2.0).tan()
            }
            Projection::Orthographic { frustum_height } => frustum_height,
        };
        Self {
            width: height * viewport.aspect(),
            height,
        }
    }

    /// Half extents, the scale factor from normalized device coordinates to
    /// world coordinates.
    #[must_use]
    pub fn half_extents(self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perspective_height_from_fovy_and_distance() {
        // tan(45 deg) == 1, so height == 2 * distance
        let view = ViewVolume::derive(
            Projection::Perspective {
                fovy: 90.0,
                distance: 15.0,
            },
            Viewport::new(1600.0, 900.0),
        );
        assert!((view.height - 30.0).abs() < 1e-4);
        assert!((view.width - 30.0 * 1600.0 / 900.0).abs() < 1e-3);
    }

    #[test]
    fn orthographic_ignores_distance_entirely() {
        let view = ViewVolume::derive(
            Projection::Orthographic {
                frustum_height: 10.0,
            },
            Viewport::new(800.0, 400.0),
        );
        assert_eq!(view.height, 10.0);
        assert_eq!(view.width, 20.0);
    }

    #[test]
    fn half_extents_scale() {
        let view = ViewVolume {
            width: 40.0,
            height: 30.0,
        };
        assert_eq!(view.half_extents(), Vec2::new(20.0, 15.0));
    }
}
