//! Wall instances and the host scene-graph seam.
//!
//! The engine owns a flat list of [`Instance`]s, one per grid cell. The
//! actual renderable objects (clones of the loaded template model) live in
//! the host scene graph, mirrored through the [`SceneHost`] trait. On every
//! re-layout the whole instance set is destroyed and recreated; instances
//! are never partially updated in place.

use glam::{Vec2, Vec3};

/// Engine-assigned instance identifier, unique for the engine's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(
    /// Raw numeric id.
    pub u32,
);

/// One grid cell of the wall.
///
/// Owns its world position and tilt state; the template geometry belongs to
/// the host's loader result and is only referenced by the host-side clone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instance {
    /// Identifier shared with the host-side clone.
    pub id: InstanceId,
    /// World position; z is fixed at the wall plane.
    pub position: Vec3,
    /// Current rotation (tilt about x, tilt about y) in radians.
    pub tilt: Vec2,
    /// Rotation the smoothing filter is approaching.
    pub target_tilt: Vec2,
}

impl Instance {
    /// Create an untilted instance at a grid cell position.
    #[must_use]
    pub fn at(id: InstanceId, cell: Vec2) -> Self {
        Self {
            id,
            position: cell.extend(0.0),
            tilt: Vec2::ZERO,
            target_tilt: Vec2::ZERO,
        }
    }
}

/// Host scene-graph hooks.
///
/// The engine drives instance lifecycle through this trait; the host owns
/// the renderable objects and clones its loaded template per spawn. Calls
/// arrive on the host's single logical thread of control, interleaved with
/// [`WallEngine::frame`](crate::engine::WallEngine::frame) ticks.
pub trait SceneHost {
    /// Clone the template into the scene at `position`.
    fn spawn(&mut self, id: InstanceId, position: Vec3);

    /// Remove every spawned clone from the scene.
    fn clear(&mut self);

    /// Apply the current tilt (rotation about x and y) to a clone.
    fn set_tilt(&mut self, id: InstanceId, tilt: Vec2);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_starts_neutral_on_wall_plane() {
        let inst = Instance::at(InstanceId(3), Vec2::new(1.5, -4.5));
        assert_eq!(inst.position, Vec3::new(1.5, -4.5, 0.0));
        assert_eq!(inst.tilt, Vec2::ZERO);
        assert_eq!(inst.target_tilt, Vec2::ZERO);
    }
}
