//! Pointer influence model: per-frame tilt targets and smoothing.
//!
//! Each frame the pointer's world position is compared against every
//! instance. Instances inside the influence radius tilt toward the pointer
//! with a linear falloff (full effect at the pointer, none at the radius
//! boundary); everything else relaxes to neutral. A single-pole low-pass
//! moves the actual rotation toward its target so motion never snaps.
//!
//! The same module owns the two input mappings feeding the model: device
//! pixels to world coordinates, and gyroscope angles to a virtual cursor.

use glam::Vec2;

use crate::camera::{ViewVolume, Viewport};
use crate::scene::Instance;

/// Map a device pixel position to world coordinates on the wall plane.
///
/// Pixels are normalized to [-1, 1] with y flipped (screen-down positive
/// becomes world-up positive), then scaled by half the view volume. The
/// mapping is identical for both projection kinds; the projection only
/// changes how the view volume itself is derived.
#[must_use]
pub fn device_to_world(device: Vec2, viewport: Viewport, view: ViewVolume) -> Vec2 {
    let normalized = Vec2::new(
        (device.x / viewport.width) * 2.0 - 1.0,
        -((device.y / viewport.height) * 2.0 - 1.0),
    );
    normalized * view.half_extents()
}

/// Map device-orientation angles to a virtual cursor in device pixels.
///
/// `beta` is front-back tilt in degrees in [-180, 180], `gamma` left-right
/// in [-90, 90]. A level device centers the cursor. The result feeds
/// [`device_to_world`] exactly like a real mouse position.
#[must_use]
pub fn orientation_to_device(beta: f32, gamma: f32, viewport: Viewport) -> Vec2 {
    Vec2::new(
        (gamma / 90.0) * viewport.width / 2.0 + viewport.width / 2.0,
        (beta / 180.0) * viewport.height / 2.0 + viewport.height / 2.0,
    )
}

/// Recompute every instance's target tilt from the pointer position.
///
/// Inside `influence_radius` the target is proportional to the instance's
/// offset from the pointer, weighted by a linear falloff; at or beyond the
/// radius (strict `<` on the inside branch) the target is neutral.
pub fn update_targets(
    pointer_world: Vec2,
    instances: &mut [Instance],
    influence_radius: f32,
    max_tilt: f32,
) {
    for instance in instances {
        let offset = pointer_world - instance.position.truncate();
        let distance = offset.length();
        instance.target_tilt = if distance < influence_radius {
            let falloff = 1.0 - distance / influence_radius;
            Vec2::new(offset.y, -offset.x) * falloff * max_tilt
        } else {
            Vec2::ZERO
        };
    }
}

/// Advance every instance's tilt one smoothing step toward its target.
///
/// `tilt += (target - tilt) * smoothing` with `smoothing` in (0, 1]: an
/// exponential approach that cannot overshoot. At `smoothing == 1.0` the
/// tilt snaps to its target in one step.
pub fn apply_smoothing(instances: &mut [Instance], smoothing: f32) {
    for instance in instances {
        instance.tilt += (instance.target_tilt - instance.tilt) * smoothing;
    }
}
