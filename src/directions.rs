//! Orientations derived from a single direction vector.
//!
//! A direction only pins down heading and elevation, never bank, so the orientations produced
//! here always have zero roll.

use crate::float_math::FloatMath;
use crate::rpy::Rpy;
use crate::transform::Transform;
use crate::Vector3;
use uom::si::angle::radian;
use uom::si::f64::Angle;

/// Returns the transform whose X axis points back along `direction`.
///
/// The orientation "looks" from the tip of `direction` towards its tail, as an observer at the
/// origin would when facing the source of a ray travelling along `direction`. It is built as a
/// yaw about Z followed by a pitch about the yawed Y axis, so its roll is zero and its origin is
/// the zero vector.
///
/// Straight up or down directions have no heading; they get a yaw of zero.
///
/// `direction` need not be normalized but must not be zero. A zero vector yields a transform full
/// of NaNs; use [`try_orientation_from_direction`] if that can happen.
///
/// ```
/// use rigid_tf::{orientation_from_direction, Vector3};
///
/// let t = orientation_from_direction(&Vector3::new(2., 0., 0.));
/// let forward = t * Vector3::x();
/// assert!((forward - Vector3::new(-1., 0., 0.)).norm() < 1e-12);
/// ```
#[must_use]
pub fn orientation_from_direction(direction: &Vector3) -> Transform {
    facing(&reversed(direction).normalize())
}

/// Like [`orientation_from_direction`], but returns `None` if `direction` has no usable length
/// (zero, subnormal, or not finite).
#[must_use]
pub fn try_orientation_from_direction(direction: &Vector3) -> Option<Transform> {
    if !direction.iter().all(|c| c.is_finite()) {
        log::debug!("refusing to orient along non-finite direction {direction:?}");
        return None;
    }
    let Some(ray) = reversed(direction).try_normalize(f64::MIN_POSITIVE) else {
        log::debug!("refusing to orient along zero-length direction {direction:?}");
        return None;
    };
    Some(facing(&ray))
}

// subtract rather than negate: zero components must stay +0 so that vertical rays get a heading
// of 0 rather than ±π from atan2(-0, -0).
fn reversed(direction: &Vector3) -> Vector3 {
    Vector3::zeros() - direction
}

/// Orients X along the unit vector `ray`.
fn facing(ray: &Vector3) -> Transform {
    let yaw = Rpy::default()
        .with_yaw(Angle::new::<radian>(FloatMath::atan2(ray.y, ray.x)))
        .to_quaternion();

    // the X axis after yawing, ie, the horizontal component of the ray's heading
    let yawed_x = yaw.to_rotation_matrix() * Vector3::x();

    let pitch = Rpy::default()
        .with_pitch(Angle::new::<radian>(FloatMath::atan2(
            -ray.z,
            ray.dot(&yawed_x),
        )))
        .to_quaternion();

    Transform::from_rotation(yaw * pitch, Vector3::zeros())
}
