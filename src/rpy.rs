//! Roll, pitch, and yaw ([Tait-Bryan]) angles and their conversion to and from unit quaternions.
//!
//! The convention is intrinsic Z-Y'-X'': yaw about Z first, then pitch about the new Y, then
//! roll about the resulting X. Equivalently, the rotation matrix is `Rz(yaw) · Ry(pitch) ·
//! Rx(roll)`.
//!
//! Going from a rotation back to angles is not unique. When pitch reaches ±90° (gimbal lock) roll
//! and yaw rotate about the same axis and only their combination is observable. In that case
//! [`Rpy::from_rotation_matrix`] pins roll to zero and folds the whole rotation into yaw.
//!
//! [Tait-Bryan]: https://en.wikipedia.org/wiki/Euler_angles#Tait%E2%80%93Bryan_angles

use crate::float_math::FloatMath;
use crate::util::row_major;
use crate::{Matrix3, Quaternion, UnitQuaternion};
use std::f64::consts::FRAC_PI_2;
use std::fmt;
use std::fmt::{Display, Formatter};
use uom::si::angle::radian;
use uom::si::f64::Angle;
use uom::ConstZero;

#[cfg(any(test, feature = "approx"))]
use approx::{AbsDiffEq, RelativeEq};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pitch magnitude above which a rotation is treated as gimbal-locked.
///
/// This is π/2 less one unit in the last place of π/2.
const GIMBAL_LOCK_THRESHOLD: f64 = FRAC_PI_2 - f64::EPSILON;

/// An orientation expressed as roll (about X), pitch (about Y), and yaw (about Z).
///
/// Any angle left out defaults to zero, so a pure heading can be written as
///
/// ```
/// use rigid_tf::Rpy;
/// use uom::si::{angle::degree, f64::Angle};
///
/// let heading = Rpy::default().with_yaw(Angle::new::<degree>(90.));
/// let q = heading.to_quaternion();
/// assert!((q.angle() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rpy {
    pub roll: Angle,
    pub pitch: Angle,
    pub yaw: Angle,
}

impl Default for Rpy {
    fn default() -> Self {
        Self {
            roll: Angle::ZERO,
            pitch: Angle::ZERO,
            yaw: Angle::ZERO,
        }
    }
}

impl Rpy {
    #[must_use]
    pub fn new(roll: impl Into<Angle>, pitch: impl Into<Angle>, yaw: impl Into<Angle>) -> Self {
        Self {
            roll: roll.into(),
            pitch: pitch.into(),
            yaw: yaw.into(),
        }
    }

    #[must_use]
    pub fn from_radians(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self::new(
            Angle::new::<radian>(roll),
            Angle::new::<radian>(pitch),
            Angle::new::<radian>(yaw),
        )
    }

    #[must_use]
    pub fn with_roll(mut self, roll: impl Into<Angle>) -> Self {
        self.roll = roll.into();
        self
    }

    #[must_use]
    pub fn with_pitch(mut self, pitch: impl Into<Angle>) -> Self {
        self.pitch = pitch.into();
        self
    }

    #[must_use]
    pub fn with_yaw(mut self, yaw: impl Into<Angle>) -> Self {
        self.yaw = yaw.into();
        self
    }

    /// Returns `(roll, pitch, yaw)` in radians.
    #[must_use]
    pub fn to_radians(&self) -> (f64, f64, f64) {
        (
            self.roll.get::<radian>(),
            self.pitch.get::<radian>(),
            self.yaw.get::<radian>(),
        )
    }

    /// Builds the unit quaternion for these angles using the closed-form half-angle product.
    ///
    /// This agrees with [`nalgebra::UnitQuaternion::from_euler_angles`], but is spelled out so
    /// that the exact arithmetic (and therefore the exact bits) does not depend on nalgebra.
    #[must_use]
    pub fn to_quaternion(&self) -> UnitQuaternion {
        let (roll, pitch, yaw) = self.to_radians();
        let (hr, hp, hy) = (roll / 2., pitch / 2., yaw / 2.);

        let (sr, cr) = (FloatMath::sin(hr), FloatMath::cos(hr));
        let (sp, cp) = (FloatMath::sin(hp), FloatMath::cos(hp));
        let (sy, cy) = (FloatMath::sin(hy), FloatMath::cos(hy));

        // the product of three half-angle rotations is a unit quaternion up to rounding, so we
        // don't renormalize here.
        UnitQuaternion::new_unchecked(Quaternion::new(
            cr * cp * cy + sr * sp * sy,
            sr * cp * cy - cr * sp * sy,
            cr * sp * cy + sr * cp * sy,
            cr * cp * sy - sr * sp * cy,
        ))
    }

    /// Decomposes a rotation into roll, pitch, and yaw via its rotation matrix.
    ///
    /// The quaternion is assumed to be of unit length; a non-unit quaternion yields angles that
    /// do not describe any particular rotation.
    #[must_use]
    pub fn from_quaternion(rotation: &UnitQuaternion) -> Self {
        Self::from_rotation_matrix(rotation.to_rotation_matrix().matrix())
    }

    /// Decomposes a rotation matrix into roll, pitch, and yaw.
    ///
    /// Pitch is always in [-π/2, π/2], roll and yaw in [-π, π].
    ///
    /// When `|pitch|` is within one ulp of π/2 the decomposition is singular. Roll is then
    /// reported as exactly zero and yaw absorbs the remaining rotation about the vertical axis.
    /// This is a property of the representation: the returned angles still reproduce the
    /// rotation, they are just not the only ones that would.
    #[must_use]
    pub fn from_rotation_matrix(m: &Matrix3) -> Self {
        let m = row_major(m);

        let pitch = FloatMath::atan2(-m[6], FloatMath::sqrt(m[0] * m[0] + m[3] * m[3]));

        let (roll, yaw) = if FloatMath::abs(pitch) > GIMBAL_LOCK_THRESHOLD {
            log::trace!("pitch of {pitch} rad is gimbal-locked; folding roll into yaw");
            (0.0, FloatMath::atan2(-m[1], m[4]))
        } else {
            (FloatMath::atan2(m[7], m[8]), FloatMath::atan2(m[3], m[0]))
        };

        Self::from_radians(roll, pitch, yaw)
    }
}

impl From<Rpy> for UnitQuaternion {
    fn from(value: Rpy) -> Self {
        value.to_quaternion()
    }
}

impl From<UnitQuaternion> for Rpy {
    fn from(value: UnitQuaternion) -> Self {
        Rpy::from_quaternion(&value)
    }
}

impl Display for Rpy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (roll, pitch, yaw) = self.to_radians();
        write!(f, "roll: {roll} rad, pitch: {pitch} rad, yaw: {yaw} rad")
    }
}

#[cfg(any(test, feature = "approx"))]
impl AbsDiffEq<Self> for Rpy {
    type Epsilon = <f64 as AbsDiffEq>::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        // this is very accurate in radians
        0.000_000_001
    }

    /// Compares the angles pairwise, treating angles a full turn apart as equal.
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        let (r1, p1, y1) = self.to_radians();
        let (r2, p2, y2) = other.to_radians();
        [(r1, r2), (p1, p2), (y1, y2)]
            .into_iter()
            .all(|(a, b)| crate::util::angular_distance(a, b) <= epsilon)
    }
}

#[cfg(any(test, feature = "approx"))]
impl RelativeEq for Rpy {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        let (r1, p1, y1) = self.to_radians();
        let (r2, p2, y2) = other.to_radians();
        [(r1, r2), (p1, p2), (y1, y2)].into_iter().all(|(a, b)| {
            // bring `b` onto the same turn as `a` before comparing relatively
            let b = a - crate::util::to_signed_range(a - b);
            f64::relative_eq(&a, &b, epsilon, max_relative)
        })
    }
}
