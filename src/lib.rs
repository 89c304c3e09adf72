//! This library provides the rigid body transform that sits underneath a frame-transform tree
//! (in the style of ROS's `tf`): a rotation plus a translation, how to chain and invert them, and
//! how to move between rotation matrices, quaternions, and roll/pitch/yaw angles.
//!
//! The main type is [`Transform`], which stores an orthonormal `basis` (the rotation) and an
//! `origin` (the translation). Transforms compose with `*` the way homogeneous matrices do,
//! can be inverted, and can be applied to vectors and quaternions. They convert losslessly to and
//! from 4×4 homogeneous matrices.
//!
//! Orientation angles live in [`Rpy`], which converts to and from unit quaternions using
//! intrinsic yaw-pitch-roll (Z-Y'-X'') angles, taking care of the gimbal-lock singularity at ±90°
//! pitch.
//!
//! Finally, [`orientation_from_direction`] turns a direction vector into the (roll-free)
//! orientation that looks back along it.
//!
//! All linear algebra types are plain [`nalgebra`] types, re-exported here under short names.
//!
//! # Examples
//!
//! A robot's base sits in the world, and a camera is mounted on the base. Chaining the two
//! transforms tells us where the camera is in the world, and inverting that lets us bring world
//! points into the camera frame.
//!
//! ```
//! use rigid_tf::{Rpy, Transform, Vector3};
//! use uom::si::{angle::degree, f64::Angle};
//!
//! // the base is 2 m along the world's X axis, turned to face the world's Y axis
//! let world_from_base = Transform::from_rotation(
//!     Rpy::default().with_yaw(Angle::new::<degree>(90.)).to_quaternion(),
//!     Vector3::new(2., 0., 0.),
//! );
//!
//! // the camera is 0.5 m in front of the base and 1 m up, tilted down by 30°
//! let base_from_camera = Transform::from_rotation(
//!     Rpy::default().with_pitch(Angle::new::<degree>(30.)).to_quaternion(),
//!     Vector3::new(0.5, 0., 1.),
//! );
//!
//! let world_from_camera = world_from_base * base_from_camera;
//! let camera_in_world = world_from_camera.origin();
//! assert!((camera_in_world - Vector3::new(2., 0.5, 1.)).norm() < 1e-12);
//!
//! // and a world point, seen from the camera
//! let camera_from_world = world_from_camera.inverse();
//! let seen = camera_from_world * Vector3::new(2., 1.5, 0.);
//! assert!((world_from_camera * seen - Vector3::new(2., 1.5, 0.)).norm() < 1e-12);
//!
//! // the camera's orientation, for logging
//! let rpy = world_from_camera.rpy();
//! assert!((rpy.pitch.get::<degree>() - 30.).abs() < 1e-9);
//! assert!((rpy.yaw.get::<degree>() - 90.).abs() < 1e-9);
//! ```

mod directions;
mod float_math;
mod rpy;
mod transform;

pub mod util;

pub type Vector3 = nalgebra::Vector3<f64>;
pub type Matrix3 = nalgebra::Matrix3<f64>;
pub type Matrix4 = nalgebra::Matrix4<f64>;
pub type Quaternion = nalgebra::Quaternion<f64>;
pub type UnitQuaternion = nalgebra::UnitQuaternion<f64>;

pub use directions::{orientation_from_direction, try_orientation_from_direction};
pub use rpy::Rpy;
pub use transform::Transform;
