//! The rigid body transform: an orthonormal basis plus an origin.
//!
//! A [`Transform`] describes where one coordinate frame sits inside another. Its `basis` is the
//! 3×3 rotation from the child frame into the parent, and its `origin` is the position of the
//! child frame's origin expressed in the parent. In homogeneous form that is
//!
//! ```text
//! | basis  origin |
//! |   0      1    |
//! ```
//!
//! Transforms chain the way homogeneous matrices do: `a * b` first applies `b`, then `a`. So if
//! `a` places frame B in frame A and `b` places frame C in frame B, `a * b` places C in A.

use crate::rpy::Rpy;
use crate::util::row_major;
use crate::{Matrix3, Matrix4, UnitQuaternion, Vector3};
use nalgebra::Rotation3;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::{Mul, MulAssign, Neg};

#[cfg(any(test, feature = "approx"))]
use approx::{AbsDiffEq, RelativeEq};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rotation and translation between two coordinate frames (an element of SE(3)).
///
/// `Transform` is a plain value: it is [`Copy`], and copies never share state. The mutating
/// methods ([`invert`](Transform::invert), [`set_product`](Transform::set_product),
/// [`combine_in_place`](Transform::combine_in_place), [`set_identity`](Transform::set_identity),
/// and the setters) only ever touch the receiver.
///
/// The basis is expected to stay orthonormal. Composition and inversion preserve that (up to
/// floating point drift, which is never corrected), but [`Transform::set_basis`] and
/// [`Transform::from_parts`] accept any matrix without checking. Use
/// [`Transform::is_orthonormal`] if you need to know.
///
/// <div class="warning">
///
/// `*=` ([`MulAssign`]) is **not** the in-place version of `*`. It multiplies the bases but
/// simply adds the origins, without rotating the right-hand origin into the left-hand frame. See
/// [`Transform::combine_in_place`]. Use [`Transform::set_product`] or `a = a * b` for a true
/// in-place composition.
///
/// </div>
///
/// ```
/// use rigid_tf::{Rpy, Transform, Vector3};
/// use uom::si::{angle::degree, f64::Angle};
///
/// // frame B sits 1 m along X of frame A, turned 90° to the left
/// let a_from_b = Transform::from_rotation(
///     Rpy::default().with_yaw(Angle::new::<degree>(90.)).to_quaternion(),
///     Vector3::new(1., 0., 0.),
/// );
///
/// // a point 1 m ahead of B is 1 m to the left of B's origin in A
/// let p = a_from_b * Vector3::new(1., 0., 0.);
/// assert!((p - Vector3::new(1., 1., 0.)).norm() < 1e-12);
///
/// // and the inverse takes it back
/// let back = a_from_b.inverse() * p;
/// assert!((back - Vector3::new(1., 0., 0.)).norm() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transform {
    basis: Matrix3,
    origin: Vector3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// The transform that maps every point onto itself.
    ///
    /// Being a `const`, every use is a fresh copy, so mutating one can never affect another.
    pub const IDENTITY: Self = Self {
        basis: Matrix3::new(1., 0., 0., 0., 1., 0., 0., 0., 1.),
        origin: Vector3::new(0., 0., 0.),
    };

    /// Constructs a transform from a basis and an origin, as given.
    ///
    /// The basis is not checked for orthonormality.
    #[must_use]
    pub fn from_parts(basis: Matrix3, origin: Vector3) -> Self {
        Self { basis, origin }
    }

    /// Constructs a pure rotation (zero origin) from a basis.
    #[must_use]
    pub fn from_basis(basis: Matrix3) -> Self {
        Self::from_parts(basis, Vector3::zeros())
    }

    /// Constructs a transform whose basis is the rotation matrix of `rotation`.
    ///
    /// `rotation` should be of unit length; non-unit quaternions are not normalized and yield a
    /// basis that is not a rotation.
    #[must_use]
    pub fn from_rotation(rotation: UnitQuaternion, origin: Vector3) -> Self {
        Self::from_parts(rotation.to_rotation_matrix().into_inner(), origin)
    }

    /// Constructs a transform from a homogeneous 4×4 matrix.
    ///
    /// The upper-left 3×3 block becomes the basis and the first three entries of the last
    /// column become the origin. The last row is assumed to be `[0, 0, 0, 1]` and is ignored.
    #[must_use]
    pub fn from_matrix(matrix: &Matrix4) -> Self {
        Self {
            basis: matrix.fixed_view::<3, 3>(0, 0).into_owned(),
            origin: matrix.fixed_view::<3, 1>(0, 3).into_owned(),
        }
    }

    /// Returns the homogeneous 4×4 form of this transform.
    ///
    /// This is the exact inverse of [`Transform::from_matrix`] for matrices whose last row is
    /// `[0, 0, 0, 1]`: no arithmetic is involved, so the round trip is bit-for-bit.
    #[must_use]
    pub fn to_matrix(&self) -> Matrix4 {
        let mut matrix = Matrix4::identity();
        matrix.fixed_view_mut::<3, 3>(0, 0).copy_from(&self.basis);
        matrix.fixed_view_mut::<3, 1>(0, 3).copy_from(&self.origin);
        matrix
    }

    #[must_use]
    pub fn basis(&self) -> Matrix3 {
        self.basis
    }

    /// Replaces the basis without any validation.
    ///
    /// Nothing stops you from installing a matrix that is not a rotation here, after which
    /// inversion (which relies on the transpose being the inverse) silently produces wrong
    /// results.
    pub fn set_basis(&mut self, basis: Matrix3) {
        self.basis = basis;
    }

    /// Returns the basis as a unit quaternion.
    #[must_use]
    pub fn rotation(&self) -> UnitQuaternion {
        UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(self.basis))
    }

    /// Overwrites the basis with the rotation matrix of `rotation`.
    ///
    /// The origin is left untouched.
    pub fn set_rotation(&mut self, rotation: UnitQuaternion) {
        self.basis = rotation.to_rotation_matrix().into_inner();
    }

    #[must_use]
    pub fn origin(&self) -> Vector3 {
        self.origin
    }

    pub fn set_origin(&mut self, origin: Vector3) {
        self.origin = origin;
    }

    /// Returns the roll, pitch, and yaw of the basis.
    ///
    /// See [`Rpy::from_rotation_matrix`] for how gimbal lock is handled.
    #[must_use]
    pub fn rpy(&self) -> Rpy {
        Rpy::from_rotation_matrix(&self.basis)
    }

    /// Returns `true` if the basis is orthonormal with determinant +1, to within `epsilon` per
    /// entry.
    #[must_use]
    pub fn is_orthonormal(&self, epsilon: f64) -> bool {
        let gram = self.basis.transpose() * self.basis;
        (gram - Matrix3::identity()).amax() <= epsilon
            && (self.basis.determinant() - 1.).abs() <= epsilon
    }

    /// Maps `vector` through this transform: `basis · vector + origin`.
    ///
    /// Each output component is the dot product of `vector` with the matching row of the basis
    /// (ie, the matching column of its transpose), plus that component of the origin. Every
    /// composition in this crate places origins through this function.
    #[must_use]
    pub fn transform_vector(&self, vector: &Vector3) -> Vector3 {
        let rot = self.basis.transpose();
        Vector3::new(
            rot.column(0).dot(vector) + self.origin.x,
            rot.column(1).dot(vector) + self.origin.y,
            rot.column(2).dot(vector) + self.origin.z,
        )
    }

    /// Rotates `rotation` by this transform's basis, ignoring the origin.
    #[must_use]
    pub fn rotate(&self, rotation: &UnitQuaternion) -> UnitQuaternion {
        self.rotation() * rotation
    }

    /// Returns the transform that first applies `other` and then `self`.
    ///
    /// The basis is `self.basis · other.basis`, and the origin is `other`'s origin mapped through
    /// `self` (see [`Transform::transform_vector`]). This is also what `self * other` computes.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            basis: self.basis * other.basis,
            origin: self.transform_vector(&other.origin),
        }
    }

    /// Returns the transform that undoes this one.
    ///
    /// Since the basis is a rotation, its inverse is its transpose, and the new origin is the
    /// old origin, negated and rotated by that transpose.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let inv = self.basis.transpose();
        Self {
            basis: inv,
            origin: inv * -self.origin,
        }
    }

    /// Inverts this transform in place. See [`Transform::inverse`].
    pub fn invert(&mut self) {
        *self = self.inverse();
    }

    /// Sets `self` to the composition `a * b` without creating a new transform.
    ///
    /// Unlike [`Transform::combine_in_place`], the origin is placed through `a` exactly as
    /// [`Transform::compose`] does.
    pub fn set_product(&mut self, a: &Self, b: &Self) {
        self.basis = a.basis * b.basis;
        self.origin = a.transform_vector(&b.origin);
    }

    /// Multiplies `other`'s basis into this one and **adds** `other`'s origin.
    ///
    /// This is what `*=` does, and it is deliberately not the same as `*`: the origin of `other`
    /// is not rotated into this transform's frame. The two agree only when `self`'s basis is
    /// the identity.
    ///
    /// ```
    /// use rigid_tf::{Matrix3, Rpy, Transform, Vector3};
    /// use uom::si::{angle::degree, f64::Angle};
    ///
    /// let turned = Transform::from_rotation(
    ///     Rpy::default().with_yaw(Angle::new::<degree>(90.)).to_quaternion(),
    ///     Vector3::new(1., 0., 0.),
    /// );
    /// let step = Transform::from_parts(Matrix3::identity(), Vector3::new(1., 0., 0.));
    ///
    /// let mut combined = turned;
    /// combined *= step;
    ///
    /// assert_eq!(combined.origin(), Vector3::new(2., 0., 0.));
    /// assert!(((turned * step).origin() - Vector3::new(1., 1., 0.)).norm() < 1e-12);
    /// ```
    pub fn combine_in_place(&mut self, other: &Self) {
        self.basis *= other.basis;
        self.origin += other.origin;
    }

    /// Resets this transform to [`Transform::IDENTITY`].
    pub fn set_identity(&mut self) {
        *self = Self::IDENTITY;
    }
}

impl From<Matrix4> for Transform {
    fn from(value: Matrix4) -> Self {
        Self::from_matrix(&value)
    }
}

impl From<Transform> for Matrix4 {
    fn from(value: Transform) -> Self {
        value.to_matrix()
    }
}

impl From<UnitQuaternion> for Transform {
    fn from(value: UnitQuaternion) -> Self {
        Self::from_rotation(value, Vector3::zeros())
    }
}

impl Display for Transform {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let m = row_major(&self.basis);
        write!(
            f,
            "origin: [{}, {}, {}], basis: [[{}, {}, {}], [{}, {}, {}], [{}, {}, {}]]",
            self.origin.x,
            self.origin.y,
            self.origin.z,
            m[0],
            m[1],
            m[2],
            m[3],
            m[4],
            m[5],
            m[6],
            m[7],
            m[8]
        )
    }
}

impl Neg for Transform {
    type Output = Transform;

    fn neg(self) -> Self::Output {
        self.inverse()
    }
}

impl Mul<Transform> for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Self::Output {
        self.compose(&rhs)
    }
}

impl Mul<Vector3> for Transform {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Self::Output {
        self.transform_vector(&rhs)
    }
}

impl Mul<UnitQuaternion> for Transform {
    type Output = UnitQuaternion;

    fn mul(self, rhs: UnitQuaternion) -> Self::Output {
        self.rotate(&rhs)
    }
}

// see `combine_in_place` for why this is not `*self = *self * rhs`
impl MulAssign<Transform> for Transform {
    fn mul_assign(&mut self, rhs: Transform) {
        self.combine_in_place(&rhs);
    }
}

#[cfg(any(test, feature = "approx"))]
impl AbsDiffEq<Self> for Transform {
    type Epsilon = <f64 as AbsDiffEq>::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        Matrix3::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.basis.abs_diff_eq(&other.basis, epsilon)
            && self.origin.abs_diff_eq(&other.origin, epsilon)
    }
}

#[cfg(any(test, feature = "approx"))]
impl RelativeEq for Transform {
    fn default_max_relative() -> Self::Epsilon {
        Matrix3::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.basis.relative_eq(&other.basis, epsilon, max_relative)
            && self.origin.relative_eq(&other.origin, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::Transform;
    use crate::{Matrix3, Matrix4, Quaternion, Rpy, UnitQuaternion, Vector3};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use quickcheck::quickcheck;
    use rstest::rstest;
    use std::f64::consts::{FRAC_PI_2, PI};
    use uom::si::angle::degree;
    use uom::si::f64::Angle;

    fn d(degrees: f64) -> Angle {
        Angle::new::<degree>(degrees)
    }

    /// Asserts that two quaternions describe the same rotation, allowing for `q` vs. `-q`.
    fn assert_same_rotation(a: &UnitQuaternion, b: &UnitQuaternion) {
        let (a, b) = (*a.quaternion(), *b.quaternion());
        let b = if a.coords.dot(&b.coords) < 0. { -b } else { b };
        assert_relative_eq!(a, b, epsilon = 1e-12);
    }

    fn yawed(degrees: f64, origin: Vector3) -> Transform {
        Transform::from_rotation(Rpy::default().with_yaw(d(degrees)).to_quaternion(), origin)
    }

    impl quickcheck::Arbitrary for Transform {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            // quickcheck will give us awkward f64 values -- we ignore those
            let mut normal = || loop {
                match f64::arbitrary(g) {
                    0. => break 0.,
                    f if f.is_normal() => break f,
                    _ => {}
                }
            };
            let rpy = Rpy::from_radians(
                normal().rem_euclid(2. * PI) - PI,
                normal().rem_euclid(PI) - FRAC_PI_2,
                normal().rem_euclid(2. * PI) - PI,
            );
            let origin = Vector3::new(
                normal().rem_euclid(2000.) - 1000.,
                normal().rem_euclid(2000.) - 1000.,
                normal().rem_euclid(2000.) - 1000.,
            );
            Transform::from_rotation(rpy.to_quaternion(), origin)
        }
    }

    #[test]
    fn identity_is_a_value() {
        let mut a = Transform::IDENTITY;
        let b = Transform::IDENTITY;
        a.set_origin(Vector3::new(1., 2., 3.));
        a.set_rotation(Rpy::default().with_roll(d(10.)).to_quaternion());

        assert_eq!(b, Transform::IDENTITY);
        assert_eq!(Transform::IDENTITY.basis(), Matrix3::identity());
        assert_eq!(Transform::IDENTITY.origin(), Vector3::zeros());
        assert_eq!(Transform::default(), Transform::IDENTITY);
    }

    #[test]
    fn identity_is_shareable_across_threads() {
        let handles: Vec<_> = (0..4_i32)
            .map(|i| {
                std::thread::spawn(move || {
                    let mut t = Transform::IDENTITY;
                    t.set_origin(Vector3::new(f64::from(i), 0., 0.));
                    t.origin().x
                })
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), i as f64);
        }
        assert_eq!(Transform::IDENTITY.origin(), Vector3::zeros());
    }

    #[test]
    fn matrix_layout() {
        let basis = Matrix3::new(0., -1., 0., 1., 0., 0., 0., 0., 1.);
        let t = Transform::from_parts(basis, Vector3::new(4., 5., 6.));
        let expected = Matrix4::new(
            0., -1., 0., 4., //
            1., 0., 0., 5., //
            0., 0., 1., 6., //
            0., 0., 0., 1.,
        );
        assert_eq!(t.to_matrix(), expected);
        assert_eq!(Matrix4::from(t), expected);
    }

    #[test]
    fn matrix_round_trip_is_exact() {
        let t = Transform::from_rotation(
            Rpy::from_radians(0.3, -0.2, 1.7).to_quaternion(),
            Vector3::new(0.1, -2.5, 1e6),
        );
        let m = t.to_matrix();
        assert_eq!(Transform::from_matrix(&m), t);
        assert_eq!(Transform::from(m).to_matrix(), m);
    }

    #[test]
    fn from_matrix_ignores_last_row() {
        let mut m = Matrix4::identity();
        m[(3, 0)] = 7.;
        m[(3, 3)] = 2.;
        m[(1, 3)] = -3.;
        let t = Transform::from_matrix(&m);
        assert_eq!(t.basis(), Matrix3::identity());
        assert_eq!(t.origin(), Vector3::new(0., -3., 0.));
    }

    #[rstest]
    #[case(Rpy::from_radians(0., 0., 0.))]
    #[case(Rpy::from_radians(0.4, -1.1, 2.8))]
    #[case(Rpy::default().with_roll(d(180.)))]
    #[case(Rpy::default().with_yaw(d(-179.)))]
    fn rotation_round_trip(#[case] rpy: Rpy) {
        let q = rpy.to_quaternion();
        let origin = Vector3::new(1.5, -2., 3.25);
        let t = Transform::from_rotation(q, origin);

        // up to sign, since q and -q are the same rotation
        assert_same_rotation(&t.rotation(), &q);
        assert_eq!(t.origin(), origin);
    }

    #[test]
    fn set_rotation_rewrites_basis_only() {
        let mut t = Transform::from_parts(Matrix3::identity(), Vector3::new(1., 2., 3.));
        let q = Rpy::default().with_pitch(d(30.)).to_quaternion();
        t.set_rotation(q);
        assert_eq!(t.basis(), q.to_rotation_matrix().into_inner());
        assert_eq!(t.origin(), Vector3::new(1., 2., 3.));
    }

    #[test]
    fn set_basis_is_unchecked() {
        let mut t = Transform::IDENTITY;
        assert!(t.is_orthonormal(1e-12));
        t.set_basis(Matrix3::from_diagonal_element(2.));
        assert_eq!(t.basis(), Matrix3::from_diagonal_element(2.));
        assert!(!t.is_orthonormal(1e-12));

        // a reflection is orthogonal but not a rotation
        t.set_basis(Matrix3::from_diagonal(&Vector3::new(1., 1., -1.)));
        assert!(!t.is_orthonormal(1e-12));
    }

    #[test]
    fn transform_vector_uses_rows_of_basis() {
        let basis = Matrix3::new(1., 2., 3., 4., 5., 6., 7., 8., 9.);
        let t = Transform::from_parts(basis, Vector3::new(10., 20., 30.));
        let v = Vector3::new(1., 0., -1.);
        // rows dotted with v: (1 - 3, 4 - 6, 7 - 9)
        assert_eq!(t.transform_vector(&v), Vector3::new(8., 18., 28.));
        assert_eq!(t * v, basis * v + t.origin());
    }

    #[rstest]
    // Given as vector in B -> yaw of B in A -> vector in A (origin 1 m along X)
    #[case(Vector3::new(1., 0., 0.), 0., Vector3::new(2., 0., 0.))]
    #[case(Vector3::new(1., 0., 0.), 90., Vector3::new(1., 1., 0.))]
    #[case(Vector3::new(0., 1., 0.), 90., Vector3::new(0., 0., 0.))]
    #[case(Vector3::new(1., 0., 5.), 180., Vector3::new(0., 0., 5.))]
    #[case(Vector3::new(0., 0., 0.), 45., Vector3::new(1., 0., 0.))]
    fn transform_vector_rotates_then_translates(
        #[case] input: Vector3,
        #[case] yaw_degrees: f64,
        #[case] expected: Vector3,
    ) {
        let t = yawed(yaw_degrees, Vector3::new(1., 0., 0.));
        assert_abs_diff_eq!(t * input, expected, epsilon = 1e-12);
    }

    #[test]
    fn compose_places_origin_through_left_operand() {
        let a = yawed(90., Vector3::new(1., 0., 0.));
        let b = yawed(0., Vector3::new(1., 0., 0.));
        let ab = a * b;
        assert_abs_diff_eq!(ab.origin(), Vector3::new(1., 1., 0.), epsilon = 1e-12);
        assert_eq!(ab.basis(), a.basis() * b.basis());
        assert_eq!(ab, a.compose(&b));

        // applying the composition equals applying b, then a
        let v = Vector3::new(0.5, -2., 3.);
        assert_abs_diff_eq!(ab * v, a * (b * v), epsilon = 1e-12);
    }

    #[test]
    fn rotate_ignores_origin() {
        let t = yawed(90., Vector3::new(100., 0., 0.));
        let q = Rpy::default().with_yaw(d(45.)).to_quaternion();
        let expected = Rpy::default().with_yaw(d(135.)).to_quaternion();
        assert_same_rotation(&(t * q), &expected);
        assert_eq!(t * q, t.rotate(&q));
    }

    #[test]
    fn inverse_undoes() {
        let t = Transform::from_rotation(
            Rpy::from_radians(0.1, 0.2, 0.3).to_quaternion(),
            Vector3::new(1., 2., 3.),
        );
        let inv = t.inverse();
        assert_eq!(inv.basis(), t.basis().transpose());
        assert_eq!(inv.origin(), t.basis().transpose() * -t.origin());
        assert_eq!(-t, inv);

        let v = Vector3::new(-4., 0.5, 9.);
        assert_relative_eq!(inv * (t * v), v, epsilon = 1e-12);
    }

    #[test]
    fn invert_matches_inverse() {
        let t = yawed(33., Vector3::new(3., -1., 2.));
        let mut inverted = t;
        inverted.invert();
        assert_eq!(inverted, t.inverse());
    }

    #[test]
    fn set_product_matches_mul() {
        let a = yawed(30., Vector3::new(1., 2., 3.));
        let b = Transform::from_rotation(
            Rpy::default().with_pitch(d(-20.)).to_quaternion(),
            Vector3::new(-1., 0., 4.),
        );
        let mut out = Transform::IDENTITY;
        out.set_product(&a, &b);
        assert_eq!(out, a * b);
    }

    #[test]
    fn set_identity_resets() {
        let mut t = yawed(12., Vector3::new(1., 1., 1.));
        t.set_identity();
        assert_eq!(t, Transform::IDENTITY);
    }

    #[test]
    fn mul_assign_adds_origins() {
        let a = yawed(90., Vector3::new(1., 2., 3.));
        let b = yawed(-30., Vector3::new(4., 5., 6.));

        let mut combined = a;
        combined *= b;

        assert_eq!(combined.basis(), a.basis() * b.basis());
        assert_eq!(combined.origin(), Vector3::new(5., 7., 9.));

        let mut named = a;
        named.combine_in_place(&b);
        assert_eq!(named, combined);

        // the basis agrees with `*`, the origin does not
        assert_eq!(combined.basis(), (a * b).basis());
        assert!((combined.origin() - (a * b).origin()).norm() > 1.);
    }

    #[test]
    fn mul_assign_matches_mul_only_for_identity_basis() {
        let a = Transform::from_parts(Matrix3::identity(), Vector3::new(1., 2., 3.));
        let b = yawed(-30., Vector3::new(4., 5., 6.));
        let mut combined = a;
        combined *= b;
        assert_eq!(combined, a * b);
    }

    #[test]
    fn rpy_of_basis() {
        let rpy = Rpy::from_radians(0.1, -0.2, 0.3);
        let t = Transform::from_rotation(rpy.to_quaternion(), Vector3::zeros());
        assert_relative_eq!(t.rpy(), rpy, epsilon = 1e-12);
    }

    #[test]
    fn non_unit_quaternion_is_not_normalized() {
        let q = UnitQuaternion::new_unchecked(Quaternion::new(2., 0., 0., 0.));
        let t = Transform::from(q);
        assert_eq!(t.basis(), Matrix3::from_diagonal_element(4.));
        assert!(!t.is_orthonormal(1e-6));
    }

    #[test]
    fn display() {
        insta::assert_snapshot!(
            Transform::IDENTITY,
            @"origin: [0, 0, 0], basis: [[1, 0, 0], [0, 1, 0], [0, 0, 1]]"
        );
        insta::assert_snapshot!(
            Transform::from_parts(
                Matrix3::new(0., -1., 0., 1., 0., 0., 0., 0., 1.),
                Vector3::new(1.5, -2., 0.25),
            ),
            @"origin: [1.5, -2, 0.25], basis: [[0, -1, 0], [1, 0, 0], [0, 0, 1]]"
        );
    }

    #[test]
    fn transform_serde() {
        let t = Transform::from_rotation(
            Rpy::from_radians(0.5, 0.1, -1.).to_quaternion(),
            Vector3::new(50., 45., 10.),
        );
        let ser = serde_yaml::to_string(&t).unwrap();
        let de = serde_yaml::from_str::<Transform>(&ser).unwrap();
        assert_eq!(t, de);
    }

    quickcheck! {
        fn double_inverse_is_identity(t: Transform) -> () {
            assert_relative_eq!(t.inverse().inverse(), t, epsilon = 1e-9);
        }

        fn compose_with_inverse_is_identity(t: Transform) -> () {
            assert_abs_diff_eq!(t * t.inverse(), Transform::IDENTITY, epsilon = 1e-9);
            assert_abs_diff_eq!(t.inverse() * t, Transform::IDENTITY, epsilon = 1e-9);
        }

        fn composition_is_associative(a: Transform, b: Transform, c: Transform) -> () {
            assert_abs_diff_eq!((a * b) * c, a * (b * c), epsilon = 1e-9);
        }

        fn identity_laws(t: Transform) -> () {
            assert_abs_diff_eq!(Transform::IDENTITY * t, t, epsilon = 1e-12);
            assert_abs_diff_eq!(t * Transform::IDENTITY, t, epsilon = 1e-12);
        }

        fn matrix_round_trip(t: Transform) -> () {
            assert_eq!(Transform::from_matrix(&t.to_matrix()), t);
        }

        fn composition_stays_orthonormal(a: Transform, b: Transform) -> () {
            assert!((a * b).is_orthonormal(1e-9));
            assert!(a.inverse().is_orthonormal(1e-9));
        }
    }
}
