//! Scalar math that can be backed by either the standard library or `libm`.
//!
//! The Euler conversions and the direction helper only need a handful of transcendental
//! functions, so they all go through [`FloatMath`] and the backend is picked by feature flag.

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!(
    "rigid-tf requires floating-point math support. \
     Enable either the `std` feature (default) or the `libm` feature."
);

/// Extension trait for f64 providing the operations the conversions rely on.
pub(crate) trait FloatMath {
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
}

#[cfg(feature = "std")]
impl FloatMath for f64 {
    #[inline]
    fn sin(self) -> Self {
        f64::sin(self)
    }

    #[inline]
    fn cos(self) -> Self {
        f64::cos(self)
    }

    #[inline]
    fn atan2(self, other: Self) -> Self {
        f64::atan2(self, other)
    }

    #[inline]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }

    #[inline]
    fn abs(self) -> Self {
        f64::abs(self)
    }
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl FloatMath for f64 {
    #[inline]
    fn sin(self) -> Self {
        libm::sin(self)
    }

    #[inline]
    fn cos(self) -> Self {
        libm::cos(self)
    }

    #[inline]
    fn atan2(self, other: Self) -> Self {
        libm::atan2(self, other)
    }

    #[inline]
    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }

    #[inline]
    fn abs(self) -> Self {
        libm::fabs(self)
    }
}
