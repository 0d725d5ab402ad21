// Copyright 2026 the Pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

use arrayvec::ArrayVec;

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("pathdata requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn asin(self) -> Self => asin;
    fn atan2(self, other: Self) -> Self => atan2;
    fn cos(self) -> Self => cos;
    fn powf(self, n: Self) -> Self => pow;
    fn round(self) -> Self => round;
    fn sin(self) -> Self => sin;
    fn sqrt(self) -> Self => sqrt;
    fn tan(self) -> Self => tan;
}

/// Coefficients with an absolute value at or below this are treated as zero
/// when deciding the degree of a polynomial.
pub const TOLERANCE: f64 = 1e-6;

/// Cube root that keeps the sign of its argument.
///
/// Computed as `sign(v)·|v|^(1/3)` so that negative radicands produce the real
/// (negative) root rather than `NaN`.
#[inline]
pub fn signed_cbrt(v: f64) -> f64 {
    if v >= 0.0 {
        v.powf(1.0 / 3.0)
    } else {
        -(-v).powf(1.0 / 3.0)
    }
}

/// Find the real root of a linear equation.
///
/// Return values of x for which c0 + c1 x = 0. There is no root when `c1` is
/// exactly zero.
pub fn solve_linear(c0: f64, c1: f64) -> ArrayVec<f64, 1> {
    let mut result = ArrayVec::new();
    if c1 != 0.0 {
        result.push(-c0 / c1);
    }
    result
}

/// Find real roots of quadratic equation.
///
/// Return values of x for which c0 + c1 x + c2 x² = 0.
///
/// If `c2` is within [`TOLERANCE`] of zero the equation is solved as a linear
/// one. A discriminant within [`TOLERANCE`] of zero produces a single double
/// root.
pub fn solve_quadratic(c0: f64, c1: f64, c2: f64) -> ArrayVec<f64, 2> {
    let mut result = ArrayVec::new();
    if c2.abs() <= TOLERANCE {
        result.extend(solve_linear(c0, c1));
        return result;
    }
    let b = c1 / c2;
    let c = c0 / c2;
    let d = b * b - 4.0 * c;
    if d.abs() <= TOLERANCE {
        result.push(0.5 * -b);
    } else if d > 0.0 {
        let e = d.sqrt();
        result.push(0.5 * (-b + e));
        result.push(0.5 * (-b - e));
    }
    result
}

/// Find real roots of cubic equation.
///
/// Return values of x for which c0 + c1 x + c2 x² + c3 x³ = 0.
///
/// When `c3` is within [`TOLERANCE`] of zero, the quadratic equation is solved
/// instead. Otherwise the equation is reduced to a depressed cubic and solved
/// by Cardano's formula when the discriminant is positive, and by the
/// trigonometric method when it is negative. The discriminant is compared
/// against zero exactly; snapping small values to zero makes near-tangent
/// intersections disappear.
pub fn solve_cubic(c0: f64, c1: f64, c2: f64, c3: f64) -> ArrayVec<f64, 3> {
    let mut result = ArrayVec::new();
    if c3.abs() <= TOLERANCE {
        result.extend(solve_quadratic(c0, c1, c2));
        return result;
    }
    let (c0, c1, c2) = (c0 / c3, c1 / c3, c2 / c3);

    // Depressed cubic t³ + a t + b = 0, with x = t - offset.
    let a = (3.0 * c1 - c2 * c2) / 3.0;
    let b = (2.0 * c2 * c2 * c2 - 9.0 * c1 * c2 + 27.0 * c0) / 27.0;
    let offset = c2 / 3.0;
    let discrim = b * b / 4.0 + a * a * a / 27.0;
    let half_b = b / 2.0;

    if discrim > 0.0 {
        let e = discrim.sqrt();
        let root = signed_cbrt(-half_b + e) + signed_cbrt(-half_b - e);
        result.push(root - offset);
    } else if discrim < 0.0 {
        let distance = (-a / 3.0).sqrt();
        let angle = (-discrim).sqrt().atan2(-half_b) / 3.0;
        let cos = angle.cos();
        let sin = angle.sin();
        let sqrt3 = 3.0f64.sqrt();
        result.push(2.0 * distance * cos - offset);
        result.push(-distance * (cos + sqrt3 * sin) - offset);
        result.push(-distance * (cos - sqrt3 * sin) - offset);
    } else {
        let tmp = -signed_cbrt(half_b);
        let r0 = 2.0 * tmp - offset;
        let r1 = -tmp - offset;
        result.push(r0);
        if r1 != r0 {
            result.push(r1);
        }
    }
    result
}
