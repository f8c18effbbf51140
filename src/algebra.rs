//! The named arithmetic operations on quaternions.
//!
//! Every operator overload in [`crate::ops`] is a thin wrapper around one
//! of these functions.  Real and complex operands are only accepted on
//! the right, embedded as `(x, 0, 0, 0)` and `(re, im, 0, 0)`.  Division
//! is right division, `p / q = p * q⁻¹`.
//!
//! Nothing here checks for zero divisors: dividing by zero yields
//! infinite or NaN components.

use crate::complex::Complex;
use crate::quaternion::Quaternion;

/// Component-wise sum.
pub fn add(p: Quaternion, q: Quaternion) -> Quaternion {
    Quaternion::new(p.scalar + q.scalar, p.i + q.i, p.j + q.j, p.k + q.k)
}

/// Add a real number to the scalar part.
pub fn add_real(p: Quaternion, x: f64) -> Quaternion {
    Quaternion::new(p.scalar + x, p.i, p.j, p.k)
}

/// Add a complex number to the scalar and 𝐢 parts.
pub fn add_complex(p: Quaternion, c: Complex) -> Quaternion {
    Quaternion::new(p.scalar + c.re, p.i + c.im, p.j, p.k)
}

/// Component-wise difference.
pub fn sub(p: Quaternion, q: Quaternion) -> Quaternion {
    Quaternion::new(p.scalar - q.scalar, p.i - q.i, p.j - q.j, p.k - q.k)
}

/// Subtract a real number from the scalar part.
pub fn sub_real(p: Quaternion, x: f64) -> Quaternion {
    Quaternion::new(p.scalar - x, p.i, p.j, p.k)
}

/// Subtract a complex number from the scalar and 𝐢 parts.
pub fn sub_complex(p: Quaternion, c: Complex) -> Quaternion {
    Quaternion::new(p.scalar - c.re, p.i - c.im, p.j, p.k)
}

/// Flip the sign of every component.
pub fn neg(p: Quaternion) -> Quaternion {
    Quaternion::new(-p.scalar, -p.i, -p.j, -p.k)
}

/// The Hamilton product `p * q`.  Order matters.
pub fn mul(p: Quaternion, q: Quaternion) -> Quaternion {
    let a = p.scalar;
    let b = p.i;
    let c = p.j;
    let d = p.k;
    let e = q.scalar;
    let f = q.i;
    let g = q.j;
    let h = q.k;
    Quaternion {
        scalar: a * e - b * f - c * g - d * h,
        i: a * f + b * e + c * h - d * g,
        j: a * g - b * h + c * e + d * f,
        k: a * h + b * g - c * f + d * e,
    }
}

/// Scale every component.
pub fn mul_real(p: Quaternion, x: f64) -> Quaternion {
    Quaternion::new(p.scalar * x, p.i * x, p.j * x, p.k * x)
}

/// Right-multiply by a complex number.
pub fn mul_complex(p: Quaternion, c: Complex) -> Quaternion {
    mul(p, Quaternion::from(c))
}

/// Right division, `p * q⁻¹`.
pub fn div(p: Quaternion, q: Quaternion) -> Quaternion {
    mul(p, q.reciprocal())
}

/// Divide every component.
pub fn div_real(p: Quaternion, x: f64) -> Quaternion {
    Quaternion::new(p.scalar / x, p.i / x, p.j / x, p.k / x)
}

/// Right division by a complex number.
pub fn div_complex(p: Quaternion, c: Complex) -> Quaternion {
    div(p, Quaternion::from(c))
}

/// `*p = *p + q`, returning the new value.
pub fn add_assign(p: &mut Quaternion, q: Quaternion) -> Quaternion {
    *p = add(*p, q);
    *p
}

/// `*p = *p + x`, returning the new value.
pub fn add_assign_real(p: &mut Quaternion, x: f64) -> Quaternion {
    *p = add_real(*p, x);
    *p
}

/// `*p = *p - q`, returning the new value.
pub fn sub_assign(p: &mut Quaternion, q: Quaternion) -> Quaternion {
    *p = sub(*p, q);
    *p
}

/// `*p = *p - x`, returning the new value.
pub fn sub_assign_real(p: &mut Quaternion, x: f64) -> Quaternion {
    *p = sub_real(*p, x);
    *p
}

/// `*p = *p * q`, returning the new value.
pub fn mul_assign(p: &mut Quaternion, q: Quaternion) -> Quaternion {
    *p = mul(*p, q);
    *p
}

/// `*p = *p * x`, returning the new value.
pub fn mul_assign_real(p: &mut Quaternion, x: f64) -> Quaternion {
    *p = mul_real(*p, x);
    *p
}

/// `*p = *p / q`, returning the new value.
pub fn div_assign(p: &mut Quaternion, q: Quaternion) -> Quaternion {
    *p = div(*p, q);
    *p
}

/// `*p = *p / x`, returning the new value.
pub fn div_assign_real(p: &mut Quaternion, x: f64) -> Quaternion {
    *p = div_real(*p, x);
    *p
}

/// Raise to an integer power.  See [`Quaternion::powi`].
pub fn pow(q: Quaternion, n: i32) -> Quaternion {
    q.powi(n)
}

#[test]
fn ij_is_k_but_ji_is_minus_k() {
    let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
    let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
    assert_eq!(mul(i, j), Quaternion::new(0.0, 0.0, 0.0, 1.0));
    assert_eq!(mul(j, i), Quaternion::new(0.0, 0.0, 0.0, -1.0));
}

#[test]
fn hamilton_product_by_hand() {
    let p = Quaternion::new(7.0, 6.0, -4.0, 2.0);
    let q = Quaternion::new(5.0, -1.0, -2.0, 9.0);
    assert_eq!(mul(p, q), Quaternion::new(15.0, -9.0, -90.0, 57.0));
}

#[test]
fn real_operands_touch_only_the_scalar() {
    let p = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(add_real(p, 0.5), Quaternion::new(1.5, 2.0, 3.0, 4.0));
    assert_eq!(sub_real(p, 0.5), Quaternion::new(0.5, 2.0, 3.0, 4.0));
    assert_eq!(mul_real(p, 2.0), Quaternion::new(2.0, 4.0, 6.0, 8.0));
    assert_eq!(div_real(p, 2.0), Quaternion::new(0.5, 1.0, 1.5, 2.0));
}

#[test]
fn complex_operands_touch_scalar_and_i() {
    let p = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let c = Complex::new(0.5, -1.0);
    assert_eq!(add_complex(p, c), Quaternion::new(1.5, 1.0, 3.0, 4.0));
    assert_eq!(sub_complex(p, c), Quaternion::new(0.5, 3.0, 3.0, 4.0));
}

#[test]
fn complex_multiplication_is_on_the_right() {
    let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
    let i = Complex::new(0.0, 1.0);
    // j * i = -k
    assert_eq!(mul_complex(j, i), Quaternion::new(0.0, 0.0, 0.0, -1.0));
}

#[test]
fn division_by_zero_real_is_not_finite() {
    let q = div_real(Quaternion::new(1.0, -1.0, 0.0, 2.0), 0.0);
    println!("q / 0 = {:?}", q);
    assert_eq!(q.scalar, std::f64::INFINITY);
    assert_eq!(q.i, std::f64::NEG_INFINITY);
    assert!(q.j.is_nan());
    assert!(!q.is_finite());
}

#[test]
fn division_by_zero_quaternion_is_nan() {
    let p = Quaternion::new(1.0, -1.0, 0.0, 2.0);
    let q = div(p, Quaternion::ZERO);
    println!("p / 0 = {:?}", q);
    assert!(q.to_array().iter().all(|x| x.is_nan()));
    assert!(div_complex(p, Complex::new(0.0, 0.0)).is_nan());
}

#[test]
fn compound_assignment_returns_new_value() {
    let mut p = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let r = add_assign(&mut p, Quaternion::new(1.0, 1.0, 1.0, 1.0));
    assert_eq!(r, Quaternion::new(2.0, 3.0, 4.0, 5.0));
    assert_eq!(p, r);
    assert_eq!(sub_assign_real(&mut p, 2.0), Quaternion::new(0.0, 3.0, 4.0, 5.0));
    assert_eq!(mul_assign_real(&mut p, 2.0), Quaternion::new(0.0, 6.0, 8.0, 10.0));
    assert_eq!(div_assign_real(&mut p, 2.0), Quaternion::new(0.0, 3.0, 4.0, 5.0));
    assert_eq!(add_assign_real(&mut p, 1.0), Quaternion::new(1.0, 3.0, 4.0, 5.0));
    assert_eq!(sub_assign(&mut p, Quaternion::new(1.0, 3.0, 4.0, 5.0)), Quaternion::ZERO);
    let mut q = Quaternion::new(0.0, 1.0, 0.0, 0.0);
    assert_eq!(mul_assign(&mut q, Quaternion::new(0.0, 0.0, 1.0, 0.0)), Quaternion::K);
    assert_eq!(div_assign(&mut q, Quaternion::K), Quaternion::ONE);
    assert_eq!(q, Quaternion::ONE);
}
