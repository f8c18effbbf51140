//! The quaternion type.

use crate::algebra;
use crate::complex::Complex;

/// A quaternion `scalar + i·𝐢 + j·𝐣 + k·𝐤`.
///
/// Any quadruple of `f64` is a valid quaternion.  Arithmetic never
/// fails: dividing by zero leaves NaN or infinite components behind,
/// which can be detected with [`Quaternion::is_finite`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Quaternion {
    /// The scalar (real) part.
    pub scalar: f64,
    /// The 𝐢 component of the vector part.
    pub i: f64,
    /// The 𝐣 component of the vector part.
    pub j: f64,
    /// The 𝐤 component of the vector part.
    pub k: f64,
}

impl Quaternion {
    /// The zero quaternion.
    pub const ZERO: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 0.0);
    /// The multiplicative identity.
    pub const ONE: Quaternion = Quaternion::new(1.0, 0.0, 0.0, 0.0);
    /// The unit 𝐢.
    pub const I: Quaternion = Quaternion::new(0.0, 1.0, 0.0, 0.0);
    /// The unit 𝐣.
    pub const J: Quaternion = Quaternion::new(0.0, 0.0, 1.0, 0.0);
    /// The unit 𝐤.
    pub const K: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 1.0);

    /// Create a quaternion from its four components, exactly as given.
    pub const fn new(scalar: f64, i: f64, j: f64, k: f64) -> Quaternion {
        Quaternion { scalar, i, j, k }
    }

    /// Overwrite all four components.
    pub fn set_vals(&mut self, scalar: f64, i: f64, j: f64, k: f64) {
        *self = Quaternion::new(scalar, i, j, k);
    }

    /// Build the quaternion `(a.re, a.im, b.re, b.im)`.
    pub const fn from_complex_pair(a: Complex, b: Complex) -> Quaternion {
        Quaternion::new(a.re, a.im, b.re, b.im)
    }

    /// Split into `(scalar + i·i, j + k·i)`.
    pub fn complex_pair(self) -> (Complex, Complex) {
        (Complex::new(self.scalar, self.i), Complex::new(self.j, self.k))
    }

    /// The components in `[scalar, i, j, k]` order.
    pub fn to_array(self) -> [f64; 4] {
        [self.scalar, self.i, self.j, self.k]
    }

    /// The vector part, `(0, i, j, k)`.
    pub fn vector(self) -> Quaternion {
        Quaternion::new(0.0, self.i, self.j, self.k)
    }

    /// The conjugate, with the vector part negated.
    pub fn conjugate(self) -> Quaternion {
        Quaternion::new(self.scalar, -self.i, -self.j, -self.k)
    }

    /// The square of the norm.
    pub fn norm_squared(self) -> f64 {
        self.scalar * self.scalar + self.i * self.i + self.j * self.j + self.k * self.k
    }

    /// The Euclidean norm of the four components.
    pub fn norm(self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// The multiplicative inverse, `conjugate / norm²`.
    ///
    /// The reciprocal of zero has NaN components.
    pub fn reciprocal(self) -> Quaternion {
        algebra::div_real(self.conjugate(), self.norm_squared())
    }

    /// This quaternion scaled to unit norm.  Zero is its own unit.
    pub fn unit(self) -> Quaternion {
        if self == Quaternion::ZERO {
            return self;
        }
        algebra::div_real(self, self.norm())
    }

    /// Raise to an integer power by repeated multiplication.
    ///
    /// `powi(0)` is the identity for every quaternion, zero included.
    /// Negative powers are powers of the reciprocal.
    pub fn powi(self, n: i32) -> Quaternion {
        let (base, count) = if n < 0 {
            (self.reciprocal(), n.unsigned_abs())
        } else {
            (self, n as u32)
        };
        let mut q = Quaternion::ONE;
        for _ in 0..count {
            algebra::mul_assign(&mut q, base);
        }
        q
    }

    /// The exponential, `e^s (cos|v| + v̂ sin|v|)`.
    pub fn exp(self) -> Quaternion {
        let v = self.vector();
        let theta = v.norm();
        let direction = algebra::mul_real(v.unit(), theta.sin());
        algebra::mul_real(algebra::add_real(direction, theta.cos()), self.scalar.exp())
    }

    /// The natural logarithm, `ln|q| + v̂ acos(s/|q|)`.
    pub fn ln(self) -> Quaternion {
        let norm = self.norm();
        let angle = (self.scalar / norm).acos();
        algebra::add_real(algebra::mul_real(self.vector().unit(), angle), norm.ln())
    }

    /// Raise to a real power through the polar form.
    pub fn powf(self, x: f64) -> Quaternion {
        let norm = self.norm();
        let angle = (self.scalar / norm).acos();
        let direction = algebra::mul_real(self.vector().unit(), (x * angle).sin());
        algebra::mul_real(algebra::add_real(direction, (x * angle).cos()), norm.powf(x))
    }

    /// True if no component is infinite or NaN.
    pub fn is_finite(self) -> bool {
        self.to_array().iter().all(|x| x.is_finite())
    }

    /// True if any component is NaN.
    pub fn is_nan(self) -> bool {
        self.to_array().iter().any(|x| x.is_nan())
    }
}

impl From<f64> for Quaternion {
    fn from(scalar: f64) -> Quaternion {
        Quaternion::new(scalar, 0.0, 0.0, 0.0)
    }
}

impl From<Complex> for Quaternion {
    fn from(c: Complex) -> Quaternion {
        Quaternion::new(c.re, c.im, 0.0, 0.0)
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from(x: [f64; 4]) -> Quaternion {
        Quaternion::new(x[0], x[1], x[2], x[3])
    }
}

impl PartialEq<f64> for Quaternion {
    fn eq(&self, other: &f64) -> bool {
        *self == Quaternion::from(*other)
    }
}

impl PartialEq<Complex> for Quaternion {
    fn eq(&self, other: &Complex) -> bool {
        *self == Quaternion::from(*other)
    }
}

#[cfg(test)]
fn assert_close(a: Quaternion, b: Quaternion) {
    println!("comparing {:?}\n     with {:?}", a, b);
    assert!(algebra::sub(a, b).norm() < 1e-12 * (1.0 + b.norm()));
}

#[test]
fn set_vals_replaces_everything() {
    let mut q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    q.set_vals(-1.0, 0.0, 0.5, 8.0);
    assert_eq!(q, Quaternion::new(-1.0, 0.0, 0.5, 8.0));
}

#[test]
fn norm_of_three_four() {
    assert_eq!(Quaternion::new(0.0, 3.0, 0.0, 4.0).norm(), 5.0);
    assert_eq!(Quaternion::ZERO.norm(), 0.0);
}

#[test]
fn conjugate_keeps_scalar() {
    let q = Quaternion::new(1.0, -2.0, 3.0, -4.0);
    assert_eq!(q.conjugate(), Quaternion::new(1.0, 2.0, -3.0, 4.0));
    assert_eq!(q.conjugate().conjugate(), q);
}

#[test]
fn reciprocal_of_zero_is_nan() {
    let r = Quaternion::ZERO.reciprocal();
    assert!(r.is_nan());
    assert!(!r.is_finite());
}

#[test]
fn reciprocal_of_i_is_minus_i() {
    assert_eq!(Quaternion::I.reciprocal(), Quaternion::new(0.0, -1.0, 0.0, 0.0));
}

#[test]
fn power_zero_is_identity() {
    assert_eq!(Quaternion::ZERO.powi(0), Quaternion::ONE);
    assert_eq!(Quaternion::new(3.0, -1.0, 2.0, 7.0).powi(0), Quaternion::ONE);
}

#[test]
fn power_three_is_repeated_product() {
    let q = Quaternion::new(1.0, 1.0, 0.0, 0.0);
    assert_eq!(q.powi(3), q * q * q);
    assert_eq!(q.powi(3), Quaternion::new(-2.0, 2.0, 0.0, 0.0));
}

#[test]
fn negative_power_uses_reciprocal() {
    let q = Quaternion::new(1.0, 2.0, -0.5, 3.0);
    assert_close(q.powi(-1), q.reciprocal());
    assert_close(q.powi(-2), q.reciprocal() * q.reciprocal());
    assert_close(q.powi(-3) * q.powi(3), Quaternion::ONE);
}

#[test]
fn i_squared_is_minus_one() {
    assert_eq!(Quaternion::I.powi(2), -1.0);
    assert_eq!(Quaternion::J.powi(2), -1.0);
    assert_eq!(Quaternion::K.powi(2), -1.0);
    assert_eq!(Quaternion::I * Quaternion::J * Quaternion::K, -1.0);
}

#[test]
fn unit_has_norm_one() {
    let q = Quaternion::new(1.0, 2.0, -0.5, 3.0);
    assert!((q.unit().norm() - 1.0).abs() < 1e-15);
    assert_eq!(Quaternion::ZERO.unit(), Quaternion::ZERO);
}

#[test]
fn complex_pair_round_trip() {
    let q = Quaternion::new(1.0, 2.0, -0.5, 3.0);
    let (a, b) = q.complex_pair();
    assert_eq!(a, Complex::new(1.0, 2.0));
    assert_eq!(b, Complex::new(-0.5, 3.0));
    assert_eq!(Quaternion::from_complex_pair(a, b), q);
}

#[test]
fn exp_of_real_is_real_exp() {
    assert_close(Quaternion::from(1.0).exp(), Quaternion::from(1.0_f64.exp()));
}

#[test]
fn exp_of_i_pi_is_minus_one() {
    let q = algebra::mul_real(Quaternion::I, std::f64::consts::PI);
    assert_close(q.exp(), Quaternion::from(-1.0));
}

#[test]
fn exp_undoes_ln() {
    let q = Quaternion::new(0.5, -1.0, 2.0, 0.25);
    assert_close(q.ln().exp(), q);
}

#[test]
fn powf_matches_powi() {
    let q = Quaternion::new(0.5, -1.0, 2.0, 0.25);
    assert_close(q.powf(3.0), q.powi(3));
    assert_close(q.powf(0.5) * q.powf(0.5), q);
}

#[test]
fn embeddings_compare_equal() {
    assert_eq!(Quaternion::new(2.0, 0.0, 0.0, 0.0), 2.0);
    assert!(Quaternion::new(2.0, 1.0, 0.0, 0.0) != 2.0);
    assert_eq!(Quaternion::new(2.0, 1.0, 0.0, 0.0), Complex::new(2.0, 1.0));
    assert_eq!(Quaternion::from([1.0, 2.0, 3.0, 4.0]).to_array(), [1.0, 2.0, 3.0, 4.0]);
}
