//! Operator overloads, each deferring to [`crate::algebra`].
//!
//! Only quaternion-on-the-left forms exist.  Compound assignment is
//! provided for quaternion and real right operands, not complex ones.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::algebra;
use crate::complex::Complex;
use crate::quaternion::Quaternion;

macro_rules! binary_op {
    ($trait:ident, $method:ident, $rhs:ty, $f:path) => {
        impl $trait<$rhs> for Quaternion {
            type Output = Quaternion;
            fn $method(self, rhs: $rhs) -> Quaternion {
                $f(self, rhs)
            }
        }
    };
}

macro_rules! assign_op {
    ($trait:ident, $method:ident, $rhs:ty, $f:path) => {
        impl $trait<$rhs> for Quaternion {
            fn $method(&mut self, rhs: $rhs) {
                $f(self, rhs);
            }
        }
    };
}

binary_op!(Add, add, Quaternion, algebra::add);
binary_op!(Add, add, f64, algebra::add_real);
binary_op!(Add, add, Complex, algebra::add_complex);
binary_op!(Sub, sub, Quaternion, algebra::sub);
binary_op!(Sub, sub, f64, algebra::sub_real);
binary_op!(Sub, sub, Complex, algebra::sub_complex);
binary_op!(Mul, mul, Quaternion, algebra::mul);
binary_op!(Mul, mul, f64, algebra::mul_real);
binary_op!(Mul, mul, Complex, algebra::mul_complex);
binary_op!(Div, div, Quaternion, algebra::div);
binary_op!(Div, div, f64, algebra::div_real);
binary_op!(Div, div, Complex, algebra::div_complex);

assign_op!(AddAssign, add_assign, Quaternion, algebra::add_assign);
assign_op!(AddAssign, add_assign, f64, algebra::add_assign_real);
assign_op!(SubAssign, sub_assign, Quaternion, algebra::sub_assign);
assign_op!(SubAssign, sub_assign, f64, algebra::sub_assign_real);
assign_op!(MulAssign, mul_assign, Quaternion, algebra::mul_assign);
assign_op!(MulAssign, mul_assign, f64, algebra::mul_assign_real);
assign_op!(DivAssign, div_assign, Quaternion, algebra::div_assign);
assign_op!(DivAssign, div_assign, f64, algebra::div_assign_real);

impl Neg for Quaternion {
    type Output = Quaternion;
    fn neg(self) -> Quaternion {
        algebra::neg(self)
    }
}

#[test]
fn operators_agree_with_named_functions() {
    let p = Quaternion::new(1.0, -2.0, 0.5, 3.0);
    let q = Quaternion::new(-0.25, 4.0, 1.0, -1.0);
    let c = Complex::new(2.0, -3.0);
    assert_eq!(p + q, algebra::add(p, q));
    assert_eq!(p - q, algebra::sub(p, q));
    assert_eq!(p * q, algebra::mul(p, q));
    assert_eq!(p / q, algebra::div(p, q));
    assert_eq!(p + 2.0, algebra::add_real(p, 2.0));
    assert_eq!(p - 2.0, algebra::sub_real(p, 2.0));
    assert_eq!(p * 2.0, algebra::mul_real(p, 2.0));
    assert_eq!(p / 2.0, algebra::div_real(p, 2.0));
    assert_eq!(p + c, algebra::add_complex(p, c));
    assert_eq!(p - c, algebra::sub_complex(p, c));
    assert_eq!(p * c, algebra::mul_complex(p, c));
    assert_eq!(p / c, algebra::div_complex(p, c));
    assert_eq!(-p, algebra::neg(p));
}

#[test]
fn assignment_operators_update_in_place() {
    let p = Quaternion::new(1.0, -2.0, 0.5, 3.0);
    let q = Quaternion::new(-0.25, 4.0, 1.0, -1.0);
    let mut r = p;
    r += q;
    assert_eq!(r, p + q);
    r -= q;
    assert_eq!(r, p + q - q);
    let mut r = p;
    r *= q;
    assert_eq!(r, p * q);
    r /= q;
    assert_eq!(r, p * q / q);
    let mut r = p;
    r += 1.0;
    r -= 3.0;
    r *= 2.0;
    r /= 4.0;
    assert_eq!(r, (p + 1.0 - 3.0) * 2.0 / 4.0);
}
