//! A minimal complex number, used as an operand for quaternion arithmetic.

/// A complex number `re + im·i`.
///
/// This type has no arithmetic of its own.  It exists to be embedded
/// into the quaternion algebra as `(re, im, 0, 0)`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Complex {
    /// The real part.
    pub re: f64,
    /// The imaginary part.
    pub im: f64,
}

impl Complex {
    /// Create a complex number.
    pub const fn new(re: f64, im: f64) -> Complex {
        Complex { re, im }
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Complex {
        Complex { re, im: 0.0 }
    }
}

#[test]
fn real_embeds_with_zero_imaginary_part() {
    assert_eq!(Complex::from(2.5), Complex::new(2.5, 0.0));
    assert_eq!(Complex::default(), Complex::new(0.0, 0.0));
}
