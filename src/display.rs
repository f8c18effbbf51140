//! Human-readable rendering of quaternions, in `s + xi + yj + zk` form.
//!
//! Each number is printed like C's `%g`, with six significant digits,
//! unless the formatter is given a precision, in which case every number
//! is printed with that many decimals.  A term gets a `-` glyph
//! only when its component is strictly negative, so negative zero is
//! printed as `+ 0`.

use std::fmt::{Display, Formatter, Result};

use crate::quaternion::Quaternion;

/// Wrap this around a quaternion to print only its vector part.
pub struct VectorPart(pub Quaternion);

/// Wrap this around a quaternion to print all four terms, even zeros.
pub struct WithZeros(pub Quaternion);

/// Wrap this type around an `f64` in order to print it the way `%g` does.
pub struct PrettyFloat(pub f64);

const SIGNIFICANT_DIGITS: usize = 6;

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

impl Display for PrettyFloat {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let x = self.0;
        if x.is_nan() {
            return write!(f, "nan");
        }
        if x.is_infinite() {
            return write!(f, "{}", if x < 0.0 { "-inf" } else { "inf" });
        }
        // the exponent after rounding decides between the two forms
        let se = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, x);
        let (mantissa, exponent) = match se.find('e') {
            Some(at) => (&se[..at], se[at + 1..].parse::<i32>().unwrap_or(0)),
            None => (se.as_str(), 0),
        };
        if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", trim_zeros(mantissa), sign, exponent.abs())
        } else {
            let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
            write!(f, "{}", trim_zeros(&format!("{:.*}", decimals, x)))
        }
    }
}

fn number(f: &mut Formatter, x: f64) -> Result {
    match f.precision() {
        Some(precision) => write!(f, "{:.*}", precision, x),
        None => write!(f, "{}", PrettyFloat(x)),
    }
}

fn term(f: &mut Formatter, x: f64, suffix: &str) -> Result {
    write!(f, " {} ", if x < 0.0 { "-" } else { "+" })?;
    number(f, x.abs())?;
    write!(f, "{}", suffix)
}

fn vector_terms(q: &Quaternion) -> [(f64, &'static str); 3] {
    [(q.i, "i"), (q.j, "j"), (q.k, "k")]
}

impl Display for Quaternion {
    fn fmt(&self, f: &mut Formatter) -> Result {
        number(f, self.scalar)?;
        for &(x, suffix) in vector_terms(self).iter() {
            if x != 0.0 {
                term(f, x, suffix)?;
            }
        }
        Ok(())
    }
}

impl Display for WithZeros {
    fn fmt(&self, f: &mut Formatter) -> Result {
        number(f, self.0.scalar)?;
        for &(x, suffix) in vector_terms(&self.0).iter() {
            term(f, x, suffix)?;
        }
        Ok(())
    }
}

impl Display for VectorPart {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let terms = vector_terms(&self.0);
        let mut nonzero = terms.iter().filter(|&&(x, _)| x != 0.0);
        match nonzero.next() {
            None => write!(f, "0"),
            Some(&(x, suffix)) => {
                // the leading term carries its own sign
                number(f, x)?;
                write!(f, "{}", suffix)?;
                for &(x, suffix) in nonzero {
                    term(f, x, suffix)?;
                }
                Ok(())
            }
        }
    }
}

impl Quaternion {
    /// Render as `s + xi + yj + zk`, leaving out zero vector terms.
    pub fn display(self) -> String {
        self.to_string()
    }

    /// Render only the vector part, or `0` if it is zero.
    pub fn display_vector(self) -> String {
        VectorPart(self).to_string()
    }

    /// Render as `s + xi + yj + zk`, including zero vector terms.
    pub fn display_with_zeros(self) -> String {
        WithZeros(self).to_string()
    }
}

#[test]
fn zero_terms_are_left_out() {
    assert_eq!(Quaternion::new(1.0, -2.0, 3.0, 0.0).display(), "1 - 2i + 3j");
    assert_eq!(Quaternion::new(0.0, 0.0, 0.0, 0.0).display(), "0");
    assert_eq!(Quaternion::new(0.0, 0.0, 0.0, -0.5).display(), "0 - 0.5k");
    assert_eq!(Quaternion::new(2.5, -0.0, 0.0, 1.0).display(), "2.5 + 1k");
}

#[test]
fn zeros_are_kept_when_asked() {
    assert_eq!(
        Quaternion::new(1.0, 0.0, -1.0, 0.0).display_with_zeros(),
        "1 + 0i - 1j + 0k"
    );
    assert_eq!(
        Quaternion::new(0.0, -0.0, 0.0, 0.0).display_with_zeros(),
        "0 + 0i + 0j + 0k"
    );
}

#[test]
fn vector_part_leads_with_first_nonzero() {
    assert_eq!(Quaternion::new(0.0, 0.0, 0.0, 0.0).display_vector(), "0");
    assert_eq!(Quaternion::new(9.0, 0.0, 0.0, 0.0).display_vector(), "0");
    assert_eq!(Quaternion::new(9.0, 1.0, -2.0, 3.0).display_vector(), "1i - 2j + 3k");
    assert_eq!(Quaternion::new(9.0, 0.0, -2.0, 3.0).display_vector(), "-2j + 3k");
    assert_eq!(Quaternion::new(9.0, -1.0, 0.0, -3.0).display_vector(), "-1i - 3k");
    assert_eq!(Quaternion::new(9.0, 0.0, 0.0, -3.0).display_vector(), "-3k");
}

#[test]
fn precision_applies_to_every_number() {
    let q = Quaternion::new(1.0 / 3.0, -0.5, 0.0, 2.0);
    assert_eq!(format!("{:.2}", q), "0.33 - 0.50i + 2.00k");
    assert_eq!(format!("{:.1}", WithZeros(q)), "0.3 - 0.5i + 0.0j + 2.0k");
    assert_eq!(format!("{:.3}", VectorPart(q)), "-0.500i + 2.000k");
}

#[test]
fn six_significant_digits() {
    for &(x, expected) in &[
        (1.0 / 3.0, "0.333333"),
        (-2.0 / 3.0, "-0.666667"),
        (1e20, "1e+20"),
        (1.5e-7, "1.5e-07"),
        (123456789.0, "1.23457e+08"),
        (999999.5, "1e+06"),
        (100000.0, "100000"),
        (0.0001, "0.0001"),
        (0.00001, "1e-05"),
        (2.5, "2.5"),
        (0.0, "0"),
        (std::f64::INFINITY, "inf"),
    ] {
        println!("{:e} should print as {}", x, expected);
        assert_eq!(PrettyFloat(x).to_string(), expected);
    }
}

#[test]
fn components_print_like_ostream() {
    let q = Quaternion::new(1.0 / 3.0, 1e20, 0.0, -2.0 / 3.0);
    assert_eq!(q.display(), "0.333333 + 1e+20i - 0.666667k");
    assert_eq!(q.display_with_zeros(), "0.333333 + 1e+20i + 0j - 0.666667k");
    assert_eq!(q.display_vector(), "1e+20i - 0.666667k");
    assert_eq!(
        Quaternion::new(0.0, -1.0 / 3.0, 0.0, 0.0).display_vector(),
        "-0.333333i"
    );
}

#[test]
fn tiny_components_are_still_printed() {
    let q = Quaternion::new(1.0, 1e-20, 0.0, 0.0);
    println!("{}", q);
    assert_eq!(format!("{:.2}", q), "1.00 + 0.00i");
}
