//! Vertical display of a binary quaternion equation.
//!
//! ```text
//!
//!     +7.0000  +6.0000i  -4.0000j  +2.0000k
//! +   +5.0000  -1.0000i  -2.0000j  +9.0000k
//! -----------------------------------------
//!    +12.0000  +5.0000i  -6.0000j +11.0000k
//!
//! ```

use std::fmt::{Display, Formatter, Result};

use auto_args::AutoArgs;

use crate::algebra;
use crate::quaternion::Quaternion;

/// A binary quaternion operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, AutoArgs)]
pub enum Operator {
    /// Addition
    Add,
    /// Subtraction
    Sub,
    /// Hamilton product
    Mul,
    /// Right division
    Div,
}

impl Operator {
    /// Apply the operator to `lhs` and `rhs`, in that order.
    pub fn apply(self, lhs: Quaternion, rhs: Quaternion) -> Quaternion {
        match self {
            Operator::Add => algebra::add(lhs, rhs),
            Operator::Sub => algebra::sub(lhs, rhs),
            Operator::Mul => algebra::mul(lhs, rhs),
            Operator::Div => algebra::div(lhs, rhs),
        }
    }

    /// The glyph that marks this operator.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

/// An equation `lhs <operator> rhs`, displayed with its result.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Equation {
    /// The left operand.
    pub lhs: Quaternion,
    /// The right operand.
    pub rhs: Quaternion,
    /// The operator.
    pub operator: Operator,
}

impl Equation {
    /// Create an equation.
    pub fn new(lhs: Quaternion, rhs: Quaternion, operator: Operator) -> Equation {
        Equation { lhs, rhs, operator }
    }

    /// The right hand side of the equation.
    pub fn result(&self) -> Quaternion {
        self.operator.apply(self.lhs, self.rhs)
    }

    fn width(&self, result: Quaternion) -> usize {
        let widest = [self.lhs, self.rhs, result]
            .iter()
            .flat_map(|q| q.to_array().to_vec())
            .map(|x| format!("{:.4}", x.abs()).len())
            .max()
            .unwrap_or(0);
        std::cmp::max(2, widest + 3)
    }
}

fn write_row(f: &mut Formatter, q: Quaternion, width: usize) -> Result {
    let suffixes = ["", "i", "j", "k"];
    for (&x, suffix) in q.to_array().iter().zip(suffixes.iter()) {
        let sign = if x < 0.0 { '-' } else { '+' };
        let cell = format!("{}{:.4}{}", sign, x.abs(), suffix);
        write!(f, "{:>width$}", cell, width = width)?;
    }
    Ok(())
}

impl Display for Equation {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let result = self.result();
        let width = self.width(result);
        write!(f, "\n ")?;
        write_row(f, self.lhs, width)?;
        write!(f, "\n{}", self.operator.symbol())?;
        write_row(f, self.rhs, width)?;
        write!(f, "\n{}\n ", "-".repeat(4 * width + 1))?;
        write_row(f, result, width)?;
        writeln!(f)
    }
}

/// A quaternion given on the command line.  Missing components are zero.
#[derive(Debug, AutoArgs)]
pub struct QuaternionParams {
    /// The scalar part.
    pub scalar: Option<f64>,
    /// The i component.
    pub i: Option<f64>,
    /// The j component.
    pub j: Option<f64>,
    /// The k component.
    pub k: Option<f64>,
}

impl From<QuaternionParams> for Quaternion {
    fn from(params: QuaternionParams) -> Quaternion {
        Quaternion::new(
            params.scalar.unwrap_or(0.0),
            params.i.unwrap_or(0.0),
            params.j.unwrap_or(0.0),
            params.k.unwrap_or(0.0),
        )
    }
}

/// The parameters needed to describe an equation.
///
/// These parameters are normally set via command-line arguments.
#[derive(Debug, AutoArgs)]
pub struct EquationParams {
    /// The left operand.
    pub lhs: QuaternionParams,
    /// The right operand.
    pub rhs: QuaternionParams,
    /// The operator.
    pub _operator: Operator,
}

impl From<EquationParams> for Equation {
    fn from(params: EquationParams) -> Equation {
        Equation::new(params.lhs.into(), params.rhs.into(), params._operator)
    }
}

#[cfg(test)]
fn check_equation(operator: Operator, expected: &str) {
    let lhs = Quaternion::new(7.0, 6.0, -4.0, 2.0);
    let rhs = Quaternion::new(5.0, -1.0, -2.0, 9.0);
    let shown = Equation::new(lhs, rhs, operator).to_string();
    println!("{}", shown);
    assert_eq!(shown, expected);
}

#[test]
fn addition() {
    check_equation(
        Operator::Add,
        "
    +7.0000  +6.0000i  -4.0000j  +2.0000k
+   +5.0000  -1.0000i  -2.0000j  +9.0000k
-----------------------------------------
   +12.0000  +5.0000i  -6.0000j +11.0000k
",
    );
}

#[test]
fn subtraction() {
    check_equation(
        Operator::Sub,
        "
   +7.0000 +6.0000i -4.0000j +2.0000k
-  +5.0000 -1.0000i -2.0000j +9.0000k
-------------------------------------
   +2.0000 +7.0000i -2.0000j -7.0000k
",
    );
}

#[test]
fn multiplication() {
    check_equation(
        Operator::Mul,
        "
    +7.0000  +6.0000i  -4.0000j  +2.0000k
*   +5.0000  -1.0000i  -2.0000j  +9.0000k
-----------------------------------------
   +15.0000  -9.0000i -90.0000j +57.0000k
",
    );
}

#[test]
fn division() {
    check_equation(
        Operator::Div,
        "
   +7.0000 +6.0000i -4.0000j +2.0000k
/  +5.0000 -1.0000i -2.0000j +9.0000k
-------------------------------------
   +0.4955 +0.6216i +0.4505j -0.3333k
",
    );
}

#[test]
fn width_fits_the_widest_component() {
    let equation = Equation::new(
        Quaternion::new(60.0, 0.0, 0.0, 0.0),
        Quaternion::new(-50.0, 0.0, 0.0, 0.0),
        Operator::Sub,
    );
    // "110.0000" comes from the result alone
    assert_eq!(equation.width(equation.result()), 11);
    assert!(equation.to_string().ends_with(" +110.0000   +0.0000i   +0.0000j   +0.0000k\n"));
    let zero = Equation::new(Quaternion::ZERO, Quaternion::ZERO, Operator::Add);
    assert_eq!(zero.width(zero.result()), 9);
}

#[test]
fn params_fill_missing_components_with_zero() {
    let params = EquationParams {
        lhs: QuaternionParams {
            scalar: Some(1.0),
            i: None,
            j: Some(-2.0),
            k: None,
        },
        rhs: QuaternionParams {
            scalar: None,
            i: None,
            j: None,
            k: Some(3.0),
        },
        _operator: Operator::Mul,
    };
    let equation = Equation::from(params);
    assert_eq!(equation.lhs, Quaternion::new(1.0, 0.0, -2.0, 0.0));
    assert_eq!(equation.rhs, Quaternion::K * 3.0);
    assert_eq!(equation.result(), Quaternion::new(0.0, -6.0, 0.0, 3.0));
}
