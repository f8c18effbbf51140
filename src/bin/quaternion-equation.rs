use auto_args::AutoArgs;

use hamilton::equation::{Equation, EquationParams};

fn main() {
    let equation = Equation::from(EquationParams::from_args());
    print!("{}", equation);
    println!("= {}", equation.result());
}
