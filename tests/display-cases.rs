extern crate hamilton;

use hamilton::display::{PrettyFloat, VectorPart, WithZeros};
use hamilton::Quaternion;

#[test]
fn wrappers_display() {
    assert_eq!(
        format!("{}", WithZeros(Quaternion::new(-8.0, 2.0, 13.0, -14.0))),
        "-8 + 2i + 13j - 14k"
    );
    assert_eq!(format!("{}", VectorPart(Quaternion::new(5.0, -1.0, 8.0, 0.0))), "-1i + 8j");
    assert_eq!(format!("{}", PrettyFloat(1.0 / 3.0)), "0.333333");
}

#[test]
fn written_to_a_stream() {
    use std::io::Write;
    let mut out = Vec::new();
    writeln!(out, "{}", Quaternion::new(1.0, -2.0, 3.0, 0.0)).unwrap();
    writeln!(out, "{}", Quaternion::new(1.0 / 3.0, 1e20, 0.0, -2.0 / 3.0)).unwrap();
    write!(out, "{:.1}", Quaternion::new(0.3, 0.0, 0.0, -0.7)).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "1 - 2i + 3j\n0.333333 + 1e+20i - 0.666667k\n0.3 - 0.7k"
    );
}
