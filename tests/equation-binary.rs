#[macro_use]
extern crate difference;

use std::env;
use std::path::PathBuf;
use std::process::Command;

fn binary() -> PathBuf {
    let mut root = env::current_exe()
        .unwrap()
        .parent()
        .expect("executable's directory")
        .to_path_buf();
    if root.ends_with("deps") {
        root.pop();
    }
    root.join("quaternion-equation")
}

const OPERANDS: &[&str] = &[
    "--lhs-scalar=7",
    "--lhs-i=6",
    "--lhs-j=-4",
    "--lhs-k=2",
    "--rhs-scalar=5",
    "--rhs-i=-1",
    "--rhs-j=-2",
    "--rhs-k=9",
];

fn run(args: &[&str]) -> String {
    let mut cmd = Command::new(binary());
    cmd.env("RUST_BACKTRACE", "1");
    cmd.args(args);
    let out = cmd.output().expect("command failed to run");
    println!("{}", String::from_utf8_lossy(&out.stdout));
    println!("{}", String::from_utf8_lossy(&out.stderr));
    assert!(out.status.success());
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn help_works() {
    run(&["--help"]);
}

#[test]
fn adds() {
    let mut args = OPERANDS.to_vec();
    args.push("--add");
    let expected = "
    +7.0000  +6.0000i  -4.0000j  +2.0000k
+   +5.0000  -1.0000i  -2.0000j  +9.0000k
-----------------------------------------
   +12.0000  +5.0000i  -6.0000j +11.0000k
= 12 + 5i - 6j + 11k
";
    assert_diff!(expected, &run(&args), "\n", 0);
}

#[test]
fn multiplies() {
    let mut args = OPERANDS.to_vec();
    args.push("--mul");
    let expected = "
    +7.0000  +6.0000i  -4.0000j  +2.0000k
*   +5.0000  -1.0000i  -2.0000j  +9.0000k
-----------------------------------------
   +15.0000  -9.0000i -90.0000j +57.0000k
= 15 - 9i - 90j + 57k
";
    assert_diff!(expected, &run(&args), "\n", 0);
}

#[test]
fn missing_components_are_zero() {
    let out = run(&["--lhs-i=1", "--rhs-j=1", "--mul"]);
    assert!(out.ends_with("= 0 + 1k\n"));
}
