extern crate hamilton;
extern crate rand;
extern crate rand_xoshiro;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use hamilton::algebra;
use hamilton::{Complex, Quaternion};

const SAMPLES: usize = 1000;

fn rng() -> Xoshiro256StarStar {
    Xoshiro256StarStar::seed_from_u64(1)
}

fn assert_close(a: Quaternion, b: Quaternion) {
    let error = (a - b).norm();
    if error > 1e-12 * (1.0 + a.norm() + b.norm()) {
        panic!("{:?} and {:?} differ by {}", a, b, error);
    }
}

fn integer_quaternion<R: Rng>(rng: &mut R) -> Quaternion {
    // small integers add exactly
    let mut c = || rng.gen::<u8>() as f64 - 128.0;
    Quaternion::new(c(), c(), c(), c())
}

#[test]
fn addition_is_associative() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let p = integer_quaternion(&mut rng);
        let q = integer_quaternion(&mut rng);
        let r = integer_quaternion(&mut rng);
        assert_eq!((p + q) + r, p + (q + r));
    }
}

#[test]
fn multiplication_is_associative() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let (p, q, r): (Quaternion, Quaternion, Quaternion) = (rng.gen(), rng.gen(), rng.gen());
        assert_close((p * q) * r, p * (q * r));
    }
}

#[test]
fn multiplication_does_not_commute() {
    let p = Quaternion::new(0.0, 1.0, 0.0, 0.0);
    let q = Quaternion::new(0.0, 0.0, 1.0, 0.0);
    assert_eq!(p * q, Quaternion::new(0.0, 0.0, 0.0, 1.0));
    assert_eq!(q * p, Quaternion::new(0.0, 0.0, 0.0, -1.0));
    assert!(p * q != q * p);
}

#[test]
fn product_with_conjugate_is_norm_squared() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let q: Quaternion = rng.gen();
        assert_close(q * q.conjugate(), Quaternion::new(q.norm().powi(2), 0.0, 0.0, 0.0));
    }
}

#[test]
fn product_with_reciprocal_is_one() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let q: Quaternion = rng.gen();
        println!("q = {}", q);
        assert_close(q * q.reciprocal(), Quaternion::ONE);
        assert_close(q / q, Quaternion::ONE);
    }
}

#[test]
fn subtraction_is_adding_the_negation() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let (p, q): (Quaternion, Quaternion) = (rng.gen(), rng.gen());
        assert_eq!(p - q, p + (-q));
        assert_eq!(algebra::sub(p, q), algebra::add(p, algebra::neg(q)));
    }
}

#[test]
fn complex_operands_match_their_embedding() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let p: Quaternion = rng.gen();
        let c = Complex::new(rng.gen(), rng.gen());
        let embedded = Quaternion::from(c);
        assert_eq!(p + c, p + embedded);
        assert_eq!(p - c, p - embedded);
        assert_eq!(p * c, p * embedded);
        assert_close(p / c, p / embedded);
    }
}

#[test]
fn real_operands_match_their_embedding() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let p: Quaternion = rng.gen();
        let x = rng.gen::<f64>() + 0.5;
        assert_eq!(p + x, p + Quaternion::from(x));
        assert_eq!(p - x, p - Quaternion::from(x));
        assert_close(p * x, p * Quaternion::from(x));
        assert_close(p / x, p / Quaternion::from(x));
    }
}

#[test]
fn power_zero_is_one() {
    let mut rng = rng();
    assert_eq!(Quaternion::ZERO.powi(0), Quaternion::ONE);
    for _ in 0..SAMPLES {
        let q: Quaternion = rng.gen();
        assert_eq!(algebra::pow(q, 0), Quaternion::ONE);
    }
}

#[test]
fn power_is_repeated_multiplication() {
    let q = Quaternion::new(1.0, 1.0, 0.0, 0.0);
    assert_eq!(algebra::pow(q, 3), q * q * q);
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let q: Quaternion = rng.gen();
        assert_eq!(q.powi(4), q * q * q * q);
        assert_close(q.powi(-2), (q * q).reciprocal());
    }
}

#[test]
fn dividing_by_zero_gives_nan() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let p: Quaternion = rng.gen();
        let q = p / Quaternion::ZERO;
        assert!(q.to_array().iter().all(|x| x.is_nan()));
        assert!(!(p / Complex::new(0.0, 0.0)).is_finite());
        assert!(!(p / 0.0).is_finite());
        assert!(!Quaternion::ZERO.powi(-1).is_finite());
    }
}

#[test]
fn exp_and_ln_are_inverses() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let q: Quaternion = rng.gen();
        assert_close(q.ln().exp(), q);
    }
}
