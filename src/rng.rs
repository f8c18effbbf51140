//! Random quaternions.

use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::quaternion::Quaternion;

/// Samples each component uniformly from `[-1, 1)`.
impl Distribution<Quaternion> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Quaternion {
        let mut component = || 2.0 * rng.gen::<f64>() - 1.0;
        Quaternion::new(component(), component(), component(), component())
    }
}

#[test]
fn components_are_in_range() {
    use rand::SeedableRng;
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    for _ in 0..1000 {
        let q: Quaternion = rng.gen();
        for &x in q.to_array().iter() {
            assert!(x >= -1.0 && x < 1.0);
        }
    }
}
