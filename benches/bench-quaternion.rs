#[macro_use]
extern crate criterion;

use criterion::Criterion;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use hamilton::algebra;
use hamilton::Quaternion;

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = Xoshiro256StarStar::seed_from_u64(0);
    c.bench_function("Quaternion gen", move |b| b.iter(|| rng.gen::<Quaternion>()));

    let mut rng = Xoshiro256StarStar::seed_from_u64(1);
    let (p, q): (Quaternion, Quaternion) = (rng.gen(), rng.gen());
    c.bench_function("hamilton product", move |b| b.iter(|| algebra::mul(p, q)));
    c.bench_function("right division", move |b| b.iter(|| algebra::div(p, q)));
    c.bench_function("reciprocal", move |b| b.iter(|| q.reciprocal()));
    c.bench_function("exp", move |b| b.iter(|| q.exp()));

    c.bench_function_over_inputs(
        "powi",
        move |b, &&n| b.iter(|| q.powi(n)),
        &[2, 8, 64, -8],
    );

    c.bench_function("display", move |b| b.iter(|| p.to_string()));
    c.bench_function("display_with_zeros", move |b| b.iter(|| p.display_with_zeros()));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
