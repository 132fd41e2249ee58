//! Criterion benchmarks for the distribution samplers.
//!
//! Benchmarks cover:
//! - Both normal methods against `rand_distr`'s ziggurat sampler
//! - The exponential and Cauchy transforms against their `rand_distr` twins
//! - Gamma on each side of the shape boost
//! - Poisson and binomial across their regime switches
//!
//! Every measurement covers 1000 draws, so per-deviate cost is the
//! reported time over 1000.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::Distribution;
use simrand_deviates::{
    Binomial, Cauchy, Exponential, Gamma, Normal, NormalBoxMuller, Poisson,
};

const N_DRAWS: usize = 1_000;

fn bench_normal(c: &mut Criterion) {
    let mut group = c.benchmark_group("normal_samplers");

    group.bench_function("ratio_of_uniforms", |b| {
        let mut sampler = Normal::new(0.0, 1.0, 42).unwrap();
        b.iter(|| {
            let mut acc = 0.0;
            for _ in 0..N_DRAWS {
                acc += sampler.dev();
            }
            black_box(acc)
        });
    });

    group.bench_function("box_muller", |b| {
        let mut sampler = NormalBoxMuller::new(0.0, 1.0, 42).unwrap();
        b.iter(|| {
            let mut acc = 0.0;
            for _ in 0..N_DRAWS {
                acc += sampler.dev();
            }
            black_box(acc)
        });
    });

    group.bench_function("rand_distr_ziggurat", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        let sampler = rand_distr::Normal::new(0.0, 1.0).unwrap();
        b.iter(|| {
            let mut acc = 0.0;
            for _ in 0..N_DRAWS {
                acc += sampler.sample(&mut rng);
            }
            black_box(acc)
        });
    });

    group.finish();
}

fn bench_exponential(c: &mut Criterion) {
    let mut group = c.benchmark_group("exponential_samplers");

    group.bench_function("log_transform", |b| {
        let mut sampler = Exponential::new(1.5, 7).unwrap();
        b.iter(|| {
            let mut acc = 0.0;
            for _ in 0..N_DRAWS {
                acc += sampler.dev();
            }
            black_box(acc)
        });
    });

    group.bench_function("rand_distr", |b| {
        let mut rng = StdRng::seed_from_u64(7);
        let sampler = rand_distr::Exp::new(1.5).unwrap();
        b.iter(|| {
            let mut acc = 0.0;
            for _ in 0..N_DRAWS {
                acc += sampler.sample(&mut rng);
            }
            black_box(acc)
        });
    });

    group.finish();
}

fn bench_cauchy(c: &mut Criterion) {
    let mut group = c.benchmark_group("cauchy_samplers");

    group.bench_function("half_disc", |b| {
        let mut sampler = Cauchy::new(0.0, 1.0, 3).unwrap();
        b.iter(|| {
            let mut acc = 0.0;
            for _ in 0..N_DRAWS {
                acc += sampler.dev();
            }
            black_box(acc)
        });
    });

    group.bench_function("rand_distr", |b| {
        let mut rng = StdRng::seed_from_u64(3);
        let sampler = rand_distr::Cauchy::new(0.0, 1.0).unwrap();
        b.iter(|| {
            let mut acc = 0.0;
            for _ in 0..N_DRAWS {
                acc += sampler.sample(&mut rng);
            }
            black_box(acc)
        });
    });

    group.finish();
}

fn bench_gamma(c: &mut Criterion) {
    let mut group = c.benchmark_group("gamma_samplers");

    for shape in [0.5, 2.5, 20.0] {
        group.bench_with_input(
            BenchmarkId::new("marsaglia_tsang", shape),
            &shape,
            |b, &shape| {
                let mut sampler = Gamma::new(shape, 1.0, 5).unwrap();
                b.iter(|| {
                    let mut acc = 0.0;
                    for _ in 0..N_DRAWS {
                        acc += sampler.dev();
                    }
                    black_box(acc)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("rand_distr", shape), &shape, |b, &shape| {
            let mut rng = StdRng::seed_from_u64(5);
            let sampler = rand_distr::Gamma::new(shape, 1.0).unwrap();
            b.iter(|| {
                let mut acc = 0.0;
                for _ in 0..N_DRAWS {
                    acc += sampler.sample(&mut rng);
                }
                black_box(acc)
            });
        });
    }

    group.finish();
}

fn bench_poisson(c: &mut Criterion) {
    let mut group = c.benchmark_group("poisson_samplers");

    // 3 runs the product method, 30 the rejection method.
    for lambda in [3.0, 30.0] {
        group.bench_with_input(BenchmarkId::new("simrand", lambda), &lambda, |b, &lambda| {
            let mut sampler = Poisson::new(lambda, 9).unwrap();
            b.iter(|| {
                let mut acc = 0i64;
                for _ in 0..N_DRAWS {
                    acc += i64::from(sampler.dev());
                }
                black_box(acc)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("rand_distr", lambda),
            &lambda,
            |b, &lambda| {
                let mut rng = StdRng::seed_from_u64(9);
                let sampler = rand_distr::Poisson::new(lambda).unwrap();
                b.iter(|| {
                    let mut acc = 0.0;
                    for _ in 0..N_DRAWS {
                        acc += sampler.sample(&mut rng);
                    }
                    black_box(acc)
                });
            },
        );
    }

    group.finish();
}

fn bench_binomial(c: &mut Criterion) {
    let mut group = c.benchmark_group("binomial_samplers");

    // 50 trials run bit-parallel, 300 through rejection.
    for (n, p) in [(50, 0.3), (300, 0.4)] {
        group.bench_with_input(
            BenchmarkId::new("simrand", format!("n{n}_p{p}")),
            &(n, p),
            |b, &(n, p)| {
                let mut sampler = Binomial::new(n, p, 11).unwrap();
                b.iter(|| {
                    let mut acc = 0i64;
                    for _ in 0..N_DRAWS {
                        acc += i64::from(sampler.dev());
                    }
                    black_box(acc)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("rand_distr", format!("n{n}_p{p}")),
            &(n, p),
            |b, &(n, p)| {
                let mut rng = StdRng::seed_from_u64(11);
                let sampler = rand_distr::Binomial::new(n as u64, p).unwrap();
                b.iter(|| {
                    let mut acc = 0u64;
                    for _ in 0..N_DRAWS {
                        acc += sampler.sample(&mut rng);
                    }
                    black_box(acc)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_normal,
    bench_exponential,
    bench_cauchy,
    bench_gamma,
    bench_poisson,
    bench_binomial
);
criterion_main!(benches);
