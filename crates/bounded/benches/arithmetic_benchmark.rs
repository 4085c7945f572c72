// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use bounded::{Between, Clamp, Integer, Wrap};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

type Sample = Integer<Between<-1000, 1000, i16>>;
type Weight = Integer<Between<1, 64, u8>>;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn random_inputs(len: usize) -> (Vec<i16>, Vec<u8>) {
    let mut rng = ChaCha8Rng::seed_from_u64(0xB0_0D);
    let samples = (0..len).map(|_| rng.random_range(-1000..=1000)).collect();
    let weights = (0..len).map(|_| rng.random_range(1..=64)).collect();
    (samples, weights)
}

/// Weighted sum with ranges derived at compile time; the result is reduced
/// through a clamping range after every step.
fn bench_weighted_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighted_sum");

    for len in SIZES {
        let (samples, weights) = random_inputs(len);
        let bounded_samples: Vec<Sample> = samples.iter().map(|&s| Sample::new(s)).collect();
        let bounded_weights: Vec<Weight> = weights.iter().map(|&w| Weight::new(w)).collect();

        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("native_checked", len), &len, |b, _| {
            b.iter(|| {
                let mut total: i32 = 0;
                for (&s, &w) in samples.iter().zip(&weights) {
                    let term = (s as i32).checked_mul(w as i32).expect("no overflow");
                    total = total.checked_add(term).expect("no overflow").clamp(-1 << 20, 1 << 20);
                }
                black_box(total)
            })
        });

        group.bench_with_input(BenchmarkId::new("bounded", len), &len, |b, _| {
            b.iter(|| {
                let mut total = Integer::<Between<{ -1 << 20 }, { 1 << 20 }, i32>, Clamp>::new(0);
                for (&s, &w) in bounded_samples.iter().zip(&bounded_weights) {
                    total += (s * w).with_policy::<Clamp>();
                }
                black_box(total)
            })
        });
    }
    group.finish();
}

fn bench_wrapping_counter(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrapping_counter");

    for len in SIZES {
        let (_, weights) = random_inputs(len);

        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("native_rem_euclid", len), &len, |b, _| {
            b.iter(|| {
                let mut counter: i32 = 0;
                for &w in &weights {
                    counter = (counter + w as i32).rem_euclid(360);
                }
                black_box(counter)
            })
        });

        group.bench_with_input(BenchmarkId::new("bounded", len), &len, |b, _| {
            b.iter(|| {
                let mut counter = Integer::<Between<0, 359, u16>, Wrap>::new(0);
                for &w in &weights {
                    counter += w;
                }
                black_box(counter)
            })
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let (samples, _) = random_inputs(10_000);
    let text: Vec<String> = samples.iter().map(i16::to_string).collect();

    group.throughput(Throughput::Elements(text.len() as u64));
    group.bench_function("bounded_from_str", |b| {
        b.iter(|| {
            for s in &text {
                black_box(s.parse::<Sample>().expect("valid sample"));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_weighted_sum, bench_wrapping_counter, bench_parse);
criterion_main!(benches);
