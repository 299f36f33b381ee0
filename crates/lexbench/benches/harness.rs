// Dweve HEDL - Hierarchical Entity Data Language
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Harness self-benchmarks.
//!
//! Measures fixture generation, the statistics path and the stand-in scanner
//! so harness overhead can be told apart from scanner cost.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lexbench::core::{compute_statistics, SampleSet};
use lexbench::fixtures::{generate_javascript, generate_json, SizeClass};
use lexbench::{sizes, Scanner, WhitespaceScanner};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// Fixture Generation
// ============================================================================

fn bench_generate_json(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_json");

    for size in SizeClass::all() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| generate_json(black_box(size), &mut rng))
        });
    }

    group.finish();
}

fn bench_generate_javascript(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_javascript");

    for lines in [sizes::SMALL_LINES, sizes::MEDIUM_LINES, sizes::LARGE_LINES] {
        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &lines, |b, &lines| {
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| generate_javascript(black_box(lines), &mut rng))
        });
    }

    group.finish();
}

// ============================================================================
// Statistics
// ============================================================================

fn bench_compute_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_statistics");

    for count in [10_usize, 100, 1_000] {
        let samples: SampleSet = (0..count)
            .map(|i| 0.001 + i as f64 * 1e-6)
            .collect::<Vec<_>>()
            .into();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &samples, |b, samples| {
            b.iter(|| compute_statistics(black_box(samples)))
        });
    }

    group.finish();
}

// ============================================================================
// Stand-in Scanner
// ============================================================================

fn bench_whitespace_scanner(c: &mut Criterion) {
    let mut group = c.benchmark_group("whitespace_scanner");
    let mut rng = StdRng::seed_from_u64(7);

    for size in SizeClass::all() {
        let source = generate_json(*size, &mut rng);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("json", size),
            &source,
            |b, source| b.iter(|| WhitespaceScanner.scan(black_box(source))),
        );
    }

    let program = generate_javascript(sizes::MEDIUM_LINES, &mut rng);
    group.throughput(Throughput::Bytes(program.len() as u64));
    group.bench_function("javascript", |b| {
        b.iter(|| WhitespaceScanner.scan(black_box(&program)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_generate_json,
    bench_generate_javascript,
    bench_compute_statistics,
    bench_whitespace_scanner
);
criterion_main!(benches);
