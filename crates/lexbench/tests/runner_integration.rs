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

//! End-to-end tests for the runner, baseline files and the regression gate.

use lexbench::core::{load_results, write_results, Classification, UNIT_SECONDS};
use lexbench::fixtures::{generate_javascript, generate_json, SizeClass};
use lexbench::harness::memory::{HeapProbe, MemoryReport};
use lexbench::{
    count_tokens, scan_workload, BenchmarkResult, GateConfig, GateOutcome, RegressionGate,
    RegressionPolicy, Runner, RunnerConfig, WhitespaceScanner,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::Cell;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

// ============================================================================
// Runner
// ============================================================================

#[test]
fn test_fixed_sleep_workload() {
    let mut runner = Runner::new(RunnerConfig::new(0, 3)).unwrap();

    let result = runner.benchmark("sleep_10ms", UNIT_SECONDS, || {
        thread::sleep(Duration::from_millis(10))
    });

    assert_eq!(result.iterations, 3);
    assert_eq!(result.unit, "seconds");
    assert!(result.mean >= 0.010, "mean {} below sleep time", result.mean);
    assert!(result.mean < 0.050, "mean {} far above sleep time", result.mean);
    assert!(result.std_dev < 0.020, "std_dev {} not near zero", result.std_dev);
    assert!(result.min <= result.mean && result.mean <= result.max);
    assert!((result.total_time - result.mean * 3.0).abs() < 1e-9);
}

#[test]
fn test_throughput_over_fixture() {
    let mut rng = StdRng::seed_from_u64(17);
    let source = generate_json(SizeClass::Medium, &mut rng);
    let tokens = count_tokens(&WhitespaceScanner, &source);

    let mut runner = Runner::new(RunnerConfig::new(1, 5)).unwrap();
    let result = runner.throughput_benchmark(
        "scan_json_medium",
        tokens,
        scan_workload(&WhitespaceScanner, &source),
    );

    assert_eq!(result.iterations, 5);
    assert!(result.tokens_per_second(tokens) >= 0.0);
    assert_eq!(runner.history().len(), 1);
}

// ============================================================================
// Baseline files
// ============================================================================

#[test]
fn test_save_and_reload_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("runs/latest/results.json");

    let mut runner = Runner::new(RunnerConfig::new(0, 4)).unwrap();
    runner.benchmark("first", UNIT_SECONDS, || thread::sleep(Duration::from_micros(200)));
    runner.throughput_benchmark("second", 1_000, || thread::sleep(Duration::from_micros(100)));
    runner.save_results(&path).unwrap();

    let loaded = load_results(&path).unwrap().unwrap();
    assert_eq!(loaded.as_slice(), runner.history());
}

#[test]
fn test_results_file_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.json");

    let mut runner = Runner::new(RunnerConfig::new(0, 2)).unwrap();
    runner.benchmark("shape", UNIT_SECONDS, || {});
    runner.save_results(&path).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let entries = raw.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["name"], "shape");
    assert_eq!(entries[0]["unit"], "seconds");
    assert_eq!(entries[0]["iterations"], 2);
    assert!(entries[0]["mean"].is_f64());
}

#[test]
fn test_compare_classifies_each_result() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("baseline.json");

    let baseline = vec![
        fixed("faster", 0.010),
        fixed("noise", 0.010),
        fixed("regressed", 0.010),
    ];
    write_results(&path, &baseline).unwrap();

    let mut runner = Runner::new(RunnerConfig::new(0, 3)).unwrap();
    runner.benchmark("faster", UNIT_SECONDS, || {});
    runner.benchmark("noise", UNIT_SECONDS, || thread::sleep(Duration::from_millis(10)));
    runner.benchmark("regressed", UNIT_SECONDS, || thread::sleep(Duration::from_millis(25)));
    runner.benchmark("unmatched", UNIT_SECONDS, || {});

    let comparisons = runner.compare_with_baseline(&path).unwrap();
    assert_eq!(comparisons.len(), 3);
    assert_eq!(comparisons[0].classification, Classification::Faster);
    assert_eq!(comparisons[2].classification, Classification::Regression);
    assert!(comparisons.iter().all(|c| c.name != "unmatched"));
}

#[test]
fn test_wide_noise_band() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("baseline.json");
    write_results(&path, &[fixed("slow", 0.001)]).unwrap();

    let mut runner = Runner::new(RunnerConfig::new(0, 2))
        .unwrap()
        .with_policy(RegressionPolicy::new(10_000.0).unwrap());
    runner.benchmark("slow", UNIT_SECONDS, || thread::sleep(Duration::from_millis(5)));

    let comparisons = runner.compare_with_baseline(&path).unwrap();
    assert_eq!(comparisons[0].classification, Classification::WithinNoise);
}

fn fixed(name: &str, mean: f64) -> BenchmarkResult {
    BenchmarkResult {
        name: name.to_string(),
        unit: UNIT_SECONDS.to_string(),
        mean,
        std_dev: 0.0,
        min: mean,
        max: mean,
        iterations: 3,
        total_time: mean * 3.0,
    }
}

// ============================================================================
// Memory profiler
// ============================================================================

/// Probe that reports a heap that grows by 1 KiB per workload execution.
struct CountingProbe {
    runs: Rc<Cell<usize>>,
}

impl HeapProbe for CountingProbe {
    fn force_collect(&self) {}

    fn heap_size(&self) -> usize {
        10_000 + self.runs.get() * 1_024
    }
}

#[test]
fn test_memory_benchmark_with_injected_probe() {
    let runs = Rc::new(Cell::new(0));
    let runner = Runner::new(RunnerConfig::default())
        .unwrap()
        .with_heap_probe(CountingProbe { runs: runs.clone() });

    let report: MemoryReport = runner.memory_benchmark("grow", || runs.set(runs.get() + 1));

    assert_eq!(runs.get(), 1);
    assert_eq!(report.memory_used, 1_024);
    assert_eq!(report.final_heap_size, 11_024);
    assert!(runner.history().is_empty());
}

// ============================================================================
// Regression gate
// ============================================================================

#[test]
fn test_gate_stops_at_first_failure() {
    let mut runner = Runner::new(RunnerConfig::new(0, 2)).unwrap();
    let gate = RegressionGate::new(GateConfig::new(1_000_000.0, 2_000_000.0).unwrap());
    let mut rng = StdRng::seed_from_u64(3);
    let program = generate_javascript(50, &mut rng);

    let run_all = |runner: &mut Runner| -> lexbench::Result<Vec<GateOutcome>> {
        let mut outcomes = Vec::new();
        for name in ["first", "second"] {
            let report = gate.check(runner, name, 1, || {
                thread::sleep(Duration::from_millis(1));
                std::hint::black_box(program.len());
            })?;
            outcomes.push(report.outcome);
        }
        Ok(outcomes)
    };

    assert!(run_all(&mut runner).is_err());
    let names: Vec<&str> = runner.history().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["first"]);
}
