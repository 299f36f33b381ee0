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

//! HEDL Scanner Benchmark Harness
//!
//! Throughput, memory and regression measurement for token scanners.
//!
//! ## Features
//!
//! - **Runner**: Warmup then timed measurement, population statistics,
//!   ordered result history
//! - **Memory profiling**: Single-shot heap delta behind a [`HeapProbe`]
//! - **Baselines**: JSON results files and faster/noise/regression classification
//! - **Regression gate**: Throughput thresholds that stop automated runs
//! - **Fixtures**: Seedable nested-JSON and program-like text generators
//!
//! ## Usage
//!
//! ```no_run
//! use lexbench::{Runner, RunnerConfig, WhitespaceScanner, count_tokens, scan_workload};
//! use lexbench::fixtures::{generate_json, SizeClass};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let source = generate_json(SizeClass::Medium, &mut rng);
//! let tokens = count_tokens(&WhitespaceScanner, &source);
//!
//! let mut runner = Runner::new(RunnerConfig::default()).unwrap();
//! let result = runner.throughput_benchmark(
//!     "scan_json_medium",
//!     tokens,
//!     scan_workload(&WhitespaceScanner, &source),
//! );
//! println!("{:.0} tokens/sec", result.tokens_per_second(tokens));
//! runner.save_results("target/lexbench/results.json").unwrap();
//! ```
//!
//! Run the driver:
//! ```bash
//! cargo run --release --package lexbench -- --save baseline.json
//! cargo run --release --package lexbench -- --compare baseline.json
//! ```

pub mod core;
pub mod error;
pub mod fixtures;
pub mod harness;
pub mod reporters;
pub mod scanner;

pub use crate::core::{
    BenchmarkResult, Classification, Comparison, GateConfig, RegressionPolicy, RunnerConfig,
};
pub use error::{BenchError, Result};
pub use harness::{GateOutcome, GateReport, HeapProbe, MemoryReport, RegressionGate, Runner};
pub use scanner::{count_tokens, scan_workload, Scanner, WhitespaceScanner};

/// Standard line counts for the program-like fixture
pub mod sizes {
    /// Small program: 100 statement pairs
    pub const SMALL_LINES: usize = 100;
    /// Medium program: 1,000 statement pairs
    pub const MEDIUM_LINES: usize = 1_000;
    /// Large program: 10,000 statement pairs
    pub const LARGE_LINES: usize = 10_000;
}
