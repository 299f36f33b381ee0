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

//! Benchmark runner for executing and collecting results.
//!
//! A [`Runner`] owns its iteration counts and the history of every result it
//! produced. Each call runs to completion before returning: warmup, then
//! measurement, then statistics. Nothing but the history survives a call.

use crate::core::baselines::{compare_results, load_results, write_results, Comparison};
use crate::core::config::{RegressionPolicy, RunnerConfig};
use crate::core::measurement::sample;
use crate::core::result::{BenchmarkResult, UNIT_SECONDS};
use crate::error::Result;
use crate::harness::memory::{default_heap_probe, measure_heap_delta, HeapProbe, MemoryReport};
use std::path::Path;

/// Runner for executing benchmarks with a fixed configuration.
pub struct Runner {
    config: RunnerConfig,
    policy: RegressionPolicy,
    probe: Box<dyn HeapProbe>,
    history: Vec<BenchmarkResult>,
}

impl Runner {
    /// Creates a runner, rejecting a zero measurement iteration count.
    ///
    /// The heap probe is [`default_heap_probe`].
    pub fn new(config: RunnerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            policy: RegressionPolicy::default(),
            probe: default_heap_probe(),
            history: Vec::new(),
        })
    }

    /// Replaces the heap probe used by [`Runner::memory_benchmark`].
    pub fn with_heap_probe(mut self, probe: impl HeapProbe + 'static) -> Self {
        self.probe = Box::new(probe);
        self
    }

    /// Replaces the classification policy used by [`Runner::compare_with_baseline`].
    pub fn with_policy(mut self, policy: RegressionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The runner's configuration.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Results produced so far, in call order.
    pub fn history(&self) -> &[BenchmarkResult] {
        &self.history
    }

    /// Runs warmup and measurement for `workload` and records the result.
    pub fn benchmark<F>(&mut self, name: &str, unit: &str, workload: F) -> BenchmarkResult
    where
        F: FnMut(),
    {
        tracing::debug!(
            benchmark = name,
            warmup = self.config.warmup_iterations,
            iterations = self.config.benchmark_iterations,
            "starting benchmark"
        );

        let samples = sample(
            self.config.warmup_iterations,
            self.config.benchmark_iterations,
            workload,
        );
        let result = BenchmarkResult::from_samples(name, unit, &samples);

        tracing::info!(
            benchmark = name,
            mean_ms = result.mean_ms(),
            std_dev_ms = result.std_dev * 1_000.0,
            min_ms = result.min * 1_000.0,
            max_ms = result.max * 1_000.0,
            iterations = result.iterations,
            "benchmark complete"
        );

        self.history.push(result.clone());
        result
    }

    /// Like [`Runner::benchmark`], and reports `item_count / mean`.
    ///
    /// The throughput figure is not stored; derive it again with
    /// [`BenchmarkResult::tokens_per_second`].
    pub fn throughput_benchmark<F>(
        &mut self,
        name: &str,
        item_count: u64,
        workload: F,
    ) -> BenchmarkResult
    where
        F: FnMut(),
    {
        let result = self.benchmark(name, UNIT_SECONDS, workload);
        tracing::info!(
            benchmark = name,
            items = item_count,
            items_per_sec = result.tokens_per_second(item_count),
            "throughput"
        );
        result
    }

    /// Runs `workload` exactly once between two heap samples.
    ///
    /// No warmup and no repetition. Not recorded in the history.
    pub fn memory_benchmark<F>(&self, name: &str, workload: F) -> MemoryReport
    where
        F: FnOnce(),
    {
        let report = measure_heap_delta(self.probe.as_ref(), workload);
        tracing::info!(
            benchmark = name,
            elapsed_ms = report.elapsed.as_secs_f64() * 1_000.0,
            memory_used = report.memory_used,
            final_heap_size = report.final_heap_size,
            "memory benchmark complete"
        );
        report
    }

    /// Writes the whole history to `path` as a JSON array.
    pub fn save_results(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        write_results(path, &self.history)?;
        tracing::info!(path = %path.display(), results = self.history.len(), "results saved");
        Ok(())
    }

    /// Compares the history with a baseline file.
    ///
    /// A missing file yields no comparisons. A malformed file is an error.
    pub fn compare_with_baseline(&self, path: impl AsRef<Path>) -> Result<Vec<Comparison>> {
        let path = path.as_ref();
        let Some(baseline) = load_results(path)? else {
            tracing::debug!(path = %path.display(), "no baseline file, skipping comparison");
            return Ok(Vec::new());
        };

        let comparisons = compare_results(&self.history, &baseline, &self.policy);
        for c in &comparisons {
            if c.classification.is_regression() {
                tracing::warn!(
                    benchmark = %c.name,
                    improvement_pct = c.improvement_pct,
                    "regression against baseline"
                );
            } else {
                tracing::info!(
                    benchmark = %c.name,
                    improvement_pct = c.improvement_pct,
                    classification = c.classification.as_str(),
                    "compared with baseline"
                );
            }
        }
        Ok(comparisons)
    }
}
