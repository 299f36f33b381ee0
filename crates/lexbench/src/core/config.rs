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

//! Centralized benchmark configuration.
//!
//! Iteration counts for the runner, the noise band used when classifying a
//! run against its baseline, and the throughput thresholds of the regression
//! gate. All three are plain values fixed at construction.

use crate::error::{BenchError, Result};

/// Default number of unrecorded warmup iterations.
pub const DEFAULT_WARMUP_ITERATIONS: u32 = 10;

/// Default number of recorded measurement iterations.
pub const DEFAULT_BENCHMARK_ITERATIONS: u32 = 100;

/// Default regression band in percentage points.
pub const DEFAULT_NOISE_BAND_PCT: f64 = 5.0;

/// Throughput below which the gate fails the run (tokens/sec).
pub const DEFAULT_FAIL_BELOW: f64 = 5_000.0;

/// Throughput below which the gate warns (tokens/sec).
pub const DEFAULT_WARN_BELOW: f64 = 10_000.0;

/// Iteration counts for a [`Runner`](crate::harness::Runner).
///
/// # Example
///
/// ```no_run
/// use lexbench::core::config::RunnerConfig;
///
/// let config = RunnerConfig::default()
///     .with_warmup_iterations(5)
///     .with_benchmark_iterations(50);
/// config.validate().unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Executions discarded before measurement starts.
    pub warmup_iterations: u32,
    /// Executions recorded into the sample set.
    pub benchmark_iterations: u32,
}

impl RunnerConfig {
    /// Creates a configuration with explicit iteration counts.
    pub fn new(warmup_iterations: u32, benchmark_iterations: u32) -> Self {
        Self {
            warmup_iterations,
            benchmark_iterations,
        }
    }

    /// Sets the warmup iteration count.
    pub fn with_warmup_iterations(mut self, iterations: u32) -> Self {
        self.warmup_iterations = iterations;
        self
    }

    /// Sets the measurement iteration count.
    pub fn with_benchmark_iterations(mut self, iterations: u32) -> Self {
        self.benchmark_iterations = iterations;
        self
    }

    /// Rejects configurations that cannot produce a sample set.
    pub fn validate(&self) -> Result<()> {
        if self.benchmark_iterations == 0 {
            return Err(BenchError::invalid_config(
                "benchmark_iterations",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WARMUP_ITERATIONS, DEFAULT_BENCHMARK_ITERATIONS)
    }
}

/// Classification policy for baseline comparisons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionPolicy {
    /// Slowdowns larger than this many percentage points are regressions.
    pub noise_band_pct: f64,
}

impl RegressionPolicy {
    /// Creates a policy with the given band.
    pub fn new(noise_band_pct: f64) -> Result<Self> {
        if !noise_band_pct.is_finite() || noise_band_pct < 0.0 {
            return Err(BenchError::invalid_config(
                "noise_band_pct",
                "must be a finite, non-negative percentage",
            ));
        }
        Ok(Self { noise_band_pct })
    }
}

impl Default for RegressionPolicy {
    fn default() -> Self {
        Self {
            noise_band_pct: DEFAULT_NOISE_BAND_PCT,
        }
    }
}

/// Throughput thresholds for the [`RegressionGate`](crate::harness::RegressionGate).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateConfig {
    /// Hard failure below this throughput.
    pub fail_below: f64,
    /// Warning below this throughput.
    pub warn_below: f64,
}

impl GateConfig {
    /// Creates gate thresholds, validating their ordering.
    pub fn new(fail_below: f64, warn_below: f64) -> Result<Self> {
        if !fail_below.is_finite() || fail_below < 0.0 {
            return Err(BenchError::invalid_config(
                "fail_below",
                "must be a finite, non-negative throughput",
            ));
        }
        if !warn_below.is_finite() || warn_below < fail_below {
            return Err(BenchError::invalid_config(
                "warn_below",
                format!("must be finite and at least fail_below ({})", fail_below),
            ));
        }
        Ok(Self {
            fail_below,
            warn_below,
        })
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            fail_below: DEFAULT_FAIL_BELOW,
            warn_below: DEFAULT_WARN_BELOW,
        }
    }
}
