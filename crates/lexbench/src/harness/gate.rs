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

//! Throughput gate for automated checks.
//!
//! Wraps [`Runner::throughput_benchmark`] and classifies tokens/sec against
//! two thresholds. A hard failure comes back as
//! [`BenchError::ThresholdBreached`]; callers propagate it and stop, so no
//! further benchmark runs.

use crate::core::config::GateConfig;
use crate::core::result::BenchmarkResult;
use crate::error::{BenchError, Result};
use crate::harness::runner::Runner;

/// Gate decision for one throughput figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// At or above the warning threshold.
    Pass,
    /// Between the failure and warning thresholds.
    Warn,
    /// Below the failure threshold.
    Fail,
}

impl GateOutcome {
    /// Returns the label used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            GateOutcome::Pass => "PASS",
            GateOutcome::Warn => "WARN",
            GateOutcome::Fail => "FAIL",
        }
    }
}

/// A passing or warning gate check.
#[derive(Debug, Clone, PartialEq)]
pub struct GateReport {
    /// The recorded benchmark result.
    pub result: BenchmarkResult,
    /// Tokens per second derived from the result.
    pub tokens_per_second: f64,
    /// Gate decision.
    pub outcome: GateOutcome,
}

/// Throughput gate with fixed thresholds.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegressionGate {
    config: GateConfig,
}

impl RegressionGate {
    /// Creates a gate from validated thresholds.
    pub fn new(config: GateConfig) -> Self {
        Self { config }
    }

    /// The gate's thresholds.
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Classifies a throughput figure.
    pub fn evaluate(&self, tokens_per_second: f64) -> GateOutcome {
        if tokens_per_second < self.config.fail_below {
            GateOutcome::Fail
        } else if tokens_per_second < self.config.warn_below {
            GateOutcome::Warn
        } else {
            GateOutcome::Pass
        }
    }

    /// Runs a throughput benchmark and applies the gate to it.
    ///
    /// The result lands in the runner's history whatever the outcome.
    pub fn check<F>(
        &self,
        runner: &mut Runner,
        name: &str,
        token_count: u64,
        workload: F,
    ) -> Result<GateReport>
    where
        F: FnMut(),
    {
        let result = runner.throughput_benchmark(name, token_count, workload);
        let tokens_per_second = result.tokens_per_second(token_count);

        match self.evaluate(tokens_per_second) {
            GateOutcome::Fail => {
                tracing::error!(
                    benchmark = name,
                    tokens_per_second,
                    threshold = self.config.fail_below,
                    "throughput below failure threshold"
                );
                Err(BenchError::ThresholdBreached {
                    name: name.to_string(),
                    tokens_per_second,
                    threshold: self.config.fail_below,
                })
            }
            outcome => {
                if outcome == GateOutcome::Warn {
                    tracing::warn!(
                        benchmark = name,
                        tokens_per_second,
                        threshold = self.config.warn_below,
                        "throughput below warning threshold"
                    );
                }
                Ok(GateReport {
                    result,
                    tokens_per_second,
                    outcome,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::RunnerConfig;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_evaluate_default_thresholds() {
        let gate = RegressionGate::default();
        assert_eq!(gate.evaluate(0.0), GateOutcome::Fail);
        assert_eq!(gate.evaluate(4_999.9), GateOutcome::Fail);
        assert_eq!(gate.evaluate(5_000.0), GateOutcome::Warn);
        assert_eq!(gate.evaluate(9_999.9), GateOutcome::Warn);
        assert_eq!(gate.evaluate(10_000.0), GateOutcome::Pass);
        assert_eq!(gate.evaluate(1e9), GateOutcome::Pass);
    }

    #[test]
    fn test_evaluate_custom_thresholds() {
        let gate = RegressionGate::new(GateConfig::new(10.0, 20.0).unwrap());
        assert_eq!(gate.evaluate(9.0), GateOutcome::Fail);
        assert_eq!(gate.evaluate(15.0), GateOutcome::Warn);
        assert_eq!(gate.evaluate(25.0), GateOutcome::Pass);
    }

    #[test]
    fn test_check_fails_slow_workload() {
        let mut runner = Runner::new(RunnerConfig::new(0, 2)).unwrap();
        let gate = RegressionGate::default();

        // 10 tokens in >= 5ms is at most 2,000 tokens/sec
        let err = gate
            .check(&mut runner, "slow", 10, || thread::sleep(Duration::from_millis(5)))
            .unwrap_err();

        assert!(matches!(err, BenchError::ThresholdBreached { ref name, .. } if name == "slow"));
        assert_eq!(runner.history().len(), 1);
    }

    #[test]
    fn test_check_passes_fast_workload() {
        let mut runner = Runner::new(RunnerConfig::new(0, 2)).unwrap();
        let gate = RegressionGate::new(GateConfig::new(0.0, 0.0).unwrap());

        let report = gate.check(&mut runner, "fast", 1_000, || {}).unwrap();
        assert_eq!(report.outcome, GateOutcome::Pass);
        assert_eq!(report.result.name, "fast");
    }
}
