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

//! The statistical record produced by one benchmark invocation.

use crate::core::measurement::{compute_statistics, SampleSet};
use serde::{Deserialize, Serialize};

/// Unit string used for wall-clock results.
pub const UNIT_SECONDS: &str = "seconds";

/// Result of a single benchmark invocation.
///
/// Serializes to a flat JSON object; a results file is an array of these.
/// Durations are seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Benchmark identifier, used for baseline lookup.
    pub name: String,
    /// Unit of the duration fields.
    pub unit: String,
    /// Mean per-iteration duration.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Fastest iteration.
    pub min: f64,
    /// Slowest iteration.
    pub max: f64,
    /// Number of recorded iterations.
    pub iterations: u32,
    /// Sum of all recorded iterations.
    pub total_time: f64,
}

impl BenchmarkResult {
    /// Builds a result from the sample set of the measurement phase.
    pub fn from_samples(
        name: impl Into<String>,
        unit: impl Into<String>,
        samples: &SampleSet,
    ) -> Self {
        let stats = compute_statistics(samples);
        Self {
            name: name.into(),
            unit: unit.into(),
            mean: stats.mean,
            std_dev: stats.std_dev,
            min: stats.min,
            max: stats.max,
            iterations: stats.count as u32,
            total_time: stats.total,
        }
    }

    /// Items processed per second at the mean duration, `0.0` when the mean is not positive.
    pub fn tokens_per_second(&self, count: u64) -> f64 {
        if self.mean > 0.0 {
            count as f64 / self.mean
        } else {
            0.0
        }
    }

    /// Mean duration in milliseconds.
    pub fn mean_ms(&self) -> f64 {
        self.mean * 1_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_mean(mean: f64) -> BenchmarkResult {
        BenchmarkResult {
            name: "test".to_string(),
            unit: UNIT_SECONDS.to_string(),
            mean,
            std_dev: 0.0,
            min: mean,
            max: mean,
            iterations: 1,
            total_time: mean,
        }
    }

    #[test]
    fn test_from_samples() {
        let samples = SampleSet::from(vec![0.002, 0.004]);
        let result = BenchmarkResult::from_samples("scan", UNIT_SECONDS, &samples);

        assert_eq!(result.name, "scan");
        assert_eq!(result.unit, "seconds");
        assert_eq!(result.iterations, 2);
        assert!((result.total_time - 0.006).abs() < 1e-12);
        assert_eq!(result.mean, result.total_time / 2.0);
        assert_eq!(result.min, 0.002);
        assert_eq!(result.max, 0.004);
    }

    #[test]
    fn test_tokens_per_second() {
        let result = result_with_mean(0.5);
        assert_eq!(result.tokens_per_second(1_000), 2_000.0);
    }

    #[test]
    fn test_tokens_per_second_zero_mean() {
        let result = result_with_mean(0.0);
        assert_eq!(result.tokens_per_second(1_000), 0.0);
    }

    #[test]
    fn test_json_shape() {
        let result = result_with_mean(0.25);
        let value = serde_json::to_value(&result).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 8);
        for key in ["name", "unit", "mean", "std_dev", "min", "max", "iterations", "total_time"] {
            assert!(object.contains_key(key), "missing field {}", key);
        }
        assert!(object["iterations"].is_u64());
    }
}
