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

//! Baseline persistence and regression classification.
//!
//! A baseline is a results file written by an earlier run: a JSON array of
//! [`BenchmarkResult`] objects. Current results are matched to baseline
//! entries by name and classified by their relative change in mean.

use crate::core::config::RegressionPolicy;
use crate::core::result::BenchmarkResult;
use crate::error::{BenchError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Classification of one benchmark against its baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// Mean went down.
    Faster,
    /// Change stays inside the noise band.
    WithinNoise,
    /// Slowdown larger than the noise band.
    Regression,
}

impl Classification {
    /// Returns the label used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Faster => "faster",
            Classification::WithinNoise => "within noise",
            Classification::Regression => "regression",
        }
    }

    /// Returns whether this represents a regression.
    pub fn is_regression(&self) -> bool {
        matches!(self, Classification::Regression)
    }
}

/// Classifies a relative improvement given in percent.
///
/// Positive improvement is faster. A slowdown is a regression only when it is
/// strictly larger than the band, so exactly `-band` is within noise.
pub fn classify(improvement_pct: f64, policy: &RegressionPolicy) -> Classification {
    if improvement_pct > 0.0 {
        Classification::Faster
    } else if improvement_pct < -policy.noise_band_pct {
        Classification::Regression
    } else {
        Classification::WithinNoise
    }
}

/// Relative improvement of `current` over `baseline` in percent.
///
/// `None` when the baseline mean is not positive and no ratio exists.
pub fn improvement_pct(baseline_mean: f64, current_mean: f64) -> Option<f64> {
    if baseline_mean > 0.0 {
        Some((baseline_mean - current_mean) / baseline_mean * 100.0)
    } else {
        None
    }
}

/// Comparison between a current result and its baseline entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Benchmark name.
    pub name: String,
    /// Baseline mean in seconds.
    pub baseline_mean: f64,
    /// Current mean in seconds.
    pub current_mean: f64,
    /// Percentage improvement (positive = faster).
    pub improvement_pct: f64,
    /// Classification under the active policy.
    pub classification: Classification,
}

/// Compares current results with a baseline.
///
/// Each current result is matched with the first baseline entry of the same
/// name. Results without a match, or whose baseline mean is not positive, are
/// skipped. Output order follows `current`.
pub fn compare_results(
    current: &[BenchmarkResult],
    baseline: &[BenchmarkResult],
    policy: &RegressionPolicy,
) -> Vec<Comparison> {
    current
        .iter()
        .filter_map(|result| {
            let base = baseline.iter().find(|b| b.name == result.name)?;
            let Some(improvement) = improvement_pct(base.mean, result.mean) else {
                tracing::warn!(
                    benchmark = %result.name,
                    baseline_mean = base.mean,
                    "baseline mean is not positive, skipping comparison"
                );
                return None;
            };
            Some(Comparison {
                name: result.name.clone(),
                baseline_mean: base.mean,
                current_mean: result.mean,
                improvement_pct: improvement,
                classification: classify(improvement, policy),
            })
        })
        .collect()
}

/// Loads a results file.
///
/// `Ok(None)` when the file does not exist; a file that exists but does not
/// hold a result array is a [`BenchError::BaselineFormat`] error.
pub fn load_results(path: impl AsRef<Path>) -> Result<Option<Vec<BenchmarkResult>>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|e| BenchError::io(path, e))?;
    let results = serde_json::from_str(&contents).map_err(|e| BenchError::BaselineFormat {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(Some(results))
}

/// Writes results to a JSON file, creating missing parent directories.
pub fn write_results(path: impl AsRef<Path>, results: &[BenchmarkResult]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| BenchError::io(parent, e))?;
        }
    }

    let json = serde_json::to_string_pretty(results)?;
    fs::write(path, json).map_err(|e| BenchError::io(path, e))?;
    Ok(())
}
