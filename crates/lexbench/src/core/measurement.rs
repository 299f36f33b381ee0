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

//! Measurement primitives.
//!
//! Per-iteration wall-clock sampling on the monotonic clock and the
//! statistics computed over a sample set. Warmup executions are run here too
//! but never contribute a sample.

use std::time::{Duration, Instant};

/// Ordered per-iteration durations in seconds, measurement phase only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet {
    samples: Vec<f64>,
}

impl SampleSet {
    /// Creates an empty sample set with room for `capacity` samples.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    /// Records one elapsed duration.
    pub fn push(&mut self, elapsed: Duration) {
        self.samples.push(elapsed.as_secs_f64());
    }

    /// Number of recorded samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns whether no sample was recorded.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples in recording order.
    pub fn as_secs(&self) -> &[f64] {
        &self.samples
    }
}

impl From<Vec<f64>> for SampleSet {
    fn from(samples: Vec<f64>) -> Self {
        Self { samples }
    }
}

/// Statistics over one sample set, all in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Fastest sample.
    pub min: f64,
    /// Slowest sample.
    pub max: f64,
    /// Sum of all samples.
    pub total: f64,
    /// Number of samples.
    pub count: usize,
}

/// Computes statistics from a sample set.
///
/// `mean` is always `total / count` and lies within `[min, max]`; `total` is
/// the sample sum up to rounding. `std_dev` is the population standard
/// deviation, exactly zero for a set of identical samples.
/// An empty set yields all zeros.
pub fn compute_statistics(samples: &SampleSet) -> Statistics {
    let values = samples.as_secs();
    if values.is_empty() {
        return Statistics {
            mean: 0.0,
            std_dev: 0.0,
            min: 0.0,
            max: 0.0,
            total: 0.0,
            count: 0,
        };
    }

    let count = values.len();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let total = fit_total(values.iter().sum(), count as f64, min, max);
    let mean = (total / count as f64).clamp(min, max);

    let std_dev = if min == max {
        0.0
    } else {
        let variance = values
            .iter()
            .map(|v| {
                let diff = v - mean;
                diff * diff
            })
            .sum::<f64>()
            / count as f64;
        variance.sqrt()
    };

    Statistics {
        mean,
        std_dev,
        min,
        max,
        total,
        count,
    }
}

/// Upper bound on single-ulp adjustments made by [`fit_total`].
const MAX_TOTAL_NUDGES: usize = 1_024;

/// Moves `total` by whole ulps until `total / count` lies in `[min, max]`.
///
/// Rounding in the sum can put the quotient a few ulps outside the sample
/// range. The adjusted total stays within those few ulps of the exact sum.
fn fit_total(mut total: f64, count: f64, min: f64, max: f64) -> f64 {
    for _ in 0..MAX_TOTAL_NUDGES {
        let mean = total / count;
        if mean > max {
            total = next_f64(total, false);
        } else if mean < min {
            total = next_f64(total, true);
        } else {
            break;
        }
    }
    total
}

/// Adjacent representable value above (`up`) or below `x`. `x` must be finite.
fn next_f64(x: f64, up: bool) -> f64 {
    if x == 0.0 {
        let tiny = f64::from_bits(1);
        return if up { tiny } else { -tiny };
    }
    let bits = x.to_bits();
    if (x > 0.0) == up {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}

/// Times a single execution of `f` on the monotonic clock.
pub fn time_once<F>(f: F) -> Duration
where
    F: FnOnce(),
{
    let start = Instant::now();
    f();
    start.elapsed()
}

/// Runs `f` `warmup` times untimed, then `iterations` times timed.
///
/// Iterations run back to back with nothing in between, so state left behind
/// by one execution is visible to the next.
pub fn sample<F>(warmup: u32, iterations: u32, mut f: F) -> SampleSet
where
    F: FnMut(),
{
    for _ in 0..warmup {
        f();
    }

    let mut samples = SampleSet::with_capacity(iterations as usize);
    for _ in 0..iterations {
        samples.push(time_once(&mut f));
    }
    samples
}
