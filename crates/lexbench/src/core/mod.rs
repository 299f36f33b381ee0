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

//! Core benchmark infrastructure.
//!
//! Configuration, measurement primitives, the result record and baseline
//! management.
//!
//! # Modules
//!
//! - `config`: Runner, regression policy and gate configuration
//! - `measurement`: Sample collection and statistics
//! - `result`: The persisted result record
//! - `baselines`: Results files and regression classification

pub mod baselines;
pub mod config;
pub mod measurement;
pub mod result;

pub use baselines::{
    classify, compare_results, improvement_pct, load_results, write_results, Classification,
    Comparison,
};
pub use config::{GateConfig, RegressionPolicy, RunnerConfig};
pub use measurement::{compute_statistics, sample, time_once, SampleSet, Statistics};
pub use result::{BenchmarkResult, UNIT_SECONDS};
