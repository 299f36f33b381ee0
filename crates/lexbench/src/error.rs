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

//! Error types for benchmark execution and baseline handling.
//!
//! Every fallible harness operation returns [`Result<T>`]. Missing baseline
//! files are not errors (comparison is skipped); everything else that can go
//! wrong while persisting or loading results surfaces here.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for benchmarking operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur during benchmarking operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BenchError {
    /// I/O operation failed while reading or writing a results file.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// A baseline file exists but does not contain a result array.
    #[error("Malformed baseline '{path}': {message}")]
    BaselineFormat {
        /// The baseline file path
        path: PathBuf,
        /// The deserializer message
        message: String,
    },

    /// Results could not be serialized.
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Invalid configuration parameter
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Fixture size class name not recognised.
    #[error("Unknown size class '{0}' (expected small, medium or large)")]
    UnknownSizeClass(String),

    /// Throughput fell below the hard failure threshold of the regression gate.
    #[error("{name}: {tokens_per_second:.0} tokens/sec is below the failure threshold of {threshold:.0} tokens/sec")]
    ThresholdBreached {
        /// Benchmark name
        name: String,
        /// Measured throughput
        tokens_per_second: f64,
        /// Configured failure threshold
        threshold: f64,
    },
}

impl BenchError {
    /// Wraps an [`std::io::Error`] with the path it occurred on.
    pub fn io(path: impl AsRef<Path>, err: std::io::Error) -> Self {
        BenchError::Io {
            path: path.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }

    /// Builds an [`BenchError::InvalidConfig`].
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        BenchError::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for BenchError {
    fn from(err: serde_json::Error) -> Self {
        BenchError::Serialize(err.to_string())
    }
}
