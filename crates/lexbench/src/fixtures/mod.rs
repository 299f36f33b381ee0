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

//! Synthetic scanner inputs.
//!
//! Generators take the random source as an argument. Structure (nesting,
//! field counts, statement counts) depends only on the size parameters;
//! values depend on the generator, so a seeded `StdRng` reproduces a fixture
//! byte for byte.
//!
//! - **json**: Nested JSON documents by [`SizeClass`]
//! - **javascript**: Program-like text by line count

pub mod javascript;
pub mod json;

pub use javascript::generate_javascript;
pub use json::{generate_json, JsonShape};

use crate::error::{BenchError, Result};
use std::fmt;
use std::str::FromStr;

/// Named fixture size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeClass {
    /// Shallow document with a handful of objects.
    Small,
    /// Moderate depth and fan-out.
    Medium,
    /// Deepest shape with the widest fan-out.
    Large,
}

impl SizeClass {
    /// Returns a short identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// Returns all size classes, smallest first.
    pub fn all() -> &'static [SizeClass] {
        &[Self::Small, Self::Medium, Self::Large]
    }

    /// Shape parameters of the root JSON object for this class.
    pub fn json_shape(&self) -> JsonShape {
        match self {
            Self::Small => JsonShape::new(3, 2, 2),
            Self::Medium => JsonShape::new(5, 4, 3),
            Self::Large => JsonShape::new(8, 8, 4),
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SizeClass {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            _ => Err(BenchError::UnknownSizeClass(s.to_string())),
        }
    }
}
