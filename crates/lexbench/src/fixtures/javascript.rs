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

//! Program-like text generator.
//!
//! Output is a fixed preamble defining a recursive function, one pair of
//! statements per line index, a `// checkpoint` comment before every tenth
//! pair, and a fixed trailer.

use rand::Rng;
use std::fmt::Write;

const PREAMBLE: &str = "\
function fibonacci(n) {
  if (n <= 1) {
    return n;
  }
  return fibonacci(n - 1) + fibonacci(n - 2);
}

";

const TRAILER: &str = "
module.exports = { fibonacci };
";

/// Lines between checkpoint comments.
pub const CHECKPOINT_INTERVAL: usize = 10;

/// Generates `line_count` statement pairs wrapped in the fixed preamble and trailer.
///
/// Checkpoints are emitted for every index divisible by
/// [`CHECKPOINT_INTERVAL`], index zero included.
pub fn generate_javascript<R: Rng>(line_count: usize, rng: &mut R) -> String {
    let mut out = String::with_capacity(PREAMBLE.len() + TRAILER.len() + line_count * 96);
    out.push_str(PREAMBLE);

    for i in 0..line_count {
        if i % CHECKPOINT_INTERVAL == 0 {
            let _ = writeln!(out, "// checkpoint {}", i);
        }
        let factor: u32 = rng.gen_range(1..100);
        let _ = writeln!(out, "const value_{} = fibonacci({});", i, i % 20);
        let _ = writeln!(
            out,
            "console.log(\"line {}\", value_{} * {});",
            i, i, factor
        );
    }

    out.push_str(TRAILER);
    out
}
