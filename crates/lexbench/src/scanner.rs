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

//! The scanner seam.
//!
//! The harness never interprets tokens or diagnostics; it only repeats
//! `scan` calls and counts tokens for throughput denominators.

use std::hint::black_box;
use std::ops::Range;

/// A synchronous token scanner under measurement.
pub trait Scanner {
    /// Token type produced by the scanner.
    type Token;
    /// Diagnostic type produced by the scanner.
    type Diagnostic;

    /// Scans `source` into tokens and diagnostics.
    fn scan(&self, source: &str) -> (Vec<Self::Token>, Vec<Self::Diagnostic>);
}

/// Number of tokens `scanner` produces for `source`.
pub fn count_tokens<S: Scanner + ?Sized>(scanner: &S, source: &str) -> u64 {
    scanner.scan(source).0.len() as u64
}

/// Wraps one `scan` call as a benchmark workload.
///
/// Input and output go through [`black_box`] so the call is not optimized out.
pub fn scan_workload<'a, S>(scanner: &'a S, source: &'a str) -> impl FnMut() + 'a
where
    S: Scanner + ?Sized,
{
    move || {
        black_box(scanner.scan(black_box(source)));
    }
}

/// Splits on whitespace; each token is a byte span.
///
/// Used by the bundled driver when no real scanner is linked in.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceScanner;

impl Scanner for WhitespaceScanner {
    type Token = Range<usize>;
    type Diagnostic = ();

    fn scan(&self, source: &str) -> (Vec<Range<usize>>, Vec<()>) {
        let mut tokens = Vec::new();
        let mut start = None;

        for (i, c) in source.char_indices() {
            match (c.is_whitespace(), start) {
                (true, Some(s)) => {
                    tokens.push(s..i);
                    start = None;
                }
                (false, None) => start = Some(i),
                _ => {}
            }
        }
        if let Some(s) = start {
            tokens.push(s..source.len());
        }

        (tokens, Vec::new())
    }
}
