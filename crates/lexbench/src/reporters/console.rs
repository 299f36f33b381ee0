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

//! Console reporter for benchmark results.
//!
//! Formats results, throughput, memory reports and baseline comparisons as
//! fixed-width text. `format_*` functions return the text; `print_*` write it
//! to stdout.

use crate::core::baselines::Comparison;
use crate::core::result::BenchmarkResult;
use crate::harness::gate::GateReport;
use crate::harness::memory::MemoryReport;
use std::fmt::Write;

/// Formats one result line with mean, spread and iteration count.
pub fn format_result(result: &BenchmarkResult) -> String {
    format!(
        "{:<32} {:>10.4}ms ±{:>8.4}ms  [{:.4}ms .. {:.4}ms]  ({} iterations)",
        result.name,
        result.mean_ms(),
        result.std_dev * 1_000.0,
        result.min * 1_000.0,
        result.max * 1_000.0,
        result.iterations
    )
}

/// Formats a gate check as result line plus throughput.
pub fn format_gate_report(report: &GateReport) -> String {
    format!(
        "{}\n  [{}] {:.0} tokens/sec",
        format_result(&report.result),
        report.outcome.as_str(),
        report.tokens_per_second
    )
}

/// Formats a memory report.
pub fn format_memory_report(name: &str, report: &MemoryReport) -> String {
    format!(
        "{:<32} {:>10.4}ms  heap delta: {:+.3} MB  final heap: {:.3} MB",
        name,
        report.elapsed.as_secs_f64() * 1_000.0,
        report.memory_mb(),
        report.final_heap_size as f64 / 1_000_000.0
    )
}

/// Formats baseline comparisons, one line each.
pub fn format_comparisons(comparisons: &[Comparison]) -> String {
    if comparisons.is_empty() {
        return "No baseline comparisons.".to_string();
    }

    let mut out = String::new();
    for c in comparisons {
        let _ = writeln!(
            out,
            "[{}] {}: {:+.2}% (baseline: {:.4}ms, current: {:.4}ms)",
            c.classification.as_str().to_uppercase(),
            c.name,
            c.improvement_pct,
            c.baseline_mean * 1_000.0,
            c.current_mean * 1_000.0
        );
    }
    out
}

/// Prints a section header.
pub fn print_header(title: &str) {
    println!("\n{}", "=".repeat(80));
    println!("{}", title);
    println!("{}", "=".repeat(80));
}

/// Prints baseline comparisons.
pub fn print_comparisons(comparisons: &[Comparison]) {
    println!("\n{}", "-".repeat(80));
    println!("BASELINE COMPARISON:");
    println!("{}", "-".repeat(80));
    print!("{}", format_comparisons(comparisons));
    if comparisons.is_empty() {
        println!();
    }
}
