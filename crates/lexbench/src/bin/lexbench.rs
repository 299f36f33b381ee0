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

//! Scanner benchmark driver
//!
//! Runs the throughput gate over generated JSON and program-like fixtures,
//! measures the heap retained by one scan of the large fixture, then
//! optionally saves the results and compares them with a baseline.
//!
//! # Examples
//!
//! ```bash
//! # Record a baseline
//! lexbench --save target/lexbench/baseline.json
//!
//! # Compare a later run against it
//! lexbench --compare target/lexbench/baseline.json
//!
//! # Reproducible fixtures, fewer iterations
//! lexbench --seed 42 --warmup 2 --iterations 20
//! ```
//!
//! Exit status is 1 when any throughput falls below `--fail-below`, in which
//! case the remaining benchmarks do not run.

use clap::{CommandFactory, Parser};
use lexbench::core::config::{
    DEFAULT_BENCHMARK_ITERATIONS, DEFAULT_FAIL_BELOW, DEFAULT_NOISE_BAND_PCT,
    DEFAULT_WARMUP_ITERATIONS, DEFAULT_WARN_BELOW,
};
use lexbench::fixtures::{generate_javascript, generate_json, SizeClass};
use lexbench::harness::memory::{peak_bytes, TrackingAllocator};
use lexbench::reporters::{
    format_gate_report, format_memory_report, print_comparisons, print_header,
};
use lexbench::{
    count_tokens, scan_workload, sizes, GateConfig, RegressionGate, RegressionPolicy, Result,
    Runner, RunnerConfig, Scanner, WhitespaceScanner,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: TrackingAllocator = TrackingAllocator;

/// Scanner throughput, memory and regression benchmarks
#[derive(Parser, Debug)]
#[command(name = "lexbench")]
#[command(
    version,
    about = "Scanner throughput, memory and regression benchmarks",
    long_about = None
)]
#[command(args_override_self = true)]
struct Cli {
    /// Write all results to this JSON file after the run
    #[arg(long, value_name = "PATH")]
    save: Option<PathBuf>,

    /// Compare results with this baseline file (skipped if it does not exist)
    #[arg(long, value_name = "PATH")]
    compare: Option<PathBuf>,

    /// Unrecorded warmup iterations per benchmark
    #[arg(long, default_value_t = DEFAULT_WARMUP_ITERATIONS)]
    warmup: u32,

    /// Recorded iterations per benchmark
    #[arg(long, default_value_t = DEFAULT_BENCHMARK_ITERATIONS)]
    iterations: u32,

    /// Seed for fixture generation (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Tokens/sec below which the run fails
    #[arg(long, default_value_t = DEFAULT_FAIL_BELOW)]
    fail_below: f64,

    /// Tokens/sec below which a warning is logged
    #[arg(long, default_value_t = DEFAULT_WARN_BELOW)]
    warn_below: f64,

    /// Slowdown in percentage points tolerated before a regression is reported
    #[arg(long, default_value_t = DEFAULT_NOISE_BAND_PCT)]
    noise_band: f64,

    /// Statement pairs in the program-like fixture
    #[arg(long, default_value_t = sizes::MEDIUM_LINES)]
    js_lines: usize,
}

/// Drops every argument that is not one of the declared long options.
///
/// The program name is kept. A declared option keeps its value, whether given
/// as `--opt=value` or as the following argument. Unknown options and stray
/// positionals are removed, so they never hide the options after them.
fn retain_known_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let command = Cli::command();
    let mut args = args.into_iter().map(Into::into);
    let mut kept: Vec<OsString> = args.next().into_iter().collect();

    while let Some(arg) = args.next() {
        let text = arg.to_string_lossy().into_owned();
        if matches!(text.as_ref(), "-h" | "--help" | "-V" | "--version") {
            kept.push(arg);
            continue;
        }
        let Some(option) = text.strip_prefix("--") else {
            continue;
        };
        let (long, inline_value) = match option.split_once('=') {
            Some((long, _)) => (long, true),
            None => (option, false),
        };
        let Some(declared) = command.get_arguments().find(|a| a.get_long() == Some(long)) else {
            continue;
        };

        let takes_value = declared.get_action().takes_values();
        kept.push(arg);
        if takes_value && !inline_value {
            if let Some(value) = args.next() {
                kept.push(value);
            }
        }
    }

    kept
}

fn main() -> ExitCode {
    let cli = Cli::parse_from(retain_known_args(std::env::args_os()));

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lexbench=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut runner = Runner::new(RunnerConfig::new(cli.warmup, cli.iterations))?
        .with_policy(RegressionPolicy::new(cli.noise_band)?);
    let gate = RegressionGate::new(GateConfig::new(cli.fail_below, cli.warn_below)?);

    let seed = cli.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "generating fixtures");
    let mut rng = StdRng::seed_from_u64(seed);
    let scanner = WhitespaceScanner;

    print_header("SCANNER THROUGHPUT");

    for size in SizeClass::all() {
        let source = generate_json(*size, &mut rng);
        let tokens = count_tokens(&scanner, &source);
        let name = format!("scan_json_{}", size);
        let report = gate.check(&mut runner, &name, tokens, scan_workload(&scanner, &source))?;
        println!("{}", format_gate_report(&report));
    }

    let program = generate_javascript(cli.js_lines, &mut rng);
    let tokens = count_tokens(&scanner, &program);
    let name = format!("scan_javascript_{}", cli.js_lines);
    let report = gate.check(&mut runner, &name, tokens, scan_workload(&scanner, &program))?;
    println!("{}", format_gate_report(&report));

    print_header("MEMORY");

    let large = generate_json(SizeClass::Large, &mut rng);
    let mut retained = None;
    let memory = runner.memory_benchmark("scan_json_large_retained", || {
        retained = Some(scanner.scan(&large));
    });
    println!("{}", format_memory_report("scan_json_large_retained", &memory));
    drop(retained);
    tracing::debug!(peak_bytes = peak_bytes(), "allocator high-water mark");

    if let Some(path) = &cli.save {
        runner.save_results(path)?;
        println!("\nResults saved to {}", path.display());
    }

    if let Some(path) = &cli.compare {
        let comparisons = runner.compare_with_baseline(path)?;
        print_comparisons(&comparisons);
    }

    Ok(())
}
