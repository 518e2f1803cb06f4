// Dweve Regexmark - Cross-Engine Regex Benchmark Harness
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

//! Command-line surface of the launcher.
//!
//! One positional argument from the closed engine set. The name maps 1:1
//! to a bench target and cargo feature in `regexmark-engines`, so each
//! invocation builds and runs exactly one engine-specific benchmark
//! executable. Arguments after `--` are forwarded verbatim to the timing
//! facility.

use crate::error::CliError;
use clap::Parser;
use colored::Colorize;
use regexmark_core::EngineId;
use std::process::Command;
use std::str::FromStr;

/// Cross-engine regex benchmark launcher.
///
/// # Examples
///
/// ```bash
/// # Benchmark the default pure-Rust engine
/// regexmark rust
///
/// # Benchmark PCRE2, forwarding options to criterion
/// regexmark pcre2 -- --sample-size 30
///
/// # Show what would be built, without building it
/// regexmark hyperscan --dry-run
/// ```
#[derive(Debug, Parser)]
#[command(name = "regexmark")]
#[command(author, version, about = "Cross-engine regex benchmark launcher", long_about = None)]
pub struct Cli {
    /// Engine to benchmark (see --list for the known names).
    #[arg(value_parser = parse_engine, required_unless_present = "list")]
    pub engine: Option<EngineId>,

    /// Print the known engine names and exit.
    #[arg(long)]
    pub list: bool,

    /// Print the cargo invocation instead of running it.
    #[arg(long)]
    pub dry_run: bool,

    /// Extra arguments forwarded verbatim to the timing facility.
    #[arg(last = true)]
    pub bench_args: Vec<String>,
}

fn parse_engine(s: &str) -> Result<EngineId, String> {
    EngineId::from_str(s).map_err(|e| e.to_string())
}

impl Cli {
    /// Resolve the engine and run (or print) its benchmark build.
    pub fn execute(&self) -> Result<(), CliError> {
        if self.list {
            for id in EngineId::ALL {
                println!("{}", id);
            }
            return Ok(());
        }

        let engine = match self.engine {
            Some(engine) => engine,
            // clap enforces presence whenever --list is absent.
            None => return Ok(()),
        };

        let args = self.cargo_args(engine);
        if self.dry_run {
            println!("cargo {}", args.join(" "));
            return Ok(());
        }

        if engine.needs_native_library() {
            eprintln!(
                "{} engine `{}` links an external native library; its development files must be installed",
                "note:".yellow().bold(),
                engine
            );
        }
        println!("{} `{}`", "Benchmarking engine".green().bold(), engine);

        let status = Command::new("cargo")
            .args(&args)
            .status()
            .map_err(CliError::spawn)?;
        if !status.success() {
            return Err(CliError::bench_failed(status));
        }
        Ok(())
    }

    /// The cargo invocation for one engine: its bench target, its feature,
    /// nothing else linked.
    fn cargo_args(&self, engine: EngineId) -> Vec<String> {
        let mut args: Vec<String> = [
            "bench",
            "--package",
            "regexmark-engines",
            "--bench",
            engine.as_str(),
            "--no-default-features",
            "--features",
            engine.as_str(),
        ]
        .into_iter()
        .map(String::from)
        .collect();

        if !self.bench_args.is_empty() {
            args.push("--".to_string());
            args.extend(self.bench_args.iter().cloned());
        }
        args
    }
}
