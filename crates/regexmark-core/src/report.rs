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

//! Per-run summary of case outcomes.
//!
//! Timing statistics belong to criterion; this report records what the
//! harness itself decided per case (timed, or skipped with the reason) so
//! a run never ends in silent omission. Printed to the console at the end
//! of every bench run, and exported as JSON when `REGEXMARK_SUMMARY`
//! names a target path.

use crate::corpus::Case;
use crate::engine::EngineId;
use serde::Serialize;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable naming the JSON export path.
pub const SUMMARY_ENV: &str = "REGEXMARK_SUMMARY";

/// Outcome of one case within a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaseStatus {
    /// The case passed its sanity assertion and was handed to the timing
    /// facility.
    Timed,
    /// The case did not reach the timed region.
    Skipped {
        /// Why: a compile rejection or an assertion divergence.
        reason: String,
    },
}

/// Record for one executed case.
#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    /// Case name, matching the criterion benchmark name.
    pub name: String,
    /// The pattern text, for self-contained reports.
    pub pattern: String,
    /// Timed or skipped-with-reason.
    #[serde(flatten)]
    pub status: CaseStatus,
    /// Set when releasing the compiled pattern failed. Non-fatal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_error: Option<String>,
}

impl CaseReport {
    /// Record for a case with the given status.
    pub fn new(case: &Case, status: CaseStatus) -> Self {
        Self {
            name: case.name.to_string(),
            pattern: case.pattern.to_string(),
            status,
            release_error: None,
        }
    }

    /// Record for a case that never reached the timed region.
    pub fn skipped(case: &Case, reason: impl Into<String>) -> Self {
        Self::new(
            case,
            CaseStatus::Skipped {
                reason: reason.into(),
            },
        )
    }
}

/// Summary of one benchmark run: one engine, every applicable case.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// The engine this build was selected for.
    pub engine: EngineId,
    /// Per-case outcomes, in execution order.
    pub cases: Vec<CaseReport>,
}

impl RunSummary {
    /// Empty summary for `engine`.
    pub fn new(engine: EngineId) -> Self {
        Self {
            engine,
            cases: Vec::new(),
        }
    }

    /// Append one case outcome.
    pub fn push(&mut self, report: CaseReport) {
        self.cases.push(report);
    }

    /// Number of cases that reached the timed region.
    pub fn timed(&self) -> usize {
        self.cases
            .iter()
            .filter(|c| c.status == CaseStatus::Timed)
            .count()
    }

    /// Number of cases skipped before timing.
    pub fn skipped(&self) -> usize {
        self.cases.len() - self.timed()
    }

    /// Print the per-case outcome table to the console.
    pub fn print_console(&self) {
        println!("\n{}", "=".repeat(72));
        println!("REGEXMARK RUN SUMMARY: engine `{}`", self.engine);
        println!("{}", "=".repeat(72));
        println!(
            "Cases: {} timed, {} skipped",
            self.timed(),
            self.skipped()
        );
        println!("{}", "-".repeat(72));

        for case in &self.cases {
            match &case.status {
                CaseStatus::Timed => println!("  timed    {}", case.name),
                CaseStatus::Skipped { reason } => {
                    println!("  skipped  {}", case.name);
                    println!("           {}", reason);
                }
            }
            if let Some(err) = &case.release_error {
                println!("           release warning: {}", err);
            }
        }
        println!("{}", "=".repeat(72));
    }

    /// Serialize the summary as pretty JSON to `path`.
    pub fn write_json(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, json)
    }

    /// Export to the path named by [`SUMMARY_ENV`], if set.
    ///
    /// Returns the path written, or `None` when no export was requested.
    pub fn export_from_env(&self) -> io::Result<Option<PathBuf>> {
        match env::var_os(SUMMARY_ENV) {
            Some(path) => {
                let path = PathBuf::from(path);
                self.write_json(&path)?;
                Ok(Some(path))
            }
            None => Ok(None),
        }
    }
}
