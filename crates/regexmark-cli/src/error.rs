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

//! Structured error types for the launcher.

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors the launcher can surface to the user.
#[derive(Debug, Error)]
pub enum CliError {
    /// `cargo` could not be invoked at all.
    #[error("failed to invoke cargo: {message}")]
    Spawn {
        /// The underlying I/O error message.
        message: String,
    },

    /// The benchmark build or run exited unsuccessfully.
    #[error("benchmark run failed ({status})")]
    BenchFailed {
        /// Rendered exit status of the cargo child process.
        status: String,
    },
}

impl CliError {
    pub fn spawn(err: io::Error) -> Self {
        Self::Spawn {
            message: err.to_string(),
        }
    }

    pub fn bench_failed(status: ExitStatus) -> Self {
        Self::BenchFailed {
            status: status.to_string(),
        }
    }
}
