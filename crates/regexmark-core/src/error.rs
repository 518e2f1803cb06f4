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

//! Error types for the benchmark harness.
//!
//! Configuration errors (an unknown engine name) abort a run before any
//! case executes. Per-case errors are isolated: a rejected pattern, a
//! failed sanity assertion or a failed handle release is recorded against
//! its case and the remaining cases continue, so one bad case never costs
//! the comparative data from its siblings.

use crate::engine::EngineId;
use thiserror::Error;

/// A raw failure reported by an engine, before the runner attaches case
/// context.
///
/// Adapters map their backend's native error type (a `regex::Error`, a
/// PCRE2 compile diagnostic, a Hyperscan compiler message) into this and
/// nothing else, which keeps the adapter surface uniform across engines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EngineFailure {
    /// Human-readable message from the engine.
    pub message: String,
}

impl EngineFailure {
    /// Wrap an engine-reported message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors surfaced by the benchmark harness.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarnessError {
    /// The requested engine name is not in the closed engine set.
    ///
    /// Fatal: reported before any benchmark case is touched.
    #[error("unknown engine `{name}` (known engines: {known})")]
    UnknownEngine {
        /// The name as given by the caller.
        name: String,
        /// Comma-separated list of recognized engine names.
        known: String,
    },

    /// The engine's parser rejected a corpus pattern.
    ///
    /// A corpus-author error: the case should have been excluded from this
    /// engine via its applicability tags. The case is skipped, siblings
    /// continue.
    #[error("case `{case}`: {engine} rejected pattern: {reason}")]
    Compile {
        /// Name of the benchmark case.
        case: String,
        /// Engine that rejected the pattern.
        engine: EngineId,
        /// The engine's diagnostic.
        reason: EngineFailure,
    },

    /// The engine's match result diverged from the case's expected outcome.
    ///
    /// The case is excluded from timing but the run does not abort.
    #[error("case `{case}`: {engine} produced {actual}, expected {expected}")]
    Assertion {
        /// Name of the benchmark case.
        case: String,
        /// Engine under test.
        engine: EngineId,
        /// The authored expectation.
        expected: String,
        /// What the engine actually produced.
        actual: String,
    },

    /// Releasing a compiled pattern failed.
    ///
    /// Reported and non-fatal; the next case still runs.
    #[error("case `{case}`: {engine} failed to release compiled pattern: {reason}")]
    Release {
        /// Name of the benchmark case.
        case: String,
        /// Engine whose handle could not be released.
        engine: EngineId,
        /// The engine's diagnostic.
        reason: EngineFailure,
    },
}

impl HarnessError {
    /// Build an [`HarnessError::UnknownEngine`] listing the closed engine set.
    pub fn unknown_engine(name: impl Into<String>) -> Self {
        let known = EngineId::ALL
            .iter()
            .map(|id| id.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Self::UnknownEngine {
            name: name.into(),
            known,
        }
    }

    /// Attach case context to a compile failure.
    pub fn compile(case: impl Into<String>, engine: EngineId, reason: EngineFailure) -> Self {
        Self::Compile {
            case: case.into(),
            engine,
            reason,
        }
    }

    /// Record a sanity-assertion divergence.
    pub fn assertion(
        case: impl Into<String>,
        engine: EngineId,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::Assertion {
            case: case.into(),
            engine,
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Attach case context to a release failure.
    pub fn release(case: impl Into<String>, engine: EngineId, reason: EngineFailure) -> Self {
        Self::Release {
            case: case.into(),
            engine,
            reason,
        }
    }
}
