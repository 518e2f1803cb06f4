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

//! Regexmark core: benchmark orchestration for cross-engine regex
//! comparison.
//!
//! One authored corpus of patterns and haystacks runs unchanged against
//! several regex engines through a uniform adapter contract. This crate
//! holds everything the orchestration needs and nothing engine-specific:
//!
//! - [`engine`]: the closed [`EngineId`] set and the [`Engine`] adapter
//!   trait (compile once, match many, release on every exit path);
//! - [`corpus`]: the fixed cases with per-engine applicability tags and
//!   the pure filter that realizes corpus selection;
//! - [`haystacks`]: deterministic input-text generators with
//!   exact-by-construction match counts;
//! - [`runner`]: the sequential compile → assert → time → release loop,
//!   generic over both the adapter and the timing facility;
//! - [`error`]: the harness error taxonomy;
//! - [`report`]: per-case outcome summary, console and JSON.
//!
//! The adapters themselves, the criterion bench targets and the launcher
//! live in `regexmark-engines` and `regexmark-cli`; engine selection is a
//! build-time decision made there via cargo features, never a runtime
//! branch here.

pub mod corpus;
pub mod engine;
pub mod error;
pub mod haystacks;
pub mod report;
pub mod runner;

pub use corpus::{cases, cases_for, Case, Expected};
pub use engine::{Engine, EngineId};
pub use error::{EngineFailure, HarnessError};
pub use report::{CaseReport, CaseStatus, RunSummary, SUMMARY_ENV};
pub use runner::run_cases;
