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

//! The engine identifier set and the uniform adapter contract.
//!
//! Every engine under comparison is wrapped by one implementation of
//! [`Engine`]. The runner only ever talks to this trait; byte- versus
//! text-oriented input, macro-generated pattern construction and FFI
//! marshaling for externally linked libraries are all absorbed inside the
//! individual adapters in `regexmark-engines`.

use crate::error::{EngineFailure, HarnessError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Identifier for one regex engine under comparison.
///
/// A closed set: it selects an adapter implementation at build time and
/// filters the corpus via each case's applicability tags. The string form
/// doubles as the cargo feature and the bench-target name for that engine
/// in `regexmark-engines`, which is what keeps the launcher mapping 1:1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EngineId {
    /// `regex::Regex`, the default pure-Rust engine.
    Rust,
    /// `regex::bytes::Regex`, the byte-oriented variant of the default.
    RustBytes,
    /// Patterns generated at compile time via the `lazy-regex` macro.
    Compiled,
    /// PCRE2 through the `pcre2` bindings.
    Pcre2,
    /// Oniguruma through the `onig` bindings.
    Onig,
    /// Hyperscan through the `hyperscan` bindings.
    Hyperscan,
}

impl EngineId {
    /// Every engine in the closed set, in launcher display order.
    pub const ALL: [EngineId; 6] = [
        EngineId::Rust,
        EngineId::RustBytes,
        EngineId::Compiled,
        EngineId::Pcre2,
        EngineId::Onig,
        EngineId::Hyperscan,
    ];

    /// Canonical name: launcher argument, cargo feature and bench target.
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineId::Rust => "rust",
            EngineId::RustBytes => "rust-bytes",
            EngineId::Compiled => "compiled",
            EngineId::Pcre2 => "pcre2",
            EngineId::Onig => "onig",
            EngineId::Hyperscan => "hyperscan",
        }
    }

    /// Whether this engine links an externally built C library.
    ///
    /// Used by the launcher to warn that the native library must be
    /// installed before the bench target can build.
    pub fn needs_native_library(&self) -> bool {
        matches!(self, EngineId::Pcre2 | EngineId::Onig | EngineId::Hyperscan)
    }
}

impl fmt::Display for EngineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngineId {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EngineId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| HarnessError::unknown_engine(s))
    }
}

/// The uniform adapter contract, implemented once per [`EngineId`].
///
/// The contract is intentionally minimal so the runner contains no
/// engine-specific branching:
///
/// - [`compile`](Engine::compile) turns pattern text into the engine's
///   compiled form, once per case, outside any timed region;
/// - [`is_match`](Engine::is_match) and [`count`](Engine::count) are the
///   operations handed to the timing facility: deterministic, with no
///   observable side effects beyond engine-internal caches;
/// - [`release`](Engine::release) destroys the compiled form. The runner
///   calls it exactly once per acquisition, on every exit path of a case.
///
/// Adapters over fallible search APIs absorb match-time errors as
/// no-match; the corpus is curated so they cannot occur.
pub trait Engine {
    /// The identifier this adapter implements.
    const ID: EngineId;

    /// Engine-specific compiled pattern handle, exclusively owned by the
    /// executing case.
    type Compiled;

    /// Compile a pattern. Fails when the engine's parser rejects it.
    fn compile(pattern: &str) -> Result<Self::Compiled, EngineFailure>;

    /// True when the pattern matches anywhere in the haystack.
    fn is_match(compiled: &Self::Compiled, haystack: &str) -> bool;

    /// Number of non-overlapping matches in the haystack.
    fn count(compiled: &Self::Compiled, haystack: &str) -> usize;

    /// Destroy the compiled pattern.
    ///
    /// The default is a plain drop, which is already sufficient for every
    /// adapter in the tree: native handles destruct in their binding
    /// crate's `Drop`. The hook exists so that a failing destructor can be
    /// reported instead of silently ignored.
    fn release(compiled: Self::Compiled) -> Result<(), EngineFailure> {
        drop(compiled);
        Ok(())
    }
}
