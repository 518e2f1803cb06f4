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

//! The fixed benchmark corpus.
//!
//! Authored once, treated as read-only configuration data. Each case tags
//! the engines it applies to; a pattern an engine cannot run (or would
//! count differently) is excluded here, declaratively, rather than by
//! compiling it and catching the failure: compilation noise must never
//! reach the timed region.
//!
//! Applicability is curated by hand, case by case:
//!
//! - backreferences only go to the backtracking engines (PCRE2, Oniguruma);
//! - Unicode property classes only go to the engines that support them
//!   with no extra configuration (the `regex`-family engines);
//! - Hyperscan reports a match per end offset rather than leftmost-first
//!   non-overlapping matches, so it only carries boolean-outcome cases and
//!   count cases whose matches have unique, fixed end offsets.

use crate::engine::EngineId;
use crate::haystacks;
use serde::Serialize;
use std::fmt;

/// The outcome a case asserts before timing begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expected {
    /// Exact number of non-overlapping matches.
    Count(usize),
    /// Whether the pattern matches anywhere.
    Match(bool),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Count(n) => write!(f, "{n} match(es)"),
            Expected::Match(true) => f.write_str("a match"),
            Expected::Match(false) => f.write_str("no match"),
        }
    }
}

/// One benchmark case: a pattern, the text it searches, the outcome it
/// must produce, and the engines it applies to.
#[derive(Debug, Clone)]
pub struct Case {
    /// Unique identifier, used as the criterion benchmark name.
    pub name: &'static str,
    /// Pattern text; never mutated after authoring.
    pub pattern: &'static str,
    /// Input text, shared read-only across all timed iterations.
    pub haystack: String,
    /// Outcome asserted once per run, before timing.
    pub expected: Expected,
    /// Engines this case may run on. Never empty.
    pub engines: &'static [EngineId],
}

impl Case {
    /// Applicability test used by the corpus filter.
    pub fn applies_to(&self, id: EngineId) -> bool {
        self.engines.contains(&id)
    }
}

const ALL_ENGINES: &[EngineId] = &EngineId::ALL;

/// Hyperscan excluded: these patterns match at several end offsets per
/// occurrence under its semantics, so counts would not be comparable.
const LEFTMOST_COUNTING: &[EngineId] = &[
    EngineId::Rust,
    EngineId::RustBytes,
    EngineId::Compiled,
    EngineId::Pcre2,
    EngineId::Onig,
];

const BACKTRACKING: &[EngineId] = &[EngineId::Pcre2, EngineId::Onig];

const UNICODE_CLASSES: &[EngineId] = &[EngineId::Rust, EngineId::RustBytes, EngineId::Compiled];

const BYTES_ONLY: &[EngineId] = &[EngineId::RustBytes];

/// The full authored corpus, in execution order.
pub fn cases() -> Vec<Case> {
    vec![
        Case {
            name: "aab-greedy-tail",
            pattern: r"a+b",
            haystack: "xxaaabxx".to_string(),
            expected: Expected::Count(1),
            engines: ALL_ENGINES,
        },
        Case {
            name: "literal-completed",
            pattern: "completed",
            haystack: haystacks::server_log(500),
            expected: Expected::Count(500),
            engines: ALL_ENGINES,
        },
        Case {
            name: "iso-date",
            pattern: r"\d{4}-\d{2}-\d{2}",
            haystack: haystacks::server_log(500),
            expected: Expected::Count(500),
            engines: ALL_ENGINES,
        },
        Case {
            name: "ipv4-dotted-quad",
            pattern: r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}",
            haystack: haystacks::server_log(500),
            expected: Expected::Count(500),
            engines: LEFTMOST_COUNTING,
        },
        Case {
            name: "digit-runs",
            pattern: r"\d+",
            haystack: haystacks::server_log(200),
            // 11 runs per generated line.
            expected: Expected::Count(2200),
            engines: LEFTMOST_COUNTING,
        },
        Case {
            name: "mailbox-addresses",
            pattern: r"[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}",
            haystack: haystacks::mailbox(300),
            expected: Expected::Count(300),
            engines: LEFTMOST_COUNTING,
        },
        Case {
            name: "address-presence",
            pattern: r"[a-z0-9]+@[a-z]+\.[a-z]{2,}",
            haystack: haystacks::mailbox(50),
            expected: Expected::Match(true),
            engines: ALL_ENGINES,
        },
        Case {
            name: "absent-token",
            pattern: "quarterly forecast",
            haystack: haystacks::server_log(200),
            expected: Expected::Match(false),
            engines: ALL_ENGINES,
        },
        Case {
            name: "caseless-deadline",
            pattern: r"(?i)deadline",
            haystack: "Deadline slipped; DEADLINE moved; new deadline set.".to_string(),
            expected: Expected::Count(3),
            engines: ALL_ENGINES,
        },
        Case {
            name: "doubled-word",
            pattern: r"(\w+) \1",
            haystack: "it was was the same same word twice".to_string(),
            expected: Expected::Count(2),
            engines: BACKTRACKING,
        },
        Case {
            name: "greek-runs",
            pattern: r"\p{Greek}+",
            haystack: "plan αλφα then ωμεγα rollout".to_string(),
            expected: Expected::Count(2),
            engines: UNICODE_CLASSES,
        },
        Case {
            name: "bytes-ascii-words",
            pattern: r"(?-u)[a-z]{6,}",
            haystack: haystacks::server_log(100),
            expected: Expected::Match(true),
            engines: BYTES_ONLY,
        },
    ]
}

/// The corpus subset applicable to `id`, in corpus order.
///
/// This is the only filtering in the system: the runner receives the
/// subset and executes all of it, so an executed case's tag set always
/// contains the build's engine.
pub fn cases_for(id: EngineId) -> Vec<Case> {
    cases().into_iter().filter(|c| c.applies_to(id)).collect()
}
