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

//! Adapter for Hyperscan through the `hyperscan` bindings.
//!
//! Hyperscan reports a match per accepting end offset, not leftmost-first
//! non-overlapping spans, so the corpus only tags it with boolean-outcome
//! cases and count cases whose matches have unique end offsets. The
//! compiled form carries the scratch space alongside the database; both
//! native allocations are destroyed when the compiled value is released.

use ::hyperscan::prelude::*;
use regexmark_core::{Engine, EngineFailure, EngineId};

pub struct HyperscanEngine;

impl Engine for HyperscanEngine {
    const ID: EngineId = EngineId::Hyperscan;
    type Compiled = (BlockDatabase, Scratch);

    fn compile(pattern: &str) -> Result<Self::Compiled, EngineFailure> {
        let db: BlockDatabase = Pattern::new(pattern)
            .map_err(|e| EngineFailure::new(e.to_string()))?
            .build()
            .map_err(|e| EngineFailure::new(e.to_string()))?;
        let scratch = db
            .alloc_scratch()
            .map_err(|e| EngineFailure::new(e.to_string()))?;
        Ok((db, scratch))
    }

    fn is_match(compiled: &Self::Compiled, haystack: &str) -> bool {
        let (db, scratch) = compiled;
        let mut found = false;
        // Terminating the scan early surfaces as an error from `scan`;
        // the flag is the actual outcome.
        let _ = db.scan(haystack, scratch, |_, _, _, _| {
            found = true;
            Matching::Terminate
        });
        found
    }

    fn count(compiled: &Self::Compiled, haystack: &str) -> usize {
        let (db, scratch) = compiled;
        let mut matches = 0usize;
        let _ = db.scan(haystack, scratch, |_, _, _, _| {
            matches += 1;
            Matching::Continue
        });
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regexmark_core::{cases_for, run_cases};

    #[test]
    fn round_trips_shared_scenario() {
        let re = HyperscanEngine::compile(r"a+b").unwrap();
        assert!(HyperscanEngine::is_match(&re, "xxaaabxx"));
        assert!(!HyperscanEngine::is_match(&re, "xxaaaxx"));
        // All three spans of `a+b` in "xxaaabxx" end at the same offset,
        // so the end-offset count agrees with the leftmost count.
        assert_eq!(HyperscanEngine::count(&re, "xxaaabxx"), 1);
        HyperscanEngine::release(re).unwrap();
    }

    #[test]
    fn rejects_malformed_pattern() {
        assert!(HyperscanEngine::compile("a(").is_err());
    }

    #[test]
    fn every_tagged_case_passes_its_assertion() {
        let summary = run_cases::<HyperscanEngine, _>(&cases_for(HyperscanEngine::ID), |_, _| {});
        assert_eq!(summary.skipped(), 0, "{:#?}", summary.cases);
    }
}
