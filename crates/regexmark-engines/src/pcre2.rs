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

//! Adapter for PCRE2 through the `pcre2` bindings.
//!
//! PCRE2's search APIs are fallible (match and backtrack limits); those
//! limits are unreachable on the authored corpus, so failures are
//! absorbed as no-match to keep the adapter surface uniform. The native
//! pattern handle is destroyed by the binding crate when the compiled
//! value is released.

use ::pcre2::bytes::{Regex, RegexBuilder};
use regexmark_core::{Engine, EngineFailure, EngineId};

pub struct Pcre2Engine;

impl Engine for Pcre2Engine {
    const ID: EngineId = EngineId::Pcre2;
    type Compiled = Regex;

    fn compile(pattern: &str) -> Result<Regex, EngineFailure> {
        RegexBuilder::new()
            .jit_if_available(true)
            .build(pattern)
            .map_err(|e| EngineFailure::new(e.to_string()))
    }

    fn is_match(compiled: &Regex, haystack: &str) -> bool {
        compiled.is_match(haystack.as_bytes()).unwrap_or(false)
    }

    fn count(compiled: &Regex, haystack: &str) -> usize {
        compiled
            .find_iter(haystack.as_bytes())
            .filter(|m| m.is_ok())
            .count()
    }
}
