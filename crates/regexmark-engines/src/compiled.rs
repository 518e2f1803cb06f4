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

//! Adapter for the compile-time-generated engine, via `lazy-regex`.
//!
//! A macro-generated engine can only serve patterns it was built with, so
//! `compile` resolves the pattern text against a table of `regex!`
//! statics instead of parsing anything at run time. The table must cover
//! every corpus pattern tagged for this engine; a miss is reported as a
//! compile failure for that case.

use lazy_regex::{regex, Regex};
use regexmark_core::{Engine, EngineFailure, EngineId};

/// Pattern table. Each entry is validated at compile time by the macro.
fn precompiled(pattern: &str) -> Option<&'static Regex> {
    let re: &'static Regex = match pattern {
        r"a+b" => regex!(r"a+b"),
        "completed" => regex!("completed"),
        r"\d{4}-\d{2}-\d{2}" => regex!(r"\d{4}-\d{2}-\d{2}"),
        r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}" => {
            regex!(r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}")
        }
        r"\d+" => regex!(r"\d+"),
        r"[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}" => {
            regex!(r"[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}")
        }
        r"[a-z0-9]+@[a-z]+\.[a-z]{2,}" => regex!(r"[a-z0-9]+@[a-z]+\.[a-z]{2,}"),
        "quarterly forecast" => regex!("quarterly forecast"),
        r"(?i)deadline" => regex!(r"(?i)deadline"),
        r"\p{Greek}+" => regex!(r"\p{Greek}+"),
        _ => return None,
    };
    Some(re)
}

pub struct CompiledEngine;

impl Engine for CompiledEngine {
    const ID: EngineId = EngineId::Compiled;
    type Compiled = &'static Regex;

    fn compile(pattern: &str) -> Result<Self::Compiled, EngineFailure> {
        precompiled(pattern).ok_or_else(|| {
            EngineFailure::new(format!(
                "pattern `{pattern}` is not in the compile-time table"
            ))
        })
    }

    fn is_match(compiled: &Self::Compiled, haystack: &str) -> bool {
        compiled.is_match(haystack)
    }

    fn count(compiled: &Self::Compiled, haystack: &str) -> usize {
        compiled.find_iter(haystack).count()
    }
}
