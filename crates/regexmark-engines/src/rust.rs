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

//! Adapter for the default pure-Rust engine, `regex::Regex`.

use regex::Regex;
use regexmark_core::{Engine, EngineFailure, EngineId};

pub struct RustEngine;

impl Engine for RustEngine {
    const ID: EngineId = EngineId::Rust;
    type Compiled = Regex;

    fn compile(pattern: &str) -> Result<Regex, EngineFailure> {
        Regex::new(pattern).map_err(|e| EngineFailure::new(e.to_string()))
    }

    fn is_match(compiled: &Regex, haystack: &str) -> bool {
        compiled.is_match(haystack)
    }

    fn count(compiled: &Regex, haystack: &str) -> usize {
        compiled.find_iter(haystack).count()
    }
}
