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

//! Engine adapters for Regexmark.
//!
//! One module per engine, each implementing the
//! [`Engine`](regexmark_core::Engine) contract and gated by a cargo
//! feature that pulls in only that engine's dependency. The matching
//! benchmark targets live under `benches/engines/`, one per engine, with
//! `required-features` tying each executable to exactly one adapter.
//!
//! Run a single engine's benchmarks with the launcher:
//!
//! ```bash
//! regexmark rust
//! regexmark pcre2 -- --sample-size 30
//! ```
//!
//! or directly:
//!
//! ```bash
//! cargo bench -p regexmark-engines --bench onig --no-default-features --features onig
//! ```

#[cfg(feature = "rust")]
pub mod rust;

#[cfg(feature = "rust-bytes")]
pub mod rust_bytes;

#[cfg(feature = "compiled")]
pub mod compiled;

#[cfg(feature = "pcre2")]
pub mod pcre2;

#[cfg(feature = "onig")]
pub mod onig;

#[cfg(feature = "hyperscan")]
pub mod hyperscan;
