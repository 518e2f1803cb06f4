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

//! Criterion glue shared by every engine bench target.
//!
//! Each target calls [`bench_engine`] with its adapter type. Compilation
//! and the sanity assertion happen in the runner, outside any timed
//! region; only the match closure reaches criterion.

use criterion::{black_box, Criterion, Throughput};
use regexmark_core::{cases_for, run_cases, Engine, Expected};

pub fn bench_engine<E: Engine>(c: &mut Criterion) {
    let cases = cases_for(E::ID);
    let mut group = c.benchmark_group(E::ID.as_str());

    let summary = run_cases::<E, _>(&cases, |case, compiled| {
        group.throughput(Throughput::Bytes(case.haystack.len() as u64));
        match case.expected {
            Expected::Count(_) => group.bench_function(case.name, |b| {
                b.iter(|| black_box(E::count(compiled, black_box(&case.haystack))))
            }),
            Expected::Match(_) => group.bench_function(case.name, |b| {
                b.iter(|| black_box(E::is_match(compiled, black_box(&case.haystack))))
            }),
        };
    });
    group.finish();

    summary.print_console();
    match summary.export_from_env() {
        Ok(Some(path)) => println!("Summary written to {}", path.display()),
        Ok(None) => {}
        Err(e) => eprintln!("warning: summary export failed: {e}"),
    }
}
