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

//! The per-case benchmark loop.
//!
//! Generic over the [`Engine`] adapter and over the timing step, which is
//! injected as a closure: the bench targets pass criterion registration,
//! tests pass a probe. That keeps the compile → assert → time → release
//! bookkeeping testable without a timing facility in the loop.
//!
//! Cases execute strictly sequentially, in corpus order. Each case's
//! compiled pattern is released before the next case compiles, so no
//! case's timing is influenced by another's pattern lifetime.

use crate::corpus::{Case, Expected};
use crate::engine::Engine;
use crate::error::HarnessError;
use crate::report::{CaseReport, CaseStatus, RunSummary};

/// Run every case against `E`, handing each verified compiled pattern to
/// `time` exactly once.
///
/// The caller is responsible for passing a pre-filtered corpus
/// ([`crate::corpus::cases_for`]); the runner never skips on
/// applicability.
///
/// Error isolation: a rejected pattern or failed sanity assertion skips
/// that case only. Release runs on every exit path that acquired a
/// compiled pattern, including after an assertion failure; a release
/// failure is recorded on the report and the next case still runs.
pub fn run_cases<E, F>(cases: &[Case], mut time: F) -> RunSummary
where
    E: Engine,
    F: FnMut(&Case, &E::Compiled),
{
    let mut summary = RunSummary::new(E::ID);
    for case in cases {
        debug_assert!(case.applies_to(E::ID), "unfiltered case `{}`", case.name);
        summary.push(run_case::<E, F>(case, &mut time));
    }
    summary
}

fn run_case<E, F>(case: &Case, time: &mut F) -> CaseReport
where
    E: Engine,
    F: FnMut(&Case, &E::Compiled),
{
    let compiled = match E::compile(case.pattern) {
        Ok(compiled) => compiled,
        Err(reason) => {
            let err = HarnessError::compile(case.name, E::ID, reason);
            return CaseReport::skipped(case, err.to_string());
        }
    };

    let status = match verify::<E>(&compiled, case) {
        Ok(()) => {
            time(case, &compiled);
            CaseStatus::Timed
        }
        Err(err) => CaseStatus::Skipped {
            reason: err.to_string(),
        },
    };

    let mut report = CaseReport::new(case, status);
    if let Err(reason) = E::release(compiled) {
        let err = HarnessError::release(case.name, E::ID, reason);
        report.release_error = Some(err.to_string());
    }
    report
}

/// Assert the compiled pattern's behavior against the authored outcome,
/// once, before any timing.
fn verify<E: Engine>(compiled: &E::Compiled, case: &Case) -> Result<(), HarnessError> {
    let actual = match case.expected {
        Expected::Count(want) => {
            let got = E::count(compiled, &case.haystack);
            if got == want {
                return Ok(());
            }
            Expected::Count(got)
        }
        Expected::Match(want) => {
            let got = E::is_match(compiled, &case.haystack);
            if got == want {
                return Ok(());
            }
            Expected::Match(got)
        }
    };
    Err(HarnessError::assertion(
        case.name,
        E::ID,
        case.expected.to_string(),
        actual.to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineId;
    use crate::error::EngineFailure;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn case(name: &'static str, pattern: &'static str, expected: Expected) -> Case {
        Case {
            name,
            pattern,
            haystack: "one fish two fish".to_string(),
            expected,
            engines: &EngineId::ALL,
        }
    }

    /// Literal-substring engine used as a stand-in adapter.
    struct Substr;

    impl Engine for Substr {
        const ID: EngineId = EngineId::Rust;
        type Compiled = String;

        fn compile(pattern: &str) -> Result<String, EngineFailure> {
            if pattern.is_empty() {
                return Err(EngineFailure::new("empty pattern"));
            }
            Ok(pattern.to_string())
        }

        fn is_match(compiled: &String, haystack: &str) -> bool {
            haystack.contains(compiled.as_str())
        }

        fn count(compiled: &String, haystack: &str) -> usize {
            haystack.matches(compiled.as_str()).count()
        }
    }

    #[test]
    fn verified_case_is_timed_exactly_once() {
        let cases = vec![case("fish-count", "fish", Expected::Count(2))];
        let mut timed = 0;
        let summary = run_cases::<Substr, _>(&cases, |_, _| timed += 1);
        assert_eq!(timed, 1);
        assert_eq!(summary.cases[0].status, CaseStatus::Timed);
    }

    #[test]
    fn assertion_failure_skips_timing_and_continues() {
        let cases = vec![
            case("wrong-count", "fish", Expected::Count(5)),
            case("right-count", "fish", Expected::Count(2)),
        ];
        let mut timed = Vec::new();
        let summary = run_cases::<Substr, _>(&cases, |c, _| timed.push(c.name));
        assert_eq!(timed, vec!["right-count"]);
        match &summary.cases[0].status {
            CaseStatus::Skipped { reason } => {
                assert!(reason.contains("expected 5 match(es)"), "reason: {reason}");
            }
            other => panic!("expected skip, got {other:?}"),
        }
        assert_eq!(summary.cases[1].status, CaseStatus::Timed);
    }

    #[test]
    fn compile_failure_is_isolated_to_its_case() {
        let cases = vec![
            case("bad-pattern", "", Expected::Match(true)),
            case("good-pattern", "fish", Expected::Match(true)),
        ];
        let mut timed = 0;
        let summary = run_cases::<Substr, _>(&cases, |_, _| timed += 1);
        assert_eq!(timed, 1);
        match &summary.cases[0].status {
            CaseStatus::Skipped { reason } => {
                assert!(reason.contains("rejected pattern"), "reason: {reason}");
            }
            other => panic!("expected skip, got {other:?}"),
        }
    }

    /// Release-counting engine whose `count` is deliberately wrong, to pin
    /// down the release-on-assertion-failure path.
    struct Miscounting;

    static MISCOUNTING_RELEASES: AtomicUsize = AtomicUsize::new(0);

    impl Engine for Miscounting {
        const ID: EngineId = EngineId::Rust;
        type Compiled = String;

        fn compile(pattern: &str) -> Result<String, EngineFailure> {
            Ok(pattern.to_string())
        }

        fn is_match(_: &String, _: &str) -> bool {
            true
        }

        fn count(_: &String, _: &str) -> usize {
            0
        }

        fn release(compiled: String) -> Result<(), EngineFailure> {
            MISCOUNTING_RELEASES.fetch_add(1, Ordering::SeqCst);
            drop(compiled);
            Ok(())
        }
    }

    #[test]
    fn release_happens_exactly_once_even_on_assertion_failure() {
        let cases = vec![
            case("will-fail", "fish", Expected::Count(2)),
            case("will-pass", "fish", Expected::Match(true)),
        ];
        let summary = run_cases::<Miscounting, _>(&cases, |_, _| {});
        // Two acquisitions, two releases: the assertion-failed case still
        // released its handle before the next case compiled.
        assert_eq!(MISCOUNTING_RELEASES.load(Ordering::SeqCst), 2);
        assert!(matches!(summary.cases[0].status, CaseStatus::Skipped { .. }));
        assert_eq!(summary.cases[1].status, CaseStatus::Timed);
    }

    /// Engine whose destructor reports failure.
    struct LeakyRelease;

    impl Engine for LeakyRelease {
        const ID: EngineId = EngineId::Rust;
        type Compiled = String;

        fn compile(pattern: &str) -> Result<String, EngineFailure> {
            Ok(pattern.to_string())
        }

        fn is_match(_: &String, _: &str) -> bool {
            true
        }

        fn count(compiled: &String, haystack: &str) -> usize {
            haystack.matches(compiled.as_str()).count()
        }

        fn release(compiled: String) -> Result<(), EngineFailure> {
            drop(compiled);
            Err(EngineFailure::new("native handle already freed"))
        }
    }

    #[test]
    fn release_failure_is_reported_but_not_fatal() {
        let cases = vec![
            case("first", "fish", Expected::Match(true)),
            case("second", "fish", Expected::Count(2)),
        ];
        let summary = run_cases::<LeakyRelease, _>(&cases, |_, _| {});
        assert_eq!(summary.cases.len(), 2);
        for report in &summary.cases {
            assert_eq!(report.status, CaseStatus::Timed);
            let err = report.release_error.as_deref().unwrap();
            assert!(err.contains("failed to release"), "got: {err}");
        }
    }

    #[test]
    fn correctness_outcomes_are_idempotent() {
        let cases = vec![
            case("fish-count", "fish", Expected::Count(2)),
            case("wrong-count", "fish", Expected::Count(9)),
        ];
        let first = run_cases::<Substr, _>(&cases, |_, _| {});
        let second = run_cases::<Substr, _>(&cases, |_, _| {});
        for (a, b) in first.cases.iter().zip(second.cases.iter()) {
            assert_eq!(a.status, b.status);
        }
    }
}
