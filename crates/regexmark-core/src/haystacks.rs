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

//! Deterministic haystack generators.
//!
//! Corpus cases carry authored expected match counts, so generated text
//! must make those counts exact by construction: `server_log(n)` embeds
//! exactly one ISO date, one IPv4 address, one `completed` token and
//! eleven digit runs per line, and `mailbox(n)` exactly one address per
//! message. No randomness: a stray digit or `@` in filler text would
//! silently break an authored count.

/// One synthetic log line per `lines`, each shaped like
/// `2024-03-05 08:30:15 INFO request from 10.14.201.77 completed in 123ms`.
///
/// Per line: 1 ISO date, 1 dotted quad, 1 `completed`, 11 digit runs.
pub fn server_log(lines: usize) -> String {
    let mut out = String::with_capacity(lines * 80);
    for i in 0..lines {
        let day = i % 28 + 1;
        let hour = i % 24;
        let minute = i % 60;
        let second = (i * 7) % 60;
        let host = i % 250 + 1;
        let peer = (i * 3) % 250 + 1;
        let millis = i % 900 + 10;
        out.push_str(&format!(
            "2024-03-{day:02} {hour:02}:{minute:02}:{second:02} INFO request from 10.14.{host}.{peer} completed in {millis}ms\n"
        ));
    }
    out
}

/// One synthetic mail header block per `messages`, each containing exactly
/// one address of the form `user{i}@example.com`. The body lines carry no
/// digits and no `@`.
pub fn mailbox(messages: usize) -> String {
    let mut out = String::with_capacity(messages * 96);
    for i in 0..messages {
        out.push_str(&format!("From: user{i}@example.com\n"));
        out.push_str("Subject: weekly sync notes\n");
        out.push_str("Looking forward to the next review cycle.\n\n");
    }
    out
}
