// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn paint_wraps_text_when_enabled() {
    let result = paint(codes::HEADER, "foo", true);
    assert!(result.starts_with("\x1b[38;5;74m"), "expected ANSI header color");
    assert!(result.contains("foo"));
    assert!(result.ends_with(RESET), "expected ANSI reset");
}

#[test]
fn paint_is_plain_when_disabled() {
    assert_eq!(paint(codes::HEADER, "foo", false), "foo");
}

#[yare::parameterized(
    open        = { JobStatus::Open, codes::ACTIVE },
    assigned    = { JobStatus::Assigned, codes::ACTIVE },
    in_progress = { JobStatus::InProgress, codes::ACTIVE },
    done        = { JobStatus::Done, codes::MUTED },
    cancelled   = { JobStatus::Cancelled, codes::CANCELLED },
)]
fn status_colors(status: JobStatus, code: u8) {
    assert_eq!(status_code(status), code);
}
