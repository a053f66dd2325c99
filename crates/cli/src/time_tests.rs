// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use fj_core::test_support::at;

#[yare::parameterized(
    rfc3339_utc     = { "2026-03-02T10:00:00Z", at(10, 0) },
    rfc3339_offset  = { "2026-03-02T12:30:00+02:00", at(10, 30) },
    minutes         = { "2026-03-02T10:00", at(10, 0) },
    seconds         = { "2026-03-02T10:00:00", at(10, 0) },
    space           = { "2026-03-02 09:15", at(9, 15) },
    padded          = { "  2026-03-02T10:00  ", at(10, 0) },
)]
fn parses_times(input: &str, expected: DateTime<Utc>) {
    assert_eq!(parse_time(input).unwrap(), expected);
}

#[yare::parameterized(
    date_only = { "2026-03-02" },
    garbage   = { "tomorrow" },
    bad_hour  = { "2026-03-02T25:00" },
)]
fn rejects_times(input: &str) {
    let err = parse_time(input).unwrap_err();
    assert!(err.contains(input.trim()));
}

#[test]
fn prices_keep_precision() {
    assert_eq!(parse_price("1250.50").unwrap().to_string(), "1250.50");
    assert!(parse_price("12,5").is_err());
}

#[test]
fn formats_times() {
    assert_eq!(format_time(at(9, 5)), "2026-03-02 09:05");
    assert_eq!(format_opt_time(None), "-");
}
