// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helper functions for state lookups.

use std::collections::HashMap;

/// Get a value by exact ID or unique prefix.
///
/// Matches against both the full key and the suffix after the type prefix
/// (e.g. "job-", "drv-"). This allows short IDs displayed without their
/// type prefix to resolve back to the full entry.
pub(crate) fn find_by_prefix<'a, V>(map: &'a HashMap<String, V>, id: &str) -> Option<&'a V> {
    if let Some(val) = map.get(id) {
        return Some(val);
    }
    let mut matches = map.iter().filter(|(k, _)| fj_core::id::prefix_matches(k, id));
    match (matches.next(), matches.next()) {
        (Some((_, val)), None) => Some(val),
        _ => None,
    }
}
