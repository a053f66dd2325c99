// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Status history event handlers.

use fj_core::Event;

use super::MaterializedState;

pub(crate) fn apply(state: &mut MaterializedState, event: &Event) {
    match event {
        Event::HistoryAppended { entry } => {
            let entries = state.history.entry(entry.job_id.to_string()).or_default();
            if !entries.iter().any(|e| e.id == entry.id) {
                entries.push(entry.clone());
            }
        }

        Event::HistoryCleared { job_id } => {
            state.history.remove(job_id.as_str());
        }

        _ => {}
    }
}
