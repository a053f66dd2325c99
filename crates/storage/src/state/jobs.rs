// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job event handlers.

use fj_core::Event;

use super::MaterializedState;

pub(crate) fn apply(state: &mut MaterializedState, event: &Event) {
    match event {
        Event::JobSaved { job } => {
            if let Some(previous) = state.jobs.get(job.id.as_str()) {
                state.schedule.remove(previous);
            }
            state.schedule.insert(job);
            state.jobs.insert(job.id.to_string(), job.clone());
        }

        // History is cleared by its own event; the store never cascades.
        Event::JobDeleted { id } => {
            if let Some(job) = state.jobs.remove(id.as_str()) {
                state.schedule.remove(&job);
            }
        }

        _ => {}
    }
}
