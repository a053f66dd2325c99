// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Invariants over random booking sequences.

use super::*;
use fj_core::test_support::strategies::arb_window;
use fj_core::TimeWindow;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Create(TimeWindow),
    Move(usize, TimeWindow),
    Status(usize, JobStatus),
    Delete(usize),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => arb_window().prop_map(Op::Create),
        2 => (any::<usize>(), arb_window()).prop_map(|(i, w)| Op::Move(i, w)),
        // Only releases: reactivating skips the conflict check
        2 => (any::<usize>(), prop_oneof![Just(JobStatus::Done), Just(JobStatus::Cancelled)])
            .prop_map(|(i, s)| Op::Status(i, s)),
        1 => any::<usize>().prop_map(Op::Delete),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// No two active jobs ever hold overlapping windows on the same driver,
    /// and every job's history length matches its status changes.
    #[test]
    fn active_bookings_never_overlap(ops in proptest::collection::vec(arb_op(), 1..40)) {
        let h = Harness::new();
        let mut ids: Vec<JobId> = Vec::new();
        let mut changes: std::collections::HashMap<JobId, usize> = Default::default();

        for op in ops {
            h.tick();
            match op {
                Op::Create(w) => {
                    let req = h.driver_haul(0, 1).window(w.pickup, w.dropoff);
                    if let Ok(job) = h.scheduler.create_job(req) {
                        changes.insert(job.id.clone(), 1);
                        ids.push(job.id);
                    }
                }
                Op::Move(i, w) if !ids.is_empty() => {
                    let id = ids[i % ids.len()].clone();
                    let req = h.driver_haul(0, 1).window(w.pickup, w.dropoff);
                    let result = h.scheduler.update_job(&id, req);
                    if let Err(e) = result {
                        prop_assert!(matches!(e, SchedulerError::Conflict { .. }), "{e}");
                    }
                }
                Op::Status(i, status) if !ids.is_empty() => {
                    let id = ids[i % ids.len()].clone();
                    let before = h.scheduler.get_job(&id).map(|j| j.status).ok();
                    h.scheduler.update_status(&id, status.as_str()).unwrap();
                    if before != Some(status) {
                        *changes.entry(id).or_default() += 1;
                    }
                }
                Op::Delete(i) if !ids.is_empty() => {
                    let id = ids.remove(i % ids.len());
                    h.scheduler.delete_job(&id).unwrap();
                    changes.remove(&id);
                    prop_assert!(h.scheduler.job_history(&id).is_err());
                }
                _ => {}
            }
        }

        let active: Vec<Job> = h
            .scheduler
            .list_jobs(&JobFilter::default())
            .into_iter()
            .filter(|j| j.is_active())
            .collect();
        for (i, a) in active.iter().enumerate() {
            for b in &active[i + 1..] {
                let (wa, wb) = (a.window(), b.window());
                prop_assert!(
                    !matches!((wa, wb), (Some(wa), Some(wb)) if wa.overlaps(&wb)),
                    "{} and {} overlap", a.id, b.id
                );
            }
        }

        for id in &ids {
            let history = h.scheduler.job_history(id).unwrap();
            prop_assert_eq!(history.len(), changes[id]);
            prop_assert!(history.windows(2).all(|w| w[0].changed_at <= w[1].changed_at));
        }
    }
}
