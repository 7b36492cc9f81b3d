//! Worker pool for the prefix scanner
//!
//! Signature indices go into a shared queue in list order. Each worker pulls indices
//! until it finds a match, runs dry, or reaches an index past the best hit so far, then
//! reports once. The calling thread collects every report and keeps the hit with the
//! lowest index, so the answer never depends on thread timing.

use super::signatures::PrefixSignature;
use crossbeam_channel::{bounded, unbounded};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

pub(super) fn scan<'s>(
    signatures: &'s [PrefixSignature],
    data: &[u8],
    workers: usize,
) -> Option<&'s PrefixSignature> {
    if signatures.is_empty() {
        return None;
    }
    let workers = workers.clamp(1, signatures.len());

    let (job_tx, job_rx) = bounded::<usize>(signatures.len());
    for index in 0..signatures.len() {
        if job_tx.send(index).is_err() {
            break;
        }
    }
    drop(job_tx);

    let (report_tx, report_rx) = unbounded::<Option<(usize, &'s PrefixSignature)>>();
    // lowest matching index reported so far
    let best = AtomicUsize::new(usize::MAX);

    thread::scope(|scope| {
        for _ in 0..workers {
            let job_rx = job_rx.clone();
            let report_tx = report_tx.clone();
            let best = &best;

            scope.spawn(move || {
                let mut found = None;
                for index in job_rx.iter() {
                    // the queue is ordered, so nothing later can beat the current best
                    if index > best.load(Ordering::Acquire) {
                        break;
                    }
                    if let Some(hit) = signatures.get(index).and_then(|s| s.check(data)) {
                        best.fetch_min(index, Ordering::AcqRel);
                        found = Some((index, hit));
                        break;
                    }
                }
                // the receiver outlives every worker
                let _ = report_tx.send(found);
            });
        }
        drop(report_tx);

        report_rx
            .iter()
            .flatten()
            .min_by_key(|(index, _)| *index)
            .map(|(_, hit)| hit)
    })
}
