//! Deterministic scheduler for deferred game work.
//!
//! `VirtualClock` keeps a queue of jobs keyed by due time. Nothing runs on
//! its own: the owner advances the clock and drains the due jobs. Jobs due
//! at the same instant run in the order they were scheduled.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use crate::session::{ResolutionToken, SessionEpoch};
use crate::signals::Burst;

/// Work deferred by the driver.
///
/// Every job belongs to the session that scheduled it and is dropped once
/// that session has been replaced.
#[derive(Clone, Debug, PartialEq)]
pub enum Deferred {
    /// Deliver a timer tick.
    Tick(SessionEpoch),
    /// Revert a mismatched pair.
    Resolve(ResolutionToken),
    /// Remove the error highlight from a reverted pair.
    ClearErrorFlash {
        epoch: SessionEpoch,
        positions: [usize; 2],
    },
    /// Stop the matched-counter pulse.
    EndPulse(SessionEpoch),
    /// Show the win panel.
    ShowWinPanel {
        epoch: SessionEpoch,
        moves: u32,
        elapsed_secs: u32,
    },
    /// Fire a confetti burst.
    FireBurst { epoch: SessionEpoch, burst: Burst },
}

impl Deferred {
    /// Session this job was scheduled for.
    #[must_use]
    pub fn epoch(&self) -> SessionEpoch {
        match self {
            Deferred::Tick(epoch) | Deferred::EndPulse(epoch) => *epoch,
            Deferred::Resolve(token) => token.epoch,
            Deferred::ClearErrorFlash { epoch, .. }
            | Deferred::ShowWinPanel { epoch, .. }
            | Deferred::FireBurst { epoch, .. } => *epoch,
        }
    }
}

/// Handle for a scheduled job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JobId(pub u64);

/// Virtual-time job queue.
#[derive(Debug, Default)]
pub struct VirtualClock {
    now_ms: u64,
    next_id: u64,
    queue: BinaryHeap<Reverse<(u64, JobId)>>,
    jobs: FxHashMap<JobId, Deferred>,
}

impl VirtualClock {
    /// A clock at time zero with nothing scheduled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of jobs waiting.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.jobs.len()
    }

    /// Iterate over waiting jobs (unordered).
    pub fn jobs(&self) -> impl Iterator<Item = &Deferred> {
        self.jobs.values()
    }

    /// Schedule `job` to run `delay_ms` from now.
    pub fn schedule(&mut self, delay_ms: u32, job: Deferred) -> JobId {
        let id = JobId(self.next_id);
        self.next_id += 1;

        let due = self.now_ms + u64::from(delay_ms);
        self.queue.push(Reverse((due, id)));
        self.jobs.insert(id, job);
        id
    }

    /// Drop a scheduled job. Returns it if it was still waiting.
    pub fn cancel(&mut self, id: JobId) -> Option<Deferred> {
        self.jobs.remove(&id)
    }

    /// Time of the earliest waiting job.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.queue
            .iter()
            .filter(|Reverse((_, id))| self.jobs.contains_key(id))
            .map(|Reverse((due, _))| *due)
            .min()
    }

    /// Pop the earliest job due at or before `until`, moving the clock to
    /// its due time.
    pub fn pop_due(&mut self, until: u64) -> Option<Deferred> {
        while let Some(Reverse((due, id))) = self.queue.peek().copied() {
            if due > until {
                return None;
            }
            self.queue.pop();
            // Cancelled jobs leave a stale heap entry behind
            if let Some(job) = self.jobs.remove(&id) {
                self.now_ms = self.now_ms.max(due);
                return Some(job);
            }
        }
        None
    }

    /// Move the clock forward without running anything.
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}
