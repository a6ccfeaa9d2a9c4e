//! Serialization gate for the local strategy.
//!
//! The scratch files and planner invocation are a shared, non-reentrant
//! resource, so local runs are fully serialized. Waiters queue on an async
//! mutex in FIFO order instead of spin-polling an occupancy flag, and the
//! gate is an owned, injectable object rather than process-wide state.

use log::info;
use std::fmt::Debug;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// Boundary to the peer messaging layer: called with `true` whenever the
/// local planner becomes busy and `false` when it is released.
pub trait PlannerStatusSink: Send + Sync + Debug {
    fn planner_status(&self, busy: bool);
}

/// Discards all announcements.
#[derive(Debug, Default)]
pub struct NoopStatusSink;

impl PlannerStatusSink for NoopStatusSink {
    fn planner_status(&self, _busy: bool) {}
}

/// Writes announcements to the log.
#[derive(Debug, Default)]
pub struct LogStatusSink;

impl PlannerStatusSink for LogStatusSink {
    fn planner_status(&self, busy: bool) {
        info!("local planner status: busy={}", busy);
    }
}

/// Serializes local-planner runs and announces occupancy transitions.
#[derive(Debug)]
pub struct PlannerGate {
    lock: Mutex<()>,
    sink: Arc<dyn PlannerStatusSink>,
}

impl PlannerGate {
    pub fn new(sink: Arc<dyn PlannerStatusSink>) -> Self {
        Self {
            lock: Mutex::new(()),
            sink,
        }
    }

    /// Wait until no other local run is in flight, then mark the planner
    /// busy and announce it. The returned permit announces release when
    /// dropped, on every path.
    pub async fn acquire(&self) -> PlannerPermit<'_> {
        let guard = self.lock.lock().await;
        self.sink.planner_status(true);
        PlannerPermit {
            _guard: guard,
            sink: Arc::clone(&self.sink),
        }
    }
}

impl Default for PlannerGate {
    fn default() -> Self {
        Self::new(Arc::new(NoopStatusSink))
    }
}

/// Held for the duration of one local-planner run.
#[derive(Debug)]
pub struct PlannerPermit<'a> {
    _guard: MutexGuard<'a, ()>,
    sink: Arc<dyn PlannerStatusSink>,
}

impl Drop for PlannerPermit<'_> {
    fn drop(&mut self) {
        // Runs before the guard field drops, so the release announcement
        // always precedes the next caller's acquisition.
        self.sink.planner_status(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex as StdMutex;

    #[derive(Debug, Default)]
    struct RecordingSink {
        events: StdMutex<Vec<bool>>,
    }

    impl PlannerStatusSink for RecordingSink {
        fn planner_status(&self, busy: bool) {
            self.events.lock().unwrap().push(busy);
        }
    }

    #[tokio::test]
    async fn permit_announces_busy_then_free() {
        let sink = Arc::new(RecordingSink::default());
        let gate = PlannerGate::new(sink.clone());
        {
            let _permit = gate.acquire().await;
            assert_eq!(*sink.events.lock().unwrap(), vec![true]);
        }
        assert_eq!(*sink.events.lock().unwrap(), vec![true, false]);
    }

    #[tokio::test]
    async fn contending_callers_see_alternating_announcements() {
        let sink = Arc::new(RecordingSink::default());
        let gate = Arc::new(PlannerGate::new(sink.clone()));

        let mut handles = Vec::new();
        for _ in 0..3 {
            let gate = Arc::clone(&gate);
            handles.push(tokio::spawn(async move {
                let _permit = gate.acquire().await;
                tokio::time::sleep(tokio::time::Duration::from_millis(5)).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        // Strict alternation: a release always lands before the next acquire.
        assert_eq!(
            *sink.events.lock().unwrap(),
            vec![true, false, true, false, true, false]
        );
    }
}
