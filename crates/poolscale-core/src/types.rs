//! Domain types for worker-pool scaling decisions.
//!
//! These types describe the point-in-time snapshot (`Factors`) an external
//! orchestrator hands to the policy, and the decision (`DecideResult`) it
//! gets back. The policy observes the snapshot read-only; the orchestrator
//! owns worker lifecycle and queue state.

use serde::{Deserialize, Serialize};

/// Unique identifier for a worker in the pool.
pub type WorkerId = String;

// ── Workers ───────────────────────────────────────────────────────

/// Lifecycle status of a worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerStatus {
    /// Idle and able to accept new sessions.
    Free,
    /// Mid-provisioning, not yet serving.
    Inflight,
    /// Currently serving one or more sessions.
    Busy,
    /// Being retired by the orchestrator.
    Terminating,
}

/// Observed state of a single worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub id: WorkerId,
    pub status: WorkerStatus,
    /// Number of active sessions on this worker.
    pub sessions: u32,
    /// Unix timestamp (seconds) when this worker started.
    pub started_at: u64,
    /// Unix timestamp (seconds) of the last session it served.
    pub last_service_at: u64,
}

impl Worker {
    /// Seconds since this worker last served a session, as of `now`.
    ///
    /// Saturates to zero when `last_service_at` is ahead of the snapshot
    /// clock.
    pub fn idle_secs(&self, now: u64) -> u64 {
        now.saturating_sub(self.last_service_at)
    }
}

// ── Queue ─────────────────────────────────────────────────────────

/// Why a pending request is parked in the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueReason {
    /// All workers are busy; the request is waiting for capacity.
    QueueDueBusy,
    /// Held back for session affinity with a specific worker.
    QueueDueSession,
}

/// A pending request observed in the queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    /// Opaque request identifier assigned by the orchestrator.
    pub request_id: String,
    pub reason: QueueReason,
}

// ── Snapshot ──────────────────────────────────────────────────────

/// Point-in-time snapshot of the pool handed to the policy.
///
/// Ordered worker and queue lists, immutable for the duration of one
/// decision call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factors {
    pub workers: Vec<Worker>,
    pub queue: Vec<QueueEntry>,
}

impl Factors {
    /// Total number of workers currently in the pool.
    pub fn worker_count(&self) -> u32 {
        self.workers.len() as u32
    }

    /// Workers idle and able to accept sessions.
    pub fn free_worker_count(&self) -> u32 {
        self.workers
            .iter()
            .filter(|w| w.status == WorkerStatus::Free)
            .count() as u32
    }

    /// Whether any worker is still mid-provisioning.
    pub fn has_inflight(&self) -> bool {
        self.workers
            .iter()
            .any(|w| w.status == WorkerStatus::Inflight)
    }

    /// Queue entries parked because all workers were busy.
    pub fn busy_queue_len(&self) -> u32 {
        self.queue
            .iter()
            .filter(|q| q.reason == QueueReason::QueueDueBusy)
            .count() as u32
    }
}

// ── Decisions ─────────────────────────────────────────────────────

/// A single scaling action for the orchestrator to apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScaleAction {
    /// Provision `count` additional workers.
    ScaleUp { count: u32 },
    /// Retire the named worker.
    ScaleDown { worker_id: WorkerId },
}

/// Outcome of one policy decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecideResult {
    /// Upper worker bound the policy resolved for this call.
    pub max_workers: u32,
    /// Actions to apply, in order. Empty means no-op.
    pub actions: Vec<ScaleAction>,
}

impl DecideResult {
    pub fn is_noop(&self) -> bool {
        self.actions.is_empty()
    }
}
