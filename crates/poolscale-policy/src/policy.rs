//! Threshold scaling policy.
//!
//! Walks a fixed precedence chain over the snapshot: min-workers catch-up,
//! queue-pressure scale-up, idle scale-down, no-op. The first branch to
//! produce actions wins; the engine holds no state between calls.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;

use poolscale_core::{DecideResult, Factors, PolicyConfig, ScaleAction, Worker, WorkerStatus};

use crate::error::PolicyResult;
use crate::param::PolicyParams;

/// Pluggable scaling strategy.
pub trait ScalingPolicy: Send + Sync {
    /// Name of the policy for logging and identification.
    fn name(&self) -> &str;

    /// Evaluate the snapshot as of `now` (unix seconds).
    fn decide_at(&self, factors: &Factors, now: u64) -> PolicyResult<DecideResult>;

    /// Evaluate the snapshot as of the current system clock.
    fn decide(&self, factors: &Factors) -> PolicyResult<DecideResult> {
        self.decide_at(factors, epoch_secs())
    }
}

/// Threshold policy over the five tunables.
///
/// Parameters resolve once per call, so provider-backed tunables are
/// consistent within a decision and fresh across decisions.
#[derive(Debug, Clone)]
pub struct ThresholdPolicy {
    params: PolicyParams,
}

impl ThresholdPolicy {
    pub fn new(params: PolicyParams) -> Self {
        Self { params }
    }

    pub fn from_config(config: &PolicyConfig) -> Self {
        Self::new(config.into())
    }
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self::new(PolicyParams::default())
    }
}

impl ScalingPolicy for ThresholdPolicy {
    fn name(&self) -> &str {
        "threshold"
    }

    fn decide_at(&self, factors: &Factors, now: u64) -> PolicyResult<DecideResult> {
        let p = self.params.resolve()?;
        let worker_count = factors.worker_count();

        // Catch up to the floor before anything else, queue state ignored.
        if worker_count < p.min_workers {
            let deficit = (p.min_workers - worker_count).min(p.max_workers - worker_count);
            debug!(
                worker_count,
                min_workers = p.min_workers,
                deficit,
                "scaling up to minimum"
            );
            return Ok(DecideResult {
                max_workers: p.max_workers,
                actions: vec![ScaleAction::ScaleUp { count: deficit }],
            });
        }

        // A prior scale-up still provisioning suppresses further scale-up.
        if !factors.has_inflight() {
            let busy_queued = factors.busy_queue_len();
            if busy_queued > p.max_queue_size {
                let count = p.scale_up_step.min(p.max_workers.saturating_sub(worker_count));
                if count > 0 {
                    debug!(
                        busy_queued,
                        max_queue_size = p.max_queue_size,
                        count,
                        "scaling up on queue pressure"
                    );
                    return Ok(DecideResult {
                        max_workers: p.max_workers,
                        actions: vec![ScaleAction::ScaleUp { count }],
                    });
                }
            }
        }

        // Scale down. Newest-started workers are scanned first, and the
        // retire count is capped so the free pool stays at or above the
        // floor.
        let mut actions = Vec::new();
        let max_scale_down = factors.free_worker_count().saturating_sub(p.min_workers);
        if max_scale_down > 0 {
            let mut by_start: Vec<&Worker> = factors.workers.iter().collect();
            by_start.sort_by(|a, b| b.started_at.cmp(&a.started_at));

            for worker in by_start {
                if actions.len() as u32 == max_scale_down {
                    break;
                }
                if worker.status == WorkerStatus::Free
                    && worker.sessions == 0
                    && worker.idle_secs(now) >= p.max_idle_secs
                {
                    debug!(
                        worker_id = %worker.id,
                        idle_secs = worker.idle_secs(now),
                        "retiring idle worker"
                    );
                    actions.push(ScaleAction::ScaleDown {
                        worker_id: worker.id.clone(),
                    });
                }
            }
        }

        Ok(DecideResult {
            max_workers: p.max_workers,
            actions,
        })
    }
}

fn epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
