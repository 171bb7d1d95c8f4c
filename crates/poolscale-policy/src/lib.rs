//! poolscale-policy — worker-pool scaling decisions.
//!
//! Consumes a `Factors` snapshot (workers + queue) from the orchestrator and
//! produces a bounded list of scale actions. The five tunables can be fixed
//! literals or zero-argument providers resolved once per call.
//!
//! # Decision Algorithm
//!
//! ```text
//! if worker_count < min_workers:
//!     ScaleUp(min_workers - worker_count)        // floor catch-up
//!
//! else if no worker is inflight
//!      and busy_queue_len > max_queue_size:      // strictly greater
//!     ScaleUp(min(scale_up_step, max_workers - worker_count))
//!
//! else:
//!     retire every free, session-less worker idle >= max_idle_secs,
//!     scanning newest started_at first, capped so the free pool
//!     stays at or above min_workers
//! ```
//!
//! The branches are mutually exclusive; the first to produce actions wins.
//! Each call is a pure computation over the snapshot: no I/O, no locks, no
//! state carried between calls.

pub mod error;
pub mod param;
pub mod policy;

pub use error::{PolicyError, PolicyResult};
pub use param::{Param, PolicyParams};
pub use policy::{ScalingPolicy, ThresholdPolicy};
