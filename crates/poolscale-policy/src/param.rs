//! Tunable parameters — literal values or zero-argument providers.
//!
//! Each tunable is either a fixed number or a provider closure evaluated at
//! decision time, for values owned by an external config system. All five
//! resolve exactly once per decision so a dynamic value cannot change
//! mid-call.

use std::fmt;
use std::sync::Arc;

use poolscale_core::PolicyConfig;

use crate::error::{PolicyError, PolicyResult};

/// Provider closure for a dynamically resolved parameter.
pub type ParamProvider<T> = Arc<dyn Fn() -> anyhow::Result<T> + Send + Sync>;

/// A tunable that is either a fixed literal or resolved at call time.
#[derive(Clone)]
pub enum Param<T> {
    Literal(T),
    Provider(ParamProvider<T>),
}

impl<T: Copy> Param<T> {
    /// Create a provider-backed parameter.
    pub fn provider<F>(f: F) -> Self
    where
        F: Fn() -> anyhow::Result<T> + Send + Sync + 'static,
    {
        Self::Provider(Arc::new(f))
    }

    /// Resolve to a concrete value. A failing provider is fatal.
    fn resolve(&self, name: &'static str) -> PolicyResult<T> {
        match self {
            Self::Literal(v) => Ok(*v),
            Self::Provider(f) => f().map_err(|source| PolicyError::Param { name, source }),
        }
    }
}

impl<T> From<T> for Param<T> {
    fn from(value: T) -> Self {
        Self::Literal(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Param<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(v) => f.debug_tuple("Literal").field(v).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// The five tunables driving the policy.
#[derive(Debug, Clone)]
pub struct PolicyParams {
    pub min_workers: Param<u32>,
    pub max_workers: Param<u32>,
    pub max_queue_size: Param<u32>,
    pub max_idle_secs: Param<u64>,
    pub scale_up_step: Param<u32>,
}

impl PolicyParams {
    /// Resolve all parameters for one decision call.
    ///
    /// Bounds are checked after resolution: `min_workers > max_workers` is
    /// rejected even when both came from providers.
    pub(crate) fn resolve(&self) -> PolicyResult<ResolvedParams> {
        let resolved = ResolvedParams {
            min_workers: self.min_workers.resolve("min_workers")?,
            max_workers: self.max_workers.resolve("max_workers")?,
            max_queue_size: self.max_queue_size.resolve("max_queue_size")?,
            max_idle_secs: self.max_idle_secs.resolve("max_idle_secs")?,
            scale_up_step: self.scale_up_step.resolve("scale_up_step")?,
        };
        if resolved.min_workers > resolved.max_workers {
            return Err(PolicyError::Bounds {
                min: resolved.min_workers,
                max: resolved.max_workers,
            });
        }
        Ok(resolved)
    }
}

impl From<&PolicyConfig> for PolicyParams {
    fn from(config: &PolicyConfig) -> Self {
        Self {
            min_workers: config.min_workers.into(),
            max_workers: config.max_workers.into(),
            max_queue_size: config.max_queue_size.into(),
            max_idle_secs: config.max_idle_secs.into(),
            scale_up_step: config.scale_up_step.into(),
        }
    }
}

impl Default for PolicyParams {
    fn default() -> Self {
        (&PolicyConfig::default()).into()
    }
}

/// Parameter values pinned for the duration of one decision.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResolvedParams {
    pub min_workers: u32,
    pub max_workers: u32,
    pub max_queue_size: u32,
    pub max_idle_secs: u64,
    pub scale_up_step: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_resolve() {
        let params = PolicyParams {
            min_workers: 2.into(),
            max_workers: 8.into(),
            max_queue_size: 4.into(),
            max_idle_secs: 60u64.into(),
            scale_up_step: 2.into(),
        };
        let resolved = params.resolve().unwrap();
        assert_eq!(resolved.min_workers, 2);
        assert_eq!(resolved.max_idle_secs, 60);
    }

    #[test]
    fn provider_evaluated_per_resolve() {
        use std::sync::atomic::{AtomicU32, Ordering};

        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let params = PolicyParams {
            max_workers: Param::provider(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(10)
            }),
            ..PolicyParams::default()
        };

        params.resolve().unwrap();
        params.resolve().unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn failing_provider_names_parameter() {
        let params = PolicyParams {
            max_queue_size: Param::provider(|| anyhow::bail!("backend unreachable")),
            ..PolicyParams::default()
        };
        match params.resolve() {
            Err(PolicyError::Param { name, .. }) => assert_eq!(name, "max_queue_size"),
            other => panic!("expected Param error, got {other:?}"),
        }
    }

    #[test]
    fn inverted_bounds_rejected() {
        let params = PolicyParams {
            min_workers: 5.into(),
            max_workers: 2.into(),
            ..PolicyParams::default()
        };
        match params.resolve() {
            Err(PolicyError::Bounds { min, max }) => {
                assert_eq!(min, 5);
                assert_eq!(max, 2);
            }
            other => panic!("expected Bounds error, got {other:?}"),
        }
    }

    #[test]
    fn debug_hides_provider_body() {
        let p: Param<u32> = Param::provider(|| Ok(1));
        assert_eq!(format!("{p:?}"), "Provider(..)");
        let lit: Param<u32> = 3.into();
        assert_eq!(format!("{lit:?}"), "Literal(3)");
    }
}
