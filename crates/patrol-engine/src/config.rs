//! Patrol configuration, validation, and error types.

use std::error::Error;
use std::fmt;

// ── LoopDetection ──────────────────────────────────────────────────

/// How a run decides that the agent will never leave the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopDetection {
    /// Record the `(position, heading)` at the start of every transition.
    /// The transition rule is deterministic, so a repeated state proves
    /// the run cycles forever.
    #[default]
    RepeatedState,
    /// Report a loop once more than this many transitions have run
    /// without exiting. Coarse, but needs no per-run state.
    StepBudget(u64),
}

impl LoopDetection {
    /// Transition budget used by the reference puzzle solver.
    pub const REFERENCE_STEP_BUDGET: u64 = 3260;
}

// ── PatrolConfig ───────────────────────────────────────────────────

/// Configuration shared by single runs and the loop search.
#[derive(Clone, Debug, Default)]
pub struct PatrolConfig {
    /// Cycle detection strategy. Default: [`LoopDetection::RepeatedState`].
    pub loop_detection: LoopDetection,
    /// Number of loop-search worker threads. `None` = auto-detect
    /// (`available_parallelism`, clamped to `[1, 16]`).
    pub workers: Option<usize>,
}

impl PatrolConfig {
    /// Upper bound on explicitly requested workers.
    pub const MAX_WORKERS: usize = 64;

    /// Validate structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let LoopDetection::StepBudget(0) = self.loop_detection {
            return Err(ConfigError::ZeroStepBudget);
        }
        if self.workers == Some(0) {
            return Err(ConfigError::ZeroWorkers);
        }
        Ok(())
    }

    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, MAX_WORKERS]`.
    pub fn resolved_worker_count(&self) -> usize {
        match self.workers {
            Some(n) => n.clamp(1, Self::MAX_WORKERS),
            None => {
                let cpus = std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(4);
                cpus.clamp(1, 16)
            }
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`PatrolConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `LoopDetection::StepBudget(0)` would report every run as looping.
    ZeroStepBudget,
    /// Zero workers would leave every candidate unprocessed.
    ZeroWorkers,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroStepBudget => write!(f, "step budget must be at least 1"),
            Self::ZeroWorkers => write!(f, "worker count must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_repeated_state() {
        let cfg = PatrolConfig::default();
        assert_eq!(cfg.loop_detection, LoopDetection::RepeatedState);
        assert!(cfg.workers.is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_zero_step_budget_fails() {
        let cfg = PatrolConfig {
            loop_detection: LoopDetection::StepBudget(0),
            ..PatrolConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::ZeroStepBudget) => {}
            other => panic!("expected ZeroStepBudget, got {other:?}"),
        }
    }

    #[test]
    fn validate_zero_workers_fails() {
        let cfg = PatrolConfig {
            workers: Some(0),
            ..PatrolConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::ZeroWorkers) => {}
            other => panic!("expected ZeroWorkers, got {other:?}"),
        }
    }

    #[test]
    fn reference_budget_is_valid() {
        let cfg = PatrolConfig {
            loop_detection: LoopDetection::StepBudget(LoopDetection::REFERENCE_STEP_BUDGET),
            workers: Some(4),
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn resolved_worker_count_clamps_large() {
        let cfg = PatrolConfig {
            workers: Some(200),
            ..PatrolConfig::default()
        };
        assert_eq!(cfg.resolved_worker_count(), PatrolConfig::MAX_WORKERS);
    }

    #[test]
    fn resolved_worker_count_auto() {
        let count = PatrolConfig::default().resolved_worker_count();
        assert!((1..=16).contains(&count), "auto count {count} out of [1,16]");
    }

    #[test]
    fn error_display() {
        assert!(ConfigError::ZeroStepBudget.to_string().contains("step budget"));
        assert!(ConfigError::ZeroWorkers.to_string().contains("worker"));
    }
}
