//! Loop search performance counters.

/// Timing and volume metrics collected during one [`LoopSearch`] run.
///
/// All durations are in microseconds.
///
/// [`LoopSearch`]: crate::search::LoopSearch
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchMetrics {
    /// Wall-clock time for the entire search, in microseconds.
    pub total_us: u64,
    /// Time spent on the unmodified baseline run, in microseconds.
    pub baseline_us: u64,
    /// Distinct candidate cells tried.
    pub candidates: usize,
    /// Candidates whose run looped.
    pub looped: usize,
    /// Candidates whose run exited.
    pub exited: usize,
    /// Worker threads that ran trials.
    pub workers: usize,
    /// Transitions performed across all candidate runs.
    pub trial_steps: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = SearchMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.baseline_us, 0);
        assert_eq!(m.candidates, 0);
        assert_eq!(m.looped, 0);
        assert_eq!(m.exited, 0);
        assert_eq!(m.workers, 0);
        assert_eq!(m.trial_steps, 0);
    }
}
