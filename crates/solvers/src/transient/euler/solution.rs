use resonance_core::Snapshot;

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Complete,
    StoppedByObserver,
}

/// Outcome of [`solve`](super::solve): how it ended and where.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    pub status: Status,

    /// Integration steps taken before the run ended.
    pub steps: usize,

    /// Snapshot at the step the run ended on.
    pub end: Snapshot<I, O>,
}
