use resonance_core::Snapshot;

/// One observed step of an Euler run.
#[derive(Debug, Clone)]
pub struct Event<I, O> {
    /// Steps taken so far; 0 is the initial state.
    pub step: usize,

    /// Set only on the event for the final requested step.
    pub last: bool,

    pub snapshot: Snapshot<I, O>,
}
