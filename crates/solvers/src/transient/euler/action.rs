/// What an observer can ask the Euler solver to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// End the run at the observed step.
    StopEarly,
}
