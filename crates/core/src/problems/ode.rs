use crate::{DerivativeOf, StepIntegrable};

/// Connects a [`Model`](crate::Model) to a fixed-step solver.
///
/// The model only maps inputs to outputs. The problem says which part of the
/// input is the evolving state, how fast it changes given the current
/// snapshot, and how to rebuild an input around a stepped state (advancing
/// clocks or counters along the way).
///
/// A discrete update rule is expressed as the rate that carries the state to
/// the rule's next value over one step, so `state + rate * delta` lands on it
/// exactly.
pub trait OdeProblem {
    type Input;
    type Output;
    type Delta;
    type State: StepIntegrable<Self::Delta>;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Reads the evolving state out of a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input holds no usable state.
    fn state(&self, input: &Self::Input) -> Result<Self::State, Self::Error>;

    /// Rate of change of the state at the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if no rate can be given for this snapshot.
    fn derivative(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<DerivativeOf<Self::State, Self::Delta>, Self::Error>;

    /// Builds the input for the next step around the stepped `state`.
    ///
    /// `base` is the input the step started from.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if `state` cannot form a valid input.
    fn build_input(
        &self,
        base: &Self::Input,
        state: &Self::State,
        delta: &Self::Delta,
    ) -> Result<Self::Input, Self::Error>;
}
