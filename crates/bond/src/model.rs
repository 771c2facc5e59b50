use resonance_core::{DerivativeOf, Model, OdeProblem};

use crate::{Derived, Discretization, Error, SimulationParameters};

/// State of a stepped run, owned by the solver while the run is in progress.
///
/// Time is derived from the integer step counter, never accumulated, so
/// `elapsed_time` is always `step * dt` rounded once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState {
    pub step: usize,
    pub elapsed_time: f64,
    pub drift: f64,
}

impl SimulationState {
    /// The state at `t = 0`.
    #[must_use]
    pub fn initial(params: &SimulationParameters) -> Self {
        Self {
            step: 0,
            elapsed_time: 0.0,
            drift: params.initial_drift,
        }
    }
}

/// Evaluates the derived quantities for a simulation state.
#[derive(Debug, Clone, Copy)]
pub struct DriftModel<'a> {
    params: &'a SimulationParameters,
}

impl<'a> DriftModel<'a> {
    #[must_use]
    pub fn new(params: &'a SimulationParameters) -> Self {
        Self { params }
    }
}

impl Model for DriftModel<'_> {
    type Input = SimulationState;
    type Output = Derived;
    type Error = Error;

    fn call(&self, input: &SimulationState) -> Result<Derived, Error> {
        Derived::checked(self.params, input.elapsed_time, input.drift)
    }
}

/// Exposes the drift as a steppable state under a [`Discretization`].
#[derive(Debug, Clone, Copy)]
pub struct DriftProblem {
    decay_rate: f64,
    dt: f64,
    policy: Discretization,
}

impl DriftProblem {
    /// Creates a problem for fixed steps of size `dt`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `dt` or the decay rate is not
    /// positive, or if the policy cannot attenuate with these values.
    pub fn new(decay_rate: f64, dt: f64, policy: Discretization) -> Result<Self, Error> {
        crate::error::require_positive("decay_rate", decay_rate)?;
        crate::error::require_positive("dt", dt)?;
        policy.validate(decay_rate, dt)?;
        Ok(Self {
            decay_rate,
            dt,
            policy,
        })
    }
}

impl OdeProblem for DriftProblem {
    type Input = SimulationState;
    type Output = Derived;
    type Delta = f64;
    type State = f64;
    type Error = Error;

    fn state(&self, input: &SimulationState) -> Result<f64, Error> {
        Ok(input.drift)
    }

    fn derivative(
        &self,
        input: &SimulationState,
        _output: &Derived,
    ) -> Result<DerivativeOf<f64, f64>, Error> {
        Ok(self
            .policy
            .rate(input.drift, self.decay_rate, self.dt, input.step))
    }

    fn build_input(
        &self,
        base: &SimulationState,
        state: &f64,
        _delta: &f64,
    ) -> Result<SimulationState, Error> {
        let step = base.step + 1;
        #[allow(clippy::cast_precision_loss)]
        let elapsed_time = step as f64 * self.dt;
        Ok(SimulationState {
            step,
            elapsed_time,
            drift: *state,
        })
    }
}
