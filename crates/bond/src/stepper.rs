use resonance_solvers::transient::{euler, steps_covering};
use tracing::{debug, trace, warn};

use crate::{
    Derived, DriftModel, DriftProblem, Discretization, Error, SimulationParameters,
    SimulationState, TelemetryRecord, config::Stepping,
};

/// Advances the drift in fixed steps and samples telemetry along the way.
///
/// The run is strictly sequential: each step reads the previous one. Samples
/// are taken on the step nearest each multiple of the sampling interval, and
/// the end-of-run state is always reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct StateStepper {
    policy: Discretization,
}

impl StateStepper {
    #[must_use]
    pub fn new(policy: Discretization) -> Self {
        Self { policy }
    }

    /// Steps from `t = 0` until `total_time` is covered.
    ///
    /// The loop runs `n` steps, where `n` is the smallest count with
    /// `n * dt >= total_time`. A record is taken before stepping at each
    /// sampling instant `k * sample_interval` inside the run, and one final
    /// record is taken after the last step. That record is stamped `n * dt`,
    /// which lies past `total_time` by less than one step when `total_time`
    /// is not a multiple of `dt`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] before any stepping if the
    /// parameters are invalid, if `dt`, `total_time` or `sample_interval` is
    /// not positive, if `sample_interval < dt`, or if the policy cannot
    /// attenuate at this step size. Returns [`Error::NumericOverflow`] if a
    /// derived value leaves the representable range.
    pub fn run(
        &self,
        params: &SimulationParameters,
        dt: f64,
        total_time: f64,
        sample_interval: f64,
    ) -> Result<Vec<TelemetryRecord>, Error> {
        params.validate()?;
        Stepping {
            dt,
            total_time,
            sample_interval,
            policy: self.policy,
        }
        .validate()?;

        let problem = DriftProblem::new(params.decay_rate, dt, self.policy)?;
        let steps = steps_covering(total_time, dt)
            .ok_or_else(|| Error::invalid("total_time", total_time, "too many steps to count"))?;

        let mut schedule = SampleSchedule::new(sample_interval / dt);
        if !schedule.is_whole() {
            warn!(
                sample_interval,
                dt, "sampling interval is not a whole number of steps; sampling nearest steps"
            );
        }
        debug!(
            policy = %self.policy,
            steps,
            steps_per_sample = schedule.steps_per_sample,
            "running state stepper"
        );

        let mut records = Vec::with_capacity(schedule.expected_samples(steps) + 1);
        euler::solve(
            &DriftModel::new(params),
            &problem,
            SimulationState::initial(params),
            dt,
            steps,
            |event: &euler::Event<SimulationState, Derived>| {
                let due = !event.last && schedule.is_due(event.step);
                if due || event.last {
                    let state = event.snapshot.input;
                    let record =
                        TelemetryRecord::new(state.elapsed_time, state.drift, event.snapshot.output);
                    trace!(step = state.step, time = record.time, drift = record.drift, "sampled");
                    records.push(record);
                }
                None
            },
        )?;

        Ok(records)
    }
}

/// Integer sampling schedule: sample `k` lands on step `round(k * ratio)`.
#[derive(Debug)]
struct SampleSchedule {
    steps_per_sample: f64,
    next: u64,
}

impl SampleSchedule {
    fn new(steps_per_sample: f64) -> Self {
        Self {
            steps_per_sample,
            next: 0,
        }
    }

    fn is_whole(&self) -> bool {
        (self.steps_per_sample - self.steps_per_sample.round()).abs()
            <= self.steps_per_sample * 1e-9
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    fn target(&self, sample: u64) -> usize {
        (sample as f64 * self.steps_per_sample).round() as usize
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    fn expected_samples(&self, steps: usize) -> usize {
        (steps as f64 / self.steps_per_sample).ceil() as usize
    }

    /// Returns whether `step` is a sampling step, consuming the sample if so.
    ///
    /// Steps must be presented in increasing order.
    fn is_due(&mut self, step: usize) -> bool {
        if step < self.target(self.next) {
            return false;
        }
        while self.target(self.next) <= step {
            self.next += 1;
        }
        true
    }
}
