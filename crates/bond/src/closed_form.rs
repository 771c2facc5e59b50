use rayon::prelude::*;
use tracing::debug;

use crate::{Derived, Error, SimulationParameters, TelemetryRecord};

/// Evaluates the analytic drift trajectory at arbitrary times.
///
/// Uses `drift(t) = initial_drift * exp(-decay_rate * t)`, the exact solution
/// of the decay that [`StateStepper`](crate::StateStepper) approximates. Each
/// time is evaluated independently and in parallel; the output order always
/// mirrors the input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosedFormEvaluator;

impl ClosedFormEvaluator {
    /// Returns the analytic drift at `time`.
    #[must_use]
    pub fn drift_at(params: &SimulationParameters, time: f64) -> f64 {
        params.initial_drift * (-params.decay_rate * time).exp()
    }

    /// Evaluates one record per entry of `times`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the parameters are invalid or any
    /// time is negative or non-finite, and [`Error::NumericOverflow`] if a
    /// derived value is not representable.
    pub fn evaluate(
        &self,
        params: &SimulationParameters,
        times: &[f64],
    ) -> Result<Vec<TelemetryRecord>, Error> {
        params.validate()?;
        if let Some(&bad) = times.iter().find(|t| !(t.is_finite() && **t >= 0.0)) {
            return Err(Error::invalid("time", bad, "must be finite and non-negative"));
        }

        debug!(points = times.len(), "evaluating closed-form trajectory");

        times
            .par_iter()
            .map(|&time| {
                let drift = Self::drift_at(params, time);
                Derived::checked(params, time, drift)
                    .map(|derived| TelemetryRecord::new(time, drift, derived))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn preserves_input_order() {
        let params = SimulationParameters::default();

        let records = ClosedFormEvaluator
            .evaluate(&params, &[10.0, 0.0, 30.0])
            .unwrap();

        let times: Vec<f64> = records.iter().map(|r| r.time).collect();
        assert_eq!(times, vec![10.0, 0.0, 30.0]);
        assert_eq!(records[1].drift, 45.0);
        assert_relative_eq!(records[0].drift, 45.0 * (-0.8_f64).exp(), max_relative = 1e-14);
        assert_relative_eq!(records[2].drift, 45.0 * (-2.4_f64).exp(), max_relative = 1e-14);
    }

    #[test]
    fn empty_times_give_empty_output() {
        let records = ClosedFormEvaluator
            .evaluate(&SimulationParameters::default(), &[])
            .unwrap();

        assert!(records.is_empty());
    }

    #[test]
    fn rejects_negative_time() {
        let err = ClosedFormEvaluator
            .evaluate(&SimulationParameters::default(), &[1.0, -2.0])
            .unwrap_err();

        assert!(matches!(err, Error::InvalidParameter { name: "time", value, .. } if value == -2.0));
    }

    #[test]
    fn rejects_invalid_parameters() {
        let params = SimulationParameters {
            scale_constant: 0.0,
            ..SimulationParameters::default()
        };

        assert!(ClosedFormEvaluator.evaluate(&params, &[0.0]).is_err());
    }
}
