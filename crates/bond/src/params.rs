use serde::{Deserialize, Serialize};

use crate::{
    Error,
    constants::{
        BASELINE_BOND_ENERGY_EV, DEFAULT_DECAY_RATE, DEFAULT_INITIAL_DRIFT, MAX_DRIFT, PLANCK_EV_S,
    },
    error::require_positive,
};

/// Physical parameters shared by every evaluation of one run.
///
/// Built once and never mutated. The default is the reference run: a 0.15 eV
/// bond at 45% drift, restored at 8% per minute, with Planck's constant in
/// eV·s as the scale so frequencies are in hertz.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationParameters {
    /// Value of the derived quantity at zero drift.
    pub baseline_quantity: f64,

    /// Converts a deficit into a frequency.
    pub scale_constant: f64,

    /// Fraction of remaining drift removed per unit time.
    pub decay_rate: f64,

    /// Drift at `t = 0`, in percent.
    pub initial_drift: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            baseline_quantity: BASELINE_BOND_ENERGY_EV,
            scale_constant: PLANCK_EV_S,
            decay_rate: DEFAULT_DECAY_RATE,
            initial_drift: DEFAULT_INITIAL_DRIFT,
        }
    }
}

impl SimulationParameters {
    /// Returns a copy starting from a different drift.
    #[must_use]
    pub fn with_initial_drift(self, initial_drift: f64) -> Self {
        Self {
            initial_drift,
            ..self
        }
    }

    /// Checks that every parameter is in range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the baseline, scale, or decay
    /// rate is not finite and positive, or if the initial drift is outside
    /// `[0, 100]`.
    pub fn validate(&self) -> Result<(), Error> {
        require_positive("baseline_quantity", self.baseline_quantity)?;
        require_positive("scale_constant", self.scale_constant)?;
        require_positive("decay_rate", self.decay_rate)?;
        validate_drift("initial_drift", self.initial_drift)
    }
}

/// Fails unless `drift` is a percentage in `[0, 100]`.
pub(crate) fn validate_drift(name: &'static str, drift: f64) -> Result<(), Error> {
    if drift.is_nan() || drift < 0.0 {
        return Err(Error::invalid(name, drift, "must be non-negative"));
    }
    if drift > MAX_DRIFT {
        return Err(Error::invalid(name, drift, "must not exceed 100 percent"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        SimulationParameters::default()
            .validate()
            .expect("defaults should validate");
    }

    #[test]
    fn rejects_non_positive_rates_and_scales() {
        let base = SimulationParameters::default();
        let cases = [
            (
                SimulationParameters {
                    decay_rate: 0.0,
                    ..base
                },
                "decay_rate",
            ),
            (
                SimulationParameters {
                    scale_constant: -1.0,
                    ..base
                },
                "scale_constant",
            ),
            (
                SimulationParameters {
                    baseline_quantity: f64::NAN,
                    ..base
                },
                "baseline_quantity",
            ),
        ];

        for (params, expected) in cases {
            match params.validate() {
                Err(Error::InvalidParameter { name, .. }) => assert_eq!(name, expected),
                other => panic!("expected InvalidParameter for {expected}, got {other:?}"),
            }
        }
    }

    #[test]
    fn drift_must_be_a_percentage() {
        let base = SimulationParameters::default();

        assert!(base.with_initial_drift(0.0).validate().is_ok());
        assert!(base.with_initial_drift(100.0).validate().is_ok());
        assert!(base.with_initial_drift(-0.5).validate().is_err());
        assert!(base.with_initial_drift(100.5).validate().is_err());
    }
}
