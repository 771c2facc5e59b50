use serde::Serialize;

use crate::{Error, SimulationParameters, constants::MAX_DRIFT};

/// Quantities derived from a drift value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Derived {
    /// `baseline_quantity * (1 - (drift / 100)^2)`.
    pub current_quantity: f64,

    /// `baseline_quantity - current_quantity`.
    pub deficit: f64,

    /// `deficit / scale_constant`.
    pub required_frequency: f64,
}

impl Derived {
    /// Applies the derivation formulas to `drift`.
    ///
    /// No range checks are made; see [`Derived::checked`].
    #[must_use]
    pub fn from_drift(params: &SimulationParameters, drift: f64) -> Self {
        let fraction = drift / MAX_DRIFT;
        let current_quantity = params.baseline_quantity * (1.0 - fraction * fraction);
        let deficit = params.baseline_quantity - current_quantity;
        Self {
            current_quantity,
            deficit,
            required_frequency: deficit / params.scale_constant,
        }
    }

    /// Applies the derivation formulas and rejects non-finite results.
    ///
    /// `time` is only used to report where the overflow happened.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NumericOverflow`] if the drift or any derived value is
    /// `NaN` or infinite.
    pub fn checked(params: &SimulationParameters, time: f64, drift: f64) -> Result<Self, Error> {
        finite("drift", drift, time)?;
        let derived = Self::from_drift(params, drift);
        finite("current_quantity", derived.current_quantity, time)?;
        finite("deficit", derived.deficit, time)?;
        finite("required_frequency", derived.required_frequency, time)?;
        Ok(derived)
    }
}

fn finite(quantity: &'static str, value: f64, time: f64) -> Result<(), Error> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NumericOverflow {
            quantity,
            value,
            time,
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn reference_tumor_frequency() {
        let params = SimulationParameters::default();

        let derived = Derived::from_drift(&params, 45.0);

        assert_relative_eq!(derived.current_quantity, 0.119_625, max_relative = 1e-12);
        assert_relative_eq!(derived.deficit, 0.030_375, max_relative = 1e-12);
        // 0.030375 eV / h ≈ 7.345 THz
        assert_relative_eq!(
            derived.required_frequency / 1e12,
            7.344_64,
            max_relative = 1e-5
        );
    }

    #[test]
    fn full_drift_leaves_nothing() {
        let params = SimulationParameters::default();

        let derived = Derived::from_drift(&params, 100.0);

        assert_eq!(derived.current_quantity, 0.0);
        assert_eq!(derived.deficit, params.baseline_quantity);
    }

    #[test]
    fn zero_drift_has_no_deficit() {
        let params = SimulationParameters::default();

        let derived = Derived::from_drift(&params, 0.0);

        assert_eq!(derived.current_quantity, params.baseline_quantity);
        assert_eq!(derived.deficit, 0.0);
        assert_eq!(derived.required_frequency, 0.0);
    }

    #[test]
    fn checked_reports_overflowing_frequency() {
        let params = SimulationParameters {
            baseline_quantity: 1e300,
            scale_constant: 1e-300,
            ..SimulationParameters::default()
        };

        let err = Derived::checked(&params, 2.5, 50.0).expect_err("frequency overflows");

        assert!(matches!(
            err,
            Error::NumericOverflow {
                quantity: "required_frequency",
                time,
                ..
            } if time == 2.5
        ));
    }
}
