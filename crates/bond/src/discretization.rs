use serde::{Deserialize, Serialize};

use crate::Error;

/// Slack added to `step * dt` before flooring to a whole time unit.
const UNIT_SLACK: f64 = 1e-9;

/// How the drift recurrence is discretized.
///
/// Both policies approximate `d(drift)/dt = -decay_rate * drift`. They
/// coincide at `dt = 1` and diverge for other step sizes; only
/// [`ExplicitEuler`](Self::ExplicitEuler) converges to the closed form as
/// `dt -> 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Discretization {
    /// `drift -= decay_rate * drift * dt` on every step.
    #[default]
    ExplicitEuler,

    /// `drift -= decay_rate * drift` once per whole unit of elapsed time.
    ///
    /// Steps that do not cross a unit boundary leave the drift unchanged; a
    /// step spanning several boundaries applies one decrement per boundary.
    WholeUnitDecrement,
}

impl Discretization {
    /// Checks that each decrement attenuates the drift by a factor in `(0, 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if a single decrement would remove
    /// all of the drift or more.
    pub fn validate(self, decay_rate: f64, dt: f64) -> Result<(), Error> {
        match self {
            Self::ExplicitEuler if decay_rate * dt >= 1.0 => Err(Error::invalid(
                "dt",
                dt,
                "decay_rate * dt must be below 1 for explicit euler",
            )),
            Self::WholeUnitDecrement if decay_rate >= 1.0 => Err(Error::invalid(
                "decay_rate",
                decay_rate,
                "must be below 1 for whole-unit decrements",
            )),
            _ => Ok(()),
        }
    }

    /// Returns the rate that carries `drift` across step `step -> step + 1`.
    ///
    /// For explicit Euler this is the true derivative. For whole-unit
    /// decrements it is the average rate of the discrete map over the step,
    /// so that `drift + rate * dt` lands on the decremented value.
    #[must_use]
    pub fn rate(self, drift: f64, decay_rate: f64, dt: f64, step: usize) -> f64 {
        match self {
            Self::ExplicitEuler => -decay_rate * drift,
            Self::WholeUnitDecrement => {
                let crossings = unit_index(step + 1, dt) - unit_index(step, dt);
                if crossings == 0 {
                    return 0.0;
                }
                let mut next = drift;
                for _ in 0..crossings {
                    next -= decay_rate * next;
                }
                (next - drift) / dt
            }
        }
    }
}

impl std::fmt::Display for Discretization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::ExplicitEuler => "explicit-euler",
            Self::WholeUnitDecrement => "whole-unit-decrement",
        })
    }
}

/// Index of the whole time unit that `step * dt` falls in.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn unit_index(step: usize, dt: f64) -> u64 {
    (step as f64 * dt + UNIT_SLACK).floor() as u64
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn advance(policy: Discretization, drift: f64, dt: f64, steps: usize) -> f64 {
        (0..steps).fold(drift, |d, step| d + policy.rate(d, 0.08, dt, step) * dt)
    }

    #[test]
    fn euler_rate_is_the_derivative() {
        let rate = Discretization::ExplicitEuler.rate(45.0, 0.08, 0.1, 7);

        assert_relative_eq!(rate, -3.6, max_relative = 1e-15);
    }

    #[test]
    fn policies_agree_at_unit_steps() {
        let euler = advance(Discretization::ExplicitEuler, 45.0, 1.0, 5);
        let unit = advance(Discretization::WholeUnitDecrement, 45.0, 1.0, 5);

        assert_relative_eq!(euler, unit, max_relative = 1e-14);
        assert_relative_eq!(unit, 45.0 * 0.92_f64.powi(5), max_relative = 1e-14);
    }

    #[test]
    fn whole_unit_holds_between_boundaries() {
        let policy = Discretization::WholeUnitDecrement;

        // Steps 0..9 stay inside the first unit; step 9 -> 10 crosses t = 1.
        for step in 0..9 {
            assert_eq!(policy.rate(45.0, 0.08, 0.1, step), 0.0);
        }
        assert!(policy.rate(45.0, 0.08, 0.1, 9) < 0.0);

        let after_one_unit = advance(policy, 45.0, 0.1, 10);
        assert_relative_eq!(after_one_unit, 45.0 * 0.92, max_relative = 1e-12);
    }

    #[test]
    fn whole_unit_applies_every_crossed_boundary() {
        let after = advance(Discretization::WholeUnitDecrement, 45.0, 5.0, 2);

        assert_relative_eq!(after, 45.0 * 0.92_f64.powi(10), max_relative = 1e-12);
    }

    #[test]
    fn validate_rejects_non_attenuating_steps() {
        assert!(Discretization::ExplicitEuler.validate(0.08, 0.1).is_ok());
        assert!(Discretization::ExplicitEuler.validate(0.5, 2.0).is_err());
        assert!(Discretization::WholeUnitDecrement.validate(0.08, 30.0).is_ok());
        assert!(Discretization::WholeUnitDecrement.validate(1.0, 0.1).is_err());
    }

    #[test]
    fn parses_kebab_case_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: Discretization,
        }

        let parsed: Wrapper = toml::from_str(r#"policy = "whole-unit-decrement""#).unwrap();

        assert_eq!(parsed.policy, Discretization::WholeUnitDecrement);
        assert_eq!(parsed.policy.to_string(), "whole-unit-decrement");
    }
}
