use std::error::Error as StdError;

use resonance_solvers::transient::euler;
use thiserror::Error;

/// Errors produced by the bond drift model.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("numeric overflow: {quantity} became {value} at t = {time}")]
    NumericOverflow {
        quantity: &'static str,
        value: f64,
        time: f64,
    },

    #[error("solver failed")]
    Solver(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

/// Unwraps model and problem failures so domain errors reach the caller as-is.
impl From<euler::Error> for Error {
    fn from(err: euler::Error) -> Self {
        match err.into_source().downcast::<Error>() {
            Ok(err) => *err,
            Err(other) => Self::Solver(other),
        }
    }
}

/// Fails with [`Error::InvalidParameter`] unless `value` is finite and positive.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<(), Error> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid(name, value, "must be finite and positive"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("unrelated")]
    struct Unrelated;

    #[test]
    fn solver_errors_unwrap_domain_errors() {
        let overflow = Error::NumericOverflow {
            quantity: "deficit",
            value: f64::INFINITY,
            time: 3.0,
        };
        let err: Error = euler::Error::Model(Box::new(overflow)).into();

        assert!(matches!(
            err,
            Error::NumericOverflow {
                quantity: "deficit",
                ..
            }
        ));
    }

    #[test]
    fn foreign_solver_errors_are_wrapped() {
        let err: Error = euler::Error::Problem(Box::new(Unrelated)).into();

        assert!(matches!(err, Error::Solver(_)));
    }

    #[test]
    fn require_positive_rejects_zero_negative_and_nan() {
        assert!(require_positive("dt", 0.1).is_ok());
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                require_positive("dt", bad),
                Err(Error::InvalidParameter { name: "dt", .. })
            ));
        }
    }
}
