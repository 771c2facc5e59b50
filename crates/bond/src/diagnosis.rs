use serde::Serialize;

use crate::{Derived, Error, SimulationParameters, params::validate_drift};

/// Condition of a bond at a given drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    /// No drift at all.
    Healthy,

    /// Drifted but still restorable.
    Drifting,

    /// At or past the fracture threshold; no restoration frequency applies.
    Fractured,
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Healthy => "healthy",
            Self::Drifting => "drifting",
            Self::Fractured => "fractured",
        })
    }
}

/// Result of classifying a single drift value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Diagnosis {
    pub drift: f64,
    pub deficit: f64,
    pub condition: Condition,

    /// `None` when the bond is [`Condition::Fractured`].
    pub required_frequency: Option<f64>,
}

/// Classifies `drift` against `fracture_threshold` and derives its deficit.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if the parameters are invalid, if
/// `drift` is outside `[0, 100]`, or if the threshold is not positive.
pub fn diagnose(
    params: &SimulationParameters,
    drift: f64,
    fracture_threshold: f64,
) -> Result<Diagnosis, Error> {
    params.validate()?;
    validate_drift("drift", drift)?;
    crate::error::require_positive("fracture_threshold", fracture_threshold)?;

    let Derived {
        deficit,
        required_frequency,
        ..
    } = Derived::checked(params, 0.0, drift)?;

    let condition = if drift >= fracture_threshold {
        Condition::Fractured
    } else if drift == 0.0 {
        Condition::Healthy
    } else {
        Condition::Drifting
    };

    Ok(Diagnosis {
        drift,
        deficit,
        condition,
        required_frequency: (condition != Condition::Fractured).then_some(required_frequency),
    })
}
