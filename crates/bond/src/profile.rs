use serde::Serialize;

use crate::{
    Derived, Error, SimulationParameters,
    constants::{EV_TO_JOULES, UNIVERSAL_PRESSURE},
    params::validate_drift,
};

/// The derived quantities at one drift value, with no time axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfilePoint {
    pub drift: f64,
    pub current_quantity: f64,
    pub deficit: f64,
    pub required_frequency: f64,
}

/// Applies the derivation formulas across `drifts`, in order.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if the parameters are invalid or any
/// drift is outside `[0, 100]`.
pub fn profile(params: &SimulationParameters, drifts: &[f64]) -> Result<Vec<ProfilePoint>, Error> {
    params.validate()?;
    drifts
        .iter()
        .map(|&drift| -> Result<ProfilePoint, Error> {
            validate_drift("drift", drift)?;
            let Derived {
                current_quantity,
                deficit,
                required_frequency,
            } = Derived::checked(params, 0.0, drift)?;
            Ok(ProfilePoint {
                drift,
                current_quantity,
                deficit,
                required_frequency,
            })
        })
        .collect()
}

/// Returns the overlap void, in m³, that pins a bond of `bond_energy_ev`.
///
/// `ΔV = E / P`, with the energy converted to joules.
#[must_use]
pub fn overlap_void(bond_energy_ev: f64) -> f64 {
    bond_energy_ev * EV_TO_JOULES / UNIVERSAL_PRESSURE
}
