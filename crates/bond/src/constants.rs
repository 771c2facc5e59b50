//! Reference constants for the bond drift model.
//!
//! Energies are in electronvolts and time in minutes, so frequencies derived
//! with [`PLANCK_EV_S`] come out in hertz.

/// Baseline bond energy of a healthy G-C hydrogen bond, in eV.
pub const BASELINE_BOND_ENERGY_EV: f64 = 0.15;

/// Planck's constant in eV·s, used as the deficit-to-frequency scale.
pub const PLANCK_EV_S: f64 = 4.135_667_696e-15;

/// Fraction of remaining drift removed per minute.
pub const DEFAULT_DECAY_RATE: f64 = 0.08;

/// Starting drift of the reference run, in percent.
pub const DEFAULT_INITIAL_DRIFT: f64 = 45.0;

/// Joules per electronvolt.
pub const EV_TO_JOULES: f64 = 1.602_18e-19;

/// Background pressure used to turn a bond energy into an overlap void, in Pa.
pub const UNIVERSAL_PRESSURE: f64 = 2.06e34;

/// Drift, in percent, at or beyond which a bond is treated as fractured.
pub const DEFAULT_FRACTURE_THRESHOLD: f64 = 80.0;

/// Largest meaningful drift, in percent.
pub const MAX_DRIFT: f64 = 100.0;
