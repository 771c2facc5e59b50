//! Bond drift restoration model.
//!
//! A scalar drift (percent misalignment of a bond) decays toward zero under a
//! proportional restoring process. Two derived quantities follow from the
//! drift at every instant:
//!
//! ```text
//! current_quantity   = baseline_quantity * (1 - (drift / 100)^2)
//! deficit            = baseline_quantity - current_quantity
//! required_frequency = deficit / scale_constant
//! ```
//!
//! The trajectory can be produced two ways, which are expected to agree as the
//! step size shrinks:
//!
//! - [`StateStepper`]: steps the drift with a [`Discretization`] policy on the
//!   forward Euler solver and samples [`TelemetryRecord`]s at a fixed cadence
//! - [`ClosedFormEvaluator`]: evaluates `initial_drift * exp(-decay_rate * t)`
//!   at arbitrary times, in parallel
//!
//! Single-shot helpers cover the rest: [`profile`] sweeps the formulas over a
//! drift range, [`diagnose`] classifies a drift, and [`linspace`] builds evenly
//! spaced grids.

mod closed_form;
mod diagnosis;
mod discretization;
mod error;
mod formulas;
mod grid;
mod model;
mod params;
mod profile;
mod record;
mod stepper;

pub mod config;
pub mod constants;

pub use closed_form::ClosedFormEvaluator;
pub use diagnosis::{Condition, Diagnosis, diagnose};
pub use discretization::Discretization;
pub use error::Error;
pub use formulas::Derived;
pub use grid::linspace;
pub use model::{DriftModel, DriftProblem, SimulationState};
pub use params::SimulationParameters;
pub use profile::{ProfilePoint, overlap_void, profile};
pub use record::TelemetryRecord;
pub use stepper::StateStepper;
