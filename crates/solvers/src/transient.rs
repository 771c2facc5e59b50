//! Solvers for transient (time-stepped) problems.
//!
//! An [`OdeProblem`] extracts a steppable state from model input and supplies
//! its derivative. Solvers in this module advance that state in fixed steps.
//!
//! [`OdeProblem`]: resonance_core::OdeProblem

mod step_count;

pub mod euler;

pub use step_count::steps_covering;
