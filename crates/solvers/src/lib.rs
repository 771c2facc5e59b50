//! Time-stepping solvers for Resonance models.
//!
//! - [`transient::euler`]: explicit forward Euler driven through an observer
//! - [`transient::steps_covering`]: step count for a duration

pub mod transient;
