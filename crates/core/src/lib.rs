//! Shared vocabulary for Resonance models and solvers.
//!
//! A [`Model`] turns an input into an output and nothing else. Solvers never
//! call into domain code directly; they go through an [`OdeProblem`] that
//! says what is being stepped and how fast, and they report progress to an
//! [`Observer`] as [`Snapshot`]s of input and output.

mod model;
mod observer;
mod problems;
mod step;

pub use model::{Model, Snapshot};
pub use observer::Observer;
pub use problems::OdeProblem;
pub use step::{DerivativeOf, StepIntegrable};
