//! Fixed-step forward Euler.
//!
//! ```text
//! state_{n+1} = state_n + derivative_n * dt
//! ```
//!
//! Runs are strictly sequential and keep only the current snapshot. Anything
//! a caller wants from the intermediate steps (a telemetry series, a running
//! maximum) is collected by the observer as events go by, so memory stays
//! flat however fine the step.
//!
//! # Example
//!
//! ```ignore
//! use resonance_solvers::transient::{euler, steps_covering};
//!
//! let steps = steps_covering(60.0, 0.1).expect("valid duration and step");
//! let mut series = Vec::new();
//! let solution = euler::solve(&model, &problem, initial, 0.1, steps, |event: &euler::Event<_, _>| {
//!     series.push(event.snapshot.input.drift);
//!     None
//! })?;
//! ```

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use resonance_core::{Model, Observer, OdeProblem, Snapshot, StepIntegrable};
use tracing::debug;

/// Runs `steps` forward Euler steps of size `dt` from `initial`.
///
/// The observer sees step 0 (the initial snapshot) and then every accepted
/// step, each exactly once and in order. Returning [`Action::StopEarly`]
/// ends the run at the observed step.
///
/// # Errors
///
/// Returns [`Error::Model`] or [`Error::Problem`] with the boxed source as
/// soon as either fails. Steps already observed are not rolled back.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    initial: M::Input,
    dt: P::Delta,
    steps: usize,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
    Obs: Observer<Event<M::Input, M::Output>, Action>,
{
    debug!(steps, "starting forward euler run");

    let output = model.call(&initial).map_err(Error::model)?;
    let mut current = Snapshot::new(initial, output);
    let mut step = 0;

    loop {
        let event = Event {
            step,
            last: step == steps,
            snapshot: current,
        };
        let action = observer.observe(&event);
        current = event.snapshot;

        if matches!(action, Some(Action::StopEarly)) {
            debug!(step, "observer stopped the run");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                steps: step,
                end: current,
            });
        }
        if step == steps {
            break;
        }

        current = advance(model, problem, &current, &dt)?;
        step += 1;
    }

    debug!(steps, "forward euler run complete");
    Ok(Solution {
        status: Status::Complete,
        steps,
        end: current,
    })
}

/// Runs the solver with the no-op observer and returns only the end state.
///
/// # Errors
///
/// As [`solve`].
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    initial: M::Input,
    dt: P::Delta,
    steps: usize,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
{
    solve(model, problem, initial, dt, steps, ())
}

fn advance<M, P>(
    model: &M,
    problem: &P,
    current: &Snapshot<M::Input, M::Output>,
    dt: &P::Delta,
) -> Result<Snapshot<M::Input, M::Output>, Error>
where
    M: Model,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
{
    let state = problem.state(&current.input).map_err(Error::problem)?;
    let derivative = problem
        .derivative(&current.input, &current.output)
        .map_err(Error::problem)?;
    let stepped = state.step(derivative, dt.clone());

    let input = problem
        .build_input(&current.input, &stepped, dt)
        .map_err(Error::problem)?;
    let output = model.call(&input).map_err(Error::model)?;
    Ok(Snapshot::new(input, output))
}
