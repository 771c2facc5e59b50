/// A callable model that maps a typed input to a typed output.
///
/// Models must be deterministic. Solvers rely on this to replay a step, and
/// the closed-form and stepped evaluations of the same system can only be
/// compared when both sides are pure functions of their inputs.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Each model defines its own `Error` type for domain-specific failures,
    /// such as a derived quantity leaving the representable range.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// A captured input/output pair from a model call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Creates a new snapshot from input and output values.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use super::*;

    struct Halve;

    impl Model for Halve {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &f64) -> Result<f64, Infallible> {
            Ok(input / 2.0)
        }
    }

    #[test]
    fn snapshot_keeps_input_and_output() {
        let input = 45.0;
        let output = Halve.call(&input).unwrap();

        let snapshot = Snapshot::new(input, output);

        assert_eq!(snapshot, Snapshot { input: 45.0, output: 22.5 });
    }
}
