/// State that a solver can move along its derivative.
///
/// `Delta` is what the derivative is taken with respect to, usually elapsed
/// time as `f64`. A state and its rate may be different types, so a percent
/// can step by a percent-per-minute.
pub trait StepIntegrable<Delta> {
    type Derivative;

    /// The state after moving `delta` along `derivative`.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// The rate type paired with state `T`.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

impl StepIntegrable<f64> for f64 {
    type Derivative = f64;

    fn step(&self, derivative: f64, delta: f64) -> Self {
        self + derivative * delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Percent(f64);
    struct PercentPerMinute(f64);

    impl StepIntegrable<f64> for Percent {
        type Derivative = PercentPerMinute;

        fn step(&self, derivative: PercentPerMinute, minutes: f64) -> Self {
            Percent(self.0 + derivative.0 * minutes)
        }
    }

    #[test]
    fn state_and_rate_can_differ() {
        let next = Percent(45.0).step(PercentPerMinute(-4.0), 0.5);

        assert_eq!(next, Percent(43.0));
    }

    #[test]
    fn plain_f64_steps() {
        assert_eq!(10.0_f64.step(-2.0, 0.25), 9.5);
    }

    #[test]
    fn zero_delta_is_a_no_op() {
        assert_eq!(7.0_f64.step(1e9, 0.0), 7.0);
    }
}
