/// Fraction of one step forgiven before rounding `duration / dt` up.
///
/// Absorbs the rounding in ratios such as `60.0 / 0.1`, which would otherwise
/// request one step too many. It is a fixed fraction of a step so it never
/// grows into whole steps on long runs.
const STEP_SLACK: f64 = 1e-9;

/// Returns the number of fixed steps of size `dt` needed to cover `duration`.
///
/// This is the smallest `n` with `n * dt >= duration`, so a loop of the form
/// `while t < duration { ...; t += dt }` runs exactly `n` times. A `dt` larger
/// than `duration` yields one step.
///
/// Returns `None` if either argument is non-positive or non-finite, or if the
/// step count does not fit in a `usize`.
#[must_use]
pub fn steps_covering(duration: f64, dt: f64) -> Option<usize> {
    if !(duration.is_finite() && dt.is_finite() && duration > 0.0 && dt > 0.0) {
        return None;
    }

    let ratio = duration / dt;
    let steps = (ratio - STEP_SLACK).ceil();
    if !steps.is_finite() || steps >= usize::MAX as f64 {
        return None;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Some((steps as usize).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_ratio() {
        assert_eq!(steps_covering(60.0, 0.5), Some(120));
        assert_eq!(steps_covering(60.0, 1.0), Some(60));
    }

    #[test]
    fn inexact_decimal_ratio() {
        assert_eq!(steps_covering(60.0, 0.1), Some(600));
        assert_eq!(steps_covering(60.0, 0.001), Some(60_000));
    }

    #[test]
    fn partial_step_rounds_up() {
        assert_eq!(steps_covering(1.0, 0.3), Some(4));
    }

    #[test]
    fn long_runs_keep_every_step() {
        let steps = steps_covering(1e9, 0.1).unwrap();

        assert_eq!(steps, 10_000_000_000);
        #[allow(clippy::cast_precision_loss)]
        let covered = steps as f64 * 0.1;
        assert!(covered >= 1e9);
        assert_eq!(steps_covering(2e9, 1.0), Some(2_000_000_000));
    }

    #[test]
    fn step_larger_than_duration() {
        assert_eq!(steps_covering(1.0, 5.0), Some(1));
    }

    #[test]
    fn rejects_invalid_arguments() {
        assert_eq!(steps_covering(0.0, 0.1), None);
        assert_eq!(steps_covering(60.0, 0.0), None);
        assert_eq!(steps_covering(-1.0, 0.1), None);
        assert_eq!(steps_covering(f64::INFINITY, 0.1), None);
        assert_eq!(steps_covering(60.0, f64::NAN), None);
    }

    #[test]
    fn rejects_unrepresentable_counts() {
        assert_eq!(steps_covering(f64::MAX, f64::MIN_POSITIVE), None);
    }
}
