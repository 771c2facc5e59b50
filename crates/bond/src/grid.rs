/// Returns `points` evenly spaced values from `start` to `end`, inclusive.
///
/// The last value is exactly `end`. Zero points yields an empty grid and one
/// point yields `[start]`.
#[must_use]
pub fn linspace(start: f64, end: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            #[allow(clippy::cast_precision_loss)]
            let spacing = (end - start) / (points - 1) as f64;
            (0..points)
                .map(|i| {
                    if i == points - 1 {
                        end
                    } else {
                        #[allow(clippy::cast_precision_loss)]
                        let offset = i as f64 * spacing;
                        start + offset
                    }
                })
                .collect()
        }
    }
}
