use serde::Serialize;

use crate::Derived;

/// One time-stamped snapshot of the drift and everything derived from it.
///
/// A run's records are ordered by `time`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TelemetryRecord {
    pub time: f64,
    pub drift: f64,
    pub current_quantity: f64,
    pub deficit: f64,
    pub required_frequency: f64,
}

impl TelemetryRecord {
    /// Creates a record from a drift and its derived quantities.
    #[must_use]
    pub fn new(time: f64, drift: f64, derived: Derived) -> Self {
        let Derived {
            current_quantity,
            deficit,
            required_frequency,
        } = derived;
        Self {
            time,
            drift,
            current_quantity,
            deficit,
            required_frequency,
        }
    }

    /// Returns the derived quantities of this record.
    #[must_use]
    pub fn derived(&self) -> Derived {
        Derived {
            current_quantity: self.current_quantity,
            deficit: self.deficit,
            required_frequency: self.required_frequency,
        }
    }
}
