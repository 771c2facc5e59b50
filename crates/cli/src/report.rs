//! Read-only rendering of model results as text tables or JSON.

use resonance_bond::{Diagnosis, ProfilePoint, TelemetryRecord};
use serde::Serialize;
use uom::si::{
    f64::Frequency,
    frequency::{hertz, terahertz},
};

/// A stepped sample next to the closed-form value at the same time.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Comparison {
    pub time: f64,
    pub stepped_drift: f64,
    pub exact_drift: f64,
    pub relative_error: f64,
}

impl Comparison {
    pub fn new(stepped: &TelemetryRecord, exact: &TelemetryRecord) -> Self {
        let relative_error = if exact.drift == 0.0 {
            (stepped.drift - exact.drift).abs()
        } else {
            ((stepped.drift - exact.drift) / exact.drift).abs()
        };
        Self {
            time: stepped.time,
            stepped_drift: stepped.drift,
            exact_drift: exact.drift,
            relative_error,
        }
    }
}

fn terahertz_of(hz: f64) -> f64 {
    Frequency::new::<hertz>(hz).get::<terahertz>()
}

/// Header line, a dashed rule of `width`, then one line per row.
fn table<I>(header: String, width: usize, rows: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut out = header;
    out.push('\n');
    out.push_str(&"-".repeat(width));
    out.push('\n');
    for row in rows {
        out.push_str(&row);
        out.push('\n');
    }
    out
}

/// Renders telemetry records, one row per record.
pub fn telemetry_table(records: &[TelemetryRecord]) -> String {
    let header = format!(
        "{:<12} | {:<12} | {:<18} | {:<15} | {:<18}",
        "Time", "Drift (%)", "Current Lock (eV)", "Deficit (eV)", "Target Freq (THz)"
    );
    table(
        header,
        87,
        records.iter().map(|record| {
            format!(
                "{:<12.2} | {:<12.4} | {:<18.6} | {:<15.6} | {:<18.4}",
                record.time,
                record.drift,
                record.current_quantity,
                record.deficit,
                terahertz_of(record.required_frequency)
            )
        }),
    )
}

/// Renders stepped-vs-exact comparisons.
pub fn comparison_table(rows: &[Comparison]) -> String {
    let header = format!(
        "{:<12} | {:<16} | {:<16} | {:<14}",
        "Time", "Stepped (%)", "Closed form (%)", "Rel. error"
    );
    table(
        header,
        66,
        rows.iter().map(|row| {
            format!(
                "{:<12.2} | {:<16.6} | {:<16.6} | {:<14.3e}",
                row.time, row.stepped_drift, row.exact_drift, row.relative_error
            )
        }),
    )
}

/// Renders a drift profile, preceded by the baseline overlap void.
pub fn profile_table(points: &[ProfilePoint], overlap_void: f64) -> String {
    let header = format!(
        "Baseline overlap void: {overlap_void:.4e} m^3\n{:<12} | {:<18} | {:<15} | {:<18}",
        "Drift (%)", "Current Lock (eV)", "Deficit (eV)", "Target Freq (THz)"
    );
    table(
        header,
        72,
        points.iter().map(|point| {
            format!(
                "{:<12.2} | {:<18.6} | {:<15.6} | {:<18.4}",
                point.drift,
                point.current_quantity,
                point.deficit,
                terahertz_of(point.required_frequency)
            )
        }),
    )
}

/// Renders diagnoses; fractured bonds show no frequency.
pub fn diagnosis_table(rows: &[Diagnosis]) -> String {
    let header = format!(
        "{:<12} | {:<10} | {:<15} | {}",
        "Status", "Drift (%)", "Deficit (eV)", "Restoration Wave (THz)"
    );
    table(
        header,
        70,
        rows.iter().map(|row| {
            let frequency = match row.required_frequency {
                Some(hz) => format!("{:.3} THz", terahertz_of(hz)),
                None => "n/a (fractured)".to_owned(),
            };
            format!(
                "{:<12} | {:<10} | {:<15.4} | {}",
                row.condition.to_string(),
                row.drift,
                row.deficit,
                frequency
            )
        }),
    )
}

/// Serializes any result set as pretty JSON.
pub fn json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use resonance_bond::{
        ClosedFormEvaluator, SimulationParameters, StateStepper, diagnose, overlap_void, profile,
    };

    use super::*;

    #[test]
    fn telemetry_rows_follow_records() {
        let records = StateStepper::default()
            .run(&SimulationParameters::default(), 0.1, 60.0, 15.0)
            .unwrap();

        let table = telemetry_table(&records);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 2 + records.len());
        assert!(lines[2].starts_with("0.00 "));
        // 45% drift needs about 7.3446 THz.
        assert!(lines[2].contains("7.3446"));
    }

    #[test]
    fn empty_tables_keep_header_and_rule() {
        let table = comparison_table(&[]);

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Time"));
        assert_eq!(lines[1], "-".repeat(66));
    }

    #[test]
    fn terahertz_conversion() {
        assert!((terahertz_of(7.5e12) - 7.5).abs() < 1e-12);
    }

    #[test]
    fn fractured_rows_have_no_frequency() {
        let params = SimulationParameters::default();
        let rows = [
            diagnose(&params, 45.0, 80.0).unwrap(),
            diagnose(&params, 90.0, 80.0).unwrap(),
        ];

        let table = diagnosis_table(&rows);

        assert!(table.contains("drifting"));
        assert!(table.contains("THz\n"));
        assert!(table.contains("n/a (fractured)"));
    }

    #[test]
    fn comparison_error_is_relative() {
        let params = SimulationParameters::default();
        let exact = ClosedFormEvaluator.evaluate(&params, &[10.0]).unwrap()[0];
        let stepped = TelemetryRecord {
            drift: exact.drift * 1.01,
            ..exact
        };

        let row = Comparison::new(&stepped, &exact);

        assert!((row.relative_error - 0.01).abs() < 1e-12);
    }

    #[test]
    fn profile_table_has_void_header() {
        let params = SimulationParameters::default();
        let points = profile(&params, &[0.0, 50.0, 100.0]).unwrap();

        let table = profile_table(&points, overlap_void(params.baseline_quantity));

        assert!(table.starts_with("Baseline overlap void: 1.1666e-54 m^3\n"));
        assert_eq!(table.lines().count(), 3 + points.len());
    }

    #[test]
    fn json_uses_field_names() {
        let records = ClosedFormEvaluator
            .evaluate(&SimulationParameters::default(), &[0.0])
            .unwrap();

        let text = json(&records).unwrap();

        for field in [
            "time",
            "drift",
            "current_quantity",
            "deficit",
            "required_frequency",
        ] {
            assert!(text.contains(&format!("\"{field}\"")));
        }
    }
}
