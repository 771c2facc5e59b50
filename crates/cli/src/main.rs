mod cli;
mod logging;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use resonance_bond::{
    ClosedFormEvaluator, Discretization, config::RunConfig, diagnose, linspace, overlap_void,
    profile,
};
use serde::Serialize;
use tracing::info;

use crate::{
    cli::{Cli, Command},
    report::Comparison,
};

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => RunConfig::from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => RunConfig::default(),
    };

    let output = match &cli.command {
        Command::Simulate {
            parameters,
            stepping,
        } => {
            parameters.apply(&mut config);
            stepping.apply(&mut config);
            config.validate()?;
            info!(policy = %config.stepping.policy, dt = config.stepping.dt, "simulating");

            let records = config.run_stepped()?;
            render(cli.json, &records, report::telemetry_table)?
        }

        Command::Log {
            parameters,
            total_time,
            sample_interval,
        } => {
            parameters.apply(&mut config);
            config.stepping.dt = 1.0;
            config.stepping.total_time = *total_time;
            config.stepping.sample_interval = *sample_interval;
            config.stepping.policy = Discretization::WholeUnitDecrement;
            config.validate()?;
            info!(total_time, sample_interval, "writing restoration log");

            let records = config.run_stepped()?;
            render(cli.json, &records, report::telemetry_table)?
        }

        Command::Analytic {
            parameters,
            times,
            points,
        } => {
            parameters.apply(&mut config);
            let times = if times.is_empty() {
                linspace(0.0, config.stepping.total_time, *points)
            } else {
                times.clone()
            };
            info!(points = times.len(), "evaluating closed form");

            let records = ClosedFormEvaluator.evaluate(&config.parameters, &times)?;
            render(cli.json, &records, report::telemetry_table)?
        }

        Command::Compare {
            parameters,
            stepping,
        } => {
            parameters.apply(&mut config);
            stepping.apply(&mut config);
            config.validate()?;

            let stepped = config.run_stepped()?;
            let times: Vec<f64> = stepped.iter().map(|record| record.time).collect();
            let exact = ClosedFormEvaluator.evaluate(&config.parameters, &times)?;
            let rows: Vec<Comparison> = stepped
                .iter()
                .zip(&exact)
                .map(|(stepped, exact)| Comparison::new(stepped, exact))
                .collect();
            if let Some(worst) = rows.iter().map(|row| row.relative_error).reduce(f64::max) {
                info!(policy = %config.stepping.policy, worst, "compared against closed form");
            }
            render(cli.json, &rows, report::comparison_table)?
        }

        Command::Profile {
            parameters,
            from,
            to,
            points,
        } => {
            parameters.apply(&mut config);
            let drifts = linspace(*from, *to, *points);

            let points = profile(&config.parameters, &drifts)?;
            if cli.json {
                report::json(&points)? + "\n"
            } else {
                let void = overlap_void(config.parameters.baseline_quantity);
                report::profile_table(&points, void)
            }
        }

        Command::Diagnose {
            parameters,
            drifts,
            threshold,
        } => {
            parameters.apply(&mut config);

            let rows = drifts
                .iter()
                .map(|&drift| diagnose(&config.parameters, drift, *threshold))
                .collect::<Result<Vec<_>, _>>()?;
            render(cli.json, &rows, report::diagnosis_table)?
        }
    };

    print!("{output}");
    Ok(())
}

fn render<T: Serialize>(json: bool, rows: &[T], table: fn(&[T]) -> String) -> Result<String> {
    if json {
        Ok(report::json(rows)? + "\n")
    } else {
        Ok(table(rows))
    }
}
