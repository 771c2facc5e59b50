use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use resonance_bond::{
    Discretization,
    config::{RunConfig, Stepping},
    constants::DEFAULT_FRACTURE_THRESHOLD,
};

#[derive(Parser, Debug)]
#[command(name = "resonance")]
#[command(about = "Simulate restoration of a drifting bond and report its telemetry")]
#[command(version)]
pub struct Cli {
    /// TOML file with `[parameters]` and `[stepping]` sections
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Step the drift forward and sample telemetry
    Simulate {
        #[command(flatten)]
        parameters: ParameterArgs,

        #[command(flatten)]
        stepping: SteppingArgs,
    },

    /// Restoration log: whole-unit decrements sampled every 5 units
    Log {
        #[command(flatten)]
        parameters: ParameterArgs,

        /// Length of the treatment
        #[arg(long, default_value_t = 60.0)]
        total_time: f64,

        /// Logging cadence
        #[arg(long, default_value_t = 5.0)]
        sample_interval: f64,
    },

    /// Evaluate the closed-form trajectory
    Analytic {
        #[command(flatten)]
        parameters: ParameterArgs,

        /// Explicit times to evaluate, comma separated
        #[arg(long, value_delimiter = ',', conflicts_with = "points")]
        times: Vec<f64>,

        /// Number of evenly spaced times over the configured run
        #[arg(long, default_value_t = 300)]
        points: usize,
    },

    /// Compare the stepped run against the closed form at each sample
    Compare {
        #[command(flatten)]
        parameters: ParameterArgs,

        #[command(flatten)]
        stepping: SteppingArgs,
    },

    /// Sweep the derivation formulas over a drift range
    Profile {
        #[command(flatten)]
        parameters: ParameterArgs,

        #[arg(long, default_value_t = 0.0)]
        from: f64,

        #[arg(long, default_value_t = 100.0)]
        to: f64,

        #[arg(long, default_value_t = 200)]
        points: usize,
    },

    /// Classify drift values and report the restoration frequency
    Diagnose {
        #[command(flatten)]
        parameters: ParameterArgs,

        /// Drift values in percent, comma separated
        #[arg(long, value_delimiter = ',', default_values_t = [0.0, 45.0, 90.0])]
        drifts: Vec<f64>,

        /// Drift at or beyond which a bond counts as fractured
        #[arg(long, default_value_t = DEFAULT_FRACTURE_THRESHOLD)]
        threshold: f64,
    },
}

/// Overrides for [`resonance_bond::SimulationParameters`].
#[derive(Args, Debug, Default)]
pub struct ParameterArgs {
    #[arg(long)]
    pub baseline_quantity: Option<f64>,

    #[arg(long)]
    pub scale_constant: Option<f64>,

    #[arg(long)]
    pub decay_rate: Option<f64>,

    #[arg(long)]
    pub initial_drift: Option<f64>,
}

/// Overrides for [`Stepping`].
#[derive(Args, Debug, Default)]
pub struct SteppingArgs {
    #[arg(long)]
    pub dt: Option<f64>,

    #[arg(long)]
    pub total_time: Option<f64>,

    #[arg(long)]
    pub sample_interval: Option<f64>,

    #[arg(long, value_enum)]
    pub policy: Option<Policy>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Policy {
    ExplicitEuler,
    WholeUnitDecrement,
}

impl From<Policy> for Discretization {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::ExplicitEuler => Self::ExplicitEuler,
            Policy::WholeUnitDecrement => Self::WholeUnitDecrement,
        }
    }
}

impl ParameterArgs {
    pub fn apply(&self, config: &mut RunConfig) {
        let params = &mut config.parameters;
        if let Some(value) = self.baseline_quantity {
            params.baseline_quantity = value;
        }
        if let Some(value) = self.scale_constant {
            params.scale_constant = value;
        }
        if let Some(value) = self.decay_rate {
            params.decay_rate = value;
        }
        if let Some(value) = self.initial_drift {
            params.initial_drift = value;
        }
    }
}

impl SteppingArgs {
    pub fn apply(&self, config: &mut RunConfig) {
        let stepping: &mut Stepping = &mut config.stepping;
        if let Some(value) = self.dt {
            stepping.dt = value;
        }
        if let Some(value) = self.total_time {
            stepping.total_time = value;
        }
        if let Some(value) = self.sample_interval {
            stepping.sample_interval = value;
        }
        if let Some(policy) = self.policy {
            stepping.policy = policy.into();
        }
    }
}
