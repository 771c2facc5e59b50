//! Run configuration loaded from TOML.
//!
//! Every field is optional; missing values fall back to the reference run.
//!
//! ```toml
//! [parameters]
//! baseline_quantity = 0.15
//! scale_constant = 4.135667696e-15
//! decay_rate = 0.08
//! initial_drift = 45.0
//!
//! [stepping]
//! dt = 0.1
//! total_time = 60.0
//! sample_interval = 15.0
//! policy = "explicit-euler"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    Discretization, Error, SimulationParameters, StateStepper, TelemetryRecord,
    error::require_positive,
};

/// Errors raised while loading a run configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config")]
    Invalid(#[from] Error),
}

/// Step size, duration, sampling cadence, and update policy of a stepped run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Stepping {
    pub dt: f64,
    pub total_time: f64,
    pub sample_interval: f64,
    pub policy: Discretization,
}

impl Default for Stepping {
    fn default() -> Self {
        Self {
            dt: 0.1,
            total_time: 60.0,
            sample_interval: 15.0,
            policy: Discretization::ExplicitEuler,
        }
    }
}

impl Stepping {
    /// Checks the stepping values on their own.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if any value is not positive or the
    /// sampling interval is finer than `dt`.
    pub fn validate(&self) -> Result<(), Error> {
        require_positive("dt", self.dt)?;
        require_positive("total_time", self.total_time)?;
        require_positive("sample_interval", self.sample_interval)?;
        if self.sample_interval < self.dt {
            return Err(Error::invalid(
                "sample_interval",
                self.sample_interval,
                "must not be finer than dt",
            ));
        }
        Ok(())
    }
}

/// Everything a stepped or closed-form run needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub parameters: SimulationParameters,
    pub stepping: Stepping,
}

impl RunConfig {
    /// Parses and validates a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys, and
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, otherwise as
    /// [`RunConfig::from_toml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Runs the [`StateStepper`] with this configuration.
    ///
    /// # Errors
    ///
    /// As [`StateStepper::run`].
    pub fn run_stepped(&self) -> Result<Vec<TelemetryRecord>, Error> {
        let Stepping {
            dt,
            total_time,
            sample_interval,
            policy,
        } = self.stepping;
        StateStepper::new(policy).run(&self.parameters, dt, total_time, sample_interval)
    }

    /// Validates the parameters, the stepping, and the policy at this step size.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error::InvalidParameter`] found.
    pub fn validate(&self) -> Result<(), Error> {
        self.parameters.validate()?;
        self.stepping.validate()?;
        self.stepping
            .policy
            .validate(self.parameters.decay_rate, self.stepping.dt)
    }
}
