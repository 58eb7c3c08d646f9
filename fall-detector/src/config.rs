//! Pipeline configuration.
//!
//! Every field has a default matching the reference device, so an empty JSON object (or no file
//! at all) yields a working classifier setup.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::PipelineError;

const DEFAULT_TRIGGER_THRESHOLD_G: f64 = 1.0;
const DEFAULT_ACCEL_RANGE_G: f64 = 4.0;
const DEFAULT_GYRO_RANGE_DPS: f64 = 2000.0;
const DEFAULT_POLL_PERIOD_MILLIS: u64 = 1;
const DEFAULT_ACQUISITION_DELAY_MILLIS: u64 = 200;
const DEFAULT_REPORT_PRECISION: usize = 4;

/// Operating mode, selected once at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Trigger, collect a window, classify and report.
    #[default]
    Classify,
    /// Log every synchronized reading as a CSV row.
    DataAcquisition,
}

/// What to do with raw readings outside the assumed sensor range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationPolicy {
    /// Out of range readings normalize outside [0, 1].
    #[default]
    PassThrough,
    /// Features are limited to [0, 1].
    Clamp,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub mode: Mode,
    /// Minimum |x|+|y|+|z| acceleration [G] that starts a window.
    pub trigger_threshold_g: f64,
    /// Accelerometer full scale; readings in [-range, range] map onto [0, 1].
    pub accel_range_g: f64,
    /// Gyroscope full scale; readings in [-range, range] map onto [0, 1].
    pub gyro_range_dps: f64,
    pub normalization: NormalizationPolicy,
    /// Consecutive instants without a synchronized pair after which a window being collected
    /// is abandoned. `None` waits forever.
    pub max_stalled_polls: Option<u32>,
    pub poll_period_millis: u64,
    pub acquisition_delay_millis: u64,
    /// Fractional digits of reported percentages.
    pub report_precision: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            trigger_threshold_g: DEFAULT_TRIGGER_THRESHOLD_G,
            accel_range_g: DEFAULT_ACCEL_RANGE_G,
            gyro_range_dps: DEFAULT_GYRO_RANGE_DPS,
            normalization: NormalizationPolicy::default(),
            max_stalled_polls: None,
            poll_period_millis: DEFAULT_POLL_PERIOD_MILLIS,
            acquisition_delay_millis: DEFAULT_ACQUISITION_DELAY_MILLIS,
            report_precision: DEFAULT_REPORT_PRECISION,
        }
    }
}

impl PipelineConfig {
    /// Loads configuration from a JSON file and validates it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, PipelineError> {
        let config: PipelineConfig = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Returns Config error if thresholds, ranges or the stall limit are not strictly positive.
    pub fn validate(&self) -> Result<(), PipelineError> {
        let positive = [
            ("trigger_threshold_g", self.trigger_threshold_g),
            ("accel_range_g", self.accel_range_g),
            ("gyro_range_dps", self.gyro_range_dps),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(PipelineError::Config(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.max_stalled_polls == Some(0) {
            return Err(PipelineError::Config("max_stalled_polls must be positive".to_string()));
        }
        Ok(())
    }

    pub fn poll_period(&self) -> Duration {
        Duration::from_millis(self.poll_period_millis)
    }

    pub fn acquisition_delay(&self) -> Duration {
        Duration::from_millis(self.acquisition_delay_millis)
    }
}
