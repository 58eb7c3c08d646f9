//! # Crate fall-detector
//!
//! ## fall-detector
//!
//! The `fall-detector` crate turns the readings of a 6-axis inertial sensor (accelerometer [G] and
//! gyroscope [deg/s]) into fall / no-fall classifications.
//!
//! The pipeline idles until the summed absolute acceleration reaches a threshold, then collects a
//! window of 20 synchronized acceleration + angular-rate pairs, normalizes them into a 120-value
//! feature buffer, hands the buffer to a [`Classifier`](common::Classifier) and reports the
//! `normal` / `falldown` percentages. After each window it goes back to waiting for motion.
//!
//! Features include:
//! - Explicit, hardware-free state machine ([`Pipeline`]) driven one step at a time.
//! - Fail-stop on inference failure as a typed error.
//! - Optional abandoning of windows that stall waiting for synchronized readings.
//! - Data-acquisition mode logging raw readings as CSV, and replay of such recordings.
//! - Synthetic sensor for running without a device.

pub mod acquisition;
pub mod classifier;
pub mod config;
pub mod errors;
pub mod pipeline;
pub mod reporter;
pub mod runner;
mod shutdown;
pub mod sources;
pub mod trigger;
pub mod window;

pub use acquisition::Acquisition;
pub use classifier::{ClassifierAdapter, LogisticModel};
pub use config::{Mode, NormalizationPolicy, PipelineConfig};
pub use errors::PipelineError;
pub use pipeline::{Phase, Pipeline, Step};
pub use reporter::TextReporter;
pub use runner::{run_acquisition, run_pipeline, RunSummary, StopReason};
pub use shutdown::listen_for_shutdown;
pub use trigger::TriggerDetector;
pub use window::{Normalizer, WindowCollector};
