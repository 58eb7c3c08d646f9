//! Raw data logging: every synchronized reading becomes one CSV row.

use std::io::Write;

use log::debug;

use common::constants::N_CHANNELS;
use common::{ImuSample, SampleSource};

use crate::errors::PipelineError;

pub const CSV_HEADER: [&str; N_CHANNELS] = [
    "accel_x", "accel_y", "accel_z", "gyro_x", "gyro_y", "gyro_z",
];
const CSV_DECIMALS: usize = 3;

pub struct Acquisition<W: Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl<W: Write> Acquisition<W> {
    /// Creates the logger and emits the header line.
    pub fn new(out: W) -> Result<Self, PipelineError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_writer(out);
        writer.write_record(CSV_HEADER)?;
        writer.flush()?;
        Ok(Self { writer, rows: 0 })
    }

    /// Rows written so far, header excluded.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Writes one row if both channels have a new reading. Returns whether a row was written.
    pub fn step<S: SampleSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<bool, PipelineError> {
        if !(source.acceleration_available() && source.angular_rate_available()) {
            return Ok(false);
        }
        let acceleration = source.read_acceleration();
        let angular_rate = source.read_angular_rate();
        let sample = ImuSample::new(0.0, acceleration, angular_rate);
        let record = sample
            .channels()
            .map(|value| format!("{:.*}", CSV_DECIMALS, value));
        self.writer.write_record(&record)?;
        self.writer.flush()?;
        self.rows += 1;
        debug!("Acquired row {}", self.rows);
        Ok(true)
    }

    pub fn into_inner(self) -> Result<W, PipelineError> {
        self.writer
            .into_inner()
            .map_err(|e| PipelineError::Io(e.to_string()))
    }
}
