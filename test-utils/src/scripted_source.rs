use std::error::Error;

use common::buffers::ReplayBuffer;
use common::{SampleSource, SensorTick, SourceStatus, XYZ};

use crate::csv_loader;

/// Builds the sequence of instants played by a [`ScriptedSource`].
#[derive(Clone, Debug, Default)]
pub struct ScriptBuilder {
    ticks: Vec<SensorTick>,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self { ticks: vec![] }
    }

    fn timestamp(&self) -> f64 {
        self.ticks.len() as f64
    }

    /// Instant with both readings.
    pub fn pair(&mut self, accel: [f64; 3], gyro: [f64; 3]) -> &mut Self {
        let tick = SensorTick::new(self.timestamp(), Some(XYZ::new(accel)), Some(XYZ::new(gyro)));
        self.ticks.push(tick);
        self
    }

    /// `n` identical instants with both readings.
    pub fn pairs(&mut self, n: usize, accel: [f64; 3], gyro: [f64; 3]) -> &mut Self {
        for _ in 0..n {
            self.pair(accel, gyro);
        }
        self
    }

    /// Instant where only the accelerometer has a new reading.
    pub fn acceleration(&mut self, accel: [f64; 3]) -> &mut Self {
        let tick = SensorTick::new(self.timestamp(), Some(XYZ::new(accel)), None);
        self.ticks.push(tick);
        self
    }

    /// Instant where only the gyroscope has a new reading.
    pub fn angular_rate(&mut self, gyro: [f64; 3]) -> &mut Self {
        let tick = SensorTick::new(self.timestamp(), None, Some(XYZ::new(gyro)));
        self.ticks.push(tick);
        self
    }

    /// `n` instants without any reading.
    pub fn silence(&mut self, n: usize) -> &mut Self {
        for _ in 0..n {
            let tick = SensorTick::empty(self.timestamp());
            self.ticks.push(tick);
        }
        self
    }

    pub fn build(&self) -> ScriptedSource {
        ScriptedSource::new(self.ticks.clone())
    }
}

/// Sample source playing a fixed script, counting how it is used.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    buffer: ReplayBuffer,
    acceleration_reads: usize,
    angular_rate_reads: usize,
    advances: usize,
}

impl ScriptedSource {
    pub fn new(ticks: Vec<SensorTick>) -> Self {
        Self {
            buffer: ReplayBuffer::new(ticks),
            ..Self::default()
        }
    }

    /// Plays every row of a recorded session as a synchronized instant.
    pub fn from_csv(file_path: &str) -> Result<Self, Box<dyn Error>> {
        let samples = csv_loader::load_samples(file_path)?;
        Ok(Self::new(samples.into_iter().map(SensorTick::from).collect()))
    }

    pub fn acceleration_reads(&self) -> usize {
        self.acceleration_reads
    }

    pub fn angular_rate_reads(&self) -> usize {
        self.angular_rate_reads
    }

    pub fn advances(&self) -> usize {
        self.advances
    }

    /// Instants not reached yet.
    pub fn remaining(&self) -> usize {
        self.buffer.remaining()
    }
}

impl SampleSource for ScriptedSource {
    fn acceleration_available(&self) -> bool {
        self.buffer.acceleration_available()
    }

    fn read_acceleration(&mut self) -> XYZ {
        self.acceleration_reads += 1;
        self.buffer.read_acceleration()
    }

    fn angular_rate_available(&self) -> bool {
        self.buffer.angular_rate_available()
    }

    fn read_angular_rate(&mut self) -> XYZ {
        self.angular_rate_reads += 1;
        self.buffer.read_angular_rate()
    }

    fn advance(&mut self) -> SourceStatus {
        self.advances += 1;
        self.buffer.advance()
    }
}
