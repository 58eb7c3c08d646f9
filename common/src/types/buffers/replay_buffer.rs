use std::collections::VecDeque;

use crate::traits::{SampleSource, SourceStatus};
use crate::types::timed::SensorTick;
use crate::types::untimed::XYZ;

/// Plays back a finite sequence of sensor instants as a [`SampleSource`].
///
/// The current instant is exposed until [`SampleSource::advance`] moves to the next one;
/// whatever was left unread is dropped. Reading a channel with nothing new returns its
/// most recent value.
#[derive(Clone, Debug, Default)]
pub struct ReplayBuffer {
    pending: VecDeque<SensorTick>,
    current: SensorTick,
    last_acceleration: XYZ,
    last_angular_rate: XYZ,
}

impl ReplayBuffer {
    /// Creates a new ReplayBuffer positioned on the first instant of `ticks`.
    pub fn new<I: IntoIterator<Item = SensorTick>>(ticks: I) -> Self {
        let mut pending: VecDeque<SensorTick> = ticks.into_iter().collect();
        let current = pending.pop_front().unwrap_or_default();
        Self {
            pending,
            current,
            last_acceleration: XYZ::default(),
            last_angular_rate: XYZ::default(),
        }
    }

    /// Instants not yet reached.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    pub fn current_timestamp(&self) -> f64 {
        self.current.get_timestamp()
    }
}

impl SampleSource for ReplayBuffer {
    fn acceleration_available(&self) -> bool {
        self.current.has_acceleration()
    }

    fn read_acceleration(&mut self) -> XYZ {
        if let Some(acceleration) = self.current.take_acceleration() {
            self.last_acceleration = acceleration;
        }
        self.last_acceleration
    }

    fn angular_rate_available(&self) -> bool {
        self.current.has_angular_rate()
    }

    fn read_angular_rate(&mut self) -> XYZ {
        if let Some(angular_rate) = self.current.take_angular_rate() {
            self.last_angular_rate = angular_rate;
        }
        self.last_angular_rate
    }

    fn advance(&mut self) -> SourceStatus {
        match self.pending.pop_front() {
            Some(tick) => {
                self.current = tick;
                SourceStatus::Ready
            }
            None => {
                self.current = SensorTick::empty(self.current.get_timestamp());
                SourceStatus::Exhausted
            }
        }
    }
}
