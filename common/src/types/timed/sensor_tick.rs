use crate::types::timed::ImuSample;
use crate::types::untimed::XYZ;

/// Readings produced by the sensor at one instant. Either channel may be missing, and a
/// channel is consumed by the first read.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SensorTick {
    timestamp: f64,
    acceleration: Option<XYZ>,
    angular_rate: Option<XYZ>,
}

impl SensorTick {
    pub fn new(timestamp: f64, acceleration: Option<XYZ>, angular_rate: Option<XYZ>) -> Self {
        Self {
            timestamp,
            acceleration,
            angular_rate,
        }
    }

    /// Instant with no reading on any channel.
    pub fn empty(timestamp: f64) -> Self {
        Self::new(timestamp, None, None)
    }

    pub fn get_timestamp(&self) -> f64 {
        self.timestamp
    }

    pub fn has_acceleration(&self) -> bool {
        self.acceleration.is_some()
    }

    pub fn has_angular_rate(&self) -> bool {
        self.angular_rate.is_some()
    }

    pub fn take_acceleration(&mut self) -> Option<XYZ> {
        self.acceleration.take()
    }

    pub fn take_angular_rate(&mut self) -> Option<XYZ> {
        self.angular_rate.take()
    }
}

impl From<ImuSample> for SensorTick {
    fn from(value: ImuSample) -> Self {
        Self::new(
            value.get_timestamp(),
            Some(value.get_acceleration()),
            Some(value.get_angular_rate()),
        )
    }
}
