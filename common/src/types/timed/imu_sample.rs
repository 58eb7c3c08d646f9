use crate::constants::{N_CHANNELS, N_XYZ_COORDINATES};
use crate::types::untimed::XYZ;

const TIMESTAMP_IDX: usize = 0;

/// One instant of a 6-axis inertial sensor: acceleration [G] and angular rate [deg/s].
///
/// # Examples
///
/// ```
/// use common::types::timed::ImuSample;
/// use common::types::untimed::XYZ;
///
/// let sample = ImuSample::new(0.5, XYZ::new([0.0, 0.0, 1.0]), XYZ::new([10.0, 0.0, -10.0]));
///
/// assert_eq!(sample.get_timestamp(), 0.5);
/// assert_eq!(sample.channels(), [0.0, 0.0, 1.0, 10.0, 0.0, -10.0]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ImuSample {
    timestamp: f64,
    acceleration: XYZ,
    angular_rate: XYZ,
}

impl ImuSample {
    pub fn new(timestamp: f64, acceleration: XYZ, angular_rate: XYZ) -> Self {
        Self {
            timestamp,
            acceleration,
            angular_rate,
        }
    }

    pub fn get_timestamp(&self) -> f64 {
        self.timestamp
    }

    pub fn get_acceleration(&self) -> XYZ {
        self.acceleration
    }

    pub fn get_angular_rate(&self) -> XYZ {
        self.angular_rate
    }

    /// Returns the six channels in the order accel_x, accel_y, accel_z, gyro_x, gyro_y, gyro_z.
    pub fn channels(&self) -> [f64; N_CHANNELS] {
        let [ax, ay, az] = self.acceleration.inner();
        let [gx, gy, gz] = self.angular_rate.inner();
        [ax, ay, az, gx, gy, gz]
    }
}

/// Accepts the six channels alone or preceded by a timestamp.
impl TryFrom<Vec<f64>> for ImuSample {
    type Error = &'static str;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        let (timestamp, channels) = match value.len() {
            N_CHANNELS => (0.0, &value[..]),
            n if n == N_CHANNELS + 1 => (value[TIMESTAMP_IDX], &value[TIMESTAMP_IDX + 1..]),
            _ => return Err("Invalid length of input vector"),
        };
        let acceleration = XYZ::try_from(channels[..N_XYZ_COORDINATES].to_vec())?;
        let angular_rate = XYZ::try_from(channels[N_XYZ_COORDINATES..].to_vec())?;
        Ok(ImuSample::new(timestamp, acceleration, angular_rate))
    }
}
