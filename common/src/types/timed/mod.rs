pub mod imu_sample;
pub mod sensor_tick;

pub use crate::types::timed::imu_sample::ImuSample;
pub use crate::types::timed::sensor_tick::SensorTick;
