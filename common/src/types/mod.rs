pub mod buffers;
pub mod classification;
pub mod clock;
pub mod timed;
pub mod untimed;

pub use crate::types::classification::ClassificationResult;
pub use crate::types::clock::Clock;
pub use crate::types::timed::{ImuSample, SensorTick};
pub use crate::types::untimed::XYZ;
