//! Sample sources usable without the device: recorded sessions and a synthetic sensor.

pub mod csv_replay;
mod gaussian;
pub mod simulated;

pub use csv_replay::CsvReplaySource;
pub use simulated::{SimulatedSource, SimulationConfig};
