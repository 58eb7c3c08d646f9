/// Number of coordinates of a 3-axis reading.
pub const N_XYZ_COORDINATES: usize = 3;
/// Channels per sample: 3 acceleration + 3 angular rate.
pub const N_CHANNELS: usize = 2 * N_XYZ_COORDINATES;
/// Samples collected per window.
pub const WINDOW_SAMPLES: usize = 20;
/// Length of the flat feature buffer handed to the classifier.
pub const N_FEATURES: usize = WINDOW_SAMPLES * N_CHANNELS;

/// Names of the reported states, in report order.
pub const STATES: [&str; 2] = ["normal", "falldown"];
