//! Window collection and per-channel normalization.

use common::constants::{N_CHANNELS, N_FEATURES, N_XYZ_COORDINATES, WINDOW_SAMPLES};
use common::XYZ;

use crate::config::{NormalizationPolicy, PipelineConfig};

/// Linear rescaling of raw sensor units into the model input range.
///
/// A channel with full scale `r` maps `[-r, r]` onto `[0, 1]` as `(raw + r) / 2r`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normalizer {
    accel_range_g: f64,
    gyro_range_dps: f64,
    policy: NormalizationPolicy,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::from_config(&PipelineConfig::default())
    }
}

impl Normalizer {
    pub fn new(accel_range_g: f64, gyro_range_dps: f64, policy: NormalizationPolicy) -> Self {
        Self {
            accel_range_g,
            gyro_range_dps,
            policy,
        }
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(
            config.accel_range_g,
            config.gyro_range_dps,
            config.normalization,
        )
    }

    pub fn acceleration(&self, raw: f64) -> f32 {
        self.apply(raw, self.accel_range_g)
    }

    pub fn angular_rate(&self, raw: f64) -> f32 {
        self.apply(raw, self.gyro_range_dps)
    }

    fn apply(&self, raw: f64, range: f64) -> f32 {
        let value = ((raw + range) / (2.0 * range)) as f32;
        match self.policy {
            NormalizationPolicy::PassThrough => value,
            NormalizationPolicy::Clamp => value.clamp(0.0, 1.0),
        }
    }
}

/// Accumulates `WINDOW_SAMPLES` synchronized readings as a flat normalized feature buffer.
///
/// Sample `i` occupies `features[i * 6..i * 6 + 6]` as accel x, y, z then gyro x, y, z.
/// The buffer is only exposed once full.
#[derive(Clone, Debug)]
pub struct WindowCollector {
    features: [f32; N_FEATURES],
    filled: usize,
    normalizer: Normalizer,
}

impl WindowCollector {
    pub fn new(normalizer: Normalizer) -> Self {
        Self {
            features: [0.0; N_FEATURES],
            filled: 0,
            normalizer,
        }
    }

    /// Number of samples written since the last reset.
    pub fn filled(&self) -> usize {
        self.filled
    }

    pub fn is_complete(&self) -> bool {
        self.filled == WINDOW_SAMPLES
    }

    /// Starts a new episode, discarding any previous content.
    pub fn reset(&mut self) {
        self.features = [0.0; N_FEATURES];
        self.filled = 0;
    }

    /// Normalizes and stores one acceleration/angular-rate pair read in the same step.
    /// Returns the index of the written slot, or `None` if the window is already full.
    pub fn push(&mut self, acceleration: &XYZ, angular_rate: &XYZ) -> Option<usize> {
        if self.is_complete() {
            return None;
        }
        let index = self.filled;
        let slot = &mut self.features[index * N_CHANNELS..(index + 1) * N_CHANNELS];
        let (accel_slot, gyro_slot) = slot.split_at_mut(N_XYZ_COORDINATES);
        for (dst, raw) in accel_slot.iter_mut().zip(acceleration.inner()) {
            *dst = self.normalizer.acceleration(raw);
        }
        for (dst, raw) in gyro_slot.iter_mut().zip(angular_rate.inner()) {
            *dst = self.normalizer.angular_rate(raw);
        }
        self.filled += 1;
        Some(index)
    }

    /// Returns the feature buffer if all slots have been filled.
    pub fn features(&self) -> Option<&[f32; N_FEATURES]> {
        self.is_complete().then_some(&self.features)
    }
}
