use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

use common::XYZ;

use crate::errors::PipelineError;

/// Zero-mean Gaussian noise added to synthetic readings.
#[derive(Clone, Debug)]
pub(super) struct GaussianNoise {
    normal: Normal<f64>,
}

impl GaussianNoise {
    /// Returns Config error if `stdev` is negative or not finite.
    pub(super) fn new(stdev: f64) -> Result<Self, PipelineError> {
        let normal = Normal::new(0.0, stdev)
            .map_err(|e| PipelineError::Config(format!("noise stdev {stdev}: {e}")))?;
        Ok(Self { normal })
    }

    /// Sample from distribution
    pub(super) fn draw_sample(&self, rng: &mut StdRng) -> f64 {
        self.normal.sample(rng)
    }

    /// Adds independent noise to each axis
    pub(super) fn add_noise(&self, rng: &mut StdRng, data: XYZ) -> XYZ {
        let noise = XYZ::new([
            self.draw_sample(rng),
            self.draw_sample(rng),
            self.draw_sample(rng),
        ]);
        data + noise
    }
}
