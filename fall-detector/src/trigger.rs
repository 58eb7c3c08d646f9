use common::XYZ;

/// Decides when motion becomes significant enough to start collecting a window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerDetector {
    threshold_g: f64,
}

impl TriggerDetector {
    pub fn new(threshold_g: f64) -> Self {
        Self { threshold_g }
    }

    /// Returns true if `|x| + |y| + |z|` of the acceleration reaches the threshold (inclusive).
    pub fn check_trigger(&self, acceleration: &XYZ) -> bool {
        acceleration.l1_norm() >= self.threshold_g
    }
}
