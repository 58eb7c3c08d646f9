use uuid::Uuid;

use crate::constants::STATES;

const PERCENT: f32 = 100.0;

/// Per-state probabilities, in percent, for one classified window.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    window_id: Uuid,
    states: Vec<(&'static str, f32)>,
}

impl ClassificationResult {
    /// Builds the two-state result from the classifier's scalar fall probability `p`:
    /// `normal = (1 - p) * 100`, `falldown = p * 100`.
    pub fn from_falldown_probability(window_id: Uuid, p: f32) -> Self {
        let [normal, falldown] = STATES;
        Self {
            window_id,
            states: vec![(normal, PERCENT - p * PERCENT), (falldown, p * PERCENT)],
        }
    }

    pub fn window_id(&self) -> Uuid {
        self.window_id
    }

    /// States in report order.
    pub fn states(&self) -> &[(&'static str, f32)] {
        &self.states
    }

    /// Percentage assigned to `name`, if such state exists.
    pub fn probability(&self, name: &str) -> Option<f32> {
        self.states
            .iter()
            .find(|(state, _)| *state == name)
            .map(|(_, value)| *value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_falldown_probability() {
        let result = ClassificationResult::from_falldown_probability(Uuid::new_v4(), 0.8);
        assert!((result.probability("falldown").unwrap() - 80.0).abs() < 1e-4);
        assert!((result.probability("normal").unwrap() - 20.0).abs() < 1e-4);
        assert_eq!(result.probability("unknown"), None);
    }

    #[test]
    fn test_state_order() {
        let result = ClassificationResult::from_falldown_probability(Uuid::new_v4(), 0.0);
        let names: Vec<&str> = result.states().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["normal", "falldown"]);
        assert_eq!(result.states()[0].1, 100.0);
    }
}
