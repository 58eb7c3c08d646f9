use common::{ClassificationResult, ResultSink};

/// Sink keeping every reported result.
#[derive(Clone, Debug, Default)]
pub struct SinkMock {
    results: Vec<ClassificationResult>,
}

impl SinkMock {
    pub fn new() -> Self {
        Self { results: vec![] }
    }

    pub fn results(&self) -> &[ClassificationResult] {
        &self.results
    }
}

impl ResultSink for SinkMock {
    fn report(&mut self, result: &ClassificationResult) {
        self.results.push(result.clone());
    }
}
