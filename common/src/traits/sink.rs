use crate::types::ClassificationResult;

/// Consumer of classification results. Writes are best effort: a sink that can't emit
/// drops the result rather than failing the pipeline.
pub trait ResultSink {
    fn report(&mut self, result: &ClassificationResult);
}
