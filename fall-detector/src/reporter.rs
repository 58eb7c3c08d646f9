use std::io::Write;

use log::warn;

use common::{ClassificationResult, ResultSink};

const DEFAULT_PRECISION: usize = 4;

/// Writes one `<state>: <percentage>%` line per state followed by a blank line.
pub struct TextReporter<W: Write> {
    out: W,
    precision: usize,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self::with_precision(out, DEFAULT_PRECISION)
    }

    pub fn with_precision(out: W, precision: usize) -> Self {
        Self { out, precision }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_result(&mut self, result: &ClassificationResult) -> std::io::Result<()> {
        for (name, value) in result.states() {
            writeln!(self.out, "{}: {:.*}%", name, self.precision, value)?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

impl<W: Write> ResultSink for TextReporter<W> {
    fn report(&mut self, result: &ClassificationResult) {
        if let Err(e) = self.write_result(result) {
            warn!("Could not report window {}: {}", result.window_id(), e);
        }
    }
}
