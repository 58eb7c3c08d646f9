//! Control loops driving the pipeline or the acquisition logger from a sample source.
//!
//! Both loops run on the calling task. The only suspension point is the poll back-off taken
//! when the source had nothing to offer; that is also where a stop request is observed.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use log::info;
use tokio::sync::Notify;

use common::{Classifier, ResultSink, SampleSource, SourceStatus};

use crate::acquisition::Acquisition;
use crate::errors::PipelineError;
use crate::pipeline::{Pipeline, Step};

/// Counters of a finished run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub windows_classified: usize,
    pub windows_aborted: usize,
    pub rows_acquired: usize,
}

/// Why a control loop returned without error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    SourceExhausted,
    Shutdown,
}

/// Outcome of a back-off.
enum Wait {
    Continue,
    Stop(StopReason),
}

async fn back_off<S: SampleSource + ?Sized>(
    source: &mut S,
    shutdown: std::pin::Pin<&mut tokio::sync::futures::Notified<'_>>,
    period: Duration,
) -> Wait {
    if source.advance() == SourceStatus::Exhausted {
        info!("Sample source exhausted");
        return Wait::Stop(StopReason::SourceExhausted);
    }
    tokio::select! {
        _ = shutdown => {
            info!("Stop requested");
            Wait::Stop(StopReason::Shutdown)
        }
        _ = tokio::time::sleep(period) => Wait::Continue,
    }
}

/// Runs trigger, collection and classification until the source is exhausted, a stop is
/// requested on `abort_signal` or a fatal error occurs. Results go to `sink` as soon as each
/// window is classified.
pub async fn run_pipeline<C, S, K>(
    pipeline: &mut Pipeline<C>,
    source: &mut S,
    sink: &mut K,
    abort_signal: Arc<Notify>,
    poll_period: Duration,
) -> Result<(RunSummary, StopReason), PipelineError>
where
    C: Classifier,
    S: SampleSource + ?Sized,
    K: ResultSink + ?Sized,
{
    let shutdown = abort_signal.notified();
    tokio::pin!(shutdown);
    shutdown.as_mut().enable();

    let mut summary = RunSummary::default();
    loop {
        match pipeline.step(source)? {
            Step::Classified(result) => {
                sink.report(&result);
                summary.windows_classified += 1;
            }
            Step::Aborted => summary.windows_aborted += 1,
            Step::Pending => {
                if let Wait::Stop(reason) = back_off(source, shutdown.as_mut(), poll_period).await {
                    return Ok((summary, reason));
                }
            }
            Step::BelowThreshold | Step::Triggered | Step::Collected(_) => {}
        }
    }
}

/// Logs every synchronized reading to `acquisition`, polling once per `delay`.
pub async fn run_acquisition<W, S>(
    acquisition: &mut Acquisition<W>,
    source: &mut S,
    abort_signal: Arc<Notify>,
    delay: Duration,
) -> Result<(RunSummary, StopReason), PipelineError>
where
    W: Write,
    S: SampleSource + ?Sized,
{
    let shutdown = abort_signal.notified();
    tokio::pin!(shutdown);
    shutdown.as_mut().enable();

    loop {
        acquisition.step(source)?;
        if let Wait::Stop(reason) = back_off(source, shutdown.as_mut(), delay).await {
            let summary = RunSummary {
                rows_acquired: acquisition.rows(),
                ..RunSummary::default()
            };
            return Ok((summary, reason));
        }
    }
}
