use crate::types::untimed::XYZ;

/// Outcome of [`SampleSource::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceStatus {
    /// More readings may become available.
    Ready,
    /// The source will never produce another reading.
    Exhausted,
}

/// 6-axis inertial sensor as seen by the pipeline.
///
/// Each channel is independently flagged as available; a read returns the most recent reading
/// of that channel and clears its flag. No buffering is guaranteed beyond the latest reading.
pub trait SampleSource {
    /// Returns true if an acceleration reading has not been read yet.
    fn acceleration_available(&self) -> bool;
    /// Returns latest acceleration [G].
    fn read_acceleration(&mut self) -> XYZ;
    /// Returns true if an angular-rate reading has not been read yet.
    fn angular_rate_available(&self) -> bool;
    /// Returns latest angular rate [deg/s].
    fn read_angular_rate(&mut self) -> XYZ;

    /// Suspension point of the control loop, called whenever a poll found nothing to do.
    ///
    /// Recorded sources move to their next instant here, dropping readings that were not read.
    /// Live sources keep their own pace and only report whether they are still producing data.
    fn advance(&mut self) -> SourceStatus {
        SourceStatus::Ready
    }
}
