use std::io::Read;
use std::path::Path;

use log::info;

use common::buffers::ReplayBuffer;
use common::{ImuSample, SampleSource, SensorTick, SourceStatus, XYZ};

use crate::errors::PipelineError;

/// Replays a CSV session recorded in data-acquisition mode, one row per instant.
///
/// Rows hold the six channels, optionally preceded by a timestamp column.
pub struct CsvReplaySource {
    buffer: ReplayBuffer,
    rows: usize,
}

impl CsvReplaySource {
    /// Returns SensorInit error if the file can't be read or a row is not a valid sample.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let reader = csv_reader()
            .from_path(path)
            .map_err(|e| PipelineError::SensorInit(format!("{}: {}", path.display(), e)))?;
        let source = Self::from_csv(reader)?;
        info!("Loaded {} readings from {}", source.rows, path.display());
        Ok(source)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, PipelineError> {
        Self::from_csv(csv_reader().from_reader(reader))
    }

    fn from_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<Self, PipelineError> {
        let mut ticks = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record.map_err(|e| PipelineError::SensorInit(e.to_string()))?;
            let values = record
                .iter()
                .map(|field| field.parse::<f64>())
                .collect::<Result<Vec<f64>, _>>()
                .map_err(|e| PipelineError::SensorInit(format!("row {}: {}", row + 1, e)))?;
            let sample = ImuSample::try_from(values)
                .map_err(|e| PipelineError::SensorInit(format!("row {}: {}", row + 1, e)))?;
            ticks.push(SensorTick::from(sample));
        }
        let rows = ticks.len();
        Ok(Self {
            buffer: ReplayBuffer::new(ticks),
            rows,
        })
    }

    /// Number of rows loaded.
    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }
}

fn csv_reader() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).trim(csv::Trim::All);
    builder
}

impl SampleSource for CsvReplaySource {
    fn acceleration_available(&self) -> bool {
        self.buffer.acceleration_available()
    }

    fn read_acceleration(&mut self) -> XYZ {
        self.buffer.read_acceleration()
    }

    fn angular_rate_available(&self) -> bool {
        self.buffer.angular_rate_available()
    }

    fn read_angular_rate(&mut self) -> XYZ {
        self.buffer.read_angular_rate()
    }

    fn advance(&mut self) -> SourceStatus {
        self.buffer.advance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SESSION: &str = "accel_x, accel_y, accel_z, gyro_x, gyro_y, gyro_z\r\n\
                           0.010, -0.020, 0.990, 1.500, -2.000, 0.250\r\n\
                           1.200, 0.300, -0.400, 250.000, 10.000, -90.000\r\n";

    #[test]
    fn test_replay_rows_in_order() {
        let mut source = CsvReplaySource::from_reader(SESSION.as_bytes()).unwrap();
        assert_eq!(source.len(), 2);

        assert!(source.acceleration_available() && source.angular_rate_available());
        assert_eq!(source.read_acceleration(), XYZ::new([0.01, -0.02, 0.99]));
        assert_eq!(source.read_angular_rate(), XYZ::new([1.5, -2.0, 0.25]));

        assert_eq!(source.advance(), SourceStatus::Ready);
        assert_eq!(source.read_acceleration(), XYZ::new([1.2, 0.3, -0.4]));
        assert_eq!(source.advance(), SourceStatus::Exhausted);
    }

    #[test]
    fn test_timestamp_column() {
        let session = "t,ax,ay,az,gx,gy,gz\n0.5,0,0,1,0,0,0\n";
        let mut source = CsvReplaySource::from_reader(session.as_bytes()).unwrap();
        assert_eq!(source.read_acceleration(), XYZ::new([0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_invalid_row() {
        let session = "ax,ay,az,gx,gy,gz\n0,0,one,0,0,0\n";
        assert!(matches!(
            CsvReplaySource::from_reader(session.as_bytes()),
            Err(PipelineError::SensorInit(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            CsvReplaySource::from_path("./does/not/exist.csv"),
            Err(PipelineError::SensorInit(_))
        ));
    }
}
