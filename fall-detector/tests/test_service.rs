use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;

use common::constants::{N_CHANNELS, N_FEATURES, WINDOW_SAMPLES};
use common::SampleSource;
use fall_detector::sources::{CsvReplaySource, SimulatedSource, SimulationConfig};
use fall_detector::{
    listen_for_shutdown, run_acquisition, run_pipeline, Acquisition, LogisticModel, Phase,
    Pipeline, PipelineConfig, PipelineError, StopReason, TextReporter,
};
use test_utils::{ScriptBuilder, ScriptedSource, SinkMock, StubClassifier};

const RECORDED_SESSION: &str = "../test-utils/test_data/sensor_readings.csv";
const POLL_PERIOD: Duration = Duration::from_millis(1);

fn assert_close(a: f32, b: f32) {
    assert!((a - b).abs() < 1e-5, "{a} != {b}");
}

#[tokio::test]
async fn test_motion_triggers_one_window() {
    let config = PipelineConfig::default();
    let mut pipeline = Pipeline::new(&config, StubClassifier::constant(0.8)).unwrap();
    let mut source = ScriptBuilder::new()
        .acceleration([0.2, 0.2, 0.1])
        .acceleration([0.5, 0.5, 0.2])
        .pairs(WINDOW_SAMPLES, [0.0, 0.0, 1.0], [0.0, 0.0, 0.0])
        .build();
    let mut reporter = TextReporter::new(Vec::new());

    let (summary, reason) = run_pipeline(
        &mut pipeline,
        &mut source,
        &mut reporter,
        Arc::new(Notify::new()),
        POLL_PERIOD,
    )
    .await
    .unwrap();

    assert_eq!(reason, StopReason::SourceExhausted);
    assert_eq!(summary.windows_classified, 1);
    assert_eq!(*pipeline.phase(), Phase::Idle);

    let windows = pipeline.classifier().windows();
    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].len(), N_FEATURES);
    for slot in windows[0].chunks(N_CHANNELS) {
        for (value, expected) in slot.iter().zip([0.5, 0.5, 0.625, 0.5, 0.5, 0.5]) {
            assert_close(*value, expected);
        }
    }

    let output = String::from_utf8(reporter.into_inner()).unwrap();
    assert_eq!(output, "normal: 20.0000%\nfalldown: 80.0000%\n\n");
}

#[tokio::test]
async fn test_below_threshold_stays_idle() {
    let config = PipelineConfig::default();
    let mut pipeline = Pipeline::new(&config, StubClassifier::constant(0.8)).unwrap();
    let mut source = ScriptBuilder::new()
        .pairs(30, [0.2, 0.2, 0.1], [100.0, 0.0, 0.0])
        .build();
    let mut sink = SinkMock::new();

    let (summary, _) = run_pipeline(
        &mut pipeline,
        &mut source,
        &mut sink,
        Arc::new(Notify::new()),
        POLL_PERIOD,
    )
    .await
    .unwrap();

    assert_eq!(summary.windows_classified, 0);
    assert!(sink.results().is_empty());
    assert_eq!(pipeline.classifier().calls(), 0);
    // Gyroscope is never read while idle.
    assert_eq!(source.acceleration_reads(), 30);
    assert_eq!(source.angular_rate_reads(), 0);
}

#[tokio::test]
async fn test_recorded_session_replay() {
    let config = PipelineConfig {
        trigger_threshold_g: 2.0,
        ..PipelineConfig::default()
    };
    let mut pipeline = Pipeline::new(&config, StubClassifier::constant(0.25)).unwrap();
    let mut source = CsvReplaySource::from_path(RECORDED_SESSION).unwrap();
    assert_eq!(source.len(), 36);
    let mut sink = SinkMock::new();

    let (summary, reason) = run_pipeline(
        &mut pipeline,
        &mut source,
        &mut sink,
        Arc::new(Notify::new()),
        POLL_PERIOD,
    )
    .await
    .unwrap();

    assert_eq!(reason, StopReason::SourceExhausted);
    assert_eq!(summary.windows_classified, 1);
    assert_eq!(sink.results().len(), 1);
    assert_close(sink.results()[0].probability("normal").unwrap(), 75.0);

    // The impact reading only starts the window, collection begins with the next instant.
    let window = &pipeline.classifier().windows()[0];
    for (value, expected) in window[..N_CHANNELS]
        .iter()
        .zip([0.6125, 0.45, 0.5375, 0.5, 0.485, 0.505])
    {
        assert_close(*value, expected);
    }
}

#[tokio::test]
async fn test_consecutive_windows_have_distinct_ids() {
    let config = PipelineConfig::default();
    let mut pipeline = Pipeline::new(&config, StubClassifier::sequence(vec![Ok(0.1), Ok(0.9)]))
        .unwrap();
    let mut source = ScriptBuilder::new()
        .pairs(WINDOW_SAMPLES + 1, [1.5, 0.0, 0.0], [0.0, 0.0, 0.0])
        .pairs(WINDOW_SAMPLES + 1, [1.5, 0.0, 0.0], [0.0, 0.0, 0.0])
        .build();
    let mut sink = SinkMock::new();

    run_pipeline(
        &mut pipeline,
        &mut source,
        &mut sink,
        Arc::new(Notify::new()),
        POLL_PERIOD,
    )
    .await
    .unwrap();

    let results = sink.results();
    assert_eq!(results.len(), 2);
    assert_ne!(results[0].window_id(), results[1].window_id());
    assert_close(results[0].probability("falldown").unwrap(), 10.0);
    assert_close(results[1].probability("falldown").unwrap(), 90.0);
}

#[tokio::test]
async fn test_inference_failure_halts() {
    let config = PipelineConfig::default();
    let mut pipeline = Pipeline::new(&config, StubClassifier::failing("arena")).unwrap();
    let mut source = ScriptBuilder::new()
        .pairs(3 * WINDOW_SAMPLES, [0.0, 0.0, 1.5], [0.0, 0.0, 0.0])
        .build();
    let mut sink = SinkMock::new();

    let result = run_pipeline(
        &mut pipeline,
        &mut source,
        &mut sink,
        Arc::new(Notify::new()),
        POLL_PERIOD,
    )
    .await;

    let expected = PipelineError::Inference("arena".to_string());
    assert_eq!(result, Err(expected.clone()));
    assert!(sink.results().is_empty());
    assert_eq!(*pipeline.phase(), Phase::Halted(expected.clone()));
    assert_eq!(pipeline.classifier().calls(), 1);
    assert_eq!(pipeline.step(&mut source), Err(expected));
}

#[tokio::test]
async fn test_stalled_window_is_abandoned() {
    let config = PipelineConfig {
        max_stalled_polls: Some(3),
        ..PipelineConfig::default()
    };
    let mut pipeline = Pipeline::new(&config, StubClassifier::constant(0.5)).unwrap();
    let mut source = ScriptBuilder::new()
        .pairs(5, [0.0, 0.0, 1.5], [0.0, 0.0, 0.0])
        .acceleration([0.0, 0.0, 0.2])
        .silence(5)
        .build();
    let mut sink = SinkMock::new();

    let (summary, _) = run_pipeline(
        &mut pipeline,
        &mut source,
        &mut sink,
        Arc::new(Notify::new()),
        POLL_PERIOD,
    )
    .await
    .unwrap();

    assert_eq!(summary.windows_aborted, 1);
    assert_eq!(summary.windows_classified, 0);
    assert_eq!(pipeline.classifier().calls(), 0);
}

#[tokio::test]
async fn test_acquisition_log_replays() {
    let mut source = ScriptedSource::from_csv(RECORDED_SESSION).unwrap();
    let mut acquisition = Acquisition::new(Vec::new()).unwrap();

    let (summary, reason) = run_acquisition(
        &mut acquisition,
        &mut source,
        Arc::new(Notify::new()),
        POLL_PERIOD,
    )
    .await
    .unwrap();
    assert_eq!(reason, StopReason::SourceExhausted);
    assert_eq!(summary.rows_acquired, 36);

    let log = acquisition.into_inner().unwrap();
    let mut replay = CsvReplaySource::from_reader(log.as_slice()).unwrap();
    assert_eq!(replay.len(), 36);
    assert!(replay.acceleration_available());
    let first = replay.read_acceleration();
    assert_eq!(first.inner()[2], 0.971);
}

#[tokio::test]
async fn test_simulated_run_stops_on_request() {
    let config = PipelineConfig::default();
    let model = LogisticModel::from_file("./models/demo_model.json").unwrap();
    let mut pipeline = Pipeline::new(&config, model).unwrap();
    let mut source = SimulatedSource::new(SimulationConfig {
        impact_every: 50,
        ..SimulationConfig::default()
    })
    .unwrap();
    let mut reporter = TextReporter::new(Vec::new());

    let abort_signal = Arc::new(Notify::new());
    let handle = listen_for_shutdown(abort_signal.clone(), Some(300));

    let (summary, reason) = run_pipeline(
        &mut pipeline,
        &mut source,
        &mut reporter,
        abort_signal,
        POLL_PERIOD,
    )
    .await
    .unwrap();
    handle.await.unwrap();

    assert_eq!(reason, StopReason::Shutdown);
    let output = String::from_utf8(reporter.into_inner()).unwrap();
    assert_eq!(
        output.matches("falldown: ").count(),
        summary.windows_classified
    );
}
