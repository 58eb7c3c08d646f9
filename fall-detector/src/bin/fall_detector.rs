use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use log::{error, info};
use tokio::sync::Notify;

use common::SampleSource;
use fall_detector::sources::{CsvReplaySource, SimulatedSource, SimulationConfig};
use fall_detector::{
    listen_for_shutdown, run_acquisition, run_pipeline, Acquisition, LogisticModel, Mode,
    Pipeline, PipelineConfig, PipelineError, RunSummary, StopReason, TextReporter,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Classify,
    Acquire,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SourceArg {
    Simulated,
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "fall-detector")]
#[command(about = "Motion-triggered fall classification from 6-axis IMU readings", long_about = None)]
struct Cli {
    /// JSON configuration file; defaults are used when omitted
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Overrides the mode from the configuration file
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    #[arg(long, value_enum, default_value = "simulated")]
    source: SourceArg,

    /// Recorded session to replay with `--source csv`
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Logistic model description, required to classify
    #[arg(long, value_name = "PATH")]
    model: Option<PathBuf>,

    /// Acquisition output file; stdout when omitted
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Stop after this many milliseconds instead of waiting for Ctrl+C
    #[arg(long, value_name = "MS")]
    run_for_millis: Option<u64>,

    /// Seed of the simulated sensor
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn load_config(cli: &Cli) -> Result<PipelineConfig, PipelineError> {
    let mut config = match &cli.config {
        Some(path) => PipelineConfig::from_file(path)?,
        None => PipelineConfig::default(),
    };
    if let Some(mode) = cli.mode {
        config.mode = match mode {
            ModeArg::Classify => Mode::Classify,
            ModeArg::Acquire => Mode::DataAcquisition,
        };
    }
    Ok(config)
}

fn open_source(cli: &Cli) -> Result<Box<dyn SampleSource>, PipelineError> {
    match cli.source {
        SourceArg::Simulated => {
            let config = SimulationConfig {
                seed: cli.seed,
                ..SimulationConfig::default()
            };
            Ok(Box::new(SimulatedSource::new(config)?))
        }
        SourceArg::Csv => {
            let path = cli.csv.as_ref().ok_or_else(|| {
                PipelineError::SensorInit("--csv is required with --source csv".to_string())
            })?;
            Ok(Box::new(CsvReplaySource::from_path(path)?))
        }
    }
}

async fn run(cli: Cli) -> Result<(RunSummary, StopReason), PipelineError> {
    let config = load_config(&cli)?;
    let mut source = open_source(&cli)?;

    let abort_signal = Arc::new(Notify::new());
    listen_for_shutdown(Arc::clone(&abort_signal), cli.run_for_millis);

    match config.mode {
        Mode::Classify => {
            let path = cli.model.as_ref().ok_or_else(|| {
                PipelineError::ModelSchema("--model is required to classify".to_string())
            })?;
            let model = LogisticModel::from_file(path)?;
            let mut pipeline = Pipeline::new(&config, model)?;
            let mut reporter = TextReporter::with_precision(io::stdout(), config.report_precision);
            info!("Init system successfully");
            run_pipeline(
                &mut pipeline,
                &mut *source,
                &mut reporter,
                abort_signal,
                config.poll_period(),
            )
            .await
        }
        Mode::DataAcquisition => {
            let out: Box<dyn Write> = match &cli.output {
                Some(path) => Box::new(BufWriter::new(File::create(path)?)),
                None => Box::new(io::stdout()),
            };
            let mut acquisition = Acquisition::new(out)?;
            run_acquisition(
                &mut acquisition,
                &mut *source,
                abort_signal,
                config.acquisition_delay(),
            )
            .await
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli).await {
        Ok((summary, reason)) => {
            info!("Stopped ({:?}): {:?}", reason, summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
