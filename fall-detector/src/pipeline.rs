//! Trigger / collect / classify state machine.
//!
//! [`Pipeline::step`] performs at most one unit of work per call: one trigger check, one
//! sample pair ingestion or one inference. It never waits; when the source has nothing to offer
//! it returns [`Step::Pending`] and the caller decides how to suspend.

use log::{debug, error, info, warn};
use uuid::Uuid;

use common::constants::WINDOW_SAMPLES;
use common::{ClassificationResult, Classifier, SampleSource};

use crate::classifier::ClassifierAdapter;
use crate::config::PipelineConfig;
use crate::errors::PipelineError;
use crate::trigger::TriggerDetector;
use crate::window::{Normalizer, WindowCollector};

/// Outcome of a single [`Pipeline::step`].
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// No reading the current phase needs was available.
    Pending,
    /// Acceleration checked while idle, below threshold.
    BelowThreshold,
    /// Significant motion detected, a new window started.
    Triggered,
    /// Sample pair stored at the given window slot.
    Collected(usize),
    /// Window classified, pipeline back to idle.
    Classified(ClassificationResult),
    /// Collection stalled for too long, partial window discarded.
    Aborted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    Collecting,
    Inferring,
    /// Terminal: holds the error that stopped the pipeline.
    Halted(PipelineError),
}

pub struct Pipeline<C: Classifier> {
    trigger: TriggerDetector,
    window: WindowCollector,
    classifier: ClassifierAdapter<C>,
    phase: Phase,
    window_id: Uuid,
    stalled_polls: u32,
    max_stalled_polls: Option<u32>,
    /// A reading of the current instant was consumed, so the next empty poll only means
    /// the instant is used up.
    instant_consumed: bool,
}

impl<C: Classifier> Pipeline<C> {
    /// Builds an idle pipeline. Returns ModelSchema error if the classifier input does not match
    /// the window size.
    pub fn new(config: &PipelineConfig, classifier: C) -> Result<Self, PipelineError> {
        config.validate()?;
        Ok(Self {
            trigger: TriggerDetector::new(config.trigger_threshold_g),
            window: WindowCollector::new(Normalizer::from_config(config)),
            classifier: ClassifierAdapter::new(classifier)?,
            phase: Phase::Idle,
            window_id: Uuid::nil(),
            stalled_polls: 0,
            max_stalled_polls: config.max_stalled_polls,
            instant_consumed: false,
        })
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Samples read in the current episode; `WINDOW_SAMPLES` while idle.
    pub fn samples_read(&self) -> usize {
        match self.phase {
            Phase::Collecting => self.window.filled(),
            _ => WINDOW_SAMPLES,
        }
    }

    /// Id of the window being collected, or of the last one if idle.
    pub fn window_id(&self) -> Uuid {
        self.window_id
    }

    pub fn classifier(&self) -> &C {
        self.classifier.classifier()
    }

    /// Advances the state machine by one unit of work.
    ///
    /// Once inference fails the pipeline is halted and every later call returns the same error.
    pub fn step<S: SampleSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<Step, PipelineError> {
        match &self.phase {
            Phase::Halted(e) => Err(e.clone()),
            Phase::Idle => Ok(self.wait_for_trigger(source)),
            Phase::Collecting => Ok(self.collect(source)),
            Phase::Inferring => self.infer(),
        }
    }

    fn wait_for_trigger<S: SampleSource + ?Sized>(&mut self, source: &mut S) -> Step {
        if !source.acceleration_available() {
            return Step::Pending;
        }
        let acceleration = source.read_acceleration();
        if !self.trigger.check_trigger(&acceleration) {
            return Step::BelowThreshold;
        }
        self.window.reset();
        self.window_id = Uuid::new_v4();
        self.stalled_polls = 0;
        self.instant_consumed = true;
        self.phase = Phase::Collecting;
        info!(
            "Significant motion ({:.3} G), collecting window {}",
            acceleration.l1_norm(),
            self.window_id
        );
        Step::Triggered
    }

    fn collect<S: SampleSource + ?Sized>(&mut self, source: &mut S) -> Step {
        // Both channels must come from the same instant.
        if !(source.acceleration_available() && source.angular_rate_available()) {
            return self.stall();
        }
        let acceleration = source.read_acceleration();
        let angular_rate = source.read_angular_rate();
        self.stalled_polls = 0;
        self.instant_consumed = true;
        match self.window.push(&acceleration, &angular_rate) {
            Some(index) => {
                if self.window.is_complete() {
                    debug!("Window {} complete", self.window_id);
                    self.phase = Phase::Inferring;
                }
                Step::Collected(index)
            }
            None => {
                self.phase = Phase::Inferring;
                Step::Pending
            }
        }
    }

    /// Counts instants that brought no synchronized pair.
    fn stall(&mut self) -> Step {
        if self.instant_consumed {
            self.instant_consumed = false;
            return Step::Pending;
        }
        self.stalled_polls += 1;
        match self.max_stalled_polls {
            Some(max) if self.stalled_polls >= max => {
                warn!(
                    "No synchronized readings for {} polls, discarding window {} with {} samples",
                    self.stalled_polls,
                    self.window_id,
                    self.window.filled()
                );
                self.window.reset();
                self.stalled_polls = 0;
                self.phase = Phase::Idle;
                Step::Aborted
            }
            _ => Step::Pending,
        }
    }

    fn infer(&mut self) -> Result<Step, PipelineError> {
        let Some(features) = self.window.features() else {
            return Err(self.halt(PipelineError::Other(format!(
                "window {} handed to classifier with {} samples",
                self.window_id,
                self.window.filled()
            ))));
        };
        match self.classifier.classify(self.window_id, features) {
            Ok(result) => {
                self.window.reset();
                self.phase = Phase::Idle;
                Ok(Step::Classified(result))
            }
            Err(e) => Err(self.halt(PipelineError::from(e))),
        }
    }

    fn halt(&mut self, e: PipelineError) -> PipelineError {
        error!("Pipeline halted: {}", e);
        self.phase = Phase::Halted(e.clone());
        e
    }
}
