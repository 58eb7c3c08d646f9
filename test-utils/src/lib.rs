//! Collaborators for exercising the pipeline without hardware or a real model.

pub mod classifier_stub;
pub mod csv_loader;
pub mod scripted_source;
pub mod sink_mock;

pub use classifier_stub::StubClassifier;
pub use scripted_source::{ScriptBuilder, ScriptedSource};
pub use sink_mock::SinkMock;
