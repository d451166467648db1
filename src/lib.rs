// Zeal Deploy Library - Simulated Deployment Progress Engine
// This exposes the core components for testing and integration

pub mod config;
pub mod notifier;
pub mod render;
pub mod sequencer;
pub mod session;
pub mod stages;
pub mod telemetry;

// Re-export key types for easy access
pub use config::{AudioConfig, ObservabilityConfig, TimingConfig, ZealDeployConfig};
pub use notifier::{AudioCue, CompletionNotifier, NullCue, TerminalChime};
pub use sequencer::{
    DelaySchedule, FixedDelays, ProgressSnapshot, RandomizedDelays, SequencerError,
    SequencerEvent, SequencerState, StageSequencer,
};
pub use session::Session;
pub use stages::{default_catalog, Stage, StageCatalog};
pub use telemetry::init_telemetry;
