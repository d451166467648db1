//! Stage sequencer: the progression state machine, the delay schedule it is
//! driven by, and tracking-identifier generation.

pub mod state_machine;
pub mod timing;
pub mod tracking;

pub use state_machine::{
    ProgressSnapshot, SequencerError, SequencerEvent, SequencerState, StageSequencer,
};
pub use timing::{
    DelaySchedule, FixedDelays, RandomizedDelays, DEFAULT_COMPLETION_DELAY_MS,
    DEFAULT_STAGE_DELAY_BASE_MS, DEFAULT_STAGE_DELAY_SPREAD_MS,
};
pub use tracking::{generate_tracking_id, TRACKING_PREFIX};
