use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use super::tracking;
use crate::stages::{Stage, StageCatalog};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerEvent {
    /// A randomized stage delay ran out.
    DelayElapsed,
    /// The fixed completion hold on the last stage ran out.
    CompletionElapsed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    /// Walking stages forward on randomized delays.
    Advancing,
    /// Sitting on the last stage, waiting out the completion hold.
    Finishing,
    /// Absorbing terminal state; every further event is ignored.
    Done,
}

#[derive(Debug, Error)]
pub enum SequencerError {
    #[error("stage catalog is empty; a session needs at least one stage")]
    EmptyCatalog,
}

/// Read model published to observers after every transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub current_index: usize,
    pub done: bool,
    pub tracking_id: Option<String>,
}

impl ProgressSnapshot {
    /// The celebratory overlay mounts exactly while the terminal flag holds.
    pub fn overlay_visible(&self) -> bool {
        self.done
    }
}

/// The stage-progression state machine. Pure state plus transitions; the
/// session's driver task supplies the timing by feeding elapsed events.
///
/// Invariants:
/// - `current_index` is monotonically non-decreasing, +1 per transition.
/// - `done` flips false→true at most once and never reverts.
/// - `tracking_id` is set if and only if `done` is true, computed once.
#[derive(Debug)]
pub struct StageSequencer {
    catalog: StageCatalog,
    state: SequencerState,
    current_index: usize,
    done: bool,
    tracking_id: Option<String>,
}

impl StageSequencer {
    pub fn new(catalog: StageCatalog) -> Result<Self, SequencerError> {
        if catalog.is_empty() {
            return Err(SequencerError::EmptyCatalog);
        }
        // A single-stage catalog starts directly on its last stage.
        let state = if catalog.len() == 1 {
            SequencerState::Finishing
        } else {
            SequencerState::Advancing
        };
        Ok(Self {
            catalog,
            state,
            current_index: 0,
            done: false,
            tracking_id: None,
        })
    }

    pub fn handle_event(&mut self, event: &SequencerEvent) {
        match (self.state, event) {
            (SequencerState::Advancing, SequencerEvent::DelayElapsed) => {
                self.current_index += 1;
                debug!(
                    index = self.current_index,
                    stage = %self.current_stage().label,
                    "advanced to next stage"
                );
                if self.current_index == self.catalog.last_index() {
                    self.state = SequencerState::Finishing;
                }
            }
            (SequencerState::Finishing, SequencerEvent::CompletionElapsed) => {
                self.done = true;
                self.tracking_id = Some(tracking::generate_tracking_id());
                self.state = SequencerState::Done;
                info!(
                    tracking_id = self.tracking_id.as_deref(),
                    "deployment simulation complete"
                );
            }
            // Everything else is a stale or out-of-order timer; ignore it.
            _ => {}
        }
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn tracking_id(&self) -> Option<&str> {
        self.tracking_id.as_deref()
    }

    pub fn current_stage(&self) -> &Stage {
        // current_index never leaves [0, last_index] and the catalog was
        // checked non-empty at construction.
        self.catalog
            .get(self.current_index)
            .unwrap_or_else(|| unreachable!("current_index within catalog bounds"))
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            current_index: self.current_index,
            done: self.done,
            tracking_id: self.tracking_id.clone(),
        }
    }
}
