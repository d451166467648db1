use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::sequencer::{
    DelaySchedule, ProgressSnapshot, SequencerError, SequencerEvent, SequencerState,
    StageSequencer,
};
use crate::stages::StageCatalog;

/// One run of the progress simulation, from `start` to completion or
/// teardown. Owns the driver task; dropping or stopping the session aborts
/// any pending transition so nothing mutates state after teardown.
pub struct Session {
    receiver: watch::Receiver<ProgressSnapshot>,
    driver: Option<JoinHandle<ProgressSnapshot>>,
}

impl Session {
    /// Validates the catalog, publishes the initial snapshot and spawns the
    /// driver task. The sequence then runs unattended to completion.
    pub fn start<S>(catalog: StageCatalog, schedule: S) -> Result<Self, SequencerError>
    where
        S: DelaySchedule + 'static,
    {
        let sequencer = StageSequencer::new(catalog)?;
        let (sender, receiver) = watch::channel(sequencer.snapshot());
        let driver = tokio::spawn(drive(sequencer, schedule, sender));
        Ok(Self {
            receiver,
            driver: Some(driver),
        })
    }

    /// A fresh observer handle on the read model.
    pub fn subscribe(&self) -> watch::Receiver<ProgressSnapshot> {
        self.receiver.clone()
    }

    /// The most recently published snapshot.
    pub fn snapshot(&self) -> ProgressSnapshot {
        self.receiver.borrow().clone()
    }

    /// Tears the session down. Any pending scheduled transition is cancelled
    /// and can never fire; calling this after completion is a no-op.
    pub fn stop(&mut self) {
        if let Some(driver) = self.driver.take() {
            driver.abort();
            debug!("session stopped, pending transition cancelled");
        }
    }

    /// Waits for the run to finish and returns the terminal snapshot. If the
    /// session was stopped early, returns the last published snapshot.
    pub async fn wait(mut self) -> ProgressSnapshot {
        if let Some(driver) = self.driver.take() {
            if let Ok(final_snapshot) = driver.await {
                return final_snapshot;
            }
        }
        let snapshot = self.receiver.borrow().clone();
        snapshot
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.stop();
    }
}

/// The single writer. Sleeps out each delay, feeds the elapsed event into
/// the state machine and publishes the new snapshot. Transitions are
/// strictly sequential; the next timer is armed only after the previous one
/// fired.
async fn drive<S: DelaySchedule>(
    mut sequencer: StageSequencer,
    mut schedule: S,
    sender: watch::Sender<ProgressSnapshot>,
) -> ProgressSnapshot {
    loop {
        let event = match sequencer.state() {
            SequencerState::Advancing => {
                tokio::time::sleep(schedule.stage_delay()).await;
                SequencerEvent::DelayElapsed
            }
            SequencerState::Finishing => {
                tokio::time::sleep(schedule.completion_delay()).await;
                SequencerEvent::CompletionElapsed
            }
            SequencerState::Done => break,
        };
        sequencer.handle_event(&event);
        // Send only fails when every receiver is gone; the session keeps one.
        let _ = sender.send(sequencer.snapshot());
    }
    sequencer.snapshot()
}
