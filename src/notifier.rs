use std::io::Write;

use tokio::sync::watch;
use tracing::{debug, info};

use crate::sequencer::ProgressSnapshot;

/// A playable completion cue. `rewind` then `play`, so a cue that is still
/// sounding restarts from the beginning instead of overlapping itself.
pub trait AudioCue: Send {
    fn rewind(&mut self);
    fn play(&mut self);
}

impl<C: AudioCue + ?Sized> AudioCue for Box<C> {
    fn rewind(&mut self) {
        (**self).rewind();
    }

    fn play(&mut self) {
        (**self).play();
    }
}

/// Terminal bell cue used by the CLI front-end.
#[derive(Debug, Default)]
pub struct TerminalChime;

impl AudioCue for TerminalChime {
    fn rewind(&mut self) {}

    fn play(&mut self) {
        print!("\x07");
        let _ = std::io::stdout().flush();
        debug!("completion chime played");
    }
}

/// No-op cue for quiet runs.
#[derive(Debug, Default)]
pub struct NullCue;

impl AudioCue for NullCue {
    fn rewind(&mut self) {}

    fn play(&mut self) {}
}

/// Fires the one-shot completion side effects on the false→true edge of the
/// done flag. `done` flips at most once per session, so the effects fire at
/// most once; were the flag ever re-toggled, the same rewind-and-play would
/// repeat on the next rising edge.
pub struct CompletionNotifier<C: AudioCue> {
    cue: C,
    previously_done: bool,
}

impl<C: AudioCue> CompletionNotifier<C> {
    pub fn new(cue: C) -> Self {
        Self {
            cue,
            previously_done: false,
        }
    }

    /// Feed one observation of the read model. Returns true when this
    /// observation fired the completion effects.
    pub fn observe(&mut self, snapshot: &ProgressSnapshot) -> bool {
        let rising_edge = snapshot.done && !self.previously_done;
        if rising_edge {
            self.cue.rewind();
            self.cue.play();
            info!(
                tracking_id = snapshot.tracking_id.as_deref(),
                "completion effects fired"
            );
        }
        self.previously_done = snapshot.done;
        rising_edge
    }

    /// Watch the read model until the publisher goes away, feeding every
    /// update through `observe`.
    pub async fn run(mut self, mut receiver: watch::Receiver<ProgressSnapshot>) {
        loop {
            let snapshot = receiver.borrow_and_update().clone();
            self.observe(&snapshot);
            if receiver.changed().await.is_err() {
                break;
            }
        }
    }
}
