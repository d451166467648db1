//! Completion notifier integration tests
//!
//! Attach a notifier to a live session and verify the one-shot audio
//! contract against the real read-model stream.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use zeal_deploy::{default_catalog, AudioCue, CompletionNotifier, FixedDelays, Session};

struct CountingCue {
    plays: Arc<AtomicUsize>,
}

impl AudioCue for CountingCue {
    fn rewind(&mut self) {}

    fn play(&mut self) {
        self.plays.fetch_add(1, Ordering::SeqCst);
    }
}

#[tokio::test(start_paused = true)]
async fn audio_cue_fires_exactly_once_per_session() {
    let session = Session::start(default_catalog(), FixedDelays::from_millis(10, 20)).unwrap();

    let plays = Arc::new(AtomicUsize::new(0));
    let notifier = CompletionNotifier::new(CountingCue {
        plays: plays.clone(),
    });
    let watcher = tokio::spawn(notifier.run(session.subscribe()));

    let final_snapshot = session.wait().await;
    watcher.await.unwrap();

    assert!(final_snapshot.done);
    assert_eq!(plays.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn no_cue_when_session_torn_down_early() {
    let mut session =
        Session::start(default_catalog(), FixedDelays::from_millis(100, 100)).unwrap();

    let plays = Arc::new(AtomicUsize::new(0));
    let notifier = CompletionNotifier::new(CountingCue {
        plays: plays.clone(),
    });
    let watcher = tokio::spawn(notifier.run(session.subscribe()));

    let mut receiver = session.subscribe();
    while receiver.borrow_and_update().current_index < 3 {
        receiver.changed().await.unwrap();
    }
    session.stop();
    drop(session);

    // The publisher is gone; the watcher drains and exits without firing.
    watcher.await.unwrap();
    assert_eq!(plays.load(Ordering::SeqCst), 0);
}
