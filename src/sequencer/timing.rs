use rand::Rng;
use std::time::Duration;

pub const DEFAULT_STAGE_DELAY_BASE_MS: u64 = 1100;
pub const DEFAULT_STAGE_DELAY_SPREAD_MS: u64 = 800;
pub const DEFAULT_COMPLETION_DELAY_MS: u64 = 1200;

/// Source of the waits between transitions. Injected into the session so
/// tests can substitute deterministic durations for real randomness.
pub trait DelaySchedule: Send {
    /// Wait before the next stage-advance transition. Drawn fresh for every
    /// transition; implementations may randomize.
    fn stage_delay(&mut self) -> Duration;

    /// Fixed hold on the last stage before the done flip.
    fn completion_delay(&mut self) -> Duration;
}

/// Production schedule: each stage delay drawn uniformly from
/// `[base, base + spread)`, completion hold fixed.
#[derive(Debug, Clone)]
pub struct RandomizedDelays {
    base: Duration,
    spread: Duration,
    completion: Duration,
}

impl RandomizedDelays {
    pub fn new(base: Duration, spread: Duration, completion: Duration) -> Self {
        Self {
            base,
            spread,
            completion,
        }
    }

    pub fn from_millis(base_ms: u64, spread_ms: u64, completion_ms: u64) -> Self {
        Self::new(
            Duration::from_millis(base_ms),
            Duration::from_millis(spread_ms),
            Duration::from_millis(completion_ms),
        )
    }
}

impl Default for RandomizedDelays {
    fn default() -> Self {
        Self::from_millis(
            DEFAULT_STAGE_DELAY_BASE_MS,
            DEFAULT_STAGE_DELAY_SPREAD_MS,
            DEFAULT_COMPLETION_DELAY_MS,
        )
    }
}

impl DelaySchedule for RandomizedDelays {
    fn stage_delay(&mut self) -> Duration {
        let spread_ms = self.spread.as_millis() as u64;
        let jitter = if spread_ms == 0 {
            Duration::ZERO
        } else {
            Duration::from_millis(rand::rng().random_range(0..spread_ms))
        };
        self.base + jitter
    }

    fn completion_delay(&mut self) -> Duration {
        self.completion
    }
}

/// Deterministic schedule for tests and dry runs.
#[derive(Debug, Clone)]
pub struct FixedDelays {
    stage: Duration,
    completion: Duration,
}

impl FixedDelays {
    pub fn new(stage: Duration, completion: Duration) -> Self {
        Self { stage, completion }
    }

    pub fn from_millis(stage_ms: u64, completion_ms: u64) -> Self {
        Self::new(
            Duration::from_millis(stage_ms),
            Duration::from_millis(completion_ms),
        )
    }
}

impl DelaySchedule for FixedDelays {
    fn stage_delay(&mut self) -> Duration {
        self.stage
    }

    fn completion_delay(&mut self) -> Duration {
        self.completion
    }
}
