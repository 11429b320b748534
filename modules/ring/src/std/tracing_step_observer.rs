//! `tracing`-backed step observer for standard environments.


use tracing::{Level, event};

use crate::core::driver::{StepObserver, StepRecord};

/// Step observer that forwards every committed step to the `tracing` crate.
///
/// Idle ticks are reported at `TRACE`, ordinary traffic and starved dequeues at `DEBUG`,
/// evictions and resets at `INFO`, and rejected enqueues (backpressure) at `WARN`. Events more
/// verbose than the configured threshold are not emitted.
#[derive(Clone, Copy, Debug)]
pub struct TracingStepObserver {
  threshold: Level,
}

impl TracingStepObserver {
  /// Target name used in emitted events.
  pub const DEFAULT_TARGET: &'static str = "tickring::queue::step";

  /// Creates an observer that emits events at `threshold` or more severe.
  #[must_use]
  pub const fn new(threshold: Level) -> Self {
    Self { threshold }
  }

  /// Returns the least severe level emitted.
  #[must_use]
  pub const fn threshold(&self) -> Level {
    self.threshold
  }

  /// Returns the level a record is reported at.
  #[must_use]
  pub const fn level_for<T>(record: &StepRecord<T>) -> Level {
    if record.enqueue_rejected() {
      Level::WARN
    } else if record.result().evicted_oldest() {
      Level::INFO
    } else if record.is_idle() {
      Level::TRACE
    } else {
      Level::DEBUG
    }
  }

  fn enabled(&self, level: Level) -> bool {
    level <= self.threshold
  }
}

impl Default for TracingStepObserver {
  fn default() -> Self {
    Self::new(Level::DEBUG)
  }
}

impl<T> StepObserver<T> for TracingStepObserver {
  fn on_step(&mut self, record: &StepRecord<T>) {
    let level = Self::level_for(record);
    if !self.enabled(level) {
      return;
    }

    let tick = record.tick();
    let result = record.result();
    let (did_enqueue, did_dequeue, evicted_oldest) =
      (result.did_enqueue(), result.did_dequeue(), result.evicted_oldest());
    let status = record.status();
    let len = record.len() as u64;

    if level == Level::WARN {
      event!(
        target: TracingStepObserver::DEFAULT_TARGET,
        Level::WARN,
        tick,
        did_enqueue,
        did_dequeue,
        evicted_oldest,
        len,
        full = status.full,
        empty = status.empty,
        "enqueue rejected"
      );
    } else if level == Level::INFO {
      event!(
        target: TracingStepObserver::DEFAULT_TARGET,
        Level::INFO,
        tick,
        did_enqueue,
        did_dequeue,
        evicted_oldest,
        len,
        full = status.full,
        empty = status.empty,
        "oldest element evicted"
      );
    } else if level == Level::TRACE {
      event!(
        target: TracingStepObserver::DEFAULT_TARGET,
        Level::TRACE,
        tick,
        did_enqueue,
        did_dequeue,
        evicted_oldest,
        len,
        full = status.full,
        empty = status.empty,
        "idle"
      );
    } else {
      event!(
        target: TracingStepObserver::DEFAULT_TARGET,
        Level::DEBUG,
        tick,
        did_enqueue,
        did_dequeue,
        evicted_oldest,
        len,
        full = status.full,
        empty = status.empty,
        "step"
      );
    }
  }

  fn on_reset(&mut self, tick: u64) {
    if self.enabled(Level::INFO) {
      event!(target: TracingStepObserver::DEFAULT_TARGET, Level::INFO, tick, "queue reset");
    }
  }
}
