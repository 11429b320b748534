use crate::core::queue::{QueueStatus, StepResult};

/// One committed step as seen by a [`StepObserver`](super::StepObserver).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepRecord<T> {
  tick:            u64,
  enqueue_request: bool,
  dequeue_request: bool,
  result:          StepResult<T>,
  status:          QueueStatus,
  len:             usize,
}

impl<T> StepRecord<T> {
  /// Creates a record.
  #[must_use]
  pub const fn new(
    tick: u64,
    enqueue_request: bool,
    dequeue_request: bool,
    result: StepResult<T>,
    status: QueueStatus,
    len: usize,
  ) -> Self {
    Self { tick, enqueue_request, dequeue_request, result, status, len }
  }

  /// Tick number, starting at 0.
  #[must_use]
  pub const fn tick(&self) -> u64 {
    self.tick
  }

  /// Whether an enqueue was requested.
  #[must_use]
  pub const fn enqueue_requested(&self) -> bool {
    self.enqueue_request
  }

  /// Whether a dequeue was requested.
  #[must_use]
  pub const fn dequeue_requested(&self) -> bool {
    self.dequeue_request
  }

  /// Outputs of the step.
  #[must_use]
  pub const fn result(&self) -> &StepResult<T> {
    &self.result
  }

  /// Full/empty flags after the commit.
  #[must_use]
  pub const fn status(&self) -> QueueStatus {
    self.status
  }

  /// Queue length after the commit.
  #[must_use]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Whether the queue was empty after the commit.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.status.empty
  }

  /// Whether neither request was raised.
  #[must_use]
  pub const fn is_idle(&self) -> bool {
    !self.enqueue_request && !self.dequeue_request
  }

  /// Whether an enqueue was requested but not granted.
  #[must_use]
  pub const fn enqueue_rejected(&self) -> bool {
    self.enqueue_request && !self.result.did_enqueue()
  }

  /// Whether a dequeue was requested but not granted.
  #[must_use]
  pub const fn dequeue_rejected(&self) -> bool {
    self.dequeue_request && !self.result.did_dequeue()
  }

  /// Consumes the record and returns the step outputs.
  #[must_use]
  pub fn into_result(self) -> StepResult<T> {
    self.result
  }
}
