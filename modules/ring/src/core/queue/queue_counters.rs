/// Lifetime statistics of a [`TickQueue`](super::TickQueue).
///
/// Counters saturate instead of wrapping and survive [`TickQueue::reset`](super::TickQueue::reset).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueueCounters {
  steps:             u64,
  enqueued:          u64,
  dequeued:          u64,
  rejected_enqueues: u64,
  rejected_dequeues: u64,
  evicted:           u64,
  resets:            u64,
}

impl QueueCounters {
  /// Number of steps applied.
  #[must_use]
  pub const fn steps(&self) -> u64 {
    self.steps
  }

  /// Number of accepted enqueues.
  #[must_use]
  pub const fn enqueued(&self) -> u64 {
    self.enqueued
  }

  /// Number of accepted dequeues.
  #[must_use]
  pub const fn dequeued(&self) -> u64 {
    self.dequeued
  }

  /// Number of enqueue requests that were not granted.
  #[must_use]
  pub const fn rejected_enqueues(&self) -> u64 {
    self.rejected_enqueues
  }

  /// Number of dequeue requests that were not granted.
  #[must_use]
  pub const fn rejected_dequeues(&self) -> u64 {
    self.rejected_dequeues
  }

  /// Number of elements discarded by overwriting enqueues.
  #[must_use]
  pub const fn evicted(&self) -> u64 {
    self.evicted
  }

  /// Number of explicit resets.
  #[must_use]
  pub const fn resets(&self) -> u64 {
    self.resets
  }

  pub(crate) const fn record_step(
    &mut self,
    enqueue_request: bool,
    dequeue_request: bool,
    did_enqueue: bool,
    did_dequeue: bool,
    evicted: bool,
  ) {
    self.steps = self.steps.saturating_add(1);
    self.enqueued = self.enqueued.saturating_add(did_enqueue as u64);
    self.dequeued = self.dequeued.saturating_add(did_dequeue as u64);
    self.rejected_enqueues = self.rejected_enqueues.saturating_add((enqueue_request && !did_enqueue) as u64);
    self.rejected_dequeues = self.rejected_dequeues.saturating_add((dequeue_request && !did_dequeue) as u64);
    self.evicted = self.evicted.saturating_add(evicted as u64);
  }

  pub(crate) const fn record_reset(&mut self) {
    self.resets = self.resets.saturating_add(1);
  }
}
