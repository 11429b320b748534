/// Outputs produced by one [`TickQueue::step`](super::TickQueue::step).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepResult<T> {
  output:         T,
  did_enqueue:    bool,
  did_dequeue:    bool,
  evicted_oldest: bool,
}

impl<T> StepResult<T> {
  pub(crate) const fn new(output: T, did_enqueue: bool, did_dequeue: bool, evicted_oldest: bool) -> Self {
    Self { output, did_enqueue, did_dequeue, evicted_oldest }
  }

  /// Returns the output element.
  ///
  /// Holds the dequeued element when [`did_dequeue`](Self::did_dequeue) is set and `T::default()`
  /// otherwise.
  #[must_use]
  pub const fn output(&self) -> &T {
    &self.output
  }

  /// Returns the dequeued element, or `None` when no dequeue happened on this tick.
  #[must_use]
  pub const fn dequeued(&self) -> Option<&T> {
    if self.did_dequeue { Some(&self.output) } else { None }
  }

  /// Consumes the result and returns the dequeued element, if any.
  #[must_use]
  pub fn into_dequeued(self) -> Option<T> {
    if self.did_dequeue { Some(self.output) } else { None }
  }

  /// Returns whether the input element was stored.
  #[must_use]
  pub const fn did_enqueue(&self) -> bool {
    self.did_enqueue
  }

  /// Returns whether an element was removed from the head.
  #[must_use]
  pub const fn did_dequeue(&self) -> bool {
    self.did_dequeue
  }

  /// Returns whether an overwriting enqueue discarded the oldest element.
  #[must_use]
  pub const fn evicted_oldest(&self) -> bool {
    self.evicted_oldest
  }
}
