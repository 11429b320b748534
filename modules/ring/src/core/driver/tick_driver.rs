use alloc::vec::Vec;

use super::{StepObserver, StepRecord};
use crate::core::queue::{StepRequest, StepResult, TickQueue};

#[cfg(test)]
mod tests;

/// Drives a [`TickQueue`] one numbered tick at a time and reports each step to an observer.
pub struct TickDriver<T, O> {
  queue:    TickQueue<T>,
  observer: O,
  tick:     u64,
}

impl<T, O> TickDriver<T, O>
where
  T: Clone + Default,
  O: StepObserver<T>,
{
  /// Creates a driver starting at tick 0.
  #[must_use]
  pub const fn new(queue: TickQueue<T>, observer: O) -> Self {
    Self { queue, observer, tick: 0 }
  }

  /// Applies `request` as the next tick.
  pub fn tick(&mut self, request: StepRequest<T>) -> StepResult<T> {
    self.apply(request).into_result()
  }

  /// Applies every request of `script` in order and returns the records.
  pub fn run<I>(&mut self, script: I) -> Vec<StepRecord<T>>
  where
    I: IntoIterator<Item = StepRequest<T>>, {
    script.into_iter().map(|request| self.apply(request)).collect()
  }

  /// Resets the queue. Tick numbering continues.
  pub fn reset(&mut self) {
    self.queue.reset();
    self.observer.on_reset(self.tick);
  }

  /// Number of the next tick to run.
  #[must_use]
  pub const fn current_tick(&self) -> u64 {
    self.tick
  }

  /// Returns the driven queue.
  #[must_use]
  pub const fn queue(&self) -> &TickQueue<T> {
    &self.queue
  }

  /// Returns the observer.
  #[must_use]
  pub const fn observer(&self) -> &O {
    &self.observer
  }

  /// Returns the queue and the observer.
  #[must_use]
  pub fn into_parts(self) -> (TickQueue<T>, O) {
    (self.queue, self.observer)
  }

  fn apply(&mut self, request: StepRequest<T>) -> StepRecord<T> {
    let enqueue_request = request.enqueue_requested();
    let dequeue_request = request.dequeue_requested();
    let result = self.queue.step(request);
    let record =
      StepRecord::new(self.tick, enqueue_request, dequeue_request, result, self.queue.status(), self.queue.len());
    self.tick = self.tick.saturating_add(1);
    self.observer.on_step(&record);
    record
  }
}
