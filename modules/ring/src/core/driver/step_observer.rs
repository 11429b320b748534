use super::StepRecord;

/// Receives every step applied by a [`TickDriver`](super::TickDriver).
pub trait StepObserver<T> {
  /// Called after a step has been committed.
  fn on_step(&mut self, record: &StepRecord<T>);

  /// Called after the queue has been reset; `tick` is the number of the next tick to run.
  fn on_reset(&mut self, _tick: u64) {}
}

impl<T, O: StepObserver<T> + ?Sized> StepObserver<T> for &mut O {
  fn on_step(&mut self, record: &StepRecord<T>) {
    (**self).on_step(record);
  }

  fn on_reset(&mut self, tick: u64) {
    (**self).on_reset(tick);
  }
}
