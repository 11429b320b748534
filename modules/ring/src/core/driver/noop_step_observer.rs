use super::{StepObserver, StepRecord};

/// Observer that discards every notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoopStepObserver;

impl<T> StepObserver<T> for NoopStepObserver {
  fn on_step(&mut self, _record: &StepRecord<T>) {}
}
