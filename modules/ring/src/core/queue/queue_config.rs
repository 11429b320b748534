//! Construction parameters for [`TickQueue`](super::TickQueue).

use core::mem;

use super::{QueueConfigError, UnderflowPolicy};

#[cfg(test)]
mod tests;

/// Construction parameters for a [`TickQueue`](super::TickQueue).
///
/// Every field is fixed once the queue is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct QueueConfig {
  capacity:         usize,
  overwritable:     bool,
  underflow_policy: UnderflowPolicy,
}

impl QueueConfig {
  /// Creates a non-overwritable configuration with the given logical capacity.
  #[must_use]
  pub const fn new(capacity: usize) -> Self {
    Self { capacity, overwritable: false, underflow_policy: UnderflowPolicy::Reject }
  }

  /// Overrides whether an enqueue into a full queue evicts the oldest element.
  #[must_use]
  pub const fn with_overwritable(mut self, overwritable: bool) -> Self {
    self.overwritable = overwritable;
    self
  }

  /// Overrides how an empty queue answers a simultaneous enqueue and dequeue.
  #[must_use]
  pub const fn with_underflow_policy(mut self, underflow_policy: UnderflowPolicy) -> Self {
    self.underflow_policy = underflow_policy;
    self
  }

  /// Returns the logical capacity.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.capacity
  }

  /// Returns whether full-queue enqueues evict the oldest element.
  #[must_use]
  pub const fn overwritable(&self) -> bool {
    self.overwritable
  }

  /// Returns the configured underflow policy.
  #[must_use]
  pub const fn underflow_policy(&self) -> UnderflowPolicy {
    self.underflow_policy
  }

  /// Checks the configuration against the element type `T` and returns the physical slot count.
  ///
  /// # Errors
  ///
  /// Returns [`QueueConfigError::ZeroCapacity`] when the capacity is zero,
  /// [`QueueConfigError::ZeroSizedElement`] when `T` has no size, and
  /// [`QueueConfigError::CapacityOverflow`] when `capacity + 1` overflows.
  pub const fn validate<T>(&self) -> Result<usize, QueueConfigError> {
    if self.capacity == 0 {
      return Err(QueueConfigError::ZeroCapacity);
    }
    if mem::size_of::<T>() == 0 {
      return Err(QueueConfigError::ZeroSizedElement);
    }
    match self.capacity.checked_add(1) {
      | Some(slots) => Ok(slots),
      | None => Err(QueueConfigError::CapacityOverflow { capacity: self.capacity }),
    }
  }
}

impl Default for QueueConfig {
  fn default() -> Self {
    Self::new(1)
  }
}
