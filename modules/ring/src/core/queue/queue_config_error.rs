use core::fmt;

#[cfg(test)]
mod tests;

/// Errors that prevent a [`TickQueue`](super::TickQueue) from being constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueueConfigError {
  /// The logical capacity is zero, which makes full and empty indistinguishable.
  ZeroCapacity,
  /// The element type occupies no storage.
  ZeroSizedElement,
  /// The physical slot count (`capacity + 1`) does not fit in `usize`.
  CapacityOverflow {
    /// Requested logical capacity.
    capacity: usize,
  },
  /// The element store could not be allocated.
  AllocFailed {
    /// Number of slots that were requested.
    slots: usize,
  },
}

impl fmt::Display for QueueConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | QueueConfigError::ZeroCapacity => write!(f, "queue capacity must be at least 1"),
      | QueueConfigError::ZeroSizedElement => write!(f, "queue element type must not be zero-sized"),
      | QueueConfigError::CapacityOverflow { capacity } => {
        write!(f, "queue capacity {capacity} leaves no room for the spare slot")
      },
      | QueueConfigError::AllocFailed { slots } => write!(f, "failed to allocate {slots} queue slots"),
    }
  }
}

impl core::error::Error for QueueConfigError {}
