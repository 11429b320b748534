use alloc::format;

use super::QueueConfigError;

#[test]
fn display_zero_capacity() {
  assert_eq!(format!("{}", QueueConfigError::ZeroCapacity), "queue capacity must be at least 1");
}

#[test]
fn display_zero_sized_element() {
  assert_eq!(format!("{}", QueueConfigError::ZeroSizedElement), "queue element type must not be zero-sized");
}

#[test]
fn display_capacity_overflow_mentions_capacity() {
  let error = QueueConfigError::CapacityOverflow { capacity: usize::MAX };
  let rendered = format!("{error}");
  assert!(rendered.contains(&format!("{}", usize::MAX)));
  assert!(rendered.contains("spare slot"));
}

#[test]
fn display_alloc_failed_mentions_slots() {
  let error = QueueConfigError::AllocFailed { slots: 17 };
  assert_eq!(format!("{error}"), "failed to allocate 17 queue slots");
}

#[test]
fn works_as_core_error() {
  let error: &dyn core::error::Error = &QueueConfigError::ZeroCapacity;
  assert!(error.source().is_none());
}

#[test]
fn partial_eq_distinguishes_payloads() {
  assert_eq!(QueueConfigError::AllocFailed { slots: 2 }, QueueConfigError::AllocFailed { slots: 2 });
  assert_ne!(QueueConfigError::AllocFailed { slots: 2 }, QueueConfigError::AllocFailed { slots: 3 });
  assert_ne!(QueueConfigError::ZeroCapacity, QueueConfigError::ZeroSizedElement);
}
