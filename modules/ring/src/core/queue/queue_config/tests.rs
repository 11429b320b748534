use super::*;

#[test]
fn new_defaults_to_rejecting_policies() {
  let config = QueueConfig::new(8);
  assert_eq!(config.capacity(), 8);
  assert!(!config.overwritable());
  assert_eq!(config.underflow_policy(), UnderflowPolicy::Reject);
}

#[test]
fn builder_overrides_fields() {
  let config = QueueConfig::new(3).with_overwritable(true).with_underflow_policy(UnderflowPolicy::PassStale);
  assert!(config.overwritable());
  assert_eq!(config.underflow_policy(), UnderflowPolicy::PassStale);
  assert_eq!(config.capacity(), 3);
}

#[test]
fn validate_returns_physical_slot_count() {
  assert_eq!(QueueConfig::new(5).validate::<u32>(), Ok(6));
  assert_eq!(QueueConfig::new(1).validate::<u8>(), Ok(2));
}

#[test]
fn validate_rejects_zero_capacity() {
  assert_eq!(QueueConfig::new(0).validate::<u32>(), Err(QueueConfigError::ZeroCapacity));
}

#[test]
fn validate_rejects_zero_sized_elements() {
  assert_eq!(QueueConfig::new(4).validate::<()>(), Err(QueueConfigError::ZeroSizedElement));
}

#[test]
fn validate_rejects_capacity_overflow() {
  assert_eq!(
    QueueConfig::new(usize::MAX).validate::<u8>(),
    Err(QueueConfigError::CapacityOverflow { capacity: usize::MAX })
  );
}

#[test]
fn zero_capacity_is_reported_before_element_size() {
  assert_eq!(QueueConfig::new(0).validate::<()>(), Err(QueueConfigError::ZeroCapacity));
}

#[test]
fn default_is_single_slot_non_overwritable() {
  let config = QueueConfig::default();
  assert_eq!(config.capacity(), 1);
  assert!(!config.overwritable());
}
