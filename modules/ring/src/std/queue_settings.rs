//! Serde-facing settings that resolve into a validated [`QueueConfig`].


use serde::{Deserialize, Serialize};

use crate::core::queue::{QueueConfig, QueueConfigError, UnderflowPolicy};

/// External representation of [`QueueConfig`], suitable for any serde format.
///
/// Missing fields fall back to their defaults: capacity 1, no overwrite, [`UnderflowPolicy::Reject`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueueSettings {
  /// Logical capacity.
  pub capacity:         usize,
  /// Whether full-queue enqueues evict the oldest element.
  pub overwritable:     bool,
  /// Answer to a simultaneous enqueue and dequeue on an empty queue.
  pub underflow_policy: UnderflowPolicy,
}

impl QueueSettings {
  /// Resolves the settings into a configuration checked against element type `T`.
  ///
  /// # Errors
  ///
  /// Returns the [`QueueConfigError`] reported by [`QueueConfig::validate`].
  pub fn into_config_for<T>(self) -> Result<QueueConfig, QueueConfigError> {
    let config = QueueConfig::from(self);
    config.validate::<T>()?;
    Ok(config)
  }
}

impl Default for QueueSettings {
  fn default() -> Self {
    QueueConfig::default().into()
  }
}

impl From<QueueSettings> for QueueConfig {
  fn from(settings: QueueSettings) -> Self {
    QueueConfig::new(settings.capacity)
      .with_overwritable(settings.overwritable)
      .with_underflow_policy(settings.underflow_policy)
  }
}

impl From<QueueConfig> for QueueSettings {
  fn from(config: QueueConfig) -> Self {
    Self {
      capacity:         config.capacity(),
      overwritable:     config.overwritable(),
      underflow_policy: config.underflow_policy(),
    }
  }
}
