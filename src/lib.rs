#![deny(missing_docs)]
#![cfg_attr(not(test), no_std)]

//! Facade crate for the tickring workspace.
//!
//! Re-exports the tick-driven circular queue from `tickring-ring-rs` so downstream crates depend on
//! a single package.

pub use tickring_ring_rs as ring;
pub use tickring_ring_rs::{
  NoopStepObserver, QueueConfig, QueueConfigError, QueueCounters, QueueStatus, SharedTickQueue, StepObserver, StepRecord,
  StepRequest, StepResult, TickDriver, TickQueue, UnderflowPolicy,
};
#[cfg(feature = "std")]
pub use tickring_ring_rs::{QueueSettings, TracingStepObserver};

#[cfg(test)]
mod tests;

/// Returns the crate version recorded in the package metadata.
#[must_use]
pub const fn crate_version() -> &'static str {
  env!("CARGO_PKG_VERSION")
}
