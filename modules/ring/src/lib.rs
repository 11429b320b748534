#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_let_else)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::bool_comparison)]
#![deny(clippy::needless_bool)]
#![cfg_attr(not(test), no_std)]

//! Tick-driven bounded circular queue.
//!
//! The `core` layer is `no_std + alloc`: it holds the step transition itself, its configuration and
//! the harness that numbers ticks and reports them to an observer. The `std` layer adds the
//! `tracing` observer and serde-backed settings.

extern crate alloc;

/// `no_std` queue, configuration and driver.
pub mod core;
/// Integrations that require the standard library.
#[cfg(feature = "std")]
pub mod std;

pub use crate::core::{
  driver::{NoopStepObserver, StepObserver, StepRecord, TickDriver},
  queue::{
    QueueConfig, QueueConfigError, QueueCounters, QueueStatus, SharedTickQueue, StepRequest, StepResult, TickQueue,
    UnderflowPolicy,
  },
};
#[cfg(feature = "std")]
pub use crate::std::{QueueSettings, TracingStepObserver};
