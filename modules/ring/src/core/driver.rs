//! Tick numbering and step reporting around a [`TickQueue`](crate::core::queue::TickQueue).

mod noop_step_observer;
mod step_observer;
mod step_record;
mod tick_driver;

pub use noop_step_observer::NoopStepObserver;
pub use step_observer::StepObserver;
pub use step_record::StepRecord;
pub use tick_driver::TickDriver;
