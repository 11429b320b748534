//! Bounded circular queue advanced one tick at a time.

mod queue_config;
mod queue_config_error;
mod queue_counters;
mod queue_status;
mod shared_tick_queue;
mod step_request;
mod step_result;
mod tick_queue;
mod underflow_policy;

pub use queue_config::QueueConfig;
pub use queue_config_error::QueueConfigError;
pub use queue_counters::QueueCounters;
pub use queue_status::QueueStatus;
pub use shared_tick_queue::SharedTickQueue;
pub use step_request::StepRequest;
pub use step_result::StepResult;
pub use tick_queue::TickQueue;
pub use underflow_policy::UnderflowPolicy;
