mod queue_settings;
mod tracing_step_observer;

pub use queue_settings::QueueSettings;
pub use tracing_step_observer::TracingStepObserver;
