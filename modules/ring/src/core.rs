/// Harness that numbers ticks and reports each step to an observer.
pub mod driver;
/// The bounded circular queue and its step transition.
pub mod queue;
