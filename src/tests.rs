use super::{QueueConfig, StepRequest, TickQueue, crate_version};

#[test]
fn version_matches_package_metadata() {
  assert_eq!(crate_version(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn facade_reexports_the_queue() {
  let mut queue = TickQueue::new(QueueConfig::new(1)).unwrap();
  assert!(queue.step(StepRequest::enqueue(3_u8)).did_enqueue());
  assert!(queue.status().full);
}
