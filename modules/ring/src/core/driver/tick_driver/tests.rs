use alloc::{vec, vec::Vec};

use super::*;
use crate::core::{
  driver::NoopStepObserver,
  queue::{QueueConfig, UnderflowPolicy},
};

#[derive(Default)]
struct RecordingObserver {
  records: Vec<StepRecord<char>>,
  resets:  Vec<u64>,
}

impl StepObserver<char> for RecordingObserver {
  fn on_step(&mut self, record: &StepRecord<char>) {
    self.records.push(record.clone());
  }

  fn on_reset(&mut self, tick: u64) {
    self.resets.push(tick);
  }
}

fn driver(capacity: usize) -> TickDriver<char, RecordingObserver> {
  TickDriver::new(TickQueue::with_capacity(capacity).unwrap(), RecordingObserver::default())
}

#[test]
fn ticks_are_numbered_from_zero() {
  let mut driver = driver(2);
  driver.tick(StepRequest::enqueue('a'));
  driver.tick(StepRequest::idle());
  driver.tick(StepRequest::dequeue());

  let ticks: Vec<u64> = driver.observer().records.iter().map(StepRecord::tick).collect();
  assert_eq!(ticks, vec![0, 1, 2]);
  assert_eq!(driver.current_tick(), 3);
}

#[test]
fn run_returns_one_record_per_request() {
  let mut driver = driver(5);
  let script = "abcde".chars().map(StepRequest::enqueue).chain([StepRequest::enqueue_and_dequeue('f')]);

  let records = driver.run(script);

  assert_eq!(records.len(), 6);
  let last = records.last().unwrap();
  assert_eq!(last.result().dequeued(), Some(&'a'));
  assert!(last.result().did_enqueue());
  assert!(last.status().full);
  assert_eq!(last.len(), 5);
  assert_eq!(driver.queue().contents(), vec!['b', 'c', 'd', 'e', 'f']);
  assert_eq!(driver.observer().records, records);
}

#[test]
fn records_flag_rejections() {
  let mut driver = driver(1);
  let records = driver.run([StepRequest::dequeue(), StepRequest::enqueue('a'), StepRequest::enqueue('b')]);

  assert!(records[0].dequeue_rejected());
  assert!(!records[0].enqueue_rejected());
  assert!(records[0].is_empty());
  assert!(!records[1].enqueue_rejected());
  assert!(records[2].enqueue_rejected());
  assert!(records[2].status().full);
}

#[test]
fn idle_records_are_marked() {
  let mut driver = driver(1);
  let records = driver.run([StepRequest::idle()]);
  assert!(records[0].is_idle());
  assert!(!records[0].enqueue_requested());
  assert!(!records[0].dequeue_requested());
}

#[test]
fn reset_notifies_observer_and_keeps_tick_numbering() {
  let mut driver = driver(2);
  driver.run([StepRequest::enqueue('a'), StepRequest::enqueue('b')]);

  driver.reset();
  let result = driver.tick(StepRequest::dequeue());

  assert!(!result.did_dequeue());
  assert!(driver.queue().is_empty());
  assert_eq!(driver.observer().resets, vec![2]);
  assert_eq!(driver.observer().records.last().unwrap().tick(), 2);
}

#[test]
fn borrowed_observer_receives_steps() {
  let mut observer = RecordingObserver::default();
  {
    let mut driver = TickDriver::new(TickQueue::with_capacity(1).unwrap(), &mut observer);
    driver.tick(StepRequest::enqueue('z'));
  }
  assert_eq!(observer.records.len(), 1);
}

#[test]
fn into_parts_returns_queue_state() {
  let config = QueueConfig::new(2).with_underflow_policy(UnderflowPolicy::PassStale);
  let mut driver = TickDriver::new(TickQueue::<u8>::new(config).unwrap(), NoopStepObserver);
  driver.tick(StepRequest::enqueue_and_dequeue(9));

  let (queue, _observer) = driver.into_parts();

  assert!(queue.is_empty());
  assert_eq!((queue.head(), queue.tail()), (1, 1));
  assert_eq!(queue.counters().dequeued(), 1);
}
