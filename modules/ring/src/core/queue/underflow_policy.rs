/// How an empty queue answers an enqueue and a dequeue requested on the same tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum UnderflowPolicy {
  /// The dequeue is rejected; the enqueued element stays in the queue.
  #[default]
  Reject,
  /// The dequeue is granted and returns whatever the head slot held before the tick.
  ///
  /// This replays the register-transfer behaviour exactly: the new element is written behind the
  /// head, both indices advance, and the queue is empty again afterwards.
  PassStale,
}
