use alloc::vec::Vec;

use super::{QueueConfig, QueueConfigError, QueueCounters, QueueStatus, StepRequest, StepResult, UnderflowPolicy};


/// Fixed-capacity circular queue advanced one tick at a time.
///
/// The store holds `capacity + 1` slots so that `head == tail` always means empty and
/// `head == tail + 1` always means full. The number of queued elements is the circular distance
/// from `head` to `tail`; slots outside that span hold stale values that are only observable
/// through [`UnderflowPolicy::PassStale`].
///
/// [`step`](Self::step) is the only mutator besides [`reset`](Self::reset). It never blocks and
/// never fails: requests that cannot be honoured are reported through the flags of
/// [`StepResult`].
#[derive(Clone, Debug)]
pub struct TickQueue<T> {
  storage:  Vec<T>,
  head:     usize,
  tail:     usize,
  config:   QueueConfig,
  counters: QueueCounters,
}

impl<T: Clone + Default> TickQueue<T> {
  /// Builds an empty queue from `config`.
  ///
  /// # Errors
  ///
  /// Returns the [`QueueConfigError`] reported by [`QueueConfig::validate`], or
  /// [`QueueConfigError::AllocFailed`] when the slot store cannot be reserved.
  pub fn new(config: QueueConfig) -> Result<Self, QueueConfigError> {
    let slots = config.validate::<T>()?;
    let mut storage = Vec::new();
    storage.try_reserve_exact(slots).map_err(|_| QueueConfigError::AllocFailed { slots })?;
    storage.resize(slots, T::default());
    Ok(Self { storage, head: 0, tail: 0, config, counters: QueueCounters::default() })
  }

  /// Builds an empty non-overwritable queue of the given logical capacity.
  ///
  /// # Errors
  ///
  /// See [`TickQueue::new`].
  pub fn with_capacity(capacity: usize) -> Result<Self, QueueConfigError> {
    Self::new(QueueConfig::new(capacity))
  }

  /// Applies one tick.
  ///
  /// Every decision is taken from the indices observed on entry and the new indices are committed
  /// together at the end, so an enqueue and a dequeue on the same tick never see each other's
  /// effect.
  pub fn step(&mut self, request: StepRequest<T>) -> StepResult<T> {
    let (enqueue_request, dequeue_request, input) = request.into_parts();
    let (head, tail) = (self.head, self.tail);

    let simultaneous = enqueue_request && dequeue_request;
    let tail_inc = self.wrapping_inc(tail);
    let head_inc = self.wrapping_inc(head);
    let full = head == tail_inc;
    let empty = head == tail;
    let overwritable = self.config.overwritable();

    let can_enqueue = !full || simultaneous || overwritable;
    let can_dequeue = !empty || (simultaneous && self.config.underflow_policy() == UnderflowPolicy::PassStale);
    let did_enqueue = enqueue_request && can_enqueue;
    let did_dequeue = dequeue_request && can_dequeue;
    let evicted_oldest = overwritable && did_enqueue && full && !did_dequeue;

    // The head slot is read before the tail slot is written; under PassStale they are the same slot.
    let output = if did_dequeue { self.storage[head].clone() } else { T::default() };
    if did_enqueue {
      self.storage[tail] = input.unwrap_or_default();
      self.tail = tail_inc;
    }
    if did_dequeue || evicted_oldest {
      self.head = head_inc;
    }

    self.counters.record_step(enqueue_request, dequeue_request, did_enqueue, did_dequeue, evicted_oldest);
    StepResult::new(output, did_enqueue, did_dequeue, evicted_oldest)
  }

  /// Returns a copy of the queued elements, oldest first.
  #[must_use]
  pub fn contents(&self) -> Vec<T> {
    self.iter().cloned().collect()
  }
}

impl<T> TickQueue<T> {
  /// Returns the full/empty flags for the current indices.
  #[must_use]
  pub fn status(&self) -> QueueStatus {
    QueueStatus::from_indices(self.head, self.tail, self.storage.len())
  }

  /// Returns `true` when no element is queued.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.head == self.tail
  }

  /// Returns `true` when `capacity()` elements are queued.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.status().full
  }

  /// Returns the number of queued elements.
  #[must_use]
  pub fn len(&self) -> usize {
    if self.tail >= self.head { self.tail - self.head } else { self.storage.len() - self.head + self.tail }
  }

  /// Returns the logical capacity.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.config.capacity()
  }

  /// Returns the number of physical slots, one more than the logical capacity.
  #[must_use]
  pub fn physical_capacity(&self) -> usize {
    self.storage.len()
  }

  /// Returns the slot the next dequeue reads from.
  #[must_use]
  pub const fn head(&self) -> usize {
    self.head
  }

  /// Returns the slot the next enqueue writes into.
  #[must_use]
  pub const fn tail(&self) -> usize {
    self.tail
  }

  /// Returns the configuration the queue was built with.
  #[must_use]
  pub const fn config(&self) -> &QueueConfig {
    &self.config
  }

  /// Returns the lifetime counters.
  #[must_use]
  pub const fn counters(&self) -> QueueCounters {
    self.counters
  }

  /// Returns the element the next dequeue would yield.
  #[must_use]
  pub fn peek(&self) -> Option<&T> {
    if self.is_empty() { None } else { self.storage.get(self.head) }
  }

  /// Iterates over the queued elements, oldest first.
  pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
    let slots = self.storage.len();
    (0..self.len()).map(move |offset| &self.storage[(self.head + offset) % slots])
  }

  /// Returns both indices to slot 0, leaving the queue empty.
  ///
  /// Slot contents are left in place; they are unreachable until overwritten.
  pub fn reset(&mut self) {
    self.head = 0;
    self.tail = 0;
    self.counters.record_reset();
  }

  fn wrapping_inc(&self, index: usize) -> usize {
    let next = index + 1;
    if next == self.storage.len() { 0 } else { next }
  }
}
