/// Full/empty flags derived from the head and tail indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct QueueStatus {
  /// `head == (tail + 1) mod (capacity + 1)`.
  pub full:  bool,
  /// `head == tail`.
  pub empty: bool,
}

impl QueueStatus {
  /// Computes the flags for the given indices on a store of `slots` physical slots.
  #[must_use]
  pub const fn from_indices(head: usize, tail: usize, slots: usize) -> Self {
    Self { full: head == (tail + 1) % slots, empty: head == tail }
  }
}
