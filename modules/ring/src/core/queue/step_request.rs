
/// Inputs sampled by [`TickQueue::step`](super::TickQueue::step) on one tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepRequest<T> {
  enqueue_request: bool,
  dequeue_request: bool,
  input:           Option<T>,
}

impl<T> StepRequest<T> {
  /// Creates a request from raw control lines.
  ///
  /// An enqueue request without an input element writes `T::default()`. An input element without
  /// an enqueue request is ignored.
  #[must_use]
  pub const fn new(enqueue_request: bool, dequeue_request: bool, input: Option<T>) -> Self {
    Self { enqueue_request, dequeue_request, input }
  }

  /// A tick with neither request raised.
  #[must_use]
  pub const fn idle() -> Self {
    Self::new(false, false, None)
  }

  /// Requests an enqueue of `element`.
  #[must_use]
  pub const fn enqueue(element: T) -> Self {
    Self::new(true, false, Some(element))
  }

  /// Requests a dequeue.
  #[must_use]
  pub const fn dequeue() -> Self {
    Self::new(false, true, None)
  }

  /// Requests an enqueue of `element` and a dequeue on the same tick.
  #[must_use]
  pub const fn enqueue_and_dequeue(element: T) -> Self {
    Self::new(true, true, Some(element))
  }

  /// Returns whether an enqueue is requested.
  #[must_use]
  pub const fn enqueue_requested(&self) -> bool {
    self.enqueue_request
  }

  /// Returns whether a dequeue is requested.
  #[must_use]
  pub const fn dequeue_requested(&self) -> bool {
    self.dequeue_request
  }

  /// Returns whether both requests are raised.
  #[must_use]
  pub const fn is_simultaneous(&self) -> bool {
    self.enqueue_request && self.dequeue_request
  }

  /// Returns the input element, if any.
  #[must_use]
  pub const fn input(&self) -> Option<&T> {
    self.input.as_ref()
  }

  /// Splits the request into its control lines and input element.
  #[must_use]
  pub fn into_parts(self) -> (bool, bool, Option<T>) {
    (self.enqueue_request, self.dequeue_request, self.input)
  }
}
