#[cfg(not(feature = "force-portable-arc"))]
use alloc::sync::Arc;

#[cfg(feature = "force-portable-arc")]
use portable_atomic_util::Arc;
use spin::Mutex;

use super::{QueueStatus, StepRequest, StepResult, TickQueue};


/// Shared handle that serialises access to one [`TickQueue`] behind a spin lock.
///
/// Clones refer to the same queue. Each call takes the lock once, so every [`step`](Self::step)
/// is still applied as a single tick.
///
/// With the `force-portable-arc` feature the handle is backed by `portable_atomic_util::Arc` so
/// targets without native atomic pointers can still share a queue.
pub struct SharedTickQueue<T> {
  inner: Arc<Mutex<TickQueue<T>>>,
}

impl<T> SharedTickQueue<T> {
  /// Moves `queue` behind a shared lock.
  #[must_use]
  pub fn new(queue: TickQueue<T>) -> Self {
    Self { inner: Arc::new(Mutex::new(queue)) }
  }

  /// Runs `f` with shared access to the locked queue.
  pub fn with_read<R>(&self, f: impl FnOnce(&TickQueue<T>) -> R) -> R {
    let guard = self.inner.lock();
    f(&guard)
  }

  /// Runs `f` with exclusive access to the locked queue.
  pub fn with_write<R>(&self, f: impl FnOnce(&mut TickQueue<T>) -> R) -> R {
    let mut guard = self.inner.lock();
    f(&mut guard)
  }

  /// Returns the current full/empty flags.
  #[must_use]
  pub fn status(&self) -> QueueStatus {
    self.with_read(TickQueue::status)
  }

  /// Returns the number of queued elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.with_read(TickQueue::len)
  }

  /// Returns `true` when no element is queued.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.with_read(TickQueue::is_empty)
  }

  /// Resets the shared queue.
  pub fn reset(&self) {
    self.with_write(TickQueue::reset);
  }

  /// Returns `true` when both handles refer to the same queue.
  #[must_use]
  pub fn ptr_eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.inner, &other.inner)
  }
}

impl<T: Clone + Default> SharedTickQueue<T> {
  /// Applies one tick under the lock.
  pub fn step(&self, request: StepRequest<T>) -> StepResult<T> {
    self.with_write(|queue| queue.step(request))
  }
}

impl<T> Clone for SharedTickQueue<T> {
  fn clone(&self) -> Self {
    Self { inner: Arc::clone(&self.inner) }
  }
}
