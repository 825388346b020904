use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Collapses a burst of calls into one deferred execution of `callback`,
/// run `delay` after the last call of the burst with that call's argument.
///
/// Each instance owns a single timer slot; clones share it and therefore act
/// as the same handler. Calls must be made from within a Tokio runtime.
pub struct Debounced<T> {
    delay: Duration,
    callback: Arc<dyn Fn(T) + Send + Sync>,
    pending: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl<T> Clone for Debounced<T> {
    fn clone(&self) -> Self {
        Self {
            delay: self.delay,
            callback: Arc::clone(&self.callback),
            pending: Arc::clone(&self.pending),
        }
    }
}

impl<T: Send + 'static> Debounced<T> {
    pub fn new<F>(delay: Duration, callback: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            delay,
            callback: Arc::new(callback),
            pending: Arc::new(Mutex::new(None)),
        }
    }

    /// Schedules `callback(arg)` and drops whatever was scheduled before.
    pub fn call(&self, arg: T) {
        let callback = Arc::clone(&self.callback);
        let delay = self.delay;

        let mut pending = self.slot();
        if let Some(previous) = pending.take() {
            previous.abort();
        }
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback(arg);
        }));
    }

    pub fn cancel(&self) {
        if let Some(previous) = self.slot().take() {
            previous.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.slot()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn slot(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
