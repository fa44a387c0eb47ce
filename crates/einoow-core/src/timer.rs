use std::fmt;
use std::time::Duration;

/// Schedules one-shot deferred tasks on the host event loop.
pub trait Scheduler {
    /// Run `task` once after `delay` unless the returned handle is cancelled or dropped first.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerHandle;
}

/// Owner of a pending scheduled task. Dropping the handle cancels the task.
#[must_use = "dropping a TimerHandle cancels the scheduled task"]
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    /// Wrap the scheduler-specific cancellation routine.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A handle with nothing to cancel, for schedulers that failed to arm a timer.
    pub fn inert() -> Self {
        Self { cancel: None }
    }

    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}
