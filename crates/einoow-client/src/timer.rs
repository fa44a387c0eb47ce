use std::time::Duration;

use einoow_core::timer::{Scheduler, TimerHandle};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::diag;

/// `setTimeout`-backed scheduler. The handle clears the timeout and frees the callback.
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerHandle {
        let Some(window) = web_sys::window() else {
            diag::console_warn!("timer: no window, deferred task dropped");
            return TimerHandle::inert();
        };

        let callback = Closure::once(move || task());
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            millis,
        ) {
            Ok(id) => TimerHandle::new(move || {
                window.clear_timeout_with_handle(id);
                drop(callback);
            }),
            Err(e) => {
                diag::console_warn!("timer: setTimeout failed: {e:?}");
                TimerHandle::inert()
            },
        }
    }
}
