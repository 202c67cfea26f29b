//! Cancellable periodic tick signal
//!
//! A `Ticker` calls its callback every `period` until it is dropped or
//! cancelled. Only one ticker should drive a session; drop the old one before
//! starting a new one.
//!
//! On native the callback runs on a background thread and should only forward
//! a signal (e.g. over a channel) to the thread that owns the session. On web
//! it is a `setInterval` callback on the main thread.

use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
pub use native::Ticker;
#[cfg(target_arch = "wasm32")]
pub use web::Ticker;

/// Tick period as a `Duration`, never zero
pub fn period_from_ms(ms: u32) -> Duration {
    Duration::from_millis(u64::from(ms.max(1)))
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::sync::mpsc::{self, RecvTimeoutError, Sender};
    use std::thread::JoinHandle;
    use std::time::Duration;

    pub struct Ticker {
        stop: Option<Sender<()>>,
        handle: Option<JoinHandle<()>>,
    }

    impl Ticker {
        pub fn start<F>(period: Duration, mut on_tick: F) -> Self
        where
            F: FnMut() + Send + 'static,
        {
            let (stop_tx, stop_rx) = mpsc::channel::<()>();
            let handle = std::thread::spawn(move || {
                loop {
                    match stop_rx.recv_timeout(period) {
                        Err(RecvTimeoutError::Timeout) => on_tick(),
                        // Explicit stop or the ticker was dropped
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
            });
            log::debug!("Ticker started ({:?})", period);
            Self {
                stop: Some(stop_tx),
                handle: Some(handle),
            }
        }

        pub fn is_active(&self) -> bool {
            self.stop.is_some()
        }

        /// Stop issuing ticks and wait for the worker to exit
        pub fn cancel(&mut self) {
            if let Some(stop) = self.stop.take() {
                let _ = stop.send(());
            }
            if let Some(handle) = self.handle.take() {
                if handle.join().is_err() {
                    log::warn!("Ticker thread panicked");
                }
                log::debug!("Ticker stopped");
            }
        }
    }

    impl Drop for Ticker {
        fn drop(&mut self) {
            self.cancel();
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use std::time::Duration;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    pub struct Ticker {
        handle: Option<i32>,
        // Kept alive for as long as the interval is installed
        _closure: Closure<dyn FnMut()>,
    }

    impl Ticker {
        pub fn start<F>(period: Duration, on_tick: F) -> Self
        where
            F: FnMut() + 'static,
        {
            let closure = Closure::<dyn FnMut()>::new(on_tick);
            let handle = web_sys::window().and_then(|w| {
                w.set_interval_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref(),
                    period.as_millis().min(i32::MAX as u128) as i32,
                )
                .ok()
            });
            if handle.is_none() {
                log::warn!("Could not install tick interval");
            }
            Self {
                handle,
                _closure: closure,
            }
        }

        pub fn is_active(&self) -> bool {
            self.handle.is_some()
        }

        pub fn cancel(&mut self) {
            if let Some(handle) = self.handle.take() {
                if let Some(w) = web_sys::window() {
                    w.clear_interval_with_handle(handle);
                }
                log::debug!("Ticker stopped");
            }
        }
    }

    impl Drop for Ticker {
        fn drop(&mut self) {
            self.cancel();
        }
    }
}
