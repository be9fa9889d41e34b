//! Tokio timers driven by a span
//!
//! A span's duration feeds single-shot timeouts, repeating intervals,
//! and awaitable delays. Sleep lengths are the span's rounded
//! milliseconds conversion floored to whole milliseconds, clamped at
//! zero. Handles control a running timer; dropping a handle detaches
//! it rather than cancelling.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;
use unitspan_core::{Span, Value};

use crate::TimeSpan;

type Callback = Arc<dyn Fn() + Send + Sync + 'static>;

impl TimeSpan {
    /// Run `callback` once after this span has passed.
    ///
    /// Must be called within a tokio runtime. The returned controller
    /// can cancel the timer or restart it from now.
    pub fn timeout<F>(&self, callback: F) -> TimeoutController
    where
        F: Fn() + Send + Sync + 'static,
    {
        let duration = self.sleep_duration();
        let callback: Callback = Arc::new(callback);
        tracing::debug!("arming timeout for {:?}", duration);
        TimeoutController {
            duration,
            armed: arm(duration, Arc::clone(&callback)),
            callback,
        }
    }

    /// Run `callback` every time this span passes, until stopped.
    pub fn interval<F>(&self, callback: F) -> IntervalHandle
    where
        F: Fn() + Send + Sync + 'static,
    {
        // tokio panics on a zero interval period
        let period = self.sleep_duration().max(Duration::from_millis(1));
        let first = Instant::now() + period;
        tracing::debug!("starting interval every {:?}", period);
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(first, period);
            loop {
                ticker.tick().await;
                tracing::trace!("interval tick");
                callback();
            }
        });
        IntervalHandle { task }
    }

    /// Resolve after this span has passed
    pub async fn delay(&self) {
        tokio::time::sleep(self.sleep_duration()).await;
    }

    fn sleep_duration(&self) -> Duration {
        match self.to("Milliseconds") {
            Ok(Value::Number(millis)) if millis > 0.0 => {
                Duration::from_millis(millis.floor() as u64)
            }
            _ => Duration::ZERO,
        }
    }
}

/// Controls an armed timeout
pub struct TimeoutController {
    duration: Duration,
    callback: Callback,
    armed: JoinHandle<()>,
}

impl TimeoutController {
    /// Stop the timer; the callback will not run
    pub fn cancel(&self) {
        tracing::debug!("timeout cancelled");
        self.armed.abort();
    }

    /// Restart the timer from now with the original duration
    pub fn refresh(&mut self) {
        self.armed.abort();
        tracing::trace!("timeout refreshed for {:?}", self.duration);
        self.armed = arm(self.duration, Arc::clone(&self.callback));
    }
}

fn arm(duration: Duration, callback: Callback) -> JoinHandle<()> {
    // deadline fixed here, not at first poll of the task
    let deadline = Instant::now() + duration;
    tokio::spawn(async move {
        tokio::time::sleep_until(deadline).await;
        tracing::trace!("timeout fired");
        callback();
    })
}

/// Controls a running interval
pub struct IntervalHandle {
    task: JoinHandle<()>,
}

impl IntervalHandle {
    /// Stop ticking; the callback will not run again
    pub fn stop(&self) {
        tracing::debug!("interval stopped");
        self.task.abort();
    }
}
