//! Fixed-period background ticker.
//!
//! [`Ticker`] spawns a thread that invokes a callback once per period,
//! scheduled against absolute deadlines so drift does not accumulate.
//! When a callback overruns its period the missed beats are *skipped*,
//! never replayed in a burst: the next deadline is re-based on the
//! current time. [`Ticker::cancel`] is idempotent, callable from any
//! thread, and joins the tick thread so no callback runs after it
//! returns. Dropping a `Ticker` cancels it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::debug;

/// Handle to a background thread beating at a fixed period.
pub struct Ticker {
    cancelled: Arc<AtomicBool>,
    period: Duration,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl Ticker {
    /// Spawn a ticker invoking `on_tick` once per `period`.
    ///
    /// The first tick fires immediately, the next one `period` later.
    pub fn spawn<F>(period: Duration, on_tick: F) -> Ticker
    where
        F: FnMut() + Send + 'static,
    {
        let cancelled = Arc::new(AtomicBool::new(false));
        debug!(period_ms = period.as_millis() as u64, "ticker spawned");
        let flag = Arc::clone(&cancelled);
        let handle = thread::spawn(move || tick_loop(period, on_tick, flag));
        Ticker {
            cancelled,
            period,
            handle: Mutex::new(Some(handle)),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Stop the tick thread.
    ///
    /// Joins it, so once this returns the callback will not run again.
    /// Safe to call from any thread, repeatedly; a callback cancelling
    /// its own ticker (through an `Arc<Ticker>`) skips the join.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        let handle = match self.handle.lock() {
            Ok(mut slot) => slot.take(),
            Err(_) => None,
        };
        if let Some(handle) = handle {
            if handle.thread().id() == thread::current().id() {
                // self-cancel from inside the callback
                return;
            }
            let _ = handle.join();
            debug!("ticker stopped");
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn tick_loop<F>(period: Duration, mut on_tick: F, cancelled: Arc<AtomicBool>)
where
    F: FnMut(),
{
    let mut next_tick = Instant::now();
    loop {
        if cancelled.load(Ordering::SeqCst) {
            break;
        }
        let now = Instant::now();
        if now < next_tick {
            thread::sleep(next_tick - now);
            continue;
        }
        on_tick();
        next_tick += period;
        let now = Instant::now();
        if next_tick < now {
            // callback overran; skip the missed beats
            next_tick = now + period;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU32;
    use std::sync::mpsc;

    #[test]
    fn ticks_repeat_at_roughly_the_period() {
        let count = Arc::new(AtomicU32::new(0));
        let seen = Arc::clone(&count);
        let ticker = Ticker::spawn(Duration::from_millis(5), move || {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        thread::sleep(Duration::from_millis(60));
        ticker.cancel();
        let total = count.load(Ordering::SeqCst);
        assert!(total >= 4, "expected several ticks, got {total}");
    }

    #[test]
    fn cancel_is_final_and_idempotent() {
        let count = Arc::new(AtomicU32::new(0));
        let seen = Arc::clone(&count);
        let ticker = Ticker::spawn(Duration::from_millis(3), move || {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        thread::sleep(Duration::from_millis(15));
        ticker.cancel();
        let at_cancel = count.load(Ordering::SeqCst);
        ticker.cancel();
        thread::sleep(Duration::from_millis(20));
        assert_eq!(count.load(Ordering::SeqCst), at_cancel);
        assert!(ticker.is_cancelled());
    }

    #[test]
    fn overrun_skips_beats_instead_of_bursting() {
        let (tx, rx) = mpsc::channel();
        let ticker = Ticker::spawn(Duration::from_millis(5), move || {
            let _ = tx.send(Instant::now());
            // one slow beat, several periods long
            thread::sleep(Duration::from_millis(25));
        });
        let first = rx.recv_timeout(Duration::from_secs(1)).unwrap();
        let second = rx.recv_timeout(Duration::from_secs(1)).unwrap();
        let third = rx.recv_timeout(Duration::from_secs(1)).unwrap();
        ticker.cancel();
        // no burst of make-up ticks after the overrun
        assert!(second - first >= Duration::from_millis(20));
        assert!(third - second >= Duration::from_millis(20));
    }

    #[test]
    fn drop_cancels() {
        let count = Arc::new(AtomicU32::new(0));
        let seen = Arc::clone(&count);
        {
            let _ticker = Ticker::spawn(Duration::from_millis(3), move || {
                seen.fetch_add(1, Ordering::SeqCst);
            });
            thread::sleep(Duration::from_millis(10));
        }
        let after_drop = count.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(15));
        assert_eq!(count.load(Ordering::SeqCst), after_drop);
    }
}
