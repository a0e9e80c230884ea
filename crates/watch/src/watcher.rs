//! The background poll thread behind [`PadWatcher`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::debug;

use joycab_pad::Gamepad;
use joycab_types::{PadState, PAD_POLL_MS};

use crate::edges::for_each_edge;
use crate::listener::{dispatch_edge, PadListener};

/// Tuning knobs for [`PadWatcher::spawn_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatcherConfig {
    /// Interval between consecutive pad samples.
    pub poll_interval: Duration,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        WatcherConfig {
            poll_interval: Duration::from_millis(PAD_POLL_MS as u64),
        }
    }
}

impl WatcherConfig {
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }
}

struct Shared {
    /// Gates dispatch only; the poll thread samples either way.
    dispatching: AtomicBool,
    /// Once set, the poll thread exits after its current cycle.
    stopped: AtomicBool,
}

/// Owns the poll thread that turns pad snapshots into listener calls.
///
/// Dispatch is live as soon as `spawn` returns; `pause`/`start` gate it
/// without stopping the underlying polling, and `shutdown` stops the
/// thread for good. All callbacks run on the watcher thread, so a
/// listener must stay short and hand intent to the game thread through
/// a queue or an atomic flag.
pub struct PadWatcher {
    shared: Arc<Shared>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl PadWatcher {
    /// Spawn a watcher over `pad` with the default poll interval.
    pub fn spawn<P, L>(pad: P, listener: L) -> PadWatcher
    where
        P: Gamepad + 'static,
        L: PadListener + 'static,
    {
        Self::spawn_with(pad, listener, WatcherConfig::default())
    }

    pub fn spawn_with<P, L>(pad: P, listener: L, config: WatcherConfig) -> PadWatcher
    where
        P: Gamepad + 'static,
        L: PadListener + 'static,
    {
        let shared = Arc::new(Shared {
            dispatching: AtomicBool::new(true),
            stopped: AtomicBool::new(false),
        });
        let poll = config.poll_interval;
        debug!(poll_ms = poll.as_millis() as u64, "pad watcher spawned");
        let loop_shared = Arc::clone(&shared);
        let handle = thread::spawn(move || poll_loop(pad, listener, loop_shared, poll));
        PadWatcher {
            shared,
            handle: Mutex::new(Some(handle)),
        }
    }

    /// Resume dispatch after [`pause`](Self::pause).
    ///
    /// Dispatch is already live after `spawn`, so the first call is a
    /// no-op, as is calling it again while running.
    pub fn start(&self) {
        if !self.shared.dispatching.swap(true, Ordering::SeqCst) {
            debug!("pad watcher resumed");
        }
    }

    /// Suppress dispatch while keeping the poll thread alive.
    ///
    /// The thread keeps sampling and advancing its edge history, so a
    /// later [`start`](Self::start) resumes from the live pad state and
    /// never replays edges that happened during the pause.
    pub fn pause(&self) {
        if self.shared.dispatching.swap(false, Ordering::SeqCst) {
            debug!("pad watcher paused");
        }
    }

    pub fn is_dispatching(&self) -> bool {
        self.shared.dispatching.load(Ordering::SeqCst)
    }

    /// Stop the poll thread.
    ///
    /// Joins the thread, so once this returns no further callback runs.
    /// A listener may call this from its own callback (through an
    /// `Arc<PadWatcher>`); the join is skipped then and the remaining
    /// edges of the current cycle are dropped instead. Idempotent.
    pub fn shutdown(&self) {
        self.shared.stopped.store(true, Ordering::SeqCst);
        let handle = match self.handle.lock() {
            Ok(mut slot) => slot.take(),
            Err(_) => None,
        };
        if let Some(handle) = handle {
            if handle.thread().id() == thread::current().id() {
                // self-shutdown from a listener callback
                return;
            }
            let _ = handle.join();
            debug!("pad watcher stopped");
        }
    }
}

impl Drop for PadWatcher {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn poll_loop<P, L>(mut pad: P, mut listener: L, shared: Arc<Shared>, poll: Duration)
where
    P: Gamepad,
    L: PadListener,
{
    let mut prev = PadState::idle();
    let mut next_sample = Instant::now();
    while !shared.stopped.load(Ordering::SeqCst) {
        let now = Instant::now();
        if now < next_sample {
            thread::sleep(next_sample - now);
            continue;
        }
        let cur = pad.sample();
        if shared.dispatching.load(Ordering::SeqCst) {
            for_each_edge(&prev, &cur, |edge| {
                // a callback may have stopped us mid-cycle
                if !shared.stopped.load(Ordering::SeqCst) {
                    dispatch_edge(&mut listener, edge);
                }
            });
        }
        // history advances even while paused
        prev = cur;
        next_sample += poll;
        let now = Instant::now();
        if next_sample < now {
            // overran; skip the missed beats rather than bursting
            next_sample = now + poll;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::PadEdge;
    use crate::listener::TapListener;
    use joycab_pad::{InertPad, ScriptedPad};
    use joycab_types::{Button, StickDir};
    use std::sync::mpsc;

    fn fast_config() -> WatcherConfig {
        WatcherConfig::default().with_poll_interval(Duration::from_millis(2))
    }

    fn pressed(button: Button) -> PadState {
        let mut state = PadState::idle();
        state.buttons.insert(button);
        state
    }

    #[test]
    fn scripted_press_dispatches_one_pair() {
        let pad = ScriptedPad::new(vec![pressed(Button::A1), PadState::idle()]);
        let (tx, rx) = mpsc::channel();
        let listener = TapListener::new(move |edge| {
            let _ = tx.send(edge);
        });
        let watcher = PadWatcher::spawn_with(pad, listener, fast_config());

        let first = rx.recv_timeout(Duration::from_secs(1)).unwrap();
        let second = rx.recv_timeout(Duration::from_secs(1)).unwrap();
        assert_eq!(first, PadEdge::ButtonPressed(Button::A1));
        assert_eq!(second, PadEdge::ButtonReleased(Button::A1));

        watcher.shutdown();
        assert!(rx.try_recv().is_err(), "held idle state must stay silent");
    }

    #[test]
    fn stick_entry_dispatches_once() {
        let mut up = PadState::idle();
        up.stick1 = StickDir::Up;
        let pad = ScriptedPad::new(vec![up, up, PadState::idle()]);
        let (tx, rx) = mpsc::channel();
        let listener = TapListener::new(move |edge| {
            let _ = tx.send(edge);
        });
        let watcher = PadWatcher::spawn_with(pad, listener, fast_config());

        let only = rx.recv_timeout(Duration::from_secs(1)).unwrap();
        assert_eq!(only, PadEdge::Stick1(StickDir::Up));
        // returning to center is not an event
        thread::sleep(Duration::from_millis(30));
        watcher.shutdown();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn shutdown_is_idempotent_and_final() {
        let pad = ScriptedPad::new(vec![pressed(Button::B2)]);
        let (tx, rx) = mpsc::channel();
        let listener = TapListener::new(move |edge| {
            let _ = tx.send(edge);
        });
        let watcher = PadWatcher::spawn_with(pad, listener, fast_config());
        let _ = rx.recv_timeout(Duration::from_secs(1)).unwrap();

        watcher.shutdown();
        watcher.shutdown();
        // the sender side lives in the dropped listener now
        assert!(rx.try_recv().is_err() || rx.recv_timeout(Duration::from_millis(20)).is_err());
    }

    #[test]
    fn inert_pad_never_dispatches() {
        let (tx, rx) = mpsc::channel();
        let listener = TapListener::new(move |edge| {
            let _ = tx.send(edge);
        });
        let watcher = PadWatcher::spawn_with(InertPad, listener, fast_config());

        assert!(watcher.is_dispatching());
        watcher.pause();
        assert!(!watcher.is_dispatching());
        watcher.start();
        assert!(watcher.is_dispatching());

        thread::sleep(Duration::from_millis(20));
        watcher.shutdown();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn start_before_pause_is_a_no_op() {
        let pad = ScriptedPad::new(vec![pressed(Button::X1), PadState::idle()]);
        let (tx, rx) = mpsc::channel();
        let listener = TapListener::new(move |edge| {
            let _ = tx.send(edge);
        });
        let watcher = PadWatcher::spawn_with(pad, listener, fast_config());
        watcher.start();
        assert!(watcher.is_dispatching());

        assert_eq!(
            rx.recv_timeout(Duration::from_secs(1)).unwrap(),
            PadEdge::ButtonPressed(Button::X1)
        );
        assert_eq!(
            rx.recv_timeout(Duration::from_secs(1)).unwrap(),
            PadEdge::ButtonReleased(Button::X1)
        );
        watcher.shutdown();
    }
}
