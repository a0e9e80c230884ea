//! Gamepad capability sources.
//!
//! A capability source answers one question: what does the pad look like
//! *right now*? The watcher polls [`Gamepad::sample`] on its own thread
//! and turns consecutive snapshots into edge events; sources themselves
//! never block, never fail, and never dispatch anything.
//!
//! Three sources are provided:
//!
//! - [`KeyPad`]: keyboard emulation fed from terminal key events
//! - `UsbPad` (behind the `hid` feature): the cabinet's USB joystick
//! - [`ScriptedPad`]: replays a fixed snapshot sequence, for tests
//!
//! A source with no device behind it degrades to [`PadState::idle`]
//! rather than erroring; games cannot tell an unplugged pad from an
//! untouched one.

pub mod keypad;
pub mod script;
#[cfg(feature = "hid")]
pub mod usb;

pub use joycab_types as types;

pub use keypad::{KeyFeed, KeyPad};
pub use script::ScriptedPad;
#[cfg(feature = "hid")]
pub use usb::UsbPad;

use joycab_types::PadState;

/// A polled source of pad snapshots.
///
/// `sample` must be non-blocking and must not fail: when the underlying
/// device is missing or breaks, implementations return
/// [`PadState::idle`] from then on. The only permitted side effect is
/// internal refresh (draining queued device reports, expiring stale
/// keys, one-time axis calibration), all confined to the calling thread.
pub trait Gamepad: Send {
    fn sample(&mut self) -> PadState;
}

/// A pad with nothing behind it; every sample is idle.
#[derive(Debug, Default)]
pub struct InertPad;

impl Gamepad for InertPad {
    fn sample(&mut self) -> PadState {
        PadState::idle()
    }
}
