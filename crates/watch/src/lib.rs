//! Pad watching: polled snapshots in, edge events out.
//!
//! [`PadWatcher`] owns a background thread that samples a
//! [`Gamepad`](joycab_pad::Gamepad) every poll interval (~20ms) and
//! compares consecutive snapshots. Held state never repeats an event;
//! only *changes* are dispatched to the game's [`PadListener`]:
//!
//! - a button produces one `pressed` on its rising edge and one
//!   `released` on its falling edge;
//! - a stick produces one event when it *enters* a direction, and
//!   nothing when it returns to center.
//!
//! Within one poll cycle the dispatch order is fixed: buttons in
//! [`Button::ALL`](joycab_types::Button::ALL) order, then stick 1, then
//! stick 2. Transitions faster than one poll interval can be missed
//! entirely; that aliasing is accepted, not compensated.
//!
//! Listener callbacks run on the watcher thread and must stay short:
//! they forward intent (over a queue, an atomic flag) to the game's own
//! thread rather than touching game state directly.

pub mod edges;
pub mod listener;
pub mod watcher;

pub use joycab_pad as pad;
pub use joycab_types as types;

pub use edges::{for_each_edge, PadEdge};
pub use listener::{dispatch_edge, PadListener, TapListener};
pub use watcher::{PadWatcher, WatcherConfig};
