//! Snapshot diffing.

use std::fmt;

use joycab_types::{Button, PadState, StickDir};

/// One observable change between two consecutive pad snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadEdge {
    ButtonPressed(Button),
    ButtonReleased(Button),
    /// Stick 1 entered a direction (never `Center`).
    Stick1(StickDir),
    /// Stick 2 entered a direction (never `Center`).
    Stick2(StickDir),
}

impl fmt::Display for PadEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PadEdge::ButtonPressed(b) => write!(f, "{} pressed", b.label()),
            PadEdge::ButtonReleased(b) => write!(f, "{} released", b.label()),
            PadEdge::Stick1(d) => write!(f, "stick1 {}", d.label()),
            PadEdge::Stick2(d) => write!(f, "stick2 {}", d.label()),
        }
    }
}

/// Emit every edge between `prev` and `cur` in the contract order:
/// buttons in declared order first, then stick 1, then stick 2.
///
/// Sticks are entry-only: a change to `Center` emits nothing, a direct
/// change from one direction to another emits the new direction.
pub fn for_each_edge(prev: &PadState, cur: &PadState, mut emit: impl FnMut(PadEdge)) {
    for b in Button::ALL {
        match (prev.buttons.contains(b), cur.buttons.contains(b)) {
            (false, true) => emit(PadEdge::ButtonPressed(b)),
            (true, false) => emit(PadEdge::ButtonReleased(b)),
            _ => {}
        }
    }
    if cur.stick1 != prev.stick1 && cur.stick1 != StickDir::Center {
        emit(PadEdge::Stick1(cur.stick1));
    }
    if cur.stick2 != prev.stick2 && cur.stick2 != StickDir::Center {
        emit(PadEdge::Stick2(cur.stick2));
    }
}
