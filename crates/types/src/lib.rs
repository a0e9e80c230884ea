//! Shared data types for the joycab arcade layer
//!
//! Pure data structures and tuning constants used by every other crate:
//! the polled pad snapshot consumed by the watcher, the stacker command
//! vocabulary, and the board/timing constants. No dependencies, so the
//! types are usable from capability sources, game logic, and views alike.
//!
//! # Pad model
//!
//! A [`PadState`] is one polled snapshot of the whole pad: two stick
//! readings plus a button bitset. Capability sources collapse raw
//! per-direction switches into a single [`StickDir`] per axis, so a
//! snapshot can never report `Up` and `Down` at the same time. When
//! opposing directions are held simultaneously the axis reads `Center`;
//! otherwise vertical wins over horizontal and up/left win within their
//! pair.
//!
//! # Timing constants
//!
//! Values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PAD_POLL_MS` | 20 | Watcher poll interval (~50 Hz) |
//! | `STACK_TICK_MS` | 25 | Stacker scheduler beat |
//! | `GRAVITY_MS` | 500 | Interval between gravity rows |
//! | `KEY_HOLD_TIMEOUT_MS` | 150 | Held-key expiry for terminals without release events |
//!
//! # Examples
//!
//! ```
//! use joycab_types::{Button, PadState, StickDir};
//!
//! let mut state = PadState::idle();
//! state.stick1 = StickDir::Left;
//! state.buttons.insert(Button::A1);
//!
//! assert!(state.buttons.contains(Button::A1));
//! assert!(!state.buttons.contains(Button::Menu));
//! assert_eq!(state.stick2, StickDir::Center);
//! ```

/// Playfield width in cells (10 columns)
pub const STACK_COLS: u8 = 10;

/// Playfield height in cells (20 rows)
pub const STACK_ROWS: u8 = 20;

/// Watcher poll interval in milliseconds (~50 Hz)
pub const PAD_POLL_MS: u32 = 20;

/// Stacker scheduler beat in milliseconds
///
/// Deliberately much faster than [`GRAVITY_MS`]: queued moves are applied
/// every beat, gravity advances on its own accumulator.
pub const STACK_TICK_MS: u32 = 25;

/// Interval between gravity rows in milliseconds
pub const GRAVITY_MS: u32 = 500;

/// Held-key expiry in milliseconds for terminals that report key presses
/// but no key releases
pub const KEY_HOLD_TIMEOUT_MS: u32 = 150;

/// Points awarded per cleared row (flat, no multi-line bonus)
pub const POINTS_PER_LINE: u32 = 100;

/// The pad's buttons: four action buttons per player plus the cabinet
/// menu button.
///
/// [`Button::ALL`] fixes the order in which the watcher reports button
/// edges that were observed in the same poll cycle. That order is part of
/// the observable contract, so tests (and games that care) can rely on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    A1,
    B1,
    X1,
    Y1,
    A2,
    B2,
    X2,
    Y2,
    Menu,
}

impl Button {
    /// Every button in dispatch order.
    pub const ALL: [Button; 9] = [
        Button::A1,
        Button::B1,
        Button::X1,
        Button::Y1,
        Button::A2,
        Button::B2,
        Button::X2,
        Button::Y2,
        Button::Menu,
    ];

    /// Short display label ("A1", "Menu", ...).
    pub fn label(&self) -> &'static str {
        match self {
            Button::A1 => "A1",
            Button::B1 => "B1",
            Button::X1 => "X1",
            Button::Y1 => "Y1",
            Button::A2 => "A2",
            Button::B2 => "B2",
            Button::X2 => "X2",
            Button::Y2 => "Y2",
            Button::Menu => "Menu",
        }
    }

    fn mask(self) -> u16 {
        match self {
            Button::A1 => 1 << 0,
            Button::B1 => 1 << 1,
            Button::X1 => 1 << 2,
            Button::Y1 => 1 << 3,
            Button::A2 => 1 << 4,
            Button::B2 => 1 << 5,
            Button::X2 => 1 << 6,
            Button::Y2 => 1 << 7,
            Button::Menu => 1 << 8,
        }
    }
}

/// One collapsed reading of a stick axis pair.
///
/// Exactly one value per stick per snapshot; the raw per-direction
/// switches are resolved by the capability source before they reach the
/// watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StickDir {
    Center,
    Up,
    Down,
    Left,
    Right,
}

impl StickDir {
    /// Resolve raw per-direction switch states into one reading.
    ///
    /// Opposing pairs cancel to `Center`; up/down take precedence over
    /// left/right.
    pub fn resolve(up: bool, down: bool, left: bool, right: bool) -> Self {
        if up && !down {
            StickDir::Up
        } else if down && !up {
            StickDir::Down
        } else if left && !right {
            StickDir::Left
        } else if right && !left {
            StickDir::Right
        } else {
            StickDir::Center
        }
    }

    /// Short display label ("Up", "Center", ...).
    pub fn label(&self) -> &'static str {
        match self {
            StickDir::Center => "Center",
            StickDir::Up => "Up",
            StickDir::Down => "Down",
            StickDir::Left => "Left",
            StickDir::Right => "Right",
        }
    }
}

impl Default for StickDir {
    fn default() -> Self {
        StickDir::Center
    }
}

/// Compact held-state of all nine buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonSet(u16);

impl ButtonSet {
    pub fn empty() -> Self {
        ButtonSet(0)
    }

    pub fn contains(&self, b: Button) -> bool {
        self.0 & b.mask() != 0
    }

    pub fn insert(&mut self, b: Button) {
        self.0 |= b.mask();
    }

    pub fn remove(&mut self, b: Button) {
        self.0 &= !b.mask();
    }

    /// Set or clear one button from a boolean reading.
    pub fn set(&mut self, b: Button, held: bool) {
        if held {
            self.insert(b);
        } else {
            self.remove(b);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// One polled snapshot of the whole pad.
///
/// Produced fresh by a capability source on every poll; the watcher
/// compares consecutive snapshots to derive edge events. Plain `Copy`
/// data, never shared across threads by reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PadState {
    pub stick1: StickDir,
    pub stick2: StickDir,
    pub buttons: ButtonSet,
}

impl PadState {
    /// The inert snapshot: both sticks centered, no buttons held.
    ///
    /// Capability sources whose device is absent return this forever.
    pub fn idle() -> Self {
        PadState::default()
    }
}

/// Commands the stacking engine accepts from input.
///
/// Derived from stick-1 edge events by the game's listener and carried to
/// the scheduler thread over the intent queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackMove {
    /// Shift the falling piece one column left
    Left,
    /// Shift the falling piece one column right
    Right,
    /// Drop the falling piece one row (same as one gravity step)
    Down,
    /// Rotate the falling piece 90° clockwise
    RotateCw,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_masks_are_distinct() {
        for (i, a) in Button::ALL.iter().enumerate() {
            for b in &Button::ALL[i + 1..] {
                assert_ne!(a.mask(), b.mask(), "{} vs {}", a.label(), b.label());
            }
        }
    }

    #[test]
    fn button_set_insert_remove() {
        let mut set = ButtonSet::empty();
        assert!(set.is_empty());

        set.insert(Button::A1);
        set.insert(Button::Menu);
        assert!(set.contains(Button::A1));
        assert!(set.contains(Button::Menu));
        assert!(!set.contains(Button::B1));

        set.remove(Button::A1);
        assert!(!set.contains(Button::A1));
        assert!(set.contains(Button::Menu));

        set.set(Button::X2, true);
        assert!(set.contains(Button::X2));
        set.set(Button::X2, false);
        assert!(!set.contains(Button::X2));
    }

    #[test]
    fn resolve_prefers_vertical_and_cancels_opposites() {
        assert_eq!(StickDir::resolve(false, false, false, false), StickDir::Center);
        assert_eq!(StickDir::resolve(true, false, false, false), StickDir::Up);
        assert_eq!(StickDir::resolve(false, true, false, false), StickDir::Down);
        assert_eq!(StickDir::resolve(false, false, true, false), StickDir::Left);
        assert_eq!(StickDir::resolve(false, false, false, true), StickDir::Right);

        // Opposing pairs cancel.
        assert_eq!(StickDir::resolve(true, true, false, false), StickDir::Center);
        assert_eq!(StickDir::resolve(true, true, true, true), StickDir::Center);

        // Vertical beats horizontal when both are held.
        assert_eq!(StickDir::resolve(true, false, true, false), StickDir::Up);
        assert_eq!(StickDir::resolve(false, true, false, true), StickDir::Down);

        // A cancelled vertical pair falls through to horizontal.
        assert_eq!(StickDir::resolve(true, true, true, false), StickDir::Left);
    }

    #[test]
    fn idle_state_is_all_neutral() {
        let idle = PadState::idle();
        assert_eq!(idle.stick1, StickDir::Center);
        assert_eq!(idle.stick2, StickDir::Center);
        assert!(idle.buttons.is_empty());
        assert_eq!(idle, PadState::default());
    }
}
