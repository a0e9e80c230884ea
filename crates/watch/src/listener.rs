//! The event sink games implement.

use joycab_types::{Button, StickDir};

use crate::edges::PadEdge;

/// Receiver for pad edge events.
///
/// One method per observable edge, every one defaulting to a no-op, so a
/// game overrides exactly the handlers it cares about and ignores the
/// rest. All methods are invoked on the watcher thread; implementations
/// must return quickly and hand intent to the game's own thread instead
/// of mutating game state in place.
pub trait PadListener: Send {
    // Player 1 buttons.
    fn on_button_a1_pressed(&mut self) {}
    fn on_button_a1_released(&mut self) {}
    fn on_button_b1_pressed(&mut self) {}
    fn on_button_b1_released(&mut self) {}
    fn on_button_x1_pressed(&mut self) {}
    fn on_button_x1_released(&mut self) {}
    fn on_button_y1_pressed(&mut self) {}
    fn on_button_y1_released(&mut self) {}

    // Player 2 buttons.
    fn on_button_a2_pressed(&mut self) {}
    fn on_button_a2_released(&mut self) {}
    fn on_button_b2_pressed(&mut self) {}
    fn on_button_b2_released(&mut self) {}
    fn on_button_x2_pressed(&mut self) {}
    fn on_button_x2_released(&mut self) {}
    fn on_button_y2_pressed(&mut self) {}
    fn on_button_y2_released(&mut self) {}

    // Cabinet menu button.
    fn on_button_menu_pressed(&mut self) {}
    fn on_button_menu_released(&mut self) {}

    // Stick direction entries. No callback fires when a stick returns
    // to center.
    fn on_stick1_up(&mut self) {}
    fn on_stick1_down(&mut self) {}
    fn on_stick1_left(&mut self) {}
    fn on_stick1_right(&mut self) {}
    fn on_stick2_up(&mut self) {}
    fn on_stick2_down(&mut self) {}
    fn on_stick2_left(&mut self) {}
    fn on_stick2_right(&mut self) {}
}

/// Route one edge to the matching listener method.
pub fn dispatch_edge<L: PadListener + ?Sized>(listener: &mut L, edge: PadEdge) {
    match edge {
        PadEdge::ButtonPressed(b) => match b {
            Button::A1 => listener.on_button_a1_pressed(),
            Button::B1 => listener.on_button_b1_pressed(),
            Button::X1 => listener.on_button_x1_pressed(),
            Button::Y1 => listener.on_button_y1_pressed(),
            Button::A2 => listener.on_button_a2_pressed(),
            Button::B2 => listener.on_button_b2_pressed(),
            Button::X2 => listener.on_button_x2_pressed(),
            Button::Y2 => listener.on_button_y2_pressed(),
            Button::Menu => listener.on_button_menu_pressed(),
        },
        PadEdge::ButtonReleased(b) => match b {
            Button::A1 => listener.on_button_a1_released(),
            Button::B1 => listener.on_button_b1_released(),
            Button::X1 => listener.on_button_x1_released(),
            Button::Y1 => listener.on_button_y1_released(),
            Button::A2 => listener.on_button_a2_released(),
            Button::B2 => listener.on_button_b2_released(),
            Button::X2 => listener.on_button_x2_released(),
            Button::Y2 => listener.on_button_y2_released(),
            Button::Menu => listener.on_button_menu_released(),
        },
        PadEdge::Stick1(d) => match d {
            StickDir::Up => listener.on_stick1_up(),
            StickDir::Down => listener.on_stick1_down(),
            StickDir::Left => listener.on_stick1_left(),
            StickDir::Right => listener.on_stick1_right(),
            StickDir::Center => {}
        },
        PadEdge::Stick2(d) => match d {
            StickDir::Up => listener.on_stick2_up(),
            StickDir::Down => listener.on_stick2_down(),
            StickDir::Left => listener.on_stick2_left(),
            StickDir::Right => listener.on_stick2_right(),
            StickDir::Center => {}
        },
    }
}

/// A listener that forwards every edge to one closure.
///
/// Handy for diagnostics and tests: `TapListener::new(|e| println!("{e}"))`.
pub struct TapListener<F: FnMut(PadEdge) + Send> {
    tap: F,
}

impl<F: FnMut(PadEdge) + Send> TapListener<F> {
    pub fn new(tap: F) -> Self {
        TapListener { tap }
    }
}

impl<F: FnMut(PadEdge) + Send> PadListener for TapListener<F> {
    fn on_button_a1_pressed(&mut self) {
        (self.tap)(PadEdge::ButtonPressed(Button::A1));
    }
    fn on_button_a1_released(&mut self) {
        (self.tap)(PadEdge::ButtonReleased(Button::A1));
    }
    fn on_button_b1_pressed(&mut self) {
        (self.tap)(PadEdge::ButtonPressed(Button::B1));
    }
    fn on_button_b1_released(&mut self) {
        (self.tap)(PadEdge::ButtonReleased(Button::B1));
    }
    fn on_button_x1_pressed(&mut self) {
        (self.tap)(PadEdge::ButtonPressed(Button::X1));
    }
    fn on_button_x1_released(&mut self) {
        (self.tap)(PadEdge::ButtonReleased(Button::X1));
    }
    fn on_button_y1_pressed(&mut self) {
        (self.tap)(PadEdge::ButtonPressed(Button::Y1));
    }
    fn on_button_y1_released(&mut self) {
        (self.tap)(PadEdge::ButtonReleased(Button::Y1));
    }
    fn on_button_a2_pressed(&mut self) {
        (self.tap)(PadEdge::ButtonPressed(Button::A2));
    }
    fn on_button_a2_released(&mut self) {
        (self.tap)(PadEdge::ButtonReleased(Button::A2));
    }
    fn on_button_b2_pressed(&mut self) {
        (self.tap)(PadEdge::ButtonPressed(Button::B2));
    }
    fn on_button_b2_released(&mut self) {
        (self.tap)(PadEdge::ButtonReleased(Button::B2));
    }
    fn on_button_x2_pressed(&mut self) {
        (self.tap)(PadEdge::ButtonPressed(Button::X2));
    }
    fn on_button_x2_released(&mut self) {
        (self.tap)(PadEdge::ButtonReleased(Button::X2));
    }
    fn on_button_y2_pressed(&mut self) {
        (self.tap)(PadEdge::ButtonPressed(Button::Y2));
    }
    fn on_button_y2_released(&mut self) {
        (self.tap)(PadEdge::ButtonReleased(Button::Y2));
    }
    fn on_button_menu_pressed(&mut self) {
        (self.tap)(PadEdge::ButtonPressed(Button::Menu));
    }
    fn on_button_menu_released(&mut self) {
        (self.tap)(PadEdge::ButtonReleased(Button::Menu));
    }
    fn on_stick1_up(&mut self) {
        (self.tap)(PadEdge::Stick1(StickDir::Up));
    }
    fn on_stick1_down(&mut self) {
        (self.tap)(PadEdge::Stick1(StickDir::Down));
    }
    fn on_stick1_left(&mut self) {
        (self.tap)(PadEdge::Stick1(StickDir::Left));
    }
    fn on_stick1_right(&mut self) {
        (self.tap)(PadEdge::Stick1(StickDir::Right));
    }
    fn on_stick2_up(&mut self) {
        (self.tap)(PadEdge::Stick2(StickDir::Up));
    }
    fn on_stick2_down(&mut self) {
        (self.tap)(PadEdge::Stick2(StickDir::Down));
    }
    fn on_stick2_left(&mut self) {
        (self.tap)(PadEdge::Stick2(StickDir::Left));
    }
    fn on_stick2_right(&mut self) {
        (self.tap)(PadEdge::Stick2(StickDir::Right));
    }
}
