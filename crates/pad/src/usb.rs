//! USB HID joystick backend for the cabinet's DragonRise pad.
//!
//! Reads raw input reports instead of going through a higher-level
//! gamepad layer so the axis handling can match the cabinet hardware:
//! the stick's resting values drift between units, so the first report
//! after opening calibrates the axis center and directions are measured
//! as excursions beyond a fixed deadzone from that center.
//!
//! Report layout (8 bytes): byte 0 is the X axis, byte 1 the Y axis,
//! byte 6 the button bitmask. Only stick 1 and the player-1 buttons are
//! wired on the physical pad; stick 2 and the player-2 row always read
//! neutral.

use hidapi::{HidApi, HidDevice};
use tracing::{info, warn};

use joycab_types::{Button, ButtonSet, PadState, StickDir};

use crate::Gamepad;

const VENDOR_ID: u16 = 0x0079;
const PRODUCT_ID: u16 = 0x0006;

/// Axis excursion (raw units) required beyond the calibrated center.
const DEADZONE: i16 = 20;

const MASK_A1: u8 = 0x20;
const MASK_B1: u8 = 0x08;
const MASK_X1: u8 = 0x40;
const MASK_Y1: u8 = 0x80;
const MASK_MENU: u8 = 0x10;

/// The cabinet's USB joystick.
///
/// Opening never fails: when the device is absent or breaks mid-session
/// the pad logs once and degrades to idle samples for good.
pub struct UsbPad {
    device: Option<HidDevice>,
    center: Option<(i16, i16)>,
    x: i16,
    y: i16,
    buttons: ButtonSet,
}

impl UsbPad {
    pub fn open() -> Self {
        let device = match Self::try_open() {
            Ok(device) => {
                info!(vendor = VENDOR_ID, product = PRODUCT_ID, "usb pad opened");
                Some(device)
            }
            Err(err) => {
                warn!("usb pad unavailable, running inert: {}", err);
                None
            }
        };
        UsbPad {
            device,
            center: None,
            x: 0,
            y: 0,
            buttons: ButtonSet::empty(),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.device.is_some()
    }

    fn try_open() -> Result<HidDevice, hidapi::HidError> {
        let api = HidApi::new()?;
        let device = api.open(VENDOR_ID, PRODUCT_ID)?;
        device.set_blocking_mode(false)?;
        Ok(device)
    }

    fn apply_report(&mut self, report: &[u8]) {
        self.x = report[0] as i16;
        self.y = report[1] as i16;
        // First report fixes the axis center for the session.
        if self.center.is_none() {
            self.center = Some((self.x, self.y));
        }

        let mask = report[6];
        self.buttons.set(Button::A1, mask & MASK_A1 != 0);
        self.buttons.set(Button::B1, mask & MASK_B1 != 0);
        self.buttons.set(Button::X1, mask & MASK_X1 != 0);
        self.buttons.set(Button::Y1, mask & MASK_Y1 != 0);
        self.buttons.set(Button::Menu, mask & MASK_MENU != 0);
    }

    fn current_state(&self) -> PadState {
        let Some((cx, cy)) = self.center else {
            return PadState::idle();
        };
        let stick1 = StickDir::resolve(
            self.y < cy - DEADZONE,
            self.y > cy + DEADZONE,
            self.x < cx - DEADZONE,
            self.x > cx + DEADZONE,
        );
        PadState {
            stick1,
            stick2: StickDir::Center,
            buttons: self.buttons,
        }
    }
}

impl Gamepad for UsbPad {
    fn sample(&mut self) -> PadState {
        let Some(device) = self.device.as_ref() else {
            return PadState::idle();
        };

        // Drain every queued report; the newest one wins.
        let mut buf = [0u8; 8];
        loop {
            match device.read(&mut buf) {
                Ok(0) => break,
                Ok(n) if n >= 7 => self.apply_report(&buf[..n]),
                Ok(_) => {}
                Err(err) => {
                    warn!("usb pad read failed, going inert: {}", err);
                    self.device = None;
                    return PadState::idle();
                }
            }
        }
        self.current_state()
    }
}
