use std::cell::Cell;
use std::rc::Rc;

use pack_monitor::bsp::pin::Pin;

/// Momentary button driven from terminal key events. A key press holds
/// the pin down for exactly one poll, so the poll after it observes the
/// release edge that advances the display mode.
#[derive(Clone)]
pub struct KeyboardButton {
    held_polls: Rc<Cell<u32>>,
}

impl KeyboardButton {
    /// Factory function to create a [KeyboardButton]
    pub fn create() -> KeyboardButton {
        return KeyboardButton {
            held_polls: Rc::new(Cell::new(0)),
        };
    }

    pub fn press(&self) {
        self.held_polls.set(1);
    }
}

impl Pin for KeyboardButton {
    /// returns true is pin is tied to the ground
    fn is_down(&self) -> bool {
        let held = self.held_polls.get();
        if held > 0 {
            self.held_polls.set(held - 1);
            return true;
        }
        return false;
    }
}
