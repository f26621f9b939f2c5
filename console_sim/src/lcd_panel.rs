use std::cell::{Cell, RefCell};

use pack_monitor::bsp::display::Display;

pub const COLS: usize = 16;

/// Character display which resides in memory, rendered by the tui layer
pub struct LcdPanel {
    lines: RefCell<[String; 2]>,
    cursor: Cell<(usize, usize)>,
}

impl LcdPanel {
    /// Factory function to create a blank panel
    pub fn create() -> LcdPanel {
        return LcdPanel {
            lines: RefCell::new([String::new(), String::new()]),
            cursor: Cell::new((0, 0)),
        };
    }

    /// Row content padded to the panel width
    pub fn line(&self, row: usize) -> String {
        let mut line = self.lines.borrow()[row].clone();
        line.truncate(COLS);
        while line.len() < COLS {
            line.push(' ');
        }
        line
    }

    fn write_at_cursor(&self, text: &str) {
        let (col, row) = self.cursor.get();
        let mut lines = self.lines.borrow_mut();
        let line = &mut lines[row];
        let end = col + text.len();
        while line.len() < end {
            line.push(' ');
        }
        line.replace_range(col..end, text);
        self.cursor.set((end, row));
    }
}

impl Display for LcdPanel {
    fn set_cursor(&self, col: u8, row: u8) {
        self.cursor.set((col as usize, row as usize));
    }

    fn clear(&self) {
        *self.lines.borrow_mut() = [String::new(), String::new()];
        self.cursor.set((0, 0));
    }

    fn print(&self, text: &str) {
        self.write_at_cursor(text);
    }

    fn print_value(&self, value: f32, decimals: u8) {
        self.write_at_cursor(&format!("{:.*}", decimals as usize, value));
    }
}
