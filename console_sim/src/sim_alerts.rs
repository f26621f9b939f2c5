use std::cell::Cell;

use pack_monitor::bsp::alert::AlertOutputs;

/// Alert lines which reside in memory, rendered as lamps by the tui layer
pub struct SimAlerts {
    cells: Cell<[bool; 4]>,
    critical: Cell<bool>,
}

impl SimAlerts {
    pub fn create() -> SimAlerts {
        return SimAlerts {
            cells: Cell::new([false; 4]),
            critical: Cell::new(false),
        };
    }

    pub fn cell_alerts(&self) -> [bool; 4] {
        self.cells.get()
    }

    pub fn critical(&self) -> bool {
        self.critical.get()
    }
}

impl AlertOutputs for SimAlerts {
    fn set_cell_alert(&self, cell: usize, on: bool) {
        let mut cells = self.cells.get();
        cells[cell] = on;
        self.cells.set(cells);
    }

    fn set_critical_alert(&self, on: bool) {
        self.critical.set(on);
    }
}
