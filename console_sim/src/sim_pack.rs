use std::cell::Cell;

use pack_monitor::bsp::adc::{Adc, ADC_MAX};
use pack_monitor::divider::{CALIBRATION_FACTOR, R1, R2, RESOLUTION, VREF};

/// Simulated pack behind the divider network: holds the true cell
/// voltages and produces the quantized codes the cumulative taps would
/// read through the dividers.
pub struct SimPack {
    cells: Cell<[f32; 4]>,
}

impl SimPack {
    pub fn create(cells: [f32; 4]) -> SimPack {
        return SimPack {
            cells: Cell::new(cells),
        };
    }

    pub fn cell_voltages(&self) -> [f32; 4] {
        self.cells.get()
    }

    pub fn adjust(&self, cell: usize, delta: f32) {
        let mut cells = self.cells.get();
        cells[cell] = (cells[cell] + delta).max(0.0).min(4.5);
        self.cells.set(cells);
    }
}

impl Adc for SimPack {
    fn read_raw(&self, channel: usize) -> u16 {
        let cells = self.cells.get();
        let cumulative: f32 = cells[..=channel].iter().sum();
        let vout = cumulative * R2 / (R1 + R2) / CALIBRATION_FACTOR;
        let code = vout * RESOLUTION as f32 / VREF;
        if code < 0.0 {
            0
        } else if code > ADC_MAX as f32 {
            ADC_MAX
        } else {
            code as u16
        }
    }
}
