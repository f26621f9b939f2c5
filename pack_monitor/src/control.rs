use no_std_compat::cell::Cell;

use crate::alerts;
use crate::bsp::adc::{Adc, CHANNELS};
use crate::bsp::alert::AlertOutputs;
use crate::bsp::clock::Clock;
use crate::bsp::display::Display;
use crate::bsp::pin::Pin;
use crate::cells::{decompose, pack_total};
use crate::divider::{sense_point_voltage, undivided_voltage};
use crate::sampling::average;
use crate::soc::{pack_percentage, percentage};

/// Measurement and render cadence.
pub const UPDATE_INTERVAL: u32 = 2000;
/// Blocking delay after an accepted button edge.
pub const DEBOUNCE_DELAY: u32 = 50;
/// Raw reads averaged per channel per tick.
pub const READINGS_PER_CHANNEL: u16 = 50;

#[derive(Clone, Debug, Eq, PartialEq, Copy)]
pub enum DisplayMode {
    Voltages,
    Percentages,
    Total,
}

impl DisplayMode {
    pub fn next(self) -> DisplayMode {
        match self {
            DisplayMode::Voltages => DisplayMode::Percentages,
            DisplayMode::Percentages => DisplayMode::Total,
            DisplayMode::Total => DisplayMode::Voltages,
        }
    }
}

#[derive(Copy, Clone)]
struct State {
    mode: DisplayMode,
    cell_voltages: [f32; CHANNELS],
    total_voltage: f32,
    last_update: u32,
    last_button_level: bool,
}

/// Owns the measurement pipeline and the display mode state machine.
/// One [step] is one iteration of the cooperative control loop; the
/// host calls it forever.
pub struct PackMonitor<'a, B: Pin> {
    button: B,
    adc: &'a dyn Adc,
    alert_outputs: &'a dyn AlertOutputs,
    display: &'a dyn Display,
    clock: &'a dyn Clock,
    state: Cell<State>,
}

impl<'a, B: Pin> PackMonitor<'a, B> {
    pub fn new(
        button: B,
        adc: &'a dyn Adc,
        alert_outputs: &'a dyn AlertOutputs,
        display: &'a dyn Display,
        clock: &'a dyn Clock,
    ) -> Self {
        return PackMonitor {
            button,
            adc,
            alert_outputs,
            display,
            clock,
            state: Cell::new(State {
                mode: DisplayMode::Voltages,
                // zeroed voltages keep the alert lines asserted until
                // the first measurement lands, which is fail-safe
                cell_voltages: [0.0; CHANNELS],
                total_voltage: 0.0,
                last_update: 0,
                last_button_level: true,
            }),
        };
    }

    /// One loop iteration: measure and render when the tick interval has
    /// elapsed, then poll the button and rewrite the alert outputs
    /// regardless of tick timing.
    pub fn step(&self) {
        let now = self.clock.millis();
        if now.wrapping_sub(self.state.get().last_update) >= UPDATE_INTERVAL {
            self.refresh_readings();
            self.render();
            let state = self.state.get();
            self.state.set(State {
                last_update: now,
                ..state
            });
        }

        self.check_button();
        self.write_alerts();
    }

    fn refresh_readings(&self) {
        let mut taps = [0.0; CHANNELS];
        for channel in 0..CHANNELS {
            let avg = average(self.adc, channel, READINGS_PER_CHANNEL);
            taps[channel] = undivided_voltage(sense_point_voltage(avg));
        }
        let cell_voltages = decompose(taps);
        let state = self.state.get();
        self.state.set(State {
            cell_voltages,
            total_voltage: pack_total(&cell_voltages),
            ..state
        });
    }

    fn render(&self) {
        let state = self.state.get();
        match state.mode {
            DisplayMode::Voltages => self.render_cell_rows(&state.cell_voltages, 2, "V"),
            DisplayMode::Percentages => {
                let mut percentages = [0.0; CHANNELS];
                for i in 0..CHANNELS {
                    percentages[i] = percentage(state.cell_voltages[i]);
                }
                self.render_cell_rows(&percentages, 0, "%");
            }
            DisplayMode::Total => {
                self.display.set_cursor(0, 0);
                self.display.print("Total = ");
                self.display.print_value(state.total_voltage, 2);
                self.display.print(" V");
                self.display.set_cursor(0, 1);
                self.display.print("Battery % = ");
                self.display.print_value(pack_percentage(&state.cell_voltages), 0);
                self.display.print("%");
            }
        }
    }

    /// Two cells per row: "B1:<value><unit> B2:<value><unit>" and the
    /// same for B3/B4 on the second row.
    fn render_cell_rows(&self, values: &[f32; CHANNELS], decimals: u8, unit: &str) {
        const LABELS: [&str; 4] = ["B1:", "B2:", "B3:", "B4:"];
        for row in 0..2 {
            self.display.set_cursor(0, row as u8);
            for i in 0..2 {
                let cell = row * 2 + i;
                self.display.print(LABELS[cell]);
                self.display.print_value(values[cell], decimals);
                self.display.print(unit);
                if i == 0 {
                    self.display.print(" ");
                }
            }
        }
    }

    /// The pulled-up button advances the mode on its release (LOW to
    /// HIGH) edge. Polarity is inverted relative to the press edge on
    /// purpose; keep it.
    fn check_button(&self) {
        let state = self.state.get();
        let level = !self.button.is_down();
        if level && !state.last_button_level {
            self.state.set(State {
                mode: state.mode.next(),
                last_button_level: level,
                ..state
            });
            self.clock.delay_ms(DEBOUNCE_DELAY);
            // clear right away so no stale characters survive into the
            // next tick's render of the new mode
            self.display.clear();
        } else {
            self.state.set(State {
                last_button_level: level,
                ..state
            });
        }
    }

    fn write_alerts(&self) {
        let flags = alerts::evaluate(&self.state.get().cell_voltages);
        for (cell, on) in flags.cells.iter().enumerate() {
            self.alert_outputs.set_cell_alert(cell, *on);
        }
        self.alert_outputs.set_critical_alert(flags.critical);
    }
}
