pub mod adc {
    /// Number of stacked sense channels, one divider tap per cell.
    pub const CHANNELS: usize = 4;
    /// Highest code of the 10-bit converter.
    pub const ADC_MAX: u16 = 1023;

    /// Raw sampling source. One call is one conversion on one channel,
    /// returning a code in [0, ADC_MAX].
    pub trait Adc {
        fn read_raw(&self, channel: usize) -> u16;
    }
}

pub mod pin {
    /// A pin (of a button) which may be down (tied to the ground) or up (floating pin)
    pub trait Pin {
        fn is_down(&self) -> bool;
    }
}

pub mod alert {
    /// Discrete alert sink: four per-cell low-voltage lines plus the
    /// pack-wide critical line. Levels are rewritten every loop iteration.
    pub trait AlertOutputs {
        fn set_cell_alert(&self, cell: usize, on: bool);
        fn set_critical_alert(&self, on: bool);
    }
}

pub mod display {
    /// Character display sink. Mirrors the LCD's print(value, precision)
    /// call shape, so float formatting stays behind the trait and the
    /// core never needs an allocator.
    pub trait Display {
        fn set_cursor(&self, col: u8, row: u8);
        fn clear(&self);
        fn print(&self, text: &str);
        fn print_value(&self, value: f32, decimals: u8);
    }
}

pub mod clock {
    /// Monotonic milliseconds for the tick gate, plus the blocking
    /// debounce delay after an accepted button edge.
    pub trait Clock {
        fn millis(&self) -> u32;
        fn delay_ms(&self, ms: u32);
    }
}
