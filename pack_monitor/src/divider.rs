pub const VREF: f32 = 5.0;
pub const RESOLUTION: u16 = 1023;

/// Divider resistances in ohms, high side and low side.
pub const R1: f32 = 14830.0;
pub const R2: f32 = 2700.0;

/// Per-board trim correcting for resistor tolerance on the taps.
pub const CALIBRATION_FACTOR: f32 = 1.047;

/// Voltage present at the divider tap for an averaged 10-bit ADC code.
pub fn sense_point_voltage(avg: u16) -> f32 {
    avg as f32 * VREF / RESOLUTION as f32
}

/// Undoes the divider attenuation: the tap sees vout, the stack node
/// above it sees vout * (R1 + R2) / R2, trimmed by the calibration factor.
pub fn undivided_voltage(vout: f32) -> f32 {
    vout * (R1 + R2) / R2 * CALIBRATION_FACTOR
}
