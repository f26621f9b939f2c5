/// Cell voltage mapped to 100%.
pub const MAX_VOLTAGE: f32 = 4.2;
/// Cell voltage mapped to 0%.
pub const MIN_VOLTAGE: f32 = 2.7;

/// Linear approximation of a lithium-cell discharge curve, clamped to
/// [0, 100]. An implausible (negative) voltage from an open tap clamps
/// to 0%.
pub fn percentage(voltage: f32) -> f32 {
    let percentage = (voltage - MIN_VOLTAGE) / (MAX_VOLTAGE - MIN_VOLTAGE) * 100.0;
    if percentage < 0.0 {
        0.0
    } else if percentage > 100.0 {
        100.0
    } else {
        percentage
    }
}

/// Mean of the per-cell percentages, not a function of the pack total.
/// One depleted cell pulls the pack figure down even when the other
/// three are full.
pub fn pack_percentage(cells: &[f32; 4]) -> f32 {
    (percentage(cells[0]) + percentage(cells[1]) + percentage(cells[2]) + percentage(cells[3]))
        / 4.0
}
