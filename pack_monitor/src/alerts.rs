/// Low-voltage thresholds by cell position. Odd positions trip at 2.9 V,
/// even positions at 3.9 V; the split comes from the deployed threshold
/// table and is kept verbatim (see DESIGN.md).
pub const CELL_LOW_THRESHOLDS: [f32; 4] = [2.9, 3.9, 2.9, 3.9];

/// Any cell below this raises the pack-wide critical alarm.
pub const CRITICAL_THRESHOLD: f32 = 2.6;

#[derive(Clone, Debug, PartialEq, Copy)]
pub struct AlertFlags {
    pub cells: [bool; 4],
    pub critical: bool,
}

/// Stateless re-evaluation with no hysteresis: a flag clears the moment
/// the measured voltage recovers above its threshold.
pub fn evaluate(cells: &[f32; 4]) -> AlertFlags {
    let mut flags = [false; 4];
    for i in 0..4 {
        flags[i] = cells[i] < CELL_LOW_THRESHOLDS[i];
    }
    AlertFlags {
        cells: flags,
        critical: cells.iter().any(|v| *v < CRITICAL_THRESHOLD),
    }
}
