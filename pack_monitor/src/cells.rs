/// Pack-level trim applied to the summed cell voltages, independent of
/// the per-tap calibration factor.
pub const TOTAL_CALIBRATION_FACTOR: f32 = 0.99;

/// The taps are wired cumulatively: tap k carries the sum of cells 1..=k,
/// so individual cells are recovered by successive subtraction. Each
/// subtraction uses the already-decomposed lower cells, which means a
/// low-cell error propagates into every higher cell's estimate. That
/// matches the wiring topology and stays as is.
pub fn decompose(taps: [f32; 4]) -> [f32; 4] {
    let cell1 = taps[0];
    let cell2 = taps[1] - cell1;
    let cell3 = taps[2] - (cell1 + cell2);
    let cell4 = taps[3] - (cell1 + cell2 + cell3);
    [cell1, cell2, cell3, cell4]
}

pub fn pack_total(cells: &[f32; 4]) -> f32 {
    (cells[0] + cells[1] + cells[2] + cells[3]) * TOTAL_CALIBRATION_FACTOR
}
