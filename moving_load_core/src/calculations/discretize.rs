//! Sampling and rounding helpers shared by the envelope and profile analyses.

/// Round `value` to `decimals` places. Exact ties go to the even digit,
/// so 1.125 reports as 1.12 and -0.125 as -0.12.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round_ties_even() / factor
}

/// Positions from 0 toward `stop` in increments of `step`.
///
/// The accumulator is advanced by repeated addition and compared unrounded
/// against `stop`; each emitted sample is then rounded to `decimals`. When the
/// accumulator drifts just below `stop` the last sample rounds onto `stop`
/// itself (a stop of 8.0 at step 0.1 gives 81 samples ending at 8.0).
///
/// Returns an empty vector when `stop <= 0`.
pub fn stepped_positions(stop: f64, step: f64, decimals: u32) -> Vec<f64> {
    let mut positions = Vec::new();
    let mut current = 0.0;
    while current < stop {
        positions.push(round_to(current, decimals));
        current += step;
    }
    positions
}

/// Number of diagram samples over `span`: `trunc(span / step) + 1`.
pub fn sample_count(span: f64, step: f64) -> usize {
    (span / step) as usize + 1
}

/// Evenly spaced diagram samples `i * step` for `i` in `0..sample_count`.
pub fn diagram_positions(span: f64, step: f64) -> Vec<f64> {
    (0..sample_count(span, step)).map(|i| i as f64 * step).collect()
}
