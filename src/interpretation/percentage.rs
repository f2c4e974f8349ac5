// src/interpretation/percentage.rs

/// Converts a score ratio to a whole percentage in `0..=100`.
///
/// Returns 0 when `max_score` is 0. Rounds half up, computed in integer
/// arithmetic so every caller gets the same value for the same inputs.
pub fn percentage(score: u32, max_score: u32) -> u8 {
    percentage_of_totals(u64::from(score), u64::from(max_score))
}

/// Same as [`percentage`] for summed totals, which may exceed `u32`.
pub fn percentage_of_totals(score: u64, max_score: u64) -> u8 {
    if max_score == 0 {
        return 0;
    }

    let (score, max_score) = (u128::from(score), u128::from(max_score));
    let rounded = (200 * score + max_score) / (2 * max_score);
    rounded.min(100) as u8
}
