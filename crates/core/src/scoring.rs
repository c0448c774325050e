//! Scoring module - line clear points
//!
//! A lock that clears `n` rows at once scores `100 * n²`, so multi-line
//! clears are worth more than the same rows cleared one at a time:
//!
//! | Lines | Points |
//! |-------|--------|
//! | 1 | 100 |
//! | 2 | 400 |
//! | 3 | 900 |
//! | 4 | 1600 |
//!
//! Points are awarded once per lock event, never per row.

use crate::types::LINE_CLEAR_BASE;

/// Points for clearing `lines` rows in a single lock
pub fn calculate_line_score(lines: usize) -> u32 {
    let lines = u32::try_from(lines).unwrap_or(u32::MAX);
    LINE_CLEAR_BASE.saturating_mul(lines.saturating_mul(lines))
}
