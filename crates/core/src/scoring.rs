//! Scoring module - line-clear points and level progression
//!
//! Every cleared line is worth the same: clearing four rows at once scores
//! exactly four times a single. Level and gravity are pure functions of the
//! total number of cleared lines.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, LINES_PER_LEVEL, POINTS_PER_LINE,
};

/// Points for clearing `lines` rows in one lock
pub fn line_clear_score(lines: u32) -> u32 {
    lines.saturating_mul(POINTS_PER_LINE)
}

/// Level management
/// Level starts at 1 and increases every 10 lines cleared
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Get drop interval for a level (in milliseconds)
/// 800ms at level 1, 70ms faster per level, never below 100ms
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}
