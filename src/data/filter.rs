use anyhow::{anyhow, Result};
use log::{debug, info};
use thiserror::Error;

use super::model::{ChartPlay, PlayRow, WEEK_MAX, WEEK_MIN};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A win-probability cell that is present but not numeric.
///
/// Unlike a bad `week` cell, which only drops its own row, this aborts the
/// whole export: a non-empty `home_wp` that cannot be charted means the
/// source file is corrupt, not merely sparse.
#[derive(Debug, Error)]
#[error("row {row}: home_wp '{value}' is not a number")]
pub struct InvalidWinProb {
    pub row: u64,
    pub value: String,
}

// ---------------------------------------------------------------------------
// Pass accounting
// ---------------------------------------------------------------------------

/// Row counters for the end-of-run summary.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilterStats {
    /// Rows consumed from the source.
    pub rows_read: usize,
    /// Rows surviving both predicates.
    pub kept: usize,
    /// Rows dropped because `week` was missing, non-numeric, or outside
    /// the charted range.
    pub skipped_week: usize,
    /// Rows dropped because `home_wp` or `game_id` was empty.
    pub skipped_empty: usize,
}

/// Everything one full filtering pass produces.
#[derive(Debug)]
pub struct FilterOutcome {
    /// Surviving plays, in source order.
    pub plays: Vec<ChartPlay>,
    pub stats: FilterStats,
}

// ---------------------------------------------------------------------------
// The pass
// ---------------------------------------------------------------------------

/// Run the filter/projection over a lazy row sequence.
///
/// Keeps rows whose `week` parses to a value in
/// [`WEEK_MIN`]..=[`WEEK_MAX`] and whose `home_wp` and `game_id` cells are
/// non-empty, projecting each survivor onto [`ChartPlay`]. The first row
/// read is logged whole so an operator can eyeball the column layout.
pub fn filter_plays<I>(rows: I) -> Result<FilterOutcome>
where
    I: IntoIterator<Item = Result<PlayRow>>,
{
    let mut plays = Vec::new();
    let mut stats = FilterStats::default();

    for result in rows {
        let row = result?;
        stats.rows_read += 1;
        if stats.rows_read == 1 {
            info!("first row: {:?}", row.fields);
        }

        // Charted weeks only. Anything that does not parse as an integer
        // (missing column included) drops the row, nothing more.
        let week = match row.field("week").and_then(|s| s.trim().parse::<i64>().ok()) {
            Some(week) => week,
            None => {
                debug!("row {}: no usable week, dropped", row.row);
                stats.skipped_week += 1;
                continue;
            }
        };
        if !(WEEK_MIN..=WEEK_MAX).contains(&week) {
            debug!("row {}: week {} not charted, dropped", row.row, week);
            stats.skipped_week += 1;
            continue;
        }

        // Plays without a win probability or a game id cannot be charted.
        // Emptiness is the only check on game_id; it stays opaque text.
        let home_wp_raw = required(&row, "home_wp")?;
        let game_id = required(&row, "game_id")?;
        if home_wp_raw.is_empty() || game_id.is_empty() {
            debug!("row {}: empty home_wp or game_id, dropped", row.row);
            stats.skipped_empty += 1;
            continue;
        }

        let home_wp = home_wp_raw
            .trim()
            .parse::<f64>()
            .map_err(|_| InvalidWinProb {
                row: row.row,
                value: home_wp_raw.to_string(),
            })?;

        plays.push(ChartPlay {
            play_id: required(&row, "play_id")?.to_string(),
            game_id: game_id.to_string(),
            home_team: required(&row, "home_team")?.to_string(),
            away_team: required(&row, "away_team")?.to_string(),
            week,
            game_date: required(&row, "game_date")?.to_string(),
            home_wp,
        });
        stats.kept += 1;
    }

    Ok(FilterOutcome { plays, stats })
}

fn required<'a>(row: &'a PlayRow, column: &str) -> Result<&'a str> {
    row.field(column)
        .ok_or_else(|| anyhow!("row {}: missing column '{column}'", row.row))
}
