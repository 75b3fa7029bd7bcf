use std::collections::BTreeMap;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Week range – which weeks the frontend charts
// ---------------------------------------------------------------------------

/// First charted week. Week 0 and negative codes mark preseason rows.
pub const WEEK_MIN: i64 = 1;

/// Last charted week. The play-by-play export numbers postseason rounds
/// straight after the regular season; codes above 21 (Pro Bowl and later)
/// are dropped.
pub const WEEK_MAX: i64 = 21;

// ---------------------------------------------------------------------------
// PlayRow – one raw CSV row
// ---------------------------------------------------------------------------

/// A single source row, untyped: header name → raw cell text.
///
/// The export carries hundreds of columns; all of them ride along here and
/// the filter projects the handful the chart needs.
#[derive(Debug, Clone)]
pub struct PlayRow {
    /// 1-based data row number (the header row is not counted).
    pub row: u64,
    /// All cells keyed by header name.
    pub fields: BTreeMap<String, String>,
}

impl PlayRow {
    /// Look up a cell by column name.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// ChartPlay – one projected output record
// ---------------------------------------------------------------------------

/// The seven-column projection the chart frontend consumes.
///
/// Field order is the key order in the written document. `week` and
/// `home_wp` are the only typed columns; everything else is passed through
/// as text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPlay {
    pub play_id: String,
    pub game_id: String,
    pub home_team: String,
    pub away_team: String,
    pub week: i64,
    pub game_date: String,
    pub home_wp: f64,
}
