use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use super::model::ChartPlay;

// ---------------------------------------------------------------------------
// JSON document writer
// ---------------------------------------------------------------------------

/// Write the chart document: a pretty-printed JSON array of plays.
///
/// `week` and `home_wp` come out as numeric literals, the other five
/// columns as strings. The frontend fetches this file as-is, so it is
/// written in one piece after the filtering pass and terminated with a
/// newline.
pub fn write_chart_data(path: &Path, plays: &[ChartPlay]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, plays).context("serializing chart data")?;
    writer.write_all(b"\n").context("terminating chart data")?;
    writer.flush().context("flushing chart data")?;

    Ok(())
}
