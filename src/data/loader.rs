use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::PlayRow;

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

/// Open a play-by-play CSV and return a lazy row iterator.
///
/// The header row names the columns; every data row becomes a [`PlayRow`]
/// keyed by those names. Extra columns are carried through untouched and
/// no column set is enforced here — absence of a required column surfaces
/// row by row in the filter.
pub fn open(path: &Path) -> Result<PlayRows> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV header row")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    Ok(PlayRows {
        headers,
        records: reader.into_records(),
        row: 0,
    })
}

/// Single-pass iterator over the data rows of one CSV file.
///
/// Yields rows in file order; a reader-level error (ragged row, bad UTF-8)
/// is yielded in place so the consumer decides whether it is fatal.
pub struct PlayRows {
    headers: Vec<String>,
    records: csv::StringRecordsIntoIter<File>,
    row: u64,
}

impl std::fmt::Debug for PlayRows {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayRows")
            .field("headers", &self.headers)
            .field("row", &self.row)
            .finish_non_exhaustive()
    }
}

impl Iterator for PlayRows {
    type Item = Result<PlayRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.records.next()?;
        self.row += 1;
        let row = self.row;

        Some(
            result
                .with_context(|| format!("CSV row {row}"))
                .map(|record| {
                    let fields: BTreeMap<String, String> = self
                        .headers
                        .iter()
                        .zip(record.iter())
                        .map(|(header, value)| (header.clone(), value.to_string()))
                        .collect();
                    PlayRow { row, fields }
                }),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn csv_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".csv").unwrap();
        write!(file, "{content}").unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn rows_are_keyed_by_header_name() {
        let file = csv_file(
            "play_id,game_id,week\n\
             1,2023_01_BUF_NYJ,1\n\
             2,2023_01_BUF_NYJ,1\n",
        );

        let rows: Vec<PlayRow> = open(file.path())
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].row, 1);
        assert_eq!(rows[1].row, 2);
        assert_eq!(rows[0].field("play_id"), Some("1"));
        assert_eq!(rows[1].field("game_id"), Some("2023_01_BUF_NYJ"));
        assert_eq!(rows[0].field("no_such_column"), None);
    }

    #[test]
    fn extra_columns_ride_along() {
        let file = csv_file(
            "play_id,week,desc,yards_gained\n\
             1,3,J.Allen pass deep right,24\n",
        );

        let rows: Vec<PlayRow> = open(file.path())
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(rows[0].fields.len(), 4);
        assert_eq!(rows[0].field("desc"), Some("J.Allen pass deep right"));
    }

    #[test]
    fn empty_cells_stay_empty_strings() {
        let file = csv_file(
            "play_id,home_wp\n\
             1,\n",
        );

        let rows: Vec<PlayRow> = open(file.path())
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(rows[0].field("home_wp"), Some(""));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = open(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(err.to_string().contains("not/here.csv"));
    }

    #[test]
    fn ragged_row_yields_an_error() {
        let file = csv_file(
            "play_id,game_id,week\n\
             1,2023_01_BUF_NYJ,1\n\
             2,2023_01_BUF_NYJ\n",
        );

        let results: Vec<Result<PlayRow>> = open(file.path()).unwrap().collect();
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(format!("{:#}", results[1].as_ref().unwrap_err()).contains("CSV row 2"));
    }
}
