mod data;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use data::{export, filter, loader};

#[derive(Parser)]
#[command(name = "wp-export")]
#[command(about = "Filter a team's play-by-play CSV into win-probability chart data", long_about = None)]
struct Cli {
    /// Input play-by-play CSV file
    input: PathBuf,

    /// Output JSON file served to the chart frontend
    #[arg(short, long, default_value = "wp_data.json")]
    output: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let rows = loader::open(&cli.input)?;
    let outcome = filter::filter_plays(rows)?;

    let stats = &outcome.stats;
    info!(
        "kept {} of {} plays ({} outside charted weeks, {} without win probability)",
        stats.kept, stats.rows_read, stats.skipped_week, stats.skipped_empty
    );

    export::write_chart_data(&cli.output, &outcome.plays)?;
    info!("wrote {}", cli.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use crate::data::{export, filter, loader};

    fn csv_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".csv").unwrap();
        write!(file, "{content}").unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn full_pipeline_keeps_chartable_plays_only() {
        let input = csv_file(
            "play_id,game_id,home_team,away_team,week,game_date,home_wp\n\
             1,g1,BUF,NYJ,5,2023-10-01,0.62\n\
             2,g2,BUF,MIA,0,2023-09-10,0.55\n\
             3,,BUF,KC,6,2023-10-08,0.40\n\
             4,g4,BUF,NE,21,2024-01-01,0.71\n\
             5,g5,BUF,DAL,22,2024-01-08,0.30\n",
        );

        let outcome = filter::filter_plays(loader::open(input.path()).unwrap()).unwrap();
        assert_eq!(outcome.stats.rows_read, 5);

        let out = NamedTempFile::with_suffix(".json").unwrap();
        export::write_chart_data(out.path(), &outcome.plays).unwrap();

        let text = std::fs::read_to_string(out.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let array = value.as_array().unwrap();

        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["play_id"], "1");
        assert_eq!(array[0]["week"], 5);
        assert_eq!(array[0]["home_wp"], 0.62);
        assert_eq!(array[1]["play_id"], "4");
        assert_eq!(array[1]["week"], 21);
    }

    #[test]
    fn corrupt_win_probability_stops_before_any_output() {
        let input = csv_file(
            "play_id,game_id,home_team,away_team,week,game_date,home_wp\n\
             1,g1,BUF,NYJ,5,2023-10-01,N/A\n",
        );

        let err = filter::filter_plays(loader::open(input.path()).unwrap()).unwrap_err();
        assert!(err.to_string().contains("home_wp 'N/A'"));
    }
}
