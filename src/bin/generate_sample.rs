//! Writes a synthetic single-team play-by-play CSV so the exporter can be
//! exercised without a real data pull. Deterministic: same seed, same file.

/// Minimal deterministic PRNG (splitmix64)
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let team = "BUF";
    let opponents = [
        "NYJ", "MIA", "NE", "KC", "CIN", "DAL", "TB", "PHI", "DEN", "LAC", "JAX",
    ];

    // One kickoff date per week slot; 19–22 are the postseason rounds, and
    // week 22 is there to be filtered out downstream.
    let game_dates = [
        "2023-09-10", "2023-09-17", "2023-09-24", "2023-10-01", "2023-10-08",
        "2023-10-15", "2023-10-22", "2023-10-29", "2023-11-05", "2023-11-12",
        "2023-11-19", "2023-11-26", "2023-12-03", "2023-12-10", "2023-12-17",
        "2023-12-24", "2023-12-31", "2024-01-07", "2024-01-14", "2024-01-21",
        "2024-01-28", "2024-02-11",
    ];

    let output_path = "sample_pbp.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "play_id", "game_id", "home_team", "away_team", "posteam", "week",
            "game_date", "qtr", "home_wp",
        ])
        .expect("Failed to write header");

    let mut play_id: i64 = 0;
    let mut games = 0;

    for (week_idx, game_date) in game_dates.iter().enumerate() {
        let week = week_idx + 1;
        let opponent = opponents[week_idx % opponents.len()];
        let at_home = week_idx % 2 == 0;
        let (home_team, away_team) = if at_home { (team, opponent) } else { (opponent, team) };
        let game_id = format!("2023_{week:02}_{away_team}_{home_team}");

        let plays = 60 + (rng.next_u64() % 30) as i64;
        let mut home_wp = 0.4 + rng.next_f64() * 0.2;

        for play_no in 0..plays {
            home_wp = (home_wp + (rng.next_f64() - 0.5) * 0.08).clamp(0.02, 0.98);
            play_id += 1;

            // Kickoffs and other untimed snaps carry no model estimate.
            let wp_cell = if play_no % 14 == 0 {
                String::new()
            } else {
                format!("{home_wp:.4}")
            };
            let posteam = if rng.next_f64() < 0.5 { home_team } else { away_team };
            let qtr = 1 + play_no * 4 / plays;

            writer
                .write_record([
                    play_id.to_string(),
                    game_id.clone(),
                    home_team.to_string(),
                    away_team.to_string(),
                    posteam.to_string(),
                    week.to_string(),
                    game_date.to_string(),
                    qtr.to_string(),
                    wp_cell,
                ])
                .expect("Failed to write play row");
        }
        games += 1;
    }

    writer.flush().expect("Failed to flush output file");

    println!("Wrote {play_id} plays across {games} games to {output_path}");
}
