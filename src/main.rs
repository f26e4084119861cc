//! Match replay runner (default binary).
//!
//! Reads a sequence of point winners from `--points` or stdin, feeds them
//! through a match and prints the resulting scoreboard.

use std::io::Read;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;

use tennis_scorer::cli::{parse_points, Args, OutputFormat};
use tennis_scorer::history::MatchRecord;
use tennis_scorer::replay::{render_text, replay, Scoreboard};
use tennis_scorer::{logging, replay::ReplayReport};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let input = match &args.points {
        Some(tokens) => tokens.join(" "),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read points from stdin")?;
            buf
        }
    };

    let points = parse_points(&input).context("failed to parse point sequence")?;
    tracing::debug!(count = points.len(), "replaying points");

    let report = replay(&points);
    print_report(&args, &report)
}

fn print_report(args: &Args, report: &ReplayReport) -> Result<()> {
    let snapshot = report.tennis_match.snapshot();

    let record = if report.tennis_match.complete() {
        Some(
            MatchRecord::from_match(&report.tennis_match, args.location.as_str(), Utc::now())
                .context("failed to build match record")?,
        )
    } else {
        None
    };

    match args.format {
        OutputFormat::Text => {
            print!("{}", render_text(&snapshot));
            if let Some(record) = &record {
                println!();
                println!("{}", record);
            }
        }
        OutputFormat::Json => {
            let out = serde_json::json!({
                "scoreboard": Scoreboard::from(&snapshot),
                "points_played": report.points_played,
                "points_ignored": report.points_ignored,
                "server_changes": report.server_changes,
                "ball_changes": report.ball_changes,
                "record": record,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&out).context("failed to encode output")?
            );
        }
    }

    Ok(())
}
