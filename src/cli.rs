//! Command-line configuration for the replay binary.

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};

use crate::types::Player;

#[derive(Debug, Clone, Parser)]
#[command(name = "tennis-scorer")]
#[command(about = "Replay a sequence of points through a best-of-five tennis match")]
pub struct Args {
    /// Point winners, e.g. "1121 2212" or "p1,p2,p1" (read from stdin when omitted)
    #[arg(short, long, num_args = 1.., value_delimiter = ' ')]
    pub points: Option<Vec<String>>,

    /// Where the match was played (stored in the match record)
    #[arg(long, env = "TENNIS_LOCATION", default_value = "Unknown location")]
    pub location: String,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Parse a point sequence.
///
/// Tokens are separated by whitespace or commas. A token is either a player
/// word (`p1`, `player2`, ...) or a run of `1`/`2` digits, one point each.
pub fn parse_points(input: &str) -> Result<Vec<Player>> {
    let mut points = Vec::new();

    for token in input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        if let Some(player) = Player::from_str(token) {
            points.push(player);
            continue;
        }

        for c in token.chars() {
            match c {
                '1' => points.push(Player::One),
                '2' => points.push(Player::Two),
                _ => bail!("invalid point token: {:?}", token),
            }
        }
    }

    if points.is_empty() {
        bail!("no points given");
    }

    Ok(points)
}
