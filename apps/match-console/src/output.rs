//! Writers for console results: JSON Lines or human-readable text.

use std::io::{self, Write};

use clap::ValueEnum;
use scoring_engine::{MatchSnapshot, MatchTransition, PlayerStatistics, PointType, Side};
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per command.
    #[default]
    Jsonl,
    Text,
}

pub struct OutputWriter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> OutputWriter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn write_snapshot(
        &mut self,
        snapshot: &MatchSnapshot,
        transitions: &[MatchTransition],
    ) -> io::Result<()> {
        match self.format {
            OutputFormat::Jsonl => {
                serde_json::to_writer(&mut self.out, snapshot)?;
                writeln!(self.out)?;
            }
            OutputFormat::Text => {
                for transition in transitions {
                    writeln!(self.out, "-- {}", describe(transition, snapshot))?;
                }
                writeln!(
                    self.out,
                    "set {} | home {} - {} away | sets {}-{} | timeouts {}/{} | {:?}",
                    snapshot.current_set,
                    snapshot.home_score,
                    snapshot.away_score,
                    snapshot.sets_won.home,
                    snapshot.sets_won.away,
                    snapshot.timeouts.home,
                    snapshot.timeouts.away,
                    snapshot.status,
                )?;
            }
        }
        self.out.flush()
    }

    pub fn write_stats(&mut self, stats: &PlayerStatistics) -> io::Result<()> {
        match self.format {
            OutputFormat::Jsonl => {
                serde_json::to_writer(&mut self.out, stats)?;
                writeln!(self.out)?;
            }
            OutputFormat::Text => {
                let breakdown: Vec<String> = PointType::ALL
                    .iter()
                    .map(|&pt| format!("{} {}", pt.code(), stats.count(pt)))
                    .collect();
                writeln!(
                    self.out,
                    "player {}: {} points ({})",
                    stats.player_id,
                    stats.points,
                    breakdown.join(", ")
                )?;
            }
        }
        self.out.flush()
    }

    pub fn write_error(&mut self, line: usize, code: &str, message: &str) -> io::Result<()> {
        match self.format {
            OutputFormat::Jsonl => {
                let value = json!({
                    "error": { "line": line, "code": code, "message": message }
                });
                serde_json::to_writer(&mut self.out, &value)?;
                writeln!(self.out)?;
            }
            OutputFormat::Text => {
                writeln!(self.out, "line {line}: {code}: {message}")?;
            }
        }
        self.out.flush()
    }
}

fn side_name(side: Option<Side>) -> String {
    side.map_or_else(|| "nobody".to_string(), |s| s.to_string())
}

fn describe(transition: &MatchTransition, snapshot: &MatchSnapshot) -> String {
    match transition {
        MatchTransition::MatchStarted => "match started".to_string(),
        MatchTransition::SetStarted { set_number } => format!("set {set_number} started"),
        MatchTransition::SetEnded { set_number, winner } => {
            let score = snapshot
                .set_results
                .iter()
                .find(|r| r.set_number == *set_number)
                .map(|r| format!(" {}-{}", r.home_score, r.away_score))
                .unwrap_or_default();
            format!("set {set_number} won by {}{score}", side_name(*winner))
        }
        MatchTransition::Suspended => "match suspended".to_string(),
        MatchTransition::Resumed => "match resumed".to_string(),
        MatchTransition::MatchEnded { winner } => {
            format!("match finished, winner {}", side_name(*winner))
        }
    }
}
