//! Line-oriented command language for driving a match.
//!
//! ```text
//! # comments and blank lines are ignored
//! start
//! point home 101 SPK
//! point away - ERR
//! undo
//! next-set
//! timeout away
//! stats 101
//! ```

use std::fmt;

use scoring_engine::{PlayerId, PointType, ScoringError, Side};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Point {
        side: Side,
        /// `-` in the script leaves the point unattributed.
        player_id: Option<PlayerId>,
        point_type: PointType,
    },
    Undo,
    NextSet,
    EndSet,
    Timeout(Side),
    Suspend,
    Resume,
    End,
    Stats(PlayerId),
    Show,
}

impl Command {
    /// Script keyword for this command.
    pub const fn keyword(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Point { .. } => "point",
            Command::Undo => "undo",
            Command::NextSet => "next-set",
            Command::EndSet => "end-set",
            Command::Timeout(_) => "timeout",
            Command::Suspend => "suspend",
            Command::Resume => "resume",
            Command::End => "end",
            Command::Stats(_) => "stats",
            Command::Show => "show",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Point {
                side,
                player_id,
                point_type,
            } => match player_id {
                Some(id) => write!(f, "point {side} {id} {}", point_type.code()),
                None => write!(f, "point {side} - {}", point_type.code()),
            },
            Command::Timeout(side) => write!(f, "timeout {side}"),
            Command::Stats(id) => write!(f, "stats {id}"),
            other => f.write_str(other.keyword()),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command {word:?}")]
    UnknownCommand { line: usize, word: String },
    #[error("line {line}: usage: {usage}")]
    Usage { line: usize, usage: &'static str },
    #[error("line {line}: unknown side {value:?}")]
    InvalidSide { line: usize, value: String },
    #[error("line {line}: invalid player id {value:?}")]
    InvalidPlayer { line: usize, value: String },
    #[error("line {line}: {source}")]
    PointType {
        line: usize,
        #[source]
        source: ScoringError,
    },
}

impl ScriptError {
    pub fn line(&self) -> usize {
        match self {
            ScriptError::UnknownCommand { line, .. }
            | ScriptError::Usage { line, .. }
            | ScriptError::InvalidSide { line, .. }
            | ScriptError::InvalidPlayer { line, .. }
            | ScriptError::PointType { line, .. } => *line,
        }
    }

    /// Machine-readable code; point type failures keep the engine's code.
    pub fn code(&self) -> &'static str {
        match self {
            ScriptError::PointType { source, .. } => source.code().as_str(),
            _ => "INVALID_COMMAND",
        }
    }
}

const POINT_USAGE: &str = "point <home|away> <player-id|-> <SPK|BLK|ACE|ERR>";
const TIMEOUT_USAGE: &str = "timeout <home|away>";
const STATS_USAGE: &str = "stats <player-id>";

/// Parse one script line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: usize, text: &str) -> Result<Option<Command>, ScriptError> {
    let text = match text.split_once('#') {
        Some((code, _comment)) => code,
        None => text,
    };
    let mut words = text.split_whitespace();
    let Some(keyword) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let no_args = |command: Command| {
        if args.is_empty() {
            Ok(command)
        } else {
            Err(ScriptError::Usage {
                line,
                usage: command.keyword(),
            })
        }
    };

    let command = match keyword.to_ascii_lowercase().as_str() {
        "start" => no_args(Command::Start)?,
        "undo" => no_args(Command::Undo)?,
        "next-set" => no_args(Command::NextSet)?,
        "end-set" => no_args(Command::EndSet)?,
        "suspend" => no_args(Command::Suspend)?,
        "resume" => no_args(Command::Resume)?,
        "end" => no_args(Command::End)?,
        "show" => no_args(Command::Show)?,
        "point" => {
            let &[side, player, point_type] = &args[..] else {
                return Err(ScriptError::Usage {
                    line,
                    usage: POINT_USAGE,
                });
            };
            let player_id = match player {
                "-" => None,
                id => Some(parse_player(line, id)?),
            };
            Command::Point {
                side: parse_side(line, side)?,
                player_id,
                point_type: PointType::classify(point_type)
                    .map_err(|source| ScriptError::PointType { line, source })?,
            }
        }
        "timeout" => {
            let &[side] = &args[..] else {
                return Err(ScriptError::Usage {
                    line,
                    usage: TIMEOUT_USAGE,
                });
            };
            Command::Timeout(parse_side(line, side)?)
        }
        "stats" => {
            let &[player] = &args[..] else {
                return Err(ScriptError::Usage {
                    line,
                    usage: STATS_USAGE,
                });
            };
            Command::Stats(parse_player(line, player)?)
        }
        other => {
            return Err(ScriptError::UnknownCommand {
                line,
                word: other.to_string(),
            })
        }
    };
    Ok(Some(command))
}

fn parse_side(line: usize, value: &str) -> Result<Side, ScriptError> {
    value.parse().map_err(|_| ScriptError::InvalidSide {
        line,
        value: value.to_string(),
    })
}

fn parse_player(line: usize, value: &str) -> Result<PlayerId, ScriptError> {
    value.parse().map_err(|_| ScriptError::InvalidPlayer {
        line,
        value: value.to_string(),
    })
}
