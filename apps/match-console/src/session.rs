//! A console session: one match in a registry, driven by script commands.

use std::io::{self, BufRead, Write};

use scoring_engine::{
    derive_match_transitions, Clock, Lineup, MatchId, MatchRegistry, MatchSnapshot,
    MatchTransition, PlayerStatistics, PointRequest, RegistryError, SystemClock,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::fixture::PreparedMatch;
use crate::output::OutputWriter;
use crate::script::{parse_line, Command, ScriptError};

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error("line {line}: {source}")]
    Rejected {
        line: usize,
        #[source]
        source: RegistryError,
    },
}

/// Result of one accepted command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Snapshot {
        snapshot: MatchSnapshot,
        transitions: Vec<MatchTransition>,
    },
    Stats(PlayerStatistics),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub commands: usize,
    pub rejected: usize,
}

pub struct Session<C: Clock = SystemClock> {
    registry: MatchRegistry<C>,
    match_id: MatchId,
    home_lineup: Lineup,
    away_lineup: Lineup,
}

impl Session<SystemClock> {
    pub fn new(prepared: PreparedMatch) -> Result<Self, RegistryError> {
        Self::with_clock(prepared, SystemClock)
    }
}

impl<C: Clock> Session<C> {
    pub fn with_clock(prepared: PreparedMatch, clock: C) -> Result<Self, RegistryError> {
        let registry = MatchRegistry::with_clock(clock);
        let match_id = prepared.game.id();
        registry.insert(prepared.game)?;
        Ok(Self {
            registry,
            match_id,
            home_lineup: prepared.home_lineup,
            away_lineup: prepared.away_lineup,
        })
    }

    pub fn match_id(&self) -> MatchId {
        self.match_id
    }

    pub fn snapshot(&self) -> Result<MatchSnapshot, RegistryError> {
        self.registry.snapshot(self.match_id)
    }

    pub fn execute(&self, command: Command) -> Result<Outcome, RegistryError> {
        let id = self.match_id;
        let reg = &self.registry;
        let before = reg.snapshot(id)?;
        let after = match command {
            Command::Start => reg.start_match(id, self.home_lineup, self.away_lineup)?,
            Command::Point {
                side,
                player_id,
                point_type,
            } => reg.award_point(
                id,
                PointRequest {
                    side,
                    player_id,
                    point_type,
                },
            )?,
            Command::Undo => reg.undo_point(id)?,
            Command::NextSet => reg.start_next_set(id)?,
            Command::EndSet => reg.end_set(id)?,
            Command::Timeout(side) => reg.call_timeout(id, side)?,
            Command::Suspend => reg.suspend_match(id)?,
            Command::Resume => reg.resume_match(id)?,
            Command::End => reg.end_match(id)?,
            Command::Stats(player_id) => {
                return Ok(Outcome::Stats(reg.statistics_for(id, player_id)?));
            }
            Command::Show => before.clone(),
        };
        let transitions = derive_match_transitions(&before, &after);
        for transition in &transitions {
            info!(match_id = id, ?transition, "Match transition");
        }
        Ok(Outcome::Snapshot {
            snapshot: after,
            transitions,
        })
    }

    /// Run every line of `input`. Rejected and unparseable lines are
    /// reported through `out`; with `strict` the first one aborts the run.
    pub fn run_script<R: BufRead, W: Write>(
        &self,
        input: R,
        out: &mut OutputWriter<W>,
        strict: bool,
    ) -> Result<RunSummary, ConsoleError> {
        let mut summary = RunSummary::default();
        for (index, text) in input.lines().enumerate() {
            let line = index + 1;
            let text = text?;

            let command = match parse_line(line, &text) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    summary.commands += 1;
                    summary.rejected += 1;
                    warn!(line, code = err.code(), "Unparseable script line");
                    out.write_error(line, err.code(), &err.to_string())?;
                    if strict {
                        return Err(err.into());
                    }
                    continue;
                }
            };

            summary.commands += 1;
            debug!(line, %command, "Executing command");
            match self.execute(command) {
                Ok(Outcome::Snapshot {
                    snapshot,
                    transitions,
                }) => out.write_snapshot(&snapshot, &transitions)?,
                Ok(Outcome::Stats(stats)) => out.write_stats(&stats)?,
                Err(source) => {
                    summary.rejected += 1;
                    let code = source.code().as_str();
                    warn!(line, code, %command, "Command rejected");
                    out.write_error(line, code, &source.to_string())?;
                    if strict {
                        return Err(ConsoleError::Rejected { line, source });
                    }
                }
            }
        }
        Ok(summary)
    }
}
