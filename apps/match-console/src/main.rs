//! Match console: replays a scoring script against a match fixture and
//! prints a snapshot after every command.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use clap::Parser;
use match_console::telemetry::init_tracing;
use match_console::{MatchFixture, OutputFormat, OutputWriter, Session};
use scoring_engine::MatchRules;
use tracing::info;

#[derive(Parser)]
#[command(name = "match-console")]
#[command(about = "Score a volleyball match from a command script")]
struct Args {
    /// Match fixture (JSON): teams, rosters and lineups
    #[arg(short, long)]
    fixture: PathBuf,

    /// Command script; reads stdin when omitted
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Rules file (JSON). Overrides rules in the fixture and VOLLEY_* variables
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Stop at the first rejected command and exit non-zero
    #[arg(long)]
    strict: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.verbose, args.log_json);

    let fixture = MatchFixture::load(&args.fixture)?;
    let rules = match &args.rules {
        Some(path) => Some(MatchRules::from_json_file(path)?),
        None if fixture.rules.is_some() => None,
        None => Some(MatchRules::from_env()?),
    };
    let session = Session::new(fixture.prepare(rules)?)?;
    info!(match_id = session.match_id(), "Match loaded");

    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };
    let mut out = OutputWriter::new(io::stdout().lock(), args.output_format);
    let summary = session.run_script(input, &mut out, args.strict)?;

    info!(
        commands = summary.commands,
        rejected = summary.rejected,
        "Script finished"
    );
    Ok(())
}
