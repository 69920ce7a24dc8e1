mod config;

use anyhow::{bail, Context};
use clap::Parser;
use clickchess_core::{Side, Square};
use clickchess_engine::{BoardSnapshot, EngineEvent, Game};
use config::{CliConfig, OutputFormat};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clickchess")]
#[command(about = "Play chess by clicking squares")]
struct Args {
    /// Configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Starting placement, overriding the config file
    #[arg(short, long)]
    placement: Option<String>,

    /// Side to move first (white or black)
    #[arg(short, long)]
    side: Option<String>,

    /// Output format for events
    #[arg(short, long, value_enum)]
    output: Option<OutputFormat>,

    /// Log level written to stderr (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Clicks as algebraic squares (e2) or row,column pairs (6,4).
    /// Read from stdin when none are given.
    clicks: Vec<String>,
}

/// One parsed input token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Click {
    Square(Square),
    Coords(i32, i32),
    Reset,
}

fn parse_click(token: &str) -> anyhow::Result<Click> {
    if token.eq_ignore_ascii_case("reset") {
        return Ok(Click::Reset);
    }
    if let Some((row, column)) = token.split_once(',') {
        let row = row
            .trim()
            .parse::<i32>()
            .with_context(|| format!("bad row in {token:?}"))?;
        let column = column
            .trim()
            .parse::<i32>()
            .with_context(|| format!("bad column in {token:?}"))?;
        return Ok(Click::Coords(row, column));
    }
    Ok(Click::Square(Square::from_algebraic(token)?))
}

fn parse_side(text: &str) -> anyhow::Result<Side> {
    match text.to_ascii_lowercase().as_str() {
        "white" | "w" => Ok(Side::White),
        "black" | "b" => Ok(Side::Black),
        _ => bail!("unknown side {text:?}, expected white or black"),
    }
}

/// Applies command-line overrides on top of the file configuration.
fn merge(mut config: CliConfig, args: &Args) -> anyhow::Result<CliConfig> {
    if let Some(placement) = &args.placement {
        config.start_placement = placement.clone();
    }
    if let Some(side) = &args.side {
        config.side_to_move = parse_side(side)?;
    }
    if let Some(output) = args.output {
        config.output = output;
    }
    if let Some(level) = &args.log_level {
        config.log_level = level.clone();
    }
    config.validate()?;
    Ok(config)
}

/// What the driver reports for one input token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
enum Report {
    Engine(EngineEvent),
    Reset(GameReset),
}

/// The game was restarted from the standard layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename = "reset")]
struct GameReset {
    side_to_move: Side,
    snapshot: BoardSnapshot,
}

fn handle(game: &mut Game, click: Click) -> Report {
    match click {
        Click::Square(sq) => Report::Engine(game.select_or_move(sq)),
        Click::Coords(row, column) => Report::Engine(game.click(row, column)),
        Click::Reset => {
            game.reset();
            Report::Reset(GameReset {
                side_to_move: game.side_to_move(),
                snapshot: game.snapshot(),
            })
        }
    }
}

fn render_text(out: &mut impl Write, game: &Game, report: &Report) -> io::Result<()> {
    let event = match report {
        Report::Engine(event) => event,
        Report::Reset(reset) => {
            writeln!(out, "game reset")?;
            writeln!(out, "{}", game.board())?;
            return writeln!(out, "{} to move", reset.side_to_move);
        }
    };
    match event {
        EngineEvent::Selected { from, destinations } => {
            let targets: Vec<String> = destinations.iter().map(|sq| sq.to_string()).collect();
            writeln!(out, "selected {}: {}", from, targets.join(" "))?;
        }
        EngineEvent::MoveApplied(applied) => {
            writeln!(out, "{} {}", applied.mv.piece, applied.mv)?;
            writeln!(out, "{}", game.board())?;
            if applied.check.in_check {
                let attackers: Vec<String> = applied
                    .check
                    .attackers
                    .iter()
                    .map(|a| format!("{} on {}", a.kind, a.origin))
                    .collect();
                writeln!(
                    out,
                    "{} is in check from {}",
                    applied.side_to_move,
                    attackers.join(", ")
                )?;
            }
            writeln!(out, "{} to move", applied.side_to_move)?;
        }
        EngineEvent::SelectionCleared => writeln!(out, "selection cleared")?,
        EngineEvent::Ignored => writeln!(out, "ignored")?,
    }
    Ok(())
}

fn emit(
    out: &mut impl Write,
    format: OutputFormat,
    game: &Game,
    report: &Report,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => render_text(out, game, report)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(report)?)?,
    }
    out.flush()?;
    Ok(())
}

/// Handles each token in turn, writing its report before reading the next.
fn play_tokens<'a>(
    game: &mut Game,
    tokens: impl IntoIterator<Item = &'a str>,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    for token in tokens {
        let click = match parse_click(token) {
            Ok(click) => click,
            Err(err) => {
                tracing::warn!(%token, "skipping input: {err:#}");
                continue;
            }
        };
        let report = handle(game, click);
        emit(out, format, game, &report)?;
    }
    Ok(())
}

/// Reads clicks line by line until the input ends.
fn run(
    game: &mut Game,
    input: impl BufRead,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line.context("reading clicks")?;
        play_tokens(game, line.split_whitespace(), format, out)?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let path = args.config.clone().unwrap_or_else(CliConfig::config_path);
    let config = CliConfig::load(&path).with_context(|| format!("loading {}", path.display()))?;
    let config = merge(config, &args)?;

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(config.level_filter()?)
        .init();

    tracing::info!(config = %path.display(), side = %config.side_to_move, "starting clickchess");

    let mut game = Game::from_placement(&config.start_placement, config.side_to_move)?;
    if config.output == OutputFormat::Text {
        println!("{}", game.board());
    }

    let mut out = io::stdout().lock();
    if args.clicks.is_empty() {
        run(&mut game, io::stdin().lock(), config.output, &mut out)
    } else {
        let tokens = args.clicks.iter().map(String::as_str);
        play_tokens(&mut game, tokens, config.output, &mut out)
    }
}
