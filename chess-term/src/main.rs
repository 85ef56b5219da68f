//! Terminal host for the chess engine.
//!
//! Stands in for a graphical front end: it maps typed square labels to the
//! selection protocol, offers a "random move" action, prints the board and
//! the move log, and never decides legality itself.
//!
//! Subcommands:
//! - **`play`** (default): interactive game on stdin/stdout.
//! - **`autoplay`**: both sides play random legal moves up to a ply cap.
//! - **`moves`**: list the legal moves of one side for a board.
//!
//! Runtime tunables live in [`config`].

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chess::{all_legal_moves, Board, BoardError, Game, GameError, PieceColor};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod config;
mod render;
mod session;

/// Top-level CLI arguments.
#[derive(Parser)]
#[command(name = "chess-term", about = "Two-player chess in the terminal")]
struct Cli {
    /// Print boards and logs as JSON snapshots.
    #[arg(long, global = true)]
    json: bool,

    /// Seed for random moves (overrides `CHESS_TERM_SEED`).
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Optional subcommand. When omitted, starts an interactive game.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively: type squares to select and move pieces.
    Play,
    /// Let both sides play random legal moves.
    Autoplay {
        /// Stop after this many half-moves (overrides `CHESS_TERM_MAX_PLIES`).
        #[arg(short, long)]
        plies: Option<u32>,
    },
    /// List all legal moves of one side.
    Moves {
        /// Eight-line board file in the text encoding (default: start position).
        #[arg(short, long)]
        board: Option<PathBuf>,
        /// Side to list moves for.
        #[arg(short, long, default_value = "white")]
        color: String,
    },
}

/// Error type for CLI operations.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("game error: {0}")]
    Game(#[from] GameError),

    #[error("invalid board: {0}")]
    Board(#[from] BoardError),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown color {0:?} (expected white or black)")]
    UnknownColor(String),
}

fn init_tracing(filter: &str) {
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            tracing::info!("Seeding random moves with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

/// Read a board file. Lines shorter than eight characters are padded with
/// empty squares, since editors tend to strip trailing spaces.
fn load_board(path: &Path) -> Result<Board, CliError> {
    let text = std::fs::read_to_string(path)?;
    let rows: Vec<String> = text.lines().map(|line| format!("{:<8}", line)).collect();
    Ok(Board::from_rows(&rows)?)
}

fn run_autoplay<O: Write>(
    rng: &mut StdRng,
    max_plies: u32,
    json: bool,
    out: &mut O,
) -> Result<Game, CliError> {
    let mut game = Game::new();

    for _ in 0..max_plies {
        match game.play_random_move(rng) {
            Ok(_) => {}
            Err(GameError::NoLegalMoves(color)) => {
                tracing::info!("{} has no legal moves", color);
                writeln!(out, "No legal moves available for {}", color)?;
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&game.snapshot())?)?;
    } else {
        for line in game.log_lines() {
            writeln!(out, "{}", line)?;
        }
        write!(out, "{}", render::render_board(game.board()))?;
    }

    Ok(game)
}

fn run_moves<O: Write>(
    board: Option<&Path>,
    color: &str,
    json: bool,
    out: &mut O,
) -> Result<(), CliError> {
    let color =
        PieceColor::from_name(color).ok_or_else(|| CliError::UnknownColor(color.to_string()))?;
    let board = match board {
        Some(path) => load_board(path)?,
        None => Board::starting(),
    };

    let moves = all_legal_moves(&board, color);
    if json {
        let labels: Vec<String> = moves.iter().map(|mv| mv.to_string()).collect();
        writeln!(out, "{}", serde_json::to_string(&labels)?)?;
    } else {
        writeln!(out, "{} legal moves for {}:", moves.len(), color)?;
        write!(out, "{}", render::render_moves(&moves))?;
    }
    Ok(())
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    init_tracing(&config::get_log_filter());

    let seed = cli.seed.or_else(config::get_seed);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        None | Some(Commands::Play) => {
            let mut session = session::Session::new(make_rng(seed), cli.json);
            session.run(io::stdin().lock(), &mut out)?;
            tracing::info!(
                "Session ended after {} half-moves",
                session.game().history().len()
            );
        }
        Some(Commands::Autoplay { plies }) => {
            let max_plies = plies.unwrap_or_else(config::get_max_plies);
            let mut rng = make_rng(seed);
            run_autoplay(&mut rng, max_plies, cli.json, &mut out)?;
        }
        Some(Commands::Moves { board, color }) => {
            run_moves(board.as_deref(), &color, cli.json, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
