//! Interactive play over a line-oriented text stream.
//!
//! Square labels drive the two-pick selection; a handful of words trigger the
//! other host actions. Reading stops at `quit` or end of input.

use std::io::{BufRead, Write};
use std::str::FromStr;

use chess::{
    exposes_king, legal_destinations, Game, GameError, HistoryEntry, PickOutcome, Selection,
    Square,
};
use rand::Rng;

use crate::render::{render_board, render_moves};
use crate::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Pick(Square),
    Random,
    Board,
    Log,
    Moves,
    Reset,
    Json,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.to_ascii_lowercase().as_str() {
            "random" | "r" => Ok(Self::Random),
            "board" | "b" => Ok(Self::Board),
            "log" | "l" => Ok(Self::Log),
            "moves" | "m" => Ok(Self::Moves),
            "reset" => Ok(Self::Reset),
            "json" => Ok(Self::Json),
            "help" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Square::from_label(other)
                .map(Self::Pick)
                .map_err(|_| format!("Unknown command: {}", token)),
        }
    }
}

const HELP: &str = "\
Enter a square (e2) to select a piece, then a square to move it to.
Commands: random, board, log, moves, reset, json, help, quit";

pub struct Session<R> {
    game: Game,
    selection: Selection,
    rng: R,
    json: bool,
}

impl<R: Rng> Session<R> {
    pub fn new(rng: R, json: bool) -> Self {
        Self {
            game: Game::new(),
            selection: Selection::new(),
            rng,
            json,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Process whitespace-separated tokens until `quit` or end of input.
    pub fn run<I: BufRead, O: Write>(&mut self, input: I, out: &mut O) -> Result<(), CliError> {
        writeln!(out, "{}", HELP)?;
        self.print_board(out)?;

        for line in input.lines() {
            let line = line?;
            for token in line.split_whitespace() {
                match token.parse::<Command>() {
                    Ok(Command::Quit) => return Ok(()),
                    Ok(command) => self.execute(command, out)?,
                    Err(msg) => writeln!(out, "{}", msg)?,
                }
            }
            out.flush()?;
        }

        Ok(())
    }

    fn execute<O: Write>(&mut self, command: Command, out: &mut O) -> Result<(), CliError> {
        match command {
            Command::Pick(square) => self.pick(square, out)?,
            Command::Random => {
                self.selection.clear();
                let before = self.game.board().clone();
                match self.game.play_random_move(&mut self.rng) {
                    Ok(entry) => {
                        let exposed = exposes_king(&before, entry.from, entry.to);
                        self.report_move(&entry, exposed, out)?
                    }
                    Err(GameError::NoLegalMoves(color)) => {
                        writeln!(out, "No legal moves available for {}", color)?
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            Command::Board => self.print_board(out)?,
            Command::Log => {
                for line in self.game.log_lines() {
                    writeln!(out, "{}", line)?;
                }
            }
            Command::Moves => {
                let moves = self.game.legal_moves();
                writeln!(out, "{} legal moves for {}:", moves.len(), self.game.side_to_move())?;
                write!(out, "{}", render_moves(&moves))?;
            }
            Command::Reset => {
                self.game.reset();
                self.selection.clear();
                writeln!(out, "New game.")?;
                self.print_board(out)?;
            }
            Command::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(&self.game.snapshot())?)?
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn pick<O: Write>(&mut self, square: Square, out: &mut O) -> Result<(), CliError> {
        let exposed = self
            .selection
            .selected()
            .is_some_and(|from| exposes_king(self.game.board(), from, square));
        match self.selection.pick(&mut self.game, square) {
            PickOutcome::Selected(from) => {
                let targets: Vec<String> = legal_destinations(self.game.board(), from)
                    .iter()
                    .map(Square::to_string)
                    .collect();
                if targets.is_empty() {
                    writeln!(out, "Selected {} (no legal moves)", from)?;
                } else {
                    writeln!(out, "Selected {} -> {}", from, targets.join(" "))?;
                }
            }
            PickOutcome::Ignored(square) => writeln!(
                out,
                "No {} piece on {}",
                self.game.side_to_move(),
                square
            )?,
            PickOutcome::Moved(entry) => self.report_move(&entry, exposed, out)?,
            PickOutcome::Rejected(err) => writeln!(out, "{}; selection cleared", err)?,
        }
        Ok(())
    }

    /// `exposed` is the self-check verdict taken before the move was applied.
    fn report_move<O: Write>(
        &self,
        entry: &HistoryEntry,
        exposed: bool,
        out: &mut O,
    ) -> Result<(), CliError> {
        writeln!(out, "{}. {}", entry.move_number, entry)?;
        if exposed {
            writeln!(out, "warning: {} king left in check", entry.color)?;
        }
        if self.game.is_in_check() {
            writeln!(out, "{} king is in check", self.game.side_to_move())?;
        }
        self.print_board(out)
    }

    fn print_board<O: Write>(&self, out: &mut O) -> Result<(), CliError> {
        if self.json {
            writeln!(out, "{}", serde_json::to_string(&self.game.snapshot())?)?;
        } else {
            write!(out, "{}", render_board(self.game.board()))?;
            writeln!(out, "{} to move", self.game.side_to_move())?;
        }
        Ok(())
    }
}
