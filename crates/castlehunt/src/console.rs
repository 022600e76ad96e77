//! Interactive console front-end.
//!
//! Reads whitespace-separated tokens: `hint` asks for the hint, anything
//! else is the room to move to. End of input ends the game early.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use castlehunt_session::{GameSession, GameState};

/// A console game over any line reader and writer.
///
/// ```rust
/// use std::io::Cursor;
/// use castlehunt::prelude::*;
///
/// let graph = CastleLayout::default().build().unwrap();
/// let session = GameSession::with_seed(graph, SessionConfig::default(), 7).unwrap();
/// let mut out = Vec::new();
/// let mut game = ConsoleGame::new(session, Cursor::new("Hall Library\n"), &mut out);
///
/// let state = game.run().unwrap();
/// assert_eq!(state, GameState::Active);
/// ```
pub struct ConsoleGame<R, W> {
    session: GameSession,
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> ConsoleGame<R, W> {
    pub fn new(session: GameSession, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Plays until the game is won, lost, or input runs out. Returns the
    /// state the game ended in.
    pub fn run(&mut self) -> io::Result<GameState> {
        writeln!(self.output, "============ Welcome to the Castle Treasure Hunt! ============")?;
        writeln!(
            self.output,
            "Find {} treasures in {} moves. Type a room name to move, or 'hint'.",
            self.session.total_treasures(),
            self.session.max_moves()
        )?;
        self.print_map()?;

        while !self.session.is_game_over() {
            self.print_turn()?;

            let Some(token) = self.next_token()? else {
                writeln!(self.output, "\nNo more input. Leaving the castle.")?;
                break;
            };

            if token == "hint" {
                let text = match self.session.hint() {
                    Ok(outcome) => format!("Hint: {}", outcome.text()),
                    Err(e) => e.to_string(),
                };
                writeln!(self.output, "{text}")?;
                continue;
            }

            match self.session.move_to(&token) {
                Ok(outcome) if outcome.found_treasure() => {
                    writeln!(self.output, "You found a treasure in {}!", outcome.room())?;
                }
                Ok(outcome) => writeln!(self.output, "{outcome}")?,
                Err(e) => writeln!(self.output, "Invalid move: {e}. Try again.")?,
            }
        }

        let state = self.session.state();
        self.print_ending(state)?;
        self.output.flush()?;
        Ok(state)
    }

    fn print_map(&mut self) -> io::Result<()> {
        writeln!(self.output, "------------------ Rooms and Connections ------------------")?;
        for (room, neighbors) in self.session.graph().describe() {
            writeln!(self.output, "{room}: {}", neighbors.join(" "))?;
        }
        writeln!(self.output, "-----------------------------------------------------------")
    }

    fn print_turn(&mut self) -> io::Result<()> {
        let s = &self.session;
        writeln!(self.output, "\n------------ Move {} ------------", s.moves() + 1)?;
        writeln!(self.output, "Current Room: {}", s.current_room())?;
        writeln!(self.output, "Adjacent Rooms: {}", s.adjacent_rooms().join(" "))?;
        writeln!(
            self.output,
            "Moves Left: {} | Treasures Found: {}/{}",
            s.moves_left(),
            s.treasures_found(),
            s.total_treasures()
        )?;
        write!(self.output, "Enter a room name or type 'hint': ")?;
        self.output.flush()
    }

    fn print_ending(&mut self, state: GameState) -> io::Result<()> {
        let s = &self.session;
        writeln!(self.output, "\n==================== Game Over ====================")?;
        match state {
            GameState::Won => writeln!(
                self.output,
                "Congratulations! You found all treasures in {} moves.",
                s.moves()
            )?,
            GameState::Lost => writeln!(self.output, "Game Over! You ran out of moves.")?,
            GameState::Active => {}
        }
        writeln!(
            self.output,
            "Treasures collected: {}/{}",
            s.treasures_found(),
            s.total_treasures()
        )?;

        writeln!(self.output, "\n================ Treasure Map Summary ================")?;
        for route in s.treasure_routes() {
            writeln!(self.output, "Treasure was hidden in {}", route.room)?;
            if route.path.is_empty() {
                writeln!(self.output, "No path to {} found.", route.room)?;
            } else {
                writeln!(self.output, "Path: {}", route.path.join(" -> "))?;
            }
        }
        writeln!(self.output, "======================================================")
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}
