use std::io::{BufRead, Write};

use crate::log;
use super::error::{MoveError, SessionError};
use super::game_state::TicTacToeGameState;
use super::input::TokenReader;
use super::render::render_board;
use super::settings::TicTacToeSessionSettings;
use super::types::{GameStatus, Player};

/// Interactive game driven by a token reader and an output sink.
pub struct TicTacToeSession<R: BufRead, W: Write> {
    input: TokenReader<R>,
    output: W,
    settings: TicTacToeSessionSettings,
    state: TicTacToeGameState,
}

impl<R: BufRead, W: Write> TicTacToeSession<R, W> {
    pub fn new(input: R, output: W, settings: TicTacToeSessionSettings) -> Self {
        Self {
            input: TokenReader::new(input),
            output,
            settings,
            state: TicTacToeGameState::new(),
        }
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    /// Plays one game to completion and returns the final status. The board
    /// is cleared once the result has been shown; the rest of the turn state
    /// stays readable until the next `run`.
    pub fn run(&mut self) -> Result<GameStatus, SessionError> {
        self.state.reset();
        log!(
            "Game started: {} vs {}",
            self.settings.player_one_name,
            self.settings.player_two_name
        );
        writeln!(self.output, "tictactoe")?;
        writeln!(self.output)?;

        let status = loop {
            render_board(&self.state.board, self.settings.render_style, &mut self.output)?;

            let player = self.state.current_player;
            let x = self.read_coordinate(player, 'x')?;
            let y = self.read_coordinate(player, 'y')?;

            match self.state.place_mark(x, y) {
                Ok(GameStatus::InProgress) => {
                    log!(
                        "Turn {}: {} marked ({}, {})",
                        self.state.turn,
                        self.settings.player_name(player),
                        x,
                        y
                    );
                }
                Ok(status) => {
                    log!(
                        "Turn {}: {} marked ({}, {})",
                        self.state.turn,
                        self.settings.player_name(player),
                        x,
                        y
                    );
                    break status;
                }
                Err(MoveError::OutOfBounds(e)) => {
                    log!("Rejected move by {}: {}", self.settings.player_name(player), e);
                    writeln!(self.output, "Out of Bounds! Try again.")?;
                }
                Err(e @ MoveError::CellOccupied { .. }) => {
                    log!("Rejected move by {}: {}", self.settings.player_name(player), e);
                    writeln!(self.output, "That cell is already taken! Try again.")?;
                }
                Err(MoveError::GameOver) => break self.state.status,
            }
        };

        self.announce(status)?;
        render_board(&self.state.board, self.settings.render_style, &mut self.output)?;
        self.output.flush()?;
        self.state.board.clear();

        Ok(status)
    }

    fn announce(&mut self, status: GameStatus) -> Result<(), SessionError> {
        match status.winner() {
            Some(winner) => {
                let name = self.settings.player_name(winner).to_string();
                match self.state.winning_line {
                    Some(line) => log!("Game over: {} won on {}", name, line.kind),
                    None => log!("Game over: {} won", name),
                }
                writeln!(self.output, "The Winner is: {}", name)?;
            }
            None => {
                log!("Game over: draw after {} turns", self.state.turn);
                writeln!(self.output, "No winner for this game!")?;
            }
        }
        Ok(())
    }

    fn read_coordinate(&mut self, player: Player, axis: char) -> Result<isize, SessionError> {
        loop {
            writeln!(
                self.output,
                "{} choose a location '{}':",
                self.settings.player_name(player),
                axis
            )?;
            self.output.flush()?;

            let Some(token) = self.input.next_token()? else {
                log!("Input closed while waiting for {}", self.settings.player_name(player));
                return Err(SessionError::InputClosed);
            };

            match token.parse::<isize>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    log!("Ignoring non-numeric input {:?}", token);
                    writeln!(self.output, "Please enter a whole number.")?;
                }
            }
        }
    }
}

pub fn run_game<R: BufRead, W: Write>(
    input: R,
    output: W,
    settings: TicTacToeSessionSettings,
) -> Result<GameStatus, SessionError> {
    TicTacToeSession::new(input, output, settings).run()
}
