//! The game loop.
//!
//! A [`Match`] owns the authoritative [`GameState`] and the two players.
//! Players only ever see a shared reference to the state; the match alone
//! applies their columns.

use tracing::info;

use crate::board::Color;
use crate::error::MatchError;
use crate::game::{GameState, Status};
use crate::player::Player;

pub struct Match {
    /// Indexed by seat: 0 plays [`Color::Red`], 1 plays [`Color::Green`].
    players: [Box<dyn Player>; 2],
    state: GameState,
}

impl Match {
    pub fn new(red: Box<dyn Player>, green: Box<dyn Player>, state: GameState) -> Self {
        Self {
            players: [red, green],
            state,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Name of the player seated as `color`.
    pub fn player_name(&self, color: Color) -> &str {
        self.players[seat(color)].name()
    }

    /// Ask the player on move for a column and apply it.
    ///
    /// Does nothing once the game is over and just reports the final status.
    pub fn step(&mut self) -> Result<Status, MatchError> {
        let status = self.state.status();
        if status.is_terminal() {
            return Ok(status);
        }

        let color = self.state.turn_color();
        let player = &mut self.players[seat(color)];
        let column = player
            .choose_move(&self.state)
            .map_err(|source| MatchError::Player {
                player: player.name().to_string(),
                source,
            })?;
        let status = self
            .state
            .apply_move(column)
            .map_err(|source| MatchError::Move {
                player: player.name().to_string(),
                column,
                source,
            })?;

        info!(player = player.name(), %color, column, "move");
        Ok(status)
    }

    /// Play to the end.
    pub fn run(&mut self) -> Result<Status, MatchError> {
        self.run_with(|_| {})
    }

    /// Play to the end, handing the state to `observe` after every move.
    pub fn run_with<F: FnMut(&GameState)>(&mut self, mut observe: F) -> Result<Status, MatchError> {
        loop {
            let status = self.step()?;
            observe(&self.state);
            if status.is_terminal() {
                match status {
                    Status::Won(color) => {
                        info!(winner = self.player_name(color), %color, "game won");
                    }
                    _ => info!("game drawn"),
                }
                return Ok(status);
            }
        }
    }
}

fn seat(color: Color) -> usize {
    match color {
        Color::Red => 0,
        Color::Green => 1,
    }
}
