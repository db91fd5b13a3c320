//! Game and search configuration.
//!
//! Everything the engine can be tuned with is an explicit field here. The
//! CLI fills one of these from its flags; library users build it directly.

use crate::board::Board;
use crate::constants::{DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_WIN_LENGTH, N_SIMS};
use crate::error::ConfigError;
use crate::game::GameState;
use crate::monte_carlo::SearchConfig;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub columns: usize,
    pub win_length: usize,
    /// Rollout budget for each Monte Carlo decision.
    pub simulations: usize,
    /// Run Monte Carlo candidates on the rayon thread pool.
    pub parallel: bool,
    /// Seed for every bot in a match. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            win_length: DEFAULT_WIN_LENGTH,
            simulations: N_SIMS,
            parallel: false,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::Validation(format!(
                "board must have at least one row and one column (got {}x{})",
                self.rows, self.columns
            )));
        }
        if self.win_length == 0 {
            return Err(ConfigError::Validation(
                "win_length must be >= 1".to_string(),
            ));
        }
        if self.win_length > self.rows.max(self.columns) {
            return Err(ConfigError::Validation(format!(
                "win_length {} cannot fit on a {}x{} board",
                self.win_length, self.rows, self.columns
            )));
        }
        Ok(())
    }

    /// Validate and build the starting position.
    pub fn new_game(&self) -> Result<GameState, ConfigError> {
        self.validate()?;
        GameState::with_win_length(Board::new(self.rows, self.columns), self.win_length)
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            simulations: self.simulations,
            parallel: self.parallel,
        }
    }
}
