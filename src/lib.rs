//! Connect Four: a gravity connection game with a Monte Carlo bot.
//!
//! ## Modules
//!
//! - [`constants`] - Default board shape, win length and search budget
//! - [`board`] - Grid of cells, gravity drops and line enumeration
//! - [`rules`] - Win and draw detection over board lines
//! - [`game`] - Turn and outcome engine on top of a board
//! - [`player`] - The player abstraction, random and human players
//! - [`playout`] - Random game simulation
//! - [`monte_carlo`] - Monte Carlo move selection
//! - [`config`] - Validated game and search configuration
//! - [`play`] - The game loop that alternates two players
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use connect_four::game::GameState;
//! use connect_four::monte_carlo::{MonteCarloBot, SearchConfig};
//! use connect_four::player::Player;
//!
//! let mut state = GameState::new();
//! state.apply_move(3).unwrap();
//!
//! let config = SearchConfig { simulations: 200, parallel: false };
//! let mut bot = MonteCarloBot::with_seed(config, 42);
//! let column = bot.choose_move(&state).unwrap();
//! state.apply_move(column).unwrap();
//! println!("{}", state.board());
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod monte_carlo;
pub mod play;
pub mod player;
pub mod playout;
pub mod rules;
