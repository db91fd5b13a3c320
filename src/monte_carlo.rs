//! Monte Carlo move selection.
//!
//! Each decision runs in three stages:
//! 1. Immediate win: a column that wins on the spot is played at once.
//! 2. Immediate block: a column where the opponent would win next move is
//!    taken away from them.
//! 3. Rollouts: the simulation budget is split evenly across the legal
//!    columns. Each rollout plays the candidate and then random moves to the
//!    end of the game. The column with the most wins is chosen.
//!
//! Rollouts only touch clones of the state they were given. Every candidate
//! gets its own RNG seeded from the bot's RNG before any rollout starts, so
//! the serial and the parallel ([`rayon`]) paths produce the same statistics.

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::board::Color;
use crate::constants::N_SIMS;
use crate::error::{MoveError, PlayerError};
use crate::game::{GameState, Status};
use crate::player::Player;
use crate::playout::playout_wins;

/// Search parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Total rollouts per decision, shared by all legal columns.
    pub simulations: usize,
    /// Spread candidates over the rayon thread pool.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            simulations: N_SIMS,
            parallel: false,
        }
    }
}

/// Rollout tally for one candidate column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CandidateStats {
    pub column: usize,
    pub wins: usize,
    pub trials: usize,
}

impl CandidateStats {
    /// Fraction of rollouts won, 0 when nothing was simulated.
    pub fn win_rate(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.wins as f64 / self.trials as f64
    }
}

/// How a column was chosen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// The column wins immediately.
    Win(usize),
    /// The opponent would win immediately in this column.
    Block(usize),
    /// Best column by rollout wins, with the tally for every candidate.
    Rollouts {
        column: usize,
        stats: Vec<CandidateStats>,
    },
}

impl Decision {
    pub fn column(&self) -> usize {
        match *self {
            Decision::Win(column) | Decision::Block(column) => column,
            Decision::Rollouts { column, .. } => column,
        }
    }
}

/// First column in `columns` where dropping a `color` piece wins for `color`.
///
/// Works on clones only, so `state` is never modified.
pub fn winning_column(
    state: &GameState,
    columns: &[usize],
    color: Color,
) -> Result<Option<usize>, MoveError> {
    for &column in columns {
        let mut trial = state.clone();
        if trial.apply_move_as(column, color)? == Status::Won(color) {
            return Ok(Some(column));
        }
    }
    Ok(None)
}

/// Column with the most wins. Ties go to the earliest entry.
pub fn pick_best(stats: &[CandidateStats]) -> Option<usize> {
    stats
        .iter()
        .fold(None::<&CandidateStats>, |best, s| match best {
            Some(b) if b.wins >= s.wins => Some(b),
            _ => Some(s),
        })
        .map(|s| s.column)
}

fn simulate(
    state: &GameState,
    column: usize,
    trials: usize,
    seed: u64,
) -> Result<CandidateStats, MoveError> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut wins = 0;
    for _ in 0..trials {
        if playout_wins(state, column, &mut rng)? {
            wins += 1;
        }
    }
    Ok(CandidateStats {
        column,
        wins,
        trials,
    })
}

/// Player that picks columns by tactical checks and random rollouts.
pub struct MonteCarloBot {
    config: SearchConfig,
    rng: fastrand::Rng,
}

impl Default for MonteCarloBot {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl MonteCarloBot {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            rng: fastrand::Rng::new(),
        }
    }

    /// Reproducible bot: the same seed and state give the same decision.
    pub fn with_seed(config: SearchConfig, seed: u64) -> Self {
        Self {
            config,
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Choose a column for the side to move and report how it was chosen.
    pub fn search(&mut self, state: &GameState) -> Result<Decision, PlayerError> {
        let columns = state.legal_columns();
        if columns.is_empty() {
            return Err(PlayerError::NoLegalMoves);
        }

        let me = state.turn_color();
        if let Some(column) = winning_column(state, &columns, me)? {
            debug!(column, color = %me, "immediate win");
            return Ok(Decision::Win(column));
        }
        let opponent = state.opponent_color();
        if let Some(column) = winning_column(state, &columns, opponent)? {
            debug!(column, color = %me, threat = %opponent, "blocking opponent win");
            return Ok(Decision::Block(column));
        }

        let trials = self.config.simulations / columns.len();
        let seeds: Vec<u64> = columns.iter().map(|_| self.rng.u64(..)).collect();

        let stats: Vec<CandidateStats> = if self.config.parallel {
            columns
                .par_iter()
                .zip(seeds.par_iter())
                .map(|(&column, &seed)| simulate(state, column, trials, seed))
                .collect::<Result<_, _>>()?
        } else {
            columns
                .iter()
                .zip(&seeds)
                .map(|(&column, &seed)| simulate(state, column, trials, seed))
                .collect::<Result<_, _>>()?
        };

        for s in &stats {
            trace!(column = s.column, wins = s.wins, trials = s.trials, "candidate");
        }

        let column = pick_best(&stats).ok_or(PlayerError::NoLegalMoves)?;
        debug!(column, color = %me, trials, "rollouts finished");
        Ok(Decision::Rollouts { column, stats })
    }
}

impl Player for MonteCarloBot {
    fn choose_move(&mut self, state: &GameState) -> Result<usize, PlayerError> {
        self.search(state).map(|decision| decision.column())
    }

    fn name(&self) -> &str {
        "Monte Carlo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn state(rows: &[&str]) -> GameState {
        GameState::from_board(Board::from_rows(rows).unwrap())
    }

    fn stats(wins: &[usize]) -> Vec<CandidateStats> {
        wins.iter()
            .enumerate()
            .map(|(column, &wins)| CandidateStats {
                column,
                wins,
                trials: 10,
            })
            .collect()
    }

    #[test]
    fn test_pick_best_first_maximum() {
        assert_eq!(pick_best(&stats(&[3, 7, 7, 1])), Some(1));
        assert_eq!(pick_best(&stats(&[5, 5, 5])), Some(0));
        assert_eq!(pick_best(&stats(&[0, 0, 9])), Some(2));
        assert_eq!(pick_best(&[]), None);
    }

    #[test]
    fn test_win_rate() {
        let s = CandidateStats {
            column: 0,
            wins: 3,
            trials: 4,
        };
        assert_eq!(s.win_rate(), 0.75);
        assert_eq!(stats(&[0])[0].win_rate(), 0.0);
        let empty = CandidateStats {
            column: 0,
            wins: 0,
            trials: 0,
        };
        assert_eq!(empty.win_rate(), 0.0);
    }

    #[test]
    fn test_winning_column() {
        let s = state(&["ggg-"]);
        let columns = s.legal_columns();
        assert_eq!(winning_column(&s, &columns, Color::Green), Ok(Some(3)));
        assert_eq!(winning_column(&s, &columns, Color::Red), Ok(None));
    }

    #[test]
    fn test_winning_column_zero_is_a_real_answer() {
        let s = state(&["-ggg"]);
        let columns = s.legal_columns();
        assert_eq!(winning_column(&s, &columns, Color::Green), Ok(Some(0)));
    }

    #[test]
    fn test_immediate_win() {
        let mut bot = MonteCarloBot::with_seed(SearchConfig::default(), 1);
        let s = state(&["ggg-"]);
        assert_eq!(s.turn_color(), Color::Green);
        assert_eq!(bot.search(&s).unwrap(), Decision::Win(3));
    }

    #[test]
    fn test_immediate_block() {
        let mut bot = MonteCarloBot::with_seed(SearchConfig::default(), 1);
        let s = state(&["rrr-"]);
        assert_eq!(s.turn_color(), Color::Green);
        assert_eq!(bot.search(&s).unwrap(), Decision::Block(3));
    }

    #[test]
    fn test_block_as_first_player() {
        let mut bot = MonteCarloBot::with_seed(SearchConfig::default(), 1);
        let s = state(&["-------", "r------", "ggg-rr-"]);
        assert_eq!(s.turn_color(), Color::Red);
        assert_eq!(s.opponent_color(), Color::Green);
        assert_eq!(bot.search(&s).unwrap(), Decision::Block(3));
    }

    #[test]
    fn test_win_preferred_over_block() {
        let mut bot = MonteCarloBot::with_seed(SearchConfig::default(), 1);
        // Red to move; both sides have three on the bottom row.
        let s = state(&["-------", "rrr-ggg"]);
        assert_eq!(s.turn_color(), Color::Red);
        assert_eq!(bot.search(&s).unwrap(), Decision::Win(3));
    }

    #[test]
    fn test_zero_budget_ties_to_lowest_column() {
        let config = SearchConfig {
            simulations: 0,
            parallel: false,
        };
        let mut bot = MonteCarloBot::with_seed(config, 1);
        let s = state(&["r-g-", "g-r-"]);
        match bot.search(&s).unwrap() {
            Decision::Rollouts { column, stats } => {
                assert_eq!(column, 1);
                assert!(stats.iter().all(|s| s.wins == 0 && s.trials == 0));
            }
            other => panic!("expected rollouts, got {other:?}"),
        }
    }

    #[test]
    fn test_budget_split_evenly() {
        let config = SearchConfig {
            simulations: 23,
            parallel: false,
        };
        let mut bot = MonteCarloBot::with_seed(config, 9);
        assert_eq!(bot.config(), &config);
        let s = GameState::new();
        let per_column = bot.config().simulations / 7;
        match bot.search(&s).unwrap() {
            Decision::Rollouts { stats, .. } => {
                assert_eq!(stats.len(), 7);
                assert!(stats.iter().all(|s| s.trials == per_column));
                assert_eq!(per_column, 3);
                let columns: Vec<usize> = stats.iter().map(|s| s.column).collect();
                assert_eq!(columns, (0..7).collect::<Vec<_>>());
            }
            other => panic!("expected rollouts, got {other:?}"),
        }
    }

    #[test]
    fn test_search_leaves_state_untouched() {
        let mut bot = MonteCarloBot::with_seed(SearchConfig::default(), 4);
        let s = GameState::new();
        let before = s.clone();
        bot.choose_move(&s).unwrap();
        assert_eq!(s, before);
    }

    #[test]
    fn test_no_legal_moves() {
        let mut bot = MonteCarloBot::with_seed(SearchConfig::default(), 1);
        assert!(matches!(
            bot.search(&state(&["rg"])),
            Err(PlayerError::NoLegalMoves)
        ));
    }
}
