//! Random playouts (game simulation).
//!
//! A playout plays uniformly random legal moves until the game is won or
//! drawn. The random source is always passed in, so a seeded
//! [`fastrand::Rng`] makes every playout reproducible.

use crate::error::MoveError;
use crate::game::{GameState, Status};

/// Pick a uniformly random entry of `columns`.
fn pick(columns: &[usize], rng: &mut fastrand::Rng) -> Option<usize> {
    if columns.is_empty() {
        return None;
    }
    Some(columns[rng.usize(..columns.len())])
}

/// A uniformly random legal column, or `None` if the game is over or the
/// board is full.
pub fn random_column(state: &GameState, rng: &mut fastrand::Rng) -> Option<usize> {
    pick(&state.legal_columns(), rng)
}

/// Play random moves on `state` until it is terminal and return the final
/// status.
///
/// Legal columns are recomputed before every move, so the drop itself can
/// only fail if the state was tampered with mid-playout.
pub fn rollout(state: &mut GameState, rng: &mut fastrand::Rng) -> Result<Status, MoveError> {
    let mut status = state.status();
    while !status.is_terminal() {
        let Some(column) = pick(&state.board().legal_columns(), rng) else {
            break;
        };
        status = state.apply_move(column)?;
    }
    Ok(status)
}

/// Play `column` as the side to move, then finish the game randomly.
///
/// Returns true if the side that played `column` ends up winning. Draws
/// count as not winning.
pub fn playout_wins(
    state: &GameState,
    column: usize,
    rng: &mut fastrand::Rng,
) -> Result<bool, MoveError> {
    let mut sim = state.clone();
    let me = sim.turn_color();
    sim.apply_move(column)?;
    let status = rollout(&mut sim, rng)?;
    Ok(status == Status::Won(me))
}
