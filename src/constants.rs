//! Constants for board dimensions, win length, search budget and cell symbols.
//!
//! These are only defaults. Every value here can be overridden at runtime
//! through [`crate::config::GameConfig`] or the constructor parameters of the
//! individual types.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default number of rows.
pub const DEFAULT_ROWS: usize = 6;

/// Default number of columns.
pub const DEFAULT_COLUMNS: usize = 7;

/// Number of adjacent pieces needed to win.
pub const DEFAULT_WIN_LENGTH: usize = 4;

// =============================================================================
// Monte Carlo Parameters
// =============================================================================

/// Default rollout budget per decision, split evenly across legal columns.
pub const N_SIMS: usize = 5000;

// =============================================================================
// Cell Symbols
// =============================================================================

/// Empty cell.
pub const EMPTY_SYMBOL: char = '-';

/// Piece of the first player.
pub const RED_SYMBOL: char = 'r';

/// Piece of the second player.
pub const GREEN_SYMBOL: char = 'g';
