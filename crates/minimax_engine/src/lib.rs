//! Depth-bounded minimax chess engine.
//!
//! Negamax alpha-beta search over [`shakmaty`] positions with a classical
//! midgame evaluation. The crate is pure and stateless: no I/O, no clocks,
//! no globals, so every result is reproducible from its arguments alone.
//!
//! ```
//! use minimax_engine::{is_mate_score, search};
//! use shakmaty::Chess;
//!
//! let result = search(&Chess::default(), 2);
//! assert!(result.best_move.is_some());
//! assert!(!is_mate_score(result.score));
//! ```

pub mod evaluation;
pub mod search;
pub mod types;

pub use evaluation::{evaluate, piece_value};
pub use search::{ordered_moves, search};
pub use types::{is_mate_score, mate_in, Score, SearchResult, DRAW_SCORE, INF, MATE_SCORE};
