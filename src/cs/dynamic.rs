pub mod coin_change;

// Reference dynamic programming solvers used to cross-check the search
pub use coin_change::{min_coin_combination, min_coin_count};
