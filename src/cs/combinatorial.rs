pub mod min_coin_search;

pub use min_coin_search::{solve, MinCoinSearch, SearchConfig, SearchOrder, SearchOutcome};
