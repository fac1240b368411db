use std::fmt::{self, Debug};

use log::{debug, trace};
use num_traits::PrimInt;

use crate::cs::denominations::{validate_target, Denominations};
use crate::error::Result;

/// Order in which candidate coins are tried at every search node.
///
/// The order only changes how many nodes are visited and which of several
/// equally short solutions is reported. The solution length is always minimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchOrder {
    #[default]
    LargestFirst,
    SmallestFirst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchConfig {
    pub order: SearchOrder,
}

/// Result of a single search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<T> {
    /// One minimum-size set of coins, listed in non-increasing order, or `None`
    /// when no combination reaches the target exactly.
    pub coins: Option<Vec<T>>,
    /// Number of search states visited, the root included.
    pub nodes_expanded: usize,
}

impl<T> SearchOutcome<T> {
    pub fn is_solved(&self) -> bool {
        self.coins.is_some()
    }

    pub fn coin_count(&self) -> Option<usize> {
        self.coins.as_ref().map(Vec::len)
    }

    pub fn into_parts(self) -> (Option<Vec<T>>, usize) {
        (self.coins, self.nodes_expanded)
    }
}

impl<T: Debug> fmt::Display for SearchOutcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coins {
            Some(coins) => write!(
                f,
                "{} coins {:?} ({} nodes)",
                coins.len(),
                coins,
                self.nodes_expanded
            ),
            None => write!(f, "no exact change ({} nodes)", self.nodes_expanded),
        }
    }
}

/// Per-call search state shared by every frame of one search.
struct SearchContext<T> {
    path: Vec<T>,
    best: Option<Vec<T>>,
    nodes: usize,
}

/// A search node whose children are still being tried.
struct Frame<T> {
    max_coin: T,
    remaining: T,
    /// Index into the traversal order of the next coin to try.
    next: usize,
}

impl<T: Clone> SearchContext<T> {
    fn new() -> Self {
        Self {
            path: Vec::new(),
            best: None,
            nodes: 0,
        }
    }

    /// True while the current path is strictly shorter than the best solution.
    fn can_improve(&self) -> bool {
        self.best
            .as_ref()
            .map_or(true, |best| self.path.len() < best.len())
    }
}

/// Exact minimum-coin change maker using depth-first branch and bound.
///
/// Coins are chosen in non-increasing order so each multiset is generated once.
/// A branch is abandoned as soon as its path is no shorter than the best
/// solution already found, since adding coins can only lengthen it.
///
/// When several minimum solutions exist, the one reported is the first reached
/// in the configured [`SearchOrder`]; callers should rely only on its length.
///
/// # Example
/// ```
/// use coinsearch::cs::combinatorial::min_coin_search::MinCoinSearch;
///
/// let search = MinCoinSearch::new(&[25u32, 10, 1]).unwrap();
/// let outcome = search.solve(37).unwrap();
/// assert_eq!(outcome.coin_count(), Some(4));
/// assert!(outcome.nodes_expanded >= 1);
///
/// // 3 cannot be made from 2s alone
/// let search = MinCoinSearch::new(&[2u32]).unwrap();
/// assert_eq!(search.solve(3).unwrap().coins, None);
/// ```
#[derive(Debug, Clone)]
pub struct MinCoinSearch<T> {
    denominations: Denominations<T>,
    traversal: Vec<T>,
    config: SearchConfig,
}

impl<T: PrimInt + Debug> MinCoinSearch<T> {
    pub fn new(denominations: &[T]) -> Result<Self> {
        Self::with_config(denominations, SearchConfig::default())
    }

    pub fn with_config(denominations: &[T], config: SearchConfig) -> Result<Self> {
        let denominations = Denominations::new(denominations)?;
        let mut traversal = denominations.as_slice().to_vec();
        if config.order == SearchOrder::SmallestFirst {
            traversal.reverse();
        }
        Ok(Self {
            denominations,
            traversal,
            config,
        })
    }

    pub fn denominations(&self) -> &Denominations<T> {
        &self.denominations
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Finds a minimum-size combination of coins summing exactly to `target`.
    ///
    /// A zero target is solved by the empty combination after visiting only the
    /// root. Negative targets are rejected.
    pub fn solve(&self, target: T) -> Result<SearchOutcome<T>> {
        validate_target(target)?;

        let mut ctx = SearchContext::new();
        self.run(&mut ctx, target);

        debug!(
            "search for {:?} over {:?} finished: {} coins after {} nodes",
            target,
            self.denominations.as_slice(),
            ctx.best.as_ref().map_or(0, Vec::len),
            ctx.nodes
        );

        Ok(SearchOutcome {
            coins: ctx.best,
            nodes_expanded: ctx.nodes,
        })
    }

    /// Counts a node and decides whether it needs children. Returns the frame
    /// to push, or `None` when the node is a solution or cannot improve.
    fn enter(
        &self,
        ctx: &mut SearchContext<T>,
        max_coin: T,
        remaining: T,
    ) -> Option<Frame<T>> {
        ctx.nodes += 1;

        if remaining.is_zero() {
            trace!("found solution {:?}", ctx.path);
            if ctx.can_improve() {
                debug!("new best solution with {} coins", ctx.path.len());
                ctx.best = Some(ctx.path.clone());
            }
            return None;
        }

        if !ctx.can_improve() {
            return None;
        }

        Some(Frame {
            max_coin,
            remaining,
            next: 0,
        })
    }

    /// Depth-first search driven by an explicit stack.
    ///
    /// Every frame below the root owns the last coin of `ctx.path`, so the path
    /// is always one shorter than the stack.
    fn run(&self, ctx: &mut SearchContext<T>, target: T) {
        let mut stack = Vec::new();
        stack.extend(self.enter(ctx, self.denominations.largest(), target));

        while let Some(frame) = stack.last_mut() {
            let mut child = None;
            while let Some(&coin) = self.traversal.get(frame.next) {
                frame.next += 1;
                if coin <= frame.max_coin && coin <= frame.remaining {
                    child = Some((coin, frame.remaining - coin));
                    break;
                }
            }

            match child {
                Some((coin, remaining)) => {
                    ctx.path.push(coin);
                    match self.enter(ctx, coin, remaining) {
                        Some(next) => stack.push(next),
                        None => {
                            ctx.path.pop();
                        }
                    }
                }
                None => {
                    stack.pop();
                    if !stack.is_empty() {
                        ctx.path.pop();
                    }
                }
            }
        }
    }
}

/// Convenience wrapper: validates `denominations` and solves for `target` with
/// the default configuration.
///
/// # Example
/// ```
/// use coinsearch::cs::combinatorial::min_coin_search::solve;
///
/// let outcome = solve(&[10, 9, 1], 37).unwrap();
/// // 10 + 9 + 9 + 9
/// assert_eq!(outcome.coin_count(), Some(4));
/// ```
pub fn solve<T: PrimInt + Debug>(denominations: &[T], target: T) -> Result<SearchOutcome<T>> {
    MinCoinSearch::new(denominations)?.solve(target)
}
