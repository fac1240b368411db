use coinsearch::cs::combinatorial::min_coin_search::MinCoinSearch;
use coinsearch::cs::dynamic::coin_change::min_coin_count;
use coinsearch::Result;
use log::{info, warn};

const CASES: [(&[u32], u32); 5] = [
    (&[25, 10, 1], 37),
    (&[10, 9, 1], 37),
    (&[10, 9, 1], 38),
    (&[10, 9, 1], 35),
    (&[10, 8, 1], 35),
];

fn hline() {
    println!("{}", "-".repeat(60));
}

fn main() -> Result<()> {
    // RUST_LOG=trace lists every exact combination the search reaches
    env_logger::init();

    for (denominations, target) in CASES {
        let search = MinCoinSearch::new(denominations)?;
        let outcome = search.solve(target)?;
        let reference = min_coin_count(denominations, target)?;
        if outcome.coin_count() != reference {
            warn!(
                "search disagrees with table for {:?} -> {}",
                denominations,
                target
            );
        }

        info!("solved {:?} -> {}", denominations, target);
        println!("{} -> {}", target, outcome);
        hline();
    }

    Ok(())
}
