use num_traits::PrimInt;

use crate::cs::denominations::{validate_target, Denominations};
use crate::error::{Error, Result};

/// Minimum-coin table for every amount in `0..=amount`.
///
/// `counts[i]` is the fewest coins forming `i` (`usize::MAX` when impossible),
/// `last[i]` the index of the denomination used last on that optimum.
struct CoinTable {
    counts: Vec<usize>,
    last: Vec<usize>,
}

fn build_table<T: PrimInt>(denominations: &Denominations<T>, amount: usize) -> CoinTable {
    let mut counts = vec![usize::MAX; amount + 1];
    let mut last = vec![usize::MAX; amount + 1];
    counts[0] = 0; // base case

    // Each coin is unbounded, so the inner loop walks amounts upward.
    for (idx, coin) in denominations.as_slice().iter().enumerate() {
        // A coin that does not fit in usize is larger than any table index.
        let Some(coin) = coin.to_usize() else {
            continue;
        };
        for curr_amount in coin..=amount {
            let prev = counts[curr_amount - coin];
            if prev != usize::MAX && prev + 1 < counts[curr_amount] {
                counts[curr_amount] = prev + 1;
                last[curr_amount] = idx;
            }
        }
    }

    CoinTable { counts, last }
}

/// Converts `target` to a table index, leaving room for the `amount + 1` slots.
fn table_amount<T: PrimInt>(target: T) -> Result<usize> {
    validate_target(target)?;
    let amount = target.to_usize().ok_or(Error::TargetOutOfRange)?;
    amount.checked_add(1).ok_or(Error::TargetOutOfRange)?;
    Ok(amount)
}

/// Computes the minimum number of coins needed to form `target`, each
/// denomination usable any number of times.
///
/// Returns `Ok(None)` if `target` cannot be formed exactly. Runs in
/// `O(target * denominations)` time and `O(target)` space, so it serves as the
/// reference answer for the branch and bound search on small targets.
///
/// # Examples
///
/// ```
/// use coinsearch::cs::dynamic::coin_change::min_coin_count;
/// use coinsearch::Error;
///
/// // 12 + 12 beats the greedy 15 + 7 + 1 + 1
/// assert_eq!(min_coin_count(&[15u16, 12, 7, 1], 24), Ok(Some(2)));
///
/// // only even sums are reachable
/// assert_eq!(min_coin_count(&[6i64, 4], 13), Ok(None));
/// assert_eq!(min_coin_count(&[6i64, 4], -2), Err(Error::NegativeTarget));
/// ```
pub fn min_coin_count<T: PrimInt>(denominations: &[T], target: T) -> Result<Option<usize>> {
    let denominations = Denominations::new(denominations)?;
    let amount = table_amount(target)?;
    let table = build_table(&denominations, amount);

    Ok(match table.counts[amount] {
        usize::MAX => None,
        count => Some(count),
    })
}

/// Like [`min_coin_count`] but also returns one optimal combination, listed
/// largest coin first.
///
/// # Examples
///
/// ```
/// use coinsearch::cs::dynamic::coin_change::min_coin_combination;
///
/// // greedy would hand out 9 + 1 + 1 + 1
/// let coins = min_coin_combination(&[1u64, 9, 6], 12).unwrap().unwrap();
/// assert_eq!(coins, vec![6, 6]);
/// ```
pub fn min_coin_combination<T: PrimInt>(denominations: &[T], target: T) -> Result<Option<Vec<T>>> {
    let denominations = Denominations::new(denominations)?;
    let amount = table_amount(target)?;
    let table = build_table(&denominations, amount);

    if table.counts[amount] == usize::MAX {
        return Ok(None);
    }

    let values = denominations.as_slice();
    let mut coins = Vec::with_capacity(table.counts[amount]);
    let mut remaining = amount;
    while remaining > 0 {
        let idx = table.last[remaining];
        coins.push(values[idx]);
        // Denominations that fit the table also fit in usize.
        remaining -= values[idx].to_usize().ok_or(Error::TargetOutOfRange)?;
    }
    coins.sort_unstable_by(|a, b| b.cmp(a));

    Ok(Some(coins))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_coin_count() {
        let coins = [3u8, 11, 7];
        assert_eq!(min_coin_count(&coins, 0), Ok(Some(0)));
        assert_eq!(min_coin_count(&coins, 14), Ok(Some(2)));
        assert_eq!(min_coin_count(&coins, 20), Ok(Some(4)));
        // 1, 2, 4, 5 and 8 cannot be formed from 3s and 7s and 11s
        for unreachable in [1u8, 2, 4, 5, 8] {
            assert_eq!(min_coin_count(&coins, unreachable), Ok(None));
        }
        // unsorted input with repeats gives the same answer
        assert_eq!(min_coin_count(&[7u8, 3, 7, 11, 3], 20), Ok(Some(4)));
    }

    #[test]
    fn test_target_without_table_room() {
        assert_eq!(
            min_coin_count(&[1u64], u64::MAX),
            Err(Error::TargetOutOfRange)
        );
        assert_eq!(
            min_coin_combination(&[1usize], usize::MAX),
            Err(Error::TargetOutOfRange)
        );
    }

    #[test]
    fn test_textbook_cases() {
        assert_eq!(min_coin_count(&[25, 10, 1], 37), Ok(Some(4)));
        // 10 + 9 + 9 + 9
        assert_eq!(min_coin_count(&[10, 9, 1], 37), Ok(Some(4)));
        assert_eq!(min_coin_count(&[10, 9, 1], 38), Ok(Some(4)));
    }

    #[test]
    fn test_min_coin_combination() {
        let coins = min_coin_combination(&[10u32, 9, 1], 37).unwrap().unwrap();
        assert_eq!(coins.len(), 4);
        assert_eq!(coins.iter().sum::<u32>(), 37);
        assert!(coins.windows(2).all(|w| w[0] >= w[1]));

        assert_eq!(min_coin_combination(&[2u32], 3), Ok(None));
        assert_eq!(min_coin_combination(&[2u32], 0), Ok(Some(vec![])));
    }

    #[test]
    fn test_coins_larger_than_target_ignored() {
        assert_eq!(min_coin_count(&[100u64, 3], 9), Ok(Some(3)));
        assert_eq!(min_coin_count(&[u64::MAX, 5], 10), Ok(Some(2)));
    }

    #[test]
    fn test_validation() {
        let empty: [u32; 0] = [];
        assert_eq!(min_coin_count(&empty, 3), Err(Error::EmptyDenominations));
        assert_eq!(
            min_coin_count(&[4i32, 0], 3),
            Err(Error::NonPositiveDenomination { index: 1 })
        );
        assert_eq!(min_coin_count(&[4i32], -3), Err(Error::NegativeTarget));
        assert_eq!(
            min_coin_combination(&[4i32], -3),
            Err(Error::NegativeTarget)
        );
    }
}
