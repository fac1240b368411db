use num_traits::PrimInt;

use crate::error::{Error, Result};

/// A validated set of coin denominations.
///
/// Values are kept sorted in descending order with duplicates removed, since a
/// denomination may be reused any number of times and a repeated entry adds no
/// new choices.
///
/// # Example
/// ```
/// use coinsearch::cs::denominations::Denominations;
///
/// let denoms = Denominations::new(&[1, 25, 10, 25]).unwrap();
/// assert_eq!(denoms.as_slice(), &[25, 10, 1]);
/// assert_eq!(denoms.largest(), 25);
/// assert_eq!(denoms.smallest(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denominations<T> {
    values: Vec<T>,
}

impl<T: PrimInt> Denominations<T> {
    /// Validates `values` and returns them sorted largest first.
    ///
    /// Fails with [`Error::EmptyDenominations`] for an empty slice and with
    /// [`Error::NonPositiveDenomination`] for the first entry that is zero or
    /// negative.
    pub fn new(values: &[T]) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptyDenominations);
        }
        if let Some(index) = values.iter().position(|&v| v <= T::zero()) {
            return Err(Error::NonPositiveDenomination { index });
        }

        let mut values = values.to_vec();
        values.sort_unstable_by(|a, b| b.cmp(a));
        values.dedup();
        Ok(Self { values })
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; construction rejects empty sets.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn largest(&self) -> T {
        self.values[0]
    }

    pub fn smallest(&self) -> T {
        self.values[self.values.len() - 1]
    }

    pub fn contains(&self, value: T) -> bool {
        // Descending order, so the comparator is reversed.
        self.values.binary_search_by(|probe| value.cmp(probe)).is_ok()
    }
}

/// Rejects negative targets. Shared by every solver in the crate.
pub(crate) fn validate_target<T: PrimInt>(target: T) -> Result<()> {
    if target < T::zero() {
        Err(Error::NegativeTarget)
    } else {
        Ok(())
    }
}
