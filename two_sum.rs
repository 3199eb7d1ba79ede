//! Finding two entries of a sequence that add up to a target.

use std::collections::HashMap;
use std::convert::TryFrom;
use std::fmt::{self, Debug, Display};

use serde::{Deserialize, Serialize};

/// Positions of two entries in a sequence.
///
/// `find` always reports the earlier position as `first`. The type itself does not enforce
/// an order, so a pair built by hand or decoded from JSON keeps its indices as given.
///
/// Serializes as a two-element array, and displays the same way:
///
/// ```
/// use twosum_core::two_sum::Pair;
///
/// let pair = Pair::new(0, 1);
/// assert_eq!(pair.to_string(), "[0, 1]");
/// assert_eq!(serde_json::to_string(&pair).unwrap(), "[0,1]");
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct Pair {
    pub first: usize,
    pub second: usize,
}

impl Pair {
    pub fn new(first: usize, second: usize) -> Self {
        Pair { first, second }
    }

    pub fn indices(self) -> [usize; 2] {
        [self.first, self.second]
    }
}

impl Debug for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pair{}", self)
    }
}

impl Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.first, self.second)
    }
}

impl From<[usize; 2]> for Pair {
    fn from([first, second]: [usize; 2]) -> Self {
        Pair { first, second }
    }
}

impl From<Pair> for [usize; 2] {
    fn from(pair: Pair) -> Self {
        pair.indices()
    }
}

impl From<Pair> for (usize, usize) {
    fn from(pair: Pair) -> Self {
        (pair.first, pair.second)
    }
}

/// Finds the first pair of entries in `nums` that sum to `target`.
///
/// Scans left to right, remembering the first index at which each value was seen. The pair
/// returned is the one whose second index is smallest; its first index is the earliest
/// occurrence of the complementary value. Returns `None` when no two distinct entries add up
/// to `target`, including for sequences shorter than two.
///
/// Sums are taken in `i128`, so extreme values never overflow.
///
/// # Examples
///
/// ```
/// use twosum_core::two_sum::{find, Pair};
///
/// assert_eq!(find(&[2, 7, 11, 15], 9), Some(Pair::new(0, 1)));
/// assert_eq!(find(&[1, 2, 3], 100), None);
/// ```
pub fn find(nums: &[i64], target: i64) -> Option<Pair> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());
    for (i, &value) in nums.iter().enumerate() {
        let complement = i128::from(target) - i128::from(value);
        // Out of `i64` range means no entry can complete the pair.
        if let Ok(complement) = i64::try_from(complement) {
            if let Some(&j) = seen.get(&complement) {
                log::trace!("found {} + {} = {} at [{}, {}]", complement, value, target, j, i);
                return Some(Pair::new(j, i));
            }
        }
        seen.entry(value).or_insert(i);
    }
    log::trace!("no pair of {} entries sums to {}", nums.len(), target);
    None
}
