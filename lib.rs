//! Two Sum: find two entries of a sequence that add up to a target.
//!
//! ```
//! use twosum_core::two_sum::{find, Pair};
//!
//! assert_eq!(find(&[3, 2, 4], 6), Some(Pair::new(1, 2)));
//! ```

pub mod cases;
pub mod two_sum;
