//! Checked binomial coefficients, used to predict enumeration counts.
//!
//! Every operation fails with [`Error::Overflow`] rather than wrapping.

use crate::error::{Error, InvalidArgument, Result};

/// Number of `k`-element subsets of an `n`-element set.
pub fn num_comb(n: u64, k: u64) -> Result<u64> {
    if k > n {
        return Err(InvalidArgument::TooFewElements.into());
    }
    let k = k.min(n - k);
    let mut result: u64 = 1;
    for i in 0..k {
        // C(n, i + 1) = C(n, i) * (n - i) / (i + 1), exact at every step.
        result = result
            .checked_mul(n - i)
            .ok_or(Error::Overflow { op: "num_comb" })?
            / (i + 1);
    }
    Ok(result)
}

/// Product of all integers in `low..=high`. An empty range gives 1.
pub fn multiply_all(high: u64, low: u64) -> Result<u64> {
    (low..=high).try_fold(1u64, |acc, i| {
        acc.checked_mul(i).ok_or(Error::Overflow { op: "multiply_all" })
    })
}

pub fn factorial(n: u64) -> Result<u64> {
    multiply_all(n, 1)
}
