pub mod binomial;
mod bit_chain;
mod combinations;
mod cool_lex;
mod selected_indices;

pub use combinations::Combinations;
pub use selected_indices::SelectedIndices;

pub(crate) use bit_chain::{BitChain, NodeId};
pub(crate) use cool_lex::CoolLex;

use crate::error::{InvalidArgument, Result};
use crate::util::to_usize;

/// An iterator whose items borrow from the iterator itself, so at most one item is alive at
/// a time.
pub trait LendingIterator {
    type Item<'a>
    where
        Self: 'a;

    fn next(&mut self) -> Option<Self::Item<'_>>;
}

/// Returns the `k`-element combinations of `0..n` in cool-lex order. Each combination is the
/// ascending sequence of selected indices.
///
/// `k == 0` yields no combinations at all.
pub fn combinations<N, K>(n: N, k: K) -> Result<Combinations>
where
    N: TryInto<usize>,
    K: TryInto<usize>,
{
    let k = to_usize(k).ok_or(InvalidArgument::NegativeChoose)?;
    let n = match to_usize(n) {
        Some(n) if n >= k => n,
        _ => return Err(InvalidArgument::TooFewElements.into()),
    };

    if k == 0 {
        log::debug!("no combinations of 0 elements out of {}", n);
        return Ok(Combinations::empty());
    }
    Ok(Combinations::new(CoolLex::new(n, k)))
}
