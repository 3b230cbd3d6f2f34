use std::fmt;

use super::{BitChain, NodeId, SelectedIndices};
use crate::error::{Error, Result};

/// Cool-lex transition engine (Ruskey and Williams, iterative linked-list algorithm).
///
/// Starts at `1^k 0^(n-k)` and moves one node to the front of the chain per transition.
/// The last string produced is `1^(k-1) 0^(n-k) 1`.
#[derive(Debug, Clone)]
pub struct CoolLex {
    chain: BitChain,
    head: NodeId,
    // First one-node that follows a zero-node, scanning from the head. Initially the last
    // one-node. Its successor is the next node to move to the front.
    boundary: NodeId,
}

impl CoolLex {
    /// Callers validate `1 <= k <= n` first; `combinations` is the public way in.
    pub(crate) fn new(n: usize, k: usize) -> CoolLex {
        debug_assert!(k >= 1 && k <= n);
        log::debug!("building cool-lex engine for {} choose {}", n, k);

        let chain = BitChain::new(k, n - k);
        let (head, boundary) = chain.initial_ends();
        CoolLex {
            chain,
            head,
            boundary,
        }
    }

    pub fn has_more(&self) -> bool {
        self.chain.next(self.boundary).is_some()
    }

    /// Moves to the next combination.
    pub fn advance(&mut self) -> Result<()> {
        let moved = self.chain.next(self.boundary).ok_or(Error::Exhausted)?;
        let after = self.chain.next(moved);
        self.chain.link(self.boundary, after);
        self.chain.link(moved, Some(self.head));
        self.head = moved;

        if !self.chain.value(moved) {
            if let Some(second) = self.chain.next(moved) {
                if self.chain.value(second) {
                    self.boundary = second;
                }
            }
        }

        log::trace!("cool-lex transition to {}", self);
        Ok(())
    }

    /// Selected indices of the current combination.
    pub fn selected_indices(&self) -> SelectedIndices<'_> {
        SelectedIndices::new(&self.chain, self.head)
    }
}

impl fmt::Display for CoolLex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.chain.display(self.head), f)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    fn all_strings(mut engine: CoolLex) -> Vec<String> {
        let mut all = vec![engine.to_string()];
        while engine.has_more() {
            engine.advance().unwrap();
            all.push(engine.to_string());
        }
        all
    }

    #[test]
    fn test_1_1() {
        let engine = CoolLex::new(1, 1);
        assert!(!engine.has_more());
        assert_eq!(engine.to_string(), "1");
    }

    #[test]
    fn test_3_2() {
        assert_eq!(all_strings(CoolLex::new(3, 2)), vec!["110", "011", "101"]);
    }

    #[test]
    fn test_4_1() {
        assert_eq!(
            all_strings(CoolLex::new(4, 1)),
            vec!["1000", "0100", "0010", "0001"]
        );
    }

    #[test]
    fn test_4_2() {
        assert_eq!(
            all_strings(CoolLex::new(4, 2)),
            vec!["1100", "0110", "1010", "0101", "0011", "1001"]
        );
    }

    #[test]
    fn test_5_3() {
        assert_eq!(
            all_strings(CoolLex::new(5, 3)),
            vec![
                "11100", "01110", "10110", "11010", "01101", "10101", "01011", "00111",
                "10011", "11001"
            ]
        );
    }

    #[test]
    fn test_full() {
        assert_eq!(all_strings(CoolLex::new(3, 3)), vec!["111"]);
    }

    #[test]
    fn test_first_and_last() {
        for n in 1..9 {
            for k in 1..=n {
                let strings = all_strings(CoolLex::new(n, k));
                let first = "1".repeat(k) + &"0".repeat(n - k);
                assert_eq!(strings.first(), Some(&first));
                let last = "1".repeat(k - 1) + &"0".repeat(n - k) + "1";
                assert_eq!(strings.last(), Some(&last), "{} choose {}", n, k);
            }
        }
    }

    #[test]
    fn test_distinct_with_k_ones() {
        for n in 1..9 {
            for k in 1..=n {
                let strings = all_strings(CoolLex::new(n, k));
                let distinct: HashSet<_> = strings.iter().collect();
                assert_eq!(distinct.len(), strings.len());
                for s in &strings {
                    assert_eq!(s.len(), n);
                    assert_eq!(s.matches('1').count(), k);
                }
            }
        }
    }

    #[test]
    fn test_advance_when_exhausted() {
        let mut engine = CoolLex::new(2, 1);
        engine.advance().unwrap();
        assert!(!engine.has_more());
        assert_eq!(engine.advance(), Err(Error::Exhausted));
        assert_eq!(engine.to_string(), "01");
    }
}
