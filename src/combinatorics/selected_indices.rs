use std::iter::FusedIterator;

use super::{BitChain, NodeId};
use crate::error::{Error, Result};

/// Ascending positions of the one-nodes in a chain, counted from a head node.
///
/// ```text
/// combination:  1101001
///               ^^ ^  ^
/// yields:       01 3  6
/// ```
///
/// The view borrows the chain, so it cannot outlive the combination it was taken from.
#[derive(Debug, Clone)]
pub struct SelectedIndices<'a> {
    chain: &'a BitChain,
    cursor: Option<NodeId>,
    position: usize,
    remaining: usize,
}

impl<'a> SelectedIndices<'a> {
    /// `head` must be the first node of the string being read.
    pub(crate) fn new(chain: &'a BitChain, head: NodeId) -> SelectedIndices<'a> {
        let mut indices = SelectedIndices {
            chain,
            cursor: None,
            position: 0,
            remaining: 0,
        };
        indices.reset(head);
        indices
    }

    /// Restarts the walk at `head`, the first node of the string.
    pub(crate) fn reset(&mut self, head: NodeId) {
        self.position = 0;
        self.remaining = self.chain.ones();
        self.seek_one(Some(head));
    }

    pub fn has_next(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn next_int(&mut self) -> Result<usize> {
        let current = self.cursor.ok_or(Error::Exhausted)?;
        let index = self.position;
        self.position += 1;
        self.remaining -= 1;
        self.seek_one(self.chain.next(current));
        Ok(index)
    }

    // Skips zero-nodes starting at `from`, counting each one skipped.
    fn seek_one(&mut self, from: Option<NodeId>) {
        self.cursor = from;
        while let Some(id) = self.cursor {
            if self.chain.value(id) {
                break;
            }
            self.cursor = self.chain.next(id);
            self.position += 1;
        }
    }
}

impl Iterator for SelectedIndices<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.next_int().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SelectedIndices<'_> {}

impl FusedIterator for SelectedIndices<'_> {}
