use std::fmt;

/// Position of a node in its [`BitChain`]. Only meaningful for the chain that produced it;
/// using it with another chain reads the wrong node or panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct BitNode {
    value: bool,
    next: Option<NodeId>,
}

/// Singly-linked bit string stored as an arena. Node values are fixed when the chain is
/// built; only the links change afterwards.
#[derive(Debug, Clone)]
pub struct BitChain {
    nodes: Vec<BitNode>,
    ones: usize,
}

impl BitChain {
    /// Builds `ones` one-nodes followed by `zeros` zero-nodes, linked in that order. The
    /// first node is `NodeId` 0.
    pub fn new(ones: usize, zeros: usize) -> BitChain {
        let len = ones + zeros;
        let nodes = (0..len)
            .map(|i| BitNode {
                value: i < ones,
                next: if i + 1 < len { Some(NodeId(i + 1)) } else { None },
            })
            .collect();
        BitChain { nodes, ones }
    }

    /// Node `i` in construction order.
    #[cfg(test)]
    pub fn node(&self, i: usize) -> Option<NodeId> {
        (i < self.nodes.len()).then(|| NodeId(i))
    }

    /// First node in construction order and the last one-node. `ones` must be nonzero.
    pub(super) fn initial_ends(&self) -> (NodeId, NodeId) {
        debug_assert!(self.ones > 0);
        (NodeId(0), NodeId(self.ones - 1))
    }

    pub fn ones(&self) -> usize {
        self.ones
    }

    pub fn value(&self, id: NodeId) -> bool {
        self.nodes[id.0].value
    }

    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].next
    }

    pub(super) fn link(&mut self, id: NodeId, next: Option<NodeId>) {
        self.nodes[id.0].next = next;
    }

    /// Renders the string starting at `head` as '1's and '0's.
    pub fn display(&self, head: NodeId) -> Render<'_> {
        Render { chain: self, head }
    }
}

pub struct Render<'a> {
    chain: &'a BitChain,
    head: NodeId,
}

impl fmt::Display for Render<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cursor = Some(self.head);
        while let Some(id) = cursor {
            f.write_str(if self.chain.value(id) { "1" } else { "0" })?;
            cursor = self.chain.next(id);
        }
        Ok(())
    }
}
