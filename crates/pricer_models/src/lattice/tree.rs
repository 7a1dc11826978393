//! Flat triangular storage for recombining binomial trees.
//!
//! A lattice of depth `n` has levels `0..=n`; level `i` holds `i + 1` nodes.
//! Nodes are stored level by level in one contiguous buffer, so node `(i, j)`
//! lives at offset `i(i+1)/2 + j` and the whole tree takes `(n+1)(n+2)/2`
//! slots.
//!
//! ```text
//!                 (0,0)
//!                /     \
//!           (1,0)       (1,1)
//!          /    \      /    \
//!      (2,0)    (2,1)       (2,2)
//! ```
//!
//! Index `j` counts down-moves: `(i, j)` steps up to `(i+1, j)` and down to
//! `(i+1, j+1)`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single node of the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LatticeNode {
    /// Underlying price at this node
    pub stock_price: f64,
    /// European call value at this node
    pub call_value: f64,
    /// European put value at this node
    pub put_value: f64,
    /// Risk-neutral probability of reaching this node from the root
    pub reach_probability: f64,
}

/// Offset of the first node of `level` in the flat buffer.
#[inline]
pub(crate) fn level_offset(level: usize) -> usize {
    level * (level + 1) / 2
}

/// Number of nodes in a lattice with `steps` time steps.
#[inline]
pub fn node_count(steps: usize) -> usize {
    (steps + 1) * (steps + 2) / 2
}

/// Recombining binomial tree stored as a flat arena.
///
/// An empty lattice (no levels) is returned by valuators for degenerate
/// inputs.
///
/// # Examples
/// ```
/// use pricer_models::lattice::{Lattice, LatticeNode};
///
/// let lattice = Lattice::filled(2, LatticeNode::default());
/// assert_eq!(lattice.len(), 6);
/// assert_eq!(lattice.depth(), Some(2));
/// assert_eq!(lattice.level(2).map(|l| l.len()), Some(3));
/// assert!(lattice.node(1, 2).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Lattice {
    steps: usize,
    nodes: Vec<LatticeNode>,
}

impl Lattice {
    /// Creates a lattice with no levels.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a lattice of depth `steps` with every node set to `node`.
    pub fn filled(steps: usize, node: LatticeNode) -> Self {
        Self {
            steps,
            nodes: vec![node; node_count(steps)],
        }
    }

    /// Returns the depth `n` (number of time steps), or `None` when empty.
    #[inline]
    pub fn depth(&self) -> Option<usize> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(self.steps)
        }
    }

    /// Returns the number of levels (`n + 1`), or zero when empty.
    #[inline]
    pub fn level_count(&self) -> usize {
        self.depth().map_or(0, |n| n + 1)
    }

    /// Total number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the lattice has no levels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the nodes of one level, ordered by down-move count.
    pub fn level(&self, level: usize) -> Option<&[LatticeNode]> {
        if level >= self.level_count() {
            return None;
        }
        let start = level_offset(level);
        self.nodes.get(start..start + level + 1)
    }

    /// Mutable access to one level.
    pub(crate) fn level_mut(&mut self, level: usize) -> Option<&mut [LatticeNode]> {
        if level >= self.level_count() {
            return None;
        }
        let start = level_offset(level);
        self.nodes.get_mut(start..start + level + 1)
    }

    /// Mutable access to one level together with the level after it.
    ///
    /// Returns `None` for the terminal level, which has no successors.
    pub(crate) fn level_with_successors(
        &mut self,
        level: usize,
    ) -> Option<(&mut [LatticeNode], &[LatticeNode])> {
        if level + 1 >= self.level_count() {
            return None;
        }
        let start = level_offset(level);
        let (head, tail) = self.nodes.split_at_mut(level_offset(level + 1));
        Some((head.get_mut(start..)?, tail.get(..level + 2)?))
    }

    /// Returns node `(level, index)`.
    #[inline]
    pub fn node(&self, level: usize, index: usize) -> Option<&LatticeNode> {
        self.level(level).and_then(|nodes| nodes.get(index))
    }

    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> Option<&LatticeNode> {
        self.node(0, 0)
    }

    /// Returns the terminal (expiry) level.
    #[inline]
    pub fn terminal(&self) -> Option<&[LatticeNode]> {
        self.depth().and_then(|n| self.level(n))
    }

    /// Iterates over the levels from the root to expiry.
    pub fn levels(&self) -> impl Iterator<Item = &[LatticeNode]> + '_ {
        (0..self.level_count()).filter_map(move |level| self.level(level))
    }

    /// Sum of reach probabilities over one level.
    ///
    /// Equals one for every level of a well-formed lattice.
    pub fn level_probability_sum(&self, level: usize) -> Option<f64> {
        self.level(level)
            .map(|nodes| nodes.iter().map(|node| node.reach_probability).sum())
    }

    /// Read-only view of the flat buffer.
    #[inline]
    pub fn as_slice(&self) -> &[LatticeNode] {
        &self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(steps: usize) -> Lattice {
        let mut lattice = Lattice::filled(steps, LatticeNode::default());
        for level in 0..=steps {
            for (index, node) in lattice.level_mut(level).unwrap().iter_mut().enumerate() {
                node.stock_price = (level * 100 + index) as f64;
            }
        }
        lattice
    }

    #[test]
    fn test_node_count_triangular() {
        assert_eq!(node_count(0), 1);
        assert_eq!(node_count(1), 3);
        assert_eq!(node_count(2), 6);
        assert_eq!(node_count(50), 51 * 52 / 2);
    }

    #[test]
    fn test_addressing_matches_level_and_index() {
        let lattice = numbered(4);
        for level in 0..=4 {
            assert_eq!(lattice.level(level).unwrap().len(), level + 1);
            for index in 0..=level {
                let node = lattice.node(level, index).unwrap();
                assert_eq!(node.stock_price, (level * 100 + index) as f64);
            }
        }
    }

    #[test]
    fn test_out_of_range_access() {
        let lattice = numbered(3);
        assert!(lattice.level(4).is_none());
        assert!(lattice.node(2, 3).is_none());
        assert!(lattice.node(5, 0).is_none());
    }

    #[test]
    fn test_empty_lattice() {
        let lattice = Lattice::empty();
        assert!(lattice.is_empty());
        assert_eq!(lattice.len(), 0);
        assert_eq!(lattice.depth(), None);
        assert_eq!(lattice.level_count(), 0);
        assert!(lattice.root().is_none());
        assert!(lattice.terminal().is_none());
        assert_eq!(lattice.levels().count(), 0);
    }

    #[test]
    fn test_level_with_successors_borrows_adjacent_levels() {
        let mut lattice = numbered(3);
        {
            let (nodes, successors) = lattice.level_with_successors(1).unwrap();
            assert_eq!(nodes.len(), 2);
            assert_eq!(successors.len(), 3);
            assert_eq!(successors[2].stock_price, 202.0);
            nodes[1].stock_price = successors[2].stock_price;
        }
        assert_eq!(lattice.node(1, 1).unwrap().stock_price, 202.0);
        assert!(lattice.level_with_successors(3).is_none());
        assert!(Lattice::empty().level_with_successors(0).is_none());
    }

    #[test]
    fn test_levels_iterate_in_order() {
        let lattice = numbered(3);
        let sizes: Vec<usize> = lattice.levels().map(|level| level.len()).collect();
        assert_eq!(sizes, vec![1, 2, 3, 4]);
        assert_eq!(lattice.terminal().unwrap()[0].stock_price, 300.0);
    }
}
