//! Best known costs from the start of a search.

use std::collections::HashMap;
use std::default::Default;
use std::hash::Hash;

use crate::traits::Score;

/// Records the cheapest cost found so far to reach each node.
///
/// Nodes which have never been reached have no entry, which
/// stands in for an infinite cost. Any real cost improves on it.
#[derive(Debug)]
pub struct Ledger<N, C> {
    costs: HashMap<N, C>,
}

impl<N, C> Default for Ledger<N, C>
where
    N: Eq + Hash,
{
    fn default() -> Self {
        Ledger {
            costs: HashMap::default(),
        }
    }
}

impl<N, C> Ledger<N, C>
where
    N: Eq + Hash,
    C: Score,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded cost, or `None` if the node is still unreached.
    pub fn get(&self, node: &N) -> Option<C> {
        self.costs.get(node).copied()
    }

    /// Would recording `cost` for this node be a strict improvement?
    pub fn improves(&self, node: &N, cost: C) -> bool {
        match self.costs.get(node) {
            Some(known) => cost < *known,
            None => true,
        }
    }

    pub fn set(&mut self, node: N, cost: C) {
        self.costs.insert(node, cost);
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    pub fn clear(&mut self) {
        self.costs.clear();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unreached_nodes_have_no_cost() {
        let mut ledger: Ledger<&str, u64> = Ledger::new();
        assert_eq!(ledger.get(&"a"), None);
        assert!(ledger.improves(&"a", u64::MAX));

        ledger.set("a", 7);
        assert_eq!(ledger.get(&"a"), Some(7));
        assert!(ledger.improves(&"a", 6));
        assert!(!ledger.improves(&"a", 7));
        assert!(!ledger.improves(&"a", 8));
    }

    #[test]
    fn clear_forgets_everything() {
        let mut ledger = Ledger::new();
        ledger.set(1, 0.25);
        ledger.set(2, 0.5);
        ledger.set(1, 0.125);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.get(&1), Some(0.125));

        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(ledger.get(&1), None);
    }
}
