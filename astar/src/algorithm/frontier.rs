//! Mutable priority queue holding the open set of a search.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::default::Default;
use std::fmt::Debug;
use std::hash::Hash;

use crate::errors::{Result, SearchError};
use crate::traits::{is_ordered, Score};

#[derive(Debug, Clone)]
struct Entry<N, P> {
    node: N,
    priority: P,
    sequence: u64,
}

impl<N, P> Entry<N, P>
where
    P: PartialOrd,
{
    /// Lower priorities come first, ties go to the earlier insertion.
    fn precedes(&self, other: &Self) -> bool {
        match self.priority.partial_cmp(&other.priority) {
            Some(Ordering::Less) => true,
            Some(Ordering::Greater) => false,
            _ => self.sequence < other.sequence,
        }
    }
}

/// A min-queue of nodes whose priorities can be changed in place.
///
/// Backed by a binary heap plus a map from each node to its slot
/// in the heap, so `insert`, `update` and `pop` are all O(log n)
/// and `contains` is O(1). Each node appears at most once.
///
/// Nodes with equal priority are popped in the order they were
/// first inserted. Updating a node's priority does not change
/// its place in that order.
#[derive(Debug)]
pub struct Frontier<N, P> {
    heap: Vec<Entry<N, P>>,
    slots: HashMap<N, usize>,
    counter: u64,
}

impl<N, P> Default for Frontier<N, P>
where
    N: Eq + Hash,
{
    fn default() -> Self {
        Frontier {
            heap: Vec::new(),
            slots: HashMap::new(),
            counter: 0,
        }
    }
}

impl<N, P> Frontier<N, P>
where
    N: Debug + Clone + Eq + Hash,
    P: Score,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes waiting in the frontier.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.slots.contains_key(node)
    }

    /// Current priority of a node, if it is in the frontier.
    pub fn priority(&self, node: &N) -> Option<P> {
        self.slots.get(node).map(|&slot| self.heap[slot].priority)
    }

    /// The node which would be returned by the next [Frontier::pop].
    pub fn peek(&self) -> Option<(&N, P)> {
        self.heap.first().map(|e| (&e.node, e.priority))
    }

    /// Add a node which is not yet in the frontier.
    pub fn insert(&mut self, node: N, priority: P) -> Result<()> {
        check_priority(&priority)?;
        if self.slots.contains_key(&node) {
            return Err(SearchError::DuplicateNode(format!("{:?}", node)));
        }

        let slot = self.heap.len();
        self.slots.insert(node.clone(), slot);
        self.heap.push(Entry {
            node,
            priority,
            sequence: self.counter,
        });
        self.counter += 1;
        self.sift_up(slot);
        Ok(())
    }

    /// Remove and return the node with the lowest priority.
    pub fn pop(&mut self) -> Result<(N, P)> {
        if self.heap.is_empty() {
            return Err(SearchError::EmptyFrontier);
        }

        let last = self.heap.len() - 1;
        self.swap(0, last);
        let entry = self.heap.pop().ok_or(SearchError::EmptyFrontier)?;
        self.slots.remove(&entry.node);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok((entry.node, entry.priority))
    }

    /// Replace the priority of a node already in the frontier.
    ///
    /// The new priority may be higher or lower than the old one.
    pub fn update(&mut self, node: &N, priority: P) -> Result<()> {
        check_priority(&priority)?;
        let slot = *self
            .slots
            .get(node)
            .ok_or_else(|| SearchError::NodeNotFound(format!("{:?}", node)))?;

        let lowered = priority < self.heap[slot].priority;
        self.heap[slot].priority = priority;
        if lowered {
            self.sift_up(slot);
        } else {
            self.sift_down(slot);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.slots.clear();
        self.counter = 0;
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        if let Some(slot) = self.slots.get_mut(&self.heap[a].node) {
            *slot = a;
        }
        if let Some(slot) = self.slots.get_mut(&self.heap[b].node) {
            *slot = b;
        }
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.heap[slot].precedes(&self.heap[parent]) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut best = slot;

            if left < n && self.heap[left].precedes(&self.heap[best]) {
                best = left;
            }
            if right < n && self.heap[right].precedes(&self.heap[best]) {
                best = right;
            }
            if best == slot {
                break;
            }
            self.swap(slot, best);
            slot = best;
        }
    }
}

fn check_priority<P: Score>(priority: &P) -> Result<()> {
    if is_ordered(priority) {
        Ok(())
    } else {
        Err(SearchError::UnorderedCost(format!("{:?}", priority)))
    }
}

#[cfg(test)]
mod test {

    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn drain<N, P>(frontier: &mut Frontier<N, P>) -> Vec<(N, P)>
    where
        N: Debug + Clone + Eq + Hash,
        P: Score,
    {
        let mut out = Vec::new();
        while !frontier.is_empty() {
            out.push(frontier.pop().unwrap());
        }
        out
    }

    #[test]
    fn pops_in_priority_order() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut frontier = Frontier::new();

        let mut nodes: Vec<u32> = (0..500).collect();
        nodes.shuffle(&mut rng);
        for node in nodes {
            frontier.insert(node, rng.gen_range(0..100u32)).unwrap();
        }
        assert_eq!(frontier.len(), 500);

        let popped = drain(&mut frontier);
        assert_eq!(popped.len(), 500);
        for pair in popped.windows(2) {
            assert!(pair[0].1 <= pair[1].1, "{:?} popped before {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn ties_pop_in_insertion_order() {
        let mut frontier = Frontier::new();
        for node in &['c', 'a', 'd', 'b'] {
            frontier.insert(*node, 1.5).unwrap();
        }
        frontier.insert('z', 0.5).unwrap();

        let order: Vec<char> = drain(&mut frontier).into_iter().map(|(n, _)| n).collect();
        assert_eq!(order, vec!['z', 'c', 'a', 'd', 'b']);
    }

    #[test]
    fn update_changes_pop_order() {
        let mut frontier = Frontier::new();
        frontier.insert("a", 1).unwrap();
        frontier.insert("b", 5).unwrap();
        frontier.insert("c", 3).unwrap();

        frontier.update(&"b", 0).unwrap();
        assert_eq!(frontier.pop().unwrap(), ("b", 0));

        frontier.update(&"a", 10).unwrap();
        assert_eq!(frontier.priority(&"a"), Some(10));
        assert_eq!(frontier.pop().unwrap(), ("c", 3));
        assert_eq!(frontier.pop().unwrap(), ("a", 10));
    }

    #[test]
    fn update_keeps_heap_consistent() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut frontier = Frontier::new();
        for node in 0..200u32 {
            frontier.insert(node, rng.gen_range(0..1000i64)).unwrap();
        }
        for _ in 0..400 {
            let node = rng.gen_range(0..200u32);
            frontier.update(&node, rng.gen_range(-500..1500i64)).unwrap();
        }

        let popped = drain(&mut frontier);
        assert_eq!(popped.len(), 200);
        for pair in popped.windows(2) {
            assert!(pair[0].1 <= pair[1].1);
        }
    }

    #[test]
    fn contains_tracks_membership() {
        let mut frontier = Frontier::new();
        assert!(!frontier.contains(&1));

        frontier.insert(1, 2.0).unwrap();
        frontier.insert(2, 1.0).unwrap();
        assert!(frontier.contains(&1));
        assert!(frontier.contains(&2));

        assert_eq!(frontier.pop().unwrap().0, 2);
        assert!(!frontier.contains(&2));
        assert!(frontier.contains(&1));

        frontier.insert(3, 0.0).unwrap();
        frontier.clear();
        assert!(frontier.is_empty());
        assert!(!frontier.contains(&1));
        assert!(!frontier.contains(&3));
        assert!(frontier.peek().is_none());
    }

    #[test]
    fn misuse_is_an_error() {
        let mut frontier: Frontier<u8, f64> = Frontier::new();

        assert!(matches!(frontier.pop(), Err(SearchError::EmptyFrontier)));
        assert!(matches!(
            frontier.update(&4, 1.0),
            Err(SearchError::NodeNotFound(_))
        ));

        frontier.insert(4, 1.0).unwrap();
        assert!(matches!(
            frontier.insert(4, 0.5),
            Err(SearchError::DuplicateNode(_))
        ));
        assert!(matches!(
            frontier.insert(5, std::f64::NAN),
            Err(SearchError::UnorderedCost(_))
        ));
        assert!(matches!(
            frontier.update(&4, std::f64::NAN),
            Err(SearchError::UnorderedCost(_))
        ));
        assert_eq!(frontier.peek(), Some((&4, 1.0)));
    }
}
