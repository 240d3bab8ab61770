//! Dijkstra's Algorithm
//!
//! A plain uniform-cost search, independent of the
//! A* engine, used to check its answers.

use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};
use std::default::Default;
use std::hash::Hash;

use num::Zero;

use crate::errors::{Result, SearchError};
use crate::traits::{is_ordered, Graph, Score};

/// Wrapper for nodes which sorts appropriately
/// for Dijkstra's Algorithm.
#[derive(Debug)]
struct DijkstraElement<N, C> {
    node: N,
    cost: C,
}

impl<N, C> PartialEq for DijkstraElement<N, C>
where
    C: Score,
{
    fn eq(&self, other: &Self) -> bool {
        self.cost.eq(&other.cost)
    }
}

impl<N, C> Eq for DijkstraElement<N, C> where C: Score {}

impl<N, C> Ord for DijkstraElement<N, C>
where
    C: Score,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .partial_cmp(&other.cost)
            .unwrap_or(Ordering::Equal)
            .reverse()
    }
}

impl<N, C> PartialOrd for DijkstraElement<N, C>
where
    C: Score,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Remembers the best cost at which each node has been expanded.
#[derive(Debug)]
struct Cache<N, C> {
    cache: HashMap<N, C>,
}

impl<N, C> Default for Cache<N, C>
where
    N: Eq + Hash,
{
    fn default() -> Self {
        Cache {
            cache: HashMap::default(),
        }
    }
}

impl<N, C> Cache<N, C>
where
    N: Eq + Hash + Clone,
    C: Score,
{
    /// Should a node reached at this cost be expanded?
    fn check(&mut self, node: &N, cost: C) -> bool {
        // (a) Nodes not yet in the cache are recorded and expanded.
        // (b) Nodes already seen at a lower or equal cost are skipped.
        // (c) Nodes seen only at a higher cost take the new cost.
        match self.cache.entry(node.clone()) {
            Entry::Vacant(entry) => {
                entry.insert(cost);
                true
            }
            Entry::Occupied(mut entry) => {
                if cost < *entry.get() {
                    entry.insert(cost);
                    true
                } else {
                    false
                }
            }
        }
    }
}

/// Cost of the cheapest path from `origin` to any node
/// satisfying `is_goal`, or `None` if there isn't one.
///
/// Ignores the graph's heuristic entirely.
pub fn shortest_path_length<G, F>(
    graph: &G,
    origin: G::Node,
    is_goal: F,
) -> Result<Option<G::Cost>>
where
    G: Graph,
    F: Fn(&G::Node) -> bool,
{
    let mut queue = BinaryHeap::new();
    let mut cache = Cache::default();

    queue.push(DijkstraElement {
        node: origin,
        cost: G::Cost::zero(),
    });

    while let Some(DijkstraElement { node, cost }) = queue.pop() {
        if is_goal(&node) {
            return Ok(Some(cost));
        }

        if !cache.check(&node, cost) {
            continue;
        }

        for next in graph.neighbours(&node) {
            let step = graph
                .distance(&node, &next)
                .ok_or_else(|| SearchError::NotAdjacent {
                    from: format!("{:?}", node),
                    to: format!("{:?}", next),
                })?;

            let total = cost + step;
            if !is_ordered(&total) {
                return Err(SearchError::UnorderedCost(format!("{:?}", total)));
            }
            queue.push(DijkstraElement {
                node: next,
                cost: total,
            });
        }
    }

    Ok(None)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::FnGraph;

    fn line(length: u32) -> FnGraph<u32, u32> {
        FnGraph::builder()
            .neighbours(move |n: &u32| {
                let mut next = Vec::new();
                if *n > 0 {
                    next.push(n - 1);
                }
                if *n < length {
                    next.push(n + 1);
                }
                next
            })
            .distance(|_: &u32, _: &u32| Some(2))
            .build()
            .unwrap()
    }

    #[test]
    fn walks_the_line() {
        let graph = line(10);
        assert_eq!(shortest_path_length(&graph, 3, |n| *n == 3).unwrap(), Some(0));
        assert_eq!(shortest_path_length(&graph, 3, |n| *n == 9).unwrap(), Some(12));
        assert_eq!(shortest_path_length(&graph, 3, |n| *n == 11).unwrap(), None);
    }

    #[test]
    fn nearest_of_many_goals() {
        let graph = line(10);
        assert_eq!(
            shortest_path_length(&graph, 5, |n| *n == 0 || *n == 8).unwrap(),
            Some(6)
        );
    }
}
