use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;

use num::Zero;

/// Numeric type used for path costs and priorities.
///
/// Anything which can be added, compared and has a zero qualifies,
/// so integer and floating point costs both work. Floating point
/// NaN values are rejected by the search when they show up.
pub trait Score: Debug + Copy + PartialOrd + Add<Output = Self> + Zero {}

impl<T> Score for T where T: Debug + Copy + PartialOrd + Add<Output = T> + Zero {}

/// Provides an interface for graphs which can be searched.
///
/// The graph supplies the topology through [Graph::neighbours],
/// the edge costs through [Graph::distance] and optionally
/// an estimate of the remaining cost through [Graph::heuristic].
pub trait Graph {
    type Node: Debug + Clone + Eq + Hash;
    type Cost: Score;

    /// Candidate successors of a node. Called once each time
    /// the node is expanded, so it may be computed on the fly.
    fn neighbours(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Cost of the edge between two adjacent nodes.
    ///
    /// Only called for pairs produced by [Graph::neighbours]. Returning
    /// `None` for such a pair is treated as a broken graph.
    fn distance(&self, from: &Self::Node, to: &Self::Node) -> Option<Self::Cost>;

    /// Best guess at the remaining cost from this node to the goal.
    ///
    /// The search is only optimal when this never overestimates.
    /// Defaults to zero, which turns A* into Dijkstra's algorithm.
    fn heuristic(&self, _node: &Self::Node) -> Self::Cost {
        Self::Cost::zero()
    }
}

impl<'g, G> Graph for &'g G
where
    G: Graph + ?Sized,
{
    type Node = G::Node;
    type Cost = G::Cost;

    fn neighbours(&self, node: &Self::Node) -> Vec<Self::Node> {
        (**self).neighbours(node)
    }

    fn distance(&self, from: &Self::Node, to: &Self::Node) -> Option<Self::Cost> {
        (**self).distance(from, to)
    }

    fn heuristic(&self, node: &Self::Node) -> Self::Cost {
        (**self).heuristic(node)
    }
}

/// True when a cost can be compared with itself, i.e. it isn't NaN.
pub(crate) fn is_ordered<C: Score>(cost: &C) -> bool {
    cost.partial_cmp(cost).is_some()
}
