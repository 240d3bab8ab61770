//! Graphs assembled from closures.
//!
//! Handy when the graph doesn't warrant its own type: supply the
//! neighbours, distance and (optionally) heuristic functions to a
//! [FnGraphBuilder] and search the resulting [FnGraph].

use std::fmt;
use std::fmt::Debug;
use std::hash::Hash;

use crate::errors::{Result, SearchError};
use crate::traits::{Graph, Score};

type NeighboursFn<N> = Box<dyn Fn(&N) -> Vec<N>>;
type DistanceFn<N, C> = Box<dyn Fn(&N, &N) -> Option<C>>;
type HeuristicFn<N, C> = Box<dyn Fn(&N) -> C>;

/// A [Graph] whose behavior is provided by closures.
pub struct FnGraph<N, C> {
    neighbours: NeighboursFn<N>,
    distance: DistanceFn<N, C>,
    heuristic: Option<HeuristicFn<N, C>>,
}

impl<N, C> FnGraph<N, C>
where
    N: Debug + Clone + Eq + Hash,
    C: Score,
{
    pub fn builder() -> FnGraphBuilder<N, C> {
        FnGraphBuilder::new()
    }
}

impl<N, C> fmt::Debug for FnGraph<N, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnGraph")
            .field("heuristic", &self.heuristic.is_some())
            .finish()
    }
}

impl<N, C> Graph for FnGraph<N, C>
where
    N: Debug + Clone + Eq + Hash,
    C: Score,
{
    type Node = N;
    type Cost = C;

    fn neighbours(&self, node: &N) -> Vec<N> {
        (self.neighbours)(node)
    }

    fn distance(&self, from: &N, to: &N) -> Option<C> {
        (self.distance)(from, to)
    }

    fn heuristic(&self, node: &N) -> C {
        match &self.heuristic {
            Some(h) => h(node),
            None => C::zero(),
        }
    }
}

/// Collects the closures which make up a [FnGraph].
pub struct FnGraphBuilder<N, C> {
    neighbours: Option<NeighboursFn<N>>,
    distance: Option<DistanceFn<N, C>>,
    heuristic: Option<HeuristicFn<N, C>>,
}

impl<N, C> FnGraphBuilder<N, C>
where
    N: Debug + Clone + Eq + Hash,
    C: Score,
{
    pub fn new() -> Self {
        Self {
            neighbours: None,
            distance: None,
            heuristic: None,
        }
    }

    /// Candidate successors of a node.
    pub fn neighbours<F>(mut self, f: F) -> Self
    where
        F: Fn(&N) -> Vec<N> + 'static,
    {
        self.neighbours = Some(Box::new(f));
        self
    }

    /// Edge cost between adjacent nodes, `None` when they aren't adjacent.
    pub fn distance<F>(mut self, f: F) -> Self
    where
        F: Fn(&N, &N) -> Option<C> + 'static,
    {
        self.distance = Some(Box::new(f));
        self
    }

    /// Estimate of the remaining cost. Defaults to zero.
    pub fn heuristic<F>(mut self, f: F) -> Self
    where
        F: Fn(&N) -> C + 'static,
    {
        self.heuristic = Some(Box::new(f));
        self
    }

    pub fn build(self) -> Result<FnGraph<N, C>> {
        Ok(FnGraph {
            neighbours: self
                .neighbours
                .ok_or(SearchError::Unconfigured("neighbours"))?,
            distance: self.distance.ok_or(SearchError::Unconfigured("distance"))?,
            heuristic: self.heuristic,
        })
    }
}

impl<N, C> Default for FnGraphBuilder<N, C>
where
    N: Debug + Clone + Eq + Hash,
    C: Score,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_closures() {
        let missing = FnGraph::<u8, u8>::builder()
            .distance(|_, _| Some(1))
            .build();
        assert!(matches!(
            missing,
            Err(SearchError::Unconfigured("neighbours"))
        ));

        let missing = FnGraph::<u8, u8>::builder()
            .neighbours(|_| Vec::new())
            .build();
        assert!(matches!(missing, Err(SearchError::Unconfigured("distance"))));
    }

    #[test]
    fn heuristic_defaults_to_zero() {
        let graph = FnGraph::builder()
            .neighbours(|n: &i64| vec![n - 1, n + 1])
            .distance(|a: &i64, b: &i64| Some((a - b).abs() as f32))
            .build()
            .unwrap();

        assert_eq!(graph.neighbours(&3), vec![2, 4]);
        assert_eq!(graph.distance(&3, &4), Some(1.0));
        assert_eq!(graph.heuristic(&3), 0.0);

        let graph = FnGraph::builder()
            .neighbours(|n: &i64| vec![n - 1, n + 1])
            .distance(|a: &i64, b: &i64| Some((a - b).abs() as f32))
            .heuristic(|n: &i64| (10 - n).abs() as f32)
            .build()
            .unwrap();
        assert_eq!(graph.heuristic(&3), 7.0);
    }
}
