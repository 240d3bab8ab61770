//! The A* search engine and the pieces it is built from.

use std::collections::HashMap;
use std::fmt;

use num::Zero;
use tracing::{debug, trace};

use crate::errors::{Result, SearchError};
use crate::traits::{is_ordered, Graph};

pub mod dijkstra;
pub mod frontier;
pub mod ledger;

use self::frontier::Frontier;
use self::ledger::Ledger;

/// How often (in expanded nodes) to report on a long running search.
const PROGRESS_INTERVAL: usize = 10_000;

/// Decides when a search has arrived.
pub enum Goal<N> {
    /// Stop at this exact node.
    Node(N),

    /// Stop at the first node for which this returns true.
    Predicate(Box<dyn Fn(&N) -> bool>),
}

impl<N> Goal<N>
where
    N: PartialEq,
{
    pub fn is_satisfied(&self, node: &N) -> bool {
        match self {
            Goal::Node(target) => target == node,
            Goal::Predicate(f) => f(node),
        }
    }
}

impl<N> fmt::Debug for Goal<N>
where
    N: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::Node(target) => f.debug_tuple("Node").field(target).finish(),
            Goal::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// A* search over any [Graph].
///
/// Configure the search with [AStar::set_goal] (or [AStar::set_goal_by])
/// and [AStar::set_start], then call [AStar::solve]. When it returns
/// `Ok(true)` the path and its length are available from [AStar::path]
/// and [AStar::length].
///
/// The open set and cost ledger survive a call to `solve`. Calling it a
/// second time continues from wherever the last search stopped; use
/// [AStar::clear] to begin a fresh search.
pub struct AStar<G>
where
    G: Graph,
{
    graph: G,
    frontier: Frontier<G::Node, G::Cost>,
    ledger: Ledger<G::Node, G::Cost>,
    came_from: HashMap<G::Node, G::Node>,
    start: Option<G::Node>,
    goal: Option<Goal<G::Node>>,
    path: Vec<G::Node>,
    length: Option<G::Cost>,
    expanded: usize,
}

impl<G> fmt::Debug for AStar<G>
where
    G: Graph,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AStar")
            .field("start", &self.start)
            .field("goal", &self.goal)
            .field("frontier", &self.frontier.len())
            .field("ledger", &self.ledger.len())
            .field("length", &self.length)
            .field("expanded", &self.expanded)
            .finish()
    }
}

impl<G> AStar<G>
where
    G: Graph,
{
    /// Build a search over the given graph. Nothing is
    /// searched until a start and goal have been set.
    pub fn new(graph: G) -> Self {
        Self {
            graph,
            frontier: Frontier::new(),
            ledger: Ledger::new(),
            came_from: HashMap::new(),
            start: None,
            goal: None,
            path: Vec::new(),
            length: None,
            expanded: 0,
        }
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    pub fn start(&self) -> Option<&G::Node> {
        self.start.as_ref()
    }

    /// Search for a single target node.
    pub fn set_goal(&mut self, target: G::Node) {
        self.goal = Some(Goal::Node(target));
    }

    /// Search for any node which satisfies the predicate.
    pub fn set_goal_by<F>(&mut self, predicate: F)
    where
        F: Fn(&G::Node) -> bool + 'static,
    {
        self.goal = Some(Goal::Predicate(Box::new(predicate)));
    }

    /// Seed the search at `start` with a cost of zero.
    ///
    /// Fails if `start` is already waiting in the open set.
    pub fn set_start(&mut self, start: G::Node) -> Result<()> {
        let priority = self.graph.heuristic(&start);
        self.frontier.insert(start.clone(), priority)?;
        self.ledger.set(start.clone(), G::Cost::zero());
        self.start = Some(start);
        Ok(())
    }

    /// Forget all search state, including the start node.
    ///
    /// The goal is kept, so a new search only needs [AStar::set_start].
    pub fn clear(&mut self) {
        self.frontier.clear();
        self.ledger.clear();
        self.came_from.clear();
        self.start = None;
        self.path.clear();
        self.length = None;
        self.expanded = 0;
    }

    /// Run the search until a goal is found or the open set is exhausted.
    ///
    /// Returns `Ok(false)` when no goal can be reached. Errors only
    /// signal misuse: a missing start or goal, a graph which reports
    /// a neighbour it has no distance for, or costs which can't be
    /// compared.
    pub fn solve(&mut self) -> Result<bool> {
        if self.goal.is_none() {
            return Err(SearchError::Unconfigured("goal"));
        }
        let start = self
            .start
            .clone()
            .ok_or(SearchError::Unconfigured("start"))?;

        debug!(start = ?start, goal = ?self.goal, frontier = self.frontier.len(), "searching");
        self.expanded = 0;

        while !self.frontier.is_empty() {
            let (current, _) = self.frontier.pop()?;
            self.expanded += 1;

            let cost = self
                .ledger
                .get(&current)
                .ok_or_else(|| SearchError::MissingCost(format!("{:?}", current)))?;

            if self.is_goal(&current) {
                self.path = self.reconstruct(&start, current);
                self.length = Some(cost);
                debug!(
                    length = ?cost,
                    steps = self.path.len(),
                    expanded = self.expanded,
                    "found path"
                );
                return Ok(true);
            }

            if self.expanded % PROGRESS_INTERVAL == 0 {
                debug!(
                    frontier = self.frontier.len(),
                    ledger = self.ledger.len(),
                    expanded = self.expanded,
                    "still searching"
                );
            }
            trace!(node = ?current, cost = ?cost, "expanding");

            self.relax(&current, cost)?;
        }

        debug!(expanded = self.expanded, "frontier exhausted without reaching goal");
        Ok(false)
    }

    /// Length of the path found by the last successful [AStar::solve].
    ///
    /// A failed search leaves the previous value in place.
    pub fn length(&self) -> Option<G::Cost> {
        self.length
    }

    /// Nodes from the start to the goal, as found by the last successful
    /// [AStar::solve]. Empty if no search has succeeded yet.
    pub fn path(&self) -> Vec<G::Node> {
        self.path.clone()
    }

    /// Number of nodes taken off the open set by the last [AStar::solve].
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    fn is_goal(&self, node: &G::Node) -> bool {
        self.goal
            .as_ref()
            .map(|g| g.is_satisfied(node))
            .unwrap_or(false)
    }

    // Look for cheaper routes to each neighbour by way of `current`.
    fn relax(&mut self, current: &G::Node, cost: G::Cost) -> Result<()> {
        for neighbour in self.graph.neighbours(current) {
            let step = self.graph.distance(current, &neighbour).ok_or_else(|| {
                SearchError::NotAdjacent {
                    from: format!("{:?}", current),
                    to: format!("{:?}", neighbour),
                }
            })?;

            let tentative = cost + step;
            if !is_ordered(&tentative) {
                return Err(SearchError::UnorderedCost(format!("{:?}", tentative)));
            }

            if !self.ledger.improves(&neighbour, tentative) {
                continue;
            }

            // Record nothing until the frontier accepts the priority.
            let priority = tentative + self.graph.heuristic(&neighbour);
            if self.frontier.contains(&neighbour) {
                self.frontier.update(&neighbour, priority)?;
            } else {
                self.frontier.insert(neighbour.clone(), priority)?;
            }

            self.came_from.insert(neighbour.clone(), current.clone());
            self.ledger.set(neighbour, tentative);
        }
        Ok(())
    }

    fn reconstruct(&self, start: &G::Node, goal: G::Node) -> Vec<G::Node> {
        let mut path: Vec<G::Node> = std::iter::successors(Some(goal), |node| {
            if node == start {
                None
            } else {
                self.came_from.get(node).cloned()
            }
        })
        .take(self.came_from.len() + 1)
        .collect();

        path.reverse();
        path
    }
}
