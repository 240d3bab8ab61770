//! Complete graphs with weighted edges.

use rand::Rng;

use astar::Graph;

use crate::DriverError;

/// Number of decimal digits kept in randomly generated weights.
pub const DECIMAL_DIGITS: i32 = 3;

/// Round to [DECIMAL_DIGITS] places after the decimal point.
pub fn round(value: f64) -> f64 {
    let scale = 10f64.powi(DECIMAL_DIGITS);
    (value * scale).round() / scale
}

/// A graph where every node is connected to every node, itself included.
///
/// Weights are stored as a dense `nodes x nodes` matrix, row by row.
#[derive(Debug, Clone, PartialEq)]
pub struct CompleteGraph {
    nodes: usize,
    weights: Vec<f64>,
}

impl CompleteGraph {
    pub fn new(nodes: usize, weights: Vec<f64>) -> Result<Self, DriverError> {
        let cells = nodes
            .checked_mul(nodes)
            .ok_or(DriverError::TooLarge(nodes))?;
        if weights.len() != cells {
            return Err(DriverError::Shape {
                nodes,
                weights: weights.len(),
            });
        }
        Ok(Self { nodes, weights })
    }

    /// Symmetric graph with weights drawn uniformly from `[0, 1)`.
    pub fn random<R: Rng>(nodes: usize, rng: &mut R) -> Self {
        let mut weights = vec![0.0; nodes * nodes];
        for i in 0..nodes {
            for j in i..nodes {
                let w = round(rng.gen::<f64>());
                weights[i * nodes + j] = w;
                weights[j * nodes + i] = w;
            }
        }
        Self { nodes, weights }
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes == 0
    }

    pub fn weight(&self, from: usize, to: usize) -> Option<f64> {
        if from < self.nodes && to < self.nodes {
            Some(self.weights[from * self.nodes + to])
        } else {
            None
        }
    }

    /// Iterate over the rows of the weight matrix.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks() panics on zero, and an empty graph has no rows anyway.
        self.weights.chunks(self.nodes.max(1))
    }
}

impl Graph for CompleteGraph {
    type Node = usize;
    type Cost = f64;

    fn neighbours(&self, _node: &usize) -> Vec<usize> {
        (0..self.nodes).collect()
    }

    fn distance(&self, from: &usize, to: &usize) -> Option<f64> {
        self.weight(*from, *to)
    }
}
