use crate::{Cost, NodeID, Point};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub target: NodeID,
    pub cost: Cost,
}

#[derive(Clone, Debug)]
pub struct Node {
    pub id: NodeID,
    pub point: Point,
    /// position of the Name in lexicographic order, used to break ties
    pub rank: usize,
    pub edges: Vec<Edge>,
}

impl Node {
    pub fn new(id: NodeID, point: Point) -> Node {
        Node {
            id,
            point,
            rank: 0,
            edges: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.point.name
    }

    pub fn pos(&self) -> (f64, f64) {
        self.point.pos()
    }

    pub fn edge_to(&self, target: NodeID) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.target == target)
    }

    pub fn declares(&self, name: &str) -> bool {
        self.point.neighbors.iter().any(|n| n == name)
    }
}
