use super::node::{Edge, Node};
use crate::{NodeID, Point};

use hashbrown::HashMap;

#[derive(Clone, Debug)]
pub(crate) struct NodeList {
    nodes: slab::Slab<Node>,
    name_map: HashMap<String, NodeID>,
}

impl NodeList {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: slab::Slab::with_capacity(capacity),
            name_map: HashMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.name_map.len()
    }

    /// Inserts a Node for the Point, unless a Node with the same Name already exists.
    pub fn add_node(&mut self, point: Point) -> Option<NodeID> {
        if self.name_map.contains_key(&point.name) {
            return None;
        }
        let entry = self.nodes.vacant_entry();
        let id = entry.key();
        self.name_map.insert(point.name.clone(), id);
        entry.insert(Node::new(id, point));
        Some(id)
    }

    /// Adds a directed Edge. Returns `false` if the Edge already existed.
    pub fn add_edge(&mut self, src: NodeID, target: NodeID) -> bool {
        if self[src].edge_to(target).is_some() {
            return false;
        }
        let cost = self[src].point.distance(&self[target].point);
        self[src].edges.push(Edge { target, cost });
        true
    }

    /// Numbers the Nodes by the lexicographic order of their Names.
    pub fn assign_ranks(&mut self) {
        let mut ids: Vec<NodeID> = self.nodes.iter().map(|(id, _)| id).collect();
        ids.sort_by(|a, b| self[*a].name().cmp(self[*b].name()));
        for (rank, id) in ids.into_iter().enumerate() {
            self[id].rank = rank;
        }
    }

    pub fn iter(&self) -> slab::Iter<Node> {
        self.nodes.iter()
    }

    pub fn id_of(&self, name: &str) -> Option<NodeID> {
        self.name_map.get(name).copied()
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.id_of(name).map(|id| &self[id])
    }
}

use std::ops::{Index, IndexMut};
impl Index<NodeID> for NodeList {
    type Output = Node;
    #[track_caller]
    fn index(&self, index: NodeID) -> &Node {
        &self.nodes[index]
    }
}
impl IndexMut<NodeID> for NodeList {
    #[track_caller]
    fn index_mut(&mut self, index: NodeID) -> &mut Node {
        &mut self.nodes[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_names_are_rejected() {
        let mut nodes = NodeList::with_capacity(2);
        let first = nodes.add_node(Point::new("A", 0.0, 0.0, ["B"]));
        let second = nodes.add_node(Point::new("A", 5.0, 5.0, ["C"]));

        assert_eq!(first, Some(0));
        assert_eq!(second, None);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].pos(), (0.0, 0.0));
    }

    #[test]
    fn add_edge_once() {
        let mut nodes = NodeList::with_capacity(2);
        let a = nodes.add_node(Point::new("A", 0.0, 0.0, ["B"])).unwrap();
        let b = nodes.add_node(Point::new("B", 3.0, 4.0, ["A"])).unwrap();

        assert!(nodes.add_edge(a, b));
        assert!(!nodes.add_edge(a, b));
        assert_eq!(nodes[a].edges, vec![Edge { target: b, cost: 5.0 }]);
        assert!(nodes[b].edges.is_empty());
    }

    #[test]
    fn ranks_follow_names() {
        let mut nodes = NodeList::with_capacity(3);
        let c = nodes.add_node(Point::new("C", 0.0, 0.0, Vec::<String>::new())).unwrap();
        let a = nodes.add_node(Point::new("A", 0.0, 0.0, Vec::<String>::new())).unwrap();
        let b = nodes.add_node(Point::new("B", 0.0, 0.0, Vec::<String>::new())).unwrap();
        nodes.assign_ranks();

        assert_eq!(nodes[a].rank, 0);
        assert_eq!(nodes[b].rank, 1);
        assert_eq!(nodes[c].rank, 2);
        assert_eq!(nodes.id_of("B"), Some(b));
        assert_eq!(nodes.id_of("Z"), None);
    }
}
