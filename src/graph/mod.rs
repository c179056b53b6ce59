mod config;
pub use config::{EdgePolicy, GraphConfig};

mod node;
pub(crate) use node::{Edge, Node};

mod node_list;
pub(crate) use node_list::NodeList;

use crate::{a_star, point, Cost, NodeID, Path, Point, SearchError};
use log::{debug, warn};

/// A static Graph of named Points, connected by Edges weighted with their Euclidean Distance.
///
/// The Graph is built once and never changes afterwards, so it can be shared between any
/// number of concurrent searches.
#[derive(Clone, Debug)]
pub struct Graph {
    nodes: NodeList,
    config: GraphConfig,
}

impl Graph {
    /// Builds a Graph from a list of Points
    ///
    /// The declared Neighbors of every Point are turned into Edges according to the
    /// [`EdgePolicy`] in `config`. Building never fails:
    /// - Neighbors whose Name does not belong to any Point are skipped
    /// - a Point listing itself as a Neighbor is skipped
    /// - if several Points share a Name, only the first one is kept
    ///
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use waypoint_astar::prelude::*;
    /// let graph = Graph::new(
    ///     vec![
    ///         Point::new("A", 0.0, 0.0, ["B", "Nowhere"]),
    ///         Point::new("B", 1.0, 0.0, ["A"]),
    ///     ],
    ///     GraphConfig::default(),
    /// );
    ///
    /// let edges: Vec<_> = graph.edges("A").unwrap().collect();
    /// assert_eq!(edges, vec![("B", 1.0)]);
    /// ```
    pub fn new(points: impl IntoIterator<Item = Point>, config: GraphConfig) -> Graph {
        let points = points.into_iter();
        let mut nodes = NodeList::with_capacity(points.size_hint().0);

        for point in points {
            let name = point.name.clone();
            if nodes.add_node(point).is_none() {
                warn!("duplicate Point {:?} skipped", name);
            }
        }
        nodes.assign_ranks();

        let mut pending = vec![];
        for (id, node) in nodes.iter() {
            for neighbor in node.point.neighbors.iter() {
                let target = match nodes.get(neighbor) {
                    Some(target) => target,
                    None => {
                        warn!(
                            "{:?} declares unknown Neighbor {:?}, skipped",
                            node.name(),
                            neighbor
                        );
                        continue;
                    }
                };
                if target.id == id {
                    warn!("{:?} declares itself as a Neighbor, skipped", node.name());
                    continue;
                }
                if config.edge_policy == EdgePolicy::Mutual && !target.declares(node.name()) {
                    debug!(
                        "{:?} -> {:?} is not declared by both ends, skipped",
                        node.name(),
                        target.name()
                    );
                    continue;
                }
                pending.push((id, target.id));
            }
        }

        let mut edge_count = 0;
        for (src, target) in pending {
            if nodes.add_edge(src, target) {
                edge_count += 1;
            }
        }
        debug!(
            "built Graph with {} Points and {} Edges ({:?})",
            nodes.len(),
            edge_count,
            config.edge_policy
        );

        Graph { nodes, config }
    }

    /// Returns the config that was used to build the Graph
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// The number of Points in the Graph
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if the Graph contains no Points
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` if a Point with that Name exists
    pub fn contains(&self, name: &str) -> bool {
        self.nodes.id_of(name).is_some()
    }

    /// Looks up a Point by its Name
    pub fn point(&self, name: &str) -> Option<&Point> {
        self.nodes.get(name).map(|node| &node.point)
    }

    /// Iterates over all Points in the order they were given to [`Graph::new`]
    pub fn points(&self) -> impl Iterator<Item = &Point> + '_ {
        self.nodes.iter().map(|(_, node)| &node.point)
    }

    /// The Edges leaving a Point, as `(neighbor name, cost)` pairs in declaration order.
    ///
    /// Returns `None` if there is no Point with that Name.
    pub fn edges(&self, name: &str) -> Option<Edges<'_>> {
        self.nodes.get(name).map(|node| Edges {
            nodes: &self.nodes,
            iter: node.edges.iter(),
        })
    }

    /// The Cost of the Edge going from `from` to `to`, if there is one
    pub fn edge_cost(&self, from: &str, to: &str) -> Option<Cost> {
        let target = self.nodes.id_of(to)?;
        self.nodes.get(from)?.edge_to(target).map(|edge| edge.cost)
    }

    /// The total Cost of walking along a sequence of Points.
    ///
    /// Returns `None` if two consecutive Points are not connected by an Edge.
    ///
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use waypoint_astar::prelude::*;
    /// let graph = Graph::new(
    ///     vec![
    ///         Point::new("A", 0.0, 0.0, ["B"]),
    ///         Point::new("B", 3.0, 4.0, ["A", "C"]),
    ///         Point::new("C", 3.0, 0.0, ["B"]),
    ///     ],
    ///     GraphConfig::default(),
    /// );
    ///
    /// assert_eq!(graph.path_cost(&["A", "B", "C"]), Some(9.0));
    /// assert_eq!(graph.path_cost(&["A", "C"]), None);
    /// ```
    pub fn path_cost<S: AsRef<str>>(&self, path: &[S]) -> Option<Cost> {
        path.windows(2).try_fold(0.0, |total, pair| {
            Some(total + self.edge_cost(pair[0].as_ref(), pair[1].as_ref())?)
        })
    }

    /// The straight-line Distance between two Points, used as the A* Heuristic.
    ///
    /// Returns [`f64::INFINITY`] if either Point does not exist.
    ///
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use waypoint_astar::prelude::*;
    /// let graph = Graph::new(
    ///     vec![
    ///         Point::new("A", 0.0, 0.0, Vec::<String>::new()),
    ///         Point::new("B", 3.0, 4.0, Vec::<String>::new()),
    ///     ],
    ///     GraphConfig::default(),
    /// );
    ///
    /// assert_eq!(graph.heuristic("A", "B"), 5.0);
    /// assert_eq!(graph.heuristic("A", "Z"), f64::INFINITY);
    /// ```
    pub fn heuristic(&self, point: &str, goal: &str) -> Cost {
        match (self.nodes.get(point), self.nodes.get(goal)) {
            (Some(point), Some(goal)) => point::distance(point.pos(), goal.pos()),
            _ => Cost::INFINITY,
        }
    }

    /// Finds the cheapest Path from `start` to `goal`.
    ///
    /// Shorthand for [`a_star_search`](crate::a_star_search).
    pub fn find_path(&self, start: &str, goal: &str) -> Result<Path<String>, SearchError> {
        a_star::a_star_search(self, start, goal)
    }

    /// Runs independent searches for several `(start, goal)` pairs.
    ///
    /// The results are in the same order as `queries`. With the `parallel` feature (enabled by
    /// default) the searches are spread across threads.
    ///
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use waypoint_astar::prelude::*;
    /// let graph = Graph::new(
    ///     vec![
    ///         Point::new("A", 0.0, 0.0, ["B"]),
    ///         Point::new("B", 1.0, 0.0, ["A"]),
    ///     ],
    ///     GraphConfig::default(),
    /// );
    ///
    /// let results = graph.find_paths(&[("A", "B"), ("B", "Z")]);
    ///
    /// assert_eq!(results[0].as_ref().unwrap(), &vec!["A", "B"]);
    /// assert!(results[1].is_err());
    /// ```
    pub fn find_paths<S: AsRef<str> + Sync>(
        &self,
        queries: &[(S, S)],
    ) -> Vec<Result<Path<String>, SearchError>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            queries
                .par_iter()
                .map(|(start, goal)| self.find_path(start.as_ref(), goal.as_ref()))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            queries
                .iter()
                .map(|(start, goal)| self.find_path(start.as_ref(), goal.as_ref()))
                .collect()
        }
    }

    pub(crate) fn id_of(&self, name: &str) -> Option<NodeID> {
        self.nodes.id_of(name)
    }

    pub(crate) fn node(&self, id: NodeID) -> &Node {
        &self.nodes[id]
    }
}

/// An Iterator over the Edges of a Point, yielding `(neighbor name, cost)`.
///
/// Created by [`Graph::edges`].
#[derive(Clone, Debug)]
pub struct Edges<'a> {
    nodes: &'a NodeList,
    iter: std::slice::Iter<'a, Edge>,
}

impl<'a> Iterator for Edges<'a> {
    type Item = (&'a str, Cost);
    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        self.iter
            .next()
            .map(|edge| (nodes[edge.target].name(), edge.cost))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl ExactSizeIterator for Edges<'_> {}
