use crate::{point, Cost, Graph, NodeID, Path};

use hashbrown::{HashMap, HashSet};
use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

/// The reasons why [`a_star_search`] can fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The start or goal is not a Point of the Graph. Contains the missing Name.
    PointNotFound(String),
    /// No sequence of Edges leads from `start` to `goal`
    NoPath {
        /// the Name of the start Point
        start: String,
        /// the Name of the goal Point
        goal: String,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::PointNotFound(name) => {
                write!(f, "start or goal Point {:?} not found", name)
            }
            SearchError::NoPath { start, goal } => {
                write!(f, "no valid Path from {:?} to {:?}", start, goal)
            }
        }
    }
}

impl std::error::Error for SearchError {}

/// An entry of the open set. The BinaryHeap pops the lowest `f`, then the lowest `rank`.
#[derive(Debug)]
struct HeuristicElement {
    id: NodeID,
    cost: Cost,
    f: Cost,
    rank: usize,
}
impl PartialEq for HeuristicElement {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}
impl Eq for HeuristicElement {}
impl PartialOrd for HeuristicElement {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for HeuristicElement {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.f
            .total_cmp(&self.f)
            .then_with(|| rhs.rank.cmp(&self.rank))
    }
}

/// Searches the Graph using the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// The Heuristic is the straight-line Distance to `goal`. Since every Edge costs exactly the
/// Distance between its ends, the Heuristic never overestimates and the returned Path is always
/// one of the cheapest. If several Points in the open set are equally promising, the one with
/// the lexicographically smallest Name is expanded first, so results are reproducible.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use waypoint_astar::prelude::*;
/// // A --- B
/// // |     |
/// // C --- D
/// let graph = Graph::new(
///     vec![
///         Point::new("A", 0.0, 0.0, ["B", "C"]),
///         Point::new("B", 4.0, 0.0, ["A", "D"]),
///         Point::new("C", 0.0, 1.0, ["A", "D"]),
///         Point::new("D", 4.0, 1.0, ["B", "C"]),
///     ],
///     GraphConfig::default(),
/// );
///
/// let path = a_star_search(&graph, "A", "D").unwrap();
///
/// // both ways cost 5, the tie is broken by Name
/// assert_eq!(path, vec!["A", "B", "D"]);
/// assert_eq!(path.cost(), 5.0);
/// ```
///
/// If the Goal cannot be reached, an Error is returned:
/// ```
/// # use waypoint_astar::prelude::*;
/// let graph = Graph::new(
///     vec![
///         Point::new("A", 0.0, 0.0, Vec::<String>::new()),
///         Point::new("B", 1.0, 0.0, Vec::<String>::new()),
///     ],
///     GraphConfig::default(),
/// );
///
/// assert_eq!(
///     a_star_search(&graph, "A", "B"),
///     Err(SearchError::NoPath { start: "A".into(), goal: "B".into() }),
/// );
/// ```
///
/// ## Returns
/// the Path, if one was found. The first Point in the Path is always `start` and the last is
/// `goal`; searching from a Point to itself yields a Path of just that Point with Cost 0.
///
/// ## Errors
/// - [`SearchError::PointNotFound`] if `start` or `goal` is not part of the Graph
/// - [`SearchError::NoPath`] if `goal` cannot be reached from `start`
pub fn a_star_search(graph: &Graph, start: &str, goal: &str) -> Result<Path<String>, SearchError> {
    let start_id = graph
        .id_of(start)
        .ok_or_else(|| SearchError::PointNotFound(start.to_string()))?;
    let goal_id = graph
        .id_of(goal)
        .ok_or_else(|| SearchError::PointNotFound(goal.to_string()))?;

    match search(graph, start_id, goal_id, |_| {}) {
        Some(path) => {
            let path = path.map(|id| graph.node(id).name().to_string());
            debug!("found {}", path);
            Ok(path)
        }
        None => {
            debug!("no Path from {:?} to {:?}", start, goal);
            Err(SearchError::NoPath {
                start: start.to_string(),
                goal: goal.to_string(),
            })
        }
    }
}

/// Runs A* between two existing Nodes, calling `on_expand` for every Node that is closed.
fn search(
    graph: &Graph,
    start: NodeID,
    goal: NodeID,
    mut on_expand: impl FnMut(NodeID),
) -> Option<Path<NodeID>> {
    if start == goal {
        return Some(Path::new(vec![start], 0.0));
    }
    let goal_pos = graph.node(goal).pos();
    let heuristic = |id: NodeID| point::distance(graph.node(id).pos(), goal_pos);

    let mut g_score: HashMap<NodeID, Cost> = HashMap::new();
    let mut parent: HashMap<NodeID, NodeID> = HashMap::new();
    let mut closed = HashSet::new();
    let mut open = BinaryHeap::new();

    g_score.insert(start, 0.0);
    open.push(HeuristicElement {
        id: start,
        cost: 0.0,
        f: heuristic(start),
        rank: graph.node(start).rank,
    });

    while let Some(HeuristicElement { id: current, cost, .. }) = open.pop() {
        // outdated entries stay in the heap until they surface
        if closed.contains(&current) || cost > g_score[&current] {
            continue;
        }
        if current == goal {
            let steps = reconstruct_path(&parent, goal);
            return Some(Path::new(steps, cost));
        }
        closed.insert(current);
        on_expand(current);

        let node = graph.node(current);
        trace!("expanding {:?} (g = {:.2})", node.name(), cost);

        for edge in node.edges.iter() {
            if closed.contains(&edge.target) {
                continue;
            }
            let tentative = cost + edge.cost;
            let improves = g_score
                .get(&edge.target)
                .map_or(true, |&recorded| tentative < recorded);

            if improves {
                g_score.insert(edge.target, tentative);
                parent.insert(edge.target, current);
                open.push(HeuristicElement {
                    id: edge.target,
                    cost: tentative,
                    f: tentative + heuristic(edge.target),
                    rank: graph.node(edge.target).rank,
                });
            }
        }
    }

    None
}

/// Follows the parent links back from `goal` until a Node without a parent (the start).
fn reconstruct_path(parent: &HashMap<NodeID, NodeID>, goal: NodeID) -> Vec<NodeID> {
    let mut steps = vec![goal];
    let mut current = goal;
    while let Some(&prev) = parent.get(&current) {
        steps.push(prev);
        current = prev;
    }
    steps.reverse();
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dataset, GraphConfig, Point};

    fn sample_graph() -> Graph {
        Graph::new(dataset::sample_points(), GraphConfig::default())
    }

    #[test]
    fn sample_route() {
        let graph = sample_graph();
        let path = a_star_search(&graph, "A", "F").unwrap();

        assert_eq!(path, vec!["A", "B", "D", "F"]);
        let expected = 2f64.sqrt() + 52f64.sqrt() + 26f64.sqrt();
        assert!((path.cost() - expected).abs() < 1e-9);
    }

    #[test]
    fn start_is_goal() {
        let graph = sample_graph();
        let path = a_star_search(&graph, "D", "D").unwrap();

        assert_eq!(path, vec!["D"]);
        assert_eq!(path.cost(), 0.0);
    }

    #[test]
    fn unknown_points() {
        let graph = sample_graph();

        assert_eq!(
            a_star_search(&graph, "Z", "A"),
            Err(SearchError::PointNotFound("Z".to_string()))
        );
        assert_eq!(
            a_star_search(&graph, "A", "Y"),
            Err(SearchError::PointNotFound("Y".to_string()))
        );
        assert_eq!(
            a_star_search(&graph, "Z", "Y"),
            Err(SearchError::PointNotFound("Z".to_string()))
        );
    }

    #[test]
    fn unreachable_goal() {
        let graph = Graph::new(
            vec![
                Point::new("A", 0.0, 0.0, ["B"]),
                Point::new("B", 1.0, 0.0, ["A"]),
                Point::new("C", 2.0, 0.0, ["D"]),
                Point::new("D", 3.0, 0.0, ["C"]),
            ],
            GraphConfig::default(),
        );

        assert_eq!(
            a_star_search(&graph, "A", "D"),
            Err(SearchError::NoPath {
                start: "A".to_string(),
                goal: "D".to_string()
            })
        );
    }

    #[test]
    fn declared_edges_are_one_way() {
        let graph = Graph::new(
            vec![
                Point::new("A", 0.0, 0.0, ["B"]),
                Point::new("B", 1.0, 0.0, Vec::<String>::new()),
            ],
            GraphConfig::DECLARED,
        );

        assert!(a_star_search(&graph, "A", "B").is_ok());
        assert!(matches!(
            a_star_search(&graph, "B", "A"),
            Err(SearchError::NoPath { .. })
        ));
    }

    #[test]
    fn detour_beats_direct_edge() {
        // a detour can never be shorter than the straight line
        let graph = Graph::new(
            vec![
                Point::new("A", 0.0, 0.0, ["B", "C"]),
                Point::new("B", 5.0, 5.0, ["A", "C"]),
                Point::new("C", 10.0, 0.0, ["A", "B"]),
            ],
            GraphConfig::default(),
        );
        let path = a_star_search(&graph, "A", "C").unwrap();

        assert_eq!(path, vec!["A", "C"]);
        assert_eq!(path.cost(), 10.0);
    }

    #[test]
    fn closed_nodes_are_never_expanded_twice() {
        let graph = sample_graph();
        for start in graph.points() {
            for goal in graph.points() {
                let start_id = graph.id_of(&start.name).unwrap();
                let goal_id = graph.id_of(&goal.name).unwrap();

                let mut expanded = vec![];
                search(&graph, start_id, goal_id, |id| expanded.push(id));

                let unique: HashSet<NodeID> = expanded.iter().copied().collect();
                assert_eq!(unique.len(), expanded.len());
                assert!(!expanded.contains(&goal_id));
            }
        }
    }

    #[test]
    fn heuristic_is_admissible() {
        let graph = sample_graph();
        for start in graph.points() {
            for goal in graph.points() {
                let path = a_star_search(&graph, &start.name, &goal.name).unwrap();
                let estimate = graph.heuristic(&start.name, &goal.name);

                assert!(estimate <= path.cost() + 1e-9);
            }
        }
    }

    #[test]
    fn path_is_walkable_and_cost_matches() {
        let graph = sample_graph();
        for start in graph.points() {
            for goal in graph.points() {
                let path = a_star_search(&graph, &start.name, &goal.name).unwrap();

                assert_eq!(path.first(), Some(&start.name));
                assert_eq!(path.last(), Some(&goal.name));
                let walked = graph.path_cost(&path).unwrap();
                assert!((walked - path.cost()).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn reconstruct_without_parents() {
        let parent = HashMap::new();
        assert_eq!(reconstruct_path(&parent, 3), vec![3]);
    }

    #[test]
    fn reconstruct_follows_links() {
        let mut parent = HashMap::new();
        parent.insert(4, 2);
        parent.insert(2, 7);
        parent.insert(9, 4);

        assert_eq!(reconstruct_path(&parent, 4), vec![7, 2, 4]);
    }

    #[test]
    fn open_set_order() {
        let mut open = BinaryHeap::new();
        open.push(HeuristicElement { id: 0, cost: 0.0, f: 3.0, rank: 0 });
        open.push(HeuristicElement { id: 1, cost: 0.0, f: 1.0, rank: 2 });
        open.push(HeuristicElement { id: 2, cost: 0.0, f: 1.0, rank: 1 });

        let order: Vec<NodeID> = std::iter::from_fn(|| open.pop().map(|e| e.id)).collect();
        assert_eq!(order, vec![2, 1, 0]);
    }
}
