/// Decides which of the declared Neighbors of a [`Point`](crate::Point) become Edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgePolicy {
    /// Every declaration is a directed Edge from the declaring Point to its Neighbor.
    ///
    /// A Point that lists a Neighbor can walk there, even if the Neighbor does not list it back.
    Declared,
    /// Only Neighbors that declare each other are connected, in both directions.
    ///
    /// One-sided declarations are ignored. The resulting Graph is always undirected.
    Mutual,
}

/// Options for configuring the [`Graph`](crate::Graph)
///
/// Default options:
/// ```
/// # use waypoint_astar::{EdgePolicy, GraphConfig};
/// assert_eq!(
///     GraphConfig {
///         edge_policy: EdgePolicy::Declared,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphConfig {
    /// How the declared Neighbor lists are turned into Edges (defaults to [`EdgePolicy::Declared`])
    ///
    /// Datasets where every connection is listed on both ends produce the same Graph with
    /// either policy.
    pub edge_policy: EdgePolicy,
}

impl GraphConfig {
    /// a GraphConfig that treats every declared Neighbor as a directed Edge
    ///
    /// Values:
    /// ```
    /// # use waypoint_astar::{EdgePolicy, GraphConfig};
    /// assert_eq!(
    ///     GraphConfig {
    ///         edge_policy: EdgePolicy::Declared,
    ///     },
    ///     GraphConfig::DECLARED
    /// );
    /// ```
    pub const DECLARED: GraphConfig = GraphConfig {
        edge_policy: EdgePolicy::Declared,
    };
    /// a GraphConfig that only connects Points declaring each other
    ///
    /// Values:
    /// ```
    /// # use waypoint_astar::{EdgePolicy, GraphConfig};
    /// assert_eq!(
    ///     GraphConfig {
    ///         edge_policy: EdgePolicy::Mutual,
    ///     },
    ///     GraphConfig::MUTUAL
    /// );
    /// ```
    pub const MUTUAL: GraphConfig = GraphConfig {
        edge_policy: EdgePolicy::Mutual,
    };

    /// Returns a copy of the config with the given [`EdgePolicy`]
    pub fn with_edge_policy(self, edge_policy: EdgePolicy) -> GraphConfig {
        GraphConfig { edge_policy }
    }
}

impl Default for GraphConfig {
    fn default() -> GraphConfig {
        GraphConfig::DECLARED
    }
}
