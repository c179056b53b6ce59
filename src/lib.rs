#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find Shortest Paths between named Points using A*.
//!
//! ## Introduction
//! The Graph is made up of [`Point`]s, each with a unique Name, a Position in 2D Space and a
//! list of the Names of its Neighbors. Building a [`Graph`] turns those declarations into Edges
//! whose Cost is the straight-line (Euclidean) Distance between the two Points.
//!
//! Paths are found with the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm),
//! using the Euclidean Distance to the Goal as the Heuristic. Since no Edge can be shorter than
//! the straight line between its ends, that Heuristic never overestimates and the resulting
//! Paths are always the cheapest ones.
//!
//! ## Examples
//! Creating the Graph:
//! ```
//! use waypoint_astar::prelude::*;
//!
//! //  A(0,0) --- B(3,4) --- C(6,0)
//! //    \___________________/
//! let points = vec![
//!     Point::new("A", 0.0, 0.0, ["B", "C"]),
//!     Point::new("B", 3.0, 4.0, ["A", "C"]),
//!     Point::new("C", 6.0, 0.0, ["A", "B"]),
//! ];
//!
//! let graph = Graph::new(points, GraphConfig::default());
//!
//! assert_eq!(graph.len(), 3);
//! assert_eq!(graph.edge_cost("A", "B"), Some(5.0));
//! ```
//!
//! ### Pathfinding
//! ```
//! # use waypoint_astar::prelude::*;
//! # let points = vec![
//! #     Point::new("A", 0.0, 0.0, ["B", "C"]),
//! #     Point::new("B", 3.0, 4.0, ["A", "C"]),
//! #     Point::new("C", 6.0, 0.0, ["A", "B"]),
//! # ];
//! # let graph = Graph::new(points, GraphConfig::default());
//! // find_path returns Ok(Path) on success
//! let path = graph.find_path("A", "C").unwrap();
//!
//! assert_eq!(path, vec!["A", "C"]);
//! assert_eq!(path.cost(), 6.0);
//!
//! // unknown Points are reported instead of panicking
//! assert_eq!(
//!     graph.find_path("A", "Z"),
//!     Err(SearchError::PointNotFound("Z".to_string())),
//! );
//! ```
//!
//! ### Configuration
//! The last parameter for Graph::new is a [`GraphConfig`] that decides how the declared
//! Neighbor lists become Edges. See [`EdgePolicy`] for the available options.
//! ```
//! # use waypoint_astar::prelude::*;
//! let points = vec![
//!     Point::new("A", 0.0, 0.0, ["B"]),
//!     Point::new("B", 1.0, 0.0, Vec::<String>::new()),
//! ];
//!
//! // only A declares B, so the Mutual policy creates no Edge at all
//! let graph = Graph::new(points, GraphConfig::MUTUAL);
//! assert!(graph.find_path("A", "B").is_err());
//! ```

/// The Type used to reference a Point inside of a [`Graph`]
pub type NodeID = usize;

/// The Cost of traversing an Edge or a Path
pub type Cost = f64;

mod point;
pub use self::point::Point;

mod path;
pub use self::path::Path;

mod graph;
pub use self::graph::{EdgePolicy, Edges, Graph, GraphConfig};

mod a_star;
pub use self::a_star::{a_star_search, SearchError};

pub mod dataset;

pub mod table;

/// The most commonly used Types and Functions
pub mod prelude {
    pub use crate::{
        a_star_search, Cost, EdgePolicy, Graph, GraphConfig, NodeID, Path, Point, SearchError,
    };
}
