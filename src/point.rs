use crate::Cost;

/// A named Position in 2D Space together with the Names of the Points it connects to.
///
/// The Name is the unique key of the Point within a [`Graph`](crate::Graph). The Neighbors
/// are only a declaration: whether they turn into Edges is up to the
/// [`EdgePolicy`](crate::EdgePolicy) used when building the Graph.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// the unique Name of the Point
    pub name: String,
    /// the horizontal Coordinate
    pub x: f64,
    /// the vertical Coordinate
    pub y: f64,
    /// the Names of the declared Neighbors
    #[cfg_attr(feature = "serde", serde(default))]
    pub neighbors: Vec<String>,
}

impl Point {
    /// Creates a new Point
    ///
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use waypoint_astar::Point;
    /// let point = Point::new("A", 1.0, 2.0, ["B", "C"]);
    ///
    /// assert_eq!(point.name, "A");
    /// assert_eq!(point.neighbors, vec!["B", "C"]);
    /// ```
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        x: f64,
        y: f64,
        neighbors: impl IntoIterator<Item = S>,
    ) -> Point {
        Point {
            name: name.into(),
            x,
            y,
            neighbors: neighbors.into_iter().map(Into::into).collect(),
        }
    }

    /// The straight-line Distance between two Points
    ///
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use waypoint_astar::Point;
    /// let a = Point::new("A", 0.0, 0.0, Vec::<String>::new());
    /// let b = Point::new("B", 3.0, 4.0, Vec::<String>::new());
    ///
    /// assert_eq!(a.distance(&b), 5.0);
    /// ```
    pub fn distance(&self, other: &Point) -> Cost {
        distance((self.x, self.y), (other.x, other.y))
    }

    /// The Position as an `(x, y)` Tuple
    pub fn pos(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

pub(crate) fn distance(a: (f64, f64), b: (f64, f64)) -> Cost {
    let (dx, dy) = (a.0 - b.0, a.1 - b.1);
    (dx * dx + dy * dy).sqrt()
}
