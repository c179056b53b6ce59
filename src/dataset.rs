//! Sources of [`Point`] lists to build a [`Graph`](crate::Graph) from.
//!
//! With the `serde` feature, Points can be loaded from JSON in the form
//! ```json
//! [
//!     { "name": "A", "x": 0.0, "y": 0.0, "neighbors": ["B", "C"] },
//!     { "name": "B", "x": 1.0, "y": 1.0, "neighbors": ["A"] }
//! ]
//! ```
//! where `neighbors` may be left out for Points without any.

use crate::Point;

/// The eight Points used throughout the documentation and tests.
///
/// Every connection is declared on both ends, so the resulting Graph is the same for every
/// [`EdgePolicy`](crate::EdgePolicy).
///
/// The cheapest Path from `A` to `F` is `A -> B -> D -> F`, narrowly beating `A -> C -> D -> F`.
pub fn sample_points() -> Vec<Point> {
    vec![
        Point::new("A", 0.0, 0.0, ["B", "C"]),
        Point::new("B", 1.0, 1.0, ["A", "D", "E"]),
        Point::new("C", 2.0, 2.0, ["A", "D", "E", "H"]),
        Point::new("D", 5.0, 7.0, ["C", "B", "F"]),
        Point::new("E", 3.0, 3.0, ["C", "B", "G"]),
        Point::new("F", 10.0, 8.0, ["D", "G"]),
        Point::new("G", 13.0, 3.0, ["F", "H", "E"]),
        Point::new("H", 13.0, 13.0, ["G", "C"]),
    ]
}

#[cfg(feature = "serde")]
pub use self::json::*;

#[cfg(feature = "serde")]
mod json {
    use crate::Point;
    use std::fmt;
    use std::io::Read;

    /// The ways loading a Point list can fail
    #[derive(Debug)]
    pub enum LoadError {
        /// the source could not be read
        Io(std::io::Error),
        /// the source is not a valid JSON list of Points
        Json(serde_json::Error),
    }

    impl fmt::Display for LoadError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                LoadError::Io(err) => write!(f, "failed to read Points: {}", err),
                LoadError::Json(err) => write!(f, "invalid Point data: {}", err),
            }
        }
    }

    impl std::error::Error for LoadError {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            match self {
                LoadError::Io(err) => Some(err),
                LoadError::Json(err) => Some(err),
            }
        }
    }

    impl From<std::io::Error> for LoadError {
        fn from(err: std::io::Error) -> Self {
            LoadError::Io(err)
        }
    }

    impl From<serde_json::Error> for LoadError {
        fn from(err: serde_json::Error) -> Self {
            LoadError::Json(err)
        }
    }

    /// Parses a JSON list of Points
    ///
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use waypoint_astar::dataset::from_json_str;
    /// let points = from_json_str(r#"[
    ///     { "name": "A", "x": 0, "y": 0, "neighbors": ["B"] },
    ///     { "name": "B", "x": 1.5, "y": 2 }
    /// ]"#).unwrap();
    ///
    /// assert_eq!(points.len(), 2);
    /// assert!(points[1].neighbors.is_empty());
    /// ```
    pub fn from_json_str(json: &str) -> Result<Vec<Point>, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON list of Points
    pub fn from_reader(reader: impl Read) -> Result<Vec<Point>, LoadError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads a JSON list of Points from a file
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Vec<Point>, LoadError> {
        let file = std::fs::File::open(path)?;
        from_reader(std::io::BufReader::new(file))
    }

}
