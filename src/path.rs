use crate::Cost;

/// A Path through a [`Graph`](crate::Graph)
///
/// Stores the sequence of Points from start to goal (both inclusive) and the total Cost of
/// walking along them.
/// Note that the individual costs of the steps within the Path cannot be retrieved through this struct.
/// Use [`Graph::edge_cost`](crate::Graph::edge_cost) for that.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<P> {
    path: Vec<P>,
    cost: Cost,
}

impl<P> Path<P> {
    /// creates a new Path with the given sequence of Nodes and total Cost
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use waypoint_astar::Path;
    /// let path = Path::new(vec!['a', 'b', 'c'], 4.2);
    ///
    /// assert_eq!(path, vec!['a', 'b', 'c']);
    /// assert_eq!(path.cost(), 4.2);
    /// ```
    pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
        Path { path, cost }
    }

    /// the total Cost of the Path
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Converts every Node of the Path, keeping the Cost
    pub fn map<Q>(self, f: impl FnMut(P) -> Q) -> Path<Q> {
        Path {
            path: self.path.into_iter().map(f).collect(),
            cost: self.cost,
        }
    }

    /// Consumes the Path, returning the sequence of Nodes
    pub fn into_vec(self) -> Vec<P> {
        self.path
    }
}

use std::ops::Deref;

impl<P> Deref for Path<P> {
    type Target = [P];
    fn deref(&self) -> &[P] {
        &self.path
    }
}

impl<P> IntoIterator for Path<P> {
    type Item = P;
    type IntoIter = std::vec::IntoIter<P>;
    fn into_iter(self) -> Self::IntoIter {
        self.path.into_iter()
    }
}

impl<'a, P> IntoIterator for &'a Path<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;
    fn into_iter(self) -> Self::IntoIter {
        self.path.iter()
    }
}

impl<P: PartialEq<Q>, Q> PartialEq<Vec<Q>> for Path<P> {
    fn eq(&self, rhs: &Vec<Q>) -> bool {
        self.path == *rhs
    }
}

impl<'a, P: PartialEq<Q>, Q> PartialEq<&'a [Q]> for Path<P> {
    fn eq(&self, rhs: &&'a [Q]) -> bool {
        self.path == *rhs
    }
}

use std::cmp::Ordering;

impl<P: PartialEq> PartialOrd for Path<P> {
    fn partial_cmp(&self, other: &Path<P>) -> Option<Ordering> {
        self.cost.partial_cmp(&other.cost)
    }
}

use std::fmt;
impl<P: fmt::Display> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {:.2}]: ", self.cost)?;
        if self.path.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{}", self.path[0])?;
            for p in self.path.iter().skip(1) {
                write!(fmt, " -> {}", p)?;
            }
            Ok(())
        }
    }
}
