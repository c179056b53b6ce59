//! Renders the Adjacency of a [`Graph`] as a text table.
//!
//! ## Examples
//! ```
//! # use waypoint_astar::{prelude::*, table};
//! let graph = Graph::new(
//!     vec![
//!         Point::new("A", 0.0, 0.0, ["B"]),
//!         Point::new("B", 3.0, 4.0, ["A"]),
//!     ],
//!     GraphConfig::default(),
//! );
//!
//! let text = table::render(&table::adjacency_rows(&graph));
//!
//! assert_eq!(
//!     text,
//!     "\
//! +-------+------+------+-------------+
//! | Point | X    | Y    | Connections |
//! +-------+------+------+-------------+
//! | A     | 0.00 | 0.00 | B (5.00)    |
//! | B     | 3.00 | 4.00 | A (5.00)    |
//! +-------+------+------+-------------+
//! "
//! );
//! ```

use crate::Graph;

/// The header row produced by [`adjacency_rows`]
pub const HEADER: [&str; 4] = ["Point", "X", "Y", "Connections"];

/// Lists every Point of the Graph with its Position and outgoing Edges.
///
/// The first row is the [`HEADER`], followed by one row per Point in the order the Points were
/// given to [`Graph::new`]. Connections are written as `"B (1.41), C (2.83)"`.
pub fn adjacency_rows(graph: &Graph) -> Vec<Vec<String>> {
    let mut rows = Vec::with_capacity(graph.len() + 1);
    rows.push(HEADER.iter().map(|s| s.to_string()).collect());

    for point in graph.points() {
        let connections = graph
            .edges(&point.name)
            .into_iter()
            .flatten()
            .map(|(to, cost)| format!("{} ({:.2})", to, cost))
            .collect::<Vec<_>>()
            .join(", ");

        rows.push(vec![
            point.name.clone(),
            format!("{:.2}", point.x),
            format!("{:.2}", point.y),
            connections,
        ]);
    }
    rows
}

/// Lays out rows of cells in a box, with a separator below the first (header) row.
///
/// Columns are as wide as their widest cell. Rows with fewer cells are padded with empty ones.
/// An empty list of rows renders as an empty String.
pub fn render<S: AsRef<str>>(rows: &[Vec<S>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    if columns == 0 {
        return String::new();
    }

    let mut widths = vec![0; columns];
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            let cell: &str = cell.as_ref();
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = {
        let mut line = String::from("+");
        for &width in widths.iter() {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line.push('\n');
        line
    };

    let mut out = border.clone();
    for (i, row) in rows.iter().enumerate() {
        out.push('|');
        for (col, &width) in widths.iter().enumerate() {
            let cell = row.get(col).map_or("", |cell| cell.as_ref());
            let padding = width - cell.chars().count();
            out.push(' ');
            out.push_str(cell);
            out.push_str(&" ".repeat(padding + 1));
            out.push('|');
        }
        out.push('\n');
        if i == 0 {
            out.push_str(&border);
        }
    }
    if rows.len() > 1 {
        out.push_str(&border);
    }
    out
}
