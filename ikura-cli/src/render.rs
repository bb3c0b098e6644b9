//! Text rendering for generated structures.
//!
//! The core deliberately stops at read-only accessors; this module turns each
//! structure into the line-oriented text the CLI prints.

use std::io::{self, Write};

use ikura_core::{BinaryTree, Graph, Matrix, Permutation, PointSet, Scalar, Side, Tree, UniqueCollection};

/// Writes scalar values as one space-separated line.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_values<T: Scalar>(values: impl IntoIterator<Item = T>, mut writer: impl Write) -> io::Result<()> {
    let rendered: Vec<String> = values.into_iter().map(|value| value.to_string()).collect();
    writeln!(writer, "{}", rendered.join(" "))
}

/// Writes a permutation as one space-separated line.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_permutation(perm: &Permutation, writer: impl Write) -> io::Result<()> {
    render_values(perm.iter(), writer)
}

/// Writes a unique collection as one space-separated line.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_unique<T: Scalar>(sample: &UniqueCollection<T>, writer: impl Write) -> io::Result<()> {
    render_values(sample.iter(), writer)
}

fn weight_suffix<W: Scalar>(weight: Option<W>) -> String {
    weight.map_or_else(String::new, |value| format!(" (weight {value})"))
}

/// Writes a tree as a header line followed by one `parent - child` line per
/// edge.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_tree<W: Scalar>(tree: &Tree<W>, mut writer: impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "tree with {} nodes, root {}",
        tree.node_count(),
        tree.root()
    )?;
    for edge in tree.edges() {
        writeln!(
            writer,
            "  {} - {}{}",
            edge.parent(),
            edge.child(),
            weight_suffix(edge.weight())
        )?;
    }
    Ok(())
}

/// Writes a binary tree with `L`/`R` side tags on every edge.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_binary_tree<W: Scalar>(tree: &BinaryTree<W>, mut writer: impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "binary tree with {} nodes, root {}",
        tree.node_count(),
        tree.root()
    )?;
    for edge in tree.edges() {
        let tag = match edge.side() {
            Side::Left => 'L',
            Side::Right => 'R',
        };
        writeln!(
            writer,
            "  {} -{tag}-> {}{}",
            edge.parent(),
            edge.child(),
            weight_suffix(edge.weight())
        )?;
    }
    Ok(())
}

/// Writes a graph as a header line followed by one `a - b` line per edge.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_graph<W: Scalar>(graph: &Graph<W>, mut writer: impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "graph with {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    )?;
    for edge in graph.edges() {
        writeln!(
            writer,
            "  {} - {}{}",
            edge.a(),
            edge.b(),
            weight_suffix(edge.weight())
        )?;
    }
    Ok(())
}

/// Writes a matrix as one space-separated line per row.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_matrix<T: Scalar>(matrix: &Matrix<T>, mut writer: impl Write) -> io::Result<()> {
    for row in matrix.iter_rows() {
        render_values(row.iter().copied(), &mut writer)?;
    }
    Ok(())
}

/// Writes a point set as one `(x, y)` line per point.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_points(points: &PointSet, mut writer: impl Write) -> io::Result<()> {
    for &(x, y) in points.points() {
        writeln!(writer, "({x}, {y})")?;
    }
    Ok(())
}
