//! Test-only helpers: connectivity and tree checks over carved cells.

use pathviz_core::Grid;

/// Number of carved (passage) cells.
pub(crate) fn carved_count(grid: &Grid) -> usize {
    (0..grid.len()).filter(|&i| grid.get(i).is_carved()).count()
}

/// Number of adjacent carved pairs (each corridor edge counted once, via
/// right and down neighbors).
pub(crate) fn carved_edges(grid: &Grid) -> usize {
    let cols = grid.cols();
    let mut edges = 0;
    for i in 0..grid.len() {
        if !grid.get(i).is_carved() {
            continue;
        }
        let x = i % cols;
        if x + 1 < cols && grid.get(i + 1).is_carved() {
            edges += 1;
        }
        if i + cols < grid.len() && grid.get(i + cols).is_carved() {
            edges += 1;
        }
    }
    edges
}

/// Whether all carved cells form a single connected component
/// (iterative flood fill).
pub(crate) fn is_connected(grid: &Grid) -> bool {
    let total = carved_count(grid);
    if total == 0 {
        return false;
    }
    let Some(first) = (0..grid.len()).find(|&i| grid.get(i).is_carved()) else {
        return false;
    };

    let mut seen = vec![false; grid.len()];
    let mut stack = vec![first];
    seen[first] = true;
    let mut reached = 0;
    let mut nbuf = Vec::with_capacity(4);

    while let Some(current) = stack.pop() {
        reached += 1;
        nbuf.clear();
        grid.neighbors(current, &mut nbuf);
        for &n in &nbuf {
            if !seen[n] && grid.get(n).is_carved() {
                seen[n] = true;
                stack.push(n);
            }
        }
    }
    reached == total
}

/// Assert the carve is a tree over the carved cells: fully connected and
/// acyclic (edge count is exactly cell count − 1).
pub(crate) fn assert_perfect_maze(grid: &Grid) {
    let cells = carved_count(grid);
    assert!(cells >= 1, "nothing carved");
    assert!(is_connected(grid), "carve is not connected");
    assert_eq!(
        carved_edges(grid),
        cells - 1,
        "carve contains a cycle or a break"
    );
}
