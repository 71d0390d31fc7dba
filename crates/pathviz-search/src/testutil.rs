//! Test-only helpers for building grids and checking painted output.

use pathviz_core::{Cell, CellState, Grid, Point};

/// Build a grid from ASCII rows: `.` empty, `#` wall, `w` weighted.
pub(crate) fn grid_from(rows: &[&str]) -> Grid {
    let grid = Grid::new(rows[0].len(), rows.len());
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), grid.cols(), "ragged test grid");
        for (x, ch) in row.chars().enumerate() {
            let index = grid.idx(Point::new(x as i32, y as i32)).unwrap();
            match ch {
                '.' => grid.set(index, Cell::empty()),
                '#' => grid.set(index, Cell::wall()),
                'w' => grid.set(index, Cell::empty().with_weight(true)),
                other => panic!("unknown test grid char {other:?}"),
            }
        }
    }
    grid
}

/// Indices currently painted `Path`.
pub(crate) fn painted_path(grid: &Grid) -> Vec<usize> {
    (0..grid.len())
        .filter(|&i| grid.state(i) == CellState::Path)
        .collect()
}

/// Total cost of a path under the search cost model (cost of entering each
/// cell after the first; weighted cells cost 10).
pub(crate) fn path_cost(grid: &Grid, path: &[usize]) -> i32 {
    path[1..]
        .iter()
        .map(|&i| crate::trace::step_cost(grid.get(i)))
        .sum()
}

/// Independent hop-count reference: plain breadth-first distances over
/// non-wall cells, with `None` for unreached.
pub(crate) fn reference_hops(grid: &Grid, start: usize, end: usize) -> Option<usize> {
    use std::collections::VecDeque;

    let mut dist = vec![None; grid.len()];
    let mut queue = VecDeque::new();
    dist[start] = Some(0usize);
    queue.push_back(start);
    let mut nbuf = Vec::with_capacity(4);

    while let Some(current) = queue.pop_front() {
        nbuf.clear();
        grid.neighbors(current, &mut nbuf);
        for &n in &nbuf {
            if dist[n].is_none() && !grid.get(n).is_wall() {
                dist[n] = dist[current].map(|d| d + 1);
                queue.push_back(n);
            }
        }
    }
    dist[end]
}

/// Verify that `path` is contiguous, starts and ends where claimed, and
/// avoids walls.
pub(crate) fn assert_valid_path(grid: &Grid, path: &[usize], start: usize, end: usize) {
    assert_eq!(*path.first().unwrap(), start);
    assert_eq!(*path.last().unwrap(), end);
    for pair in path.windows(2) {
        let a = grid.point(pair[0]);
        let b = grid.point(pair[1]);
        assert_eq!(
            (a.x - b.x).abs() + (a.y - b.y).abs(),
            1,
            "path not 4-connected at {a} -> {b}"
        );
    }
    for &i in path {
        assert!(!grid.get(i).is_wall(), "path crosses a wall at {i}");
    }
}
