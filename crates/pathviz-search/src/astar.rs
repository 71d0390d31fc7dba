//! A* search.

use pathviz_core::{CellState, Grid, Pacing, manhattan};

use crate::heap::MinHeap;
use crate::node::{NO_PARENT, Node, UNREACHABLE};
use crate::trace;

/// A* search from `start` to `end`.
///
/// As [`dijkstra`](crate::dijkstra), but the heap is keyed by cumulative
/// cost plus the Manhattan distance to the goal. The heuristic is admissible
/// and consistent on a 4-connected grid with minimum step cost 1, so the
/// first relaxation that reaches `end` carries an optimal cost. A queued
/// neighbor whose cumulative cost improves keeps its old heap priority (it
/// is reinserted only if absent); the cost tables stay exact either way.
/// Returns the start→end cell indices, or `None` when the frontier exhausts
/// without reaching `end`.
///
/// Preconditions (not validated): `start` and `end` are in bounds, distinct,
/// and not walls.
pub fn astar(grid: &Grid, start: usize, end: usize, pacing: Pacing) -> Option<Vec<usize>> {
    let goal = grid.point(end);
    let mut heap = MinHeap::with_capacity(grid.len());
    let mut visited: Vec<Node> = (0..grid.len()).map(Node::unvisited).collect();
    let mut g_score = vec![UNREACHABLE; grid.len()];

    g_score[start] = 0;
    visited[start] = Node::new(start, NO_PARENT, 0);
    heap.insert(Node::new(start, NO_PARENT, manhattan(grid.point(start), goal)));
    pacing.pause();
    grid.set_state(start, CellState::Frontier);

    let mut nbuf = Vec::with_capacity(4);
    while let Some(current) = heap.extract_min() {
        nbuf.clear();
        grid.neighbors(current.index, &mut nbuf);

        let mut solved = false;
        for &ni in &nbuf {
            let cell = grid.get(ni);
            if cell.is_wall() {
                continue;
            }
            let tentative = g_score[current.index] + trace::step_cost(cell);
            if tentative < g_score[ni] {
                g_score[ni] = tentative;
                visited[ni] = Node::new(ni, current.index, tentative);

                if !heap.find(ni) {
                    let priority = tentative + manhattan(grid.point(ni), goal);
                    heap.insert(Node::new(ni, current.index, priority));
                    pacing.pause();
                    grid.set_state(ni, CellState::Frontier);
                }
                if ni == end {
                    solved = true;
                    break;
                }
            }
        }

        if solved {
            return Some(trace::paint_path(grid, &visited, end, pacing));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dijkstra::dijkstra;
    use crate::testutil::{assert_valid_path, grid_from, painted_path, path_cost};
    use pathviz_core::Point;

    #[test]
    fn three_by_three_corner_to_corner() {
        let grid = grid_from(&["...", "...", "..."]);
        let path = astar(&grid, 0, 8, Pacing::none()).unwrap();
        assert_eq!(path.len(), 5);
        assert_valid_path(&grid, &path, 0, 8);
    }

    #[test]
    fn cost_matches_dijkstra_on_weighted_grid() {
        // Same grid, same endpoints: equal total path cost. The weighted
        // corridor costs 21; both must take the cost-7 detour.
        let rows = [
            ".ww.",
            ".##.",
            "....",
        ];
        let for_astar = grid_from(&rows);
        let for_dijkstra = grid_from(&rows);
        let start = for_astar.idx(Point::new(0, 0)).unwrap();
        let end = for_astar.idx(Point::new(3, 0)).unwrap();

        let a = astar(&for_astar, start, end, Pacing::none()).unwrap();
        let d = dijkstra(&for_dijkstra, start, end, Pacing::none()).unwrap();
        assert_valid_path(&for_astar, &a, start, end);
        assert_eq!(path_cost(&for_astar, &a), 7);
        assert_eq!(path_cost(&for_astar, &a), path_cost(&for_dijkstra, &d));
    }

    #[test]
    fn cost_matches_dijkstra_on_open_grid() {
        let for_astar = grid_from(&["....", "....", "...."]);
        let for_dijkstra = grid_from(&["....", "....", "...."]);
        let end = for_astar.len() - 1;
        let a = astar(&for_astar, 0, end, Pacing::none()).unwrap();
        let d = dijkstra(&for_dijkstra, 0, end, Pacing::none()).unwrap();
        assert_eq!(path_cost(&for_astar, &a), path_cost(&for_dijkstra, &d));
        assert_eq!(a.len(), 6);
    }

    #[test]
    fn wall_row_with_single_opening() {
        let grid = grid_from(&[
            ".....",
            ".....",
            "##.##",
            ".....",
            ".....",
        ]);
        let start = grid.idx(Point::new(0, 0)).unwrap();
        let end = grid.idx(Point::new(0, 4)).unwrap();
        let gap = grid.idx(Point::new(2, 2)).unwrap();
        let path = astar(&grid, start, end, Pacing::none()).unwrap();
        assert_valid_path(&grid, &path, start, end);
        assert!(path.contains(&gap));
    }

    #[test]
    fn unreachable_goal_paints_no_path() {
        let grid = grid_from(&["..#.", "..#.", "..#."]);
        assert!(astar(&grid, 0, 3, Pacing::none()).is_none());
        assert!(painted_path(&grid).is_empty());
    }
}
