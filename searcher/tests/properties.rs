use proptest::prelude::*;

use searcher::{astar, bfs, dfs, dijkstra, greedy, Action, Algorithm, Cost, StateSpace};

/// A small grid where each cell is either a wall or has a cost to enter.
#[derive(Debug, Clone)]
struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Option<u8>>,
}

impl Grid {
    fn cell(&self, x: i32, y: i32) -> Option<u8> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        self.cells[(y * self.width + x) as usize]
    }

    fn goal(&self) -> (i32, i32) {
        (self.width - 1, self.height - 1)
    }
}

impl StateSpace for Grid {
    type State = (i32, i32);

    fn initial_state(&self) -> (i32, i32) {
        (0, 0)
    }

    fn is_goal(&self, state: &(i32, i32)) -> bool {
        *state == self.goal()
    }

    fn heuristic_cost(&self, state: &(i32, i32)) -> Cost {
        let (gx, gy) = self.goal();
        ((gx - state.0).abs() + (gy - state.1).abs()) as Cost
    }

    fn successors(&self, state: &(i32, i32)) -> Vec<Action<(i32, i32)>> {
        let (x, y) = *state;
        [(0, -1), (-1, 0), (1, 0), (0, 1)]
            .iter()
            .filter_map(|(dx, dy)| {
                let next = (x + dx, y + dy);
                self.cell(next.0, next.1)
                    .map(|weight| Action::new(next, weight as Cost))
            })
            .collect()
    }
}

fn grid(weighted: bool) -> impl Strategy<Value = Grid> {
    (2..8i32, 2..8i32).prop_flat_map(move |(width, height)| {
        let n = (width * height) as usize;
        let weights = if weighted { 1..6u8 } else { 1..2u8 };
        prop::collection::vec(prop::option::weighted(0.7, weights), n).prop_map(
            move |mut cells| {
                cells[0] = Some(1);
                cells[n - 1] = Some(1);
                Grid {
                    width,
                    height,
                    cells,
                }
            },
        )
    })
}

fn path_cost(grid: &Grid, path: &[(i32, i32)]) -> Cost {
    path.iter()
        .skip(1)
        .map(|(x, y)| grid.cell(*x, *y).unwrap() as Cost)
        .sum()
}

proptest! {
    #[test]
    fn astar_matches_uniform_cost(grid in grid(true)) {
        let ucs = dijkstra::run(&grid).unwrap();
        let best = astar(&grid).unwrap();

        prop_assert_eq!(ucs.is_success(), best.is_success());
        if let (Some(u), Some(a)) = (ucs.solution(), best.solution()) {
            prop_assert_eq!(u.cost(), a.cost());
            prop_assert_eq!(path_cost(&grid, a.path()), a.cost());
        }
    }

    #[test]
    fn uniform_cost_is_no_worse_than_anything_else(grid in grid(true)) {
        let ucs = dijkstra::run(&grid).unwrap();
        for outcome in vec![bfs(&grid).unwrap(), dfs(&grid).unwrap(), greedy(&grid).unwrap()] {
            prop_assert_eq!(ucs.is_success(), outcome.is_success());
            if let (Some(u), Some(o)) = (ucs.solution(), outcome.solution()) {
                prop_assert!(u.cost() <= o.cost());
            }
        }
    }

    #[test]
    fn unit_costs_make_bfs_optimal(grid in grid(false)) {
        let ucs = dijkstra::run(&grid).unwrap();
        let shallow = bfs(&grid).unwrap();
        if let (Some(u), Some(b)) = (ucs.solution(), shallow.solution()) {
            prop_assert_eq!(u.depth(), b.depth());
            prop_assert_eq!(b.cost(), (b.depth() - 1) as Cost);
        }
    }

    #[test]
    fn paths_are_connected_and_unique(grid in grid(true)) {
        for algorithm in Algorithm::all() {
            let report = algorithm.engine().search_counted(&grid).unwrap();
            if let Some(node) = report.outcome.solution() {
                prop_assert_eq!(*node.origin(), (0, 0));
                prop_assert!(grid.is_goal(node.state()));
                for pair in node.path().windows(2) {
                    let (a, b) = (pair[0], pair[1]);
                    prop_assert_eq!((a.0 - b.0).abs() + (a.1 - b.1).abs(), 1);
                }

                let mut states = node.path().to_vec();
                states.sort();
                states.dedup();
                prop_assert_eq!(states.len(), node.depth());
            }
            prop_assert!(report.expanded <= (grid.width * grid.height) as usize);
        }
    }

    #[test]
    fn searches_are_repeatable(grid in grid(true)) {
        for algorithm in Algorithm::all() {
            let first = algorithm.engine().search_counted(&grid).unwrap();
            let second = algorithm.engine().search_counted(&grid).unwrap();
            prop_assert_eq!(first.expanded, second.expanded);
            prop_assert_eq!(first.generated, second.generated);
            prop_assert_eq!(
                first.outcome.solution().map(|n| n.path().to_vec()),
                second.outcome.solution().map(|n| n.path().to_vec())
            );
        }
    }
}
