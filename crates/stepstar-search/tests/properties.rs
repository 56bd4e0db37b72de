//! End-to-end behaviour of the step-wise search on hand-built and seeded
//! random grids.

use stepstar_core::{Grid, Point};
use stepstar_gen::{GenConfig, generate};
use stepstar_search::{
    Observer, Outcome, SearchConfig, SearchEngine, SearchError, SearchState, StepResult, TieBreak,
    Trace, UNREACHABLE, bfs_distances, drive, heuristic, new_search,
};

fn corner_search(grid: Grid, tie_break: TieBreak) -> SearchEngine {
    let goal = grid.bottom_right();
    let config = SearchConfig {
        tie_break,
        ..SearchConfig::default()
    };
    SearchEngine::with_config(grid, Point::ZERO, goal, config).unwrap()
}

fn run(engine: &mut SearchEngine) -> (Trace, Outcome) {
    let mut trace = Trace::default();
    let outcome = drive(engine, &mut trace).unwrap();
    (trace, outcome)
}

fn random_grids() -> impl Iterator<Item = Grid> {
    (0..40u64).map(|seed| {
        let cfg = GenConfig::new(14 + (seed % 5) as i32, 11 + (seed % 3) as i32)
            .with_wall_probability(0.3)
            .with_seed(seed);
        generate(&cfg).unwrap().grid
    })
}

fn assert_valid_path(grid: &Grid, path: &[Point], start: Point, goal: Point) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    for w in path.windows(2) {
        assert!(w[0].is_adjacent_4(w[1]), "{} -> {} is not a move", w[0], w[1]);
    }
    for &p in path {
        assert!(!grid.is_wall(p), "path crosses wall at {p}");
    }
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn open_three_by_three() {
    let mut eng = corner_search(Grid::new(3, 3), TieBreak::LowestIndex);
    let (_, outcome) = run(&mut eng);
    let path = outcome.path().unwrap();
    assert_eq!(path.len(), 5);
    assert_eq!(
        path,
        [
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(1, 1),
            Point::new(2, 1),
            Point::new(2, 2),
        ]
    );
    assert_eq!(outcome.steps(), 9);
}

#[test]
fn open_three_by_three_insertion_order() {
    let mut eng = corner_search(Grid::new(3, 3), TieBreak::InsertionOrder);
    let (_, outcome) = run(&mut eng);
    let path = outcome.path().unwrap();
    assert_eq!(path.len(), 5);
    assert_valid_path(eng.grid(), path, Point::ZERO, Point::new(2, 2));
}

#[test]
fn wall_column_with_one_gap() {
    let grid = Grid::parse(
        "
        .#.
        ...
        .#.
        ",
    )
    .unwrap();
    let mut eng = corner_search(grid, TieBreak::LowestIndex);
    let (_, outcome) = run(&mut eng);
    let path = outcome.path().unwrap();
    assert!(path.contains(&Point::new(1, 1)));
    assert_eq!(path.len(), 5);
    assert_valid_path(eng.grid(), path, Point::ZERO, Point::new(2, 2));
}

#[test]
fn enclosed_goal_fails() {
    let grid = Grid::parse(
        "
        ....
        ..##
        ..#.
        ",
    )
    .unwrap();
    let open_reachable = 8;
    let mut eng = corner_search(grid, TieBreak::LowestIndex);
    let (trace, outcome) = run(&mut eng);
    assert_eq!(eng.state(), SearchState::Failed);
    assert_eq!(
        outcome,
        Outcome::NoPath {
            steps: open_reachable + 1
        }
    );
    assert_eq!(trace.currents.len(), open_reachable);
    assert!(eng.frontier().is_empty());
    assert!(matches!(
        eng.reconstruct_path(),
        Err(SearchError::NotReady {
            state: SearchState::Failed
        })
    ));
}

#[test]
fn start_is_goal() {
    let mut eng = new_search(Grid::new(4, 4), 5, 5).unwrap();
    let first = eng.step();
    assert_eq!(first.state, SearchState::Succeeded);
    assert_eq!(first.current, Some(Point::new(1, 1)));
    assert_eq!(eng.reconstruct_path().unwrap(), vec![Point::new(1, 1)]);
}

// ---------------------------------------------------------------------------
// Properties over random grids
// ---------------------------------------------------------------------------

#[test]
fn repeated_runs_are_identical() {
    for grid in random_grids() {
        for tie_break in [TieBreak::LowestIndex, TieBreak::InsertionOrder] {
            let mut a = corner_search(grid.clone(), tie_break);
            let mut b = corner_search(grid.clone(), tie_break);
            let (ta, oa) = run(&mut a);
            let (tb, ob) = run(&mut b);
            assert_eq!(ta.currents, tb.currents);
            assert_eq!(oa, ob);

            // A reset engine replays the same run.
            a.reset();
            let (tc, oc) = run(&mut a);
            assert_eq!(tc.currents, ta.currents);
            assert_eq!(oc, oa);
        }
    }
}

#[test]
fn g_scores_never_increase() {
    struct Monotone {
        last: Vec<f64>,
    }

    impl Observer for Monotone {
        fn observe(
            &mut self,
            engine: &SearchEngine,
            _: &StepResult,
        ) -> Result<(), Box<dyn std::error::Error>> {
            let g = engine.scoreboard().g_scores();
            for (i, (&now, &before)) in g.iter().zip(&self.last).enumerate() {
                assert!(now <= before, "g[{i}] rose from {before} to {now}");
                assert!(now >= 0.0);
            }
            self.last = g.to_vec();
            Ok(())
        }
    }

    for grid in random_grids() {
        let mut eng = corner_search(grid, TieBreak::LowestIndex);
        let mut obs = Monotone {
            last: eng.scoreboard().g_scores().to_vec(),
        };
        drive(&mut eng, &mut obs).unwrap();
    }
}

#[test]
fn paths_are_valid_and_shortest() {
    let mut found = 0;
    let mut missing = 0;
    for grid in random_grids() {
        let start = Point::ZERO;
        let goal = grid.bottom_right();
        let bfs = bfs_distances(&grid, start);
        let shortest = bfs[grid.index(goal).unwrap()];

        let mut eng = corner_search(grid.clone(), TieBreak::LowestIndex);
        match run(&mut eng).1 {
            Outcome::Found { path, cost, .. } => {
                found += 1;
                assert_valid_path(&grid, &path, start, goal);
                assert_eq!(path.len() as i32 - 1, shortest);
                assert_eq!(cost, f64::from(shortest));
            }
            Outcome::NoPath { .. } => {
                missing += 1;
                assert_eq!(shortest, UNREACHABLE);
            }
            Outcome::Interrupted { .. } => panic!("no step budget was set"),
        }
    }
    assert!(found > missing, "found {found}, missing {missing}");
}

#[test]
fn heuristic_is_admissible() {
    for grid in random_grids() {
        let goal = grid.bottom_right();
        let to_goal = bfs_distances(&grid, goal);
        for (idx, &d) in to_goal.iter().enumerate() {
            if d == UNREACHABLE {
                continue;
            }
            let p = grid.point(idx);
            assert!(heuristic(p, goal) <= f64::from(d), "h({p}) > {d}");
        }
    }
}

#[test]
fn search_ends_within_cell_count_steps() {
    for grid in random_grids() {
        let n = grid.len();
        let mut eng = corner_search(grid, TieBreak::InsertionOrder);
        for _ in 0..n {
            if eng.step().state.is_terminal() {
                break;
            }
        }
        assert!(eng.state().is_terminal(), "still running after {n} steps");
        assert!(eng.steps() <= n);
    }
}

#[test]
fn snapshots_track_the_engine() {
    let grid = generate(&GenConfig::new(20, 20).with_seed(11)).unwrap().grid;
    let mut eng = corner_search(grid, TieBreak::LowestIndex);
    loop {
        let snap = eng.step();
        assert_eq!(snap.step, eng.steps());
        assert_eq!(snap.current, eng.current());
        assert_eq!(snap.frontier.len(), eng.frontier().len());
        assert!(snap.frontier.iter().all(|&p| eng.in_frontier(p)));
        if let Some(cur) = snap.current {
            if snap.state == SearchState::Running {
                assert!(!eng.in_frontier(cur));
            }
        }
        assert_eq!(snap.f_scores, eng.scoreboard().f_scores());
        if snap.state.is_terminal() {
            break;
        }
    }
}
