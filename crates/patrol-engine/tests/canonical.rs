//! Integration test: the 10x10 reference map end to end.

use patrol_engine::{baseline, LoopDetection, LoopSearch, Outcome, PatrolConfig};
use patrol_grid::Grid;
use patrol_test_utils::{canonical_grid, cyclic_grid, CANONICAL_PLACEMENTS};

#[test]
fn baseline_visits_41_distinct_cells() {
    let grid = canonical_grid();
    match baseline(&grid, &PatrolConfig::default()) {
        Outcome::Exited(visited) => {
            assert_eq!(visited.len(), 41);
            assert_eq!(visited.iter().next(), Some(grid.start()));
        }
        Outcome::Looped => panic!("canonical baseline must exit"),
    }
}

#[test]
fn rendered_path_matches_reference_map() {
    let grid = canonical_grid();
    let outcome = baseline(&grid, &PatrolConfig::default());
    let visited = outcome.visited().expect("canonical baseline exits");
    let expected = "\
....#.....
....XXXXX#
....X...X.
..#.X...X.
..XXXXX#X.
..X.X.X.X.
.#XXXXXXX.
.XXXXXXX#.
#XXXXXXX..
......#X..";
    assert_eq!(grid.render(|pos| visited.contains(pos)), expected);
}

#[test]
fn loop_search_finds_the_six_reference_placements() {
    let grid = canonical_grid();
    for detection in [
        LoopDetection::RepeatedState,
        LoopDetection::StepBudget(LoopDetection::REFERENCE_STEP_BUDGET),
    ] {
        let report = LoopSearch::new(PatrolConfig {
            loop_detection: detection,
            workers: None,
        })
        .unwrap()
        .run(&grid)
        .unwrap();
        assert_eq!(report.placements, CANONICAL_PLACEMENTS.to_vec(), "{detection:?}");
        assert!(!report.placements.contains(&grid.start()));
    }
}

#[test]
fn repeated_runs_are_identical() {
    let grid = canonical_grid();
    let search = LoopSearch::new(PatrolConfig::default()).unwrap();
    let first = search.run(&grid).unwrap();
    for _ in 0..5 {
        let again = search.run(&grid).unwrap();
        assert_eq!(again.placements, first.placements);
        assert_eq!(again.baseline_visited, first.baseline_visited);
    }
}

#[test]
fn cyclic_grid_never_yields_a_visited_set() {
    let grid = cyclic_grid();
    assert_eq!(baseline(&grid, &PatrolConfig::default()), Outcome::Looped);
    let report = LoopSearch::new(PatrolConfig::default()).unwrap().run(&grid).unwrap();
    assert_eq!(report.baseline_visited, None);
    assert_eq!(report.looping_count(), 0);
}

#[test]
fn derived_grid_with_reference_placement_loops() {
    let grid = canonical_grid();
    for pos in CANONICAL_PLACEMENTS {
        let derived: Grid = grid.with_obstruction(pos).unwrap();
        assert!(baseline(&derived, &PatrolConfig::default()).is_looped(), "{pos}");
    }
}
