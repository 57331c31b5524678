//! Loop search worker.
//!
//! Each worker receives candidate cells via a crossbeam channel, runs a
//! fresh patrol with that cell layered over the shared base obstructions,
//! and sends the verdict back on the reply channel. Workers share nothing
//! mutable: the grid is borrowed read-only and every run owns its state.

use crossbeam_channel::{Receiver, Sender};
use patrol_core::Position;
use patrol_grid::{Grid, Overlay};

use crate::config::LoopDetection;
use crate::patrol::{Patrol, Transition};

/// Verdict for one candidate placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Trial {
    pub(crate) candidate: Position,
    pub(crate) looped: bool,
    pub(crate) steps: u64,
}

/// Run a single candidate to completion.
pub(crate) fn run_trial(grid: &Grid, candidate: Position, detection: LoopDetection) -> Trial {
    let overlay = Overlay::new(grid.obstructions(), candidate);
    let mut patrol = Patrol::new(grid, &overlay, detection);
    let end = patrol.run_to_end();
    Trial {
        candidate,
        looped: end == Transition::Looped,
        steps: patrol.steps(),
    }
}

/// Main loop for a worker thread.
///
/// Runs until the task channel is drained and closed (sender dropped),
/// or until the reply channel has no receiver left.
pub(crate) fn worker_loop(
    task_rx: Receiver<Position>,
    reply_tx: Sender<Trial>,
    grid: &Grid,
    detection: LoopDetection,
) {
    while let Ok(candidate) = task_rx.recv() {
        let trial = run_trial(grid, candidate, detection);
        if reply_tx.send(trial).is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patrol_test_utils::canonical_grid;
    use std::thread;

    #[test]
    fn trial_reports_loop_for_known_placement() {
        let grid = canonical_grid();
        let trial = run_trial(&grid, Position::new(6, 3), LoopDetection::RepeatedState);
        assert!(trial.looped);
        assert!(trial.steps > 0);
    }

    #[test]
    fn trial_reports_exit_for_harmless_placement() {
        let grid = canonical_grid();
        let trial = run_trial(&grid, Position::new(1, 5), LoopDetection::RepeatedState);
        assert!(!trial.looped);
    }

    #[test]
    fn worker_drains_queue_then_exits() {
        let grid = canonical_grid();
        let (task_tx, task_rx) = crossbeam_channel::unbounded();
        let (reply_tx, reply_rx) = crossbeam_channel::unbounded();
        for pos in [Position::new(6, 3), Position::new(1, 5), Position::new(7, 6)] {
            task_tx.send(pos).unwrap();
        }
        drop(task_tx);

        thread::scope(|s| {
            s.spawn(|| worker_loop(task_rx, reply_tx, &grid, LoopDetection::RepeatedState));
        });

        let trials: Vec<Trial> = reply_rx.try_iter().collect();
        assert_eq!(trials.len(), 3);
        assert_eq!(trials.iter().filter(|t| t.looped).count(), 2);
    }

    #[test]
    fn worker_stops_when_reply_receiver_dropped() {
        let grid = canonical_grid();
        let (task_tx, task_rx) = crossbeam_channel::unbounded();
        let (reply_tx, reply_rx) = crossbeam_channel::unbounded::<Trial>();
        drop(reply_rx);
        task_tx.send(Position::new(1, 5)).unwrap();
        task_tx.send(Position::new(6, 3)).unwrap();
        let pending = task_rx.clone();

        thread::scope(|s| {
            s.spawn(|| worker_loop(task_rx, reply_tx, &grid, LoopDetection::RepeatedState));
        });
        // The first reply fails, so the second candidate stays queued.
        assert_eq!(pending.len(), 1);
        assert_eq!(pending.try_recv(), Ok(Position::new(6, 3)));
    }
}
