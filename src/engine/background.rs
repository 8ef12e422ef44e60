//! Background thinking.
//!
//! A [`ThinkJob`] runs iterative deepening on its own thread for a fixed
//! position and records the best move of every completed depth, so the host
//! can ask for "the best move so far" at any time.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;

use crate::board::{select_move, GameState, Move, SearchInfo, SearchLimits};
use crate::sync::StopFlag;

/// Active background search.
pub(crate) struct ThinkJob {
    position: GameState,
    stop: StopFlag,
    best: Arc<Mutex<Option<Move>>>,
    handle: JoinHandle<()>,
}

impl ThinkJob {
    /// Start searching `position` on a new thread.
    pub(crate) fn spawn(position: GameState, limits: SearchLimits) -> io::Result<Self> {
        let stop = StopFlag::new();
        let best = Arc::new(Mutex::new(None));

        let sink = Arc::clone(&best);
        let limits = limits.with_info_callback(Arc::new(move |info: &SearchInfo| {
            *sink.lock() = Some(info.best_move);
        }));
        let thread_stop = stop.clone();

        let handle = thread::Builder::new()
            .name("chess-think".to_string())
            .spawn(move || match select_move(&position, &limits, &thread_stop) {
                Ok(result) => log::debug!(
                    "background search finished at depth {} with {}",
                    result.depth,
                    result.best_move
                ),
                Err(err) => log::debug!("background search ended: {err}"),
            })?;

        Ok(ThinkJob {
            position,
            stop,
            best,
            handle,
        })
    }

    /// Position this job is searching.
    pub(crate) fn position(&self) -> &GameState {
        &self.position
    }

    /// Best move of the deepest completed iteration so far.
    pub(crate) fn best_so_far(&self) -> Option<Move> {
        *self.best.lock()
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stop the search and wait for the thread to finish.
    ///
    /// Returns the searched position and the best move found.
    pub(crate) fn stop_and_wait(self) -> (GameState, Option<Move>) {
        self.stop.stop();
        if self.handle.join().is_err() {
            log::warn!("background search thread panicked");
        }
        let best = *self.best.lock();
        (self.position, best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_reports_legal_move() {
        let position = GameState::new();
        let job = ThinkJob::spawn(position, SearchLimits::depth(3)).unwrap();
        let (searched, best) = job.stop_and_wait();
        assert_eq!(searched, position);
        let best = best.expect("depth 1 always completes");
        assert!(position.is_legal_move(&best));
    }

    #[test]
    fn test_job_finishes_on_its_own() {
        let position = GameState::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
        let job = ThinkJob::spawn(position, SearchLimits::depth(2)).unwrap();
        while !job.is_finished() {
            std::thread::yield_now();
        }
        assert_eq!(job.best_so_far().map(|m| m.to_string()), Some("a1a8".to_string()));
        assert_eq!(job.position(), &position);
    }
}
