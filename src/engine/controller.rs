//! Engine facade implementation.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use super::background::ThinkJob;
use super::config::EngineConfig;
use super::snapshot::{EncodedBoard, Snapshot};
use crate::board::{
    select_move, Color, GameState, GameStatus, Move, MoveList, Piece, SearchError, Square,
    NO_MOVE_WIRE,
};
use crate::sync::SearchGeneration;

/// Errors reported by [`ChessEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The game has ended; there is nothing to search.
    GameOver(GameStatus),
    /// The game was reset or cleaned up while the search ran.
    SearchCancelled,
    /// The background search thread could not be started.
    ThreadSpawn(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::GameOver(status) => write!(f, "Game is over ({status})"),
            EngineError::SearchCancelled => write!(f, "Search was cancelled"),
            EngineError::ThreadSpawn(reason) => {
                write!(f, "Failed to start background search: {reason}")
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// State touched only by writers, guarded by one lock.
struct WriterState {
    history: VecDeque<Arc<Snapshot>>,
    thinker: Option<ThinkJob>,
}

impl WriterState {
    fn stop_thinking(&mut self) {
        if let Some(job) = self.thinker.take() {
            job.stop_and_wait();
        }
    }
}

/// Thread-safe chess engine.
///
/// The engine owns the authoritative game. Every accepted mutation builds a
/// new [`Snapshot`] and swaps it in; readers only ever clone the current
/// `Arc<Snapshot>`, so a render thread polling the board never waits on a
/// search. Mutations are serialized among themselves.
///
/// All methods take `&self`; share the engine between threads with an `Arc`.
///
/// # Example
/// ```
/// use chess_core::engine::{ChessEngine, EngineConfig};
/// use chess_core::board::GameStatus;
///
/// let engine = ChessEngine::new(EngineConfig::default().with_search_depth(2));
/// assert!(engine.make_move(6, 4, 4, 4)); // e2e4
/// let reply = engine.ai_move().unwrap();
/// let [fr, fc, tr, tc] = reply.to_wire();
/// assert!(engine.make_move(fr, fc, tr, tc));
/// assert_eq!(engine.game_status(), GameStatus::Playing);
/// ```
pub struct ChessEngine {
    config: EngineConfig,
    published: RwLock<Arc<Snapshot>>,
    writer: Mutex<WriterState>,
    generation: SearchGeneration,
}

impl ChessEngine {
    /// Create an engine set up at the standard starting position.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        log::info!(
            "engine created (depth {}, quiescence {}, history {})",
            config.search_depth,
            config.quiescence_depth,
            config.max_history
        );
        ChessEngine {
            config,
            published: RwLock::new(Arc::new(Snapshot::new(GameState::new(), None, 0))),
            writer: Mutex::new(WriterState {
                history: VecDeque::new(),
                thinker: None,
            }),
            generation: SearchGeneration::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Set up the standard starting position. Safe to call repeatedly.
    pub fn initialize(&self) {
        log::info!("engine initialized");
        self.restart();
    }

    /// Start a new game: cancel searches, clear undo history, reset the board.
    pub fn reset_game(&self) {
        log::info!("game reset");
        self.restart();
    }

    /// Stop searches and drop undo history. The current position stays
    /// readable. Idempotent; also runs on drop.
    pub fn cleanup(&self) {
        let mut writer = self.writer.lock();
        writer.stop_thinking();
        writer.history.clear();
        self.generation.advance();
        log::info!("engine cleaned up");
    }

    fn restart(&self) {
        let mut writer = self.writer.lock();
        writer.stop_thinking();
        writer.history.clear();
        // Publish before advancing; see `ai_move`.
        self.publish(GameState::new(), None);
        self.generation.advance();
    }

    /// Swap in a new snapshot. Callers hold the writer lock.
    fn publish(&self, state: GameState, last_move: Option<Move>) {
        let version = self.published.read().version() + 1;
        let snapshot = Arc::new(Snapshot::new(state, last_move, version));
        *self.published.write() = snapshot;
    }

    // Reads

    /// The current published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.published.read())
    }

    /// The current board in the host wire layout.
    #[must_use]
    pub fn board_snapshot(&self) -> EncodedBoard {
        self.snapshot().encode()
    }

    #[must_use]
    pub fn game_status(&self) -> GameStatus {
        self.snapshot().status()
    }

    #[must_use]
    pub fn current_turn(&self) -> Color {
        self.snapshot().side_to_move()
    }

    /// Plies played in this game.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.snapshot().state().move_count()
    }

    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.snapshot().state().is_in_check(color)
    }

    /// Whether `by` attacks `(row, col)`. Off-board coordinates are never
    /// attacked.
    #[must_use]
    pub fn is_square_under_attack(&self, row: i32, col: i32, by: Color) -> bool {
        Square::from_coords(row, col)
            .map_or(false, |sq| self.snapshot().state().is_square_attacked(sq, by))
    }

    /// Legal moves for the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        self.snapshot().state().legal_moves()
    }

    /// Legal moves of the piece on `(row, col)`, for move hints.
    #[must_use]
    pub fn legal_moves_from(&self, row: i32, col: i32) -> MoveList {
        match Square::from_coords(row, col) {
            Some(sq) => self.snapshot().state().legal_moves_from(sq),
            None => MoveList::default(),
        }
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.snapshot().last_move()
    }

    /// Last move as four integers, [`NO_MOVE_WIRE`] before the first move.
    #[must_use]
    pub fn last_move_wire(&self) -> [i32; 4] {
        self.last_move().map_or(NO_MOVE_WIRE, Move::to_wire)
    }

    /// Static evaluation of the current position, White-positive.
    #[must_use]
    pub fn evaluation(&self) -> i32 {
        self.snapshot().state().evaluate()
    }

    // Moves

    fn resolve(
        state: &GameState,
        from: (i32, i32),
        to: (i32, i32),
        promotion: Option<Piece>,
    ) -> Option<Move> {
        let from = Square::from_coords(from.0, from.1)?;
        let to = Square::from_coords(to.0, to.1)?;
        state.find_legal_move(from, to, promotion)
    }

    /// Whether moving `from -> to` is legal for the side to move.
    #[must_use]
    pub fn is_valid_move(&self, from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> bool {
        let snapshot = self.snapshot();
        Self::resolve(snapshot.state(), (from_row, from_col), (to_row, to_col), None).is_some()
    }

    /// Play `from -> to`; pawns reaching the last rank become queens.
    ///
    /// Returns `false` without changing anything if the move is illegal.
    pub fn make_move(&self, from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> bool {
        self.make_move_with_promotion(from_row, from_col, to_row, to_col, None)
    }

    /// Play `from -> to` with an explicit promotion piece (`None` = queen).
    pub fn make_move_with_promotion(
        &self,
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
        promotion: Option<Piece>,
    ) -> bool {
        let mut writer = self.writer.lock();
        let current = self.snapshot();

        let Some(mv) = Self::resolve(
            current.state(),
            (from_row, from_col),
            (to_row, to_col),
            promotion,
        ) else {
            log::trace!(
                "rejected move ({from_row},{from_col}) -> ({to_row},{to_col}) promotion {promotion:?}"
            );
            return false;
        };

        writer.stop_thinking();
        if self.config.max_history > 0 {
            if writer.history.len() >= self.config.max_history {
                writer.history.pop_front();
            }
            writer.history.push_back(Arc::clone(&current));
        }

        let next = current.state().apply_move(&mv);
        self.publish(next, Some(mv));
        log::debug!("played {mv}");
        true
    }

    /// Play a move obtained from [`ChessEngine::ai_move`] or
    /// [`ChessEngine::legal_moves`].
    pub fn play_move(&self, mv: &Move) -> bool {
        let [from_row, from_col, to_row, to_col] = mv.to_wire();
        self.make_move_with_promotion(from_row, from_col, to_row, to_col, mv.promotion())
    }

    /// Restore the position before the last accepted move.
    pub fn undo_last_move(&self) -> bool {
        let mut writer = self.writer.lock();
        let Some(previous) = writer.history.pop_back() else {
            return false;
        };
        writer.stop_thinking();
        self.publish(*previous.state(), previous.last_move());
        log::debug!("undid move, {} left in history", writer.history.len());
        true
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.writer.lock().history.is_empty()
    }

    // AI

    /// Search the current position and return the chosen move.
    ///
    /// The move is not played; pass it to [`ChessEngine::play_move`] to
    /// apply it.
    ///
    /// # Errors
    /// [`EngineError::GameOver`] if the game has ended, and
    /// [`EngineError::SearchCancelled`] if the game was reset or cleaned up
    /// during the search.
    pub fn ai_move(&self) -> Result<Move, EngineError> {
        // Flag first. `restart` publishes before advancing the generation.
        let stop = self.generation.flag();
        let snapshot = self.snapshot();
        if snapshot.status().is_game_over() {
            return Err(EngineError::GameOver(snapshot.status()));
        }

        let result = select_move(snapshot.state(), &self.config.search_limits(), &stop)
            .map_err(|SearchError::NoLegalMoves| EngineError::GameOver(snapshot.status()))?;
        if stop.is_stopped() {
            log::debug!("discarding search result for a reset game");
            return Err(EngineError::SearchCancelled);
        }

        log::info!(
            "ai move {} (depth {}, score {}, {} nodes in {:?})",
            result.best_move,
            result.depth,
            result.score,
            result.nodes,
            result.elapsed
        );
        Ok(result.best_move)
    }

    /// Start searching the current position on a background thread.
    ///
    /// Does nothing if a search of this exact position is already running.
    ///
    /// # Errors
    /// [`EngineError::GameOver`] if the game has ended, or
    /// [`EngineError::ThreadSpawn`] if the thread could not be created.
    pub fn start_thinking(&self) -> Result<(), EngineError> {
        let mut writer = self.writer.lock();
        let snapshot = self.snapshot();
        if snapshot.status().is_game_over() {
            return Err(EngineError::GameOver(snapshot.status()));
        }
        if let Some(job) = &writer.thinker {
            if job.position() == snapshot.state() && !job.is_finished() {
                return Ok(());
            }
        }
        writer.stop_thinking();

        let job = ThinkJob::spawn(*snapshot.state(), self.config.search_limits())
            .map_err(|e| EngineError::ThreadSpawn(e.to_string()))?;
        writer.thinker = Some(job);
        log::debug!("background thinking started");
        Ok(())
    }

    /// Whether a background search is still running.
    #[must_use]
    pub fn is_thinking(&self) -> bool {
        self.writer
            .lock()
            .thinker
            .as_ref()
            .map_or(false, |job| !job.is_finished())
    }

    /// Best move found so far by background thinking, without stopping it.
    #[must_use]
    pub fn thinking_best_move(&self) -> Option<Move> {
        let writer = self.writer.lock();
        let snapshot = self.snapshot();
        writer
            .thinker
            .as_ref()
            .filter(|job| job.position() == snapshot.state())
            .and_then(ThinkJob::best_so_far)
    }

    /// Stop background thinking and return its best move for the current
    /// position.
    ///
    /// Falls back to the first legal move when no search result applies.
    /// Returns `None` only when the game has ended.
    #[must_use]
    pub fn best_move_now(&self) -> Option<Move> {
        let mut writer = self.writer.lock();
        let snapshot = self.snapshot();

        let searched = writer.thinker.take().and_then(|job| {
            let (position, best) = job.stop_and_wait();
            if &position == snapshot.state() {
                best
            } else {
                log::debug!("discarding stale background result");
                None
            }
        });

        searched.or_else(|| snapshot.state().legal_moves().first())
    }
}

impl Default for ChessEngine {
    fn default() -> Self {
        ChessEngine::new(EngineConfig::default())
    }
}

impl Drop for ChessEngine {
    fn drop(&mut self) {
        self.cleanup();
    }
}
