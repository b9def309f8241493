//! Game state management for the Pente GUI

use crate::rules::{find_winning_line, is_exhausted, winner};
use crate::{Board, Engine, EngineConfig, GameError, MoveResult, Pos, Side};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

/// Computer computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Game result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// None when nobody could place any more
    pub winner: Option<Side>,
    pub winning_line: Option<Vec<Pos>>,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state. The player always moves first.
pub struct GameState {
    pub board: Board,
    pub current_turn: Side,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Side)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub message: Option<String>,

    engine_config: EngineConfig,
}

impl GameState {
    pub fn new(engine_config: EngineConfig) -> Self {
        Self {
            board: Board::new(),
            current_turn: Side::Player,
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            message: None,
            engine_config,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.engine_config);
    }

    #[inline]
    pub fn engine_config(&self) -> EngineConfig {
        self.engine_config
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        self.current_turn == Side::Player
    }

    /// Check if it's the computer's turn
    pub fn is_ai_turn(&self) -> bool {
        self.current_turn == Side::Computer
    }

    /// Check if the computer is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place the human's checker at (x, y)
    pub fn try_place(&mut self, x: i32, y: i32) -> Result<(), GameError> {
        if self.game_over.is_some() {
            return Err(GameError::GameOver);
        }

        if self.is_ai_thinking() {
            return Err(GameError::ComputerThinking);
        }

        if !self.is_human_turn() {
            return Err(GameError::NotYourTurn);
        }

        let pos = Pos::checked(x, y).ok_or(GameError::OutOfBounds { x, y })?;
        if self.board.is_occupied(pos) {
            return Err(GameError::Occupied(pos));
        }

        self.execute_move(pos);
        Ok(())
    }

    /// Execute a move (for both human and computer)
    fn execute_move(&mut self, pos: Pos) {
        let side = self.current_turn;

        self.board.place(side, pos);

        // Record move
        self.move_history.push((pos, side));
        self.last_move = Some(pos);

        // Stop timer
        self.move_timer.stop();

        // Check for end of game
        if let Some(result) = self.check_end() {
            self.game_over = Some(result);
            return;
        }

        // Switch turn
        self.current_turn = side.opponent();
        self.move_timer.start();

        // Clear message
        self.message = None;
    }

    /// Check for a win or for running out of placements
    fn check_end(&self) -> Option<GameResult> {
        if let Some(side) = winner(&self.board) {
            return Some(GameResult {
                winner: Some(side),
                winning_line: find_winning_line(&self.board, side),
            });
        }

        if is_exhausted(&self.board) {
            return Some(GameResult {
                winner: None,
                winning_line: None,
            });
        }

        None
    }

    /// Start computer thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let board = self.board.clone();
        let engine = Engine::new(self.engine_config);

        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = engine.choose_move(&board, &mut rand::thread_rng());
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if the computer has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(std::sync::mpsc::TryRecvError::Empty) => None,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("Computer error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.move_timer.set_ai_time(elapsed);
            self.apply_ai_result(move_result);
        }
    }

    /// Play a finished computer decision on the board
    pub fn apply_ai_result(&mut self, move_result: MoveResult) {
        if !self.is_ai_turn() || self.game_over.is_some() {
            return;
        }

        self.last_ai_result = Some(move_result.clone());
        match move_result.best_move {
            Some(pos) if !self.board.is_occupied(pos) => self.execute_move(pos),
            _ => self.message = Some("Computer could not find a move".to_string()),
        }
    }

    /// Get computer thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
