//! The game engine: move validation, sequence damage, turn order.
//!
//! A move runs to completion inside `place_mark`:
//! 1. Validate (game not over, in bounds, cell empty)
//! 2. Mark the cell for the current player
//! 3. Detect sequences through the cell
//! 4. If any, deal their summed length to the opponent and log it
//! 5. End the game if either HP hit zero, otherwise pass the turn

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::combat::DamageEvent;
use crate::core::{GameConfig, GameState, InvalidMove, Mark, MarkMap, Position};
use crate::sequences::{sequences_through, Sequence};

/// Sequences completed by one move (at most one per axis).
pub type Sequences = SmallVec<[Sequence; 4]>;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Mark),
    /// Both players at zero HP.
    Tie,
}

impl GameResult {
    /// Decide the result from HP totals, or `None` if both are alive.
    ///
    /// The tie check comes first.
    #[must_use]
    pub fn from_hp(hp: &MarkMap<u32>) -> Option<Self> {
        match (hp[Mark::X], hp[Mark::O]) {
            (0, 0) => Some(GameResult::Tie),
            (0, _) => Some(GameResult::Winner(Mark::O)),
            (_, 0) => Some(GameResult::Winner(Mark::X)),
            _ => None,
        }
    }

    /// Check if a mark won.
    #[must_use]
    pub fn is_winner(&self, mark: Mark) -> bool {
        matches!(self, GameResult::Winner(m) if *m == mark)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(mark) => write!(f, "Player {mark} Wins!"),
            GameResult::Tie => f.write_str("It's a tie!"),
        }
    }
}

/// What an applied move did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// Who placed the mark.
    pub mover: Mark,
    /// Where it was placed.
    pub position: Position,
    /// Sequences through `position`, in axis order.
    pub sequences: Sequences,
    /// Summed sequence lengths; zero if no sequence was formed.
    pub total_damage: u32,
    /// HP of both players after the move.
    pub hp: MarkMap<u32>,
    /// Set if this move ended the game.
    pub result: Option<GameResult>,
}

impl MoveReport {
    #[must_use]
    pub fn dealt_damage(&self) -> bool {
        self.total_damage > 0
    }

    #[must_use]
    pub fn ended_game(&self) -> bool {
        self.result.is_some()
    }

    /// Union of cells across all sequences.
    #[must_use]
    pub fn highlighted_cells(&self) -> FxHashSet<Position> {
        self.sequences
            .iter()
            .flat_map(|s| s.cells().iter().copied())
            .collect()
    }
}

/// Outcome of a `place_mark` call, applied or not.
///
/// A rejected move carries the reason plus the unchanged HP and game
/// status, so a renderer can treat both cases alike.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveResult {
    outcome: Result<MoveReport, InvalidMove>,
    hp: MarkMap<u32>,
    game_over: bool,
    result: Option<GameResult>,
}

impl MoveResult {
    /// Whether the mark was placed.
    #[must_use]
    pub fn applied(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Why the move was ignored, if it was.
    #[must_use]
    pub fn rejection(&self) -> Option<InvalidMove> {
        self.outcome.as_ref().err().copied()
    }

    #[must_use]
    pub fn report(&self) -> Option<&MoveReport> {
        self.outcome.as_ref().ok()
    }

    /// Sequences formed; empty if none or if the move was rejected.
    #[must_use]
    pub fn sequences(&self) -> &[Sequence] {
        match self.report() {
            Some(report) => &report.sequences,
            None => &[],
        }
    }

    #[must_use]
    pub fn total_damage(&self) -> u32 {
        self.report().map_or(0, |r| r.total_damage)
    }

    #[must_use]
    pub fn hp(&self, mark: Mark) -> u32 {
        self.hp[mark]
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The game's result, if it is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    #[must_use]
    pub fn highlighted_cells(&self) -> FxHashSet<Position> {
        self.report()
            .map(MoveReport::highlighted_cells)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn into_result(self) -> Result<MoveReport, InvalidMove> {
        self.outcome
    }
}

/// Owns the game state and applies moves to it.
///
/// ## Example
///
/// ```
/// use tactical_tictactoe::{GameEngine, Mark};
///
/// let mut engine = GameEngine::new();
/// let result = engine.place_mark(3, 3);
///
/// assert!(result.applied());
/// assert_eq!(engine.state().current_player(), Mark::O);
///
/// // Occupied cells are ignored.
/// assert!(!engine.place_mark(3, 3).applied());
/// assert_eq!(engine.state().current_player(), Mark::O);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Engine for the standard 7×7, 15 HP game.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Panics if the configuration is invalid.
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        config.validate();
        let state = GameState::new(&config);
        Self { config, state }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Replace the state with a fresh one.
    pub fn reset(&mut self) -> &GameState {
        self.state = GameState::new(&self.config);
        log::info!("game reset");
        &self.state
    }

    /// The game's result, if it is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if self.state.is_game_over() {
            GameResult::from_hp(&self.state.hp_map())
        } else {
            None
        }
    }

    /// True when the board is full but nobody has been knocked out.
    /// No further move can be applied.
    #[must_use]
    pub fn is_stalled(&self) -> bool {
        !self.state.is_game_over() && self.state.board().is_full()
    }

    /// One-line status for display.
    #[must_use]
    pub fn status_text(&self) -> String {
        match self.result() {
            Some(result) => result.to_string(),
            None => format!("Player {}'s turn", self.state.current_player()),
        }
    }

    /// Place the current player's mark, ignoring invalid requests.
    ///
    /// Invalid requests leave the state untouched and are reported via
    /// `MoveResult::rejection`.
    pub fn place_mark(&mut self, row: usize, col: usize) -> MoveResult {
        let outcome = self.try_place_mark(Position::new(row, col));
        MoveResult {
            outcome,
            hp: self.state.hp_map(),
            game_over: self.state.is_game_over(),
            result: self.result(),
        }
    }

    /// Place the current player's mark.
    ///
    /// # Errors
    /// Returns `InvalidMove` (with no state change) if the game is over,
    /// the position is off the board, or the cell is occupied.
    pub fn try_place_mark(&mut self, pos: Position) -> Result<MoveReport, InvalidMove> {
        if let Err(err) = self.validate(pos) {
            log::trace!("rejected move at {pos}: {err}");
            return Err(err);
        }

        let mover = self.state.current_player();
        self.state.board_mut().place(pos, mover);
        let turn = self.state.record_move();
        log::debug!("move {turn}: {mover} at {pos}");

        let sequences = sequences_through(self.state.board(), pos, self.config.min_sequence_len);
        let total_damage = if sequences.is_empty() {
            0
        } else {
            self.resolve_damage(mover, &sequences, turn)
        };

        let result = self.result();
        if result.is_none() {
            self.state.pass_turn();
        }

        Ok(MoveReport {
            mover,
            position: pos,
            sequences,
            total_damage,
            hp: self.state.hp_map(),
            result,
        })
    }

    fn validate(&self, pos: Position) -> Result<(), InvalidMove> {
        if self.state.is_game_over() {
            return Err(InvalidMove::GameOver);
        }

        let board = self.state.board();
        if !board.in_bounds(pos) {
            return Err(InvalidMove::OutOfBounds {
                row: pos.row,
                col: pos.col,
                size: board.size(),
            });
        }

        match board.get(pos) {
            Some(mark) => Err(InvalidMove::Occupied {
                row: pos.row,
                col: pos.col,
                mark,
            }),
            None => Ok(()),
        }
    }

    /// Deal damage for this move's sequences and end the game on a
    /// knockout. Returns the total damage.
    fn resolve_damage(&mut self, mover: Mark, sequences: &[Sequence], turn: u32) -> u32 {
        let defender = mover.opponent();
        let total_damage: u32 = sequences.iter().map(Sequence::damage).sum();

        for sequence in sequences {
            log::debug!(
                "{} sequence of {} for {}",
                sequence.axis(),
                sequence.len(),
                mover
            );
        }

        let remaining = self.state.apply_damage(defender, total_damage);
        self.state
            .record_damage(DamageEvent::new(mover, total_damage, sequences.len(), turn));
        log::info!("{mover} dealt {total_damage} damage to {defender} ({remaining} HP left)");

        if let Some(result) = GameResult::from_hp(&self.state.hp_map()) {
            self.state.finish();
            log::info!("game over after move {turn}: {result}");
        }

        total_damage
    }
}
