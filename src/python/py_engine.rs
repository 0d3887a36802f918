//! Engine bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{GameConfig, Mark};
use crate::rules::{GameEngine, MoveResult};

fn parse_mark(mark: &str) -> PyResult<Mark> {
    Mark::from_symbol(mark).ok_or_else(|| PyValueError::new_err(format!("unknown mark: {mark}")))
}

/// Negative or oversized indices map to an index that is always
/// off the board, so the engine reports them as out of bounds.
fn to_index(value: i64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

/// Python wrapper for MoveResult.
#[pyclass(name = "MoveResult")]
#[derive(Clone, Debug)]
pub struct PyMoveResult(pub MoveResult);

#[pymethods]
impl PyMoveResult {
    #[getter]
    fn applied(&self) -> bool {
        self.0.applied()
    }

    /// Rejection reason, or None if the move was applied.
    #[getter]
    fn reason(&self) -> Option<String> {
        self.0.rejection().map(|err| err.to_string())
    }

    /// Each sequence as a list of (row, col) tuples.
    #[getter]
    fn sequences(&self) -> Vec<Vec<(usize, usize)>> {
        self.0
            .sequences()
            .iter()
            .map(|s| s.cells().iter().map(|p| (p.row, p.col)).collect())
            .collect()
    }

    #[getter]
    fn total_damage(&self) -> u32 {
        self.0.total_damage()
    }

    #[getter]
    fn hp_x(&self) -> u32 {
        self.0.hp(Mark::X)
    }

    #[getter]
    fn hp_o(&self) -> u32 {
        self.0.hp(Mark::O)
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.0.is_game_over()
    }

    /// "X", "O", "tie", or None while the game is running.
    #[getter]
    fn winner(&self) -> Option<String> {
        use crate::rules::GameResult;

        self.0.result().map(|result| match result {
            GameResult::Winner(mark) => mark.to_string(),
            GameResult::Tie => "tie".to_string(),
        })
    }

    fn __repr__(&self) -> String {
        format!(
            "MoveResult(applied={}, total_damage={}, game_over={})",
            self.0.applied(),
            self.0.total_damage(),
            self.0.is_game_over()
        )
    }
}

/// Python wrapper for GameEngine.
#[pyclass(name = "GameEngine")]
pub struct PyGameEngine {
    engine: GameEngine,
}

#[pymethods]
impl PyGameEngine {
    /// Create a new engine.
    ///
    /// # Arguments
    /// - board_size: Board side length
    /// - starting_hp: HP for each player
    /// - min_sequence_len: Shortest damaging run
    #[new]
    #[pyo3(signature = (board_size = 7, starting_hp = 15, min_sequence_len = 4))]
    fn new(board_size: usize, starting_hp: u32, min_sequence_len: usize) -> PyResult<Self> {
        if board_size == 0 || starting_hp == 0 || min_sequence_len == 0 {
            return Err(PyValueError::new_err(
                "board_size, starting_hp and min_sequence_len must be positive",
            ));
        }
        let config = GameConfig::default()
            .with_board_size(board_size)
            .with_starting_hp(starting_hp)
            .with_min_sequence_len(min_sequence_len);
        Ok(Self {
            engine: GameEngine::with_config(config),
        })
    }

    /// Place the current player's mark. Invalid moves are reported, not raised.
    fn place_mark(&mut self, row: i64, col: i64) -> PyMoveResult {
        PyMoveResult(self.engine.place_mark(to_index(row), to_index(col)))
    }

    /// Board as rows of "X", "O" or None.
    fn board(&self) -> Vec<Vec<Option<String>>> {
        self.engine
            .state()
            .board()
            .rows()
            .map(|row| row.iter().map(|c| c.map(|m| m.to_string())).collect())
            .collect()
    }

    fn hp(&self, mark: &str) -> PyResult<u32> {
        Ok(self.engine.state().hp(parse_mark(mark)?))
    }

    #[getter]
    fn current_player(&self) -> String {
        self.engine.state().current_player().to_string()
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.engine.state().is_game_over()
    }

    /// Damage log lines, newest first.
    fn damage_log(&self) -> Vec<String> {
        self.engine
            .state()
            .damage_log()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    fn status_text(&self) -> String {
        self.engine.status_text()
    }

    /// Start a new game with the same configuration.
    fn reset(&mut self) {
        self.engine.reset();
    }

    fn __repr__(&self) -> String {
        let state = self.engine.state();
        format!(
            "GameEngine(current_player={}, hp_x={}, hp_o={}, game_over={})",
            state.current_player(),
            state.hp(Mark::X),
            state.hp(Mark::O),
            state.is_game_over()
        )
    }
}
