//! Python bindings for the tactical tic-tac-toe engine.
//!
//! A Python presentation layer owns one `GameEngine`, forwards clicks to
//! `place_mark`, and re-renders from the returned `MoveResult`.
//!
//! # Quick Start
//!
//! ```python
//! import tactical_tictactoe as ttt
//!
//! engine = ttt.GameEngine()
//! result = engine.place_mark(3, 3)
//!
//! if result.applied and result.total_damage:
//!     print(engine.damage_log()[0])
//! print(engine.status_text())
//! ```

use pyo3::prelude::*;

mod py_engine;

pub use py_engine::*;

/// tactical_tictactoe: 7x7 tic-tac-toe where lines deal damage.
#[pymodule]
fn tactical_tictactoe(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGameEngine>()?;
    m.add_class::<PyMoveResult>()?;

    Ok(())
}
