//! Perfect-play tic-tac-toe decision engine.
//!
//! The crate is split the same way the problem is:
//! - [`game_repr`]: board representation, win lines, terminal detection
//! - [`agent`]: the [`agent::Player`] seam and the minimax engine behind it
//! - [`orchestrator`]: turn management for PvP / PvE sessions
//!
//! Rendering, input handling and audio are deliberately absent. A host
//! application owns those and drives this crate through
//! [`orchestrator::Orchestrator`], or through the lower-level pieces
//! directly.

pub mod agent;
pub mod game_repr;
pub mod orchestrator;
