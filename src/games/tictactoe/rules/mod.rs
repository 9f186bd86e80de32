//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board snapshot
//! according to tic-tac-toe rules. Rules are separated from history
//! storage so every snapshot can be judged on its own.

pub mod status;
pub mod turn;
pub mod win;

pub use status::compute_status;
pub use turn::next_player;
pub use win::check_winner;
