//! The game engine: pure transition functions over immutable states.
//!
//! Clients drive a game by calling [`new_game`] once and then feeding each
//! returned state back into [`make_move`]. No function here touches shared
//! storage; concurrency over independent games needs no coordination.

pub mod transition;

pub use transition::{get_status, make_move, new_game, new_game_with, reset_game, reset_game_with};
