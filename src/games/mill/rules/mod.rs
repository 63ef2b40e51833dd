//! Game rules for the mill game.
//!
//! Pure functions over a [`Board`](super::Board): they never consult
//! whose turn it is, so the search can call them on hypothetical boards.

pub mod legality;
pub mod win;

pub use legality::{check_move, is_legal_move, legal_moves, valid_destinations};
pub use win::{is_winning_position, winner};
