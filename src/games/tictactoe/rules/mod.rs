//! Game rules for tic-tac-toe.
//!
//! Win and draw detection live in separate modules so each rule can be
//! tested on a bare [`Board`](super::Board).

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{completed_lines, winner};
