//! Game implementations.

pub mod tictactoe;
