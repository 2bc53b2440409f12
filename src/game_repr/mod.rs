mod board;
mod castling;
mod error;
mod moves;
mod piece;
mod pins;
mod position;
mod square;
pub mod piece_moves;

#[cfg(test)]
mod tests;

pub use board::*;
pub use castling::*;
pub use error::*;
pub use moves::*;
pub use piece::*;
pub use pins::*;
pub use position::*;
pub use square::*;
