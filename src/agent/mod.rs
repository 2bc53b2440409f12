pub mod player;
pub use player::*;

pub mod random_player;
pub use random_player::*;

pub mod greedy_player;
pub use greedy_player::*;
