//! The board: square contents, the fixed 10×10 grid and its text rendering.

mod grid;
mod render;
mod square;

pub use grid::Board;
pub use render::BoardView;
pub use square::Square;
