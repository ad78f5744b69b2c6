//! Adjacency combat.
//!
//! ## Key Types
//!
//! - `Reaction`: outcome of one piece facing one neighbour
//! - `ReactionResolver`: pure rules table mapping edge pairs to reactions
//!
//! The resolver never touches game state. `Game` drives it over the acting
//! piece's neighbours and applies the outcomes inside the current
//! transaction.

mod reaction;
mod resolver;

pub use reaction::Reaction;
pub use resolver::ReactionResolver;
