//! Implements load-transfer relations for axially loaded piles

mod influence_radius;
mod load_transfer;
pub use crate::pile::influence_radius::*;
pub use crate::pile::load_transfer::*;
