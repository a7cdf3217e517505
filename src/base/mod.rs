//! Implements the base structures such as parameters and constants

mod constants;
mod parameters;
pub use crate::base::constants::*;
pub use crate::base::parameters::*;
