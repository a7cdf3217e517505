//! Implements the Duncan-Chang constitutive relations for soils

mod duncan_chang;
pub use crate::material::duncan_chang::*;
