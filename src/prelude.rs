//! Makes available the commonly used structures
//!
//! You may write `use pilesoil::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{ParamDuncanChang, ParamLoadTransfer, P_ATM};
pub use crate::material::DuncanChang;
pub use crate::pile::{LoadTransfer, LoadTransferCurve};
pub use crate::quadrature::{GaussLegendre, Settings};
pub use crate::StrError;
