//! Implements the Gauss-Legendre quadrature rule

mod gauss_legendre;
mod legendre;
mod settings;
pub use crate::quadrature::gauss_legendre::*;
pub use crate::quadrature::legendre::*;
pub use crate::quadrature::settings::*;
