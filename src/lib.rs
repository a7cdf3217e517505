//! Numerical utilities for the axial behaviour of deep foundations
//!
//! * [material] -- the Duncan-Chang hyperbolic stress-strain relations for soils
//! * [pile] -- hyperbolic load-transfer curves for the shaft and tip of a pile
//! * [quadrature] -- Gauss-Legendre nodes and weights by Newton-Raphson refinement
//!
//! The modules are independent; [base] holds the parameter structures they share.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod material;
pub mod pile;
pub mod prelude;
pub mod quadrature;
