/// Defines the atmospheric pressure in kPa
///
/// Used as the reference pressure normalizing the confining stress in the Janbu modulus.
pub const P_ATM: f64 = 101.325;

/// Defines the maximum friction angle (degrees, exclusive) accepted by the models
///
/// At 90° the Mohr-Coulomb denominator `1 - sin(φ)` vanishes.
pub const PHI_MAX: f64 = 90.0;
