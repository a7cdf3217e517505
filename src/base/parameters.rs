use super::P_ATM;
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds parameters for the Duncan-Chang hyperbolic stress-strain model
///
/// The initial (loading) modulus follows Janbu's power law:
///
/// ```text
/// Eᵢ = Ke pₐ (σ₃/pₐ)ⁿ
/// ```
///
/// # Reference
///
/// 1. Duncan JM, Chang CY (1970) Nonlinear analysis of stress and strain in soils,
///    Journal of the Soil Mechanics and Foundations Division, 96(5):1629-1653
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ParamDuncanChang {
    /// Modulus number for primary loading (Ke)
    pub kk_loading: f64,

    /// Modulus number for unloading-reloading (Ku)
    pub kk_unloading: f64,

    /// Modulus exponent (n)
    pub n: f64,

    /// Failure ratio Rf = (σ₁-σ₃)f / (σ₁-σ₃)ult
    pub rf: f64,

    /// Cohesion
    pub c: f64,

    /// Friction angle in degrees
    pub phi: f64,

    /// Poisson's coefficient
    pub poisson: f64,

    /// Atmospheric (reference) pressure
    pub p_atm: f64,
}

impl ParamDuncanChang {
    /// Returns the parameters of a dense silica sand
    pub fn sample_dense_silica_sand() -> Self {
        ParamDuncanChang {
            kk_loading: 2000.0,
            kk_unloading: 2120.0,
            n: 0.54,
            rf: 0.91,
            c: 0.0,
            phi: 36.5,
            poisson: 0.32,
            p_atm: P_ATM,
        }
    }

    /// Parses the parameters from a JSON string
    pub fn from_json(json: &str) -> Result<Self, StrError> {
        serde_json::from_str(json).map_err(|_| "cannot parse Duncan-Chang parameters from JSON")
    }

    /// Serializes the parameters into a JSON string
    pub fn to_json(&self) -> Result<String, StrError> {
        serde_json::to_string(self).map_err(|_| "cannot serialize Duncan-Chang parameters")
    }
}

/// Holds parameters for the hyperbolic load-transfer curves of a pile
///
/// ```text
///              δ                         δ
/// Pf = ————————————————     Pp = ————————————————
///       1/Kf + Rf δ / f           1/Kp + Rf δ / Qpv
/// ```
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ParamLoadTransfer {
    /// Initial stiffness of the shaft (skin friction) curve
    pub kf: f64,

    /// Ultimate shaft resistance
    pub f: f64,

    /// Initial stiffness of the tip (end bearing) curve
    pub kp: f64,

    /// Ultimate tip resistance
    pub qpv: f64,

    /// Failure ratio of the hyperbolic fit
    pub rf: f64,
}

impl ParamLoadTransfer {
    /// Returns a sample parameter set with a soft shaft and a stiffer tip
    pub fn sample_shaft_and_tip() -> Self {
        ParamLoadTransfer {
            kf: 1.0,
            f: 0.3,
            kp: 1.0,
            qpv: 10.0,
            rf: 0.5,
        }
    }

    /// Parses the parameters from a JSON string
    pub fn from_json(json: &str) -> Result<Self, StrError> {
        serde_json::from_str(json).map_err(|_| "cannot parse load-transfer parameters from JSON")
    }

    /// Serializes the parameters into a JSON string
    pub fn to_json(&self) -> Result<String, StrError> {
        serde_json::to_string(self).map_err(|_| "cannot serialize load-transfer parameters")
    }
}

impl fmt::Display for ParamDuncanChang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duncan-Chang parameters\n")?;
        write!(f, "=======================\n")?;
        write!(f, "Ke = {:?}\n", self.kk_loading)?;
        write!(f, "Ku = {:?}\n", self.kk_unloading)?;
        write!(f, "n = {:?}\n", self.n)?;
        write!(f, "Rf = {:?}\n", self.rf)?;
        write!(f, "c = {:?}\n", self.c)?;
        write!(f, "phi = {:?}\n", self.phi)?;
        write!(f, "poisson = {:?}\n", self.poisson)?;
        write!(f, "p_atm = {:?}\n", self.p_atm)?;
        Ok(())
    }
}

impl fmt::Display for ParamLoadTransfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Load-transfer parameters\n")?;
        write!(f, "========================\n")?;
        write!(f, "Kf = {:?}\n", self.kf)?;
        write!(f, "f = {:?}\n", self.f)?;
        write!(f, "Kp = {:?}\n", self.kp)?;
        write!(f, "Qpv = {:?}\n", self.qpv)?;
        write!(f, "Rf = {:?}\n", self.rf)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
