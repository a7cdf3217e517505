use crate::base::ParamLoadTransfer;
use crate::StrError;
use plotpy::linspace;

/// Calculates the load mobilized along the shaft (skin friction) for a displacement δ
///
/// ```text
///              δ
/// Pf = ———————————————
///       1/Kf + Rf δ / f
/// ```
pub fn shaft_load(d: f64, kf: f64, rf: f64, f: f64) -> f64 {
    let a = 1.0 / kf;
    let b = rf * d / f;
    d / (a + b)
}

/// Calculates the load mobilized at the tip (end bearing) for a displacement δ
///
/// ```text
///               δ
/// Pp = —————————————————
///       1/Kp + Rf δ / Qpv
/// ```
pub fn tip_load(d: f64, kp: f64, rf: f64, qpv: f64) -> f64 {
    let a = 1.0 / kp;
    let b = rf * d / qpv;
    d / (a + b)
}

/// Holds the sampled load-transfer curves
pub struct LoadTransferCurve {
    /// Displacements δ
    pub dd: Vec<f64>,

    /// Shaft loads Pf(δ)
    pub pf: Vec<f64>,

    /// Tip loads Pp(δ)
    pub pp: Vec<f64>,

    /// Total loads P(δ) = Pf(δ) + Pp(δ)
    pub pt: Vec<f64>,
}

/// Implements the hyperbolic load-transfer model of a pile
pub struct LoadTransfer {
    /// Holds the parameters
    pub param: ParamLoadTransfer,
}

impl LoadTransfer {
    /// Allocates a new instance
    pub fn new(param: &ParamLoadTransfer) -> Result<Self, StrError> {
        if param.kf <= 0.0 {
            return Err("kf parameter for the load-transfer model must be > 0");
        }
        if param.f <= 0.0 {
            return Err("f parameter for the load-transfer model must be > 0");
        }
        if param.kp <= 0.0 {
            return Err("kp parameter for the load-transfer model must be > 0");
        }
        if param.qpv <= 0.0 {
            return Err("qpv parameter for the load-transfer model must be > 0");
        }
        if param.rf <= 0.0 || param.rf > 1.0 {
            return Err("rf parameter for the load-transfer model must be in (0, 1]");
        }
        Ok(LoadTransfer { param: *param })
    }

    /// Returns the shaft load Pf(δ)
    pub fn shaft(&self, d: f64) -> f64 {
        shaft_load(d, self.param.kf, self.param.rf, self.param.f)
    }

    /// Returns the tip load Pp(δ)
    pub fn tip(&self, d: f64) -> f64 {
        tip_load(d, self.param.kp, self.param.rf, self.param.qpv)
    }

    /// Returns the total load P(δ) = Pf(δ) + Pp(δ)
    pub fn total(&self, d: f64) -> f64 {
        self.shaft(d) + self.tip(d)
    }

    /// Returns the asymptotic shaft load f / Rf
    pub fn shaft_asymptote(&self) -> f64 {
        self.param.f / self.param.rf
    }

    /// Returns the asymptotic tip load Qpv / Rf
    pub fn tip_asymptote(&self) -> f64 {
        self.param.qpv / self.param.rf
    }

    /// Samples the load-transfer curves from zero to `d_max`
    pub fn curve(&self, d_max: f64, npoint: usize) -> Result<LoadTransferCurve, StrError> {
        if d_max < 0.0 {
            return Err("d_max must be ≥ 0");
        }
        if npoint < 2 {
            return Err("npoint must be ≥ 2");
        }
        let dd = linspace(0.0, d_max, npoint);
        let pf: Vec<_> = dd.iter().map(|d| self.shaft(*d)).collect();
        let pp: Vec<_> = dd.iter().map(|d| self.tip(*d)).collect();
        let pt = pf.iter().zip(&pp).map(|(a, b)| a + b).collect();
        Ok(LoadTransferCurve { dd, pf, pp, pt })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
