use crate::base::{ParamDuncanChang, PHI_MAX};
use crate::StrError;
use plotpy::linspace;

/// Calculates the deviatoric stress from the axial strain (hyperbolic law)
///
/// ```text
///                 εa
/// σ₁ - σ₃ = ————————————————
///            1/E + εa/(σ₁-σ₃)ult
/// ```
///
/// * `young` -- initial tangent modulus E
/// * `eps_a` -- axial strain
/// * `sig_dev_ult` -- ultimate (asymptotic) deviatoric stress
///
/// **Note:** No input validation is performed; zero denominators yield Inf or NaN.
pub fn deviatoric_stress(young: f64, eps_a: f64, sig_dev_ult: f64) -> f64 {
    let a = 1.0 / young;
    let b = eps_a / sig_dev_ult;
    eps_a / (a + b)
}

/// Calculates the failure ratio Rf = (σ₁-σ₃)f / (σ₁-σ₃)ult
pub fn failure_ratio(sig_dev_f: f64, sig_dev_ult: f64) -> f64 {
    sig_dev_f / sig_dev_ult
}

/// Calculates the mobilized strength fraction S = (σ₁-σ₃) / (σ₁-σ₃)f
pub fn mobilized_strength(sig_dev: f64, sig_dev_f: f64) -> f64 {
    sig_dev / sig_dev_f
}

/// Calculates the confinement-dependent modulus (Janbu)
///
/// ```text
/// E = K pₐ (σ₃/pₐ)ⁿ
/// ```
///
/// * `kk` -- modulus number K (dimensionless)
/// * `p_atm` -- atmospheric pressure pₐ
/// * `sig3` -- confining pressure σ₃
/// * `n` -- modulus exponent (dimensionless)
pub fn janbu_modulus(kk: f64, p_atm: f64, sig3: f64, n: f64) -> f64 {
    kk * p_atm * f64::powf(sig3 / p_atm, n)
}

/// Calculates the tangent modulus Et = (1 - S Rf)² E
pub fn tangent_modulus(s: f64, rf: f64, young: f64) -> f64 {
    let m = 1.0 - s * rf;
    m * m * young
}

/// Calculates the deviatoric stress at failure (Mohr-Coulomb)
///
/// ```text
///             2 c cos(φ) + 2 σ₃ sin(φ)
/// (σ₁-σ₃)f = ——————————————————————————
///                   1 - sin(φ)
/// ```
///
/// * `c` -- cohesion
/// * `phi` -- friction angle in degrees
/// * `sig3` -- confining pressure σ₃
///
/// **Note:** No input validation is performed; φ = 90° yields Inf or NaN.
pub fn failure_deviatoric_stress(c: f64, phi: f64, sig3: f64) -> f64 {
    let phi_rad = phi.to_radians();
    let (sin_phi, cos_phi) = phi_rad.sin_cos();
    (2.0 * c * cos_phi + 2.0 * sig3 * sin_phi) / (1.0 - sin_phi)
}

/// Implements the Duncan-Chang hyperbolic model for a given soil
///
/// The stress state is described by the confining pressure σ₃ (positive in compression)
/// and the deviatoric stress σ₁ - σ₃.
pub struct DuncanChang {
    /// Holds the parameters
    pub param: ParamDuncanChang,
}

impl DuncanChang {
    /// Allocates a new instance
    pub fn new(param: &ParamDuncanChang) -> Result<Self, StrError> {
        if param.kk_loading <= 0.0 {
            return Err("kk_loading parameter for the Duncan-Chang model must be > 0");
        }
        if param.kk_unloading <= 0.0 {
            return Err("kk_unloading parameter for the Duncan-Chang model must be > 0");
        }
        if param.n < 0.0 {
            return Err("n parameter for the Duncan-Chang model must be ≥ 0");
        }
        if param.rf <= 0.0 || param.rf > 1.0 {
            return Err("rf parameter for the Duncan-Chang model must be in (0, 1]");
        }
        if param.c < 0.0 {
            return Err("c parameter for the Duncan-Chang model must be ≥ 0");
        }
        if param.phi < 0.0 || param.phi >= PHI_MAX {
            return Err("phi parameter for the Duncan-Chang model must be in [0, 90)");
        }
        if param.poisson <= -1.0 || param.poisson >= 0.5 {
            return Err("poisson parameter for the Duncan-Chang model must be in (-1, 0.5)");
        }
        if param.p_atm <= 0.0 {
            return Err("p_atm parameter for the Duncan-Chang model must be > 0");
        }
        Ok(DuncanChang { param: *param })
    }

    /// Returns the initial tangent modulus Eᵢ for primary loading
    pub fn initial_modulus(&self, sig3: f64) -> f64 {
        janbu_modulus(self.param.kk_loading, self.param.p_atm, sig3, self.param.n)
    }

    /// Returns the unloading-reloading modulus Eur
    pub fn unloading_modulus(&self, sig3: f64) -> f64 {
        janbu_modulus(self.param.kk_unloading, self.param.p_atm, sig3, self.param.n)
    }

    /// Returns the deviatoric stress at failure
    pub fn failure_deviator(&self, sig3: f64) -> f64 {
        failure_deviatoric_stress(self.param.c, self.param.phi, sig3)
    }

    /// Returns the ultimate (asymptotic) deviatoric stress (σ₁-σ₃)f / Rf
    pub fn ultimate_deviator(&self, sig3: f64) -> f64 {
        self.failure_deviator(sig3) / self.param.rf
    }

    /// Returns the deviatoric stress corresponding to the axial strain
    pub fn deviator(&self, eps_a: f64, sig3: f64) -> f64 {
        deviatoric_stress(self.initial_modulus(sig3), eps_a, self.ultimate_deviator(sig3))
    }

    /// Returns the tangent modulus at a given deviatoric stress
    ///
    /// The mobilized strength fraction is capped at one; thus, the tangent modulus
    /// stays at its residual value `(1 - Rf)² Eᵢ` beyond failure.
    pub fn tangent_modulus(&self, sig_dev: f64, sig3: f64) -> f64 {
        let s = mobilized_strength(sig_dev, self.failure_deviator(sig3));
        tangent_modulus(f64::min(s, 1.0), self.param.rf, self.initial_modulus(sig3))
    }

    /// Returns the tangent modulus at a given axial strain
    pub fn tangent_modulus_at_strain(&self, eps_a: f64, sig3: f64) -> f64 {
        self.tangent_modulus(self.deviator(eps_a, sig3), sig3)
    }

    /// Samples the stress-strain curve for a constant confining pressure
    ///
    /// # Input
    ///
    /// * `sig3` -- confining pressure
    /// * `eps_max` -- maximum axial strain
    /// * `npoint` -- number of points
    ///
    /// # Output
    ///
    /// Returns `(eps, sig_dev)` where:
    ///
    /// * `eps` -- axial strains from zero to `eps_max`
    /// * `sig_dev` -- the deviatoric stresses
    pub fn stress_strain_curve(
        &self,
        sig3: f64,
        eps_max: f64,
        npoint: usize,
    ) -> Result<(Vec<f64>, Vec<f64>), StrError> {
        if eps_max < 0.0 {
            return Err("eps_max must be ≥ 0");
        }
        if npoint < 2 {
            return Err("npoint must be ≥ 2");
        }
        let ee = self.initial_modulus(sig3);
        let su = self.ultimate_deviator(sig3);
        let eps = linspace(0.0, eps_max, npoint);
        let sig_dev: Vec<_> = eps.iter().map(|e| deviatoric_stress(ee, *e, su)).collect();
        Ok((eps, sig_dev))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
