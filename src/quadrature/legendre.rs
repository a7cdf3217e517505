/// Evaluates the Legendre polynomial Pₙ(x) and its derivative
///
/// Uses the three-term recurrence:
///
/// ```text
/// k Pₖ(x) = (2k - 1) x Pₖ₋₁(x) - (k - 1) Pₖ₋₂(x)
///
///            n (Pₙ₋₁(x) - x Pₙ(x))
/// dPₙ/dx = ——————————————————————
///                  1 - x²
/// ```
///
/// At x = ±1 the derivative is taken from its closed form `(±1)ⁿ⁻¹ n (n + 1) / 2`.
///
/// Returns `(pn, dpn)`
pub fn legendre(n: usize, x: f64) -> (f64, f64) {
    if n == 0 {
        return (1.0, 0.0);
    }
    let mut p_prev = 1.0;
    let mut p = x;
    for k in 2..=n {
        let kf = k as f64;
        let p_next = ((2.0 * kf - 1.0) * x * p - (kf - 1.0) * p_prev) / kf;
        p_prev = p;
        p = p_next;
    }
    let nf = n as f64;
    let den = 1.0 - x * x;
    let dp = if den == 0.0 {
        let s = if x > 0.0 || n % 2 == 1 { 1.0 } else { -1.0 };
        s * nf * (nf + 1.0) / 2.0
    } else {
        nf * (p_prev - x * p) / den
    };
    (p, dp)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
