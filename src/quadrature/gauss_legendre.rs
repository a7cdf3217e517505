use super::{legendre, Settings};
use crate::StrError;
use plotpy::linspace;
use std::f64::consts::PI;

/// Holds the nodes and weights of the Gauss-Legendre quadrature rule on [-1, 1]
///
/// The rule with n nodes integrates polynomials of degree up to 2n - 1 exactly:
///
/// ```text
///  1              n-1
/// ∫  f(x) dx  ≈   Σ  wᵢ f(xᵢ)
/// -1              i=0
/// ```
///
/// The nodes are the roots of the Legendre polynomial Pₙ, refined by Newton-Raphson
/// iterations from the initial guess
///
/// ```text
///          (2i + 1) π      0.27       π uᵢ (n - 1)
/// yᵢ = cos(——————————) + ———— sin(————————————)
///             2 n          n            n + 1
/// ```
///
/// where `uᵢ` are n equally spaced points in [-1, 1]. The weights are
///
/// ```text
///               2
/// wᵢ = ——————————————————
///       (1 - xᵢ²) Pₙ'(xᵢ)²
/// ```
#[derive(Clone, Debug)]
pub struct GaussLegendre {
    /// Holds the nodes in ascending order
    pub nodes: Vec<f64>,

    /// Holds the weights (aligned with nodes)
    pub weights: Vec<f64>,

    /// Holds the number of Newton-Raphson iterations performed
    pub n_iterations: usize,
}

impl GaussLegendre {
    /// Computes the rule with n nodes using the default settings
    pub fn new(n: usize) -> Result<Self, StrError> {
        GaussLegendre::with_settings(n, &Settings::new())
    }

    /// Computes the rule with n nodes
    ///
    /// # Input
    ///
    /// * `n` -- number of nodes (≥ 2)
    /// * `settings` -- tolerance, maximum number of iterations, and verbose mode
    ///
    /// The iterations continue while `max |yᵢ - yᵢ_prev| > tolerance`.
    pub fn with_settings(n: usize, settings: &Settings) -> Result<Self, StrError> {
        if n < 2 {
            return Err("the number of nodes must be ≥ 2");
        }
        if settings.n_iteration_max < 1 {
            return Err("n_iteration_max must be ≥ 1");
        }
        if !settings.tolerance.is_finite() || settings.tolerance <= 0.0 {
            return Err("tolerance must be > 0");
        }

        // initial guess (descending)
        let nf = n as f64;
        let uu = linspace(-1.0, 1.0, n);
        let mut yy: Vec<_> = (0..n)
            .map(|i| {
                let k = (2 * i + 1) as f64;
                f64::cos(k * PI / (2.0 * nf)) + (0.27 / nf) * f64::sin(PI * uu[i] * (nf - 1.0) / (nf + 1.0))
            })
            .collect();

        // Newton-Raphson
        let mut yy_prev = vec![2.0; n];
        let mut iteration = 0;
        if settings.verbose {
            print_header();
        }
        loop {
            let max_dy = max_abs_diff(&yy, &yy_prev);
            if max_dy.is_nan() {
                return Err("Gauss-Legendre nodes did not converge");
            }
            if max_dy <= settings.tolerance {
                break;
            }
            if iteration == settings.n_iteration_max {
                return Err("Gauss-Legendre nodes did not converge");
            }
            yy_prev.copy_from_slice(&yy);
            for i in 0..n {
                let (p, dp) = legendre(n, yy_prev[i]);
                yy[i] = yy_prev[i] - p / dp;
            }
            iteration += 1;
            if settings.verbose {
                print_iteration(iteration, max_abs_diff(&yy, &yy_prev));
            }
        }

        // weights at the converged nodes
        let mut nodes = Vec::with_capacity(n);
        let mut weights = Vec::with_capacity(n);
        for y in yy.iter().rev() {
            let (_, dp) = legendre(n, *y);
            nodes.push(*y);
            weights.push(2.0 / ((1.0 - y * y) * dp * dp));
        }
        Ok(GaussLegendre {
            nodes,
            weights,
            n_iterations: iteration,
        })
    }

    /// Returns the number of nodes
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the nodes and weights mapped onto the interval [a, b]
    ///
    /// Returns `(xx, ww)`
    pub fn mapped(&self, a: f64, b: f64) -> (Vec<f64>, Vec<f64>) {
        let half = (b - a) / 2.0;
        let mid = (a + b) / 2.0;
        let xx = self.nodes.iter().map(|y| half * y + mid).collect();
        let ww = self.weights.iter().map(|w| half * w).collect();
        (xx, ww)
    }

    /// Integrates a function over the interval [a, b]
    pub fn integrate<F>(&self, a: f64, b: f64, mut f: F) -> f64
    where
        F: FnMut(f64) -> f64,
    {
        let (xx, ww) = self.mapped(a, b);
        xx.iter().zip(&ww).map(|(x, w)| w * f(*x)).sum()
    }
}

/// Returns the maximum absolute difference between the components of two slices
///
/// Returns NaN if any difference is NaN.
fn max_abs_diff(u: &[f64], v: &[f64]) -> f64 {
    u.iter().zip(v).fold(0.0, |acc, (a, b)| {
        let diff = f64::abs(a - b);
        if diff.is_nan() || diff > acc {
            diff
        } else {
            acc
        }
    })
}

#[inline]
fn print_header() {
    println!("{:>5} {:>12}", "iter", "max|Δy|");
}

#[inline]
fn print_iteration(iteration: usize, max_dy: f64) {
    println!("{:>5} {:>12.4e}", iteration, max_dy);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{max_abs_diff, GaussLegendre};
    use crate::quadrature::Settings;
    use russell_chk::{approx_eq, vec_approx_eq};

    #[test]
    fn with_settings_captures_errors() {
        assert_eq!(GaussLegendre::new(0).err(), Some("the number of nodes must be ≥ 2"));
        assert_eq!(GaussLegendre::new(1).err(), Some("the number of nodes must be ≥ 2"));
        let mut settings = Settings::new();
        settings.n_iteration_max = 0;
        assert_eq!(
            GaussLegendre::with_settings(3, &settings).err(),
            Some("n_iteration_max must be ≥ 1")
        );
        settings.n_iteration_max = 1;
        assert_eq!(
            GaussLegendre::with_settings(3, &settings).err(),
            Some("Gauss-Legendre nodes did not converge")
        );
        let mut settings = Settings::new();
        for tolerance in [f64::NAN, f64::INFINITY, 0.0, -1e-10] {
            settings.tolerance = tolerance;
            assert_eq!(
                GaussLegendre::with_settings(3, &settings).err(),
                Some("tolerance must be > 0")
            );
        }
    }

    #[test]
    fn max_abs_diff_works() {
        assert_eq!(max_abs_diff(&[1.0, 2.0, 3.0], &[1.0, 2.5, 2.0]), 1.0);
        assert_eq!(max_abs_diff(&[], &[]), 0.0);
        assert!(max_abs_diff(&[1.0, f64::NAN, 3.0], &[1.0, 2.0, 3.5]).is_nan());
        assert!(max_abs_diff(&[f64::NAN, 2.0], &[1.0, 5.0]).is_nan());
    }

    #[test]
    fn two_nodes_work() {
        let rule = GaussLegendre::new(2).unwrap();
        let a = 1.0 / f64::sqrt(3.0);
        assert_eq!(rule.n_nodes(), 2);
        vec_approx_eq(&rule.nodes, &[-a, a], 1e-15);
        vec_approx_eq(&rule.weights, &[1.0, 1.0], 1e-14);
        approx_eq(rule.nodes[0], -0.5774, 1e-4);
        approx_eq(rule.nodes[1], 0.5774, 1e-4);
        assert!(rule.n_iterations > 0);
    }

    #[test]
    fn three_nodes_work() {
        let rule = GaussLegendre::new(3).unwrap();
        let a = f64::sqrt(3.0 / 5.0);
        vec_approx_eq(&rule.nodes, &[-a, 0.0, a], 1e-15);
        vec_approx_eq(&rule.weights, &[5.0 / 9.0, 8.0 / 9.0, 5.0 / 9.0], 1e-14);
    }

    #[test]
    fn five_nodes_work() {
        let rule = GaussLegendre::new(5).unwrap();
        #[rustfmt::skip]
        let correct_nodes = [
            -0.906179845938664, -0.5384693101056831, 0.0, 0.5384693101056831, 0.906179845938664,
        ];
        #[rustfmt::skip]
        let correct_weights = [
            0.2369268850561891, 0.4786286704993665, 128.0 / 225.0, 0.4786286704993665, 0.2369268850561891,
        ];
        vec_approx_eq(&rule.nodes, &correct_nodes, 1e-15);
        vec_approx_eq(&rule.weights, &correct_weights, 1e-14);
    }

    #[test]
    fn nodes_are_ascending_symmetric_and_weights_sum_to_two() {
        for n in 2..=40 {
            let rule = GaussLegendre::new(n).unwrap();
            assert_eq!(rule.nodes.len(), n);
            assert_eq!(rule.weights.len(), n);
            for i in 1..n {
                assert!(rule.nodes[i] > rule.nodes[i - 1]);
            }
            for i in 0..n {
                assert!(rule.nodes[i] > -1.0 && rule.nodes[i] < 1.0);
                assert!(rule.weights[i] > 0.0);
                approx_eq(rule.nodes[i], -rule.nodes[n - 1 - i], 1e-14);
            }
            let sum: f64 = rule.weights.iter().sum();
            approx_eq(sum, 2.0, 1e-13);
        }
    }

    #[test]
    fn new_is_idempotent() {
        let a = GaussLegendre::new(7).unwrap();
        let b = GaussLegendre::new(7).unwrap();
        for i in 0..7 {
            assert_eq!(a.nodes[i].to_bits(), b.nodes[i].to_bits());
            assert_eq!(a.weights[i].to_bits(), b.weights[i].to_bits());
        }
        assert_eq!(a.n_iterations, b.n_iterations);
    }

    #[test]
    fn mapped_works() {
        let rule = GaussLegendre::new(2).unwrap();
        let a = 1.0 / f64::sqrt(3.0);
        let (xx, ww) = rule.mapped(0.0, 2.0);
        vec_approx_eq(&xx, &[1.0 - a, 1.0 + a], 1e-15);
        vec_approx_eq(&ww, &[1.0, 1.0], 1e-14);
        let (xx, ww) = rule.mapped(-1.0, 1.0);
        vec_approx_eq(&xx, &rule.nodes, 1e-15);
        vec_approx_eq(&ww, &rule.weights, 1e-15);
    }

    #[test]
    fn integrate_is_exact_for_polynomials() {
        // degree 2n - 1 polynomials are integrated exactly
        for n in 2..=8 {
            let rule = GaussLegendre::new(n).unwrap();
            let deg = 2 * n - 1;
            let res = rule.integrate(0.0, 1.0, |x| x.powi(deg as i32));
            approx_eq(res, 1.0 / ((deg + 1) as f64), 1e-14);
        }
        let rule = GaussLegendre::new(3).unwrap();
        // ∫ (x⁵ - 2x² + 3) dx from -1 to 2 = 63/6 - 6 + 9
        let res = rule.integrate(-1.0, 2.0, |x| x.powi(5) - 2.0 * x * x + 3.0);
        approx_eq(res, 63.0 / 6.0 - 6.0 + 9.0, 1e-13);
    }

    #[test]
    fn integrate_smooth_function_works() {
        let rule = GaussLegendre::new(10).unwrap();
        let res = rule.integrate(0.0, std::f64::consts::PI, f64::sin);
        approx_eq(res, 2.0, 1e-14);
    }

    #[test]
    fn verbose_works() {
        let mut settings = Settings::new();
        settings.verbose = true;
        let rule = GaussLegendre::with_settings(4, &settings).unwrap();
        assert_eq!(rule.n_nodes(), 4);
    }
}
