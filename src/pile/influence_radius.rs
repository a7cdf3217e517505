/// Calculates the radial distance beyond which the shear distortion around a pile is negligible
///
/// ```text
/// rm = 2 H (1 - ν)
/// ```
///
/// * `hh` -- embedded length of the pile (or thickness of the layer)
/// * `poisson` -- Poisson's coefficient of the soil
pub fn influence_radius(hh: f64, poisson: f64) -> f64 {
    2.0 * hh * (1.0 - poisson)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::influence_radius;
    use russell_chk::approx_eq;

    #[test]
    fn influence_radius_works() {
        assert_eq!(influence_radius(10.0, 0.0), 20.0);
        assert_eq!(influence_radius(10.0, 0.5), 10.0);
        approx_eq(influence_radius(3.048, 0.32), 4.14528, 1e-14);
    }
}
