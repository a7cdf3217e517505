/// Holds options for the Newton-Raphson refinement of the Gauss-Legendre nodes
#[derive(Clone, Copy, Debug)]
pub struct Settings {
    /// Tolerance on the maximum absolute change of the nodes between iterations
    pub tolerance: f64,

    /// Maximum number of iterations
    pub n_iteration_max: usize,

    /// Prints the iterations
    pub verbose: bool,
}

impl Settings {
    /// Allocates a new instance
    pub fn new() -> Self {
        Settings {
            tolerance: f64::EPSILON,
            n_iteration_max: 100,
            verbose: false,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
