/// Configuration for the Newton–Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Iteration cap; exceeding it is a [`NotConverged`](super::Error::NotConverged) error.
    pub max_iters: usize,
    /// Iterations required before the convergence test may pass, guarding
    /// against an accidental stop on a lucky first step.
    pub min_iters: usize,
    /// Tolerance applied to both the residual and the relative step.
    pub tolerance: f64,
    /// Step used by the forward-difference derivative estimate.
    pub derivative_step: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            min_iters: 3,
            tolerance: 1e-6,
            derivative_step: 1e-4,
        }
    }
}

impl Config {
    /// Validates the iteration bounds and tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error message if a tolerance or step is non-finite or not
    /// positive, or if the iteration bounds are inconsistent.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err("tolerance must be finite and positive");
        }
        if !self.derivative_step.is_finite() || self.derivative_step <= 0.0 {
            return Err("derivative_step must be finite and positive");
        }
        if self.min_iters > self.max_iters {
            return Err("min_iters must not exceed max_iters");
        }
        Ok(())
    }
}
