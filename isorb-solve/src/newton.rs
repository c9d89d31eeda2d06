mod config;
mod error;
mod solution;

pub use config::Config;
pub use error::Error;
pub use solution::Solution;

/// Finds a root of `f` by fixed-step Newton–Raphson iteration.
///
/// The derivative is estimated with a forward difference of width
/// [`Config::derivative_step`]. Convergence requires the residual and the
/// relative step to both fall below [`Config::tolerance`], and is only
/// accepted after [`Config::min_iters`] iterations; hitting
/// [`Config::max_iters`] first fails the call, it never returns an
/// unconverged iterate.
///
/// Models with implicit equations call this with a closure capturing their
/// fixed parameters, leaving the unknown as the closure argument.
///
/// # Errors
///
/// Returns an error if the config or guess is invalid, an iterate stops
/// being finite, or the iteration cap is reached without convergence.
pub fn solve<F>(f: F, guess: f64, config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    if !guess.is_finite() {
        return Err(Error::NonFiniteGuess { value: guess });
    }

    let mut x0 = guess;
    let mut iters = 0usize;

    loop {
        let fx = f(x0);
        let dfx = (f(x0 + config.derivative_step) - fx) / config.derivative_step;
        let x1 = x0 - fx / dfx;

        if !x1.is_finite() {
            return Err(Error::NonFiniteIterate { x: x1, iters });
        }

        let step = ((x1 - x0) / x1).abs();
        x0 = x1;

        let converged =
            fx.abs() < config.tolerance && step < config.tolerance && iters >= config.min_iters;
        iters += 1;
        let exhausted = iters > config.max_iters;

        if exhausted {
            return Err(Error::NotConverged {
                iters,
                x: x1,
                residual: fx,
            });
        }
        if converged {
            return Ok(Solution {
                root: x1,
                residual: fx,
                iters,
            });
        }
    }
}
