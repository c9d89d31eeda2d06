use thiserror::Error;

/// Errors that can occur during Newton–Raphson solving.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("initial guess is not finite: {value}")]
    NonFiniteGuess { value: f64 },

    #[error("non-finite iterate {x} after {iters} iterations")]
    NonFiniteIterate { x: f64, iters: usize },

    #[error("no convergence after {iters} iterations: x = {x}, residual = {residual}")]
    NotConverged { iters: usize, x: f64, residual: f64 },
}
