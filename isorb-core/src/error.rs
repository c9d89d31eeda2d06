use std::fmt;
use std::panic::Location;

use thiserror::Error;

/// The closed set of domain violations and numerical failures an isotherm
/// evaluation can report.
///
/// The vocabulary is shared by the whole model family; kinds referring to
/// constants a given model does not have (`K3`, `K4`, …) belong to models
/// with larger parameter counts and are never produced by the two-parameter
/// family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("isotherm coefficients are undefined")]
    UndefinedCoefficients,
    #[error("equilibrium concentration must be greater than zero")]
    CeNotPositive,
    #[error("equilibrium concentration must not be negative")]
    CeNegative,
    #[error("equilibrium concentration must be less than one")]
    CeNotBelowOne,
    #[error("equilibrium concentration must be less than K2")]
    CeNotBelowK2,
    #[error("K1 must be greater than zero")]
    K1NotPositive,
    #[error("K1 must not be negative")]
    K1Negative,
    #[error("K2 must be greater than zero")]
    K2NotPositive,
    #[error("K2 must not be negative")]
    K2Negative,
    #[error("K3 must be greater than zero")]
    K3NotPositive,
    #[error("K3 must not be negative")]
    K3Negative,
    #[error("K4 must be greater than zero")]
    K4NotPositive,
    #[error("K4 must not be negative")]
    K4Negative,
    #[error("K1 must be at least one")]
    K1BelowOne,
    #[error("K2 must be greater than one")]
    K2NotAboveOne,
    #[error("K3 must not exceed one")]
    K3AboveOne,
    #[error("K3 must be less than one")]
    K3NotBelowOne,
    #[error("Qmax must be greater than zero")]
    QmaxNotPositive,
    #[error("temperature must be greater than zero")]
    TemperatureNotPositive,
    #[error("universal gas constant must be greater than zero")]
    GasConstantNotPositive,
    #[error("result is inconsistent for the model")]
    InconsistentResult,
    #[error("floating-point overflow in a model evaluation")]
    Overflow,
    #[error("log10 of the concentration exceeds K2")]
    LogCeAboveK2,
    #[error("iterative method failed to converge")]
    NoConvergence,
    #[error("theta must be less than one")]
    ThetaNotBelowOne,
    #[error("theta must be greater than zero")]
    ThetaNotPositive,
    #[error("K1 times the concentration must exceed one")]
    KCeNotAboveOne,
}

/// A domain violation reported by an isotherm constructor or evaluation.
///
/// Carries the [`ErrorKind`], the name of the model that rejected the input,
/// the source location where the error was raised, and up to two free-text
/// detail lines. The caller can always distinguish a valid numeric result
/// from a domain violation and recover the triggering condition from
/// [`kind`](Self::kind).
#[derive(Debug, Clone)]
pub struct IsothermError {
    kind: ErrorKind,
    model: &'static str,
    location: &'static Location<'static>,
    details: Vec<String>,
}

impl IsothermError {
    /// Creates an error of the given kind, capturing the caller's source
    /// location.
    #[must_use]
    #[track_caller]
    pub fn new(kind: ErrorKind, model: &'static str) -> Self {
        Self {
            kind,
            model,
            location: Location::caller(),
            details: Vec::new(),
        }
    }

    /// Attaches a free-text context line.
    #[must_use]
    pub fn detail(mut self, line: impl Into<String>) -> Self {
        self.details.push(line.into());
        self
    }

    /// The kind of domain violation.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Name of the model that rejected the input.
    #[must_use]
    pub fn model(&self) -> &'static str {
        self.model
    }

    /// Source location where the error was raised.
    #[must_use]
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Context lines attached with [`detail`](Self::detail).
    #[must_use]
    pub fn details(&self) -> &[String] {
        &self.details
    }
}

impl fmt::Display for IsothermError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error:  {}", self.kind)?;
        writeln!(f, "model:  {}", self.model)?;
        writeln!(f, "file:   {}", self.location.file())?;
        write!(f, "line:   {}", self.location.line())?;
        for line in &self.details {
            write!(f, "\nnote:   {line}")?;
        }
        Ok(())
    }
}

impl std::error::Error for IsothermError {}
