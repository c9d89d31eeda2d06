//! Core abstractions for adsorption-isotherm modeling.
//!
//! This crate defines the polymorphic [`Isotherm`] trait implemented by every
//! concrete model, the shared [`Coefficients`] storage, per-coefficient
//! [`CoefficientInfo`] metadata, the [`ModelKind`] registry enumeration, and
//! the structured [`IsothermError`] returned whenever an input violates a
//! model's physical domain.

mod coefficients;
mod error;
mod kind;
mod metadata;
mod model;

pub use coefficients::Coefficients;
pub use error::{ErrorKind, IsothermError};
pub use kind::ModelKind;
pub use metadata::CoefficientInfo;
pub use model::Isotherm;

/// The universal gas constant, in J·mol⁻¹·K⁻¹.
///
/// Temperature-dependent models use this as their default gas constant;
/// callers working in other unit systems may supply their own value at
/// construction time.
pub const GAS_CONSTANT: f64 = 8.314_462_618_153_24;
