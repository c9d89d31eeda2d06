//! Closed-form adsorption-isotherm models.
//!
//! Each model validates its physical constants at construction and computes
//! the equilibrium sorption quantity `Qe` through the
//! [`Isotherm`](isorb_core::Isotherm) trait. Models are grouped by parameter
//! count, following the family taxonomy of the sorption literature.
//!
//! A model is immutable once built: `with_*` setters return a new, fully
//! revalidated instance instead of mutating in place, so an instance can
//! never be observed holding coefficients that failed validation.

mod support;

pub mod one_parameter;
pub mod registry;
pub mod two_parameters;

pub use one_parameter::Henry;
pub use two_parameters::{
    DubininRadushkevich, Elovich, Freundlich, Halsey, HarkinJura, Jovanovic, Langmuir, Temkin,
};
