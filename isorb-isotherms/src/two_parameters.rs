//! Isotherm models defined by two physical constants.
//!
//! The temperature-dependent members (Dubinin–Radushkevich, Temkin) also own
//! a gas constant, which defaults to [`isorb_core::GAS_CONSTANT`] and is not
//! counted as a model coefficient.

mod dubinin_radushkevich;
mod elovich;
mod freundlich;
mod halsey;
mod harkin_jura;
mod jovanovic;
mod langmuir;
mod temkin;

pub use dubinin_radushkevich::DubininRadushkevich;
pub use elovich::Elovich;
pub use freundlich::Freundlich;
pub use halsey::Halsey;
pub use harkin_jura::HarkinJura;
pub use jovanovic::Jovanovic;
pub use langmuir::Langmuir;
pub use temkin::Temkin;
