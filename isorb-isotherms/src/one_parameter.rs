//! Isotherm models defined by a single physical constant.

mod henry;

pub use henry::Henry;
