//! Numerical solvers for the Isorb model family.
//!
//! Currently a single algorithm lives here: the fixed-step Newton–Raphson
//! iteration in [`newton`], used by models whose `Qe` has no closed form.

pub mod newton;
