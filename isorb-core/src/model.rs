use crate::{CoefficientInfo, IsothermError, ModelKind};

/// Relative perturbation used by the finite-difference derivative.
const DERIVATIVE_PERTURBATION: f64 = 1e-6;

/// Capability trait implemented by every adsorption-isotherm model.
///
/// A model computes the equilibrium sorption quantity `Qe` from an
/// equilibrium solute concentration `Ce` and, for temperature-dependent
/// models, an absolute temperature. Implementations are immutable after
/// construction: every method takes `&self` and evaluation is a pure
/// function of its inputs, so a shared instance may be read from any number
/// of threads.
///
/// The trait is object-safe. Heterogeneous model collections are held as
/// `Box<dyn Isotherm>`, which is [`Clone`] through
/// [`boxed_clone`](Self::boxed_clone).
///
/// # Example
///
/// ```ignore
/// use isorb_core::Isotherm;
///
/// fn report(model: &dyn Isotherm, ce: f64) -> Result<(), isorb_core::IsothermError> {
///     println!("{} ({} constants)", model.name(), model.coefficient_count());
///     for info in model.coefficient_info() {
///         println!("  {info}");
///     }
///     println!("Qe({ce}) = {}", model.qe_at(ce)?);
///     Ok(())
/// }
/// ```
pub trait Isotherm {
    /// The model's identity in the registry enumeration.
    fn kind(&self) -> ModelKind;

    /// Computes the equilibrium sorption quantity for the given
    /// concentration and temperature.
    ///
    /// Models without a temperature dependence ignore the second argument.
    ///
    /// # Errors
    ///
    /// Returns an [`IsothermError`] if the model is uninitialized or any
    /// input violates the model's physical domain. Invalid input never
    /// silently produces a number.
    fn qe(&self, ce: f64, temperature: f64) -> Result<f64, IsothermError>;

    /// Coefficients of this instance, in metadata order.
    ///
    /// An uninitialized instance reports zeros.
    fn coefficients(&self) -> &[f64];

    /// Symbol and description of each coefficient, in coefficient order.
    fn coefficient_info(&self) -> &'static [CoefficientInfo];

    /// Duplicates the model behind the type-erased interface.
    fn boxed_clone(&self) -> Box<dyn Isotherm>;

    /// The model's display name.
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Computes `Qe` for models where temperature is irrelevant.
    ///
    /// # Errors
    ///
    /// Same contract as [`qe`](Self::qe).
    fn qe_at(&self, ce: f64) -> Result<f64, IsothermError> {
        self.qe(ce, 0.0)
    }

    /// Number of coefficients of the concrete model.
    fn coefficient_count(&self) -> usize {
        self.coefficients().len()
    }

    /// Numeric derivative of `Qe` with respect to the concentration.
    ///
    /// Uses a centered finite difference with a relative perturbation of
    /// `1e-6` of `ce`; at `ce == 0` it falls back to a forward difference
    /// with the same absolute step. This service is derived entirely from
    /// [`qe`](Self::qe), so every model supports slope queries without
    /// implementing any calculus of its own.
    ///
    /// # Errors
    ///
    /// Propagates any [`IsothermError`] from the underlying evaluations.
    fn dqdc(&self, ce: f64, temperature: f64) -> Result<f64, IsothermError> {
        let perturbation = DERIVATIVE_PERTURBATION;

        if ce > 0.0 {
            let upper = self.qe(ce * (1.0 + perturbation), temperature)?;
            let lower = self.qe(ce * (1.0 - perturbation), temperature)?;
            Ok(0.5 * (upper - lower) / (ce * perturbation))
        } else {
            let ahead = self.qe(perturbation, temperature)?;
            let here = self.qe(0.0, temperature)?;
            Ok((ahead - here) / perturbation)
        }
    }
}

impl Clone for Box<dyn Isotherm> {
    fn clone(&self) -> Self {
        self.boxed_clone()
    }
}
