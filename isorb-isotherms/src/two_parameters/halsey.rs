use isorb_core::{CoefficientInfo, Coefficients, ErrorKind, Isotherm, IsothermError, ModelKind};

use crate::support::clamp;

/// Halsey adsorption isotherm: `Qe = (K1/Ce)^(1/K2)`.
///
/// Valid for `K1 > 0` and `K2 > 0`, evaluated for `Ce > 0`. As with
/// [`Freundlich`](crate::Freundlich), the power is checked for overflow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Halsey {
    coefficients: Coefficients<2>,
}

impl Halsey {
    const KIND: ModelKind = ModelKind::Halsey;

    /// Coefficient metadata, in coefficient order.
    pub const INFO: [CoefficientInfo; 2] = [
        CoefficientInfo::new("K1", "Halsey isotherm constant"),
        CoefficientInfo::new("K2", "equilibrium binding constant"),
    ];

    /// Builds the model from its two constants.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::K1NotPositive`] or
    /// [`ErrorKind::K2NotPositive`] when the corresponding constant is not
    /// strictly positive.
    pub fn new(k1: f64, k2: f64) -> Result<Self, IsothermError> {
        if k1 <= 0.0 {
            return Err(IsothermError::new(
                ErrorKind::K1NotPositive,
                Self::KIND.name(),
            ));
        }
        if k2 <= 0.0 {
            return Err(IsothermError::new(
                ErrorKind::K2NotPositive,
                Self::KIND.name(),
            ));
        }

        Ok(Self {
            coefficients: Coefficients::new([k1, k2]),
        })
    }

    #[must_use]
    pub fn k1(&self) -> f64 {
        self.coefficients.get(0)
    }

    #[must_use]
    pub fn k2(&self) -> f64 {
        self.coefficients.get(1)
    }

    /// Returns a revalidated copy with a new `K1`.
    ///
    /// # Errors
    ///
    /// Same contract as [`new`](Self::new).
    pub fn with_k1(&self, k1: f64) -> Result<Self, IsothermError> {
        Self::new(k1, self.k2())
    }

    /// Returns a revalidated copy with a new `K2`.
    ///
    /// # Errors
    ///
    /// Same contract as [`new`](Self::new).
    pub fn with_k2(&self, k2: f64) -> Result<Self, IsothermError> {
        Self::new(self.k1(), k2)
    }
}

impl Isotherm for Halsey {
    fn kind(&self) -> ModelKind {
        Self::KIND
    }

    fn qe(&self, ce: f64, _temperature: f64) -> Result<f64, IsothermError> {
        if !self.coefficients.is_ready() {
            return Err(IsothermError::new(
                ErrorKind::UndefinedCoefficients,
                Self::KIND.name(),
            ));
        }
        if ce <= 0.0 {
            return Err(IsothermError::new(
                ErrorKind::CeNotPositive,
                Self::KIND.name(),
            ));
        }

        let value = (self.k1() / ce).powf(1.0 / self.k2());
        if value.is_infinite() {
            return Err(IsothermError::new(ErrorKind::Overflow, Self::KIND.name())
                .detail(format!("K1/Ce = {}, 1/K2 = {}", self.k1() / ce, 1.0 / self.k2())));
        }

        Ok(clamp(value))
    }

    fn coefficients(&self) -> &[f64] {
        self.coefficients.as_slice()
    }

    fn coefficient_info(&self) -> &'static [CoefficientInfo] {
        &Self::INFO
    }

    fn boxed_clone(&self) -> Box<dyn Isotherm> {
        Box::new(self.clone())
    }
}
