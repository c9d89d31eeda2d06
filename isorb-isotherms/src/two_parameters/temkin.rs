use isorb_core::{
    CoefficientInfo, Coefficients, ErrorKind, GAS_CONSTANT, Isotherm, IsothermError, ModelKind,
};

use crate::support::clamp;

/// Temkin adsorption isotherm: `Qe = Rgas·T·ln(K1·Ce) / K2`.
///
/// Valid for `K1 > 0` and `K2 > 0`, evaluated for `Ce > 0`, `T > 0`, and the
/// joint condition `K1·Ce > 1`; below it the logarithm argument leaves the
/// physical range of the model.
///
/// Like [`DubininRadushkevich`](crate::DubininRadushkevich), the gas
/// constant is instance state defaulting to [`GAS_CONSTANT`], not a model
/// coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct Temkin {
    coefficients: Coefficients<2>,
    rgas: f64,
}

impl Temkin {
    const KIND: ModelKind = ModelKind::Temkin;

    /// Coefficient metadata, in coefficient order.
    pub const INFO: [CoefficientInfo; 2] = [
        CoefficientInfo::new("K1", "Temkin isotherm constant"),
        CoefficientInfo::new("K2", "equilibrium binding constant"),
    ];

    /// Builds the model with the default gas constant.
    ///
    /// # Errors
    ///
    /// Same contract as [`with_gas_constant`](Self::with_gas_constant).
    pub fn new(k1: f64, k2: f64) -> Result<Self, IsothermError> {
        Self::with_gas_constant(k1, k2, GAS_CONSTANT)
    }

    /// Builds the model with an explicit gas constant.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::K1NotPositive`], [`ErrorKind::K2NotPositive`],
    /// or [`ErrorKind::GasConstantNotPositive`] when the corresponding value
    /// is not strictly positive.
    pub fn with_gas_constant(k1: f64, k2: f64, rgas: f64) -> Result<Self, IsothermError> {
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
        if rgas <= 0.0 {
            return Err(IsothermError::new(
                ErrorKind::GasConstantNotPositive,
                Self::KIND.name(),
            ));
        }

        Ok(Self {
            coefficients: Coefficients::new([k1, k2]),
            rgas,
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

    #[must_use]
    pub fn rgas(&self) -> f64 {
        self.rgas
    }

    /// Returns a revalidated copy with a new `K1`.
    ///
    /// # Errors
    ///
    /// Same contract as [`with_gas_constant`](Self::with_gas_constant).
    pub fn with_k1(&self, k1: f64) -> Result<Self, IsothermError> {
        Self::with_gas_constant(k1, self.k2(), self.rgas)
    }

    /// Returns a revalidated copy with a new `K2`.
    ///
    /// # Errors
    ///
    /// Same contract as [`with_gas_constant`](Self::with_gas_constant).
    pub fn with_k2(&self, k2: f64) -> Result<Self, IsothermError> {
        Self::with_gas_constant(self.k1(), k2, self.rgas)
    }

    /// Returns a revalidated copy with a new gas constant.
    ///
    /// # Errors
    ///
    /// Same contract as [`with_gas_constant`](Self::with_gas_constant).
    pub fn with_rgas(&self, rgas: f64) -> Result<Self, IsothermError> {
        Self::with_gas_constant(self.k1(), self.k2(), rgas)
    }
}

impl Default for Temkin {
    /// The uninitialized state: zeroed coefficients, default gas constant.
    fn default() -> Self {
        Self {
            coefficients: Coefficients::default(),
            rgas: GAS_CONSTANT,
        }
    }
}

impl Isotherm for Temkin {
    fn kind(&self) -> ModelKind {
        Self::KIND
    }

    fn qe(&self, ce: f64, temperature: f64) -> Result<f64, IsothermError> {
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
        if temperature <= 0.0 {
            return Err(IsothermError::new(
                ErrorKind::TemperatureNotPositive,
                Self::KIND.name(),
            ));
        }
        if ce * self.k1() <= 1.0 {
            return Err(IsothermError::new(
                ErrorKind::KCeNotAboveOne,
                Self::KIND.name(),
            ));
        }

        let value = self.rgas * temperature * (ce * self.k1()).ln() / self.k2();
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
