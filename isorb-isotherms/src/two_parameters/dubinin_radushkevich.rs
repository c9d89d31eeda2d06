use isorb_core::{
    CoefficientInfo, Coefficients, ErrorKind, GAS_CONSTANT, Isotherm, IsothermError, ModelKind,
};

use crate::support::clamp;

/// Dubinin–Radushkevich adsorption isotherm.
///
/// `Qe = Qmax·exp(−K1·ε²)` with the Polanyi potential
/// `ε = Rgas·T·ln(1 + 1/Ce)`. Valid for `Qmax > 0` and `K1 > 0`, evaluated
/// for `Ce > 0` and `T > 0`.
///
/// The gas constant is a property of the instance, not a model coefficient:
/// it defaults to [`GAS_CONSTANT`] and can be overridden for other unit
/// systems via [`with_gas_constant`](Self::with_gas_constant).
#[derive(Debug, Clone, PartialEq)]
pub struct DubininRadushkevich {
    coefficients: Coefficients<2>,
    rgas: f64,
}

impl DubininRadushkevich {
    const KIND: ModelKind = ModelKind::DubininRadushkevich;

    /// Coefficient metadata, in coefficient order.
    pub const INFO: [CoefficientInfo; 2] = [
        CoefficientInfo::new("Qmax", "Dubinin-Radushkevich equilibrium constant"),
        CoefficientInfo::new("K1", "coefficient associated with the adsorption energy"),
    ];

    /// Builds the model with the default gas constant.
    ///
    /// # Errors
    ///
    /// Same contract as [`with_gas_constant`](Self::with_gas_constant).
    pub fn new(qmax: f64, k1: f64) -> Result<Self, IsothermError> {
        Self::with_gas_constant(qmax, k1, GAS_CONSTANT)
    }

    /// Builds the model with an explicit gas constant.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::QmaxNotPositive`],
    /// [`ErrorKind::K1NotPositive`], or
    /// [`ErrorKind::GasConstantNotPositive`] when the corresponding value is
    /// not strictly positive.
    pub fn with_gas_constant(qmax: f64, k1: f64, rgas: f64) -> Result<Self, IsothermError> {
        if qmax <= 0.0 {
            return Err(IsothermError::new(
                ErrorKind::QmaxNotPositive,
                Self::KIND.name(),
            ));
        }
        if k1 <= 0.0 {
            return Err(IsothermError::new(
                ErrorKind::K1NotPositive,
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
            coefficients: Coefficients::new([qmax, k1]),
            rgas,
        })
    }

    #[must_use]
    pub fn qmax(&self) -> f64 {
        self.coefficients.get(0)
    }

    #[must_use]
    pub fn k1(&self) -> f64 {
        self.coefficients.get(1)
    }

    #[must_use]
    pub fn rgas(&self) -> f64 {
        self.rgas
    }

    /// Returns a revalidated copy with a new `Qmax`.
    ///
    /// # Errors
    ///
    /// Same contract as [`with_gas_constant`](Self::with_gas_constant).
    pub fn with_qmax(&self, qmax: f64) -> Result<Self, IsothermError> {
        Self::with_gas_constant(qmax, self.k1(), self.rgas)
    }

    /// Returns a revalidated copy with a new `K1`.
    ///
    /// # Errors
    ///
    /// Same contract as [`with_gas_constant`](Self::with_gas_constant).
    pub fn with_k1(&self, k1: f64) -> Result<Self, IsothermError> {
        Self::with_gas_constant(self.qmax(), k1, self.rgas)
    }

    /// Returns a revalidated copy with a new gas constant.
    ///
    /// # Errors
    ///
    /// Same contract as [`with_gas_constant`](Self::with_gas_constant).
    pub fn with_rgas(&self, rgas: f64) -> Result<Self, IsothermError> {
        Self::with_gas_constant(self.qmax(), self.k1(), rgas)
    }
}

impl Default for DubininRadushkevich {
    /// The uninitialized state: zeroed coefficients, default gas constant.
    fn default() -> Self {
        Self {
            coefficients: Coefficients::default(),
            rgas: GAS_CONSTANT,
        }
    }
}

impl Isotherm for DubininRadushkevich {
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

        let eps = self.rgas * temperature * (1.0 + 1.0 / ce).ln();
        Ok(clamp(self.qmax() * (-self.k1() * eps * eps).exp()))
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
