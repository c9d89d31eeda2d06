use isorb_core::{CoefficientInfo, Coefficients, ErrorKind, Isotherm, IsothermError, ModelKind};

use crate::support::clamp;

/// Langmuir adsorption isotherm: `Qe = Qmax·K1·Ce / (1 + K1·Ce)`.
///
/// Saturates toward `Qmax` at high concentration. Valid for `Qmax > 0` and
/// `K1 > 0`, evaluated for `Ce > 0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Langmuir {
    coefficients: Coefficients<2>,
}

impl Langmuir {
    const KIND: ModelKind = ModelKind::Langmuir;

    /// Coefficient metadata, in coefficient order.
    pub const INFO: [CoefficientInfo; 2] = [
        CoefficientInfo::new("Qmax", "maximum adsorption capacity"),
        CoefficientInfo::new("K1", "Langmuir equilibrium constant"),
    ];

    /// Builds the model from its capacity and equilibrium constant.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::QmaxNotPositive`] or
    /// [`ErrorKind::K1NotPositive`] when the corresponding constant is not
    /// strictly positive.
    pub fn new(qmax: f64, k1: f64) -> Result<Self, IsothermError> {
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

        Ok(Self {
            coefficients: Coefficients::new([qmax, k1]),
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

    /// Returns a revalidated copy with a new `Qmax`.
    ///
    /// # Errors
    ///
    /// Same contract as [`new`](Self::new).
    pub fn with_qmax(&self, qmax: f64) -> Result<Self, IsothermError> {
        Self::new(qmax, self.k1())
    }

    /// Returns a revalidated copy with a new `K1`.
    ///
    /// # Errors
    ///
    /// Same contract as [`new`](Self::new).
    pub fn with_k1(&self, k1: f64) -> Result<Self, IsothermError> {
        Self::new(self.qmax(), k1)
    }
}

impl Isotherm for Langmuir {
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
        // Zero is rejected with the strictly-negative kind; the historical
        // boundary rule for this model.
        if ce <= 0.0 {
            return Err(IsothermError::new(ErrorKind::CeNegative, Self::KIND.name()));
        }

        let auxi = self.k1() * ce;
        Ok(clamp(self.qmax() * auxi / (1.0 + auxi)))
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
