use isorb_core::{CoefficientInfo, Coefficients, ErrorKind, Isotherm, IsothermError, ModelKind};

use crate::support::clamp;

/// Harkin–Jura adsorption isotherm: `Qe = sqrt(K1 / (K2 − log10(Ce)))`.
///
/// Valid for `K1 > 0` and `K2 ≥ 0` (zero is allowed for `K2`, unusually for
/// the family). Evaluated for `Ce > 0`, and additionally requires
/// `log10(Ce) ≤ K2`: beyond that the radicand turns negative and the model
/// has no real value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HarkinJura {
    coefficients: Coefficients<2>,
}

impl HarkinJura {
    const KIND: ModelKind = ModelKind::HarkinJura;

    /// Coefficient metadata, in coefficient order.
    pub const INFO: [CoefficientInfo; 2] = [
        CoefficientInfo::new("K1", "Harkin-Jura isotherm constant"),
        CoefficientInfo::new("K2", "Harkin-Jura isotherm constant"),
    ];

    /// Builds the model from its two constants.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::K1NotPositive`] if `k1 <= 0`, or
    /// [`ErrorKind::K2Negative`] if `k2 < 0`.
    pub fn new(k1: f64, k2: f64) -> Result<Self, IsothermError> {
        if k1 <= 0.0 {
            return Err(IsothermError::new(
                ErrorKind::K1NotPositive,
                Self::KIND.name(),
            ));
        }
        if k2 < 0.0 {
            return Err(IsothermError::new(ErrorKind::K2Negative, Self::KIND.name()));
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

impl Isotherm for HarkinJura {
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

        let log_ce = ce.log10();
        if log_ce > self.k2() {
            return Err(IsothermError::new(
                ErrorKind::LogCeAboveK2,
                Self::KIND.name(),
            )
            .detail(format!("Ce = {ce}, K2 = {}", self.k2()))
            .detail(format!("log10(Ce) = {log_ce}")));
        }

        Ok(clamp((self.k1() / (self.k2() - log_ce)).sqrt()))
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
