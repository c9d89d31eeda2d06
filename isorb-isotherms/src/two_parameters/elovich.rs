use isorb_core::{CoefficientInfo, Coefficients, ErrorKind, Isotherm, IsothermError, ModelKind};
use isorb_solve::newton;

use crate::support::clamp;

/// Initial guess for the surface-coverage iteration.
const THETA_GUESS: f64 = 0.5;

/// Elovich adsorption isotherm.
///
/// The only model in the family without a closed-form `Qe`: the surface
/// coverage `θ` satisfies the implicit equation `θ = K1·Ce·e^(−θ)`, which is
/// solved by Newton–Raphson iteration before scaling by the capacity,
/// `Qe = Qmax·θ`. Valid for `Qmax > 0` and `K1 > 0`, evaluated for `Ce > 0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Elovich {
    coefficients: Coefficients<2>,
}

impl Elovich {
    const KIND: ModelKind = ModelKind::Elovich;

    /// Coefficient metadata, in coefficient order.
    pub const INFO: [CoefficientInfo; 2] = [
        CoefficientInfo::new("Qmax", "maximum adsorption capacity"),
        CoefficientInfo::new("K1", "Elovich isotherm constant"),
    ];

    /// Builds the model from its capacity and isotherm constant.
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

impl Isotherm for Elovich {
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

        let product = ce * self.k1();
        let residual = move |theta: f64| theta - product * (-theta).exp();
        let solution = newton::solve(residual, THETA_GUESS, &newton::Config::default())
            .map_err(|error| {
                IsothermError::new(ErrorKind::NoConvergence, Self::KIND.name())
                    .detail(error.to_string())
            })?;

        Ok(clamp(solution.root * self.qmax()))
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
