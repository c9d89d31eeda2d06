use isorb_core::{CoefficientInfo, Coefficients, ErrorKind, Isotherm, IsothermError, ModelKind};

use crate::support::clamp;

/// Jovanovic adsorption isotherm: `Qe = Qmax·exp(−K1·Ce)`.
///
/// Valid for `Qmax > 0` and `K1 > 0`, evaluated for `Ce > 0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Jovanovic {
    coefficients: Coefficients<2>,
}

impl Jovanovic {
    const KIND: ModelKind = ModelKind::Jovanovic;

    /// Coefficient metadata, in coefficient order.
    pub const INFO: [CoefficientInfo; 2] = [
        CoefficientInfo::new("Qmax", "maximum adsorption capacity"),
        CoefficientInfo::new("K1", "Jovanovic isotherm constant"),
    ];

    /// Builds the model from its capacity and isotherm constant.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::K1NotPositive`] or
    /// [`ErrorKind::QmaxNotPositive`] when the corresponding constant is not
    /// strictly positive; `K1` is checked first.
    pub fn new(qmax: f64, k1: f64) -> Result<Self, IsothermError> {
        if k1 <= 0.0 {
            return Err(IsothermError::new(
                ErrorKind::K1NotPositive,
                Self::KIND.name(),
            ));
        }
        if qmax <= 0.0 {
            return Err(IsothermError::new(
                ErrorKind::QmaxNotPositive,
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

impl Isotherm for Jovanovic {
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

        Ok(clamp(self.qmax() * (-self.k1() * ce).exp()))
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

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    const QMAX: f64 = 2.0;
    const K1: f64 = std::f64::consts::LN_2;

    #[test]
    #[allow(clippy::float_cmp)]
    fn default_instance_is_uninitialized() {
        let model = Jovanovic::default();

        assert_eq!(model.qmax(), 0.0);
        assert_eq!(model.k1(), 0.0);
        assert_eq!(model.coefficient_count(), 2);
        assert_eq!(
            model.qe_at(1.0).unwrap_err().kind(),
            ErrorKind::UndefinedCoefficients
        );
    }

    #[test]
    fn qe_decays_exponentially() {
        let model = Jovanovic::new(QMAX, K1).unwrap();

        // 2·exp(−ln 2) = 1
        assert_relative_eq!(model.qe_at(1.0).unwrap(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn rejects_non_positive_constants_checking_k1_first() {
        assert_eq!(
            Jovanovic::new(QMAX, 0.0).unwrap_err().kind(),
            ErrorKind::K1NotPositive
        );
        assert_eq!(
            Jovanovic::new(0.0, K1).unwrap_err().kind(),
            ErrorKind::QmaxNotPositive
        );
        // Both invalid: the K1 check wins.
        assert_eq!(
            Jovanovic::new(0.0, 0.0).unwrap_err().kind(),
            ErrorKind::K1NotPositive
        );
    }

    #[test]
    fn rejects_a_non_positive_concentration() {
        let model = Jovanovic::new(QMAX, K1).unwrap();

        assert_eq!(model.qe_at(0.0).unwrap_err().kind(), ErrorKind::CeNotPositive);
        assert_eq!(model.qe_at(-1.0).unwrap_err().kind(), ErrorKind::CeNotPositive);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn deep_decay_clamps_to_exactly_zero() {
        let model = Jovanovic::new(QMAX, K1).unwrap();

        // exp(−ln 2·2048) = 2^−2048 underflows past the clamp floor.
        assert_eq!(model.qe_at(2048.0).unwrap(), 0.0);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn setters_rebuild_and_revalidate() {
        let model = Jovanovic::new(QMAX, K1).unwrap();

        let same = model.with_qmax(model.qmax()).unwrap().with_k1(model.k1()).unwrap();
        assert_eq!(same, model);

        assert_eq!(
            model.with_k1(-1.0).unwrap_err().kind(),
            ErrorKind::K1NotPositive
        );
    }

    #[test]
    fn clone_through_the_trait_matches_the_original() {
        let model = Jovanovic::new(QMAX, K1).unwrap();
        let copy = model.boxed_clone();

        assert_relative_eq!(copy.qe_at(1.0).unwrap(), model.qe_at(1.0).unwrap());
    }
}
