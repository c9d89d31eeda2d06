use isorb_core::{CoefficientInfo, Coefficients, ErrorKind, Isotherm, IsothermError, ModelKind};

use crate::support::clamp;

/// Freundlich adsorption isotherm: `Qe = K1·Ce^(1/K2)`.
///
/// Valid for `K1 > 0` and `K2 > 0`. Unlike most of the family this model
/// accepts `Ce = 0` (where `Qe` is zero) and rejects only negative
/// concentrations. The exponentiation is checked for overflow, since small
/// `K2` values turn moderate concentrations into enormous powers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Freundlich {
    coefficients: Coefficients<2>,
    inv_k2: f64,
}

impl Freundlich {
    const KIND: ModelKind = ModelKind::Freundlich;

    /// Coefficient metadata, in coefficient order.
    pub const INFO: [CoefficientInfo; 2] = [
        CoefficientInfo::new("K1", "distribution coefficient"),
        CoefficientInfo::new("K2", "correction factor"),
    ];

    /// Builds the model from its distribution coefficient and correction
    /// factor.
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
            inv_k2: 1.0 / k2,
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

impl Isotherm for Freundlich {
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
        if ce < 0.0 {
            return Err(IsothermError::new(ErrorKind::CeNegative, Self::KIND.name()));
        }

        let power = ce.powf(self.inv_k2);
        if power.is_infinite() {
            return Err(IsothermError::new(ErrorKind::Overflow, Self::KIND.name())
                .detail(format!("Ce = {ce}, 1/K2 = {}", self.inv_k2)));
        }

        Ok(clamp(self.k1() * power))
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

    const K1: f64 = 4.0;
    const K2: f64 = 2.0;

    #[test]
    #[allow(clippy::float_cmp)]
    fn default_instance_is_uninitialized() {
        let model = Freundlich::default();

        assert_eq!(model.k1(), 0.0);
        assert_eq!(model.k2(), 0.0);
        assert_eq!(model.coefficient_count(), 2);
        assert_eq!(
            model.qe_at(1.0).unwrap_err().kind(),
            ErrorKind::UndefinedCoefficients
        );
    }

    #[test]
    fn qe_follows_the_power_law() {
        let model = Freundlich::new(K1, K2).unwrap();

        // 4·9^(1/2) = 12
        assert_relative_eq!(model.qe_at(9.0).unwrap(), 12.0, max_relative = 1e-12);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn zero_concentration_is_inside_the_domain() {
        let model = Freundlich::new(K1, K2).unwrap();

        assert_eq!(model.qe_at(0.0).unwrap(), 0.0);
        assert_eq!(model.qe_at(-1.0).unwrap_err().kind(), ErrorKind::CeNegative);
    }

    #[test]
    fn rejects_non_positive_constants() {
        assert_eq!(
            Freundlich::new(0.0, K2).unwrap_err().kind(),
            ErrorKind::K1NotPositive
        );
        assert_eq!(
            Freundlich::new(K1, 0.0).unwrap_err().kind(),
            ErrorKind::K2NotPositive
        );
        assert_eq!(
            Freundlich::new(K1, -K2).unwrap_err().kind(),
            ErrorKind::K2NotPositive
        );
    }

    #[test]
    fn detects_overflow_of_the_power() {
        // 1/K2 = 1000, so Ce = 1e10 would be 1e10000.
        let model = Freundlich::new(1.0, 1.0e-3).unwrap();

        let error = model.qe_at(1.0e10).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Overflow);
        assert!(!error.details().is_empty());
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn setters_rebuild_and_revalidate() {
        let model = Freundlich::new(K1, K2).unwrap();

        let same = model.with_k1(model.k1()).unwrap().with_k2(model.k2()).unwrap();
        assert_eq!(same, model);

        assert_eq!(
            model.with_k2(-1.0).unwrap_err().kind(),
            ErrorKind::K2NotPositive
        );
    }

    #[test]
    fn clone_through_the_trait_matches_the_original() {
        let model = Freundlich::new(K1, K2).unwrap();
        let copy = model.boxed_clone();

        assert_relative_eq!(copy.qe_at(9.0).unwrap(), model.qe_at(9.0).unwrap());
    }
}
