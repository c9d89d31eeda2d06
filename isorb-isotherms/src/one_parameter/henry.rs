use isorb_core::{CoefficientInfo, Coefficients, ErrorKind, Isotherm, IsothermError, ModelKind};

/// Henry adsorption isotherm: `Qe = K1·Ce`.
///
/// The simplest model in the family, linear in the concentration. Valid for
/// `K1 > 0` and evaluated for `Ce > 0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Henry {
    coefficients: Coefficients<1>,
}

impl Henry {
    const KIND: ModelKind = ModelKind::Henry;

    /// Coefficient metadata, in coefficient order.
    pub const INFO: [CoefficientInfo; 1] =
        [CoefficientInfo::new("K1", "distribution coefficient")];

    /// Builds the model from its distribution coefficient.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::K1NotPositive`] if `k1 <= 0`.
    pub fn new(k1: f64) -> Result<Self, IsothermError> {
        if k1 <= 0.0 {
            return Err(IsothermError::new(
                ErrorKind::K1NotPositive,
                Self::KIND.name(),
            ));
        }

        Ok(Self {
            coefficients: Coefficients::new([k1]),
        })
    }

    #[must_use]
    pub fn k1(&self) -> f64 {
        self.coefficients.get(0)
    }

    /// Returns a revalidated copy with a new `K1`.
    ///
    /// # Errors
    ///
    /// Same contract as [`new`](Self::new).
    pub fn with_k1(&self, k1: f64) -> Result<Self, IsothermError> {
        Self::new(k1)
    }
}

impl Isotherm for Henry {
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

        Ok(self.k1() * ce)
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

    const K1: f64 = 15.0;
    const CE: f64 = 2.0;

    #[test]
    #[allow(clippy::float_cmp)]
    fn default_instance_is_uninitialized() {
        let model = Henry::default();

        assert_eq!(model.k1(), 0.0);
        assert_eq!(model.coefficient_count(), 1);
        assert_eq!(
            model.qe_at(CE).unwrap_err().kind(),
            ErrorKind::UndefinedCoefficients
        );
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn qe_is_linear_in_the_concentration() {
        let model = Henry::new(K1).unwrap();

        assert_eq!(model.qe_at(CE).unwrap(), 30.0);
    }

    #[test]
    fn rejects_a_non_positive_distribution_coefficient() {
        assert_eq!(
            Henry::new(0.0).unwrap_err().kind(),
            ErrorKind::K1NotPositive
        );
        assert_eq!(
            Henry::new(-K1).unwrap_err().kind(),
            ErrorKind::K1NotPositive
        );
    }

    #[test]
    fn rejects_a_non_positive_concentration() {
        let model = Henry::new(K1).unwrap();

        assert_eq!(model.qe_at(0.0).unwrap_err().kind(), ErrorKind::CeNotPositive);
        assert_eq!(model.qe_at(-CE).unwrap_err().kind(), ErrorKind::CeNotPositive);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn setter_revalidates_and_is_idempotent() {
        let model = Henry::new(K1).unwrap();

        let same = model.with_k1(model.k1()).unwrap();
        assert_eq!(same, model);

        assert_eq!(
            model.with_k1(-1.0).unwrap_err().kind(),
            ErrorKind::K1NotPositive
        );
    }

    #[test]
    fn clone_through_the_trait_matches_the_original() {
        let model = Henry::new(K1).unwrap();
        let copy = model.boxed_clone();

        assert_relative_eq!(copy.qe_at(CE).unwrap(), model.qe_at(CE).unwrap());
    }

    #[test]
    fn dqdc_of_a_linear_model_is_its_slope() {
        let model = Henry::new(K1).unwrap();

        assert_relative_eq!(model.dqdc(CE, 0.0).unwrap(), K1, max_relative = 1e-9);
    }
}
