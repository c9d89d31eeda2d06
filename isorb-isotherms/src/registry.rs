//! Metadata lookup by model identity.

use isorb_core::{CoefficientInfo, ModelKind};

use crate::{
    DubininRadushkevich, Elovich, Freundlich, Halsey, HarkinJura, Henry, Jovanovic, Langmuir,
    Temkin,
};

/// Returns the coefficient metadata table for the given model kind.
///
/// The table is the same `const` data the model type itself exposes through
/// [`Isotherm::coefficient_info`](isorb_core::Isotherm::coefficient_info);
/// this lookup serves code that only has a [`ModelKind`] in hand.
#[must_use]
pub fn info_for(kind: ModelKind) -> &'static [CoefficientInfo] {
    match kind {
        ModelKind::Henry => &Henry::INFO,
        ModelKind::DubininRadushkevich => &DubininRadushkevich::INFO,
        ModelKind::Elovich => &Elovich::INFO,
        ModelKind::Freundlich => &Freundlich::INFO,
        ModelKind::HarkinJura => &HarkinJura::INFO,
        ModelKind::Halsey => &Halsey::INFO,
        ModelKind::Jovanovic => &Jovanovic::INFO,
        ModelKind::Langmuir => &Langmuir::INFO,
        ModelKind::Temkin => &Temkin::INFO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_table() {
        for kind in ModelKind::ALL {
            let info = info_for(kind);
            assert!(!info.is_empty(), "{}", kind.name());
            for entry in info {
                assert!(!entry.symbol.is_empty());
                assert!(!entry.description.is_empty());
            }
        }
    }

    #[test]
    fn symbols_follow_the_family_conventions() {
        assert_eq!(info_for(ModelKind::Henry)[0].symbol, "K1");
        assert_eq!(info_for(ModelKind::Langmuir)[0].symbol, "Qmax");
        assert_eq!(info_for(ModelKind::Temkin)[1].symbol, "K2");
    }
}
