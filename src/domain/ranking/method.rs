//! Method - the closed set of ranking methods, selectable by name.

use super::{
    FullMultiplicativeFormMOORA, MultiMOORA, RankResult, RankingMethod, RatioMOORA,
    ReferencePointMOORA, WeightedProductModel, WeightedSumModel, ELECTRE1, SIMUS, TOPSIS,
};
use crate::config::EngineConfig;
use crate::domain::decision_matrix::DecisionMatrix;
use crate::domain::foundation::{McdaError, McdaResult};

/// Every ranking method the engine offers.
#[derive(Debug, Clone, PartialEq)]
pub enum Method {
    WeightedSum(WeightedSumModel),
    WeightedProduct(WeightedProductModel),
    Ratio(RatioMOORA),
    ReferencePoint(ReferencePointMOORA),
    FullMultiplicativeForm(FullMultiplicativeFormMOORA),
    MultiMoora(MultiMOORA),
    Topsis(TOPSIS),
    Electre1(ELECTRE1),
    Simus(SIMUS),
}

impl Method {
    /// Short names accepted by [`from_name`](Self::from_name), in declaration order.
    pub const NAMES: [&'static str; 9] = [
        "wsm",
        "wpm",
        "ratio",
        "refpoint",
        "fmf",
        "multimoora",
        "topsis",
        "electre1",
        "simus",
    ];

    /// Builds a method from its short or full name, case-insensitively,
    /// taking parameters from the configuration.
    ///
    /// # Errors
    ///
    /// `UnknownMethod` for an unrecognized name; `InvalidValue` if the
    /// configured SIMUS `rank_by` is out of range.
    pub fn from_name(name: &str, config: &EngineConfig) -> McdaResult<Self> {
        let method = match name.to_lowercase().as_str() {
            "wsm" | "weightedsummodel" => Method::WeightedSum(WeightedSumModel),
            "wpm" | "weightedproductmodel" => Method::WeightedProduct(WeightedProductModel),
            "ratio" | "ratiomoora" => Method::Ratio(RatioMOORA),
            "refpoint" | "referencepointmoora" => Method::ReferencePoint(ReferencePointMOORA),
            "fmf" | "fullmultiplicativeformmoora" => {
                Method::FullMultiplicativeForm(FullMultiplicativeFormMOORA)
            }
            "multimoora" => Method::MultiMoora(MultiMOORA),
            "topsis" => Method::Topsis(TOPSIS::from_config(&config.topsis)),
            "electre1" => Method::Electre1(ELECTRE1::from_config(&config.electre)),
            "simus" => Method::Simus(SIMUS::from_config(&config.simus)?),
            _ => return Err(McdaError::unknown_method(name)),
        };
        Ok(method)
    }

    fn inner(&self) -> &dyn RankingMethod {
        match self {
            Method::WeightedSum(m) => m,
            Method::WeightedProduct(m) => m,
            Method::Ratio(m) => m,
            Method::ReferencePoint(m) => m,
            Method::FullMultiplicativeForm(m) => m,
            Method::MultiMoora(m) => m,
            Method::Topsis(m) => m,
            Method::Electre1(m) => m,
            Method::Simus(m) => m,
        }
    }
}

impl RankingMethod for Method {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn rank(&self, dm: &DecisionMatrix) -> McdaResult<RankResult> {
        self.inner().rank(dm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::ranking::{Metric, RankBy};

    #[test]
    fn every_short_name_resolves() {
        let config = EngineConfig::default();
        let names: Vec<&str> = Method::NAMES
            .iter()
            .map(|n| Method::from_name(n, &config).unwrap().name())
            .collect();
        assert_eq!(
            names,
            vec![
                "WeightedSumModel",
                "WeightedProductModel",
                "RatioMOORA",
                "ReferencePointMOORA",
                "FullMultiplicativeFormMOORA",
                "MultiMOORA",
                "TOPSIS",
                "ELECTRE1",
                "SIMUS",
            ]
        );
    }

    #[test]
    fn full_names_are_case_insensitive() {
        let config = EngineConfig::default();
        let method = Method::from_name("ReferencePointMOORA", &config).unwrap();
        assert_eq!(method, Method::ReferencePoint(ReferencePointMOORA));
    }

    #[test]
    fn parameters_come_from_config() {
        let mut config = EngineConfig::default();
        config.electre.p = 0.8;
        config.topsis.metric = Metric::Chebyshev;
        config.simus.rank_by = 2;

        assert_eq!(
            Method::from_name("electre1", &config).unwrap(),
            Method::Electre1(ELECTRE1::new(0.8, 0.35))
        );
        assert_eq!(
            Method::from_name("topsis", &config).unwrap(),
            Method::Topsis(TOPSIS::new(Metric::Chebyshev))
        );
        match Method::from_name("simus", &config).unwrap() {
            Method::Simus(simus) => assert_eq!(simus.rank_by, RankBy::SecondMethod),
            other => panic!("expected SIMUS, got {:?}", other),
        }
    }

    #[test]
    fn unknown_name_fails() {
        let err = Method::from_name("promethee", &EngineConfig::default()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnknownMethod);
        assert!(err.to_string().contains("promethee"));
    }
}
