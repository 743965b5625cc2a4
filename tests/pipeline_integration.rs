//! Integration tests for composing transformers and ranking methods through
//! the public API.

use approx::assert_abs_diff_eq;

use mcda_engine::config::EngineConfig;
use mcda_engine::domain::decision_matrix::DecisionTable;
use mcda_engine::domain::foundation::ErrorCode;
use mcda_engine::domain::preprocessing::{
    AddValueToZero, CenitDistance, Critic, EntropyWeighter, MinimizeToMaximize, PushNegatives,
    SumScaler, VectorScaler,
};
use mcda_engine::domain::ranking::{WeightedProductModel, WeightedSumModel, ELECTRE1};
use mcda_engine::{
    mkdm, DecisionMatrix, Method, Objective, Pipeline, RankingMethod, Target, Transformer,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Cars scored on price (min), consumption (min), power (max) and comfort (max).
fn cars() -> DecisionMatrix {
    mkdm(
        vec![
            vec![22_000.0, 6.5, 110.0, 7.0],
            vec![18_500.0, 5.2, 90.0, 6.0],
            vec![27_000.0, 7.8, 150.0, 9.0],
            vec![24_000.0, 5.9, 120.0, 8.0],
        ],
        vec!["min", "min", "max", "max"],
        Some(vec![0.4, 0.2, 0.2, 0.2]),
        Some(vec!["hatch".into(), "city".into(), "sport".into(), "wagon".into()]),
        Some(vec!["price".into(), "consumption".into(), "power".into(), "comfort".into()]),
    )
    .unwrap()
}

// =============================================================================
// Pipeline Tests
// =============================================================================

#[test]
fn invert_scale_and_sum() {
    let pipeline = Pipeline::new()
        .then(MinimizeToMaximize)
        .then(SumScaler::new(Target::Both))
        .rank_with(WeightedSumModel);

    let result = pipeline.rank(&cars()).unwrap();
    let mut ranks = result.ranks().to_vec();
    ranks.sort_unstable();
    assert_eq!(ranks, vec![1, 2, 3, 4]);
    assert_abs_diff_eq!(result.score().unwrap().iter().sum::<f64>(), 1.0, epsilon = 1e-12);
}

#[test]
fn weighted_product_needs_inversion_first() {
    let err = WeightedProductModel.rank(&cars()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidValue);

    let result = Pipeline::new()
        .then(MinimizeToMaximize)
        .then(VectorScaler::new(Target::Matrix))
        .rank_with(WeightedProductModel)
        .rank(&cars())
        .unwrap();
    assert_eq!(result.method(), "WeightedProductModel");
}

#[test]
fn data_driven_weights_replace_the_given_ones() {
    let entropy = EntropyWeighter.transform(&cars()).unwrap();
    assert_abs_diff_eq!(entropy.weights().iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    assert_eq!(entropy.matrix(), cars().matrix());

    let critic = Critic::default().transform(&cars()).unwrap();
    assert_abs_diff_eq!(critic.weights().iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    assert!(critic.weights().iter().all(|w| *w >= 0.0));
}

#[test]
fn cenit_distance_then_electre() {
    let pipeline = Pipeline::new().then(CenitDistance).rank_with(ELECTRE1::default());
    let transformed = pipeline.transform(&cars()).unwrap();
    assert!(transformed.objectives().iter().all(|o| *o == Objective::Max));

    let result = pipeline.rank(&cars()).unwrap();
    assert!(result.ranks().iter().all(|r| *r == 1 || *r == 2));
    assert!(result.ranks().contains(&1));
}

#[test]
fn shifters_prepare_for_log_methods() {
    let dm = mkdm(
        vec![vec![-1.0, 0.0], vec![2.0, 3.0], vec![1.0, 1.0]],
        vec!["max", "max"],
        None,
        None,
        None,
    )
    .unwrap();
    let result = Pipeline::new()
        .then(PushNegatives::default())
        .then(AddValueToZero::default())
        .rank_with(WeightedProductModel)
        .rank(&dm)
        .unwrap();
    assert_eq!(result.ranks(), &[3, 1, 2]);
}

// =============================================================================
// Method Selection Tests
// =============================================================================

#[test]
fn every_named_method_ranks_a_scaled_matrix() {
    let config = EngineConfig::default();
    let dm = Pipeline::new()
        .then(MinimizeToMaximize)
        .then(VectorScaler::default())
        .transform(&cars())
        .unwrap();

    for name in Method::NAMES {
        let method = Method::from_name(name, &config).unwrap();
        let result = method.rank(&dm).unwrap();
        assert_eq!(result.alternatives(), dm.alternatives(), "method {}", name);
        assert_eq!(result.ranks().len(), 4, "method {}", name);
    }
}

// =============================================================================
// Table Tests
// =============================================================================

#[test]
fn table_survives_json() {
    let dm = cars();
    let json = serde_json::to_string(&dm.to_table()).unwrap();
    let table: DecisionTable = serde_json::from_str(&json).unwrap();
    assert_eq!(DecisionMatrix::from_table(&table).unwrap(), dm);
}
