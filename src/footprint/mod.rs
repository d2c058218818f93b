pub mod config;
pub mod engine;
pub mod factors;
pub mod recommendations;
pub mod validation;

pub use config::*;
pub use engine::{
    calculate_footprint, compute_baseline_footprint, compute_carbon_credit_potential,
    compute_ecofriendly_footprint, compute_reduction, compute_sustainability_score,
    score_breakdown, CreditPotential, ScoreBreakdown, ScoreResult,
};
pub use factors::{EmissionFactorTable, FactorEntry};
pub use recommendations::{generate_recommendations, Priority, Recommendation, RecommendationCategory};
pub use validation::validate_config;
