mod allocation;
mod engine;
mod types;

pub use allocation::resolve_allocation;
pub use engine::{compute_metrics, growth_curve};
pub use types::{
    AllocationWeights, DomainError, GrowthPoint, MAX_AGE, MAX_HORIZON_YEARS, MAX_RISK_TOLERANCE,
    MIN_AGE, MIN_HORIZON_YEARS, MIN_RISK_TOLERANCE, MetricsResult, RiskBand, UserProfile,
};
