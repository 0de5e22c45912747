use super::types::{AllocationWeights, DomainError, validate_age, validate_risk_tolerance};

const MIN_BOND_WEIGHT: f64 = 0.10;
const MAX_BOND_WEIGHT: f64 = 0.85;
const DOMESTIC_EQUITY_SHARE: f64 = 0.45;
const GLOBAL_EQUITY_SHARE: f64 = 0.55;

pub fn resolve_allocation(age: u32, risk_tolerance: u32) -> Result<AllocationWeights, DomainError> {
    validate_age(age)?;
    validate_risk_tolerance(risk_tolerance)?;

    let raw_bond_weight =
        (f64::from(age) + f64::from(10 - risk_tolerance) * 4.0) / 100.0;
    let bond_weight = raw_bond_weight.clamp(MIN_BOND_WEIGHT, MAX_BOND_WEIGHT);
    let equity_weight = 1.0 - bond_weight;

    let equity_domestic = round_weight(equity_weight * DOMESTIC_EQUITY_SHARE);
    let equity_global = round_weight(equity_weight * GLOBAL_EQUITY_SHARE);
    let bond_global = round_weight(bond_weight);

    // The global equity bucket absorbs whatever the per-bucket rounding
    // left over, so the three weights sum to exactly one.
    let residual = 1.0 - (equity_domestic + equity_global + bond_global);
    let equity_global = round_weight(equity_global + residual);

    Ok(AllocationWeights {
        equity_domestic,
        equity_global,
        bond_global,
    })
}

fn round_weight(weight: f64) -> f64 {
    (weight * 100.0).round() / 100.0
}
