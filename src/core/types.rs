use serde::Serialize;
use thiserror::Error;

pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 80;
pub const MIN_RISK_TOLERANCE: u32 = 1;
pub const MAX_RISK_TOLERANCE: u32 = 10;
pub const MIN_HORIZON_YEARS: u32 = 5;
pub const MAX_HORIZON_YEARS: u32 = 40;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum DomainError {
    #[error("age must be between 18 and 80")]
    AgeOutOfRange,
    #[error("risk tolerance must be between 1 and 10")]
    RiskToleranceOutOfRange,
    #[error("monthly contribution must be a positive, finite amount")]
    InvalidMonthlyContribution,
    #[error("investment horizon must be between 5 and 40 years")]
    HorizonOutOfRange,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserProfile {
    pub age: u32,
    pub risk_tolerance: u32,
    pub monthly_contribution: f64,
    pub horizon_years: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResult {
    pub annual_return: f64,
    pub volatility: f64,
    pub final_value: f64,
    pub risk_adjusted_ratio: f64,
    pub max_drawdown: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationWeights {
    pub equity_domestic: f64,
    pub equity_global: f64,
    pub bond_global: f64,
}

impl AllocationWeights {
    pub fn total(self) -> f64 {
        self.equity_domestic + self.equity_global + self.bond_global
    }

    pub fn equity_total(self) -> f64 {
        self.equity_domestic + self.equity_global
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthPoint {
    pub year: u32,
    pub value: f64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    Conservative,
    Balanced,
    Aggressive,
}

impl RiskBand {
    pub fn from_tolerance(risk_tolerance: u32) -> Self {
        if risk_tolerance < 4 {
            RiskBand::Conservative
        } else if risk_tolerance < 8 {
            RiskBand::Balanced
        } else {
            RiskBand::Aggressive
        }
    }
}

pub(crate) fn validate_age(age: u32) -> Result<(), DomainError> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(DomainError::AgeOutOfRange);
    }
    Ok(())
}

pub(crate) fn validate_risk_tolerance(risk_tolerance: u32) -> Result<(), DomainError> {
    if !(MIN_RISK_TOLERANCE..=MAX_RISK_TOLERANCE).contains(&risk_tolerance) {
        return Err(DomainError::RiskToleranceOutOfRange);
    }
    Ok(())
}

pub(crate) fn validate_monthly_contribution(monthly_contribution: f64) -> Result<(), DomainError> {
    if !monthly_contribution.is_finite() || monthly_contribution <= 0.0 {
        return Err(DomainError::InvalidMonthlyContribution);
    }
    Ok(())
}

pub(crate) fn validate_horizon_years(horizon_years: u32) -> Result<(), DomainError> {
    if !(MIN_HORIZON_YEARS..=MAX_HORIZON_YEARS).contains(&horizon_years) {
        return Err(DomainError::HorizonOutOfRange);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_band_boundaries() {
        assert_eq!(RiskBand::from_tolerance(1), RiskBand::Conservative);
        assert_eq!(RiskBand::from_tolerance(3), RiskBand::Conservative);
        assert_eq!(RiskBand::from_tolerance(4), RiskBand::Balanced);
        assert_eq!(RiskBand::from_tolerance(7), RiskBand::Balanced);
        assert_eq!(RiskBand::from_tolerance(8), RiskBand::Aggressive);
        assert_eq!(RiskBand::from_tolerance(10), RiskBand::Aggressive);
    }

    #[test]
    fn risk_band_serializes_lowercase() {
        let json = serde_json::to_string(&RiskBand::Balanced).expect("band should serialize");
        assert_eq!(json, "\"balanced\"");
    }

    #[test]
    fn validators_accept_domain_bounds() {
        assert!(validate_age(18).is_ok());
        assert!(validate_age(80).is_ok());
        assert!(validate_risk_tolerance(1).is_ok());
        assert!(validate_risk_tolerance(10).is_ok());
        assert!(validate_monthly_contribution(1_000.0).is_ok());
        assert!(validate_horizon_years(5).is_ok());
        assert!(validate_horizon_years(40).is_ok());
    }

    #[test]
    fn validators_reject_out_of_domain_values() {
        assert_eq!(validate_age(17), Err(DomainError::AgeOutOfRange));
        assert_eq!(validate_age(81), Err(DomainError::AgeOutOfRange));
        assert_eq!(
            validate_risk_tolerance(0),
            Err(DomainError::RiskToleranceOutOfRange)
        );
        assert_eq!(
            validate_risk_tolerance(11),
            Err(DomainError::RiskToleranceOutOfRange)
        );
        assert_eq!(
            validate_monthly_contribution(0.0),
            Err(DomainError::InvalidMonthlyContribution)
        );
        assert_eq!(
            validate_monthly_contribution(-500.0),
            Err(DomainError::InvalidMonthlyContribution)
        );
        assert_eq!(
            validate_monthly_contribution(f64::NAN),
            Err(DomainError::InvalidMonthlyContribution)
        );
        assert_eq!(
            validate_monthly_contribution(f64::INFINITY),
            Err(DomainError::InvalidMonthlyContribution)
        );
        assert_eq!(
            validate_horizon_years(4),
            Err(DomainError::HorizonOutOfRange)
        );
        assert_eq!(
            validate_horizon_years(41),
            Err(DomainError::HorizonOutOfRange)
        );
    }
}
