use super::types::{
    DomainError, GrowthPoint, MetricsResult, validate_horizon_years, validate_monthly_contribution,
    validate_risk_tolerance,
};

const BASE_ANNUAL_RETURN: f64 = 0.042;
const MAX_RISK_PREMIUM: f64 = 0.052;
const BASE_VOLATILITY: f64 = 0.04;
const MAX_VOLATILITY_SPREAD: f64 = 0.16;
const RISK_FREE_RATE: f64 = 0.02;
const BASE_DRAWDOWN: f64 = 0.05;
const MAX_DRAWDOWN_SPREAD: f64 = 0.32;

pub fn compute_metrics(
    risk_tolerance: u32,
    horizon_years: u32,
    monthly_contribution: f64,
) -> Result<MetricsResult, DomainError> {
    validate_risk_tolerance(risk_tolerance)?;
    validate_horizon_years(horizon_years)?;
    validate_monthly_contribution(monthly_contribution)?;

    let risk_fraction = f64::from(risk_tolerance) / 10.0;
    let annual_return = BASE_ANNUAL_RETURN + risk_fraction * MAX_RISK_PREMIUM;
    let volatility = BASE_VOLATILITY + risk_fraction * MAX_VOLATILITY_SPREAD;

    // Within the validated domain annual_return >= 0.0472 and
    // volatility >= 0.056, so both divisions below are safe.
    let monthly_rate = annual_return / 12.0;
    let total_months = f64::from(horizon_years * 12);
    let final_value = monthly_contribution
        * (((1.0 + monthly_rate).powf(total_months) - 1.0) / monthly_rate)
        * (1.0 + monthly_rate);

    let risk_adjusted_ratio = (annual_return - RISK_FREE_RATE) / volatility;
    let max_drawdown = -(BASE_DRAWDOWN + risk_fraction * MAX_DRAWDOWN_SPREAD);

    Ok(MetricsResult {
        annual_return,
        volatility,
        final_value,
        risk_adjusted_ratio,
        max_drawdown,
    })
}

// Year-by-year projection for charting. Compounds annually on the yearly
// contribution total, while compute_metrics compounds monthly, so the two
// do not agree at the final year.
pub fn growth_curve(
    horizon_years: u32,
    annual_return: f64,
    monthly_contribution: f64,
) -> Vec<GrowthPoint> {
    let annual_contribution = monthly_contribution * 12.0;
    let mut points = Vec::with_capacity(horizon_years as usize + 1);
    points.push(GrowthPoint {
        year: 0,
        value: 0.0,
    });
    for year in 1..=horizon_years {
        let growth = ((1.0 + annual_return).powf(f64::from(year)) - 1.0) / annual_return;
        points.push(GrowthPoint {
            year,
            value: annual_contribution * growth * (1.0 + annual_return),
        });
    }
    points
}
