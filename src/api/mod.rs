use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::core::{
    AllocationWeights, GrowthPoint, MAX_AGE, MAX_HORIZON_YEARS, MAX_RISK_TOLERANCE, MIN_AGE,
    MIN_HORIZON_YEARS, MIN_RISK_TOLERANCE, MetricsResult, RiskBand, UserProfile, compute_metrics,
    growth_curve, resolve_allocation,
};

const INDEX_HTML: &str = include_str!("../../web/index.html");
const STYLES_CSS: &str = include_str!("../../web/styles.css");
const APP_JS: &str = include_str!("../../web/app.js");

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PlanPayload {
    age: Option<u32>,
    risk_tolerance: Option<u32>,
    monthly_contribution: Option<f64>,
    horizon_years: Option<u32>,
}

#[derive(Parser, Debug)]
#[command(
    name = "glidepath",
    about = "Age and risk driven ETF allocation planner with compound growth projection"
)]
struct Cli {
    #[arg(long, default_value_t = 30, help = "Investor age in years")]
    age: u32,
    #[arg(
        long,
        default_value_t = 7,
        help = "Risk tolerance on a 1 (defensive) to 10 (aggressive) scale"
    )]
    risk_tolerance: u32,
    #[arg(
        long,
        default_value_t = 20_000.0,
        help = "Planned monthly contribution in TWD"
    )]
    monthly_contribution: f64,
    #[arg(long, default_value_t = 20, help = "Investment horizon in years")]
    horizon_years: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlanResponse {
    age: u32,
    risk_tolerance: u32,
    monthly_contribution: f64,
    horizon_years: u32,
    risk_band: RiskBand,
    metrics: MetricsResult,
    allocation: AllocationWeights,
    growth_curve: Vec<GrowthPoint>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn build_profile(cli: Cli) -> Result<UserProfile, String> {
    if !(MIN_AGE..=MAX_AGE).contains(&cli.age) {
        return Err(format!("--age must be between {MIN_AGE} and {MAX_AGE}"));
    }

    if !(MIN_RISK_TOLERANCE..=MAX_RISK_TOLERANCE).contains(&cli.risk_tolerance) {
        return Err(format!(
            "--risk-tolerance must be between {MIN_RISK_TOLERANCE} and {MAX_RISK_TOLERANCE}"
        ));
    }

    if !cli.monthly_contribution.is_finite() || cli.monthly_contribution <= 0.0 {
        return Err("--monthly-contribution must be a positive amount".to_string());
    }

    if !(MIN_HORIZON_YEARS..=MAX_HORIZON_YEARS).contains(&cli.horizon_years) {
        return Err(format!(
            "--horizon-years must be between {MIN_HORIZON_YEARS} and {MAX_HORIZON_YEARS}"
        ));
    }

    Ok(UserProfile {
        age: cli.age,
        risk_tolerance: cli.risk_tolerance,
        monthly_contribution: cli.monthly_contribution,
        horizon_years: cli.horizon_years,
    })
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/styles.css", get(styles_handler))
        .route("/app.js", get(app_js_handler))
        .route("/api/plan", get(plan_get_handler).post(plan_post_handler))
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "glidepath HTTP API listening");
    tracing::info!("Local access: http://127.0.0.1:{port}/");

    axum::serve(listener, app).await
}

async fn index_handler() -> impl IntoResponse {
    with_cache_control(Html(INDEX_HTML))
}

async fn styles_handler() -> impl IntoResponse {
    with_cache_control((
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLES_CSS,
    ))
}

async fn app_js_handler() -> impl IntoResponse {
    with_cache_control((
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        APP_JS,
    ))
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn plan_get_handler(Query(payload): Query<PlanPayload>) -> Response {
    plan_handler_impl(payload).await
}

async fn plan_post_handler(Json(payload): Json<PlanPayload>) -> Response {
    plan_handler_impl(payload).await
}

async fn plan_handler_impl(payload: PlanPayload) -> Response {
    let profile = match profile_from_payload(payload) {
        Ok(profile) => profile,
        Err(msg) => {
            tracing::debug!(error = %msg, "rejected plan request");
            return error_response(StatusCode::BAD_REQUEST, &msg);
        }
    };

    match build_plan_response(&profile) {
        Ok(response) => json_response(StatusCode::OK, response),
        Err(msg) => error_response(StatusCode::BAD_REQUEST, &msg),
    }
}

fn with_cache_control<R: IntoResponse>(response: R) -> Response {
    let mut response = response.into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn profile_from_json(json: &str) -> Result<UserProfile, String> {
    let payload = serde_json::from_str::<PlanPayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    profile_from_payload(payload)
}

fn profile_from_payload(payload: PlanPayload) -> Result<UserProfile, String> {
    let mut cli = default_cli_for_api();

    if let Some(v) = payload.age {
        cli.age = v;
    }
    if let Some(v) = payload.risk_tolerance {
        cli.risk_tolerance = v;
    }
    if let Some(v) = payload.monthly_contribution {
        cli.monthly_contribution = v;
    }
    if let Some(v) = payload.horizon_years {
        cli.horizon_years = v;
    }

    build_profile(cli)
}

fn default_cli_for_api() -> Cli {
    Cli {
        age: 30,
        risk_tolerance: 7,
        monthly_contribution: 20_000.0,
        horizon_years: 20,
    }
}

fn build_plan_response(profile: &UserProfile) -> Result<PlanResponse, String> {
    let metrics = compute_metrics(
        profile.risk_tolerance,
        profile.horizon_years,
        profile.monthly_contribution,
    )
    .map_err(|e| e.to_string())?;
    let allocation =
        resolve_allocation(profile.age, profile.risk_tolerance).map_err(|e| e.to_string())?;
    let growth_curve = growth_curve(
        profile.horizon_years,
        metrics.annual_return,
        profile.monthly_contribution,
    );

    Ok(PlanResponse {
        age: profile.age,
        risk_tolerance: profile.risk_tolerance,
        monthly_contribution: profile.monthly_contribution,
        horizon_years: profile.horizon_years,
        risk_band: RiskBand::from_tolerance(profile.risk_tolerance),
        metrics,
        allocation,
        growth_curve,
    })
}
