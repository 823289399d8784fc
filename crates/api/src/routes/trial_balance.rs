//! Trial balance import routes.
//!
//! Runs the pure normalize → classify → aggregate → analyze pipeline over
//! the uploaded rows and returns the result. Schedules are rebuilt from
//! scratch on every upload and never stored here.

use axum::extract::{Path, State};
use axum::routing::post;
use axum::{Json, Router};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use attest_core::analytics::{AnalyticsService, AnalyticsSnapshot, Ratio};
use attest_core::trial_balance::{
    AccountEntry, LeadSchedule, LeadSchedules, RawRow, RowNormalizer, ScheduleService,
};
use attest_shared::AppError;

use crate::error::ApiError;
use crate::AppState;

/// Creates the trial balance routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/engagements/{id}/trial-balance",
        post(import_trial_balance),
    )
}

/// Request body for a trial balance import.
#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    /// Raw spreadsheet rows as produced by the external file parser.
    pub rows: Vec<RawRow>,
}

/// Response for a trial balance import.
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    /// Generated lead schedules.
    pub lead_schedules: LeadSchedulesResponse,
    /// Derived analytics, rounded for presentation.
    pub analytics: AnalyticsResponse,
}

/// Lead schedules keyed by statement group.
#[derive(Debug, Serialize)]
pub struct LeadSchedulesResponse {
    /// Asset accounts.
    pub assets: LeadScheduleResponse,
    /// Liability accounts.
    pub liabilities: LeadScheduleResponse,
    /// Equity accounts.
    pub equity: LeadScheduleResponse,
    /// Revenue accounts.
    pub revenue: LeadScheduleResponse,
    /// Expense accounts.
    pub expenses: LeadScheduleResponse,
}

/// One lead schedule on the wire.
#[derive(Debug, Serialize)]
pub struct LeadScheduleResponse {
    /// Group total at full precision.
    pub total: Decimal,
    /// Member accounts in input order.
    pub accounts: Vec<AccountResponse>,
}

/// One account line on the wire.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    /// Padded account number.
    pub no: String,
    /// Account description.
    pub name: String,
    /// Net balance (debit minus credit).
    pub balance: Decimal,
}

/// Analytics at presentation precision.
#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    /// Profit or loss, whole currency units.
    pub profit: Decimal,
    /// Estimated materiality, whole currency units.
    pub materiality: Decimal,
    /// Current ratio to two decimal places, or `"N/A"`.
    pub current_ratio: Ratio,
    /// Gross margin percentage to one decimal place, or `"N/A"`.
    pub gross_margin: Ratio,
}

impl From<&AccountEntry> for AccountResponse {
    fn from(entry: &AccountEntry) -> Self {
        Self {
            no: entry.account_no.clone(),
            name: entry.account_name.clone(),
            balance: entry.balance,
        }
    }
}

impl From<&LeadSchedule> for LeadScheduleResponse {
    fn from(schedule: &LeadSchedule) -> Self {
        Self {
            total: schedule.total,
            accounts: schedule.accounts.iter().map(Into::into).collect(),
        }
    }
}

impl From<&LeadSchedules> for LeadSchedulesResponse {
    fn from(schedules: &LeadSchedules) -> Self {
        Self {
            assets: (&schedules.assets).into(),
            liabilities: (&schedules.liabilities).into(),
            equity: (&schedules.equity).into(),
            revenue: (&schedules.revenue).into(),
            expenses: (&schedules.expenses).into(),
        }
    }
}

impl From<AnalyticsSnapshot> for AnalyticsResponse {
    fn from(snapshot: AnalyticsSnapshot) -> Self {
        Self {
            profit: round_whole(snapshot.profit),
            materiality: round_whole(snapshot.materiality),
            current_ratio: snapshot.current_ratio.round_dp(2),
            gross_margin: snapshot.gross_margin.round_dp(1),
        }
    }
}

fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

async fn import_trial_balance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ImportRequest>,
) -> Result<Json<ImportResponse>, ApiError> {
    if !state.engagements.contains(id) {
        return Err(AppError::NotFound(format!("Engagement {id}")).into());
    }

    let entries = RowNormalizer::normalize_rows(&request.rows);
    let schedules = ScheduleService::generate(&entries);
    let analytics = AnalyticsService::compute(&schedules);
    info!(engagement_id = %id, rows = request.rows.len(), "Trial balance imported");

    Ok(Json(ImportResponse {
        lead_schedules: (&schedules).into(),
        analytics: analytics.into(),
    }))
}
