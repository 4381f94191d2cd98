//! Subscription scheduling endpoint.
//!
//! `POST /api/v1/subscription` takes a subscription request with textual
//! dd/MM/yyyy dates, builds the invoice schedule, and returns it with
//! the dates formatted back the same way. All failures come back as 400
//! with a kind and message (see [`crate::error::ApiError`]).

use axum::{routing::post, Json, Router};
use rust_decimal::Decimal;
use serde::Deserialize;

use billing_core::schedule::{build_schedule, Schedule, SubscriptionRequest};
use billing_core::types::{Cadence, Date, Weekday};

use super::AppState;
use crate::error::ApiError;

/// Wire shape of a subscription request.
///
/// Dates travel as dd/MM/yyyy strings; cadence and weekday as their
/// upper-case names. Every field is optional so that presence failures
/// are classified by the domain layer instead of the deserializer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubscribeRequest {
    pub amount: Option<Decimal>,
    pub cadence: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub monthly_invoice_day: Option<i64>,
    pub weekly_invoice_day: Option<String>,
}

impl SubscribeRequest {
    /// Parses the textual fields into the typed domain request.
    ///
    /// Dates must match the fixed format exactly; empty strings count
    /// as absent. Unknown cadence or weekday names also map to absent,
    /// so the domain layer reports them with its own error kinds.
    fn into_domain(self) -> Result<SubscriptionRequest, ApiError> {
        let start_date = parse_optional_date(self.start_date.as_deref())?;
        let end_date = parse_optional_date(self.end_date.as_deref())?;

        let cadence = self
            .cadence
            .as_deref()
            .and_then(|s| s.parse::<Cadence>().ok());
        let weekly_invoice_day = self
            .weekly_invoice_day
            .as_deref()
            .and_then(|s| s.parse::<Weekday>().ok());

        Ok(SubscriptionRequest {
            amount: self.amount,
            cadence,
            start_date,
            end_date,
            monthly_invoice_day: self.monthly_invoice_day,
            weekly_invoice_day,
        })
    }
}

fn parse_optional_date(value: Option<&str>) -> Result<Option<Date>, ApiError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => Ok(Some(Date::parse(s)?)),
    }
}

/// Build the subscription routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/subscription", post(subscribe_handler))
}

/// POST /api/v1/subscription - Build the invoice schedule for a subscription
async fn subscribe_handler(
    Json(body): Json<SubscribeRequest>,
) -> Result<Json<Schedule>, ApiError> {
    let request = body.into_domain()?;
    let schedule = build_schedule(&request)?;

    tracing::debug!(
        cadence = %schedule.cadence,
        invoices = schedule.invoice_dates.len(),
        "Invoice schedule generated"
    );

    Ok(Json(schedule))
}
