//! Invoice schedule construction.
//!
//! This module turns a subscription request into the set of dates on
//! which invoices fall, through two pure steps composed by
//! [`build_schedule`]:
//! - [`validate`]: date presence/order and duration limit checks
//! - [`BillingRule`]: cadence-specific date generation
//!
//! Both steps are functions of their inputs plus the constants in
//! [`limits`]; nothing is retained between requests.

mod rule;
mod validate;

pub use rule::BillingRule;
pub use validate::validate;

use indexmap::IndexSet;
use rust_decimal::Decimal;

use crate::types::{Cadence, Date, ScheduleError, Weekday};

/// Fixed duration limits for subscription spans.
pub mod limits {
    /// Maximum subscription span in whole months, regardless of cadence.
    pub const MAX_DURATION_MONTHS: i64 = 3;

    /// Minimum weekly subscription span in whole weeks.
    pub const WEEKLY_MIN_DURATION_WEEKS: i64 = 1;

    /// Minimum monthly subscription span in whole months.
    pub const MONTHLY_MIN_DURATION_MONTHS: i64 = 1;
}

/// A subscription request with parsed, typed fields.
///
/// Field presence is part of the domain contract, so every field is
/// optional here and [`build_schedule`] classifies what is missing.
/// Only the cadence-relevant day parameter is consulted; the other one
/// is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionRequest {
    /// Amount charged per invoice. Echoed, never computed on.
    pub amount: Option<Decimal>,
    /// Billing cadence.
    pub cadence: Option<Cadence>,
    /// First day of the subscription, inclusive.
    pub start_date: Option<Date>,
    /// Last day of the subscription, inclusive.
    pub end_date: Option<Date>,
    /// Day-of-month for monthly billing (1-31).
    pub monthly_invoice_day: Option<i64>,
    /// Weekday for weekly billing.
    pub weekly_invoice_day: Option<Weekday>,
}

/// A generated invoice schedule.
///
/// `invoice_dates` is a deduplicated set whose insertion order is
/// ascending chronological order, so iteration and serialisation walk
/// the schedule from first invoice to last.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Schedule {
    /// Amount charged on each invoice date.
    pub amount_per_invoice: Decimal,
    /// The cadence the schedule was generated for.
    pub cadence: Cadence,
    /// The invoice dates, ascending and unique.
    pub invoice_dates: IndexSet<Date>,
}

/// Builds the invoice schedule for a subscription request.
///
/// Checks run in a fixed order and the first failure wins: amount
/// presence, cadence presence, date presence, date order, duration
/// limits, then the cadence parameter. No dates are generated once any
/// check fails, so a failed request never yields a partial schedule.
///
/// # Examples
///
/// ```
/// use billing_core::schedule::{build_schedule, SubscriptionRequest};
/// use billing_core::types::{Cadence, Date, Weekday};
///
/// let request = SubscriptionRequest {
///     amount: Some("49.90".parse().unwrap()),
///     cadence: Some(Cadence::Weekly),
///     start_date: Some(Date::parse("01/01/2021").unwrap()),
///     end_date: Some(Date::parse("15/01/2021").unwrap()),
///     monthly_invoice_day: None,
///     weekly_invoice_day: Some(Weekday::Tuesday),
/// };
///
/// let schedule = build_schedule(&request).unwrap();
/// let dates: Vec<String> = schedule.invoice_dates.iter().map(|d| d.to_string()).collect();
/// assert_eq!(dates, ["05/01/2021", "12/01/2021"]);
/// ```
pub fn build_schedule(request: &SubscriptionRequest) -> Result<Schedule, ScheduleError> {
    let amount = request.amount.ok_or(ScheduleError::MissingAmount)?;
    let cadence = request.cadence.ok_or(ScheduleError::UnknownCadence)?;

    let (start, end) = match (request.start_date, request.end_date) {
        (Some(start), Some(end)) => (start, end),
        _ => return Err(ScheduleError::MissingDateRange),
    };

    validate(start, end, cadence)?;

    let rule = BillingRule::resolve(
        cadence,
        request.weekly_invoice_day,
        request.monthly_invoice_day,
    )?;

    Ok(Schedule {
        amount_per_invoice: amount,
        cadence,
        invoice_dates: rule.invoice_dates(start, end),
    })
}
