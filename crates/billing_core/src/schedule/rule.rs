//! Cadence-specific invoice date generation.

use indexmap::IndexSet;

use crate::types::{Cadence, Date, ScheduleError, Weekday};

/// A billing rule resolved from a validated request.
///
/// Each variant carries exactly the parameter its generation strategy
/// needs, so a resolved rule can always produce dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingRule {
    /// An invoice on every calendar day.
    Daily,
    /// An invoice every week on the given weekday.
    Weekly {
        /// The weekday invoices fall on.
        day: Weekday,
    },
    /// An invoice every month on the given day-of-month, clamped to the
    /// month's last day when the day does not exist.
    Monthly {
        /// The requested day-of-month (1-31).
        day: u32,
    },
}

impl BillingRule {
    /// Resolves the rule for a cadence from the request parameters.
    ///
    /// Fails before any date is generated when the cadence-relevant
    /// parameter is absent or out of range; parameters for other
    /// cadences are ignored.
    pub fn resolve(
        cadence: Cadence,
        weekly_invoice_day: Option<Weekday>,
        monthly_invoice_day: Option<i64>,
    ) -> Result<Self, ScheduleError> {
        match cadence {
            Cadence::Daily => Ok(BillingRule::Daily),
            Cadence::Weekly => weekly_invoice_day
                .map(|day| BillingRule::Weekly { day })
                .ok_or(ScheduleError::MissingWeeklyDay),
            Cadence::Monthly => match monthly_invoice_day {
                Some(day) if (1..=31).contains(&day) => Ok(BillingRule::Monthly {
                    day: day as u32,
                }),
                _ => Err(ScheduleError::InvalidMonthlyDay),
            },
        }
    }

    /// Generates the invoice dates for `[start, end]`, both inclusive.
    ///
    /// Dates are produced in ascending order and the set preserves
    /// insertion order, so iteration is chronological.
    pub fn invoice_dates(&self, start: Date, end: Date) -> IndexSet<Date> {
        match *self {
            BillingRule::Daily => every_n_days(start, end, 1),
            BillingRule::Weekly { day } => every_n_days(start.closest_weekday(day), end, 7),
            BillingRule::Monthly { day } => monthly_on_day(start, end, day),
        }
    }
}

/// Collects every `step`-th day from `start` while not after `end`.
fn every_n_days(start: Date, end: Date, step: i64) -> IndexSet<Date> {
    let mut dates = IndexSet::new();
    let mut date = start;
    while date <= end {
        dates.insert(date);
        date = date + step;
    }
    dates
}

/// Collects one date per month on `day`, clamped to short months.
///
/// The target is re-clamped from each advanced anchor month, so a
/// clamped short month does not shift later months off the requested
/// day. The first anchor month may produce a date before `start`; it is
/// skipped rather than rolled forward.
fn monthly_on_day(start: Date, end: Date, day: u32) -> IndexSet<Date> {
    let mut dates = IndexSet::new();
    let mut target = start.with_day_or_last_of_month(day);
    while target <= end {
        if target >= start {
            dates.insert(target);
        }
        target = match target.plus_months(1) {
            Some(next) => next.with_day_or_last_of_month(day),
            None => break,
        };
    }
    dates
}
