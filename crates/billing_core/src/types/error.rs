//! Error types for structured error handling.
//!
//! This module provides:
//! - `ScheduleError`: Validation and parameter failures for schedule requests
//! - `DateError`: Errors from date construction and parsing

use std::fmt;
use thiserror::Error;

use super::cadence::Cadence;

/// Categorised schedule request failures.
///
/// Every failure is a deterministic input-validation failure carrying a
/// stable machine-readable kind and a human-readable message. Callers
/// map these onto client-error responses; none is transient or fatal.
///
/// # Examples
///
/// ```
/// use billing_core::types::ScheduleError;
///
/// let err = ScheduleError::InvalidDateOrder;
/// assert_eq!(err.kind(), "invalid_date_order");
/// assert_eq!(err.to_string(), "startDate cannot be after endDate.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Amount field absent.
    MissingAmount,

    /// Cadence absent or not one of the known values.
    UnknownCadence,

    /// Start or end date absent.
    MissingDateRange,

    /// Start date after end date.
    InvalidDateOrder,

    /// Cadence-specific minimum duration not met.
    DurationTooShort {
        /// The cadence whose minimum was not met.
        cadence: Cadence,
        /// The minimum duration in the cadence's own unit.
        minimum: i64,
    },

    /// Subscription span exceeds the maximum duration.
    DurationTooLong {
        /// The maximum duration in months.
        maximum: i64,
    },

    /// Weekly cadence without a weekday parameter.
    MissingWeeklyDay,

    /// Monthly cadence with the day parameter absent or outside 1..=31.
    InvalidMonthlyDay,
}

impl ScheduleError {
    /// Returns the stable machine-readable error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ScheduleError::MissingAmount => "missing_amount",
            ScheduleError::UnknownCadence => "unknown_cadence",
            ScheduleError::MissingDateRange => "missing_date_range",
            ScheduleError::InvalidDateOrder => "invalid_date_order",
            ScheduleError::DurationTooShort { .. } => "duration_too_short",
            ScheduleError::DurationTooLong { .. } => "duration_too_long",
            ScheduleError::MissingWeeklyDay => "missing_weekly_day",
            ScheduleError::InvalidMonthlyDay => "invalid_monthly_day",
        }
    }
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::MissingAmount => write!(f, "Please input amount field."),
            ScheduleError::UnknownCadence => write!(
                f,
                "Subscription cadence is mandatory - DAILY, WEEKLY or MONTHLY."
            ),
            ScheduleError::MissingDateRange => {
                write!(f, "Please fill in startDate and endDate fields.")
            }
            ScheduleError::InvalidDateOrder => write!(f, "startDate cannot be after endDate."),
            ScheduleError::DurationTooShort { cadence, minimum } => match cadence {
                Cadence::Weekly => write!(
                    f,
                    "Weekly subscription period must be at least {} week(s).",
                    minimum
                ),
                Cadence::Monthly => write!(
                    f,
                    "Monthly subscription period must be at least {} month(s).",
                    minimum
                ),
                Cadence::Daily => write!(
                    f,
                    "Subscription period must be at least {} day(s).",
                    minimum
                ),
            },
            ScheduleError::DurationTooLong { maximum } => write!(
                f,
                "Subscription period cannot be more than {} months.",
                maximum
            ),
            ScheduleError::MissingWeeklyDay => write!(
                f,
                "Please input a valid value for weeklyInvoiceDay, e.g. MONDAY or TUESDAY."
            ),
            ScheduleError::InvalidMonthlyDay => write!(
                f,
                "Please input a proper value for the monthlyInvoiceDay field (1 to 31)."
            ),
        }
    }
}

impl std::error::Error for ScheduleError {}

/// Date construction and parsing errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g. February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Input did not match the fixed dd/MM/yyyy format.
    #[error("{input} does not have dd/MM/yyyy format.")]
    InvalidFormat {
        /// The rejected input string.
        input: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_error_messages() {
        assert_eq!(
            ScheduleError::MissingAmount.to_string(),
            "Please input amount field."
        );
        assert_eq!(
            ScheduleError::MissingDateRange.to_string(),
            "Please fill in startDate and endDate fields."
        );
        assert_eq!(
            ScheduleError::DurationTooShort {
                cadence: Cadence::Weekly,
                minimum: 1,
            }
            .to_string(),
            "Weekly subscription period must be at least 1 week(s)."
        );
        assert_eq!(
            ScheduleError::DurationTooShort {
                cadence: Cadence::Monthly,
                minimum: 1,
            }
            .to_string(),
            "Monthly subscription period must be at least 1 month(s)."
        );
        assert_eq!(
            ScheduleError::DurationTooLong { maximum: 3 }.to_string(),
            "Subscription period cannot be more than 3 months."
        );
    }

    #[test]
    fn test_schedule_error_kinds_are_stable() {
        assert_eq!(ScheduleError::MissingAmount.kind(), "missing_amount");
        assert_eq!(ScheduleError::UnknownCadence.kind(), "unknown_cadence");
        assert_eq!(ScheduleError::MissingWeeklyDay.kind(), "missing_weekly_day");
        assert_eq!(
            ScheduleError::InvalidMonthlyDay.kind(),
            "invalid_monthly_day"
        );
        assert_eq!(
            ScheduleError::DurationTooLong { maximum: 3 }.kind(),
            "duration_too_long"
        );
    }

    #[test]
    fn test_date_error_format_message() {
        let err = DateError::InvalidFormat {
            input: "2021-01-05".to_string(),
        };
        assert_eq!(err.to_string(), "2021-01-05 does not have dd/MM/yyyy format.");
    }
}
