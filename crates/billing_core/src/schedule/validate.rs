//! Date-range validation for schedule requests.

use super::limits;
use crate::types::{whole_months_between, whole_weeks_between, Cadence, Date, ScheduleError};

/// Checks a date range against the duration limits for a cadence.
///
/// Rules are applied in order and the first failure wins: date order,
/// the cadence-specific minimum, then the cadence-independent maximum.
/// Equal start and end dates pass the order check.
pub fn validate(start: Date, end: Date, cadence: Cadence) -> Result<(), ScheduleError> {
    if start > end {
        return Err(ScheduleError::InvalidDateOrder);
    }

    let months = whole_months_between(start, end);

    if cadence == Cadence::Weekly
        && whole_weeks_between(start, end) < limits::WEEKLY_MIN_DURATION_WEEKS
    {
        return Err(ScheduleError::DurationTooShort {
            cadence,
            minimum: limits::WEEKLY_MIN_DURATION_WEEKS,
        });
    }

    if cadence == Cadence::Monthly && months < limits::MONTHLY_MIN_DURATION_MONTHS {
        return Err(ScheduleError::DurationTooShort {
            cadence,
            minimum: limits::MONTHLY_MIN_DURATION_MONTHS,
        });
    }

    if months > limits::MAX_DURATION_MONTHS {
        return Err(ScheduleError::DurationTooLong {
            maximum: limits::MAX_DURATION_MONTHS,
        });
    }

    Ok(())
}
