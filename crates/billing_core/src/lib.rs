//! # billing_core: Subscription Invoice Scheduling
//!
//! ## Domain Layer Role
//!
//! billing_core is the domain layer of the billing stack, providing:
//! - Calendar date type with the fixed dd/MM/yyyy wire format (`types::time`)
//! - Billing cadence and weekday enums (`types::cadence`, `types::time`)
//! - Validation and invoice-date generation (`schedule`)
//! - Error types: `ScheduleError`, `DateError` (`types::error`)
//!
//! The crate is pure computation: no async, no I/O, no shared mutable
//! state. Every operation is a function of its inputs plus the fixed
//! duration limits in [`schedule::limits`], so callers may invoke it from
//! any number of concurrent request handlers without coordination.
//!
//! ## Usage
//!
//! ```rust
//! use billing_core::schedule::{build_schedule, SubscriptionRequest};
//! use billing_core::types::{Cadence, Date};
//!
//! let request = SubscriptionRequest {
//!     amount: Some("10".parse().unwrap()),
//!     cadence: Some(Cadence::Daily),
//!     start_date: Some(Date::parse("25/01/2021").unwrap()),
//!     end_date: Some(Date::parse("27/01/2021").unwrap()),
//!     monthly_invoice_day: None,
//!     weekly_invoice_day: None,
//! };
//!
//! let schedule = build_schedule(&request).unwrap();
//! assert_eq!(schedule.invoice_dates.len(), 3);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): wire-format serialisation for dates, enums and
//!   the generated schedule.

pub mod schedule;
pub mod types;
