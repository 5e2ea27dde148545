use chrono::{DateTime, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{TickError, TickResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> TickResult<f64> {
    value.to_f64().ok_or_else(|| {
        TickError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Whole seconds since the epoch, reading the wall-clock time without any
/// timezone shift.
#[must_use]
pub fn datetime_to_seconds(time: NaiveDateTime) -> i64 {
    time.and_utc().timestamp()
}

pub fn seconds_to_datetime(seconds: i64) -> TickResult<NaiveDateTime> {
    DateTime::from_timestamp(seconds, 0)
        .map(|time| time.naive_utc())
        .ok_or_else(|| TickError::InvalidDate(format!("timestamp {seconds} is out of range")))
}
