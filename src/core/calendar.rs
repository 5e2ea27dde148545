//! Month and year arithmetic for calendar tick stepping.
//!
//! Date libraries disagree on what "Jan 31 plus one month" means; here it is
//! always the last day of February. [`RollingDate`] remembers the day of month
//! it started from, so repeated stepping never drifts (Jan 31 -> Feb 29 ->
//! Mar 31) and never overflows into the following month.

use std::ops::Sub;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::core::types::TimeStep;
use crate::error::{TickError, TickResult};

/// Last day of `month` in `year`, leap years included.
///
/// Computed as the day before the first of the following month.
pub fn end_of_month(year: i32, month: u32) -> TickResult<u32> {
    if !(1..=12).contains(&month) {
        return Err(TickError::InvalidDate(format!(
            "month must be in 1..=12, got {month}"
        )));
    }
    if month == 12 {
        return Ok(31);
    }

    NaiveDate::from_ymd_opt(year, month + 1, 1)
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .ok_or_else(|| TickError::InvalidDate(format!("{year}-{month:02} is out of range")))
}

/// Rounds `datetime` down to midnight on the first of an `n`-month boundary.
///
/// Boundaries are multiples of `n` months counted from year zero, which for
/// every `n` dividing 12 means counting from January 1 of the same year
/// (`n = 3` gives Jan 1, Apr 1, Jul 1 and Oct 1). A datetime already on a
/// boundary is returned unchanged.
pub fn month_floor(datetime: NaiveDateTime, n: u32) -> TickResult<NaiveDateTime> {
    let n = validate_month_step(n)?;
    let index = month_index(datetime);
    first_of_month(index - index.rem_euclid(n))
}

/// Rounds `datetime` up to the next `n`-month boundary.
///
/// See [`month_floor`] for where boundaries fall.
pub fn month_ceil(datetime: NaiveDateTime, n: u32) -> TickResult<NaiveDateTime> {
    let floor = month_floor(datetime, n)?;
    if floor == datetime {
        return Ok(datetime);
    }
    first_of_month(month_index(floor) + i64::from(n))
}

/// A datetime that steps by whole months without day-of-month overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollingDate {
    datetime: NaiveDateTime,
    orig_day: u32,
    is_eom: bool,
}

impl RollingDate {
    pub fn new(datetime: NaiveDateTime) -> TickResult<Self> {
        let orig_day = datetime.day();
        let is_eom = orig_day == end_of_month(datetime.year(), datetime.month())?;
        Ok(Self {
            datetime,
            orig_day,
            is_eom,
        })
    }

    #[must_use]
    pub fn datetime(self) -> NaiveDateTime {
        self.datetime
    }

    /// Day of month this value was constructed with.
    #[must_use]
    pub fn orig_day(self) -> u32 {
        self.orig_day
    }

    /// Whether the construction day was the last day of its month.
    #[must_use]
    pub fn is_end_of_month(self) -> bool {
        self.is_eom
    }

    /// Moves by `n` months (negative moves backwards), keeping the time of day.
    ///
    /// An end-of-month original lands on the last day of the new month.
    /// Otherwise the original day is kept, clamped to the new month's length.
    pub fn add_months(self, n: i32) -> TickResult<Self> {
        let index = month_index(self.datetime) + i64::from(n);
        let (year, month) = year_month_from_index(index)?;
        let last_day = end_of_month(year, month)?;
        let day = if self.is_eom {
            last_day
        } else {
            self.orig_day.min(last_day)
        };

        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            TickError::InvalidDate(format!("{year}-{month:02}-{day:02} is out of range"))
        })?;
        Ok(Self {
            datetime: date.and_time(self.datetime.time()),
            ..self
        })
    }
}

/// A calendar unit that tick selection can floor, ceil, count and step in.
pub trait CalendarUnit: Copy + Sized {
    fn from_datetime(datetime: NaiveDateTime) -> TickResult<Self>;

    fn datetime(self) -> NaiveDateTime;

    /// Steps forward by `n` units.
    fn advance(self, n: u32) -> TickResult<Self>;

    /// Whole units elapsed from `earlier` to `self`.
    fn units_since(self, earlier: Self) -> i64;

    /// Rounds down to an `n`-unit boundary.
    fn floor(self, n: u32) -> TickResult<Self>;

    /// Rounds up to an `n`-unit boundary.
    fn ceil(self, n: u32) -> TickResult<Self>;

    fn time_step(n: u32) -> TimeStep;
}

/// Calendar month unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Months(RollingDate);

/// Calendar year unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Years(RollingDate);

impl Months {
    pub fn new(datetime: NaiveDateTime) -> TickResult<Self> {
        RollingDate::new(datetime).map(Self)
    }

    #[must_use]
    pub fn rolling(self) -> RollingDate {
        self.0
    }
}

impl Years {
    pub fn new(datetime: NaiveDateTime) -> TickResult<Self> {
        RollingDate::new(datetime).map(Self)
    }

    #[must_use]
    pub fn rolling(self) -> RollingDate {
        self.0
    }
}

impl Sub for Months {
    type Output = i64;

    fn sub(self, rhs: Self) -> i64 {
        month_index(self.0.datetime) - month_index(rhs.0.datetime)
    }
}

impl Sub for Years {
    type Output = i64;

    fn sub(self, rhs: Self) -> i64 {
        i64::from(self.0.datetime.year()) - i64::from(rhs.0.datetime.year())
    }
}

impl CalendarUnit for Months {
    fn from_datetime(datetime: NaiveDateTime) -> TickResult<Self> {
        Self::new(datetime)
    }

    fn datetime(self) -> NaiveDateTime {
        self.0.datetime
    }

    fn advance(self, n: u32) -> TickResult<Self> {
        self.0.add_months(months_as_i32(n)?).map(Self)
    }

    fn units_since(self, earlier: Self) -> i64 {
        self - earlier
    }

    fn floor(self, n: u32) -> TickResult<Self> {
        Self::new(month_floor(self.0.datetime, n)?)
    }

    fn ceil(self, n: u32) -> TickResult<Self> {
        Self::new(month_ceil(self.0.datetime, n)?)
    }

    fn time_step(n: u32) -> TimeStep {
        TimeStep::Months(n)
    }
}

impl CalendarUnit for Years {
    fn from_datetime(datetime: NaiveDateTime) -> TickResult<Self> {
        Self::new(datetime)
    }

    fn datetime(self) -> NaiveDateTime {
        self.0.datetime
    }

    fn advance(self, n: u32) -> TickResult<Self> {
        self.0.add_months(months_as_i32(years_as_months(n)?)?).map(Self)
    }

    fn units_since(self, earlier: Self) -> i64 {
        self - earlier
    }

    fn floor(self, n: u32) -> TickResult<Self> {
        Self::new(month_floor(self.0.datetime, years_as_months(n)?)?)
    }

    fn ceil(self, n: u32) -> TickResult<Self> {
        Self::new(month_ceil(self.0.datetime, years_as_months(n)?)?)
    }

    fn time_step(n: u32) -> TimeStep {
        TimeStep::Years(n)
    }
}

fn validate_month_step(n: u32) -> TickResult<i64> {
    if n == 0 {
        return Err(TickError::InvalidData(
            "calendar step must be > 0".to_owned(),
        ));
    }
    Ok(i64::from(n))
}

fn years_as_months(n: u32) -> TickResult<u32> {
    n.checked_mul(12)
        .ok_or_else(|| TickError::InvalidData(format!("{n} years overflows a month count")))
}

fn months_as_i32(n: u32) -> TickResult<i32> {
    i32::try_from(n)
        .map_err(|_| TickError::InvalidData(format!("{n} months overflows a month offset")))
}

/// Months elapsed since January of year zero.
fn month_index(datetime: NaiveDateTime) -> i64 {
    i64::from(datetime.year()) * 12 + i64::from(datetime.month0())
}

fn year_month_from_index(index: i64) -> TickResult<(i32, u32)> {
    let year = i32::try_from(index.div_euclid(12))
        .map_err(|_| TickError::InvalidDate(format!("month index {index} is out of range")))?;
    // rem_euclid(12) is always within 0..12
    let month = index.rem_euclid(12) as u32 + 1;
    Ok((year, month))
}

fn first_of_month(index: i64) -> TickResult<NaiveDateTime> {
    let (year, month) = year_month_from_index(index)?;
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|date| date.and_time(NaiveTime::MIN))
        .ok_or_else(|| TickError::InvalidDate(format!("{year}-{month:02}-01 is out of range")))
}

#[cfg(test)]
mod tests {
    use super::{month_index, year_month_from_index};
    use chrono::NaiveDate;

    #[test]
    fn month_index_round_trips_through_year_month() {
        let datetime = NaiveDate::from_ymd_opt(2024, 11, 5)
            .and_then(|date| date.and_hms_opt(8, 0, 0))
            .expect("valid datetime");
        let index = month_index(datetime);
        assert_eq!(year_month_from_index(index), Ok((2024, 11)));
    }

    #[test]
    fn negative_month_index_maps_to_december_of_previous_year() {
        assert_eq!(year_month_from_index(-1), Ok((-1, 12)));
    }
}
