use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::calendar_time_ticks::calendar_time_ticks;
use crate::core::numeric_ticks::{nice_ticks, nice_ticks_seq};
use crate::core::primitives::{datetime_to_seconds, seconds_to_datetime};
use crate::core::regular_time_ticks::{WEEK, regular_time_ticks};
use crate::core::types::{TickRange, TickSeq, TimeStep};
use crate::error::TickResult;

use super::TickOptions;

/// Spans at least this long use month/year ticks instead of fixed seconds.
pub const CALENDAR_THRESHOLD_SECONDS: i64 = 8 * WEEK;

/// Time ticks as datetimes or as epoch seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TimeTicks {
    DateTime(TickRange<NaiveDateTime, TimeStep>),
    Seconds(TickRange<i64, TimeStep>),
}

impl TimeTicks {
    #[must_use]
    pub fn step(&self) -> TimeStep {
        match self {
            Self::DateTime(range) => range.step,
            Self::Seconds(range) => range.step,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::DateTime(range) => range.len(),
            Self::Seconds(range) => range.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn into_seq(self) -> TimeTickSeq {
        match self {
            Self::DateTime(range) => TimeTickSeq::DateTime(range.into_ticks()),
            Self::Seconds(range) => TimeTickSeq::Seconds(range.into_ticks()),
        }
    }
}

/// Tick sequence of [`TimeTicks`] without the bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TimeTickSeq {
    DateTime(TickSeq<NaiveDateTime>),
    Seconds(TickSeq<i64>),
}

/// Finds nice places for `tick_count` ticks over time data from `lo` to `hi`.
///
/// Spans of at least [`CALENDAR_THRESHOLD_SECONDS`] get month or year ticks,
/// shorter spans get fixed-second ticks. Datetimes are read as wall-clock
/// time with no timezone shift. With `as_datetime == false` every position is
/// returned as epoch seconds.
pub fn nice_time_ticks(
    lo: NaiveDateTime,
    hi: NaiveDateTime,
    tick_count: usize,
    inside: bool,
    as_datetime: bool,
) -> TickResult<TimeTicks> {
    let (lo_seconds, hi_seconds) = (datetime_to_seconds(lo), datetime_to_seconds(hi));
    let span = hi_seconds - lo_seconds;

    if span >= CALENDAR_THRESHOLD_SECONDS {
        debug!(span, "dispatching to calendar time ticks");
        let range = calendar_time_ticks(lo, hi, tick_count, inside)?;
        if as_datetime {
            Ok(TimeTicks::DateTime(range))
        } else {
            range
                .try_map(|time| Ok(datetime_to_seconds(time)))
                .map(TimeTicks::Seconds)
        }
    } else {
        debug!(span, "dispatching to regular time ticks");
        let range = regular_time_ticks(lo_seconds, hi_seconds, tick_count, inside)?;
        if as_datetime {
            range.try_map(seconds_to_datetime).map(TimeTicks::DateTime)
        } else {
            Ok(TimeTicks::Seconds(range))
        }
    }
}

/// Same as [`nice_time_ticks`], returning only the tick sequence.
pub fn nice_time_ticks_seq(
    lo: NaiveDateTime,
    hi: NaiveDateTime,
    tick_count: usize,
    inside: bool,
    as_datetime: bool,
) -> TickResult<TimeTickSeq> {
    nice_time_ticks(lo, hi, tick_count, inside, as_datetime).map(TimeTicks::into_seq)
}

/// Facade that applies one validated [`TickOptions`] to every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickSelector {
    options: TickOptions,
}

impl TickSelector {
    pub fn new(options: TickOptions) -> TickResult<Self> {
        Ok(Self {
            options: options.validate()?,
        })
    }

    #[must_use]
    pub fn options(self) -> TickOptions {
        self.options
    }

    pub fn numeric(self, lo: f64, hi: f64) -> TickResult<TickRange<f64>> {
        nice_ticks(lo, hi, self.options.tick_count, self.options.inside)
    }

    pub fn numeric_seq(self, lo: f64, hi: f64) -> TickResult<TickSeq<f64>> {
        nice_ticks_seq(lo, hi, self.options.tick_count, self.options.inside)
    }

    pub fn time(self, lo: NaiveDateTime, hi: NaiveDateTime) -> TickResult<TimeTicks> {
        nice_time_ticks(
            lo,
            hi,
            self.options.tick_count,
            self.options.inside,
            self.options.as_datetime,
        )
    }

    pub fn time_seq(self, lo: NaiveDateTime, hi: NaiveDateTime) -> TickResult<TimeTickSeq> {
        self.time(lo, hi).map(TimeTicks::into_seq)
    }
}
