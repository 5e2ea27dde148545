use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{TickError, TickResult};

/// Materialized tick positions; axes rarely carry more than a handful.
pub type TickSeq<T> = SmallVec<[T; 16]>;

/// Nice axis range produced by tick selection.
///
/// `low` and `high` are the bounds to use for axis scaling and always equal
/// the first and last tick. Ticks are ascending and spaced by `step`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickRange<T, S = T> {
    pub low: T,
    pub high: T,
    pub step: S,
    pub ticks: TickSeq<T>,
}

impl<T, S> TickRange<T, S> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.ticks.iter()
    }

    #[must_use]
    pub fn into_ticks(self) -> TickSeq<T> {
        self.ticks
    }

    /// Converts every position (bounds and ticks) with a fallible mapping.
    pub fn try_map<U, F>(self, mut f: F) -> TickResult<TickRange<U, S>>
    where
        F: FnMut(T) -> TickResult<U>,
    {
        Ok(TickRange {
            low: f(self.low)?,
            high: f(self.high)?,
            step: self.step,
            ticks: self.ticks.into_iter().map(&mut f).collect::<TickResult<_>>()?,
        })
    }
}

impl<T: Serialize, S: Serialize> TickRange<T, S> {
    pub fn to_json_pretty(&self) -> TickResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            TickError::InvalidData(format!("failed to serialize tick range json: {e}"))
        })
    }
}

impl<'a, T, S> IntoIterator for &'a TickRange<T, S> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.ticks.iter()
    }
}

/// Spacing between consecutive ticks of a time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeStep {
    /// Fixed number of elapsed seconds (seconds through weeks).
    Seconds(i64),
    /// Calendar months; tick spacing in seconds varies with month length.
    Months(u32),
    /// Calendar years; leap years are one day longer.
    Years(u32),
}
