use ordered_float::OrderedFloat;

/// Coverage ratios below this floor score zero.
pub const MIN_COVERAGE: f64 = 0.75;

/// How close `intervals` (tick gaps of a candidate scale) comes to the
/// requested `tick_count`.
///
/// Returns `1 - |k - m| / m`, or 0 when `k` is outside `(0, 2m)`.
#[must_use]
pub fn granularity(intervals: f64, tick_count: usize) -> f64 {
    let wanted = tick_count as f64;
    if intervals > 0.0 && intervals < 2.0 * wanted {
        1.0 - (intervals - wanted).abs() / wanted
    } else {
        0.0
    }
}

/// Fraction of overlap between the data span and a candidate scale span.
///
/// This is the smaller span divided by the larger one: `data / scale` when
/// the scale covers the data, `scale / data` when it sits inside. Ratios below
/// [`MIN_COVERAGE`] and non-positive spans score zero.
#[must_use]
pub fn coverage(data_range: f64, scale_range: f64) -> f64 {
    if data_range <= 0.0 || scale_range <= 0.0 {
        return 0.0;
    }
    let ratio = data_range.min(scale_range) / data_range.max(scale_range);
    if ratio >= MIN_COVERAGE { ratio } else { 0.0 }
}

/// Equal-weight average of granularity and coverage.
#[must_use]
pub fn score(granularity: f64, coverage: f64) -> f64 {
    (granularity + coverage) / 2.0
}

/// A scored tick scale considered during the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateInterval<T, S> {
    pub start: T,
    pub stop: T,
    pub step: S,
    pub score: OrderedFloat<f64>,
}

/// Running best over a fixed candidate set.
///
/// Starts from a zero-score sentinel; a candidate replaces the best only with
/// a strictly greater score, so the first of several equal scores wins.
#[derive(Debug, Clone, Copy)]
pub struct CandidateSearch<T, S> {
    best: Option<CandidateInterval<T, S>>,
}

impl<T, S> Default for CandidateSearch<T, S> {
    fn default() -> Self {
        Self { best: None }
    }
}

impl<T, S> CandidateSearch<T, S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers a candidate; returns `true` when it became the new best.
    pub fn offer(&mut self, candidate: CandidateInterval<T, S>) -> bool {
        let current = self
            .best
            .as_ref()
            .map_or(OrderedFloat(0.0), |best| best.score);
        if candidate.score > current {
            self.best = Some(candidate);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn best(&self) -> Option<&CandidateInterval<T, S>> {
        self.best.as_ref()
    }

    #[must_use]
    pub fn into_best(self) -> Option<CandidateInterval<T, S>> {
        self.best
    }
}
