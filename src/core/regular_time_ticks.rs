use ordered_float::OrderedFloat;
use tracing::{debug, trace, warn};

use crate::core::numeric_ticks::validate_tick_count;
use crate::core::scoring::{CandidateInterval, CandidateSearch, coverage, granularity, score};
use crate::core::types::{TickRange, TickSeq, TimeStep};
use crate::error::{TickError, TickResult};

pub const SECOND: i64 = 1;
pub const MINUTE: i64 = 60 * SECOND;
pub const HOUR: i64 = 60 * MINUTE;
pub const DAY: i64 = 24 * HOUR;
pub const WEEK: i64 = 7 * DAY;

/// Fixed-length time scales, each with its allowed step sizes in seconds.
///
/// Scales are searched in this order; on equal scores the earlier step wins.
pub const REGULAR_TIME_SCALES: [(&str, &[i64]); 5] = [
    ("seconds", &[SECOND, 2 * SECOND, 5 * SECOND, 15 * SECOND, 30 * SECOND]),
    ("minutes", &[MINUTE, 2 * MINUTE, 5 * MINUTE, 15 * MINUTE, 30 * MINUTE]),
    ("hours", &[HOUR, 2 * HOUR, 3 * HOUR, 4 * HOUR, 6 * HOUR, 12 * HOUR]),
    ("days", &[DAY]),
    ("weeks", &[WEEK]),
];

/// Finds nice tick times for spans below the calendar threshold.
///
/// `lo` and `hi` are epoch seconds. Every step of [`REGULAR_TIME_SCALES`] is
/// scored by granularity and coverage and the best one is kept. Ticks run
/// from the rounded start to the rounded end inclusive, exactly `step`
/// seconds apart.
pub fn regular_time_ticks(
    lo: i64,
    hi: i64,
    tick_count: usize,
    inside: bool,
) -> TickResult<TickRange<i64, TimeStep>> {
    validate_tick_count(tick_count)?;
    if hi <= lo {
        warn!(lo, hi, "empty or reversed time span");
        return Err(TickError::NoUsableScale { lo, hi });
    }

    let data_range = hi as f64 - lo as f64;
    let mut search = CandidateSearch::new();
    for (scale, steps) in REGULAR_TIME_SCALES {
        for &step in steps {
            let bounds = if inside {
                ceil_to(lo, step).zip(floor_to(hi, step))
            } else {
                floor_to(lo, step).zip(ceil_to(hi, step))
            };
            let Some((start, stop)) = bounds else {
                trace!(scale, step, "regular candidate overflows i64");
                continue;
            };

            let scale_range = stop as f64 - start as f64;
            let g = granularity(scale_range / step as f64, tick_count);
            let c = coverage(data_range, scale_range);
            let candidate_score = score(g, c);
            trace!(
                scale,
                step,
                start,
                stop,
                g,
                c,
                score = candidate_score,
                "regular candidate"
            );

            search.offer(CandidateInterval {
                start,
                stop,
                step,
                score: OrderedFloat(candidate_score),
            });
        }
    }

    let Some(best) = search.into_best() else {
        warn!(lo, hi, tick_count, "no regular time scale scored above zero");
        return Err(TickError::NoUsableScale { lo, hi });
    };
    debug!(
        start = best.start,
        stop = best.stop,
        step = best.step,
        score = best.score.into_inner(),
        "selected regular time scale"
    );

    let Some(count) = best
        .stop
        .checked_sub(best.start)
        .and_then(|span| (span / best.step).checked_add(1))
    else {
        warn!(lo, hi, step = best.step, "regular tick span overflows i64");
        return Err(TickError::NoUsableScale { lo, hi });
    };
    let ticks: TickSeq<i64> = (0..count)
        .map(|index| best.start + index * best.step)
        .collect();
    Ok(TickRange {
        low: best.start,
        high: best.stop,
        step: TimeStep::Seconds(best.step),
        ticks,
    })
}

fn floor_to(value: i64, step: i64) -> Option<i64> {
    value.div_euclid(step).checked_mul(step)
}

fn ceil_to(value: i64, step: i64) -> Option<i64> {
    let floor = floor_to(value, step)?;
    if floor == value {
        Some(value)
    } else {
        floor.checked_add(step)
    }
}
