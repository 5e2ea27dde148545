use chrono::NaiveDateTime;
use ordered_float::OrderedFloat;
use tracing::{debug, trace, warn};

use crate::core::calendar::{CalendarUnit, Months, Years};
use crate::core::numeric_ticks::validate_tick_count;
use crate::core::primitives::datetime_to_seconds;
use crate::core::scoring::{CandidateInterval, CandidateSearch, coverage, granularity, score};
use crate::core::types::{TickRange, TickSeq, TimeStep};
use crate::error::{TickError, TickResult};

/// Month steps, scored before any year step.
pub const MONTH_STEPS: [u32; 5] = [1, 2, 3, 4, 6];
pub const YEAR_STEPS: [u32; 7] = [1, 2, 3, 4, 5, 10, 25];

type CalendarSearch = CandidateSearch<NaiveDateTime, TimeStep>;

/// Finds nice tick dates at month or year intervals.
///
/// Candidate boundaries come from calendar rounding, so consecutive ticks can
/// be a different number of seconds apart. Granularity counts elapsed
/// calendar units while coverage compares elapsed seconds. Month steps are
/// scored first and win ties against year steps.
pub fn calendar_time_ticks(
    lo: NaiveDateTime,
    hi: NaiveDateTime,
    tick_count: usize,
    inside: bool,
) -> TickResult<TickRange<NaiveDateTime, TimeStep>> {
    validate_tick_count(tick_count)?;
    let (lo_seconds, hi_seconds) = (datetime_to_seconds(lo), datetime_to_seconds(hi));
    if hi <= lo {
        warn!(lo = %lo, hi = %hi, "empty or reversed calendar span");
        return Err(TickError::NoUsableScale {
            lo: lo_seconds,
            hi: hi_seconds,
        });
    }

    let data_range = hi_seconds as f64 - lo_seconds as f64;
    let mut search = CalendarSearch::new();
    score_unit::<Months>(&mut search, lo, hi, &MONTH_STEPS, tick_count, inside, data_range)?;
    score_unit::<Years>(&mut search, lo, hi, &YEAR_STEPS, tick_count, inside, data_range)?;

    let Some(best) = search.into_best() else {
        warn!(lo = %lo, hi = %hi, tick_count, "no calendar scale scored above zero");
        return Err(TickError::NoUsableScale {
            lo: lo_seconds,
            hi: hi_seconds,
        });
    };
    debug!(
        start = %best.start,
        stop = %best.stop,
        step = ?best.step,
        score = best.score.into_inner(),
        "selected calendar time scale"
    );

    let ticks = match best.step {
        TimeStep::Months(n) => walk::<Months>(best.start, best.stop, n)?,
        TimeStep::Years(n) => walk::<Years>(best.start, best.stop, n)?,
        TimeStep::Seconds(step) => {
            return Err(TickError::InvalidData(format!(
                "calendar search produced a fixed {step}s step"
            )));
        }
    };
    Ok(TickRange {
        low: best.start,
        high: best.stop,
        step: best.step,
        ticks,
    })
}

fn score_unit<U: CalendarUnit>(
    search: &mut CalendarSearch,
    lo: NaiveDateTime,
    hi: NaiveDateTime,
    steps: &[u32],
    tick_count: usize,
    inside: bool,
    data_range: f64,
) -> TickResult<()> {
    let (lo_unit, hi_unit) = (U::from_datetime(lo)?, U::from_datetime(hi)?);
    for &step in steps {
        let bounds = if inside {
            lo_unit.ceil(step).and_then(|start| Ok((start, hi_unit.floor(step)?)))
        } else {
            lo_unit.floor(step).and_then(|start| Ok((start, hi_unit.ceil(step)?)))
        };
        let (start, stop) = match bounds {
            Ok(bounds) => bounds,
            Err(err) => {
                trace!(step = ?U::time_step(step), %err, "calendar candidate out of range");
                continue;
            }
        };

        let units = stop.units_since(start) as f64;
        let start_seconds = datetime_to_seconds(start.datetime());
        let stop_seconds = datetime_to_seconds(stop.datetime());
        let scale_range = stop_seconds as f64 - start_seconds as f64;
        let g = granularity(units / f64::from(step), tick_count);
        let c = coverage(data_range, scale_range);
        let candidate_score = score(g, c);
        trace!(
            step = ?U::time_step(step),
            start = %start.datetime(),
            stop = %stop.datetime(),
            g,
            c,
            score = candidate_score,
            "calendar candidate"
        );

        search.offer(CandidateInterval {
            start: start.datetime(),
            stop: stop.datetime(),
            step: U::time_step(step),
            score: OrderedFloat(candidate_score),
        });
    }
    Ok(())
}

fn walk<U: CalendarUnit>(
    start: NaiveDateTime,
    stop: NaiveDateTime,
    step: u32,
) -> TickResult<TickSeq<NaiveDateTime>> {
    let mut ticks = TickSeq::new();
    let mut current = U::from_datetime(start)?;
    while current.datetime() <= stop {
        ticks.push(current.datetime());
        if current.datetime() == stop {
            break;
        }
        current = current.advance(step)?;
    }
    Ok(ticks)
}
