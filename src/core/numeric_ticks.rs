use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::core::nice_number::{nice_ceil, nice_floor, nice_round};
use crate::core::primitives::decimal_to_f64;
use crate::core::types::{TickRange, TickSeq};
use crate::error::{TickError, TickResult};

/// Distance below which a `value / step` ratio snaps to the nearest integer
/// before rounding to a tick index.
const RATIO_SNAP_EPSILON: f64 = 1e-9;

/// Finds nice places for `tick_count` ticks over numeric data spanning
/// `lo..=hi`.
///
/// With `inside == false` the nice range covers the input range; with
/// `inside == true` it is contained in it. Reversed bounds are swapped, and a
/// degenerate range (`lo == hi`) is widened to the neighbouring nice values.
///
/// Ticks are generated from integer multiples of `step`, so the last tick is
/// exactly `high` with no accumulated drift.
pub fn nice_ticks(
    lo: f64,
    hi: f64,
    tick_count: usize,
    inside: bool,
) -> TickResult<TickRange<f64>> {
    validate_tick_count(tick_count)?;
    if !lo.is_finite() || !hi.is_finite() {
        return Err(TickError::NonFiniteRange { lo, hi });
    }

    let (lo, hi) = widen_degenerate(lo.min(hi), lo.max(hi));
    let delta = hi - lo;
    let step = nice_round(delta / (tick_count - 1) as f64);
    if !delta.is_finite() || !step.is_finite() || step <= 0.0 {
        return Err(TickError::NonFiniteRange { lo, hi });
    }

    let lo_ratio = snap_to_integer(lo / step);
    let hi_ratio = snap_to_integer(hi / step);
    let (first_index, last_index) = if inside {
        (lo_ratio.ceil(), hi_ratio.floor())
    } else {
        (lo_ratio.floor(), hi_ratio.ceil())
    };
    if last_index < first_index {
        return Err(TickError::NoTicksInside { lo, hi, step });
    }

    let count = (last_index - first_index) as usize + 1;
    let ticks: TickSeq<f64> = (0..count)
        .map(|offset| (first_index + offset as f64) * step)
        .collect();
    trace!(lo, hi, step, count, inside, "numeric ticks");

    let range = TickRange {
        low: first_index * step,
        high: last_index * step,
        step,
        ticks,
    };
    debug!(low = range.low, high = range.high, step, "selected numeric scale");
    Ok(range)
}

/// Same as [`nice_ticks`], returning only the tick sequence.
pub fn nice_ticks_seq(
    lo: f64,
    hi: f64,
    tick_count: usize,
    inside: bool,
) -> TickResult<TickSeq<f64>> {
    nice_ticks(lo, hi, tick_count, inside).map(TickRange::into_ticks)
}

/// [`nice_ticks`] for decimal-valued data such as prices.
pub fn nice_ticks_decimal(
    lo: Decimal,
    hi: Decimal,
    tick_count: usize,
    inside: bool,
) -> TickResult<TickRange<f64>> {
    nice_ticks(
        decimal_to_f64(lo, "lo")?,
        decimal_to_f64(hi, "hi")?,
        tick_count,
        inside,
    )
}

pub(crate) fn validate_tick_count(tick_count: usize) -> TickResult<()> {
    if tick_count < 2 {
        return Err(TickError::InvalidTickCount { tick_count });
    }
    Ok(())
}

/// Widens `lo == hi` into a range with a strictly positive span.
///
/// Zero becomes `-1..=1`. Any other value first tries its nice floor and
/// ceiling; a value that is already nice (both equal) is widened by half its
/// magnitude on each side before rounding outward.
fn widen_degenerate(lo: f64, hi: f64) -> (f64, f64) {
    if lo != hi {
        return (lo, hi);
    }
    if lo == 0.0 {
        return (-1.0, 1.0);
    }

    let (floor, ceil) = (nice_floor(lo), nice_ceil(hi));
    if floor < ceil {
        return (floor, ceil);
    }
    let half = lo.abs() / 2.0;
    (nice_floor(lo - half), nice_ceil(hi + half))
}

fn snap_to_integer(ratio: f64) -> f64 {
    let nearest = ratio.round();
    if (ratio - nearest).abs() <= RATIO_SNAP_EPSILON {
        nearest
    } else {
        ratio
    }
}

#[cfg(test)]
mod tests {
    use super::{snap_to_integer, widen_degenerate};

    #[test]
    fn widen_keeps_non_degenerate_ranges() {
        assert_eq!(widen_degenerate(1.0, 2.0), (1.0, 2.0));
    }

    #[test]
    fn widen_zero_is_unit_range() {
        assert_eq!(widen_degenerate(0.0, 0.0), (-1.0, 1.0));
    }

    #[test]
    fn widen_non_nice_value_uses_nice_neighbours() {
        assert_eq!(widen_degenerate(3.7, 3.7), (3.0, 5.0));
    }

    #[test]
    fn widen_nice_value_expands_by_half_magnitude() {
        assert_eq!(widen_degenerate(3.0, 3.0), (1.0, 5.0));
        assert_eq!(widen_degenerate(-3.0, -3.0), (-5.0, -1.0));
    }

    #[test]
    fn snap_absorbs_division_noise_only() {
        assert_eq!(snap_to_integer(2.999_999_999_999_999_6), 3.0);
        assert_eq!(snap_to_integer(2.5), 2.5);
    }
}
