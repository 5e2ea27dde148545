/// Multipliers considered "nice" within one decade, strictly increasing.
pub const NICE_INTERVALS: [f64; 6] = [1.0, 2.0, 2.5, 3.0, 5.0, 10.0];

/// Smallest nice value greater than or equal to `x`.
///
/// Zero and non-finite inputs are returned unchanged.
#[must_use]
pub fn nice_ceil(x: f64) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }
    if x < 0.0 {
        return -nice_floor(-x);
    }

    let exponent = x.log10().floor() as i32;
    NICE_INTERVALS[..NICE_INTERVALS.len() - 1]
        .iter()
        .map(|&interval| scaled(interval, exponent))
        .find(|&candidate| x <= candidate)
        .unwrap_or_else(|| scaled(10.0, exponent))
}

/// Largest nice value less than or equal to `x`.
///
/// Zero and non-finite inputs are returned unchanged.
#[must_use]
pub fn nice_floor(x: f64) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }
    if x < 0.0 {
        return -nice_ceil(-x);
    }

    let exponent = x.log10().ceil() as i32 - 1;
    NICE_INTERVALS[1..]
        .iter()
        .rev()
        .map(|&interval| scaled(interval, exponent))
        .find(|&candidate| x >= candidate)
        .unwrap_or_else(|| scaled(1.0, exponent))
}

/// Nice value nearest to `x`.
///
/// An interval wins once `x` does not exceed the midpoint between it and the
/// next interval up.
#[must_use]
pub fn nice_round(x: f64) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }
    if x < 0.0 {
        return -nice_round(-x);
    }

    let exponent = x.log10().ceil() as i32 - 1;
    NICE_INTERVALS
        .windows(2)
        .map(|pair| {
            let value = scaled(pair[0], exponent);
            let cutoff = (value + scaled(pair[1], exponent)) / 2.0;
            (value, cutoff)
        })
        .find(|&(_, cutoff)| x <= cutoff)
        .map_or_else(|| scaled(10.0, exponent), |(value, _)| value)
}

// Negative exponents divide so that e.g. 3 x 10^-1 is exactly 0.3.
fn scaled(interval: f64, exponent: i32) -> f64 {
    if exponent >= 0 {
        interval * 10.0_f64.powi(exponent)
    } else {
        interval / 10.0_f64.powi(-exponent)
    }
}
