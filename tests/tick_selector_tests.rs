use chrono::{Duration, NaiveDate, NaiveDateTime};
use tickwise::api::CALENDAR_THRESHOLD_SECONDS;
use tickwise::{
    TickError, TickOptions, TickSelector, TimeStep, TimeTickSeq, TimeTicks, nice_time_ticks,
    nice_time_ticks_seq,
};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .expect("valid datetime")
}

#[test]
fn short_span_returns_regular_seconds() {
    // 2023-11-14 22:13:30 is 1_700_000_010 seconds after the epoch.
    let lo = at(2023, 11, 14, 22, 13, 30);
    let hi = lo + Duration::seconds(90);

    let ticks = nice_time_ticks(lo, hi, 5, false, false).expect("ticks");
    let TimeTicks::Seconds(range) = ticks else {
        panic!("expected seconds output");
    };
    assert_eq!(range.step, TimeStep::Seconds(15));
    assert_eq!(range.low, 1_700_000_010);
    assert_eq!(range.high, 1_700_000_100);
    assert_eq!(range.len(), 7);
}

#[test]
fn short_span_returns_regular_datetimes() {
    let lo = at(2023, 11, 14, 22, 13, 30);
    let hi = lo + Duration::seconds(90);

    let ticks = nice_time_ticks(lo, hi, 5, false, true).expect("ticks");
    let TimeTicks::DateTime(range) = ticks else {
        panic!("expected datetime output");
    };
    assert_eq!(
        range.ticks.as_slice(),
        &[
            at(2023, 11, 14, 22, 13, 30),
            at(2023, 11, 14, 22, 13, 45),
            at(2023, 11, 14, 22, 14, 0),
            at(2023, 11, 14, 22, 14, 15),
            at(2023, 11, 14, 22, 14, 30),
            at(2023, 11, 14, 22, 14, 45),
            at(2023, 11, 14, 22, 15, 0),
        ]
    );
}

#[test]
fn eight_week_span_switches_to_calendar_ticks() {
    let lo = at(2024, 1, 1, 0, 0, 0);
    let hi = lo + Duration::seconds(CALENDAR_THRESHOLD_SECONDS);

    let ticks = nice_time_ticks(lo, hi, 5, false, true).expect("ticks");
    assert!(matches!(ticks.step(), TimeStep::Months(_) | TimeStep::Years(_)));
}

#[test]
fn span_just_below_eight_weeks_stays_regular() {
    let lo = at(2024, 1, 1, 0, 0, 0);
    let hi = lo + Duration::seconds(CALENDAR_THRESHOLD_SECONDS - 1);

    let ticks = nice_time_ticks(lo, hi, 5, false, true).expect("ticks");
    assert!(matches!(ticks.step(), TimeStep::Seconds(_)));
}

#[test]
fn calendar_ticks_convert_to_epoch_seconds() {
    let lo = at(2024, 1, 15, 0, 0, 0);
    let hi = at(2024, 12, 10, 0, 0, 0);

    let ticks = nice_time_ticks(lo, hi, 5, false, false).expect("ticks");
    let TimeTicks::Seconds(range) = ticks else {
        panic!("expected seconds output");
    };
    assert_eq!(range.step, TimeStep::Months(2));
    // 2024-01-01T00:00:00 and 2025-01-01T00:00:00
    assert_eq!(range.low, 1_704_067_200);
    assert_eq!(range.high, 1_735_689_600);
}

#[test]
fn seq_returns_only_ticks() {
    let lo = at(2023, 11, 14, 22, 13, 30);
    let hi = lo + Duration::seconds(90);

    let seq = nice_time_ticks_seq(lo, hi, 5, false, false).expect("seq");
    let TimeTickSeq::Seconds(seconds) = seq else {
        panic!("expected seconds output");
    };
    assert_eq!(seconds.first(), Some(&1_700_000_010));
    assert_eq!(seconds.last(), Some(&1_700_000_100));
}

#[test]
fn selector_applies_its_options() {
    let selector = TickSelector::new(TickOptions::default().with_as_datetime(false))
        .expect("valid options");

    let numeric = selector.numeric(0.0, 97.0).expect("numeric");
    assert_eq!(numeric.ticks.as_slice(), &[0.0, 25.0, 50.0, 75.0, 100.0]);

    let lo = at(2023, 11, 14, 22, 13, 30);
    let seq = selector
        .time_seq(lo, lo + Duration::seconds(90))
        .expect("time seq");
    assert!(matches!(seq, TimeTickSeq::Seconds(_)));
}

#[test]
fn selector_inside_option_contains_ticks() {
    let selector = TickSelector::new(TickOptions::default().with_inside(true)).expect("valid");
    let seq = selector.numeric_seq(0.1, 9.7).expect("numeric seq");
    assert_eq!(seq.as_slice(), &[2.5, 5.0, 7.5]);
}

#[test]
fn selector_rejects_invalid_tick_count() {
    let result = TickSelector::new(TickOptions::default().with_tick_count(1));
    assert_eq!(result, Err(TickError::InvalidTickCount { tick_count: 1 }));
}

#[test]
fn reversed_time_span_surfaces_no_usable_scale() {
    let lo = at(2024, 1, 1, 0, 0, 0);
    let result = nice_time_ticks(lo, lo - Duration::seconds(30), 5, false, true);
    assert!(matches!(result, Err(TickError::NoUsableScale { .. })));
}
