use tickwise::{TickError, TickOptions};

#[test]
fn empty_json_uses_defaults() {
    let options = TickOptions::from_json_str("{}").expect("defaults");
    assert_eq!(options, TickOptions::default());
    assert_eq!(options.tick_count, 5);
    assert!(!options.inside);
    assert!(options.as_datetime);
}

#[test]
fn partial_json_overrides_only_given_fields() {
    let options = TickOptions::from_json_str(r#"{"inside": true}"#).expect("options");
    assert!(options.inside);
    assert_eq!(options.tick_count, 5);
}

#[test]
fn json_with_invalid_tick_count_is_rejected() {
    assert_eq!(
        TickOptions::from_json_str(r#"{"tick_count": 1}"#),
        Err(TickError::InvalidTickCount { tick_count: 1 })
    );
}

#[test]
fn malformed_json_is_invalid_data() {
    assert!(matches!(
        TickOptions::from_json_str("{tick_count"),
        Err(TickError::InvalidData(_))
    ));
}

#[test]
fn json_round_trip_preserves_options() {
    let options = TickOptions::default()
        .with_tick_count(8)
        .with_inside(true)
        .with_as_datetime(false);

    let json = options.to_json_pretty().expect("serialize");
    assert!(json.contains("\"tick_count\": 8"));
    assert_eq!(TickOptions::from_json_str(&json), Ok(options));
}
