use super::*;

// 2024-05-01T12:00:00Z
const MAY_FIRST_NOON_MS: i64 = 1_714_564_800_000;

#[test]
fn parses_rfc3339_with_zulu() {
    assert_eq!(parse_timestamp("2024-05-01T12:00:00Z"), Ok(Timestamp(MAY_FIRST_NOON_MS)));
}

#[test]
fn parses_rfc3339_with_offset() {
    assert_eq!(
        parse_timestamp("2024-05-01T14:00:00+02:00"),
        Ok(Timestamp(MAY_FIRST_NOON_MS))
    );
}

#[test]
fn naive_timestamp_is_treated_as_utc() {
    assert_eq!(parse_timestamp("2024-05-01T12:00:00"), Ok(Timestamp(MAY_FIRST_NOON_MS)));
}

#[test]
fn naive_timestamp_keeps_millisecond_fraction() {
    assert_eq!(
        parse_timestamp("2024-05-01T12:00:00.250000"),
        Ok(Timestamp(MAY_FIRST_NOON_MS + 250))
    );
}

#[test]
fn space_separator_is_accepted() {
    assert_eq!(parse_timestamp("2024-05-01 12:00:00"), Ok(Timestamp(MAY_FIRST_NOON_MS)));
}

#[test]
fn blank_input_is_empty_error() {
    assert_eq!(parse_timestamp("   "), Err(TimestampError::Empty));
}

#[test]
fn garbage_input_is_invalid_error() {
    assert_eq!(
        parse_timestamp("yesterday"),
        Err(TimestampError::Invalid("yesterday".to_owned()))
    );
}

#[test]
fn deserializes_from_string_or_number() {
    let from_str: Timestamp = serde_json::from_str("\"2024-05-01T12:00:00Z\"").unwrap();
    let from_num: Timestamp = serde_json::from_str(&MAY_FIRST_NOON_MS.to_string()).unwrap();
    assert_eq!(from_str, from_num);
}

#[test]
fn serializes_as_rfc3339() {
    let json = serde_json::to_string(&Timestamp(MAY_FIRST_NOON_MS)).unwrap();
    assert_eq!(json, "\"2024-05-01T12:00:00Z\"");
}

#[test]
fn short_label_drops_seconds_and_zone() {
    assert_eq!(Timestamp(MAY_FIRST_NOON_MS).short_label(), "2024-05-01 12:00");
}

#[test]
fn ordering_follows_epoch_millis() {
    assert!(Timestamp(1) < Timestamp(2));
    assert_eq!(Timestamp::from_millis(5).millis(), 5);
}
