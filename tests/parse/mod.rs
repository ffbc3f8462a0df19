use std::collections::BTreeMap;

use minutely::{time, HasHourMinute, Time, TimeInput, TimeRange};

/// A local stand-in for a timestamp from some other library.
#[derive(Clone, Copy, Debug)]
struct Timestamp {
    hour: u8,
    minute: u8,
    second: u8,
}

impl HasHourMinute for Timestamp {
    fn hour(&self) -> i64 {
        i64::from(self.hour)
    }

    fn minute(&self) -> i64 {
        i64::from(self.minute)
    }
}

impl From<Timestamp> for TimeInput {
    fn from(ts: Timestamp) -> TimeInput {
        TimeInput::from_hour_minute(&ts)
    }
}

#[test]
fn time_from_blank() {
    let _ = crate::Logger::init();

    assert_eq!(minutely::parse(None::<Time>).unwrap(), None);
    assert_eq!(minutely::parse("").unwrap(), None);
}

#[test]
fn time_from_time() {
    let t = time(14, 32);
    assert_eq!(minutely::parse(t).unwrap(), Some(t));
}

#[test]
fn time_from_hour_minute() {
    let ts = Timestamp { hour: 14, minute: 32, second: 17 };
    assert_eq!(ts.second, 17);
    assert_eq!(minutely::parse(ts).unwrap(), Some(time(14, 32)));

    let ts = Timestamp { hour: 24, minute: 0, second: 0 };
    assert_eq!(minutely::parse(ts).unwrap(), Some(time(0, 0)));
}

#[test]
fn time_from_string() {
    let _ = crate::Logger::init();

    assert_eq!(minutely::parse("14:32").unwrap(), Some(time(14, 32)));
    assert_eq!(minutely::parse("03:04").unwrap(), Some(time(3, 4)));
    assert_eq!(minutely::parse("3:04").unwrap(), Some(time(3, 4)));

    for bad in ["14:", ":2", "14:2", "invalid!"] {
        let err = minutely::parse(bad).unwrap_err();
        assert!(err.is_invalid_time_string(), "{bad:?}: {err}");
    }
    assert!(minutely::parse("25:02").unwrap_err().is_invalid_hour());
    assert!(minutely::parse("00:61").unwrap_err().is_invalid_minute());
}

#[test]
fn time_from_integer() {
    assert_eq!(minutely::parse(1432).unwrap(), Some(time(14, 32)));
    assert_eq!(minutely::parse(304).unwrap(), Some(time(3, 4)));
    assert_eq!(minutely::parse(0).unwrap(), Some(time(0, 0)));

    assert!(minutely::parse(2502).unwrap_err().is_invalid_hour());
    assert!(minutely::parse(2400).unwrap_err().is_invalid_hour());
    assert!(minutely::parse(61).unwrap_err().is_invalid_minute());
}

#[test]
fn time_from_unsupported() {
    let input = TimeInput::Unsupported { what: "a symbol" };
    let err = minutely::parse(input).unwrap_err();
    assert!(err.is_invalid_time());
    assert_eq!(
        err.to_string(),
        "invalid time, cannot parse a time from a symbol",
    );
}

#[test]
fn time_from_str_trait() {
    let t: Time = "9:05".parse().unwrap();
    assert_eq!(t, time(9, 5));
    assert!("".parse::<Time>().is_err());
}

#[test]
fn range_from_blank() {
    let _ = crate::Logger::init();

    assert_eq!(minutely::parse_range(None::<TimeRange>).unwrap(), None);
    assert_eq!(minutely::parse_range("").unwrap(), None);
    assert_eq!(
        minutely::parse_range(BTreeMap::<String, String>::new()).unwrap(),
        None,
    );
}

#[test]
fn range_from_sequence() {
    let want = TimeRange::new("1:23", "2:34").unwrap();
    assert_eq!(minutely::parse_range(vec![123, 234]).unwrap(), Some(want));
    assert_eq!(minutely::parse_range(["1:23", "2:34"]).unwrap(), Some(want));

    let err = minutely::parse_range(Vec::<i32>::new()).unwrap_err();
    assert!(err.is_invalid_time_range());
    let err = minutely::parse_range(vec![123]).unwrap_err();
    assert!(err.is_invalid_time_range());
    let err = minutely::parse_range(vec![123, 234, 345]).unwrap_err();
    assert!(err.is_invalid_time_range());
}

#[test]
fn range_from_mapping() {
    let _ = crate::Logger::init();

    let map = BTreeMap::from([("from", "1:23"), ("to", "2:34")]);
    let want = TimeRange::new("1:23", "2:34").unwrap();
    assert_eq!(minutely::parse_range(map).unwrap(), Some(want));

    let map = BTreeMap::from([("foo", "bar")]);
    let err = minutely::parse_range(map).unwrap_err();
    assert!(err.is_missing_key());
    assert_eq!(err.to_string(), "time range mapping is missing key `from`");

    let map = BTreeMap::from([("to", "2:34")]);
    assert!(minutely::parse_range(map).unwrap_err().is_missing_key());

    let map = BTreeMap::from([("from", "1:23")]);
    assert!(minutely::parse_range(map).unwrap_err().is_missing_key());

    let map = BTreeMap::from([("from", "invalid"), ("to", "2:34")]);
    let err = minutely::parse_range(map).unwrap_err();
    assert!(err.is_invalid_time_string());

    let map = BTreeMap::from([("from", "1:23"), ("to", "invalid")]);
    let err = minutely::parse_range(map).unwrap_err();
    assert!(err.is_invalid_time_string());
}

#[test]
fn range_from_native_range() {
    let got = minutely::parse_range(time(9, 0)..time(17, 0)).unwrap();
    assert_eq!(got, Some(TimeRange::new_exclusive("9:00", "17:00").unwrap()));

    let got = minutely::parse_range(900..=1700).unwrap();
    assert_eq!(got, Some(TimeRange::new("9:00", "17:00").unwrap()));
}

#[test]
fn range_from_string() {
    let got = minutely::parse_range("14:00-17:45").unwrap().unwrap();
    assert_eq!(got.from(), time(14, 0));
    assert_eq!(got.to(), time(17, 45));

    let got = minutely::parse_range("14:00-00:00").unwrap().unwrap();
    assert_eq!(got.from(), time(14, 0));
    assert_eq!(got.to(), time(0, 0));

    // A trailing separator is ignored.
    let got = minutely::parse_range("14:00-17:45-").unwrap().unwrap();
    assert_eq!(got, TimeRange::new("14:00", "17:45").unwrap());

    for bad in ["invalid", "14:00-", "-14:00", "14:00", "14:00-15:00-16:00"] {
        let err = minutely::parse_range(bad).unwrap_err();
        assert!(err.is_invalid_time_range(), "{bad:?}: {err}");
    }
}

#[test]
fn range_from_existing() {
    let range = TimeRange::new(1432, 1433).unwrap();
    assert_eq!(minutely::parse_range(range).unwrap(), Some(range));
}
