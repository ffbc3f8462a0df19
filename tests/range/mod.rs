use std::ops::{Bound, Range, RangeInclusive};

use minutely::{time, Time, TimeRange};

fn strings(range: TimeRange) -> Vec<String> {
    range.into_iter().map(|t| t.to_string()).collect()
}

#[test]
fn construction() {
    let from = time(12, 0);
    let to = time(17, 45);
    let range = TimeRange::new(from, to).unwrap();
    assert_eq!(range.from(), from);
    assert_eq!(range.to(), to);
    assert!(!range.exclude_end());

    assert!(TimeRange::new_exclusive(0, 0).unwrap().exclude_end());
    assert!(TimeRange::with_exclude_end(0, 0, true).unwrap().exclude_end());

    let range = TimeRange::new(time(12, 0), time(0, 0)).unwrap();
    assert_eq!(range.to(), Time::midnight());
}

#[test]
fn enumeration() {
    let range = TimeRange::new("9:57", "10:03").unwrap();
    assert_eq!(
        strings(range),
        ["09:57", "09:58", "09:59", "10:00", "10:01", "10:02", "10:03"],
    );

    let range = TimeRange::new_exclusive("23:57", "0:03").unwrap();
    assert_eq!(
        strings(range),
        ["23:57", "23:58", "23:59", "00:00", "00:01", "00:02"],
    );

    let range = TimeRange::new("9:57", "9:57").unwrap();
    assert_eq!(range.to_vec(), vec![time(9, 57)]);

    let range = TimeRange::new_exclusive("9:57", "9:57").unwrap();
    assert_eq!(range.to_vec(), Vec::<Time>::new());
}

#[test]
fn whole_day() {
    let range = TimeRange::new(Time::beginning_of_day(), Time::end_of_day())
        .unwrap();
    assert_eq!(range.len(), 1440);
    assert_eq!(range.iter().last(), Some(Time::MAX));

    // Starting a minute after the end wraps all the way around.
    let range = TimeRange::new("0:01", "0:00").unwrap();
    assert!(range.spanning_midnight());
    assert_eq!(range.len(), 1440);
}

#[test]
fn spanning_midnight() {
    for (from, to) in [("23:57", "0:03"), ("23:57", "0:00")] {
        assert!(TimeRange::new(from, to).unwrap().spanning_midnight());
    }
    for (from, to) in [("9:57", "10:03"), ("0:00", "0:03"), ("23:57", "23:59")]
    {
        assert!(!TimeRange::new(from, to).unwrap().spanning_midnight());
    }
}

#[test]
fn ordered_range() {
    let range = TimeRange::new("9:57", "10:03").unwrap();
    assert_eq!(
        range.to_ordered_range().unwrap(),
        (Bound::Included(range.from()), Bound::Included(range.to())),
    );
    let native: RangeInclusive<Time> = range.try_into().unwrap();
    assert_eq!(native, time(9, 57)..=time(10, 3));

    let range = TimeRange::new_exclusive("9:57", "10:03").unwrap();
    assert_eq!(
        range.to_ordered_range().unwrap(),
        (Bound::Included(range.from()), Bound::Excluded(range.to())),
    );
    let native: Range<Time> = range.try_into().unwrap();
    assert_eq!(native, time(9, 57)..time(10, 3));

    for exclude_end in [false, true] {
        let range =
            TimeRange::with_exclude_end("23:57", "0:03", exclude_end).unwrap();
        let err = range.to_ordered_range().unwrap_err();
        assert!(err.is_unsupported_conversion());
    }
}

#[test]
fn display() {
    let range = TimeRange::new("9:00", "16:45").unwrap();
    assert_eq!(range.to_string(), "09:00-16:45");
    assert_eq!(format!("{range:?}"), "09:00..=16:45");
}

#[test]
fn comparison() {
    let range = TimeRange::new("9:00", "10:00").unwrap();

    let other = TimeRange::new_exclusive("9:00", "10:00").unwrap();
    assert_eq!(range.partial_cmp(&other), None);

    let other = TimeRange::new("9:00", "10:00").unwrap();
    assert_eq!(range.partial_cmp(&other), Some(std::cmp::Ordering::Equal));

    let other = TimeRange::new("8:30", "9:30").unwrap();
    assert!(range > other);

    let other = TimeRange::new("10:30", "11:30").unwrap();
    assert!(range < other);
}

#[test]
fn includes() {
    let range = TimeRange::new("9:00", "16:45").unwrap();
    for t in ["9:00", "12:30", "16:45"] {
        assert!(range.includes(t).unwrap(), "{t}");
    }
    for t in ["0:00", "8:59", "16:46"] {
        assert!(!range.includes(t).unwrap(), "{t}");
    }

    let range = TimeRange::new_exclusive("9:00", "16:45").unwrap();
    assert!(!range.includes("16:45").unwrap());

    let err = range.includes("").unwrap_err();
    assert!(err.is_invalid_time());

    let err = range.includes("14:000").unwrap_err();
    assert!(err.is_invalid_time_string());
    let err = range.includes(14_000).unwrap_err();
    assert!(err.is_invalid_hour());
    assert_eq!(
        err.to_string(),
        "failed to parse time to test for membership: \
         invalid hour 140, expected a value in the range 0..=23",
    );
}
