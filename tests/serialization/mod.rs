use minutely::{time, Time, TimeInput, TimeRange, TimeRangeInput};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, PartialEq, Serialize)]
struct Shift {
    name: String,
    hours: TimeRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    break_at: Option<Time>,
}

#[test]
fn serialize_canonical_strings() {
    assert_eq!(serde_json::to_string(&time(9, 5)).unwrap(), r#""09:05""#);

    let range = TimeRange::new("22:00", "6:00").unwrap();
    assert_eq!(serde_json::to_string(&range).unwrap(), r#""22:00-06:00""#);

    let shift = Shift {
        name: "night".to_string(),
        hours: range,
        break_at: Some(time(2, 0)),
    };
    insta::assert_snapshot!(
        serde_json::to_string(&shift).unwrap(),
        @r#"{"name":"night","hours":"22:00-06:00","break_at":"02:00"}"#,
    );
}

#[test]
fn json_roundtrip() {
    let shift = Shift {
        name: "day".to_string(),
        hours: TimeRange::new("9:00", "17:00").unwrap(),
        break_at: None,
    };
    let json = serde_json::to_string(&shift).unwrap();
    assert_eq!(serde_json::from_str::<Shift>(&json).unwrap(), shift);
}

#[test]
fn yaml_roundtrip() {
    let shift = Shift {
        name: "night".to_string(),
        hours: TimeRange::new("22:00", "6:00").unwrap(),
        break_at: Some(time(2, 30)),
    };
    let yaml = serde_yaml::to_string(&shift).unwrap();
    assert_eq!(serde_yaml::from_str::<Shift>(&yaml).unwrap(), shift);
}

#[test]
fn deserialize_every_range_shape() {
    let _ = crate::Logger::init();

    let want = TimeRange::new("22:00", "6:00").unwrap();
    let shapes = [
        r#"{"name":"n","hours":"22:00-06:00"}"#,
        r#"{"name":"n","hours":"22:00 - 6:00"}"#,
        r#"{"name":"n","hours":["22:00",600]}"#,
        r#"{"name":"n","hours":[2200,"6:00"]}"#,
        r#"{"name":"n","hours":{"from":"22:00","to":"6:00"}}"#,
        r#"{"name":"n","hours":{"from":2200,"to":600,"note":"x"}}"#,
    ];
    for json in shapes {
        let shift: Shift = serde_json::from_str(json).unwrap();
        assert_eq!(shift.hours, want, "{json}");
        assert_eq!(shift.break_at, None);
    }
}

#[test]
fn deserialize_yaml_shapes() {
    let yaml = "\
name: night
hours:
  from: '22:00'
  to: 600
break_at: 230
";
    let shift: Shift = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(shift.hours, TimeRange::new("22:00", "6:00").unwrap());
    assert_eq!(shift.break_at, Some(time(2, 30)));

    let yaml = "\
name: night
hours: ['22:00', '6:00']
";
    let shift: Shift = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(shift.hours, TimeRange::new("22:00", "6:00").unwrap());
}

#[test]
fn deserialize_time_errors() {
    let err = serde_json::from_str::<Time>("true").unwrap_err();
    assert!(
        err.to_string()
            .contains("invalid time, cannot parse a time from a boolean"),
        "{err}",
    );

    let err = serde_json::from_str::<Time>("2400").unwrap_err();
    assert!(err.to_string().contains("invalid hour 24"), "{err}");

    let err = serde_json::from_str::<Time>(r#""""#).unwrap_err();
    assert!(err.to_string().contains("got blank"), "{err}");

    let err = serde_json::from_str::<Time>("null").unwrap_err();
    assert!(err.to_string().contains("got blank"), "{err}");
}

#[test]
fn deserialize_range_errors() {
    let err = serde_json::from_str::<TimeRange>("1400").unwrap_err();
    assert!(
        err.to_string().contains(
            "invalid time range, cannot parse a time range from an integer"
        ),
        "{err}",
    );

    let err =
        serde_json::from_str::<TimeRange>(r#"{"from":"1:23"}"#).unwrap_err();
    assert!(err.to_string().contains("missing key `to`"), "{err}");

    let err = serde_json::from_str::<TimeRange>(r#"[null,"1:23"]"#)
        .unwrap_err();
    assert!(err.to_string().contains("non-blank"), "{err}");

    let err = serde_json::from_str::<TimeRange>(r#"["1:23",1.5]"#)
        .unwrap_err();
    assert!(
        err.to_string().contains("from a floating point number"),
        "{err}",
    );

    let err = serde_json::from_str::<TimeRange>("{}").unwrap_err();
    assert!(err.to_string().contains("got blank"), "{err}");
}

#[test]
fn optional_values() {
    #[derive(Debug, Deserialize)]
    struct Maybe {
        at: Option<Time>,
        during: Option<TimeRange>,
    }

    let got: Maybe =
        serde_json::from_str(r#"{"at":null,"during":null}"#).unwrap();
    assert_eq!(got.at, None);
    assert_eq!(got.during, None);

    let got: Maybe =
        serde_json::from_str(r#"{"at":"9:05","during":"9:00-9:30"}"#).unwrap();
    assert_eq!(got.at, Some(time(9, 5)));
    assert_eq!(got.during, Some(TimeRange::new("9:00", "9:30").unwrap()));
}

#[test]
fn untyped_time_input() {
    let cases = [
        ("null", TimeInput::Blank),
        ("[]", TimeInput::Blank),
        ("{}", TimeInput::Blank),
        ("-5", TimeInput::Integer(-5)),
        ("1405", TimeInput::Integer(1405)),
        ("18446744073709551615", TimeInput::Integer(i64::MAX)),
        (r#""14:05""#, TimeInput::String("14:05".to_string())),
        ("false", TimeInput::Unsupported { what: "a boolean" }),
        ("1.5", TimeInput::Unsupported { what: "a floating point number" }),
        ("[1405]", TimeInput::Unsupported { what: "a sequence" }),
        (r#"{"a":[1]}"#, TimeInput::Unsupported { what: "a mapping" }),
    ];
    for (json, want) in cases {
        let got: TimeInput = serde_json::from_str(json).unwrap();
        assert_eq!(got, want, "{json}");
    }
}

#[test]
fn untyped_time_range_input() {
    let got: TimeRangeInput = serde_json::from_str("null").unwrap();
    assert_eq!(got, TimeRangeInput::Blank);

    let got: TimeRangeInput = serde_json::from_str("[900, null]").unwrap();
    assert_eq!(
        got,
        TimeRangeInput::Sequence(vec![
            TimeInput::Integer(900),
            TimeInput::Blank,
        ]),
    );

    let got: TimeRangeInput = serde_json::from_str("true").unwrap();
    assert_eq!(got, TimeRangeInput::Unsupported { what: "a boolean" });
}
