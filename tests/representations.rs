use chrono::NaiveDate;
use intervals::{Interval, IntervalError};

#[test]
fn display() {
    assert_eq!(Interval::integer([1, 5]).expect("range").to_string(), "1 - 5");
    assert_eq!(Interval::integer(5).expect("point").to_string(), "5");
    assert_eq!(Interval::float("(,)").expect("everything").to_string(), "-inf - inf");
    assert_eq!(Interval::float([1.5, 2.25]).expect("floats").to_string(), "1.5 - 2.25");
}

#[test]
fn normalized() {
    assert_eq!(Interval::integer([1, 3]).expect("closed").normalized(), "[1, 3]");
    assert_eq!(Interval::integer("[1,)").expect("unbounded above").normalized(), "[1,)");
    assert_eq!(Interval::integer("(,3]").expect("unbounded below").normalized(), "(, 3]");
    assert_eq!(Interval::integer("(,)").expect("everything").normalized(), "(,)");

    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2020, 1, 5).unwrap();
    let dates = Interval::date([start, end]).expect("dates");
    assert_eq!(dates.normalized(), "[2020-01-01, 2020-01-05]");
}

#[test]
fn normalized_text_parses_back() {
    for text in ["[1, 3]", "(1, 3]", "[1,)", "(, 3]", "(,)"] {
        let interval = Interval::integer(text).expect("interval");
        let reparsed = Interval::integer(interval.normalized()).expect("reparsed");
        assert_eq!(interval, reparsed, "{text}");
    }
}

#[test]
fn hyphenized() {
    assert_eq!(Interval::integer("(1,5]").expect("range").hyphenized().expect("hyphenized"), "2 - 5");
    assert_eq!(Interval::integer((1, 3)).expect("single value").hyphenized().expect("hyphenized"), "2");
    assert_eq!(Interval::integer("[1,)").expect("unbounded").hyphenized().expect("hyphenized"), "1 -");
    assert_eq!(Interval::integer("-3--2").expect("negative").hyphenized().expect("hyphenized"), "-3 - -2");

    let err = Interval::float([1.0, 2.0]).expect("floats").hyphenized().unwrap_err();
    assert!(matches!(err, IntervalError::Type(_)));
}

#[test]
fn hyphenized_text_parses_back() {
    for text in ["[1, 5]", "(1, 5]", "[-3, -2]"] {
        let interval = Interval::integer(text).expect("interval");
        let hyphenized = interval.hyphenized().expect("hyphenized");
        assert_eq!(Interval::integer(hyphenized.as_str()).expect("reparsed"), interval, "{text}");
    }
}

#[test]
fn empty_intervals_have_no_hyphenized_form() {
    let empty = Interval::integer((2, 3)).expect("open unit");
    let err = empty.hyphenized().unwrap_err();
    assert!(matches!(err, IntervalError::Type(_)));
    assert!(format!("{}", err).contains("(2, 3)"));
    let err = Interval::integer("[4,4)").expect("half open point").hyphenized().unwrap_err();
    assert!(matches!(err, IntervalError::Type(_)));
}
