use chrono::NaiveDate;
use intervals::{Domain, Interval, IntervalError, Options};

#[test]
fn closed_open_by_default() {
    let interval = Interval::integer("(1, 4]").expect("open closed");
    assert_eq!(interval.canonical().expect("canonical").normalized(), "[2, 5)");
}

#[test]
fn requested_inclusivity() {
    let interval = Interval::integer("[1, 5)").expect("closed open");
    assert_eq!(interval.canonicalize(true, true).expect("closed").normalized(), "[1, 4]");
    assert_eq!(interval.canonicalize(false, false).expect("open").normalized(), "(0, 5)");
    assert_eq!(interval.canonicalize(false, true).expect("open closed").normalized(), "(0, 4]");
}

#[test]
fn canonical_form_is_a_fixed_point() {
    for text in ["[1, 4]", "(1, 4)", "(0, 10]", "[3, 3]", "[1,)", "(,5]"] {
        let once = Interval::integer(text).expect("interval").canonical().expect("canonical");
        let twice = once.canonical().expect("canonical again");
        assert_eq!(once.normalized(), twice.normalized(), "{text}");
        assert_eq!(once, twice, "{text}");
    }
}

#[test]
fn equivalent_bounds_canonicalize_alike() {
    let closed = Interval::integer([1, 4]).expect("closed").canonical().expect("canonical");
    let open = Interval::integer("[1, 5)").expect("half open").canonical().expect("canonical");
    assert_eq!(closed.normalized(), open.normalized());
}

#[test]
fn empty_intervals_are_left_alone() {
    let empty = Interval::integer((2, 3)).expect("empty");
    assert_eq!(empty.canonical().expect("canonical").normalized(), "(2, 3)");
    let empty = Interval::with_options(Domain::Integer, (7, 7), Options::new().permissive(true)).expect("empty");
    assert_eq!(empty.canonicalize(false, true).expect("canonical").normalized(), "[7, 7)");
}

#[test]
fn infinite_bounds_stay_put() {
    let interval = Interval::integer("(1,)").expect("unbounded");
    assert_eq!(interval.canonical().expect("canonical").normalized(), "[2,)");
    let interval = Interval::integer("(,1]").expect("unbounded");
    assert_eq!(interval.canonical().expect("canonical").normalized(), "[, 2)");
}

#[test]
fn dates() {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2020, 1, 5).unwrap();
    let interval = Interval::date((start, end)).expect("dates");
    assert_eq!(interval.canonical().expect("canonical").normalized(), "[2020-01-02, 2020-01-05)");
}

#[test]
fn continuous_intervals_cannot_be_canonicalized() {
    let err = Interval::float([1.0, 2.0]).expect("floats").canonical().unwrap_err();
    assert!(matches!(err, IntervalError::Type(_)));
    assert!(format!("{}", err).contains("discrete"));
}

#[test]
fn stepped_floats_can() {
    let interval = Interval::with_options(Domain::Float, "(0.5, 2]", Options::new().step(0.5)).expect("stepped");
    assert_eq!(interval.canonical().expect("canonical").normalized(), "[1, 2.5)");
}
