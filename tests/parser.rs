use intervals::parser::{parse_bounds, parse_str};
use intervals::{Bounds, Domain, Interval, IntervalError, Literal};

fn text(s: &str) -> Literal {
    Literal::Text(s.to_owned())
}

#[test]
fn bracket_form() {
    let raw = parse_str("[1, 5)").expect("bracket form");
    assert_eq!(raw.lower, text("1"));
    assert_eq!(raw.upper, text("5"));
    assert!(raw.lower_inclusive);
    assert!(!raw.upper_inclusive);
    assert_eq!(raw.domain, None);

    let raw = parse_str("(,)").expect("unbounded");
    assert_eq!(raw.lower, Literal::Unbounded);
    assert_eq!(raw.upper, Literal::Unbounded);
    assert!(!raw.lower_inclusive && !raw.upper_inclusive);

    let raw = parse_str("  (a , b]  ").expect("padded");
    assert_eq!(raw.lower, text("a"));
    assert_eq!(raw.upper, text("b"));
}

#[test]
fn hyphen_form() {
    let raw = parse_str("1-5").expect("range");
    assert_eq!((raw.lower, raw.upper), (text("1"), text("5")));
    assert!(raw.lower_inclusive && raw.upper_inclusive);

    let raw = parse_str("-3--2").expect("negative range");
    assert_eq!((raw.lower, raw.upper), (text("-3"), text("-2")));

    let raw = parse_str("-5").expect("negative value");
    assert_eq!((raw.lower, raw.upper), (text("-5"), text("-5")));

    let raw = parse_str("2 -").expect("open ended");
    assert_eq!((raw.lower, raw.upper), (text("2"), Literal::Unbounded));

    let raw = parse_str("2000-01-01").expect("date");
    assert_eq!((raw.lower, raw.upper), (text("2000-01-01"), text("2000-01-01")));
}

#[test]
fn malformed_text() {
    for bad in ["", "   ", "[1, 2, 3]", "1, 2]", "[1, 2", "- 5", "{1, 2}"] {
        let err = parse_str(bad).unwrap_err();
        assert!(matches!(err, IntervalError::IllegalArgument(_)), "{bad:?}");
    }
}

#[test]
fn explicit_inclusivity_overrides_the_shape() {
    let raw = parse_bounds(Bounds::from((1, 2)), None, Some(true)).expect("tuple");
    assert!(!raw.lower_inclusive);
    assert!(raw.upper_inclusive);

    let raw = parse_bounds(Bounds::from("[1, 2]"), Some(false), None).expect("text");
    assert!(!raw.lower_inclusive);
    assert!(raw.upper_inclusive);
}

#[test]
fn single_values_and_intervals() {
    let raw = parse_bounds(Bounds::from(4), None, None).expect("scalar");
    assert_eq!(raw.lower, raw.upper);
    assert!(raw.lower_inclusive && raw.upper_inclusive);

    let interval = Interval::integer("(1, 4]").expect("interval");
    let raw = parse_bounds(Bounds::from(&interval), None, None).expect("copy");
    assert_eq!(raw.domain, Some(Domain::Integer));
    assert_eq!(raw.step, interval.step().cloned());
    assert!(!raw.lower_inclusive && raw.upper_inclusive);
}
