use chrono::NaiveDate;
use intervals::{Interval, IntervalError, Value};

#[test]
fn addition() {
    let a = Interval::integer([1, 3]).expect("left");
    let b = Interval::integer([1, 2]).expect("right");
    assert_eq!(a.checked_add(&b).expect("sum"), Interval::integer([2, 5]).expect("expected"));
    assert_eq!((&a + &b).expect("operator"), Interval::integer([2, 5]).expect("expected"));
    assert_eq!(a.checked_add(1).expect("scalar"), Interval::integer([2, 4]).expect("expected"));
    assert_eq!(a.checked_add([1, 2]).expect("list"), Interval::integer([2, 5]).expect("expected"));

    let floats = Interval::float([1.5, 2.5]).expect("floats");
    assert_eq!(floats.checked_add(1.0).expect("float sum").normalized(), "[2.5, 3.5]");

    let decimals = Interval::decimal("[0.1, 0.2]").expect("decimals");
    assert_eq!(decimals.checked_add("[0.2, 0.2]").expect("decimal sum").normalized(), "[0.3, 0.4]");
}

#[test]
fn subtraction() {
    let a = Interval::integer([1, 3]).expect("left");
    let b = Interval::integer([1, 2]).expect("right");
    assert_eq!(a.checked_sub(&b).expect("difference"), Interval::integer([-1, 2]).expect("expected"));
    assert_eq!((a.clone() - b.clone()).expect("operator"), Interval::integer([-1, 2]).expect("expected"));
    assert_eq!(a.rsub(10).expect("reflected"), Interval::integer([7, 9]).expect("expected"));
}

#[test]
fn subtraction_inclusivity() {
    let a = Interval::float("[1, 3)").expect("left");
    let b = Interval::float("(0, 1]").expect("right");
    let difference = a.checked_sub(&b).expect("difference");
    assert_eq!(difference.lower(), &Value::Float(0.0));
    assert!(difference.lower_inclusive());
    assert_eq!(difference.upper(), &Value::Float(3.0));
    assert!(!difference.upper_inclusive());
}

#[test]
fn infinite_bounds() {
    let unbounded = Interval::integer("[1,)").expect("unbounded");
    let sum = unbounded.checked_add([1, 2]).expect("sum");
    assert_eq!(sum.lower(), &Value::Integer(2));
    assert_eq!(sum.upper(), &Value::PosInfinity);

    let everything = Interval::integer("(,)").expect("everything");
    let difference = everything.checked_sub(&everything).expect("difference");
    assert_eq!(difference.lower(), &Value::NegInfinity);
    assert_eq!(difference.upper(), &Value::PosInfinity);

    let top = Interval::integer([f64::INFINITY, f64::INFINITY]).expect("infinite point");
    let err = top.checked_add("(,)").unwrap_err();
    assert!(matches!(err, IntervalError::Type(_)));
}

#[test]
fn overflow() {
    let top = Interval::integer([i64::MAX, i64::MAX]).expect("largest point");
    let err = top.checked_add(1).unwrap_err();
    assert!(matches!(err, IntervalError::IllegalArgument(_)));
}

#[test]
fn float_overflow_reaches_infinity() {
    let huge = Interval::float([1.0, 1.7e308]).expect("huge");
    let sum = huge.checked_add(&huge).expect("sum");
    assert_eq!(sum.lower(), &Value::Float(2.0));
    assert_eq!(sum.upper(), &Value::PosInfinity);
    assert!(!sum.upper().is_finite());

    let spread = sum.checked_sub(&sum).expect("difference");
    assert_eq!(spread.lower(), &Value::NegInfinity);
    assert_eq!(spread.upper(), &Value::PosInfinity);

    let beyond = Interval::float([1e308, 1.7e308]).expect("beyond");
    let doubled = beyond.checked_add(&beyond).expect("doubled");
    assert_eq!(doubled.lower(), &Value::PosInfinity);
    let err = doubled.checked_sub(&doubled).unwrap_err();
    assert!(matches!(err, IntervalError::Type(_)));
}

#[test]
fn unsupported_operands() {
    let numbers = Interval::integer([1, 2]).expect("numbers");
    let err = numbers.checked_add('a').unwrap_err();
    assert!(err.is_unsupported());
    let err = numbers.checked_sub("[x, y]").unwrap_err();
    assert!(err.is_unsupported());
    let err = numbers.checked_add(1.5).unwrap_err();
    assert!(err.is_unsupported());

    let day = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let dates = Interval::date(day).expect("dates");
    let err = dates.checked_add(day).unwrap_err();
    assert!(err.is_unsupported());
    assert!(format!("{}", err).contains("addition"));
    let letters = Interval::character("a-c").expect("letters");
    assert!(letters.checked_sub('a').unwrap_err().is_unsupported());
}

#[test]
fn glb_lub_inf_sup() {
    let a = Interval::integer([-2, 2]).expect("interval");
    assert_eq!(a.glb(1).expect("glb"), Interval::integer([-2, 1]).expect("expected"));
    assert_eq!(a.lub(1).expect("lub"), Interval::integer([1, 2]).expect("expected"));
    assert_eq!(a.inf(1).expect("inf"), Interval::integer(1).expect("expected"));
    assert_eq!(a.sup(1).expect("sup"), Interval::integer([-2, 2]).expect("expected"));

    let b = Interval::integer([0, 5]).expect("other");
    assert_eq!(a.glb(&b).expect("glb"), Interval::integer([-2, 2]).expect("expected"));
    assert_eq!(a.lub(&b).expect("lub"), Interval::integer([0, 5]).expect("expected"));
    assert_eq!(a.inf(&b).expect("inf"), Interval::integer([0, 2]).expect("expected"));
    assert_eq!(a.sup(&b).expect("sup"), Interval::integer([-2, 5]).expect("expected"));

    // works outside the arithmetic domains
    let letters = Interval::character("b-d").expect("letters");
    let extremes = letters.sup('a').expect("sup");
    assert_eq!(extremes.lower(), &Value::Character('a'));
    assert_eq!(extremes.upper(), &Value::Character('d'));
}

#[test]
fn extremes_take_the_flags_of_the_smaller_operand() {
    // neither operand lies wholly below the other, so both flags come from the argument
    let a = Interval::float("[1, 3)").expect("inner");
    let b = Interval::float("(0, 5]").expect("outer");
    assert_eq!(a.glb(&b).expect("glb").normalized(), "(0, 3]");
    assert_eq!(a.lub(&b).expect("lub").normalized(), "(1, 5]");

    // [0, 3] lies below (2, 4): its lower flag and the upper flag of (2, 4)
    let c = Interval::float("(2, 4)").expect("higher");
    let d = Interval::float("[0, 3]").expect("lower");
    assert_eq!(c.lub(&d).expect("lub").normalized(), "[2, 4)");
    assert_eq!(c.glb(&d).expect("glb").normalized(), "[0, 3)");
    assert_eq!(c.inf(&d).expect("inf").normalized(), "[2, 3)");
    assert_eq!(c.sup(&d).expect("sup").normalized(), "[0, 4)");
    assert_eq!(d.glb(&c).expect("reversed glb").normalized(), "[0, 3)");

    let e = Interval::float("(0, 2]").expect("below");
    let f = Interval::float("[1, 3)").expect("above");
    let hull = e.sup(&f).expect("sup");
    assert!(!hull.lower_inclusive());
    assert!(!hull.upper_inclusive());
    assert_eq!(e.inf(&f).expect("inf").normalized(), "(1, 2)");
}
