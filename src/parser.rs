//! The bound parser.
//!
//! Turns whatever the caller hands over (a string in the interval grammar,
//! a pair, a single value or another interval) into raw bounds and
//! inclusivity flags. Nothing is coerced here, the interval does that once
//! it knows its domain.
//!
//! Grammar:
//! * `N` is the closed single value `[N, N]`
//! * `N-M` is the closed range `[N, M]`, either side may carry a minus sign
//!   (`-3--2`) and an omitted upper side is unbounded (`2-`). Text with more
//!   hyphens than that, such as a date, is a single value.
//! * `[N, M]`, `(N, M)`, `[N, M)` and `(N, M]` give explicit inclusivity,
//!   and either side may be omitted for an unbounded interval (`[1,)`)

use regex::Regex;
use lazy_static::lazy_static;

use crate::datatype::{Distance, Literal, Value};
use crate::domain::Domain;
use crate::error::{IntervalError, Result};
use crate::interval::Interval;

lazy_static! {
    static ref HYPHEN_FORM: Regex =
        Regex::new(r"^\s*(-?[^-\s]*)\s*(?:-\s*(-?[^-\s]*))?\s*$").expect("hyphen grammar compiles");
}

/// The container a pair came in. Tuples default to an open interval and
/// lists to a closed one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Tuple,
    List,
}

/// Every input shape an interval can be built from.
#[derive(Clone, Debug)]
pub enum Bounds {
    Text(String),
    Pair { lower: Literal, upper: Literal, shape: Shape },
    Single(Literal),
    Interval(Interval),
}

/// What the parser hands back to the interval.
#[derive(Clone, Debug, PartialEq)]
pub struct RawBounds {
    pub lower: Literal,
    pub upper: Literal,
    pub lower_inclusive: bool,
    pub upper_inclusive: bool,
    /// Only known when the input was another interval.
    pub domain: Option<Domain>,
    pub step: Option<Distance>,
}

impl RawBounds {
    fn new(lower: Literal, upper: Literal, lower_inclusive: bool, upper_inclusive: bool) -> Self {
        Self {
            lower,
            upper,
            lower_inclusive,
            upper_inclusive,
            domain: None,
            step: None,
        }
    }
}

/// Parses any input shape, then applies explicit inclusivity overrides.
pub fn parse_bounds(bounds: Bounds, lower_inclusive: Option<bool>, upper_inclusive: Option<bool>) -> Result<RawBounds> {
    let mut raw = match bounds {
        Bounds::Text(text) => parse_str(&text)?,
        Bounds::Pair { lower, upper, shape } => {
            let inclusive = shape == Shape::List;
            RawBounds::new(lower, upper, inclusive, inclusive)
        }
        Bounds::Single(value) => RawBounds::new(value.clone(), value, true, true),
        Bounds::Interval(interval) => RawBounds {
            lower: Literal::Value(interval.lower().clone()),
            upper: Literal::Value(interval.upper().clone()),
            lower_inclusive: interval.lower_inclusive(),
            upper_inclusive: interval.upper_inclusive(),
            domain: Some(interval.domain()),
            step: interval.step().cloned(),
        },
    };
    if let Some(inclusive) = lower_inclusive {
        raw.lower_inclusive = inclusive;
    }
    if let Some(inclusive) = upper_inclusive {
        raw.upper_inclusive = inclusive;
    }
    Ok(raw)
}

/// Parses the string grammar.
pub fn parse_str(text: &str) -> Result<RawBounds> {
    if text.contains(',') {
        parse_bracket_form(text)
    } else {
        parse_hyphen_form(text)
    }
}

fn side(text: &str) -> Literal {
    let text = text.trim();
    if text.is_empty() {
        Literal::Unbounded
    } else {
        Literal::Text(text.to_owned())
    }
}

fn parse_bracket_form(text: &str) -> Result<RawBounds> {
    let trimmed = text.trim();
    let invalid = |reason: &str| {
        IntervalError::IllegalArgument(format!("invalid interval '{}': {}", text, reason))
    };
    let lower_inclusive = match trimmed.chars().next() {
        Some('[') => true,
        Some('(') => false,
        _ => return Err(invalid("expected '[' or '(' at the start")),
    };
    let upper_inclusive = match trimmed.chars().last() {
        Some(']') => true,
        Some(')') => false,
        _ => return Err(invalid("expected ']' or ')' at the end")),
    };
    let inner = trimmed
        .get(1..trimmed.len().saturating_sub(1))
        .ok_or_else(|| invalid("missing bounds"))?;
    let mut parts = inner.split(',');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(lower), Some(upper), None) => Ok(RawBounds::new(side(lower), side(upper), lower_inclusive, upper_inclusive)),
        _ => Err(invalid("expected exactly one comma")),
    }
}

fn parse_hyphen_form(text: &str) -> Result<RawBounds> {
    let Some(captures) = HYPHEN_FORM.captures(text) else {
        // too many hyphens for a range, as in "2000-01-01", so a single value
        let value = side(text);
        if value.unbounded() {
            return Err(IntervalError::IllegalArgument(format!("invalid interval '{}'", text)));
        }
        return Ok(RawBounds::new(value.clone(), value, true, true));
    };
    let lower = captures.get(1).map_or("", |m| m.as_str());
    if lower.is_empty() {
        return Err(IntervalError::IllegalArgument(format!("invalid interval '{}': missing lower bound", text)));
    }
    let raw = match captures.get(2) {
        // a single value
        None => RawBounds::new(side(lower), side(lower), true, true),
        Some(upper) => RawBounds::new(side(lower), side(upper.as_str()), true, true),
    };
    Ok(raw)
}

// ------------- Conversions into Bounds -------------
impl From<&str> for Bounds {
    fn from(s: &str) -> Self { Bounds::Text(s.to_owned()) }
}
impl From<String> for Bounds {
    fn from(s: String) -> Self { Bounds::Text(s) }
}
impl From<Interval> for Bounds {
    fn from(i: Interval) -> Self { Bounds::Interval(i) }
}
impl From<&Interval> for Bounds {
    fn from(i: &Interval) -> Self { Bounds::Interval(i.clone()) }
}
impl<A: Into<Literal>, B: Into<Literal>> From<(A, B)> for Bounds {
    fn from((lower, upper): (A, B)) -> Self {
        Bounds::Pair { lower: lower.into(), upper: upper.into(), shape: Shape::Tuple }
    }
}
impl<T: Into<Literal>> From<[T; 2]> for Bounds {
    fn from([lower, upper]: [T; 2]) -> Self {
        Bounds::Pair { lower: lower.into(), upper: upper.into(), shape: Shape::List }
    }
}
impl From<Literal> for Bounds {
    fn from(l: Literal) -> Self { Bounds::Single(l) }
}

macro_rules! single_bound {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Bounds {
                fn from(v: $t) -> Self { Bounds::Single(Literal::from(v)) }
            }
        )*
    };
}
single_bound!(i64, i32, f64, char, Value, bigdecimal::BigDecimal, chrono::NaiveDate, chrono::NaiveDateTime);
