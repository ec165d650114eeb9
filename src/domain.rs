//! Element domains: the closed set of ordered types an interval can span.
//!
//! A [`Domain`] knows its default step, which steps it accepts, how to
//! coerce raw [`Literal`]s into its [`Value`]s and how to snap a value to a
//! multiple of a step. The type guessing probe used by
//! [`crate::interval::Interval::guess`] also lives here.

// used for dates and timestamps
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
// used for decimal numbers
use bigdecimal::{BigDecimal, ToPrimitive};
// domains can be named in the settings
use serde::Deserialize;
use tracing::trace;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::datatype::{Distance, Literal, Value};
use crate::error::{IntervalError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Integer,
    Float,
    Decimal,
    Date,
    DateTime,
    Character,
}

/// Which end of an interval a literal is meant for. An omitted bound is
/// negative infinity below and positive infinity above.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Lower,
    Upper,
}

impl Side {
    fn unbounded(self) -> Value {
        match self {
            Side::Lower => Value::NegInfinity,
            Side::Upper => Value::PosInfinity,
        }
    }
}

/// Priority used when the two bounds of a guessed interval disagree about
/// their type. The earlier entry wins; a bound that reveals nothing (an
/// infinity or an omitted bound) ranks after all of them.
pub const GUESS_PRIORITY: [Domain; 6] = [
    Domain::DateTime,
    Domain::Date,
    Domain::Decimal,
    Domain::Float,
    Domain::Integer,
    Domain::Character,
];

/// Default order in which text bounds are tried against the domains.
pub const TEXT_PROBE: [Domain; 6] = [
    Domain::Integer,
    Domain::Float,
    Domain::Decimal,
    Domain::Date,
    Domain::DateTime,
    Domain::Character,
];

/// Used when neither bound tells us anything, as in `(,)`.
pub const NUMERIC_FALLBACK: Domain = Domain::Float;

fn infinity_text(text: &str, side: Side) -> Option<Value> {
    match text.to_ascii_lowercase().as_str() {
        "inf" | "+inf" | "infinity" | "+infinity" => Some(Value::PosInfinity),
        "-inf" | "-infinity" => Some(Value::NegInfinity),
        "" => Some(side.unbounded()),
        _ => None,
    }
}

// round half to even on the integer grid of `step`
fn round_to_multiple(value: i64, step: i64) -> Option<i64> {
    let quotient = value.div_euclid(step);
    let remainder = value.rem_euclid(step) as i128;
    let quotient = match (2 * remainder).cmp(&(step as i128)) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient.checked_add(1)?,
        Ordering::Equal if quotient % 2 == 0 => quotient,
        Ordering::Equal => quotient.checked_add(1)?,
    };
    quotient.checked_mul(step)
}

fn decimal_from_f64(f: f64) -> Result<BigDecimal> {
    // going through the shortest string form keeps 0.1 as 0.1
    BigDecimal::from_str(&f.to_string())
        .map_err(|e| IntervalError::IllegalArgument(format!("{} is not a decimal: {}", f, e)))
}

impl Domain {
    pub fn name(&self) -> &'static str {
        match self {
            Domain::Integer => "integer",
            Domain::Float => "float",
            Domain::Decimal => "decimal",
            Domain::Date => "date",
            Domain::DateTime => "datetime",
            Domain::Character => "character",
        }
    }

    /// The minimal distance between two values, for discrete domains.
    pub fn default_step(&self) -> Option<Distance> {
        match self {
            Domain::Integer => Some(Distance::Integer(1)),
            Domain::Date => Some(Distance::Duration(TimeDelta::days(1))),
            _ => None,
        }
    }

    pub fn arithmetic(&self) -> bool {
        matches!(self, Domain::Integer | Domain::Float | Domain::Decimal)
    }

    /// Checks that `step` can be used in this domain and brings it into the
    /// domain's own representation.
    pub fn validate_step(&self, step: Distance) -> Result<Distance> {
        let incompatible = |step: &Distance| {
            IntervalError::Type(format!("{} is not a valid step for a {} interval", step, self))
        };
        let step = match (self, step) {
            (Domain::Integer, Distance::Integer(i)) => Distance::Integer(i),
            (Domain::Integer, Distance::Float(f)) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                Distance::Integer(f as i64)
            }
            (Domain::Integer, Distance::Decimal(d)) if d.is_integer() => {
                Distance::Integer(d.to_i64().ok_or_else(|| incompatible(&Distance::Decimal(d.clone())))?)
            }
            (Domain::Float, Distance::Float(f)) => Distance::Float(f),
            (Domain::Float, Distance::Integer(i)) => Distance::Float(i as f64),
            (Domain::Float, Distance::Decimal(d)) => {
                Distance::Float(d.to_f64().ok_or_else(|| incompatible(&Distance::Decimal(d.clone())))?)
            }
            (Domain::Decimal, Distance::Decimal(d)) => Distance::Decimal(d),
            (Domain::Decimal, Distance::Integer(i)) => Distance::Decimal(BigDecimal::from(i)),
            (Domain::Decimal, Distance::Float(f)) => Distance::Decimal(decimal_from_f64(f)?),
            (Domain::Date, Distance::Integer(days)) => Distance::Duration(
                TimeDelta::try_days(days).ok_or_else(|| incompatible(&Distance::Integer(days)))?,
            ),
            (Domain::Date, Distance::Duration(d)) if d == TimeDelta::days(d.num_days()) => {
                Distance::Duration(d)
            }
            (Domain::DateTime, Distance::Duration(d)) if d.num_microseconds().is_some() => {
                Distance::Duration(d)
            }
            (_, step) => return Err(incompatible(&step)),
        };
        let positive = match &step {
            Distance::Integer(i) => *i > 0,
            Distance::Float(f) => f.is_finite() && *f > 0.0,
            Distance::Decimal(d) => *d > BigDecimal::from(0),
            Distance::Duration(d) => *d > TimeDelta::zero(),
            Distance::Infinite => false,
        };
        if !positive {
            return Err(IntervalError::IllegalArgument(format!("the step must be positive, got {}", step)));
        }
        Ok(step)
    }

    /// Coerces a raw bound into a value of this domain.
    pub fn coerce(&self, literal: &Literal, side: Side) -> Result<Value> {
        match literal {
            Literal::Unbounded => Ok(side.unbounded()),
            Literal::Text(text) => {
                let text = text.trim();
                match infinity_text(text, side) {
                    Some(infinity) => Ok(infinity),
                    None => self.parse(text),
                }
            }
            Literal::Value(value) => self.convert(value),
        }
    }

    /// Converts an already typed value, refusing conversions that would
    /// lose information.
    pub fn convert(&self, value: &Value) -> Result<Value> {
        let lossy = |reason: &str| {
            IntervalError::Type(format!("could not coerce {} to {}, {}", value, self, reason))
        };
        let mismatch = || {
            IntervalError::Type(format!("a {} value cannot be coerced to {}", value.kind(), self))
        };
        let converted = match (self, value) {
            (_, Value::NegInfinity) | (_, Value::PosInfinity) => value.clone(),
            (_, Value::Float(f)) if f.is_nan() => {
                return Err(IntervalError::IllegalArgument("NaN is not an interval bound".into()));
            }
            (_, Value::Float(f)) if f.is_infinite() => Value::from(*f),

            (Domain::Integer, Value::Integer(_)) => value.clone(),
            (Domain::Integer, Value::Float(f)) => {
                if f.fract() != 0.0 || f.abs() >= i64::MAX as f64 {
                    return Err(lossy("decimal places would be lost"));
                }
                Value::Integer(*f as i64)
            }
            (Domain::Integer, Value::Decimal(d)) => {
                if !d.is_integer() {
                    return Err(lossy("decimal places would be lost"));
                }
                Value::Integer(d.to_i64().ok_or_else(|| lossy("it is out of range"))?)
            }

            (Domain::Float, Value::Float(_)) => value.clone(),
            (Domain::Float, Value::Integer(i)) => Value::Float(*i as f64),
            (Domain::Float, Value::Decimal(d)) => {
                Value::Float(d.to_f64().ok_or_else(|| lossy("it is out of range"))?)
            }

            (Domain::Decimal, Value::Decimal(_)) => value.clone(),
            (Domain::Decimal, Value::Integer(i)) => Value::Decimal(BigDecimal::from(*i)),
            (Domain::Decimal, Value::Float(f)) => Value::Decimal(decimal_from_f64(*f)?),

            (Domain::Date, Value::Date(_)) => value.clone(),
            (Domain::Date, Value::DateTime(d)) => {
                if d.time() != NaiveTime::MIN {
                    return Err(lossy("the time of day would be lost"));
                }
                Value::Date(d.date())
            }

            (Domain::DateTime, Value::DateTime(_)) => value.clone(),
            (Domain::DateTime, Value::Date(d)) => Value::DateTime(d.and_time(NaiveTime::MIN)),

            (Domain::Character, Value::Character(_)) => value.clone(),
            _ => return Err(mismatch()),
        };
        Ok(converted)
    }

    /// Parses a trimmed, non-empty text into a value of this domain.
    pub fn parse(&self, text: &str) -> Result<Value> {
        let unparseable = || {
            IntervalError::IllegalArgument(format!("could not parse '{}' as {}", text, self))
        };
        let parsed = match self {
            Domain::Integer => match text.parse::<i64>() {
                Ok(i) => Value::Integer(i),
                // "2.0" is still an integer, "2.5" is a lossy coercion
                Err(_) => {
                    let decimal = BigDecimal::from_str(text).map_err(|_| unparseable())?;
                    self.convert(&Value::Decimal(decimal))?
                }
            },
            Domain::Float => {
                let f = text.parse::<f64>().map_err(|_| unparseable())?;
                self.convert(&Value::from(f))?
            }
            Domain::Decimal => Value::Decimal(BigDecimal::from_str(text).map_err(|_| unparseable())?),
            Domain::Date => Value::Date(NaiveDate::from_str(text).map_err(|_| unparseable())?),
            Domain::DateTime => {
                let datetime = NaiveDateTime::from_str(text)
                    .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f"))
                    .or_else(|_| NaiveDate::from_str(text).map(|d| d.and_time(NaiveTime::MIN)))
                    .map_err(|_| unparseable())?;
                Value::DateTime(datetime)
            }
            Domain::Character => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Value::Character(c),
                    _ => return Err(unparseable()),
                }
            }
        };
        Ok(parsed)
    }

    /// Snaps a value to the nearest multiple of `step`, counted from the
    /// domain's origin, rounding half to even.
    pub fn round_to_step(&self, value: Value, step: &Distance) -> Result<Value> {
        let overflow = || {
            IntervalError::IllegalArgument(format!("rounding {} to a step of {} overflows", value, step))
        };
        let rounded = match (&value, step) {
            (Value::NegInfinity, _) | (Value::PosInfinity, _) => value.clone(),
            (Value::Integer(i), Distance::Integer(s)) => {
                Value::Integer(round_to_multiple(*i, *s).ok_or_else(overflow)?)
            }
            (Value::Float(f), Distance::Float(s)) => {
                let snapped = s * ((1.0 / s) * f).round_ties_even();
                if !snapped.is_finite() {
                    return Err(overflow());
                }
                Value::Float(snapped)
            }
            (Value::Decimal(d), Distance::Decimal(s)) => {
                // computed in floating point and brought back as an exact decimal
                let (d, s) = match (d.to_f64(), s.to_f64()) {
                    (Some(d), Some(s)) => (d, s),
                    _ => return Err(overflow()),
                };
                Value::Decimal(decimal_from_f64(s * ((1.0 / s) * d).round_ties_even())?)
            }
            (Value::Date(d), Distance::Duration(s)) => {
                let origin = NaiveDate::default();
                let days = d.signed_duration_since(origin).num_days();
                let days = round_to_multiple(days, s.num_days()).ok_or_else(overflow)?;
                let delta = TimeDelta::try_days(days).ok_or_else(overflow)?;
                Value::Date(origin.checked_add_signed(delta).ok_or_else(overflow)?)
            }
            (Value::DateTime(d), Distance::Duration(s)) => {
                let origin = NaiveDateTime::default();
                let micros = d.signed_duration_since(origin).num_microseconds().ok_or_else(overflow)?;
                let step_micros = s.num_microseconds().ok_or_else(overflow)?;
                let micros = round_to_multiple(micros, step_micros).ok_or_else(overflow)?;
                Value::DateTime(
                    origin
                        .checked_add_signed(TimeDelta::microseconds(micros))
                        .ok_or_else(overflow)?,
                )
            }
            _ => {
                return Err(IntervalError::Type(format!(
                    "a {} value cannot be rounded to a step of {}",
                    value.kind(),
                    step
                )));
            }
        };
        if rounded != value {
            trace!(%value, %rounded, %step, "snapped bound to step");
        }
        Ok(rounded)
    }

    /// What a single raw bound reveals about the domain. `None` means the
    /// bound is infinite or omitted.
    pub fn guess_literal(literal: &Literal, probe: &[Domain]) -> Result<Option<Domain>> {
        let guessed = match literal {
            Literal::Unbounded => None,
            Literal::Value(value) => Domain::of(value),
            Literal::Text(text) => {
                let text = text.trim();
                if infinity_text(text, Side::Lower).is_some() {
                    None
                } else {
                    let domain = probe.iter().find(|domain| domain.parse(text).is_ok()).copied();
                    match domain {
                        Some(domain) => Some(domain),
                        None => {
                            return Err(IntervalError::IllegalArgument(format!(
                                "no domain matched '{}'",
                                text
                            )));
                        }
                    }
                }
            }
        };
        Ok(guessed)
    }

    /// The domain a typed value belongs to.
    pub fn of(value: &Value) -> Option<Domain> {
        match value {
            Value::NegInfinity | Value::PosInfinity => None,
            Value::Integer(_) => Some(Domain::Integer),
            Value::Float(f) if f.is_infinite() => None,
            Value::Float(_) => Some(Domain::Float),
            Value::Decimal(_) => Some(Domain::Decimal),
            Value::Date(_) => Some(Domain::Date),
            Value::DateTime(_) => Some(Domain::DateTime),
            Value::Character(_) => Some(Domain::Character),
        }
    }

    /// Combines two guesses; the more specific domain wins.
    pub fn prevailing(first: Option<Domain>, second: Option<Domain>) -> Option<Domain> {
        match (first, second) {
            (Some(a), Some(b)) => {
                let index = |d: Domain| GUESS_PRIORITY.iter().position(|p| *p == d);
                if index(a) <= index(b) { Some(a) } else { Some(b) }
            }
            (a, None) => a,
            (None, b) => b,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Domain {
    type Err = IntervalError;
    fn from_str(s: &str) -> Result<Domain> {
        match s.trim().to_ascii_lowercase().as_str() {
            "integer" | "int" => Ok(Domain::Integer),
            "float" => Ok(Domain::Float),
            "decimal" => Ok(Domain::Decimal),
            "date" => Ok(Domain::Date),
            "datetime" | "timestamp" => Ok(Domain::DateTime),
            "character" | "char" => Ok(Domain::Character),
            other => Err(IntervalError::IllegalArgument(format!("unknown domain '{}'", other))),
        }
    }
}
