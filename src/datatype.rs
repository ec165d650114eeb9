// used for dates and timestamps
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
// used for decimal numbers
use bigdecimal::{BigDecimal, ToPrimitive};

// used to print out readable forms of a value
use std::fmt;
// values are kept in hash based collections
use std::hash::{Hash, Hasher};
// custom made ordering so that the infinities end up at the extremes
use std::cmp::Ordering;

use crate::error::{IntervalError, Result};

// ------------- Value -------------
/// A bound value of an interval.
///
/// The two infinity sentinels belong to every domain and sort before and
/// after every finite value. Within one domain the ordering is total; `NaN`
/// is never accepted as a float value, so floats order totally as well.
#[derive(Clone, Debug)]
pub enum Value {
    NegInfinity,
    Integer(i64),
    Float(f64),
    Decimal(BigDecimal),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Character(char),
    PosInfinity,
}

pub const INFINITY: Value = Value::PosInfinity;
pub const NEG_INFINITY: Value = Value::NegInfinity;

impl Value {
    fn rank(&self) -> u8 {
        match self {
            Value::NegInfinity => 0,
            Value::Integer(_) => 1,
            Value::Float(_) => 2,
            Value::Decimal(_) => 3,
            Value::Date(_) => 4,
            Value::DateTime(_) => 5,
            Value::Character(_) => 6,
            Value::PosInfinity => 7,
        }
    }
    pub fn is_infinite(&self) -> bool {
        matches!(self, Value::NegInfinity | Value::PosInfinity)
    }
    pub fn is_finite(&self) -> bool {
        !self.is_infinite()
    }
    pub fn kind(&self) -> &'static str {
        match self {
            Value::NegInfinity | Value::PosInfinity => "infinity",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::Date(_) => "date",
            Value::DateTime(_) => "datetime",
            Value::Character(_) => "character",
        }
    }
    /// Numeric approximation, used for radius and centre.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Value::NegInfinity => Some(f64::NEG_INFINITY),
            Value::PosInfinity => Some(f64::INFINITY),
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Decimal(d) => d.to_f64(),
            _ => None,
        }
    }

    /// Moves the value one step up (`forward`) or down. Infinities stay put.
    pub fn offset(&self, step: &Distance, forward: bool) -> Result<Value> {
        let overflow =
            || IntervalError::IllegalArgument(format!("moving {} by {} overflows", self, step));
        let moved = match (self, step) {
            (Value::NegInfinity, _) | (Value::PosInfinity, _) => self.clone(),
            (Value::Integer(i), Distance::Integer(s)) => {
                let moved = if forward { i.checked_add(*s) } else { i.checked_sub(*s) };
                Value::Integer(moved.ok_or_else(overflow)?)
            }
            (Value::Float(f), Distance::Float(s)) => {
                let moved = if forward { f + s } else { f - s };
                if !moved.is_finite() {
                    return Err(overflow());
                }
                Value::Float(moved)
            }
            (Value::Decimal(d), Distance::Decimal(s)) => {
                Value::Decimal(if forward { d + s } else { d - s })
            }
            (Value::Date(d), Distance::Duration(s)) => {
                let moved =
                    if forward { d.checked_add_signed(*s) } else { d.checked_sub_signed(*s) };
                Value::Date(moved.ok_or_else(overflow)?)
            }
            (Value::DateTime(d), Distance::Duration(s)) => {
                let moved =
                    if forward { d.checked_add_signed(*s) } else { d.checked_sub_signed(*s) };
                Value::DateTime(moved.ok_or_else(overflow)?)
            }
            _ => {
                return Err(IntervalError::Type(format!(
                    "a {} value cannot be moved by a step of {}",
                    self.kind(),
                    step
                )));
            }
        };
        Ok(moved)
    }

    pub fn checked_add(&self, other: &Value) -> Result<Value> {
        let sum = match (self, other) {
            (Value::PosInfinity, Value::NegInfinity) | (Value::NegInfinity, Value::PosInfinity) => {
                return Err(IntervalError::Type(format!("{} + {} is indeterminate", self, other)));
            }
            (Value::PosInfinity, _) | (_, Value::PosInfinity) => Value::PosInfinity,
            (Value::NegInfinity, _) | (_, Value::NegInfinity) => Value::NegInfinity,
            (Value::Integer(a), Value::Integer(b)) => Value::Integer(a.checked_add(*b).ok_or_else(|| {
                IntervalError::IllegalArgument(format!("{} + {} overflows", a, b))
            })?),
            // an overflowing sum becomes the infinity sentinel
            (Value::Float(a), Value::Float(b)) => match a + b {
                sum if sum.is_nan() => {
                    let reason = format!("{} + {} is not a number", a, b);
                    return Err(IntervalError::IllegalArgument(reason));
                }
                sum => Value::from(sum),
            },
            (Value::Decimal(a), Value::Decimal(b)) => Value::Decimal(a + b),
            _ => {
                return Err(IntervalError::Unsupported(format!(
                    "cannot add a {} value to a {} value",
                    other.kind(),
                    self.kind()
                )));
            }
        };
        Ok(sum)
    }

    pub fn checked_sub(&self, other: &Value) -> Result<Value> {
        self.checked_add(&other.checked_neg()?)
    }

    pub fn checked_neg(&self) -> Result<Value> {
        let negated = match self {
            Value::NegInfinity => Value::PosInfinity,
            Value::PosInfinity => Value::NegInfinity,
            Value::Integer(i) => Value::Integer(i.checked_neg().ok_or_else(|| {
                IntervalError::IllegalArgument(format!("-({}) overflows", i))
            })?),
            Value::Float(f) => Value::from(-f),
            Value::Decimal(d) => Value::Decimal(-d.clone()),
            _ => {
                return Err(IntervalError::Unsupported(format!("a {} value cannot be negated", self.kind())));
            }
        };
        Ok(negated)
    }

    /// The (unsigned) distance from `other` to `self`.
    pub fn distance(&self, other: &Value) -> Result<Distance> {
        if self.is_infinite() || other.is_infinite() {
            return Ok(Distance::Infinite);
        }
        let distance = match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => Distance::Integer(
                a.checked_sub(*b)
                    .and_then(i64::checked_abs)
                    .ok_or_else(|| IntervalError::IllegalArgument(format!("{} - {} overflows", a, b)))?,
            ),
            (Value::Float(a), Value::Float(b)) => Distance::Float((a - b).abs()),
            (Value::Decimal(a), Value::Decimal(b)) => Distance::Decimal((a - b).abs()),
            (Value::Date(a), Value::Date(b)) => Distance::Duration(a.signed_duration_since(*b).abs()),
            (Value::DateTime(a), Value::DateTime(b)) => Distance::Duration(a.signed_duration_since(*b).abs()),
            (Value::Character(a), Value::Character(b)) => {
                Distance::Integer((*a as i64 - *b as i64).abs())
            }
            _ => {
                return Err(IntervalError::Type(format!(
                    "no distance between a {} value and a {} value",
                    self.kind(),
                    other.kind()
                )));
            }
        };
        Ok(distance)
    }
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    // NaN never makes it into a Value
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => cmp_f64(*a, *b),
            (Value::Decimal(a), Value::Decimal(b)) => a.cmp(b),
            (Value::Date(a), Value::Date(b)) => a.cmp(b),
            (Value::DateTime(a), Value::DateTime(b)) => a.cmp(b),
            (Value::Character(a), Value::Character(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}
impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Value {}
impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Value::NegInfinity | Value::PosInfinity => (),
            Value::Integer(i) => i.hash(state),
            // 0.0 and -0.0 are equal so they must hash alike
            Value::Float(f) => (if *f == 0.0 { 0.0f64 } else { *f }).to_bits().hash(state),
            Value::Decimal(d) => d.hash(state),
            Value::Date(d) => d.hash(state),
            Value::DateTime(d) => d.hash(state),
            Value::Character(c) => c.hash(state),
        }
    }
}
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::NegInfinity => write!(f, "-inf"),
            Value::PosInfinity => write!(f, "inf"),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::Date(d) => write!(f, "{}", d),
            Value::DateTime(d) => write!(f, "{}", d),
            Value::Character(c) => write!(f, "{}", c),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self { Value::Integer(i) }
}
impl From<i32> for Value {
    fn from(i: i32) -> Self { Value::Integer(i as i64) }
}
impl From<f64> for Value {
    fn from(f: f64) -> Self {
        if f == f64::INFINITY {
            Value::PosInfinity
        } else if f == f64::NEG_INFINITY {
            Value::NegInfinity
        } else {
            Value::Float(f)
        }
    }
}
impl From<BigDecimal> for Value {
    fn from(d: BigDecimal) -> Self { Value::Decimal(d) }
}
impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self { Value::Date(d) }
}
impl From<NaiveDateTime> for Value {
    fn from(d: NaiveDateTime) -> Self { Value::DateTime(d) }
}
impl From<char> for Value {
    fn from(c: char) -> Self { Value::Character(c) }
}

// ------------- Distance -------------
/// A distance between two values of a domain. Steps are distances too.
#[derive(Clone, Debug, PartialEq)]
pub enum Distance {
    Integer(i64),
    Float(f64),
    Decimal(BigDecimal),
    Duration(TimeDelta),
    Infinite,
}

impl Distance {
    pub fn is_infinite(&self) -> bool {
        matches!(self, Distance::Infinite)
    }
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Distance::Integer(i) => Some(*i as f64),
            Distance::Float(f) => Some(*f),
            Distance::Decimal(d) => d.to_f64(),
            Distance::Infinite => Some(f64::INFINITY),
            Distance::Duration(_) => None,
        }
    }
}
impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Distance::Integer(i) => write!(f, "{}", i),
            Distance::Float(x) => write!(f, "{}", x),
            Distance::Decimal(d) => write!(f, "{}", d),
            Distance::Duration(d) => write!(f, "{}", d),
            Distance::Infinite => write!(f, "inf"),
        }
    }
}
impl From<i64> for Distance {
    fn from(i: i64) -> Self { Distance::Integer(i) }
}
impl From<i32> for Distance {
    fn from(i: i32) -> Self { Distance::Integer(i as i64) }
}
impl From<f64> for Distance {
    fn from(f: f64) -> Self { Distance::Float(f) }
}
impl From<BigDecimal> for Distance {
    fn from(d: BigDecimal) -> Self { Distance::Decimal(d) }
}
impl From<TimeDelta> for Distance {
    fn from(d: TimeDelta) -> Self { Distance::Duration(d) }
}

// ------------- Literal -------------
/// A raw bound as given by the caller, before it is coerced into the
/// element type of an interval.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    /// An omitted bound, negative infinity on the lower side and positive
    /// infinity on the upper side.
    Unbounded,
    Text(String),
    Value(Value),
}

impl Literal {
    pub fn unbounded(&self) -> bool {
        match self {
            Literal::Unbounded => true,
            Literal::Text(t) => t.trim().is_empty(),
            Literal::Value(_) => false,
        }
    }
}
impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Literal::Unbounded => write!(f, ""),
            Literal::Text(t) => write!(f, "{}", t),
            Literal::Value(v) => write!(f, "{}", v),
        }
    }
}
impl From<Value> for Literal {
    fn from(v: Value) -> Self { Literal::Value(v) }
}
impl From<&Value> for Literal {
    fn from(v: &Value) -> Self { Literal::Value(v.clone()) }
}
impl From<&str> for Literal {
    fn from(s: &str) -> Self { Literal::Text(s.to_owned()) }
}
impl From<String> for Literal {
    fn from(s: String) -> Self { Literal::Text(s) }
}
impl<T: Into<Value>> From<Option<T>> for Literal {
    fn from(v: Option<T>) -> Self {
        v.map_or(Literal::Unbounded, |v| Literal::Value(v.into()))
    }
}

macro_rules! literal_from_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Literal {
                fn from(v: $t) -> Self { Literal::Value(Value::from(v)) }
            }
        )*
    };
}
literal_from_value!(i64, i32, f64, BigDecimal, NaiveDate, NaiveDateTime, char);
