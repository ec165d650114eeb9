//! Arithmetic and set operators on intervals.
//!
//! Every operator first coerces its operand into an interval of the left
//! hand side's domain. An operand that cannot be coerced gives
//! [`IntervalError::Unsupported`], which leaves the caller free to try the
//! reflected operation instead.

use std::cmp::{max, min, Ordering};
use std::ops::{Add, BitAnd, BitOr, Sub};

use crate::error::{IntervalError, Result};
use crate::interval::Interval;
use crate::parser::Bounds;

impl Interval {
    fn arithmetic_operand(&self, other: impl Into<Bounds>, operation: &str) -> Result<Interval> {
        if !self.domain().arithmetic() {
            return Err(IntervalError::Unsupported(format!(
                "{} is not defined for {} intervals",
                operation,
                self.domain()
            )));
        }
        self.coerce(other)
    }

    // The flags of the smaller interval, side by side. Ties go to `other`.
    fn smaller_flags(&self, other: &Interval) -> (bool, bool) {
        let lower_inclusive =
            if other.above(self) { self.lower_inclusive() } else { other.lower_inclusive() };
        let upper_inclusive =
            if self.above(other) { self.upper_inclusive() } else { other.upper_inclusive() };
        (lower_inclusive, upper_inclusive)
    }

    // ------------- Arithmetic -------------
    /// `[a, b] + [c, d] = [a + c, b + d]`
    pub fn checked_add(&self, other: impl Into<Bounds>) -> Result<Interval> {
        let other = self.arithmetic_operand(other, "addition")?;
        let (lower_inclusive, upper_inclusive) = self.smaller_flags(&other);
        self.derive(
            self.lower().checked_add(other.lower())?,
            self.upper().checked_add(other.upper())?,
            lower_inclusive,
            upper_inclusive,
        )
    }

    /// `[a, b] - [c, d] = [a - d, b - c]`
    pub fn checked_sub(&self, other: impl Into<Bounds>) -> Result<Interval> {
        let other = self.arithmetic_operand(other, "subtraction")?;
        self.derive(
            self.lower().checked_sub(other.upper())?,
            self.upper().checked_sub(other.lower())?,
            self.lower_inclusive() && other.upper_inclusive(),
            self.upper_inclusive() && other.lower_inclusive(),
        )
    }

    /// The reflected subtraction, `other - self`.
    pub fn rsub(&self, other: impl Into<Bounds>) -> Result<Interval> {
        self.arithmetic_operand(other, "subtraction")?.checked_sub(self)
    }

    // ------------- Bound-wise extremes -------------
    /// Greatest lower bound: the smaller bound on each side.
    pub fn glb(&self, other: impl Into<Bounds>) -> Result<Interval> {
        let other = self.coerce(other)?;
        let (lower_inclusive, upper_inclusive) = self.smaller_flags(&other);
        self.derive(
            min(self.lower(), other.lower()).clone(),
            min(self.upper(), other.upper()).clone(),
            lower_inclusive,
            upper_inclusive,
        )
    }
    /// Least upper bound: the larger bound on each side.
    pub fn lub(&self, other: impl Into<Bounds>) -> Result<Interval> {
        let other = self.coerce(other)?;
        let (lower_inclusive, upper_inclusive) = self.smaller_flags(&other);
        self.derive(
            max(self.lower(), other.lower()).clone(),
            max(self.upper(), other.upper()).clone(),
            lower_inclusive,
            upper_inclusive,
        )
    }
    /// The larger lower bound and the smaller upper bound.
    pub fn inf(&self, other: impl Into<Bounds>) -> Result<Interval> {
        let other = self.coerce(other)?;
        let (lower_inclusive, upper_inclusive) = self.smaller_flags(&other);
        self.derive(
            max(self.lower(), other.lower()).clone(),
            min(self.upper(), other.upper()).clone(),
            lower_inclusive,
            upper_inclusive,
        )
    }
    /// The smaller lower bound and the larger upper bound.
    pub fn sup(&self, other: impl Into<Bounds>) -> Result<Interval> {
        let other = self.coerce(other)?;
        let (lower_inclusive, upper_inclusive) = self.smaller_flags(&other);
        self.derive(
            min(self.lower(), other.lower()).clone(),
            max(self.upper(), other.upper()).clone(),
            lower_inclusive,
            upper_inclusive,
        )
    }

    // ------------- Set operators -------------
    /// True when the intervals share a value, or meet at a bound that one of
    /// them includes. Both intervals must be of the same domain.
    pub fn overlaps(&self, other: &Interval) -> bool {
        let crossing = self.upper() > other.lower() && other.upper() > self.lower();
        let touching_above =
            self.upper() == other.lower() && (self.upper_inclusive() || other.lower_inclusive());
        let touching_below =
            other.upper() == self.lower() && (other.upper_inclusive() || self.lower_inclusive());
        crossing || touching_above || touching_below
    }

    /// True when no value of the domain fits between the two intervals.
    /// Over the integers `[1, 2]` and `[3, 4]` are connected.
    pub fn is_connected(&self, other: &Interval) -> bool {
        match self.coerce(other) {
            Ok(other) => self.connected(&other),
            Err(_) => false,
        }
    }

    fn connected(&self, other: &Interval) -> bool {
        if self.overlaps(other) {
            return true;
        }
        if !(self.is_discrete() && other.is_discrete()) {
            return false;
        }
        self.between(other).is_ok_and(|gap| gap.is_empty())
    }

    // The span between two intervals that do not overlap.
    fn between(&self, other: &Interval) -> Result<Interval> {
        let (first, second) =
            if self.upper() <= other.lower() { (self, other) } else { (other, self) };
        self.derive(
            first.upper().clone(),
            second.lower().clone(),
            !first.upper_inclusive(),
            !second.lower_inclusive(),
        )
    }

    /// The values the intervals have in common.
    pub fn intersection(&self, other: impl Into<Bounds>) -> Result<Interval> {
        let other = self.coerce(other)?;
        if !self.overlaps(&other) {
            return Err(IntervalError::IllegalArgument(format!(
                "{} and {} do not overlap, there is no intersection",
                self.normalized(),
                other.normalized()
            )));
        }
        let (lower, lower_inclusive) = match self.lower().cmp(other.lower()) {
            Ordering::Greater => (self.lower(), self.lower_inclusive()),
            Ordering::Less => (other.lower(), other.lower_inclusive()),
            Ordering::Equal => (self.lower(), self.lower_inclusive() && other.lower_inclusive()),
        };
        let (upper, upper_inclusive) = match self.upper().cmp(other.upper()) {
            Ordering::Less => (self.upper(), self.upper_inclusive()),
            Ordering::Greater => (other.upper(), other.upper_inclusive()),
            Ordering::Equal => (self.upper(), self.upper_inclusive() && other.upper_inclusive()),
        };
        self.derive(lower.clone(), upper.clone(), lower_inclusive, upper_inclusive)
    }

    /// The hull of two connected intervals.
    pub fn union(&self, other: impl Into<Bounds>) -> Result<Interval> {
        let other = self.coerce(other)?;
        if !self.connected(&other) {
            return Err(IntervalError::IllegalArgument(format!(
                "{} and {} are not connected, the union would not be an interval",
                self.normalized(),
                other.normalized()
            )));
        }
        let (lower, lower_inclusive) = match self.lower().cmp(other.lower()) {
            Ordering::Less => (self.lower(), self.lower_inclusive()),
            Ordering::Greater => (other.lower(), other.lower_inclusive()),
            Ordering::Equal => (self.lower(), self.lower_inclusive() || other.lower_inclusive()),
        };
        let (upper, upper_inclusive) = match self.upper().cmp(other.upper()) {
            Ordering::Greater => (self.upper(), self.upper_inclusive()),
            Ordering::Less => (other.upper(), other.upper_inclusive()),
            Ordering::Equal => (self.upper(), self.upper_inclusive() || other.upper_inclusive()),
        };
        self.derive(lower.clone(), upper.clone(), lower_inclusive, upper_inclusive)
    }

    /// The interval lying strictly between two disconnected intervals, in
    /// either argument order. `None` when they are connected.
    pub fn gap(&self, other: impl Into<Bounds>) -> Result<Option<Interval>> {
        let other = self.coerce(other)?;
        if self.connected(&other) {
            return Ok(None);
        }
        self.between(&other).map(Some)
    }

    /// Whether `other` lies within this interval, bound by bound. A scalar
    /// is treated as the degenerate closed interval.
    pub fn contains(&self, other: impl Into<Bounds>) -> Result<bool> {
        let other = self.coerce(other)?;
        let lower_fits = if self.lower_inclusive() {
            self.lower() <= other.lower()
        } else if other.lower_inclusive() {
            self.lower() < other.lower()
        } else {
            self.lower() <= other.lower()
        };
        let upper_fits = if self.upper_inclusive() {
            self.upper() >= other.upper()
        } else if other.upper_inclusive() {
            self.upper() > other.upper()
        } else {
            self.upper() >= other.upper()
        };
        Ok(lower_fits && upper_fits)
    }
}

// The operators give a Result, as every one of them may fail.
macro_rules! interval_operator {
    ($($trait:ident, $method:ident => $inherent:ident;)*) => {
        $(
            impl<'a, 'b> $trait<&'b Interval> for &'a Interval {
                type Output = Result<Interval>;
                fn $method(self, rhs: &'b Interval) -> Result<Interval> { self.$inherent(rhs) }
            }
            impl $trait for Interval {
                type Output = Result<Interval>;
                fn $method(self, rhs: Interval) -> Result<Interval> { (&self).$inherent(rhs) }
            }
        )*
    };
}
interval_operator! {
    Add, add => checked_add;
    Sub, sub => checked_sub;
    BitAnd, bitand => intersection;
    BitOr, bitor => union;
}
