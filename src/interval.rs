// used for decimals, dates and timestamps as scalar operands
use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};

// custom made ordering for intervals, which is only partial
use std::cmp::Ordering;
// used to print out readable forms of an interval
use std::fmt;
// equal discrete intervals must hash alike
use std::hash::{Hash, Hasher};

use tracing::trace;

// our own stuff that we need
use crate::datatype::{Distance, Literal, Value};
use crate::domain::{Domain, Side, NUMERIC_FALLBACK, TEXT_PROBE};
use crate::error::{IntervalError, Result};
use crate::parser::{parse_bounds, Bounds, RawBounds, Shape};

/// Optional arguments of a construction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Options {
    lower_inclusive: Option<bool>,
    upper_inclusive: Option<bool>,
    step: Option<Distance>,
    permissive: bool,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }
    /// Overrides the inclusivity implied by the input shape.
    pub fn lower_inclusive(mut self, inclusive: bool) -> Self {
        self.lower_inclusive = Some(inclusive);
        self
    }
    pub fn upper_inclusive(mut self, inclusive: bool) -> Self {
        self.upper_inclusive = Some(inclusive);
        self
    }
    pub fn step(mut self, step: impl Into<Distance>) -> Self {
        self.step = Some(step.into());
        self
    }
    pub fn maybe_step(mut self, step: Option<Distance>) -> Self {
        self.step = step;
        self
    }
    /// When set, equal bounds that are both exclusive give the empty
    /// interval `[v, v)` instead of an error.
    pub fn permissive(mut self, permissive: bool) -> Self {
        self.permissive = permissive;
        self
    }
}

// ------------- Interval -------------
/// A contiguous span of a [`Domain`] with independently open or closed ends.
///
/// Intervals are immutable once built: every operation hands back a new
/// interval. An interval is *discrete* when it carries a step, which is the
/// case by default for integers (1) and dates (one day).
#[derive(Clone, Debug)]
pub struct Interval {
    lower: Value,
    upper: Value,
    lower_inclusive: bool,
    upper_inclusive: bool,
    domain: Domain,
    step: Option<Distance>,
}

impl Interval {
    /// Builds an interval from any input shape. When `domain` is `None` the
    /// domain is guessed from the bounds.
    pub fn build(
        domain: Option<Domain>,
        bounds: impl Into<Bounds>,
        options: Options,
    ) -> Result<Interval> {
        Self::build_probing(domain, bounds.into(), options, &TEXT_PROBE)
    }

    pub(crate) fn build_probing(
        domain: Option<Domain>,
        bounds: Bounds,
        options: Options,
        probe: &[Domain],
    ) -> Result<Interval> {
        let raw = parse_bounds(bounds, options.lower_inclusive, options.upper_inclusive)?;
        let domain = match domain.or(raw.domain) {
            Some(domain) => domain,
            None => guess_domain(&raw, probe)?,
        };
        let step = match options.step {
            Some(step) => Some(domain.validate_step(step)?),
            // a copied interval keeps its step as long as it stays in its domain
            None if raw.domain == Some(domain) => raw.step,
            None => domain.default_step(),
        };
        let lower = domain.coerce(&raw.lower, Side::Lower)?;
        let upper = domain.coerce(&raw.upper, Side::Upper)?;
        Self::assemble(
            lower,
            upper,
            raw.lower_inclusive,
            raw.upper_inclusive,
            domain,
            step,
            options.permissive,
        )
    }

    // The one place where an interval comes into existence.
    pub(crate) fn assemble(
        lower: Value,
        upper: Value,
        lower_inclusive: bool,
        upper_inclusive: bool,
        domain: Domain,
        step: Option<Distance>,
        permissive: bool,
    ) -> Result<Interval> {
        let (lower, upper) = match &step {
            Some(step) => (domain.round_to_step(lower, step)?, domain.round_to_step(upper, step)?),
            None => (lower, upper),
        };
        if lower > upper {
            return Err(IntervalError::Bounds {
                lower: lower.to_string(),
                upper: upper.to_string(),
            });
        }
        let mut lower_inclusive = lower_inclusive;
        if lower == upper && !lower_inclusive && !upper_inclusive {
            if !permissive {
                return Err(IntervalError::IllegalArgument(
                    "The bounds may be equal only if at least one of the bounds is closed.".into(),
                ));
            }
            lower_inclusive = true;
        }
        Ok(Interval {
            lower,
            upper,
            lower_inclusive,
            upper_inclusive,
            domain,
            step,
        })
    }

    // Same domain and step as self, always permissive.
    pub(crate) fn derive(
        &self,
        lower: Value,
        upper: Value,
        lower_inclusive: bool,
        upper_inclusive: bool,
    ) -> Result<Interval> {
        let step = self.step.clone();
        Self::assemble(lower, upper, lower_inclusive, upper_inclusive, self.domain, step, true)
    }

    pub fn new(domain: Domain, bounds: impl Into<Bounds>) -> Result<Interval> {
        Self::build(Some(domain), bounds, Options::default())
    }
    pub fn with_options(
        domain: Domain,
        bounds: impl Into<Bounds>,
        options: Options,
    ) -> Result<Interval> {
        Self::build(Some(domain), bounds, options)
    }
    /// Builds an interval whose domain is inferred from the bounds.
    pub fn guess(bounds: impl Into<Bounds>) -> Result<Interval> {
        Self::build(None, bounds, Options::default())
    }

    pub fn integer(bounds: impl Into<Bounds>) -> Result<Interval> {
        Self::new(Domain::Integer, bounds)
    }
    pub fn float(bounds: impl Into<Bounds>) -> Result<Interval> {
        Self::new(Domain::Float, bounds)
    }
    pub fn decimal(bounds: impl Into<Bounds>) -> Result<Interval> {
        Self::new(Domain::Decimal, bounds)
    }
    pub fn date(bounds: impl Into<Bounds>) -> Result<Interval> {
        Self::new(Domain::Date, bounds)
    }
    pub fn datetime(bounds: impl Into<Bounds>) -> Result<Interval> {
        Self::new(Domain::DateTime, bounds)
    }
    pub fn character(bounds: impl Into<Bounds>) -> Result<Interval> {
        Self::new(Domain::Character, bounds)
    }

    pub fn from_string(domain: Domain, text: &str, step: Option<Distance>) -> Result<Interval> {
        Self::build(Some(domain), Bounds::Text(text.to_owned()), Options::new().maybe_step(step))
    }

    // ------------- Factories -------------
    fn factory(
        domain: Domain,
        lower: Literal,
        upper: Literal,
        lower_inclusive: bool,
        upper_inclusive: bool,
        step: Option<Distance>,
    ) -> Result<Interval> {
        let bounds = Bounds::Pair { lower, upper, shape: Shape::Tuple };
        let options = Options::new()
            .lower_inclusive(lower_inclusive)
            .upper_inclusive(upper_inclusive)
            .maybe_step(step);
        Self::build(Some(domain), bounds, options)
    }
    pub fn open(
        domain: Domain,
        lower: impl Into<Literal>,
        upper: impl Into<Literal>,
        step: Option<Distance>,
    ) -> Result<Interval> {
        Self::factory(domain, lower.into(), upper.into(), false, false, step)
    }
    pub fn closed(
        domain: Domain,
        lower: impl Into<Literal>,
        upper: impl Into<Literal>,
        step: Option<Distance>,
    ) -> Result<Interval> {
        Self::factory(domain, lower.into(), upper.into(), true, true, step)
    }
    pub fn open_closed(
        domain: Domain,
        lower: impl Into<Literal>,
        upper: impl Into<Literal>,
        step: Option<Distance>,
    ) -> Result<Interval> {
        Self::factory(domain, lower.into(), upper.into(), false, true, step)
    }
    pub fn closed_open(
        domain: Domain,
        lower: impl Into<Literal>,
        upper: impl Into<Literal>,
        step: Option<Distance>,
    ) -> Result<Interval> {
        Self::factory(domain, lower.into(), upper.into(), true, false, step)
    }
    /// `(x, +inf)`
    pub fn greater_than(
        domain: Domain,
        lower: impl Into<Literal>,
        step: Option<Distance>,
    ) -> Result<Interval> {
        Self::factory(domain, lower.into(), Literal::Unbounded, false, false, step)
    }
    /// `[x, +inf)`
    pub fn at_least(
        domain: Domain,
        lower: impl Into<Literal>,
        step: Option<Distance>,
    ) -> Result<Interval> {
        Self::factory(domain, lower.into(), Literal::Unbounded, true, false, step)
    }
    /// `(-inf, x)`
    pub fn less_than(
        domain: Domain,
        upper: impl Into<Literal>,
        step: Option<Distance>,
    ) -> Result<Interval> {
        Self::factory(domain, Literal::Unbounded, upper.into(), false, false, step)
    }
    /// `(-inf, x]`
    pub fn at_most(
        domain: Domain,
        upper: impl Into<Literal>,
        step: Option<Distance>,
    ) -> Result<Interval> {
        Self::factory(domain, Literal::Unbounded, upper.into(), false, true, step)
    }
    /// `(-inf, +inf)`
    pub fn all(domain: Domain, step: Option<Distance>) -> Result<Interval> {
        Self::factory(domain, Literal::Unbounded, Literal::Unbounded, false, false, step)
    }

    // It's intentional to keep the fields private and only expose them
    // through getters, so that intervals stay immutable after creation.
    pub fn lower(&self) -> &Value {
        &self.lower
    }
    pub fn upper(&self) -> &Value {
        &self.upper
    }
    pub fn lower_inclusive(&self) -> bool {
        self.lower_inclusive
    }
    pub fn upper_inclusive(&self) -> bool {
        self.upper_inclusive
    }
    pub fn domain(&self) -> Domain {
        self.domain
    }
    pub fn step(&self) -> Option<&Distance> {
        self.step.as_ref()
    }

    // ------------- Properties -------------
    pub fn is_open(&self) -> bool {
        !self.lower_inclusive && !self.upper_inclusive
    }
    pub fn is_closed(&self) -> bool {
        self.lower_inclusive && self.upper_inclusive
    }
    pub fn is_discrete(&self) -> bool {
        self.step.is_some()
    }
    pub fn is_degenerate(&self) -> bool {
        self.lower == self.upper
    }
    /// True when the interval holds no value at all, e.g. `[2, 2)` or, over
    /// the integers, `(2, 3)`.
    pub fn is_empty(&self) -> bool {
        match &self.step {
            Some(step) if !self.is_degenerate() => {
                !self.lower_inclusive
                    && !self.upper_inclusive
                    && self.lower.offset(step, true).is_ok_and(|next| next == self.upper)
            }
            _ => self.is_degenerate() && !(self.lower_inclusive && self.upper_inclusive),
        }
    }
    pub fn length(&self) -> Result<Distance> {
        self.upper.distance(&self.lower)
    }
    pub fn radius(&self) -> Result<f64> {
        let length = self.length()?;
        length.to_f64().map(|length| length / 2.0).ok_or_else(|| {
            IntervalError::Type(format!("the radius of a {} interval is not a number", self.domain))
        })
    }
    pub fn centre(&self) -> Result<f64> {
        let not_numeric = || {
            IntervalError::Type(format!("the centre of a {} interval is not a number", self.domain))
        };
        let lower = self.lower.to_f64().ok_or_else(not_numeric)?;
        let upper = self.upper.to_f64().ok_or_else(not_numeric)?;
        let centre = (lower + upper) / 2.0;
        if centre.is_nan() {
            return Err(IntervalError::Type(
                "the centre of an interval unbounded on both sides is undefined".into(),
            ));
        }
        Ok(centre)
    }

    // ------------- Canonical form -------------
    /// Rewrites a discrete interval with the requested inclusivity, moving
    /// each bound one step where the inclusivity changes. Empty intervals
    /// come back unchanged.
    pub fn canonicalize(&self, lower_inclusive: bool, upper_inclusive: bool) -> Result<Interval> {
        let step = self
            .step
            .as_ref()
            .ok_or_else(|| {
                IntervalError::Type("Only discrete ranges can be canonicalized".into())
            })?;
        if self.is_empty() {
            return Ok(self.clone());
        }
        let (lower, lower_inclusive) = match (self.lower_inclusive, lower_inclusive) {
            (false, true) => (self.lower.offset(step, true)?, true),
            (true, false) => (self.lower.offset(step, false)?, false),
            _ => (self.lower.clone(), self.lower_inclusive),
        };
        let (upper, upper_inclusive) = match (self.upper_inclusive, upper_inclusive) {
            (false, true) => (self.upper.offset(step, false)?, true),
            (true, false) => (self.upper.offset(step, true)?, false),
            _ => (self.upper.clone(), self.upper_inclusive),
        };
        self.derive(lower, upper, lower_inclusive, upper_inclusive)
    }

    /// The closed-open canonical form.
    pub fn canonical(&self) -> Result<Interval> {
        self.canonicalize(true, false)
    }

    // what equality and hashing look at
    fn comparable(&self) -> Interval {
        if self.is_discrete() {
            if let Ok(canonical) = self.canonical() {
                return canonical;
            }
        }
        self.clone()
    }

    // ------------- Coercion -------------
    /// Turns an operand into an interval of this domain, or tells the
    /// caller that the operand is not supported.
    pub fn coerce(&self, operand: impl Into<Bounds>) -> Result<Interval> {
        match operand.into() {
            Bounds::Interval(other) if other.domain == self.domain => Ok(other),
            operand => Interval::new(self.domain, operand).map_err(|e| {
                let reason = format!("the operand is not a {} interval: {}", self.domain, e);
                IntervalError::Unsupported(reason)
            }),
        }
    }

    // bound-wise strict dominance, the > of interval ordering
    pub(crate) fn above(&self, other: &Interval) -> bool {
        self.lower > other.lower && self.upper > other.upper
    }

    // ------------- Renderings -------------
    /// Bracket notation with empty sides for infinite bounds, e.g. `[1,)`.
    pub fn normalized(&self) -> String {
        format!(
            "{}{},{}{}",
            if self.lower_inclusive { '[' } else { '(' },
            if self.lower.is_finite() { self.lower.to_string() } else { String::new() },
            if self.upper.is_finite() { format!(" {}", self.upper) } else { String::new() },
            if self.upper_inclusive { ']' } else { ')' },
        )
    }

    /// The closed canonical form as `LOWER - UPPER`, discrete intervals only.
    /// An empty interval has no closed form and gives a type error.
    pub fn hyphenized(&self) -> Result<String> {
        if !self.is_discrete() {
            return Err(IntervalError::Type(
                "Only discrete intervals have hyphenized format.".into(),
            ));
        }
        if self.is_empty() {
            return Err(IntervalError::Type(format!(
                "Empty interval {} has no hyphenized format.",
                self.normalized()
            )));
        }
        let closed = self.canonicalize(true, true)?;
        if closed.lower == closed.upper {
            return Ok(closed.lower.to_string());
        }
        Ok(format!(
            "{} -{}",
            if closed.lower.is_finite() { closed.lower.to_string() } else { String::new() },
            if closed.upper.is_finite() { format!(" {}", closed.upper) } else { String::new() },
        ))
    }
}

/// Decides the domain of a guessed interval from its raw bounds.
fn guess_domain(raw: &RawBounds, probe: &[Domain]) -> Result<Domain> {
    let lower = Domain::guess_literal(&raw.lower, probe)?;
    let upper = Domain::guess_literal(&raw.upper, probe)?;
    let domain = Domain::prevailing(lower, upper).unwrap_or(NUMERIC_FALLBACK);
    trace!(?lower, ?upper, %domain, "guessed interval domain");
    Ok(domain)
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        if self.domain != other.domain {
            return false;
        }
        let (a, b) = (self.comparable(), other.comparable());
        a.lower == b.lower
            && a.upper == b.upper
            && a.lower_inclusive == b.lower_inclusive
            && a.upper_inclusive == b.upper_inclusive
    }
}
impl Eq for Interval {}

impl Hash for Interval {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let comparable = self.comparable();
        comparable.lower.hash(state);
        comparable.upper.hash(state);
        comparable.lower_inclusive.hash(state);
        comparable.upper_inclusive.hash(state);
        comparable.domain.hash(state);
    }
}

impl PartialOrd for Interval {
    /// `Greater` when both bounds strictly exceed the other's, `Less` in the
    /// mirrored case and `None` when the intervals straddle each other.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.domain != other.domain {
            None
        } else if self == other {
            Some(Ordering::Equal)
        } else if self.above(other) {
            Some(Ordering::Greater)
        } else if other.above(self) {
            Some(Ordering::Less)
        } else {
            None
        }
    }
}

// A scalar compares as the degenerate closed interval [v, v].
macro_rules! scalar_comparisons {
    ($($t:ty),*) => {
        $(
            impl PartialEq<$t> for Interval {
                fn eq(&self, other: &$t) -> bool {
                    self.coerce(other.clone()).is_ok_and(|other| *self == other)
                }
            }
            impl PartialOrd<$t> for Interval {
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    self.coerce(other.clone()).ok().and_then(|other| self.partial_cmp(&other))
                }
            }
        )*
    };
}
scalar_comparisons!(i64, i32, f64, char, Value, BigDecimal, NaiveDate, NaiveDateTime);

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.lower == self.upper {
            write!(f, "{}", self.lower)
        } else {
            write!(f, "{} - {}", self.lower, self.upper)
        }
    }
}

impl TryFrom<&Interval> for i64 {
    type Error = IntervalError;
    fn try_from(interval: &Interval) -> Result<i64> {
        if interval.is_empty() {
            return Err(IntervalError::Type("Empty intervals cannot be coerced to integers".into()));
        }
        if interval.lower != interval.upper {
            return Err(IntervalError::Type(
                "Only intervals containing single point can be coerced to integers".into(),
            ));
        }
        match interval.lower {
            Value::Integer(i) => Ok(i),
            _ => Err(IntervalError::Type(format!(
                "a {} interval cannot be coerced to an integer",
                interval.domain
            ))),
        }
    }
}
