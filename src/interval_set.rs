// used to print out a set as the list of its members
use std::fmt;
use std::ops::{BitAnd, BitOr};
use std::slice::Iter;

use tracing::debug;

// our own stuff that we need
use crate::domain::Domain;
use crate::error::{IntervalError, Result};
use crate::interval::Interval;
use crate::parser::Bounds;

// ------------- IntervalSet -------------
/// An ordered collection of pairwise disconnected, non-empty intervals of
/// one domain. Construction and both set operators leave it simplified.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}

impl IntervalSet {
    /// Builds a set from anything an interval can be built from, guessing the
    /// domain of every member and then settling on the prevailing one.
    pub fn new<I, B>(items: I) -> Result<IntervalSet>
    where
        I: IntoIterator<Item = B>,
        B: Into<Bounds>,
    {
        let intervals = items.into_iter().map(|bounds| Interval::guess(bounds)).collect::<Result<Vec<_>>>()?;
        Self::from_intervals(intervals)
    }

    pub fn with_domain<I, B>(domain: Domain, items: I) -> Result<IntervalSet>
    where
        I: IntoIterator<Item = B>,
        B: Into<Bounds>,
    {
        let intervals = items
            .into_iter()
            .map(|bounds| Interval::new(domain, bounds))
            .collect::<Result<Vec<_>>>()?;
        Self::from_intervals(intervals)
    }

    pub fn from_intervals(intervals: impl IntoIterator<Item = Interval>) -> Result<IntervalSet> {
        let intervals: Vec<Interval> = intervals.into_iter().collect();
        let domain = intervals
            .iter()
            .map(|interval| Some(interval.domain()))
            .fold(None, Domain::prevailing);
        let intervals = match domain {
            Some(domain) => intervals
                .into_iter()
                .map(|interval| {
                    if interval.domain() == domain {
                        Ok(interval)
                    } else {
                        Interval::new(domain, interval)
                    }
                })
                .collect::<Result<Vec<_>>>()?,
            None => intervals,
        };
        let mut set = IntervalSet { intervals };
        set.simplify()?;
        Ok(set)
    }

    /// Sorts the members and merges every run of connected intervals,
    /// dropping the empty ones.
    pub fn simplify(&mut self) -> Result<()> {
        let before = self.intervals.len();
        let mut pending = std::mem::take(&mut self.intervals);
        pending.sort_by(|a, b| (a.lower(), a.upper()).cmp(&(b.lower(), b.upper())));
        let mut pending = pending.into_iter();
        let Some(mut current) = pending.next() else {
            return Ok(());
        };
        let mut simplified = Vec::with_capacity(before);
        for next in pending {
            if current.is_connected(&next) {
                current = current.union(&next)?;
            } else {
                if !current.is_empty() {
                    simplified.push(current);
                }
                current = next;
            }
        }
        if !current.is_empty() {
            simplified.push(current);
        }
        debug!(before, after = simplified.len(), "simplified interval set");
        self.intervals = simplified;
        Ok(())
    }

    /// Intersects every pair of members, skipping the pairs that do not
    /// overlap.
    pub fn intersection(&self, other: &IntervalSet) -> Result<IntervalSet> {
        let mut intervals = Vec::new();
        for a in &self.intervals {
            for b in &other.intervals {
                match a.intersection(b) {
                    Ok(intersection) => intervals.push(intersection),
                    Err(IntervalError::IllegalArgument(_)) => continue,
                    Err(e) => return Err(e),
                }
            }
        }
        Self::from_intervals(intervals)
    }

    pub fn union(&self, other: &IntervalSet) -> Result<IntervalSet> {
        Self::from_intervals(self.intervals.iter().chain(other.intervals.iter()).cloned())
    }

    /// Whether any member contains the operand.
    pub fn contains(&self, operand: impl Into<Bounds>) -> Result<bool> {
        let operand = operand.into();
        for interval in &self.intervals {
            if interval.contains(operand.clone())? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }
    pub fn len(&self) -> usize {
        self.intervals.len()
    }
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
    pub fn iter(&self) -> Iter<'_, Interval> {
        self.intervals.iter()
    }
}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = &'a Interval;
    type IntoIter = Iter<'a, Interval>;
    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl<'a, 'b> BitAnd<&'b IntervalSet> for &'a IntervalSet {
    type Output = Result<IntervalSet>;
    fn bitand(self, rhs: &'b IntervalSet) -> Result<IntervalSet> { self.intersection(rhs) }
}
impl<'a, 'b> BitOr<&'b IntervalSet> for &'a IntervalSet {
    type Output = Result<IntervalSet>;
    fn bitor(self, rhs: &'b IntervalSet) -> Result<IntervalSet> { self.union(rhs) }
}

impl fmt::Display for IntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let members: Vec<String> = self.intervals.iter().map(Interval::normalized).collect();
        write!(f, "{}", members.join(", "))
    }
}
