//! Intervals – typed interval ("range") arithmetic over a closed set of
//! ordered domains.
//!
//! An [`Interval`] is a contiguous span of one [`Domain`] with independently
//! open or closed ends:
//! * Bounds are [`datatype::Value`]s, where the two infinity sentinels sort
//!   below and above every finite value of any domain.
//! * A *discrete* interval carries a step (the minimal distance between two
//!   values). Integers and dates step by 1 and by one day unless told
//!   otherwise, and every bound is snapped to a multiple of the step.
//! * Discrete intervals with different but equivalent bounds compare equal,
//!   so `[1, 4]` and `[1, 5)` over the integers are the same interval.
//!
//! ## Modules
//! * [`datatype`] – Bound values, distances and raw literals.
//! * [`domain`] – The domain catalogue: steps, coercion, rounding and type guessing.
//! * [`parser`] – The string grammar and the other accepted input shapes.
//! * [`interval`] – Construction, properties, canonical form and comparisons.
//! * [`algebra`] – Interval arithmetic and the set operators.
//! * [`interval_set`] – Simplified collections of disconnected intervals.
//! * [`settings`] – Configuration and logging setup.
//!
//! ## Input shapes
//! Anything convertible into [`parser::Bounds`] can be turned into an
//! interval: a string such as `"[1, 5)"`, `"1-5"` or `"5"`, a tuple (open by
//! default), a two element array (closed by default), a single value or
//! another interval.
//!
//! ## Quick Start
//! ```
//! use intervals::{Domain, Interval, IntervalSet};
//! let a = Interval::new(Domain::Integer, "[1, 4]").unwrap();
//! let b = Interval::new(Domain::Integer, (0, 5)).unwrap();
//! assert_eq!(a, b);
//! let sum = (&a + &b).unwrap();
//! assert_eq!(sum.normalized(), "(1, 9)");
//! assert_eq!(sum, Interval::new(Domain::Integer, "[2, 8]").unwrap());
//! assert!(a.contains(3).unwrap());
//!
//! let set = IntervalSet::new([[1, 3], [2, 5], [10, 12]]).unwrap();
//! assert_eq!(set.len(), 2);
//! ```
//!
//! ## Errors
//! Every fallible operation returns [`error::Result`]. Operators whose
//! operand cannot be coerced into the left hand side's domain give
//! [`IntervalError::Unsupported`] rather than a hard failure.

pub mod algebra;
pub mod datatype;
pub mod domain;
pub mod error;
pub mod interval;
pub mod interval_set;
pub mod parser;
pub mod settings;

pub use crate::datatype::{Distance, Literal, Value, INFINITY, NEG_INFINITY};
pub use crate::domain::Domain;
pub use crate::error::{IntervalError, Result};
pub use crate::interval::{Interval, Options};
pub use crate::interval_set::IntervalSet;
pub use crate::parser::{Bounds, Shape};
pub use crate::settings::Settings;
