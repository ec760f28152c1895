use crate::bounded::BoundedInterval;
use crate::errors::{Error, Result};
use crate::negative_infinite::NegativeInfiniteInterval;
use crate::positive_infinite::PositiveInfiniteInterval;
use crate::time_points::TimePoint;

/// Boolean relations between two intervals.
///
/// Implemented for every pair of interval shapes.  Queries fail with
/// [`Error::EmptyInterval`] when one of the intervals is an empty
/// [`BoundedInterval`].
///
/// ```text
///     [---- A ----)
///                 [---- B ----)    A is before B, A and B are adjacent
///          [---- C ----)           A and C intersect
///       [- D -)                    A contains D
/// ```
pub trait Relations<Rhs: ?Sized> {
    /// Whether every time point of other is also in self.
    fn contains_interval(&self, other: &Rhs) -> Result<bool>;

    /// Whether every time point of self is before every time point of other.
    fn is_before_interval(&self, other: &Rhs) -> Result<bool>;

    /// Whether every time point of self is after every time point of other.
    fn is_after_interval(&self, other: &Rhs) -> Result<bool>;

    /// Whether the two intervals have at least one time point in common.
    fn intersects(&self, other: &Rhs) -> Result<bool>;

    /// Whether the two intervals touch, with neither a gap nor an overlap.
    fn is_adjacent(&self, other: &Rhs) -> Result<bool>;
}

/// The time points common to two intervals.
pub trait Intersect<Rhs: ?Sized> {
    type Output;

    /// Fails with [`Error::DisjointInterval`] if the intervals do not
    /// intersect.
    fn intersection(&self, other: &Rhs) -> Result<Self::Output>;
}

/// Combining two intervals into one.
///
/// There is no implementation between a [`PositiveInfiniteInterval`] and a
/// [`NegativeInfiniteInterval`], since the result would be unbounded on
/// both sides.
pub trait Union<Rhs: ?Sized> {
    type Output;

    /// The union of the two intervals.  Fails with
    /// [`Error::DisjointInterval`] unless they intersect or are adjacent.
    fn merge(&self, other: &Rhs) -> Result<Self::Output>;

    /// The smallest interval containing both, even if there is a gap
    /// between them.
    fn span(&self, other: &Rhs) -> Result<Self::Output>;
}

/// Any of the three interval shapes.
/// This is useful to store intervals of different shapes together, or
/// when the shape is only known at run time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interval<T> {
    Bounded(BoundedInterval<T>),
    PositiveInfinite(PositiveInfiniteInterval<T>),
    NegativeInfinite(NegativeInfiniteInterval<T>),
}

/// Run the same expression for each of the nine combinations of shapes.
macro_rules! dispatch {
    ($left:expr, $right:expr, |$l:ident, $r:ident| $body:expr) => {
        match ($left, $right) {
            (Interval::Bounded($l), Interval::Bounded($r)) => $body,
            (Interval::Bounded($l), Interval::PositiveInfinite($r)) => $body,
            (Interval::Bounded($l), Interval::NegativeInfinite($r)) => $body,
            (Interval::PositiveInfinite($l), Interval::Bounded($r)) => $body,
            (Interval::PositiveInfinite($l), Interval::PositiveInfinite($r)) => {
                $body
            }
            (Interval::PositiveInfinite($l), Interval::NegativeInfinite($r)) => {
                $body
            }
            (Interval::NegativeInfinite($l), Interval::Bounded($r)) => $body,
            (Interval::NegativeInfinite($l), Interval::PositiveInfinite($r)) => {
                $body
            }
            (Interval::NegativeInfinite($l), Interval::NegativeInfinite($r)) => {
                $body
            }
        }
    };
}

/// Same as dispatch, for the seven combinations that have a [`Union`].
macro_rules! dispatch_union {
    ($left:expr, $right:expr, |$l:ident, $r:ident| $body:expr) => {
        match ($left, $right) {
            (Interval::Bounded($l), Interval::Bounded($r)) => $body,
            (Interval::Bounded($l), Interval::PositiveInfinite($r)) => $body,
            (Interval::Bounded($l), Interval::NegativeInfinite($r)) => $body,
            (Interval::PositiveInfinite($l), Interval::Bounded($r)) => $body,
            (Interval::PositiveInfinite($l), Interval::PositiveInfinite($r)) => {
                $body
            }
            (Interval::NegativeInfinite($l), Interval::Bounded($r)) => $body,
            (Interval::NegativeInfinite($l), Interval::NegativeInfinite($r)) => {
                $body
            }
            (Interval::PositiveInfinite(_), Interval::NegativeInfinite(_))
            | (Interval::NegativeInfinite(_), Interval::PositiveInfinite(_)) => {
                Err(Error::DoublyUnbounded($left.to_string(), $right.to_string()))
            }
        }
    };
}

impl<T: TimePoint> Interval<T> {
    /// True only for an empty bounded interval
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Interval::Bounded(b) => b.is_empty(),
            Interval::PositiveInfinite(_) | Interval::NegativeInfinite(_) => {
                false
            }
        }
    }

    /// The first time point, or None if the interval has always existed
    #[must_use]
    pub fn begin(&self) -> Option<&T> {
        match self {
            Interval::Bounded(b) => Some(b.begin()),
            Interval::PositiveInfinite(p) => Some(p.begin()),
            Interval::NegativeInfinite(_) => None,
        }
    }

    /// The time point just after the interval, or None if it never ends
    #[must_use]
    pub fn end(&self) -> Option<&T> {
        match self {
            Interval::Bounded(b) => Some(b.end()),
            Interval::PositiveInfinite(_) => None,
            Interval::NegativeInfinite(n) => Some(n.end()),
        }
    }

    pub fn contains(&self, point: &T) -> Result<bool> {
        match self {
            Interval::Bounded(b) => b.contains(point),
            Interval::PositiveInfinite(p) => Ok(p.contains(point)),
            Interval::NegativeInfinite(n) => Ok(n.contains(point)),
        }
    }

    pub fn is_before(&self, point: &T) -> Result<bool> {
        match self {
            Interval::Bounded(b) => b.is_before(point),
            Interval::PositiveInfinite(p) => Ok(p.is_before(point)),
            Interval::NegativeInfinite(n) => Ok(n.is_before(point)),
        }
    }

    pub fn is_after(&self, point: &T) -> Result<bool> {
        match self {
            Interval::Bounded(b) => b.is_after(point),
            Interval::PositiveInfinite(p) => Ok(p.is_after(point)),
            Interval::NegativeInfinite(n) => Ok(n.is_after(point)),
        }
    }
}

impl<T: TimePoint> Relations<Interval<T>> for Interval<T> {
    fn contains_interval(&self, other: &Interval<T>) -> Result<bool> {
        dispatch!(self, other, |l, r| l.contains_interval(r))
    }

    fn is_before_interval(&self, other: &Interval<T>) -> Result<bool> {
        dispatch!(self, other, |l, r| l.is_before_interval(r))
    }

    fn is_after_interval(&self, other: &Interval<T>) -> Result<bool> {
        dispatch!(self, other, |l, r| l.is_after_interval(r))
    }

    fn intersects(&self, other: &Interval<T>) -> Result<bool> {
        dispatch!(self, other, |l, r| l.intersects(r))
    }

    fn is_adjacent(&self, other: &Interval<T>) -> Result<bool> {
        dispatch!(self, other, |l, r| l.is_adjacent(r))
    }
}

impl<T: TimePoint> Intersect<Interval<T>> for Interval<T> {
    type Output = Interval<T>;

    fn intersection(&self, other: &Interval<T>) -> Result<Self::Output> {
        dispatch!(self, other, |l, r| l.intersection(r).map(Interval::from))
    }
}

impl<T: TimePoint> Union<Interval<T>> for Interval<T> {
    type Output = Interval<T>;

    /// Fails with [`Error::DoublyUnbounded`] when merging intervals that go
    /// to opposite infinities.
    fn merge(&self, other: &Interval<T>) -> Result<Self::Output> {
        dispatch_union!(self, other, |l, r| l.merge(r).map(Interval::from))
    }

    fn span(&self, other: &Interval<T>) -> Result<Self::Output> {
        dispatch_union!(self, other, |l, r| l.span(r).map(Interval::from))
    }
}

impl<T> From<BoundedInterval<T>> for Interval<T> {
    fn from(value: BoundedInterval<T>) -> Self {
        Interval::Bounded(value)
    }
}

impl<T> From<PositiveInfiniteInterval<T>> for Interval<T> {
    fn from(value: PositiveInfiniteInterval<T>) -> Self {
        Interval::PositiveInfinite(value)
    }
}

impl<T> From<NegativeInfiniteInterval<T>> for Interval<T> {
    fn from(value: NegativeInfiniteInterval<T>) -> Self {
        Interval::NegativeInfinite(value)
    }
}

impl<T: ::core::fmt::Display> ::core::fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        match self {
            Interval::Bounded(b) => write!(f, "{b}"),
            Interval::PositiveInfinite(p) => write!(f, "{p}"),
            Interval::NegativeInfinite(n) => write!(f, "{n}"),
        }
    }
}
