use crate::errors::{Error, Result};
use crate::negative_infinite::NegativeInfiniteInterval;
use crate::positive_infinite::PositiveInfiniteInterval;
use crate::relations::{Intersect, Relations, Union};
use crate::sequences::{IntervalSequence, SkipFirst};
use crate::time_points::{
    backward, forward, step_calendar, AllowDayOverflow, CalendarPoint,
    Direction, Heading, Offset, TimePoint,
};
use std::cmp::{max, min};
use std::ops::Sub;

/// A left-closed, right-open interval of time points (`[begin, end)`).
///
/// The bounds always satisfy `begin <= end`.  This is checked when the
/// interval is created and on every mutation: a mutation that would break
/// the invariant is rejected, and the interval is left unchanged.
///
/// The interval is empty when `begin == end`.  Most queries do not make
/// sense for an empty interval and return [`Error::EmptyInterval`].
///
/// ```text
///     [begin ------------- end)
///      included            excluded
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoundedInterval<T> {
    begin: T,
    end: T,
}

impl<T: TimePoint> BoundedInterval<T> {
    /// Construct the interval `[begin, end)`.
    /// Fails with [`Error::InvalidRange`] if begin is after end.
    pub fn new(begin: T, end: T) -> Result<Self> {
        if begin > end {
            return Err(Error::invalid_range(&begin, &end));
        }
        Ok(Self { begin, end })
    }

    /// Construct the interval `[begin, begin + duration)`.
    /// A negative duration results in [`Error::InvalidRange`], and an end
    /// that cannot be represented in [`Error::OutOfRange`].
    pub fn with_duration<D>(begin: T, duration: D) -> Result<Self>
    where
        T: Offset<D>,
    {
        let end = forward(&begin, &duration)?;
        Self::new(begin, end)
    }

    /// The first time point in the interval
    #[must_use]
    pub fn begin(&self) -> &T {
        &self.begin
    }

    /// The time point just after the interval
    #[must_use]
    pub fn end(&self) -> &T {
        &self.end
    }

    /// Change the first time point of the interval.
    pub fn set_begin(&mut self, begin: T) -> Result<()> {
        let end = self.end.clone();
        self.commit(begin, end)
    }

    /// Change the end of the interval.
    pub fn set_end(&mut self, end: T) -> Result<()> {
        let begin = self.begin.clone();
        self.commit(begin, end)
    }

    /// The duration between the two bounds
    #[must_use]
    pub fn length<D>(&self) -> D
    where
        T: Sub<Output = D>,
    {
        self.end.clone() - self.begin.clone()
    }

    /// True if the interval contains no time point
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    pub(crate) fn ensure_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            Err(Error::empty_interval(self))
        } else {
            Ok(())
        }
    }

    /// Replace both bounds, only if they form a valid interval
    fn commit(&mut self, begin: T, end: T) -> Result<()> {
        if begin > end {
            return Err(Error::invalid_range(&begin, &end));
        }
        self.begin = begin;
        self.end = end;
        Ok(())
    }

    /// Whether the point is in the interval.
    /// ```text
    ///     [------)
    ///     X          => contained
    ///            X   => not contained
    /// ```
    pub fn contains(&self, point: &T) -> Result<bool> {
        self.ensure_not_empty()?;
        Ok(self.begin <= *point && *point < self.end)
    }

    /// Whether the whole interval is before the point.
    /// ```text
    ///     [------)
    ///            X   => before
    /// ```
    pub fn is_before(&self, point: &T) -> Result<bool> {
        self.ensure_not_empty()?;
        Ok(self.end <= *point)
    }

    /// Whether the whole interval is after the point.
    /// ```text
    ///       [------)
    ///     X          => after
    /// ```
    pub fn is_after(&self, point: &T) -> Result<bool> {
        self.ensure_not_empty()?;
        Ok(*point < self.begin)
    }

    /// Move both bounds by the same duration.
    /// A negative duration moves the interval back in time.
    pub fn shift<D>(&mut self, duration: D) -> Result<()>
    where
        T: Offset<D>,
    {
        self.ensure_not_empty()?;
        let begin = forward(&self.begin, &duration)?;
        let end = forward(&self.end, &duration)?;
        self.commit(begin, end)
    }

    /// Expand the interval by moving its begin backward, its end forward,
    /// or both.  A negative duration shrinks the interval, and fails if the
    /// bounds would cross.
    pub fn expand<D>(&mut self, duration: D, direction: Direction) -> Result<()>
    where
        T: Offset<D>,
    {
        self.ensure_not_empty()?;
        let (begin, end) = match direction {
            Direction::Both => (
                backward(&self.begin, &duration)?,
                forward(&self.end, &duration)?,
            ),
            Direction::Forward => {
                (self.begin.clone(), forward(&self.end, &duration)?)
            }
            Direction::Backward => {
                (backward(&self.begin, &duration)?, self.end.clone())
            }
        };
        self.commit(begin, end)
    }

    /// A sequence that starts at `begin` and moves forward, using `rule`
    /// to compute each time point from the previous one.  The sequence
    /// stops when it reaches `end`.
    ///
    /// The rule must always return the same output for a given input, and
    /// must return a time point strictly after its input.
    pub fn forward_sequence<F>(
        &self,
        rule: F,
        skip: SkipFirst,
    ) -> Result<IntervalSequence<T, F>>
    where
        F: Fn(&T) -> T,
    {
        self.ensure_not_empty()?;
        IntervalSequence::new(self.clone(), rule, Heading::Forward, skip)
    }

    /// A sequence that starts at `end` and moves backward until it reaches
    /// `begin`.  Note that the first value is `end` itself, which is not
    /// part of the interval; use [`SkipFirst::Yes`] to exclude it.
    pub fn backward_sequence<F>(
        &self,
        rule: F,
        skip: SkipFirst,
    ) -> Result<IntervalSequence<T, F>>
    where
        F: Fn(&T) -> T,
    {
        self.ensure_not_empty()?;
        IntervalSequence::new(self.clone(), rule, Heading::Backward, skip)
    }
}

impl<T: CalendarPoint> BoundedInterval<T> {
    /// Add a number of years, then a number of months, to both bounds.
    /// Each bound is moved independently, so the length of the interval may
    /// change when days have to be clipped or overflow.
    pub fn shift_calendar(
        &mut self,
        years: i32,
        months: i32,
        overflow: AllowDayOverflow,
    ) -> Result<()> {
        self.ensure_not_empty()?;
        let begin =
            step_calendar(&self.begin, years, months, overflow, Heading::Forward)?;
        let end =
            step_calendar(&self.end, years, months, overflow, Heading::Forward)?;
        self.commit(begin, end)
    }

    /// Expand the interval by a number of years and months: they are
    /// subtracted from begin and/or added to end, depending on direction.
    pub fn expand_calendar(
        &mut self,
        years: i32,
        months: i32,
        overflow: AllowDayOverflow,
        direction: Direction,
    ) -> Result<()> {
        self.ensure_not_empty()?;
        let begin = match direction {
            Direction::Both | Direction::Backward => step_calendar(
                &self.begin,
                years,
                months,
                overflow,
                Heading::Backward,
            )?,
            Direction::Forward => self.begin.clone(),
        };
        let end = match direction {
            Direction::Both | Direction::Forward => step_calendar(
                &self.end,
                years,
                months,
                overflow,
                Heading::Forward,
            )?,
            Direction::Backward => self.end.clone(),
        };
        self.commit(begin, end)
    }
}

impl<T: TimePoint> Relations<BoundedInterval<T>> for BoundedInterval<T> {
    fn contains_interval(&self, other: &BoundedInterval<T>) -> Result<bool> {
        self.ensure_not_empty()?;
        other.ensure_not_empty()?;
        Ok(other.begin >= self.begin
            && other.begin < self.end
            && other.end <= self.end)
    }

    fn is_before_interval(&self, other: &BoundedInterval<T>) -> Result<bool> {
        self.ensure_not_empty()?;
        other.ensure_not_empty()?;
        Ok(self.end <= other.begin)
    }

    fn is_after_interval(&self, other: &BoundedInterval<T>) -> Result<bool> {
        self.ensure_not_empty()?;
        other.ensure_not_empty()?;
        Ok(self.begin >= other.end)
    }

    fn intersects(&self, other: &BoundedInterval<T>) -> Result<bool> {
        self.ensure_not_empty()?;
        other.ensure_not_empty()?;
        Ok(other.begin < self.end && other.end > self.begin)
    }

    fn is_adjacent(&self, other: &BoundedInterval<T>) -> Result<bool> {
        self.ensure_not_empty()?;
        other.ensure_not_empty()?;
        Ok(self.begin == other.end || self.end == other.begin)
    }
}

impl<T: TimePoint> Relations<PositiveInfiniteInterval<T>> for BoundedInterval<T> {
    /// A bounded interval never contains an interval that goes to +infinity
    fn contains_interval(
        &self,
        _other: &PositiveInfiniteInterval<T>,
    ) -> Result<bool> {
        self.ensure_not_empty()?;
        Ok(false)
    }

    fn is_before_interval(
        &self,
        other: &PositiveInfiniteInterval<T>,
    ) -> Result<bool> {
        self.ensure_not_empty()?;
        Ok(self.end <= *other.begin())
    }

    fn is_after_interval(
        &self,
        _other: &PositiveInfiniteInterval<T>,
    ) -> Result<bool> {
        self.ensure_not_empty()?;
        Ok(false)
    }

    fn intersects(&self, other: &PositiveInfiniteInterval<T>) -> Result<bool> {
        self.ensure_not_empty()?;
        Ok(self.end > *other.begin())
    }

    fn is_adjacent(&self, other: &PositiveInfiniteInterval<T>) -> Result<bool> {
        self.ensure_not_empty()?;
        Ok(self.end == *other.begin())
    }
}

impl<T: TimePoint> Relations<NegativeInfiniteInterval<T>> for BoundedInterval<T> {
    fn contains_interval(
        &self,
        _other: &NegativeInfiniteInterval<T>,
    ) -> Result<bool> {
        self.ensure_not_empty()?;
        Ok(false)
    }

    /// Always false: the other interval has no left edge to be before.
    fn is_before_interval(
        &self,
        _other: &NegativeInfiniteInterval<T>,
    ) -> Result<bool> {
        self.ensure_not_empty()?;
        Ok(false)
    }

    fn is_after_interval(
        &self,
        other: &NegativeInfiniteInterval<T>,
    ) -> Result<bool> {
        self.ensure_not_empty()?;
        Ok(self.begin >= *other.end())
    }

    fn intersects(&self, other: &NegativeInfiniteInterval<T>) -> Result<bool> {
        self.ensure_not_empty()?;
        Ok(self.begin < *other.end())
    }

    fn is_adjacent(&self, other: &NegativeInfiniteInterval<T>) -> Result<bool> {
        self.ensure_not_empty()?;
        Ok(self.begin == *other.end())
    }
}

impl<T: TimePoint> Intersect<BoundedInterval<T>> for BoundedInterval<T> {
    type Output = BoundedInterval<T>;

    fn intersection(&self, other: &BoundedInterval<T>) -> Result<Self::Output> {
        if !self.intersects(other)? {
            return Err(Error::disjoint(self, other));
        }
        Ok(BoundedInterval {
            begin: max(&self.begin, &other.begin).clone(),
            end: min(&self.end, &other.end).clone(),
        })
    }
}

impl<T: TimePoint> Intersect<PositiveInfiniteInterval<T>> for BoundedInterval<T> {
    type Output = BoundedInterval<T>;

    fn intersection(
        &self,
        other: &PositiveInfiniteInterval<T>,
    ) -> Result<Self::Output> {
        if !self.intersects(other)? {
            return Err(Error::disjoint(self, other));
        }
        Ok(BoundedInterval {
            begin: max(&self.begin, other.begin()).clone(),
            end: self.end.clone(),
        })
    }
}

impl<T: TimePoint> Intersect<NegativeInfiniteInterval<T>> for BoundedInterval<T> {
    type Output = BoundedInterval<T>;

    fn intersection(
        &self,
        other: &NegativeInfiniteInterval<T>,
    ) -> Result<Self::Output> {
        if !self.intersects(other)? {
            return Err(Error::disjoint(self, other));
        }
        Ok(BoundedInterval {
            begin: self.begin.clone(),
            end: min(&self.end, other.end()).clone(),
        })
    }
}

impl<T: TimePoint> Union<BoundedInterval<T>> for BoundedInterval<T> {
    type Output = BoundedInterval<T>;

    fn merge(&self, other: &BoundedInterval<T>) -> Result<Self::Output> {
        if !self.is_adjacent(other)? && !self.intersects(other)? {
            return Err(Error::disjoint(self, other));
        }
        self.span(other)
    }

    fn span(&self, other: &BoundedInterval<T>) -> Result<Self::Output> {
        self.ensure_not_empty()?;
        other.ensure_not_empty()?;
        Ok(BoundedInterval {
            begin: min(&self.begin, &other.begin).clone(),
            end: max(&self.end, &other.end).clone(),
        })
    }
}

impl<T: TimePoint> Union<PositiveInfiniteInterval<T>> for BoundedInterval<T> {
    type Output = PositiveInfiniteInterval<T>;

    fn merge(&self, other: &PositiveInfiniteInterval<T>) -> Result<Self::Output> {
        if !self.is_adjacent(other)? && !self.intersects(other)? {
            return Err(Error::disjoint(self, other));
        }
        self.span(other)
    }

    fn span(&self, other: &PositiveInfiniteInterval<T>) -> Result<Self::Output> {
        self.ensure_not_empty()?;
        Ok(PositiveInfiniteInterval::new(
            min(&self.begin, other.begin()).clone(),
        ))
    }
}

impl<T: TimePoint> Union<NegativeInfiniteInterval<T>> for BoundedInterval<T> {
    type Output = NegativeInfiniteInterval<T>;

    fn merge(&self, other: &NegativeInfiniteInterval<T>) -> Result<Self::Output> {
        if !self.is_adjacent(other)? && !self.intersects(other)? {
            return Err(Error::disjoint(self, other));
        }
        self.span(other)
    }

    fn span(&self, other: &NegativeInfiniteInterval<T>) -> Result<Self::Output> {
        self.ensure_not_empty()?;
        Ok(NegativeInfiniteInterval::new(
            max(&self.end, other.end()).clone(),
        ))
    }
}

impl<T: ::core::fmt::Display> ::core::fmt::Display for BoundedInterval<T> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "[{} - {})", self.begin, self.end)
    }
}
