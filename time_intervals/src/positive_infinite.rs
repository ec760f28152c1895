use crate::bounded::BoundedInterval;
use crate::errors::{Error, Result};
use crate::negative_infinite::NegativeInfiniteInterval;
use crate::relations::{Intersect, Relations, Union};
use crate::sequences::{PositiveInfiniteSequence, SkipFirst};
use crate::time_points::{
    backward, forward, step_calendar, AllowDayOverflow, CalendarPoint, Heading,
    Offset, TimePoint,
};
use std::cmp::{max, min};

/// An interval that starts at a given time point and never ends
/// (`[begin, +infinity)`).
///
/// Such an interval is never empty, so none of its queries fail because of
/// it.  Queries fail only when given an empty [`BoundedInterval`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PositiveInfiniteInterval<T> {
    begin: T,
}

impl<T: TimePoint> PositiveInfiniteInterval<T> {
    #[must_use]
    pub fn new(begin: T) -> Self {
        Self { begin }
    }

    #[must_use]
    pub fn begin(&self) -> &T {
        &self.begin
    }

    pub fn set_begin(&mut self, begin: T) {
        self.begin = begin;
    }

    /// Always false
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn contains(&self, point: &T) -> bool {
        *point >= self.begin
    }

    /// Always false: nothing comes after +infinity.
    #[must_use]
    pub fn is_before(&self, _point: &T) -> bool {
        false
    }

    #[must_use]
    pub fn is_after(&self, point: &T) -> bool {
        *point < self.begin
    }

    /// Move the interval by the given duration.
    /// Fails with [`Error::OutOfRange`], leaving the interval unchanged, if
    /// the new begin cannot be represented.
    pub fn shift<D>(&mut self, duration: D) -> Result<()>
    where
        T: Offset<D>,
    {
        self.begin = forward(&self.begin, &duration)?;
        Ok(())
    }

    /// Expand the interval backward in time (a negative duration shrinks it).
    pub fn expand<D>(&mut self, duration: D) -> Result<()>
    where
        T: Offset<D>,
    {
        self.begin = backward(&self.begin, &duration)?;
        Ok(())
    }

    /// A sequence that starts at `begin` and never ends.  See
    /// [`BoundedInterval::forward_sequence`] for the requirements on `rule`.
    pub fn forward_sequence<F>(
        &self,
        rule: F,
        skip: SkipFirst,
    ) -> Result<PositiveInfiniteSequence<T, F>>
    where
        F: Fn(&T) -> T,
    {
        PositiveInfiniteSequence::new(self.clone(), rule, skip)
    }
}

impl<T: CalendarPoint> PositiveInfiniteInterval<T> {
    pub fn shift_calendar(
        &mut self,
        years: i32,
        months: i32,
        overflow: AllowDayOverflow,
    ) -> Result<()> {
        self.begin =
            step_calendar(&self.begin, years, months, overflow, Heading::Forward)?;
        Ok(())
    }

    /// Move begin backward by a number of years and months.
    pub fn expand_calendar(
        &mut self,
        years: i32,
        months: i32,
        overflow: AllowDayOverflow,
    ) -> Result<()> {
        self.begin =
            step_calendar(&self.begin, years, months, overflow, Heading::Backward)?;
        Ok(())
    }
}

impl<T: TimePoint> Relations<BoundedInterval<T>> for PositiveInfiniteInterval<T> {
    fn contains_interval(&self, other: &BoundedInterval<T>) -> Result<bool> {
        other.ensure_not_empty()?;
        Ok(*other.begin() >= self.begin)
    }

    fn is_before_interval(&self, other: &BoundedInterval<T>) -> Result<bool> {
        other.ensure_not_empty()?;
        Ok(false)
    }

    fn is_after_interval(&self, other: &BoundedInterval<T>) -> Result<bool> {
        other.ensure_not_empty()?;
        Ok(self.begin >= *other.end())
    }

    fn intersects(&self, other: &BoundedInterval<T>) -> Result<bool> {
        other.ensure_not_empty()?;
        Ok(*other.end() > self.begin)
    }

    fn is_adjacent(&self, other: &BoundedInterval<T>) -> Result<bool> {
        other.ensure_not_empty()?;
        Ok(self.begin == *other.end())
    }
}

impl<T: TimePoint> Relations<PositiveInfiniteInterval<T>>
    for PositiveInfiniteInterval<T>
{
    fn contains_interval(
        &self,
        other: &PositiveInfiniteInterval<T>,
    ) -> Result<bool> {
        Ok(other.begin >= self.begin)
    }

    fn is_before_interval(
        &self,
        _other: &PositiveInfiniteInterval<T>,
    ) -> Result<bool> {
        Ok(false)
    }

    fn is_after_interval(
        &self,
        _other: &PositiveInfiniteInterval<T>,
    ) -> Result<bool> {
        Ok(false)
    }

    /// Two intervals going to +infinity always overlap
    fn intersects(&self, _other: &PositiveInfiniteInterval<T>) -> Result<bool> {
        Ok(true)
    }

    fn is_adjacent(&self, _other: &PositiveInfiniteInterval<T>) -> Result<bool> {
        Ok(false)
    }
}

impl<T: TimePoint> Relations<NegativeInfiniteInterval<T>>
    for PositiveInfiniteInterval<T>
{
    fn contains_interval(
        &self,
        _other: &NegativeInfiniteInterval<T>,
    ) -> Result<bool> {
        Ok(false)
    }

    fn is_before_interval(
        &self,
        _other: &NegativeInfiniteInterval<T>,
    ) -> Result<bool> {
        Ok(false)
    }

    fn is_after_interval(
        &self,
        other: &NegativeInfiniteInterval<T>,
    ) -> Result<bool> {
        Ok(self.begin >= *other.end())
    }

    fn intersects(&self, other: &NegativeInfiniteInterval<T>) -> Result<bool> {
        Ok(*other.end() > self.begin)
    }

    fn is_adjacent(&self, other: &NegativeInfiniteInterval<T>) -> Result<bool> {
        Ok(self.begin == *other.end())
    }
}

impl<T: TimePoint> Intersect<BoundedInterval<T>> for PositiveInfiniteInterval<T> {
    type Output = BoundedInterval<T>;

    fn intersection(&self, other: &BoundedInterval<T>) -> Result<Self::Output> {
        if !self.intersects(other)? {
            return Err(Error::disjoint(self, other));
        }
        BoundedInterval::new(
            max(&self.begin, other.begin()).clone(),
            other.end().clone(),
        )
    }
}

impl<T: TimePoint> Intersect<PositiveInfiniteInterval<T>>
    for PositiveInfiniteInterval<T>
{
    type Output = PositiveInfiniteInterval<T>;

    fn intersection(
        &self,
        other: &PositiveInfiniteInterval<T>,
    ) -> Result<Self::Output> {
        Ok(PositiveInfiniteInterval::new(
            max(&self.begin, &other.begin).clone(),
        ))
    }
}

impl<T: TimePoint> Intersect<NegativeInfiniteInterval<T>>
    for PositiveInfiniteInterval<T>
{
    type Output = BoundedInterval<T>;

    fn intersection(
        &self,
        other: &NegativeInfiniteInterval<T>,
    ) -> Result<Self::Output> {
        if !self.intersects(other)? {
            return Err(Error::disjoint(self, other));
        }
        BoundedInterval::new(self.begin.clone(), other.end().clone())
    }
}

impl<T: TimePoint> Union<BoundedInterval<T>> for PositiveInfiniteInterval<T> {
    type Output = PositiveInfiniteInterval<T>;

    fn merge(&self, other: &BoundedInterval<T>) -> Result<Self::Output> {
        if !self.is_adjacent(other)? && !self.intersects(other)? {
            return Err(Error::disjoint(self, other));
        }
        self.span(other)
    }

    fn span(&self, other: &BoundedInterval<T>) -> Result<Self::Output> {
        other.ensure_not_empty()?;
        Ok(PositiveInfiniteInterval::new(
            min(&self.begin, other.begin()).clone(),
        ))
    }
}

impl<T: TimePoint> Union<PositiveInfiniteInterval<T>>
    for PositiveInfiniteInterval<T>
{
    type Output = PositiveInfiniteInterval<T>;

    fn merge(&self, other: &PositiveInfiniteInterval<T>) -> Result<Self::Output> {
        self.span(other)
    }

    fn span(&self, other: &PositiveInfiniteInterval<T>) -> Result<Self::Output> {
        Ok(PositiveInfiniteInterval::new(
            min(&self.begin, &other.begin).clone(),
        ))
    }
}

impl<T: ::core::fmt::Display> ::core::fmt::Display
    for PositiveInfiniteInterval<T>
{
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "[{} - )", self.begin)
    }
}
