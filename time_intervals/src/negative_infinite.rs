use crate::bounded::BoundedInterval;
use crate::errors::{Error, Result};
use crate::positive_infinite::PositiveInfiniteInterval;
use crate::relations::{Intersect, Relations, Union};
use crate::sequences::{NegativeInfiniteSequence, SkipFirst};
use crate::time_points::{
    forward, step_calendar, AllowDayOverflow, CalendarPoint, Heading, Offset,
    TimePoint,
};
use std::cmp::{max, min};

/// An interval that has always existed, and ends just before a given time
/// point (`(-infinity, end)`).
///
/// This is the mirror of [`PositiveInfiniteInterval`]: it is never empty,
/// and nothing can be after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NegativeInfiniteInterval<T> {
    end: T,
}

impl<T: TimePoint> NegativeInfiniteInterval<T> {
    #[must_use]
    pub fn new(end: T) -> Self {
        Self { end }
    }

    #[must_use]
    pub fn end(&self) -> &T {
        &self.end
    }

    pub fn set_end(&mut self, end: T) {
        self.end = end;
    }

    /// Always false
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn contains(&self, point: &T) -> bool {
        *point < self.end
    }

    #[must_use]
    pub fn is_before(&self, point: &T) -> bool {
        *point >= self.end
    }

    /// Always false: nothing comes before -infinity.
    #[must_use]
    pub fn is_after(&self, _point: &T) -> bool {
        false
    }

    /// Fails with [`Error::OutOfRange`], leaving the interval unchanged,
    /// if the new end cannot be represented.
    pub fn shift<D>(&mut self, duration: D) -> Result<()>
    where
        T: Offset<D>,
    {
        self.end = forward(&self.end, &duration)?;
        Ok(())
    }

    /// Expand the interval forward in time (a negative duration shrinks it).
    pub fn expand<D>(&mut self, duration: D) -> Result<()>
    where
        T: Offset<D>,
    {
        self.shift(duration)
    }

    /// A sequence that starts at `end` and walks backward forever.
    /// As for bounded intervals, the first value is `end` itself, which is
    /// not part of the interval.
    pub fn backward_sequence<F>(
        &self,
        rule: F,
        skip: SkipFirst,
    ) -> Result<NegativeInfiniteSequence<T, F>>
    where
        F: Fn(&T) -> T,
    {
        NegativeInfiniteSequence::new(self.clone(), rule, skip)
    }
}

impl<T: CalendarPoint> NegativeInfiniteInterval<T> {
    pub fn shift_calendar(
        &mut self,
        years: i32,
        months: i32,
        overflow: AllowDayOverflow,
    ) -> Result<()> {
        self.end =
            step_calendar(&self.end, years, months, overflow, Heading::Forward)?;
        Ok(())
    }

    /// Move end forward by a number of years and months.
    pub fn expand_calendar(
        &mut self,
        years: i32,
        months: i32,
        overflow: AllowDayOverflow,
    ) -> Result<()> {
        self.shift_calendar(years, months, overflow)
    }
}

impl<T: TimePoint> Relations<BoundedInterval<T>> for NegativeInfiniteInterval<T> {
    fn contains_interval(&self, other: &BoundedInterval<T>) -> Result<bool> {
        other.ensure_not_empty()?;
        Ok(*other.end() <= self.end)
    }

    fn is_before_interval(&self, other: &BoundedInterval<T>) -> Result<bool> {
        other.ensure_not_empty()?;
        Ok(self.end <= *other.begin())
    }

    fn is_after_interval(&self, other: &BoundedInterval<T>) -> Result<bool> {
        other.ensure_not_empty()?;
        Ok(false)
    }

    fn intersects(&self, other: &BoundedInterval<T>) -> Result<bool> {
        other.ensure_not_empty()?;
        Ok(*other.begin() < self.end)
    }

    fn is_adjacent(&self, other: &BoundedInterval<T>) -> Result<bool> {
        other.ensure_not_empty()?;
        Ok(*other.begin() == self.end)
    }
}

impl<T: TimePoint> Relations<PositiveInfiniteInterval<T>>
    for NegativeInfiniteInterval<T>
{
    fn contains_interval(
        &self,
        _other: &PositiveInfiniteInterval<T>,
    ) -> Result<bool> {
        Ok(false)
    }

    fn is_before_interval(
        &self,
        other: &PositiveInfiniteInterval<T>,
    ) -> Result<bool> {
        Ok(self.end <= *other.begin())
    }

    fn is_after_interval(
        &self,
        _other: &PositiveInfiniteInterval<T>,
    ) -> Result<bool> {
        Ok(false)
    }

    fn intersects(&self, other: &PositiveInfiniteInterval<T>) -> Result<bool> {
        Ok(*other.begin() < self.end)
    }

    fn is_adjacent(&self, other: &PositiveInfiniteInterval<T>) -> Result<bool> {
        Ok(*other.begin() == self.end)
    }
}

impl<T: TimePoint> Relations<NegativeInfiniteInterval<T>>
    for NegativeInfiniteInterval<T>
{
    fn contains_interval(
        &self,
        other: &NegativeInfiniteInterval<T>,
    ) -> Result<bool> {
        Ok(other.end <= self.end)
    }

    fn is_before_interval(
        &self,
        _other: &NegativeInfiniteInterval<T>,
    ) -> Result<bool> {
        Ok(false)
    }

    fn is_after_interval(
        &self,
        _other: &NegativeInfiniteInterval<T>,
    ) -> Result<bool> {
        Ok(false)
    }

    fn intersects(&self, _other: &NegativeInfiniteInterval<T>) -> Result<bool> {
        Ok(true)
    }

    fn is_adjacent(&self, _other: &NegativeInfiniteInterval<T>) -> Result<bool> {
        Ok(false)
    }
}

impl<T: TimePoint> Intersect<BoundedInterval<T>> for NegativeInfiniteInterval<T> {
    type Output = BoundedInterval<T>;

    fn intersection(&self, other: &BoundedInterval<T>) -> Result<Self::Output> {
        if !self.intersects(other)? {
            return Err(Error::disjoint(self, other));
        }
        BoundedInterval::new(
            other.begin().clone(),
            min(&self.end, other.end()).clone(),
        )
    }
}

impl<T: TimePoint> Intersect<PositiveInfiniteInterval<T>>
    for NegativeInfiniteInterval<T>
{
    type Output = BoundedInterval<T>;

    fn intersection(
        &self,
        other: &PositiveInfiniteInterval<T>,
    ) -> Result<Self::Output> {
        if !self.intersects(other)? {
            return Err(Error::disjoint(self, other));
        }
        BoundedInterval::new(other.begin().clone(), self.end.clone())
    }
}

impl<T: TimePoint> Intersect<NegativeInfiniteInterval<T>>
    for NegativeInfiniteInterval<T>
{
    type Output = NegativeInfiniteInterval<T>;

    fn intersection(
        &self,
        other: &NegativeInfiniteInterval<T>,
    ) -> Result<Self::Output> {
        Ok(NegativeInfiniteInterval::new(
            min(&self.end, &other.end).clone(),
        ))
    }
}

impl<T: TimePoint> Union<BoundedInterval<T>> for NegativeInfiniteInterval<T> {
    type Output = NegativeInfiniteInterval<T>;

    fn merge(&self, other: &BoundedInterval<T>) -> Result<Self::Output> {
        if !self.is_adjacent(other)? && !self.intersects(other)? {
            return Err(Error::disjoint(self, other));
        }
        self.span(other)
    }

    fn span(&self, other: &BoundedInterval<T>) -> Result<Self::Output> {
        other.ensure_not_empty()?;
        Ok(NegativeInfiniteInterval::new(
            max(&self.end, other.end()).clone(),
        ))
    }
}

impl<T: TimePoint> Union<NegativeInfiniteInterval<T>>
    for NegativeInfiniteInterval<T>
{
    type Output = NegativeInfiniteInterval<T>;

    fn merge(&self, other: &NegativeInfiniteInterval<T>) -> Result<Self::Output> {
        self.span(other)
    }

    fn span(&self, other: &NegativeInfiniteInterval<T>) -> Result<Self::Output> {
        Ok(NegativeInfiniteInterval::new(
            max(&self.end, &other.end).clone(),
        ))
    }
}

impl<T: ::core::fmt::Display> ::core::fmt::Display
    for NegativeInfiniteInterval<T>
{
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "[- - {})", self.end)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::time_points::date;
    use chrono::{Days, NaiveDate, TimeDelta};

    fn reference() -> NegativeInfiniteInterval<NaiveDate> {
        NegativeInfiniteInterval::new(date(2012, 1, 7))
    }

    fn bounded(
        begin: (i32, u32, u32),
        end: (i32, u32, u32),
    ) -> BoundedInterval<NaiveDate> {
        BoundedInterval::new(
            date(begin.0, begin.1, begin.2),
            date(end.0, end.1, end.2),
        )
        .unwrap()
    }

    #[test]
    fn test_points() {
        let n = reference();
        assert!(!n.is_empty());
        assert!(n.contains(&date(1900, 1, 1)));
        assert!(n.contains(&date(2012, 1, 6)));
        assert!(!n.contains(&date(2012, 1, 7)));
        assert!(n.is_before(&date(2012, 1, 7)));
        assert!(!n.is_before(&date(2012, 1, 6)));
        for d in [date(1900, 1, 1), date(2012, 1, 7), date(2200, 1, 1)] {
            assert!(!n.is_after(&d));
        }
    }

    #[test]
    fn test_contains() {
        let n = reference();
        assert_eq!(n.contains_interval(&bounded((2010, 1, 1), (2012, 1, 7))), Ok(true));
        assert_eq!(n.contains_interval(&bounded((2010, 1, 1), (2012, 1, 8))), Ok(false));
        assert!(n.contains_interval(&bounded((2010, 1, 1), (2010, 1, 1))).is_err());
        assert_eq!(
            n.contains_interval(&PositiveInfiniteInterval::new(date(1900, 1, 1))),
            Ok(false),
        );
        assert_eq!(
            n.contains_interval(&NegativeInfiniteInterval::new(date(2012, 1, 7))),
            Ok(true),
        );
        assert_eq!(
            n.contains_interval(&NegativeInfiniteInterval::new(date(2012, 1, 8))),
            Ok(false),
        );
    }

    #[test]
    fn test_before_after() {
        let n = reference();
        let later = bounded((2012, 1, 7), (2013, 1, 1));
        let overlap = bounded((2012, 1, 6), (2013, 1, 1));
        assert_eq!(n.is_before_interval(&later), Ok(true));
        assert_eq!(n.is_before_interval(&overlap), Ok(false));
        assert_eq!(n.is_after_interval(&bounded((1900, 1, 1), (1901, 1, 1))), Ok(false));
        assert!(n.is_after_interval(&bounded((1900, 1, 1), (1900, 1, 1))).is_err());

        assert_eq!(
            n.is_before_interval(&PositiveInfiniteInterval::new(date(2012, 1, 7))),
            Ok(true),
        );
        assert_eq!(
            n.is_before_interval(&PositiveInfiniteInterval::new(date(2012, 1, 6))),
            Ok(false),
        );
        assert_eq!(
            n.is_after_interval(&PositiveInfiniteInterval::new(date(2012, 1, 6))),
            Ok(false),
        );
        let other = NegativeInfiniteInterval::new(date(1900, 1, 1));
        assert_eq!(n.is_before_interval(&other), Ok(false));
        assert_eq!(n.is_after_interval(&other), Ok(false));
    }

    #[test]
    fn test_intersects() {
        let n = reference();
        assert_eq!(n.intersects(&bounded((2012, 1, 6), (2013, 1, 1))), Ok(true));
        assert_eq!(n.intersects(&bounded((2012, 1, 7), (2013, 1, 1))), Ok(false));
        assert_eq!(
            n.intersects(&PositiveInfiniteInterval::new(date(2012, 1, 6))),
            Ok(true),
        );
        assert_eq!(
            n.intersects(&PositiveInfiniteInterval::new(date(2012, 1, 7))),
            Ok(false),
        );
        assert_eq!(
            n.intersects(&NegativeInfiniteInterval::new(date(1000, 1, 1))),
            Ok(true),
        );
    }

    #[test]
    fn test_intersection() {
        let n = reference();
        assert_eq!(
            n.intersection(&bounded((2010, 7, 4), (2013, 7, 3))),
            Ok(bounded((2010, 7, 4), (2012, 1, 7))),
        );
        assert_eq!(
            n.intersection(&bounded((2010, 7, 4), (2011, 1, 1))),
            Ok(bounded((2010, 7, 4), (2011, 1, 1))),
        );
        assert!(matches!(
            n.intersection(&bounded((2012, 1, 7), (2013, 1, 1))),
            Err(Error::DisjointInterval(..)),
        ));
        assert_eq!(
            n.intersection(&PositiveInfiniteInterval::new(date(2010, 7, 4))),
            Ok(bounded((2010, 7, 4), (2012, 1, 7))),
        );
        assert!(n
            .intersection(&PositiveInfiniteInterval::new(date(2012, 1, 7)))
            .is_err());
        assert_eq!(
            n.intersection(&NegativeInfiniteInterval::new(date(2011, 1, 1))),
            Ok(NegativeInfiniteInterval::new(date(2011, 1, 1))),
        );
        assert_eq!(
            n.intersection(&NegativeInfiniteInterval::new(date(2013, 1, 1))),
            Ok(reference()),
        );
    }

    #[test]
    fn test_adjacent() {
        let n = reference();
        assert_eq!(n.is_adjacent(&bounded((2012, 1, 7), (2013, 1, 1))), Ok(true));
        assert_eq!(n.is_adjacent(&bounded((2012, 1, 6), (2013, 1, 1))), Ok(false));
        assert_eq!(
            n.is_adjacent(&PositiveInfiniteInterval::new(date(2012, 1, 7))),
            Ok(true),
        );
        assert_eq!(n.is_adjacent(&reference()), Ok(false));
    }

    #[test]
    fn test_merge_span() {
        let n = reference();
        assert_eq!(
            n.merge(&bounded((2012, 1, 7), (2013, 1, 1))),
            Ok(NegativeInfiniteInterval::new(date(2013, 1, 1))),
        );
        assert_eq!(
            n.merge(&bounded((2011, 1, 1), (2011, 2, 1))),
            Ok(reference()),
        );
        assert!(matches!(
            n.merge(&bounded((2012, 1, 8), (2013, 1, 1))),
            Err(Error::DisjointInterval(..)),
        ));
        assert_eq!(
            n.span(&bounded((2012, 1, 8), (2013, 1, 1))),
            Ok(NegativeInfiniteInterval::new(date(2013, 1, 1))),
        );
        let other = NegativeInfiniteInterval::new(date(2020, 1, 1));
        assert_eq!(n.merge(&other), Ok(other));
        assert_eq!(other.span(&n), Ok(other));
    }

    #[test]
    fn test_shift_expand() {
        let mut n = reference();
        assert!(n.shift(TimeDelta::days(-7)).is_ok());
        assert_eq!(n, NegativeInfiniteInterval::new(date(2011, 12, 31)));
        assert!(n.expand(TimeDelta::days(1)).is_ok());
        assert_eq!(n, NegativeInfiniteInterval::new(date(2012, 1, 1)));

        assert!(n.shift_calendar(-1, -1, AllowDayOverflow::No).is_ok());
        assert_eq!(n, NegativeInfiniteInterval::new(date(2010, 12, 1)));
        assert!(n.expand_calendar(1, 0, AllowDayOverflow::No).is_ok());
        assert_eq!(n, NegativeInfiniteInterval::new(date(2011, 12, 1)));

        let mut far = NegativeInfiniteInterval::new(NaiveDate::MIN);
        assert!(matches!(
            far.shift_calendar(-1, 0, AllowDayOverflow::No),
            Err(Error::OutOfRange(_)),
        ));
        assert!(matches!(
            far.shift(TimeDelta::days(-1)),
            Err(Error::OutOfRange(_)),
        ));
        assert_eq!(far.end(), &NaiveDate::MIN);

        let mut top = NegativeInfiniteInterval::new(NaiveDate::MAX);
        assert!(top.expand(Days::new(1)).is_err());
        assert_eq!(top.end(), &NaiveDate::MAX);
        assert!(top.expand(Days::new(0)).is_ok());
    }

    #[test]
    fn test_io() {
        assert_eq!(reference().to_string(), "[- - 2012-01-07)");
        let mut n = NegativeInfiniteInterval::new(3);
        n.set_end(-2);
        assert_eq!(format!("{n}"), "[- - -2)");
    }
}
