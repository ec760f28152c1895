use crate::bounded::BoundedInterval;
use crate::errors::{Error, Result};
use crate::negative_infinite::NegativeInfiniteInterval;
use crate::positive_infinite::PositiveInfiniteInterval;
use crate::time_points::{Heading, TimePoint};
use std::fmt::Debug;
use std::iter::FusedIterator;

/// Whether a sequence should skip its first time point (the edge of the
/// interval it was created from).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SkipFirst {
    #[default]
    No,
    Yes,
}

/// A lazy sequence of time points, walking through a bounded interval.
///
/// The sequence owns its own copy of the interval, and shrinks it as it
/// advances: a forward sequence moves the begin of its interval, a backward
/// sequence moves the end.  The sequence is exhausted once its interval is
/// empty.  The interval it was created from is never modified.
///
/// Each step applies the rule to the current time point.  A result that
/// goes past the far edge of the interval is clamped to that edge.
///
/// The rule must be a pure function: the same input always gives the same
/// output.  This is not checked, but [`IntervalSequence::snapshot`] relies
/// on it.
#[derive(Clone)]
pub struct IntervalSequence<T, F> {
    interval: BoundedInterval<T>,
    rule: F,
    heading: Heading,
    iter: IterState,
}

/// When used as an iterator, the error from a failed advance is reported
/// after the last valid time point, and then the iteration stops.
#[derive(Clone, Debug)]
enum IterState {
    Running,
    Failed(Error),
    Done,
}

impl<T: TimePoint, F: Fn(&T) -> T> IntervalSequence<T, F> {
    pub(crate) fn new(
        interval: BoundedInterval<T>,
        rule: F,
        heading: Heading,
        skip: SkipFirst,
    ) -> Result<Self> {
        let mut seq = Self {
            interval,
            rule,
            heading,
            iter: IterState::Running,
        };
        match skip {
            SkipFirst::No => {}
            SkipFirst::Yes => seq.advance()?,
        }
        Ok(seq)
    }

    /// What remains of the interval
    #[must_use]
    pub fn interval(&self) -> &BoundedInterval<T> {
        &self.interval
    }

    #[must_use]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// True once the sequence has reached the far edge of its interval
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interval.is_empty()
    }

    fn edge(&self) -> &T {
        match self.heading {
            Heading::Forward => self.interval.begin(),
            Heading::Backward => self.interval.end(),
        }
    }

    /// The current time point
    pub fn current(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::EmptyRange);
        }
        Ok(self.edge())
    }

    /// Move to the next time point.
    /// On error, the sequence is left unchanged.
    pub fn advance(&mut self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::EmptyRange);
        }
        let current = self.edge().clone();
        let candidate = (self.rule)(&current);
        match self.heading {
            Heading::Forward => {
                if candidate <= current {
                    return Err(Error::non_monotonic(
                        &current,
                        &candidate,
                        self.heading,
                    ));
                }
                let next = if candidate > *self.interval.end() {
                    self.interval.end().clone()
                } else {
                    candidate
                };
                log::trace!("forward sequence moved from {current} to {next}");
                self.interval.set_begin(next)
            }
            Heading::Backward => {
                if candidate >= current {
                    return Err(Error::non_monotonic(
                        &current,
                        &candidate,
                        self.heading,
                    ));
                }
                let next = if candidate < *self.interval.begin() {
                    self.interval.begin().clone()
                } else {
                    candidate
                };
                log::trace!("backward sequence moved from {current} to {next}");
                self.interval.set_end(next)
            }
        }
    }
}

impl<T: Clone, F: Clone> IntervalSequence<T, F> {
    /// An independent copy of the sequence, that will generate the same
    /// time points as self.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }
}

impl<T: Debug, F> Debug for IntervalSequence<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntervalSequence")
            .field("interval", &self.interval)
            .field("heading", &self.heading)
            .finish_non_exhaustive()
    }
}

impl<T: TimePoint, F: Fn(&T) -> T> Iterator for IntervalSequence<T, F> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        match std::mem::replace(&mut self.iter, IterState::Done) {
            IterState::Failed(err) => return Some(Err(err)),
            IterState::Done => return None,
            IterState::Running => self.iter = IterState::Running,
        }
        let value = self.current().ok()?.clone();
        if let Err(err) = self.advance() {
            self.iter = IterState::Failed(err);
        }
        Some(Ok(value))
    }
}

impl<T: TimePoint, F: Fn(&T) -> T> FusedIterator for IntervalSequence<T, F> {}

/// A lazy sequence of time points, walking forward from the begin of a
/// [`PositiveInfiniteInterval`].  It never ends.
#[derive(Clone)]
pub struct PositiveInfiniteSequence<T, F> {
    interval: PositiveInfiniteInterval<T>,
    rule: F,
    iter: IterState,
}

impl<T: TimePoint, F: Fn(&T) -> T> PositiveInfiniteSequence<T, F> {
    pub(crate) fn new(
        interval: PositiveInfiniteInterval<T>,
        rule: F,
        skip: SkipFirst,
    ) -> Result<Self> {
        let mut seq = Self {
            interval,
            rule,
            iter: IterState::Running,
        };
        match skip {
            SkipFirst::No => {}
            SkipFirst::Yes => seq.advance()?,
        }
        Ok(seq)
    }

    #[must_use]
    pub fn interval(&self) -> &PositiveInfiniteInterval<T> {
        &self.interval
    }

    #[must_use]
    pub fn heading(&self) -> Heading {
        Heading::Forward
    }

    /// Always false
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn current(&self) -> &T {
        self.interval.begin()
    }

    pub fn advance(&mut self) -> Result<()> {
        let current = self.interval.begin().clone();
        let next = (self.rule)(&current);
        if next <= current {
            return Err(Error::non_monotonic(&current, &next, Heading::Forward));
        }
        log::trace!("forward sequence moved from {current} to {next}");
        self.interval.set_begin(next);
        Ok(())
    }
}

impl<T: Clone, F: Clone> PositiveInfiniteSequence<T, F> {
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }
}

impl<T: Debug, F> Debug for PositiveInfiniteSequence<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PositiveInfiniteSequence")
            .field("interval", &self.interval)
            .finish_non_exhaustive()
    }
}

impl<T: TimePoint, F: Fn(&T) -> T> Iterator for PositiveInfiniteSequence<T, F> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        match std::mem::replace(&mut self.iter, IterState::Done) {
            IterState::Failed(err) => return Some(Err(err)),
            IterState::Done => return None,
            IterState::Running => self.iter = IterState::Running,
        }
        let value = self.current().clone();
        if let Err(err) = self.advance() {
            self.iter = IterState::Failed(err);
        }
        Some(Ok(value))
    }
}

impl<T: TimePoint, F: Fn(&T) -> T> FusedIterator
    for PositiveInfiniteSequence<T, F>
{
}

/// A lazy sequence of time points, walking backward from the end of a
/// [`NegativeInfiniteInterval`].  It never ends.
#[derive(Clone)]
pub struct NegativeInfiniteSequence<T, F> {
    interval: NegativeInfiniteInterval<T>,
    rule: F,
    iter: IterState,
}

impl<T: TimePoint, F: Fn(&T) -> T> NegativeInfiniteSequence<T, F> {
    pub(crate) fn new(
        interval: NegativeInfiniteInterval<T>,
        rule: F,
        skip: SkipFirst,
    ) -> Result<Self> {
        let mut seq = Self {
            interval,
            rule,
            iter: IterState::Running,
        };
        match skip {
            SkipFirst::No => {}
            SkipFirst::Yes => seq.advance()?,
        }
        Ok(seq)
    }

    #[must_use]
    pub fn interval(&self) -> &NegativeInfiniteInterval<T> {
        &self.interval
    }

    #[must_use]
    pub fn heading(&self) -> Heading {
        Heading::Backward
    }

    /// Always false
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn current(&self) -> &T {
        self.interval.end()
    }

    pub fn advance(&mut self) -> Result<()> {
        let current = self.interval.end().clone();
        let next = (self.rule)(&current);
        if next >= current {
            return Err(Error::non_monotonic(&current, &next, Heading::Backward));
        }
        log::trace!("backward sequence moved from {current} to {next}");
        self.interval.set_end(next);
        Ok(())
    }
}

impl<T: Clone, F: Clone> NegativeInfiniteSequence<T, F> {
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }
}

impl<T: Debug, F> Debug for NegativeInfiniteSequence<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NegativeInfiniteSequence")
            .field("interval", &self.interval)
            .finish_non_exhaustive()
    }
}

impl<T: TimePoint, F: Fn(&T) -> T> Iterator for NegativeInfiniteSequence<T, F> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        match std::mem::replace(&mut self.iter, IterState::Done) {
            IterState::Failed(err) => return Some(Err(err)),
            IterState::Done => return None,
            IterState::Running => self.iter = IterState::Running,
        }
        let value = self.current().clone();
        if let Err(err) = self.advance() {
            self.iter = IterState::Failed(err);
        }
        Some(Ok(value))
    }
}

impl<T: TimePoint, F: Fn(&T) -> T> FusedIterator
    for NegativeInfiniteSequence<T, F>
{
}
