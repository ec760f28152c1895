//! This crate provides intervals of time points, and lazy sequences of time
//! points walking through them.
//!
//! All intervals are left-closed and right-open.  There are three shapes:
//!
//!  |Interval     |Constructor                          |Description
//!  |-------------|-------------------------------------|--------------
//!  | `[A,B)`     |[`BoundedInterval::new`]             |bounded, may be empty
//!  | `[A,)`      |[`PositiveInfiniteInterval::new`]    |never ends
//!  | `(,B)`      |[`NegativeInfiniteInterval::new`]    |has always existed
//!
//! Any type that is totally ordered and can be displayed can be used as a
//! time point (see [`TimePoint`]).  Operations that move the bounds are
//! generic over the duration type, so that for instance a
//! `chrono::NaiveDate` can be moved by a `chrono::TimeDelta` or a number of
//! `chrono::Days`.  Moving by years and months requires a [`CalendarPoint`],
//! implemented for `chrono::NaiveDate` and `chrono::NaiveDateTime`.
//!
//! Given two intervals, the [`Relations`], [`Intersect`] and [`Union`]
//! traits compute the following:
//!
//! ```text
//!        [------ A ------)
//!               [----- B -------)
//!
//!               [--------)            Intersection
//!        [----------------------)     Merge
//!        [----------------------)     Span
//!
//!      [---A---)   [----B----)
//!
//!                                     Intersection fails
//!                                     Merge fails
//!      [---------------------)        Span
//! ```
//!
//! The [`Interval`] enum wraps any of the three shapes, when the shape is
//! only known at run time.
//!
//! Sequences are created from an interval and a rule, which computes the
//! next time point from the current one.  The [`rules`] module provides
//! the common rules:
//!
//! ```
//! use chrono::{NaiveDate, Weekday};
//! use time_intervals::{rules, BoundedInterval, Heading, SkipFirst};
//!
//! let september = BoundedInterval::new(
//!     NaiveDate::from_ymd_opt(2010, 9, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2010, 10, 1).unwrap(),
//! ).unwrap();
//! let fridays = september.forward_sequence(
//!     rules::every_day_of_week::<NaiveDate>(Weekday::Fri, Heading::Forward),
//!     SkipFirst::Yes,
//! ).unwrap();
//! assert_eq!(fridays.count(), 4);
//! ```

mod bounded;
mod errors;
mod negative_infinite;
mod positive_infinite;
mod relations;
pub mod rules;
mod sequences;
mod time_points;

pub use crate::bounded::BoundedInterval;
pub use crate::errors::{Error, Result};
pub use crate::negative_infinite::NegativeInfiniteInterval;
pub use crate::positive_infinite::PositiveInfiniteInterval;
pub use crate::relations::{Intersect, Interval, Relations, Union};
pub use crate::sequences::{
    IntervalSequence, NegativeInfiniteSequence, PositiveInfiniteSequence,
    SkipFirst,
};
pub use crate::time_points::{
    AllowDayOverflow, CalendarPoint, Direction, Heading, Offset, TimePoint,
};
