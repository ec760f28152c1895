//! Ready-made rules to drive sequences.
//!
//! A rule computes the next time point of a sequence from the current one.
//! The functions here return closures that can be passed directly to
//! [`crate::BoundedInterval::forward_sequence`] and friends.  Always use the
//! same `Heading` for the rule and for the sequence it drives.
//!
//! When a calendar step would leave the range of representable time
//! points, the rules return their input unchanged, so that the sequence
//! reports a [`crate::Error::NonMonotonicRule`].

use crate::time_points::{
    backward, days_until, forward, months_until, step_calendar,
    AllowDayOverflow, CalendarPoint, Heading, Offset, TimePoint,
};
use chrono::{Month, Weekday};

/// Move to the next (or previous) time point that falls on `weekday`.
/// The result is always at least one day away from the input, and at most
/// seven.
#[must_use]
pub fn every_day_of_week<T: CalendarPoint>(
    weekday: Weekday,
    heading: Heading,
) -> impl Fn(&T) -> T + Clone {
    move |point: &T| {
        let delta = days_until(point.day_of_week(), weekday);
        let days = match heading {
            Heading::Forward if delta == 0 => 7,
            Heading::Forward => delta,
            Heading::Backward if delta == 0 => -7,
            Heading::Backward => delta - 7,
        };
        point.add_days(days).unwrap_or_else(|| point.clone())
    }
}

/// Move to the next (or previous) time point that falls in `month`.
/// The day of the month is kept when possible, and clipped to the end of
/// the target month otherwise.
#[must_use]
pub fn every_month<T: CalendarPoint>(
    month: Month,
    heading: Heading,
) -> impl Fn(&T) -> T + Clone {
    move |point: &T| {
        let Some(current) = point.month_of_year() else {
            return point.clone();
        };
        let delta = months_until(current, month);
        let months = match heading {
            Heading::Forward if delta == 0 => 12,
            Heading::Forward => delta,
            Heading::Backward if delta == 0 => -12,
            Heading::Backward => delta - 12,
        };
        let Some(next) = point.add_months(months, AllowDayOverflow::No) else {
            return point.clone();
        };
        if next.month_of_year() == Some(month) {
            next
        } else {
            next.add_months(-1, AllowDayOverflow::Yes)
                .unwrap_or_else(|| point.clone())
        }
    }
}

/// Move by a fixed duration.
#[must_use]
pub fn every_duration<T, D>(
    duration: D,
    heading: Heading,
) -> impl Fn(&T) -> T + Clone
where
    T: TimePoint + Offset<D>,
    D: Clone,
{
    move |point: &T| {
        let next = match heading {
            Heading::Forward => point.offset_forward(&duration),
            Heading::Backward => point.offset_backward(&duration),
        };
        next.unwrap_or_else(|| point.clone())
    }
}

/// Move by a number of years, then months, then a fixed duration.
///
/// Heading backward, the steps are applied in the reverse order (duration
/// first, then months, then years).  Because of the clipping or overflow
/// of days, walking backward is not always the exact inverse of walking
/// forward.
#[must_use]
pub fn every_calendar_duration<T, D>(
    years: i32,
    months: i32,
    overflow: AllowDayOverflow,
    duration: D,
    heading: Heading,
) -> impl Fn(&T) -> T + Clone
where
    T: CalendarPoint + Offset<D>,
    D: Clone,
{
    move |point: &T| {
        let stepped = match heading {
            Heading::Forward => {
                step_calendar(point, years, 0, overflow, heading)
                    .and_then(|p| step_calendar(&p, 0, months, overflow, heading))
                    .and_then(|p| forward(&p, &duration))
            }
            Heading::Backward => backward(point, &duration)
                .and_then(|p| step_calendar(&p, 0, months, overflow, heading))
                .and_then(|p| step_calendar(&p, years, 0, overflow, heading)),
        };
        stepped.unwrap_or_else(|_| point.clone())
    }
}
