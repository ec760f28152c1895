use crate::errors::{Error, Result};
use chrono::{
    Datelike, Days, Month, Months, NaiveDate, NaiveDateTime, TimeDelta,
    Weekday,
};
use std::fmt::Display;

/// The values used as bounds of intervals.
/// They only need to be totally ordered.  The textual representation is used
/// when displaying intervals and in error messages.
///
/// Arithmetic is not part of this trait: operations that move bounds are
/// generic over the duration type, and only require the corresponding
/// [`Offset`] implementation.  This way, a `chrono::NaiveDate` can be
/// shifted by a `TimeDelta`, a number of `Days` or a number of `Months`.
pub trait TimePoint: Clone + Ord + Display {}

impl<T: Clone + Ord + Display> TimePoint for T {}

/// Moving a time point by a duration of type `D`, without panicking.
/// Both methods return None when the result cannot be represented.
pub trait Offset<D>: Sized {
    fn offset_forward(&self, duration: &D) -> Option<Self>;
    fn offset_backward(&self, duration: &D) -> Option<Self>;
}

macro_rules! offset_impl {
    ($point:ty, $duration:ty, $add:ident, $sub:ident) => {
        impl Offset<$duration> for $point {
            fn offset_forward(&self, duration: &$duration) -> Option<Self> {
                self.$add(*duration)
            }

            fn offset_backward(&self, duration: &$duration) -> Option<Self> {
                self.$sub(*duration)
            }
        }
    };
}

offset_impl!(NaiveDate, TimeDelta, checked_add_signed, checked_sub_signed);
offset_impl!(NaiveDate, Days, checked_add_days, checked_sub_days);
offset_impl!(NaiveDate, Months, checked_add_months, checked_sub_months);
offset_impl!(NaiveDateTime, TimeDelta, checked_add_signed, checked_sub_signed);
offset_impl!(NaiveDateTime, Days, checked_add_days, checked_sub_days);
offset_impl!(NaiveDateTime, Months, checked_add_months, checked_sub_months);
offset_impl!(i8, i8, checked_add, checked_sub);
offset_impl!(i16, i16, checked_add, checked_sub);
offset_impl!(i32, i32, checked_add, checked_sub);
offset_impl!(i64, i64, checked_add, checked_sub);
offset_impl!(i128, i128, checked_add, checked_sub);
offset_impl!(isize, isize, checked_add, checked_sub);
offset_impl!(u8, u8, checked_add, checked_sub);
offset_impl!(u16, u16, checked_add, checked_sub);
offset_impl!(u32, u32, checked_add, checked_sub);
offset_impl!(u64, u64, checked_add, checked_sub);
offset_impl!(u128, u128, checked_add, checked_sub);
offset_impl!(usize, usize, checked_add, checked_sub);

/// Whether adding months or years is allowed to overflow into the next
/// month, when the day doesn't exist in the target month.
///
/// ```text
///    2011-01-31 + 1 month   =>  2011-03-03  (Yes)
///                               2011-02-28  (No)
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AllowDayOverflow {
    No,
    #[default]
    Yes,
}

/// Which side(s) of a bounded interval are moved when expanding it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Both,

    /// Only the end moves
    Forward,

    /// Only the begin moves
    Backward,
}

/// The direction in which a sequence walks through time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Heading {
    #[default]
    Forward,
    Backward,
}

impl Display for Heading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Heading::Forward => write!(f, "forward"),
            Heading::Backward => write!(f, "backward"),
        }
    }
}

/// Time points that know about the calendar.
/// This is only needed for the calendar-based overloads (shifting by a
/// number of years and months) and for the rules that generate sequences
/// on given weekdays or months.
///
/// All additions return None when the result cannot be represented.
pub trait CalendarPoint: TimePoint {
    /// Add a (possibly negative) number of months.
    fn add_months(&self, months: i32, overflow: AllowDayOverflow)
        -> Option<Self>;

    /// Add a (possibly negative) number of days.
    fn add_days(&self, days: i64) -> Option<Self>;

    /// The day of the week.
    fn day_of_week(&self) -> Weekday;

    /// The month of the year, None if the calendar reports a month
    /// number outside of `1..=12`.
    fn month_of_year(&self) -> Option<Month>;

    /// Add a (possibly negative) number of years.
    fn add_years(&self, years: i32, overflow: AllowDayOverflow) -> Option<Self> {
        self.add_months(years.checked_mul(12)?, overflow)
    }
}

/// Move a point forward by a duration, failing when out of range.
pub(crate) fn forward<T, D>(point: &T, duration: &D) -> Result<T>
where
    T: TimePoint + Offset<D>,
{
    point
        .offset_forward(duration)
        .ok_or_else(|| Error::out_of_range(point))
}

pub(crate) fn backward<T, D>(point: &T, duration: &D) -> Result<T>
where
    T: TimePoint + Offset<D>,
{
    point
        .offset_backward(duration)
        .ok_or_else(|| Error::out_of_range(point))
}

/// Move a point by a number of years, then a number of months (both
/// negated when heading backward).
pub(crate) fn step_calendar<T: CalendarPoint>(
    point: &T,
    years: i32,
    months: i32,
    overflow: AllowDayOverflow,
    heading: Heading,
) -> Result<T> {
    let (years, months) = match heading {
        Heading::Forward => (Some(years), Some(months)),
        Heading::Backward => (years.checked_neg(), months.checked_neg()),
    };
    years
        .zip(months)
        .and_then(|(y, m)| point.add_years(y, overflow)?.add_months(m, overflow))
        .ok_or_else(|| Error::out_of_range(point))
}

/// Number of days to move forward from `from` to reach `to`, in `0..7`
pub(crate) fn days_until(from: Weekday, to: Weekday) -> i64 {
    i64::from(to.days_since(from))
}

/// Number of months to move forward from `from` to reach `to`, in `0..12`
pub(crate) fn months_until(from: Month, to: Month) -> i32 {
    let mut month = from;
    let mut count = 0;
    while month != to {
        month = month.succ();
        count += 1;
    }
    count
}

fn month_of(date: &impl Datelike) -> Option<Month> {
    Month::try_from(u8::try_from(date.month()).ok()?).ok()
}

/// Chrono clips to the end of the target month.  With overflow allowed,
/// the clipped days are added back, rolling into the following month.
fn shift_months(
    date: NaiveDate,
    months: i32,
    overflow: AllowDayOverflow,
) -> Option<NaiveDate> {
    let count = Months::new(months.unsigned_abs());
    let clipped = if months >= 0 {
        date.checked_add_months(count)?
    } else {
        date.checked_sub_months(count)?
    };
    match overflow {
        AllowDayOverflow::No => Some(clipped),
        AllowDayOverflow::Yes => {
            let missing = date.day().saturating_sub(clipped.day());
            clipped.checked_add_days(Days::new(u64::from(missing)))
        }
    }
}

impl CalendarPoint for NaiveDate {
    fn add_months(
        &self,
        months: i32,
        overflow: AllowDayOverflow,
    ) -> Option<Self> {
        shift_months(*self, months, overflow)
    }

    fn add_days(&self, days: i64) -> Option<Self> {
        self.checked_add_signed(TimeDelta::try_days(days)?)
    }

    fn day_of_week(&self) -> Weekday {
        self.weekday()
    }

    fn month_of_year(&self) -> Option<Month> {
        month_of(self)
    }
}

impl CalendarPoint for NaiveDateTime {
    fn add_months(
        &self,
        months: i32,
        overflow: AllowDayOverflow,
    ) -> Option<Self> {
        let date = shift_months(self.date(), months, overflow)?;
        Some(NaiveDateTime::new(date, self.time()))
    }

    fn add_days(&self, days: i64) -> Option<Self> {
        self.checked_add_signed(TimeDelta::try_days(days)?)
    }

    fn day_of_week(&self) -> Weekday {
        self.weekday()
    }

    fn month_of_year(&self) -> Option<Month> {
        month_of(self)
    }
}

#[cfg(test)]
pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_add_months() {
        let d = date(2011, 1, 31);
        assert_eq!(d.add_months(1, AllowDayOverflow::Yes), Some(date(2011, 3, 3)));
        assert_eq!(d.add_months(1, AllowDayOverflow::No), Some(date(2011, 2, 28)));
        assert_eq!(d.add_months(-2, AllowDayOverflow::No), Some(date(2010, 11, 30)));
        assert_eq!(d.add_months(-2, AllowDayOverflow::Yes), Some(date(2010, 12, 1)));
        assert_eq!(d.add_months(11, AllowDayOverflow::Yes), Some(date(2011, 12, 31)));
        assert_eq!(d.add_months(0, AllowDayOverflow::No), Some(d));

        let leap = date(2012, 1, 30);
        assert_eq!(leap.add_months(1, AllowDayOverflow::Yes), Some(date(2012, 3, 1)));
        assert_eq!(leap.add_months(1, AllowDayOverflow::No), Some(date(2012, 2, 29)));
    }

    #[test]
    fn test_add_years() {
        let d = date(2012, 2, 29);
        assert_eq!(d.add_years(1, AllowDayOverflow::Yes), Some(date(2013, 3, 1)));
        assert_eq!(d.add_years(1, AllowDayOverflow::No), Some(date(2013, 2, 28)));
        assert_eq!(d.add_years(4, AllowDayOverflow::No), Some(date(2016, 2, 29)));
        assert_eq!(d.add_years(-12, AllowDayOverflow::No), Some(date(2000, 2, 29)));
        assert_eq!(NaiveDate::MAX.add_years(1, AllowDayOverflow::Yes), None);
        assert_eq!(d.add_years(i32::MAX, AllowDayOverflow::Yes), None);
    }

    #[test]
    fn test_step_calendar() {
        let d = date(2010, 1, 31);
        assert_eq!(
            step_calendar(&d, 1, 1, AllowDayOverflow::No, Heading::Forward),
            Ok(date(2011, 2, 28)),
        );
        assert_eq!(
            step_calendar(&d, 1, 1, AllowDayOverflow::Yes, Heading::Backward),
            Ok(date(2008, 12, 31)),
        );
        assert!(matches!(
            step_calendar(&d, i32::MIN, 0, AllowDayOverflow::No, Heading::Backward),
            Err(Error::OutOfRange(_)),
        ));
    }

    #[test]
    fn test_datetime() {
        let time = NaiveTime::from_hms_opt(12, 30, 0).unwrap();
        let dt = NaiveDateTime::new(date(2010, 8, 31), time);
        assert_eq!(
            dt.add_months(1, AllowDayOverflow::No),
            Some(NaiveDateTime::new(date(2010, 9, 30), time)),
        );
        assert_eq!(
            dt.add_days(-31),
            Some(NaiveDateTime::new(date(2010, 7, 31), time)),
        );
        assert_eq!(dt.day_of_week(), Weekday::Tue);
        assert_eq!(dt.month_of_year(), Some(Month::August));
    }

    #[test]
    fn test_deltas() {
        assert_eq!(days_until(Weekday::Mon, Weekday::Mon), 0);
        assert_eq!(days_until(Weekday::Mon, Weekday::Sun), 6);
        assert_eq!(days_until(Weekday::Sun, Weekday::Mon), 1);
        assert_eq!(days_until(Weekday::Fri, Weekday::Wed), 5);

        assert_eq!(months_until(Month::January, Month::January), 0);
        assert_eq!(months_until(Month::December, Month::January), 1);
        assert_eq!(months_until(Month::March, Month::February), 11);
        assert_eq!(month_of(&date(2010, 12, 1)), Some(Month::December));
    }

    #[test]
    fn test_offset() {
        let d = date(2010, 1, 31);
        assert_eq!(d.offset_forward(&TimeDelta::days(1)), Some(date(2010, 2, 1)));
        assert_eq!(d.offset_backward(&Days::new(31)), Some(date(2009, 12, 31)));
        assert_eq!(d.offset_forward(&Months::new(1)), Some(date(2010, 2, 28)));
        assert_eq!(NaiveDate::MAX.offset_forward(&TimeDelta::days(1)), None);
        assert_eq!(NaiveDate::MIN.offset_backward(&Days::new(1)), None);
        assert_eq!(NaiveDate::MAX.offset_forward(&Months::new(1)), None);
        assert_eq!(NaiveDateTime::MAX.offset_forward(&TimeDelta::seconds(1)), None);

        assert_eq!(5_i32.offset_forward(&3), Some(8));
        assert_eq!(i32::MAX.offset_forward(&1), None);
        assert_eq!(0_u32.offset_backward(&1), None);
    }

    #[test]
    fn test_heading() {
        assert_eq!(Heading::default(), Heading::Forward);
        assert_eq!(Heading::Backward.to_string(), "backward");
        assert_eq!(Direction::default(), Direction::Both);
        assert_eq!(AllowDayOverflow::default(), AllowDayOverflow::Yes);
    }
}
