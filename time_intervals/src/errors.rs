use crate::time_points::Heading;
use std::fmt::Display;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid range: begin {begin} is after end {end}")]
    InvalidRange { begin: String, end: String },

    #[error("interval {0} is empty")]
    EmptyInterval(String),

    #[error("intervals {0} and {1} do not overlap")]
    DisjointInterval(String, String),

    #[error("sequence is exhausted")]
    EmptyRange,

    #[error("rule moved from {from} to {to}, which is not strictly {heading}")]
    NonMonotonicRule {
        from: String,
        to: String,
        heading: Heading,
    },

    #[error("cannot move {0} outside of the representable time range")]
    OutOfRange(String),

    #[error("the union of {0} and {1} is unbounded on both sides")]
    DoublyUnbounded(String, String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_range<T: Display>(begin: &T, end: &T) -> Self {
        log::debug!("rejected inverted range [{begin} - {end})");
        Error::InvalidRange {
            begin: begin.to_string(),
            end: end.to_string(),
        }
    }

    pub(crate) fn empty_interval<I: Display>(interval: &I) -> Self {
        Error::EmptyInterval(interval.to_string())
    }

    pub(crate) fn disjoint<L: Display, R: Display>(left: &L, right: &R) -> Self {
        Error::DisjointInterval(left.to_string(), right.to_string())
    }

    pub(crate) fn non_monotonic<T: Display>(
        from: &T,
        to: &T,
        heading: Heading,
    ) -> Self {
        Error::NonMonotonicRule {
            from: from.to_string(),
            to: to.to_string(),
            heading,
        }
    }

    pub(crate) fn out_of_range<T: Display>(point: &T) -> Self {
        log::debug!("moving {point} left the representable range");
        Error::OutOfRange(point.to_string())
    }
}
