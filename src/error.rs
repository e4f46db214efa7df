//! Errors for rejected caller input.
//!
//! A prayer whose defining solar event never happens is not an error: it stays
//! NaN and is rendered as the invalid time marker.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("latitude {0} is outside [-90, 90]")]
    InvalidLatitude(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    InvalidLongitude(f64),

    #[error("timezone offset {0} hours is outside [-12, 14]")]
    InvalidTimezone(f64),

    #[error("expected 7 tuning offsets, got {0}")]
    InvalidTuning(usize),

    #[error("the solver needs at least one iteration")]
    InvalidIterations,
}

impl Error {
    /// Every variant describes an argument the caller got wrong.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidDate { .. }
                | Self::InvalidLatitude(_)
                | Self::InvalidLongitude(_)
                | Self::InvalidTimezone(_)
                | Self::InvalidTuning(_)
                | Self::InvalidIterations
        )
    }
}
