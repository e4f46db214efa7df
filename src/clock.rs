//! Source of "now" for the current-day entry points.

use chrono::{DateTime, Datelike, FixedOffset, Local};

pub trait Clock {
    /// Current local time; its offset is the timezone used for the computation.
    fn now(&self) -> DateTime<FixedOffset>;

    /// UTC offset of [`Clock::now`] in hours, daylight saving included.
    fn utc_offset_hours(&self) -> f64 {
        offset_hours(&self.now())
    }
}

fn offset_hours(time: &DateTime<FixedOffset>) -> f64 {
    f64::from(time.offset().local_minus_utc()) / 3600.0
}

/// The system clock and default timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Date parts and offset read from a single `now()` call.
pub(crate) fn snapshot(clock: &dyn Clock) -> (i32, u32, u32, f64) {
    let now = clock.now();
    let timezone = offset_hours(&now);
    log::debug!("clock reports {now} (UTC offset {timezone} h)");
    (now.year(), now.month(), now.day(), timezone)
}
