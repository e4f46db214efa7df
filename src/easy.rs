use crate::{CalculationMethod, Clock, PrayerTimes, Result, Times};

impl PrayerTimes {
    #[allow(clippy::too_many_arguments)]
    pub fn get_prayer_times_easy(
        &self,
        year: i32,
        month: u32,
        day: u32,
        latitude: f64,
        longitude: f64,
        timezone: f64,
        method: CalculationMethod,
    ) -> Result<EasyTimes> {
        self.get_prayer_times(year, month, day, latitude, longitude, timezone, method)
            .map(EasyTimes::from)
    }

    /// Today's times from `clock`, by name.
    pub fn current_prayer_times_easy(
        &self,
        clock: &dyn Clock,
        latitude: f64,
        longitude: f64,
        method: CalculationMethod,
    ) -> Result<EasyTimes> {
        self.current_prayer_times(clock, latitude, longitude, method)
            .map(EasyTimes::from)
    }
}

/// Formatted prayer times by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EasyTimes {
    pub fajr: String,
    pub sunrise: String,
    pub dhuhr: String,
    pub asr: String,
    pub sunset: String,
    pub maghrib: String,
    pub isha: String,
}

impl From<Times> for EasyTimes {
    fn from(times: Times) -> Self {
        let [fajr, sunrise, dhuhr, asr, sunset, maghrib, isha] = times;
        EasyTimes {
            fajr,
            sunrise,
            dhuhr,
            asr,
            sunset,
            maghrib,
            isha,
        }
    }
}

impl From<EasyTimes> for Times {
    fn from(times: EasyTimes) -> Self {
        [
            times.fajr,
            times.sunrise,
            times.dhuhr,
            times.asr,
            times.sunset,
            times.maghrib,
            times.isha,
        ]
    }
}
