/*-------------------------- In the name of God ----------------------------*\

    prayer_times (rust)
    Islamic prayer times calculator library
    Based on libprayertimes 1.0 Cpp library
    Based on PrayTimes 1.1 JavaScript library

----------------------------- Copyright Block --------------------------------

Copyright (C) 2007-2010 PrayTimes.org

Developed By: Nbiba Bedis <bedis at nbiba at gmail dot com>
Based on Cpp Code By: Mohammad Ebrahim Mohammadi Panah <ebrahim at mohammadi dot ir>
Based on a JavaScript Code By: Hamid Zarrabi-Zadeh

License: GNU GPL v3.0

TERMS OF USE:
    Permission is granted to use this code, with or
    without modification, in any website or application
    provided that credit is given to the original work
    with a link back to PrayTimes.org.

This program is distributed in the hope that it will
be useful, but WITHOUT ANY WARRANTY.

PLEASE DO NOT REMOVE THIS COPYRIGHT BLOCK.

------------------------------------------------------------------------------

User's Manual:
http://praytimes.org/manual

Calculating Formulas:
http://praytimes.org/calculation

\*--------------------------------------------------------------------------*/

use chrono::{Datelike, NaiveDate};
use log::{debug, trace};

use crate::astro::{
    darccos, darccot, dcos, dsin, dtan, equation_of_time, fix_hour, local_julian_date,
    sun_declination, time_diff,
};

pub mod astro;
pub mod clock;
pub mod easy;
mod error;
pub mod format;
mod method;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use format::{
    float_time_to_string, float_time_to_time12, float_time_to_time12ns, float_time_to_time24,
    TimeFormat, INVALID_TIME,
};
pub use method::{CalculationMethod, IshaMode, MaghribMode, MethodParameters};

pub const TIMES_COUNT: usize = 7;

/// Fractional hours of the day in [`TimeID`] order, NaN where the event does not occur.
pub type RawTimes = [f64; TIMES_COUNT];

/// Formatted times in [`TimeID`] order.
pub type Times = [String; TIMES_COUNT];

const SUNRISE_ANGLE: f64 = 0.833; // refraction plus solar semi-diameter
const DEFAULT_TIMES: RawTimes = [5., 6., 12., 13., 18., 18., 18.];

/// Computes prayer times for one date and place.
///
/// Settings and tuning offsets live on the calculator; every computation reads
/// them through `&self`, so they cannot change while a computation runs.
#[derive(Debug, Default, Clone)]
pub struct PrayerTimes {
    settings: Settings,
    tuning: TuningOffsets,
}

impl PrayerTimes {
    pub fn new(
        asr_juristic: JuristicMethod,
        adjust_high_lats: AdjustingMethod,
        dhuhr_minutes: f64,
    ) -> Self {
        Self::with_settings(Settings {
            asr_juristic,
            adjust_high_lats,
            dhuhr_minutes,
            ..Default::default()
        })
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            tuning: TuningOffsets::default(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Replace the per prayer minute offsets.
    pub fn tune(&mut self, offsets: impl Into<TuningOffsets>) {
        self.tuning = offsets.into();
    }

    /// Like [`PrayerTimes::tune`], for offsets of unchecked length.
    pub fn set_tuning_offsets(&mut self, offsets: &[i32]) -> Result<()> {
        self.tuning = TuningOffsets::try_from(offsets)?;
        Ok(())
    }

    pub fn tuning(&self) -> TuningOffsets {
        self.tuning
    }

    /// Unformatted times for a date, location and timezone (hours from UTC).
    pub fn compute_raw(
        &self,
        year: i32,
        month: u32,
        day: u32,
        location: Location,
        timezone: f64,
        method: CalculationMethod,
    ) -> Result<RawTimes> {
        debug!(
            "computing {year:04}-{month:02}-{day:02} at {location:?}, tz {timezone}, {method:?}"
        );
        self.compute_with_params(year, month, day, location, timezone, method.params())
    }

    /// Unformatted times using explicit method parameters instead of a named method.
    pub fn compute_with_params(
        &self,
        year: i32,
        month: u32,
        day: u32,
        location: Location,
        timezone: f64,
        params: MethodParameters,
    ) -> Result<RawTimes> {
        let date = validate_date(year, month, day)?;
        location.validate()?;
        validate_timezone(timezone)?;
        if self.settings.iterations == 0 {
            return Err(Error::InvalidIterations);
        }
        let solver = Solver {
            settings: &self.settings,
            params,
            latitude: location.latitude,
            longitude: location.longitude,
            timezone,
            julian_date: local_julian_date(
                date.year(),
                date.month(),
                date.day(),
                location.longitude,
            ),
        };
        Ok(solver.compute_day_times(self.tuning))
    }

    /// Times for a date, formatted per [`Settings::time_format`].
    #[allow(clippy::too_many_arguments)]
    pub fn get_prayer_times(
        &self,
        year: i32,
        month: u32,
        day: u32,
        latitude: f64,
        longitude: f64,
        timezone: f64,
        method: CalculationMethod,
    ) -> Result<Times> {
        let location = Location::new(latitude, longitude)?;
        let times = self.compute_raw(year, month, day, location, timezone, method)?;
        Ok(self.format_times(&times))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn prayer_times_with_params(
        &self,
        year: i32,
        month: u32,
        day: u32,
        latitude: f64,
        longitude: f64,
        timezone: f64,
        params: MethodParameters,
    ) -> Result<Times> {
        let location = Location::new(latitude, longitude)?;
        let times = self.compute_with_params(year, month, day, location, timezone, params)?;
        Ok(self.format_times(&times))
    }

    pub fn prayer_times_for_date(
        &self,
        date: NaiveDate,
        latitude: f64,
        longitude: f64,
        timezone: f64,
        method: CalculationMethod,
    ) -> Result<Times> {
        self.get_prayer_times(
            date.year(),
            date.month(),
            date.day(),
            latitude,
            longitude,
            timezone,
            method,
        )
    }

    /// Times for today according to `clock`, in the clock's UTC offset.
    pub fn current_prayer_times(
        &self,
        clock: &dyn Clock,
        latitude: f64,
        longitude: f64,
        method: CalculationMethod,
    ) -> Result<Times> {
        let (year, month, day, timezone) = clock::snapshot(clock);
        self.get_prayer_times(year, month, day, latitude, longitude, timezone, method)
    }

    pub fn format_times(&self, times: &RawTimes) -> Times {
        times.map(|time| float_time_to_string(time, self.settings.time_format))
    }
}

/// Formatted times with default settings and the given tuning offsets.
#[allow(clippy::too_many_arguments)]
pub fn compute_prayer_times(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    timezone: f64,
    method: CalculationMethod,
    tuning: TuningOffsets,
) -> Result<Times> {
    let mut pt = PrayerTimes::default();
    pt.tune(tuning);
    pt.get_prayer_times(year, month, day, latitude, longitude, timezone, method)
}

/// Today's times from the system clock and default timezone, with default settings.
pub fn compute_current_prayer_times(
    latitude: f64,
    longitude: f64,
    method: CalculationMethod,
) -> Result<Times> {
    PrayerTimes::default().current_prayer_times(&SystemClock, latitude, longitude, method)
}

/// One computation: method, place and Julian date fixed up front.
struct Solver<'a> {
    settings: &'a Settings,
    params: MethodParameters,
    latitude: f64,
    longitude: f64,
    timezone: f64,
    julian_date: f64,
}

impl Solver<'_> {
    fn compute_day_times(&self, tuning: TuningOffsets) -> RawTimes {
        let mut times = DEFAULT_TIMES;

        for i in 0..self.settings.iterations {
            self.compute_times(&mut times);
            trace!("iteration {}: {times:?}", i + 1);
        }

        self.adjust_times(&mut times);
        tune_times(&mut times, tuning);
        trace!("adjusted: {times:?}");

        times
    }

    /* compute prayer times at given julian date */
    fn compute_times(&self, times: &mut RawTimes) {
        day_portion(times);

        use TimeID::*;
        times[Fajr as usize] =
            self.compute_time(180.0 - self.params.fajr_angle, times[Fajr as usize]);
        times[Sunrise as usize] =
            self.compute_time(180.0 - SUNRISE_ANGLE, times[Sunrise as usize]);
        times[Dhuhr as usize] = self.compute_mid_day(times[Dhuhr as usize]);
        times[Asr as usize] = self.compute_asr(
            self.settings.asr_juristic.shadow_factor(),
            times[Asr as usize],
        );
        times[Sunset as usize] = self.compute_time(SUNRISE_ANGLE, times[Sunset as usize]);
        times[Maghrib as usize] =
            self.compute_time(self.params.maghrib_value, times[Maghrib as usize]);
        times[Isha as usize] = self.compute_time(self.params.isha_value, times[Isha as usize]);
    }

    /* compute mid-day (Dhuhr, Zawal) time */
    fn compute_mid_day(&self, t: f64) -> f64 {
        let eq_t = equation_of_time(self.julian_date + t);
        fix_hour(12. - eq_t)
    }

    /// Time at which the sun sits `g` degrees below the horizon, measured so that
    /// angles past 90° fall before noon. NaN if the sun never gets there.
    fn compute_time(&self, g: f64, t: f64) -> f64 {
        let d = sun_declination(self.julian_date + t);
        let z = self.compute_mid_day(t);
        let v = 1.0 / 15.0
            * darccos((-dsin(g) - dsin(d) * dsin(self.latitude)) / (dcos(d) * dcos(self.latitude)));
        z + (if g > 90.0 { -v } else { v })
    }

    /* compute the time of Asr */
    fn compute_asr(&self, shadow_factor: f64, t: f64) -> f64 {
        let d = sun_declination(self.julian_date + t);
        let g = -darccot(shadow_factor + dtan(f64::abs(self.latitude - d)));
        self.compute_time(g, t)
    }

    /* adjust times in a prayer time array */
    fn adjust_times(&self, times: &mut RawTimes) {
        use TimeID::*;
        for time in times.iter_mut() {
            *time += self.timezone - self.longitude / 15.0;
        }
        times[Dhuhr as usize] += self.settings.dhuhr_minutes / 60.0;
        if self.params.maghrib_is_minutes() {
            times[Maghrib as usize] = times[Sunset as usize] + self.params.maghrib_value / 60.0;
        }
        if self.params.isha_is_minutes() {
            times[Isha as usize] = times[Maghrib as usize] + self.params.isha_value / 60.0;
        }

        if self.settings.adjust_high_lats != AdjustingMethod::None {
            self.adjust_high_lat_times(times);
        }
    }

    /* adjust Fajr, Isha and Maghrib for locations in higher latitudes */
    fn adjust_high_lat_times(&self, times: &mut RawTimes) {
        use TimeID::*;
        let method = self.settings.adjust_high_lats;
        let sunrise = times[Sunrise as usize];
        let sunset = times[Sunset as usize];
        let night_time = time_diff(sunset, sunrise);

        let fajr_diff = method.night_portion(self.params.fajr_angle) * night_time;
        let fajr = times[Fajr as usize];
        if fajr.is_nan() || time_diff(fajr, sunrise) > fajr_diff {
            times[Fajr as usize] = sunrise - fajr_diff;
            debug!("{method:?}: Fajr moved from {fajr} to {}", times[Fajr as usize]);
        }

        let isha_angle = if self.params.isha_is_minutes() {
            18.0
        } else {
            self.params.isha_value
        };
        let isha_diff = method.night_portion(isha_angle) * night_time;
        let isha = times[Isha as usize];
        if isha.is_nan() || time_diff(sunset, isha) > isha_diff {
            times[Isha as usize] = sunset + isha_diff;
            debug!("{method:?}: Isha moved from {isha} to {}", times[Isha as usize]);
        }

        let maghrib_angle = if self.params.maghrib_is_minutes() {
            4.0
        } else {
            self.params.maghrib_value
        };
        let maghrib_diff = method.night_portion(maghrib_angle) * night_time;
        let maghrib = times[Maghrib as usize];
        if maghrib.is_nan() || time_diff(sunset, maghrib) > maghrib_diff {
            times[Maghrib as usize] = sunset + maghrib_diff;
            debug!("{method:?}: Maghrib moved from {maghrib} to {}", times[Maghrib as usize]);
        }
    }
}

/* convert hours to day portions  */
fn day_portion(times: &mut RawTimes) {
    for time in times.iter_mut() {
        *time /= 24.0;
    }
}

fn tune_times(times: &mut RawTimes, tuning: TuningOffsets) {
    for (time, offset) in times.iter_mut().zip(tuning.0) {
        *time += f64::from(offset) / 60.0;
    }
}

fn validate_date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(Error::InvalidDate { year, month, day })
}

fn validate_timezone(timezone: f64) -> Result<()> {
    if (-12.0..=14.0).contains(&timezone) {
        Ok(())
    } else {
        Err(Error::InvalidTimezone(timezone))
    }
}

/// Observer position in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let location = Self {
            latitude,
            longitude,
        };
        location.validate()?;
        Ok(location)
    }

    pub fn validate(&self) -> Result<()> {
        // RangeInclusive::contains is false for NaN
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(Error::InvalidLatitude(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(Error::InvalidLongitude(self.longitude));
        }
        Ok(())
    }
}

/// Minutes added to each time after every other adjustment, in [`TimeID`] order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TuningOffsets(pub [i32; TIMES_COUNT]);

impl TuningOffsets {
    pub fn get(&self, id: TimeID) -> i32 {
        self.0[id as usize]
    }

    pub fn set(&mut self, id: TimeID, minutes: i32) {
        self.0[id as usize] = minutes;
    }
}

impl From<[i32; TIMES_COUNT]> for TuningOffsets {
    fn from(offsets: [i32; TIMES_COUNT]) -> Self {
        Self(offsets)
    }
}

impl TryFrom<&[i32]> for TuningOffsets {
    type Error = Error;

    fn try_from(offsets: &[i32]) -> Result<Self> {
        <[i32; TIMES_COUNT]>::try_from(offsets)
            .map(Self)
            .map_err(|_| Error::InvalidTuning(offsets.len()))
    }
}

/// Calculator configuration shared by every computation.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub asr_juristic: JuristicMethod,
    pub adjust_high_lats: AdjustingMethod,
    /// Minutes after mid-day for Dhuhr.
    pub dhuhr_minutes: f64,
    pub time_format: TimeFormat,
    /// Solver passes; each feeds its times back in as the next estimate.
    pub iterations: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            asr_juristic: JuristicMethod::default(),
            adjust_high_lats: AdjustingMethod::default(),
            dhuhr_minutes: 0.0,
            time_format: TimeFormat::default(),
            iterations: 1,
        }
    }
}

impl Settings {
    pub fn with_asr_juristic(mut self, asr_juristic: JuristicMethod) -> Self {
        self.asr_juristic = asr_juristic;
        self
    }

    pub fn with_adjust_high_lats(mut self, adjust_high_lats: AdjustingMethod) -> Self {
        self.adjust_high_lats = adjust_high_lats;
        self
    }

    pub fn with_dhuhr_minutes(mut self, dhuhr_minutes: f64) -> Self {
        self.dhuhr_minutes = dhuhr_minutes;
        self
    }

    pub fn with_time_format(mut self, time_format: TimeFormat) -> Self {
        self.time_format = time_format;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }
}

// Juristic Methods
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum JuristicMethod {
    #[default]
    Shafii, // Shafii (standard)
    Hanafi, // Hanafi
}

impl JuristicMethod {
    /// Shadow length, in object heights, beyond the noon shadow that starts Asr.
    pub fn shadow_factor(self) -> f64 {
        match self {
            JuristicMethod::Shafii => 1.0,
            JuristicMethod::Hanafi => 2.0,
        }
    }
}

// Adjusting Methods for Higher Latitudes
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum AdjustingMethod {
    #[default]
    None, // No adjustment
    MidNight,   // middle of night
    OneSeventh, // 1/7th of night
    AngleBased, // angle/60th of night
}

impl AdjustingMethod {
    /* the night portion used for adjusting times in higher latitudes */
    pub fn night_portion(self, angle: f64) -> f64 {
        match self {
            AdjustingMethod::AngleBased => angle / 60.0,
            AdjustingMethod::MidNight => 1.0 / 2.0,
            AdjustingMethod::OneSeventh => 1.0 / 7.0,
            AdjustingMethod::None => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeID {
    Fajr = 0,
    Sunrise,
    Dhuhr,
    Asr,
    Sunset,
    Maghrib,
    Isha,
}

impl TimeID {
    pub const ALL: [TimeID; TIMES_COUNT] = [
        TimeID::Fajr,
        TimeID::Sunrise,
        TimeID::Dhuhr,
        TimeID::Asr,
        TimeID::Sunset,
        TimeID::Maghrib,
        TimeID::Isha,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TimeID::Fajr => "Fajr",
            TimeID::Sunrise => "Sunrise",
            TimeID::Dhuhr => "Dhuhr",
            TimeID::Asr => "Asr",
            TimeID::Sunset => "Sunset",
            TimeID::Maghrib => "Maghrib",
            TimeID::Isha => "Isha",
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        float_time_to_time24, AdjustingMethod, CalculationMethod, Error, FixedClock,
        JuristicMethod, Location, PrayerTimes, Settings, TimeFormat, TimeID, TuningOffsets,
        INVALID_TIME,
    };

    fn minutes(time: f64) -> f64 {
        time * 60.0
    }

    #[test]
    fn test_times() {
        let pt = PrayerTimes::default();
        let times = pt
            .get_prayer_times(2022, 11, 27, 36., 10., 1., CalculationMethod::MWL)
            .unwrap();
        for id in TimeID::ALL {
            println!("{} : {}", id.name(), times[id as usize]);
        }
        assert_eq!(
            times,
            ["05:38", "07:08", "12:08", "14:48", "17:07", "17:07", "18:32"]
        );
    }

    #[test]
    fn equinox_on_the_equator() {
        let pt = PrayerTimes::default();
        let location = Location::new(0.0, 0.0).unwrap();
        let t = pt
            .compute_raw(2024, 3, 20, location, 0.0, CalculationMethod::MWL)
            .unwrap();
        let (sunrise, dhuhr, sunset) = (
            t[TimeID::Sunrise as usize],
            t[TimeID::Dhuhr as usize],
            t[TimeID::Sunset as usize],
        );
        assert!(minutes((dhuhr - 12.0).abs()) < 10.0);
        assert!(minutes(((dhuhr - sunrise) - (sunset - dhuhr)).abs()) < 1.0);
        assert_eq!(float_time_to_time24(dhuhr), "12:07");
    }

    #[test]
    fn hanafi_asr_is_later() {
        let shafii = PrayerTimes::default();
        let hanafi = PrayerTimes::new(JuristicMethod::Hanafi, AdjustingMethod::None, 0.0);
        let location = Location::new(40.7128, -74.006).unwrap();
        let method = CalculationMethod::NorthAmerica;
        let a = shafii.compute_raw(2023, 7, 4, location, -4.0, method).unwrap();
        let b = hanafi.compute_raw(2023, 7, 4, location, -4.0, method).unwrap();
        let asr = TimeID::Asr as usize;
        assert_eq!(float_time_to_time24(a[asr]), "17:00");
        assert_eq!(float_time_to_time24(b[asr]), "18:13");
        for id in TimeID::ALL.into_iter().filter(|id| *id != TimeID::Asr) {
            assert_eq!(a[id as usize], b[id as usize]);
        }
    }

    #[test]
    fn dhuhr_minutes_shift_dhuhr_only() {
        let pt = PrayerTimes::new(JuristicMethod::Shafii, AdjustingMethod::None, 5.0);
        let times = pt
            .get_prayer_times(2022, 11, 27, 36., 10., 1., CalculationMethod::MWL)
            .unwrap();
        assert_eq!(times[TimeID::Dhuhr as usize], "12:13");
        assert_eq!(times[TimeID::Asr as usize], "14:48");
    }

    #[test]
    fn umm_al_qura_isha_follows_maghrib() {
        let pt = PrayerTimes::default();
        let location = Location::new(21.4225, 39.8262).unwrap();
        let t = pt
            .compute_raw(2024, 3, 11, location, 3.0, CalculationMethod::UmmAlQura)
            .unwrap();
        assert_eq!(t[TimeID::Maghrib as usize], t[TimeID::Sunset as usize]);
        assert!((t[TimeID::Isha as usize] - t[TimeID::Maghrib as usize] - 1.5).abs() < 1e-12);
    }

    #[test]
    fn high_latitudes_without_adjustment_are_invalid() {
        let pt = PrayerTimes::default();
        let times = pt
            .get_prayer_times(2024, 6, 21, 65., 18., 2., CalculationMethod::MWL)
            .unwrap();
        assert_eq!(times[TimeID::Fajr as usize], INVALID_TIME);
        assert_eq!(times[TimeID::Isha as usize], INVALID_TIME);
        assert_eq!(times[TimeID::Sunrise as usize], "01:49");
        assert_eq!(times[TimeID::Sunset as usize], "23:51");
    }

    #[test]
    fn high_latitude_strategies() {
        let cases = [
            (AdjustingMethod::MidNight, "00:50", "00:50"),
            (AdjustingMethod::OneSeventh, "01:32", "00:08"),
            (AdjustingMethod::AngleBased, "01:13", "00:24"),
        ];
        for (method, fajr, isha) in cases {
            let pt = PrayerTimes::new(JuristicMethod::Shafii, method, 0.0);
            let times = pt
                .get_prayer_times(2024, 6, 21, 65., 18., 2., CalculationMethod::MWL)
                .unwrap();
            assert_eq!(times[TimeID::Fajr as usize], fajr, "{method:?}");
            assert_eq!(times[TimeID::Isha as usize], isha, "{method:?}");
            assert_eq!(times[TimeID::Maghrib as usize], "23:51", "{method:?}");
        }
    }

    #[test]
    fn tuning_is_additive() {
        let mut pt = PrayerTimes::default();
        let location = Location::new(36., 10.).unwrap();
        let before = pt
            .compute_raw(2022, 11, 27, location, 1., CalculationMethod::MWL)
            .unwrap();
        pt.tune([0, 0, 10, 0, 0, 0, -3]);
        let after = pt
            .compute_raw(2022, 11, 27, location, 1., CalculationMethod::MWL)
            .unwrap();
        for (i, (a, b)) in before.iter().zip(after).enumerate() {
            let expected = pt.tuning().0[i] as f64;
            assert!((minutes(b - a) - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn tuning_length_is_checked() {
        let mut pt = PrayerTimes::default();
        assert_eq!(
            pt.set_tuning_offsets(&[1, 2, 3]),
            Err(Error::InvalidTuning(3))
        );
        pt.set_tuning_offsets(&[1, 2, 3, 4, 5, 6, 7]).unwrap();
        assert_eq!(pt.tuning().get(TimeID::Isha), 7);

        let mut offsets = TuningOffsets::default();
        offsets.set(TimeID::Asr, 4);
        assert_eq!(offsets.0, [0, 0, 0, 4, 0, 0, 0]);
    }

    #[test]
    fn rejects_bad_input() {
        let pt = PrayerTimes::default();
        let method = CalculationMethod::MWL;
        assert_eq!(
            pt.get_prayer_times(2023, 2, 29, 36., 10., 1., method),
            Err(Error::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            })
        );
        assert_eq!(
            pt.get_prayer_times(2023, 13, 1, 36., 10., 1., method),
            Err(Error::InvalidDate {
                year: 2023,
                month: 13,
                day: 1
            })
        );
        assert_eq!(
            pt.get_prayer_times(2023, 1, 1, 91., 10., 1., method),
            Err(Error::InvalidLatitude(91.))
        );
        assert_eq!(
            pt.get_prayer_times(2023, 1, 1, 36., -181., 1., method),
            Err(Error::InvalidLongitude(-181.))
        );
        assert_eq!(
            pt.get_prayer_times(2023, 1, 1, 36., 10., 15., method),
            Err(Error::InvalidTimezone(15.))
        );
        assert!(pt
            .get_prayer_times(2023, 1, 1, f64::NAN, 10., 1., method)
            .unwrap_err()
            .is_invalid_argument());

        let zero = PrayerTimes::with_settings(Settings::default().with_iterations(0));
        assert_eq!(
            zero.get_prayer_times(2023, 1, 1, 36., 10., 1., method),
            Err(Error::InvalidIterations)
        );
    }

    #[test]
    fn leap_day_is_accepted() {
        let pt = PrayerTimes::default();
        assert!(pt
            .get_prayer_times(2024, 2, 29, 36., 10., 1., CalculationMethod::MWL)
            .is_ok());
    }

    #[test]
    fn twelve_hour_settings() {
        let pt = PrayerTimes::with_settings(Settings::default().with_time_format(TimeFormat::Time12));
        let times = pt
            .get_prayer_times(2022, 11, 27, 36., 10., 1., CalculationMethod::MWL)
            .unwrap();
        assert_eq!(times[TimeID::Fajr as usize], "05:38 AM");
        assert_eq!(times[TimeID::Asr as usize], "02:48 PM");
    }

    #[test]
    fn more_iterations_stay_close() {
        let location = Location::new(3.139, 101.6869).unwrap();
        let one = PrayerTimes::default()
            .compute_raw(2024, 3, 20, location, 8., CalculationMethod::MWL)
            .unwrap();
        let three = PrayerTimes::with_settings(Settings::default().with_iterations(3))
            .compute_raw(2024, 3, 20, location, 8., CalculationMethod::MWL)
            .unwrap();
        for (a, b) in one.iter().zip(three) {
            assert!(minutes((a - b).abs()) < 0.5);
        }
    }

    #[test]
    fn current_times_follow_the_clock() {
        let now = chrono::DateTime::parse_from_rfc3339("2022-11-27T09:00:00+01:00").unwrap();
        let times = PrayerTimes::default()
            .current_prayer_times(&FixedClock(now), 36., 10., CalculationMethod::MWL)
            .unwrap();
        assert_eq!(times[TimeID::Dhuhr as usize], "12:08");
    }

    #[test]
    fn date_overload_matches() {
        let pt = PrayerTimes::default();
        let date = chrono::NaiveDate::from_ymd_opt(2022, 11, 27).unwrap();
        assert_eq!(
            pt.prayer_times_for_date(date, 36., 10., 1., CalculationMethod::MWL),
            pt.get_prayer_times(2022, 11, 27, 36., 10., 1., CalculationMethod::MWL)
        );
    }

    #[test]
    fn custom_params_match_named_method() {
        let pt = PrayerTimes::default();
        assert_eq!(
            pt.prayer_times_with_params(2022, 11, 27, 36., 10., 1., CalculationMethod::Egypt.params()),
            pt.get_prayer_times(2022, 11, 27, 36., 10., 1., CalculationMethod::Egypt)
        );
    }
}
