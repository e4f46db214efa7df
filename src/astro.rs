//! Degree based trigonometry, Julian dates and the low precision solar model.

use std::f64::consts::PI;

/// Julian date of the J2000.0 epoch.
const J2000: f64 = 2451545.0;

/* ---------------------- Trigonometric Functions ----------------------- */

/* degree sin */
pub fn dsin(d: f64) -> f64 {
    deg2rad(d).sin()
}

/* degree cos */
pub fn dcos(d: f64) -> f64 {
    deg2rad(d).cos()
}

/* degree tan */
pub fn dtan(d: f64) -> f64 {
    deg2rad(d).tan()
}

/* degree arcsin */
pub fn darcsin(x: f64) -> f64 {
    rad2deg(x.asin())
}

/* degree arccos, NaN outside [-1, 1] */
pub fn darccos(x: f64) -> f64 {
    rad2deg(x.acos())
}

/* degree arctan */
pub fn darctan(x: f64) -> f64 {
    rad2deg(x.atan())
}

/* degree arctan2 */
pub fn darctan2(y: f64, x: f64) -> f64 {
    rad2deg(y.atan2(x))
}

/// Degree arccot, taken as `atan2(1, x)` so that `x == 0` yields 90°.
pub fn darccot(x: f64) -> f64 {
    rad2deg(1.0_f64.atan2(x))
}

/* degree to radian */
pub fn deg2rad(d: f64) -> f64 {
    d * PI / 180.0
}

/* radian to degree */
pub fn rad2deg(r: f64) -> f64 {
    r * 180.0 / PI
}

/// Range reduce an angle in degrees to `[0, 360)`.
pub fn fix_angle(a: f64) -> f64 {
    wrap(a, 360.0)
}

/// Range reduce hours to `[0, 24)`.
pub fn fix_hour(a: f64) -> f64 {
    wrap(a, 24.0)
}

fn wrap(a: f64, period: f64) -> f64 {
    let a = a - period * (a / period).floor();
    // floor can leave -0.0 or, for tiny negatives, exactly `period`
    if a < 0.0 {
        a + period
    } else if a >= period {
        a - period
    } else {
        a
    }
}

/* ---------------------- Julian Date Functions ----------------------- */

/// Julian date at 0h UT of a proleptic Gregorian calendar date (Meeus).
///
/// January and February count as months 13 and 14 of the previous year so the
/// century correction lines up with the leap day. The date is not validated.
pub fn julian_date(year: i32, month: u32, day: u32) -> f64 {
    let (mut year, mut month) = (f64::from(year), f64::from(month));
    if month <= 2.0 {
        year -= 1.0;
        month += 12.0;
    }

    let a = (year / 100.).floor();
    let b = 2. - a + (a / 4.).floor();

    (365.25 * (year + 4716.)).floor() + (30.6001 * (month + 1.)).floor() + f64::from(day) + b
        - 1524.5
}

/// Julian date shifted onto the local meridian of `longitude`.
pub fn local_julian_date(year: i32, month: u32, day: u32, longitude: f64) -> f64 {
    julian_date(year, month, day) - longitude / (15. * 24.)
}

/* ---------------------- Solar Position ----------------------- */

/// Declination of the sun (degrees) and equation of time (hours).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    pub declination: f64,
    pub equation_of_time: f64,
}

/// Low precision solar ephemeris, good to about 0.01° within two centuries of J2000.
pub fn sun_position(jd: f64) -> SunPosition {
    let d = jd - J2000;
    let g = fix_angle(357.529 + 0.98560028 * d); // mean anomaly
    let q = fix_angle(280.459 + 0.98564736 * d); // mean longitude
    let l = fix_angle(q + 1.915 * dsin(g) + 0.020 * dsin(2. * g)); // ecliptic longitude

    let e = 23.439 - 0.00000036 * d; // obliquity

    let declination = darcsin(dsin(e) * dsin(l));
    let ra = fix_hour(darctan2(dcos(e) * dsin(l), dcos(l)) / 15.0);

    SunPosition {
        declination,
        equation_of_time: q / 15.0 - ra,
    }
}

/* compute declination angle of sun */
pub fn sun_declination(jd: f64) -> f64 {
    sun_position(jd).declination
}

/* compute equation of time */
pub fn equation_of_time(jd: f64) -> f64 {
    sun_position(jd).equation_of_time
}

/* ---------------------- Misc Functions ----------------------- */

/// Hours from `time1` forward to `time2`, wrapped to `[0, 24)`.
pub fn time_diff(time1: f64, time2: f64) -> f64 {
    fix_hour(time2 - time1)
}
