use crate::astro::fix_hour;

/// Rendered in place of a time whose solar event does not occur.
pub const INVALID_TIME: &str = "-----";

// Time Formats
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum TimeFormat {
    #[default]
    Time24, // 24-hour format
    Time12,         // 12-hour format
    Time12NoSuffix, // 12-hour format with no suffix
    FloatingPoint,  // floating point number
}

/* convert float hours to 24h format */
pub fn float_time_to_time24(time: f64) -> String {
    if f64::is_nan(time) {
        return INVALID_TIME.into();
    }
    let (hours, minutes) = get_float_time_parts(time);
    format!("{:02}:{:02}", hours, minutes)
}

/* convert float hours to 12h format */
pub fn float_time_to_time12(time: f64, no_suffix: bool) -> String {
    if f64::is_nan(time) {
        return INVALID_TIME.into();
    }
    let (hours, minutes) = get_float_time_parts(time);
    let suffix = if hours >= 12 { "PM" } else { "AM" };
    let hours = (hours + 12 - 1) % 12 + 1;
    if no_suffix {
        format!("{:02}:{:02}", hours, minutes)
    } else {
        format!("{:02}:{:02} {}", hours, minutes, suffix)
    }
}

/* convert float hours to 12h format with no suffix */
pub fn float_time_to_time12ns(time: f64) -> String {
    float_time_to_time12(time, true)
}

/// Render `time` in the given format. Floating point output is not range reduced.
pub fn float_time_to_string(time: f64, format: TimeFormat) -> String {
    match format {
        TimeFormat::Time24 => float_time_to_time24(time),
        TimeFormat::Time12 => float_time_to_time12(time, false),
        TimeFormat::Time12NoSuffix => float_time_to_time12ns(time),
        TimeFormat::FloatingPoint if time.is_nan() => INVALID_TIME.into(),
        TimeFormat::FloatingPoint => time.to_string(),
    }
}

/* get hours and minutes parts of a float time */
fn get_float_time_parts(time: f64) -> (usize, usize) {
    let time = fix_hour(time + 0.5 / 60.); // add 0.5 minutes to round
    let hours = f64::floor(time) as usize;
    let minutes = f64::floor((time - hours as f64) * 60.) as usize;
    (hours, minutes)
}
