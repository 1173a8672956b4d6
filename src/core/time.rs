use crate::utils::error::{FormatError, Result};
use crate::utils::validation::validate_finite;
use chrono::{DateTime, TimeDelta, TimeZone};

/// Renders a duration in seconds as `<hours>H<minutes>`, e.g. `1H05`.
///
/// Minutes below ten are rounded and zero padded. Larger remainders are
/// printed as-is, fraction included, so `5430.0` renders as `1H30.5`.
pub fn format_time(seconds: f64) -> Result<String> {
    validate_finite("seconds", seconds)?;

    let total_minutes = seconds / 60.0;
    let hours = (total_minutes / 60.0).floor();
    let minutes = total_minutes - hours * 60.0;

    let minutes = if minutes < 10.0 {
        format!("0{}", round_minutes(minutes))
    } else {
        minutes.to_string()
    };

    // `+ 0.0` folds a negative zero so it never prints as "-0".
    Ok(format!("{}H{}", hours + 0.0, minutes))
}

/// `format_time` prefixed with `+`, as shown next to a late departure.
pub fn format_delay(delay_seconds: f64) -> Result<String> {
    Ok(format!("+{}", format_time(delay_seconds)?))
}

/// Shifts `base` by a signed delay in seconds. Negative delays move the
/// instant earlier. The time zone of `base` is kept.
pub fn merge_time_delay<Tz: TimeZone>(
    base: &DateTime<Tz>,
    delay_seconds: f64,
) -> Result<DateTime<Tz>> {
    validate_finite("delay_seconds", delay_seconds)?;

    let out_of_range = || FormatError::OutOfRange {
        field: "delay_seconds".to_string(),
        value: delay_seconds.to_string(),
    };

    let offset = delay_to_time_delta(delay_seconds).ok_or_else(out_of_range)?;
    let merged = base.clone().checked_add_signed(offset).ok_or_else(out_of_range)?;

    tracing::trace!("Merged delay of {}s into {:?}", delay_seconds, merged);
    Ok(merged)
}

fn delay_to_time_delta(delay_seconds: f64) -> Option<TimeDelta> {
    let whole = delay_seconds.trunc();
    let nanos = ((delay_seconds - whole) * 1e9).round() as i64;

    // Saturating cast; anything past chrono's bound fails in try_seconds.
    TimeDelta::try_seconds(whole as i64)?.checked_add(&TimeDelta::nanoseconds(nanos))
}

/// Nearest integer, halves up. Only called with values in `[0, 10)`, where
/// `f64::round` agrees with that rule and adding 0.5 first would not.
fn round_minutes(value: f64) -> f64 {
    value.round() + 0.0
}
