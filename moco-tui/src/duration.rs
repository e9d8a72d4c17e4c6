use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DurationError {
    #[error("hours must be greater than 0")]
    NotPositive,
    #[error("minutes must be between 0 and 59")]
    MinutesOutOfRange,
    #[error("invalid format, use decimal (e.g. 1.5) or time (e.g. 1:30)")]
    InvalidFormat,
}

/// Parse a duration typed into the form, either decimal hours (`1.5`) or `H:MM` (`1:30`).
pub fn parse_duration(input: &str) -> Result<f64, DurationError> {
    let input = input.trim();

    if let Ok(hours) = input.parse::<f64>() {
        if !hours.is_finite() {
            return Err(DurationError::InvalidFormat);
        }
        if hours <= 0.0 {
            return Err(DurationError::NotPositive);
        }
        return Ok(hours);
    }

    parse_clock_notation(input)
}

fn parse_clock_notation(input: &str) -> Result<f64, DurationError> {
    let Some((hours, minutes)) = input.split_once(':') else {
        return Err(DurationError::InvalidFormat);
    };
    if minutes.contains(':') {
        return Err(DurationError::InvalidFormat);
    }

    let hours: f64 = hours
        .trim()
        .parse()
        .map_err(|_| DurationError::InvalidFormat)?;
    let minutes: f64 = minutes
        .trim()
        .parse()
        .map_err(|_| DurationError::InvalidFormat)?;
    if !hours.is_finite() || !minutes.is_finite() {
        return Err(DurationError::InvalidFormat);
    }
    if !(0.0..60.0).contains(&minutes) {
        return Err(DurationError::MinutesOutOfRange);
    }

    let total = hours + minutes / 60.0;
    if total <= 0.0 {
        return Err(DurationError::NotPositive);
    }
    Ok(total)
}
