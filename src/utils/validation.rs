use crate::domain::model::CircleId;
use crate::utils::error::{HamedError, Result};
use chrono::{NaiveDate, NaiveDateTime};

/// Years a request date may fall in; the code only keeps two year digits.
pub const MIN_REQUEST_YEAR: i32 = 2000;
pub const MAX_REQUEST_YEAR: i32 = 2099;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(HamedError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(HamedError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_circle_id(field_name: &str, value: &str) -> Result<CircleId> {
    value.parse::<CircleId>().map_err(|e| HamedError::InputError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Parses a `Y-M-D` date as typed at the prompt and pins it to `hour`.
///
/// Components are plain integers, so `2017-2-1` is accepted as well as
/// `2017-02-01`.
pub fn validate_request_date(field_name: &str, value: &str, hour: u32) -> Result<NaiveDateTime> {
    let input_error = |reason: String| HamedError::InputError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason,
    };

    let parts = value
        .trim()
        .split('-')
        .map(|p| p.trim().parse::<i32>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| input_error(format!("Invalid Date Format: {}", e)))?;

    let &[year, month, day] = parts.as_slice() else {
        return Err(input_error(
            "Invalid Date Format: expected Y-M-D".to_string(),
        ));
    };

    if !(MIN_REQUEST_YEAR..=MAX_REQUEST_YEAR).contains(&year) {
        return Err(input_error(format!(
            "Year must be between {} and {}",
            MIN_REQUEST_YEAR, MAX_REQUEST_YEAR
        )));
    }

    let date = u32::try_from(month)
        .ok()
        .zip(u32::try_from(day).ok())
        .and_then(|(m, d)| NaiveDate::from_ymd_opt(year, m, d))
        .ok_or_else(|| input_error("Invalid Date Format: no such calendar day".to_string()))?;

    date.and_hms_opt(hour, 0, 0)
        .ok_or_else(|| input_error(format!("Invalid hour {}", hour)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_validate_range() {
        assert!(validate_range("request.default_hour", 12, 0, 23).is_ok());
        assert!(validate_range("request.default_hour", 0, 0, 23).is_ok());
        assert!(validate_range("request.default_hour", 24, 0, 23).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("output.format", "json", &["text", "json"]).is_ok());
        assert!(validate_one_of("output.format", "xml", &["text", "json"]).is_err());
    }

    #[test]
    fn test_validate_circle_id() {
        assert_eq!(validate_circle_id("cercle_id", "33").unwrap().as_str(), "33");
        assert!(validate_circle_id("cercle_id", "3").is_err());
        assert!(validate_circle_id("cercle_id", "3a").is_err());
        assert!(validate_circle_id("cercle_id", "333").is_err());
    }

    #[test]
    fn test_validate_request_date() {
        let dt = validate_request_date("date", "2017-2-1", 12).unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2017, 2, 1).unwrap());
        assert_eq!(dt.hour(), 12);

        assert!(validate_request_date("date", "2017-02-30", 12).is_err());
        assert!(validate_request_date("date", "2017/02/01", 12).is_err());
        assert!(validate_request_date("date", "2017-02", 12).is_err());
        assert!(validate_request_date("date", "1999-12-31", 12).is_err());
        assert!(validate_request_date("date", "2017-02-01", 24).is_err());
    }
}
