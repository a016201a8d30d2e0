use crate::core::alphabet::{index_of, ALPHABET};
use crate::core::cipher::{substitution_cipher, substitution_decipher};
use crate::domain::model::{CircleId, DecodedRequest};
use crate::utils::error::{CodecError, CodecResult};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Length of a request code: marker plus ciphered payload.
pub const REQUEST_CODE_LEN: usize = 1 + PLAINTEXT_LEN;

/// `{cercle:2}{year:2}{month:2}{day:2}`
const PLAINTEXT_LEN: usize = 8;

/// Fixed-width plaintext carried by a request code.
pub fn request_plaintext(circle_id: &CircleId, date: NaiveDate) -> String {
    format!(
        "{}{:02}{:02}{:02}",
        circle_id,
        date.year().rem_euclid(100),
        date.month(),
        date.day()
    )
}

/// Ordinal day of `date` as a 3-character string (`"001"` for January 1st).
pub fn day_of_year(date: NaiveDate) -> String {
    format!("{:03}", date.ordinal())
}

/// Request code for `circle_id` at `at`; the hour of `at` is the cipher key.
pub fn encode_request(circle_id: &CircleId, at: NaiveDateTime) -> String {
    let offset = at.hour();
    // hour() is always below 24, so the marker exists
    let marker = ALPHABET.chars().nth(offset as usize).unwrap_or('a');
    let ciphered = substitution_cipher(&request_plaintext(circle_id, at.date()), offset as i32);

    let code = format!("{}{}", marker, ciphered).to_uppercase();
    tracing::debug!(circle_id = %circle_id, %at, %code, "encoded request");
    code
}

pub fn decode_request(code: &str) -> CodecResult<DecodedRequest> {
    let code = code.to_lowercase();
    let mut chars = code.chars();

    let marker = chars.next().ok_or_else(|| CodecError::MalformedCode {
        message: "empty code".to_string(),
    })?;
    let offset = index_of(ALPHABET, marker).ok_or_else(|| CodecError::MalformedCode {
        message: format!("unknown pad marker '{}'", marker),
    })?;

    let text: Vec<char> = substitution_decipher(chars.as_str(), offset as i32)
        .chars()
        .collect();
    if text.len() < PLAINTEXT_LEN {
        return Err(CodecError::MalformedCode {
            message: format!(
                "expected {} characters, got {}",
                REQUEST_CODE_LEN,
                text.len() + 1
            ),
        });
    }

    let circle: String = text[0..2].iter().collect();
    let circle_id = circle
        .parse::<CircleId>()
        .map_err(|_| CodecError::MalformedCode {
            message: format!("circle id '{}' is not numeric", circle),
        })?;
    let year = 2000 + numeric_field("year", &text[2..4])? as i32;
    let month = numeric_field("month", &text[4..6])?;
    let day = numeric_field("day", &text[6..8])?;

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        CodecError::InvalidDate {
            message: format!("{}-{:02}-{:02} is not a calendar day", year, month, day),
        }
    })?;

    Ok(DecodedRequest {
        circle_id,
        date,
        offset: offset as u8,
    })
}

fn numeric_field(name: &str, digits: &[char]) -> CodecResult<u32> {
    digits.iter().try_fold(0u32, |acc, c| {
        c.to_digit(10)
            .map(|d| acc * 10 + d)
            .ok_or_else(|| CodecError::MalformedCode {
                message: format!("{} '{}' is not numeric", name, digits.iter().collect::<String>()),
            })
    })
}
