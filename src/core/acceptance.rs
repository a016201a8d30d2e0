use crate::core::cipher::{substitution_cipher, substitution_decipher};
use crate::core::request::{day_of_year, decode_request, REQUEST_CODE_LEN};
use crate::utils::error::{CodecError, CodecResult};

/// Length of an acceptance code: `{doy:3}{cercle:2}`.
pub const ACCEPTANCE_CODE_LEN: usize = 5;

/// Acceptance code answering `request_code`.
pub fn compute_acceptance(request_code: &str) -> CodecResult<String> {
    let request = decode_request(request_code)?;
    let text = format!("{}{}", day_of_year(request.date), request.circle_id);
    Ok(substitution_cipher(&text, i32::from(request.offset)).to_uppercase())
}

/// Whether `acceptance_code` was computed from `request_code`.
///
/// Never fails: a malformed request code is simply not a match.
pub fn check_acceptance(request_code: &str, acceptance_code: &str) -> bool {
    match verify_acceptance(request_code, acceptance_code) {
        Ok(matches) => matches,
        Err(e @ CodecError::InvalidIndex { .. }) => {
            debug_assert!(false, "rotation index escaped the alphabet: {}", e);
            tracing::warn!("acceptance check aborted: {}", e);
            false
        }
        Err(
            e @ (CodecError::MalformedCode { .. }
            | CodecError::InvalidDate { .. }
            | CodecError::InvalidCircleId { .. }),
        ) => {
            tracing::debug!(request_code, "acceptance check rejected request code: {}", e);
            false
        }
    }
}

fn verify_acceptance(request_code: &str, acceptance_code: &str) -> CodecResult<bool> {
    let acceptance_code = acceptance_code.to_lowercase();
    if request_code.chars().count() != REQUEST_CODE_LEN
        || acceptance_code.chars().count() != ACCEPTANCE_CODE_LEN
    {
        tracing::debug!(request_code, %acceptance_code, "code length mismatch");
        return Ok(false);
    }

    let request = decode_request(request_code)?;
    let text: Vec<char> = substitution_decipher(&acceptance_code, i32::from(request.offset))
        .chars()
        .collect();
    let doy: String = text[..3].iter().collect();
    let circle_id: String = text[3..].iter().collect();

    Ok(request.circle_id == circle_id.as_str() && doy == day_of_year(request.date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_acceptance() {
        assert_eq!(compute_acceptance("PJJHNGIGH").unwrap(), "GJIJJ");
        assert_eq!(compute_acceptance("pjjhngigh").unwrap(), "GJIJJ");
    }

    #[test]
    fn test_compute_acceptance_propagates_decode_errors() {
        assert!(matches!(
            compute_acceptance("P"),
            Err(CodecError::MalformedCode { .. })
        ));
        assert!(matches!(
            compute_acceptance("A33171301"),
            Err(CodecError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_check_acceptance() {
        assert!(check_acceptance("PJJHNGIGH", "GJIJJ"));
        assert!(check_acceptance("pjjhngigh", "gjijj"));
        assert!(!check_acceptance("PJJHNGIGHA", "GJIJJ"));
        assert!(!check_acceptance("PJJHNGIGH", "GJIJJA"));
    }

    #[test]
    fn test_check_acceptance_rejects_mismatch() {
        assert!(!check_acceptance("PJJHNGIGH", "GJIJK"));
        assert!(!check_acceptance("PJJHNGIGH", "HJIJJ"));
        assert!(!check_acceptance("", ""));
        assert!(!check_acceptance("#JJHNGIGH", "GJIJJ"));
        assert!(!check_acceptance("A33171301", "GJIJJ"));
    }
}
