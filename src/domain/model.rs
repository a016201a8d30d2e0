use crate::utils::error::CodecError;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Two-digit identifier of the circle a request is made for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CircleId(String);

impl CircleId {
    pub const LEN: usize = 2;

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CircleId {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == Self::LEN && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(s.to_string()))
        } else {
            Err(CodecError::InvalidCircleId {
                value: s.to_string(),
            })
        }
    }
}

impl TryFrom<&str> for CircleId {
    type Error = CodecError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for CircleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for CircleId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Everything a request code carries once deciphered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedRequest {
    pub circle_id: CircleId,
    pub date: NaiveDate,
    pub offset: u8,
}

/// Menu entries of the request manager, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Request,
    Accept,
    Valid,
    Help,
    Exit,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Request,
        Action::Accept,
        Action::Valid,
        Action::Help,
        Action::Exit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Action::Request => "request",
            Action::Accept => "accept",
            Action::Valid => "valid",
            Action::Help => "help",
            Action::Exit => "exit",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Action::Request => "Generate a Request Code",
            Action::Accept => "Get an Acceptation Code from a request Code",
            Action::Valid => "Validate an Acceptation Code for a Request Code",
            Action::Help => "Display Options",
            Action::Exit => "Quit",
        }
    }

    /// Loose lookup used for the command-line argument: unknown names are `None`.
    pub fn from_name(name: &str) -> Option<Action> {
        let name = name.trim().to_lowercase();
        Action::ALL.into_iter().find(|a| a.name() == name)
    }

    /// 1-based menu number, as shown by the help screen.
    pub fn from_menu_number(number: usize) -> Option<Action> {
        number
            .checked_sub(1)
            .and_then(|i| Action::ALL.get(i).copied())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 2] = ["text", "json"];
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestReport {
    pub circle_id: CircleId,
    pub requested_at: NaiveDateTime,
    pub request_code: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AcceptanceReport {
    #[serde(flatten)]
    pub request: DecodedRequest,
    pub request_code: String,
    pub acceptance_code: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub request_code: String,
    pub acceptance_code: String,
    pub valid: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_id_parsing() {
        assert_eq!("33".parse::<CircleId>().unwrap(), "33");
        assert_eq!(CircleId::try_from("07").unwrap().to_string(), "07");
        assert!("".parse::<CircleId>().is_err());
        assert!("7".parse::<CircleId>().is_err());
        assert!("ab".parse::<CircleId>().is_err());
        assert!("１２".parse::<CircleId>().is_err());
    }

    #[test]
    fn test_action_lookup() {
        assert_eq!(Action::from_name(" Accept "), Some(Action::Accept));
        assert_eq!(Action::from_name("VALID"), Some(Action::Valid));
        assert_eq!(Action::from_name("launch"), None);

        assert_eq!(Action::from_menu_number(1), Some(Action::Request));
        assert_eq!(Action::from_menu_number(5), Some(Action::Exit));
        assert_eq!(Action::from_menu_number(0), None);
        assert_eq!(Action::from_menu_number(6), None);
    }

    #[test]
    fn test_report_serialization() {
        let report = AcceptanceReport {
            request: DecodedRequest {
                circle_id: "33".parse().unwrap(),
                date: NaiveDate::from_ymd_opt(2017, 2, 1).unwrap(),
                offset: 15,
            },
            request_code: "PJJHNGIGH".to_string(),
            acceptance_code: "GJIJJ".to_string(),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["circle_id"], "33");
        assert_eq!(json["date"], "2017-02-01");
        assert_eq!(json["offset"], 15);
        assert_eq!(json["acceptance_code"], "GJIJJ");
    }
}
