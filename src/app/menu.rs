use crate::core::acceptance::{check_acceptance, compute_acceptance};
use crate::core::request::{decode_request, encode_request};
use crate::core::{Clock, ConfigProvider};
use crate::domain::model::{
    AcceptanceReport, Action, OutputFormat, RequestReport, ValidationReport,
};
use crate::utils::error::{HamedError, Result};
use crate::utils::validation::{validate_circle_id, validate_request_date};
use serde::Serialize;
use std::io::{BufRead, Write};

pub const TITLE: &str = "RAMEDCollect (hamed) Advanced-mode Request Manager";

enum Flow {
    Continue,
    /// Input was closed while prompting.
    Closed,
}

/// Interactive request manager: runs an action, then shows the menu again
/// until the user quits or input ends.
pub struct Session<R, W, K> {
    input: R,
    output: W,
    clock: K,
    default_hour: u32,
    format: OutputFormat,
}

impl<R: BufRead, W: Write, K: Clock> Session<R, W, K> {
    pub fn new<C: ConfigProvider>(input: R, output: W, clock: K, config: &C) -> Self {
        Self {
            input,
            output,
            clock,
            default_hour: config.default_hour(),
            format: config.output_format(),
        }
    }

    /// Runs until `exit` is chosen or input ends. Invalid input aborts the
    /// session with an error.
    pub fn run(&mut self, first: Action) -> Result<()> {
        writeln!(self.output, "{}", TITLE)?;
        writeln!(self.output, "{}", "-".repeat(TITLE.len()))?;
        writeln!(self.output)?;

        let mut action = first;
        loop {
            tracing::debug!("▶️ action: {}", action.name());
            let flow = match action {
                Action::Exit => return Ok(()),
                Action::Help => match self.do_help()? {
                    Some(next) => {
                        action = next;
                        continue;
                    }
                    None => Flow::Closed,
                },
                Action::Request => self.do_request()?,
                Action::Accept => self.do_accept()?,
                Action::Valid => self.do_valid()?,
            };

            if let Flow::Closed = flow {
                tracing::debug!("input closed, leaving session");
                return Ok(());
            }

            writeln!(self.output, "\n---\n")?;
            action = Action::Help;
        }
    }

    fn do_request(&mut self) -> Result<Flow> {
        writeln!(self.output, "Obtaining a RequestCode for a simulated Cercle")?;
        let Some(circle) = self.prompt("Please provide a 2chars-long `cercle_id`: ")? else {
            return Ok(Flow::Closed);
        };
        let circle_id = validate_circle_id("cercle_id", &circle)?;

        let Some(date_str) =
            self.prompt("Please provide a Request Date in Y-M-D format (or blank for today): ")?
        else {
            return Ok(Flow::Closed);
        };
        let requested_at = if date_str.is_empty() {
            self.clock.now()
        } else {
            validate_request_date("date", &date_str, self.default_hour)?
        };

        let code = encode_request(&circle_id, requested_at);
        tracing::info!("🔑 request code {} for circle {}", code, circle_id);
        writeln!(
            self.output,
            "Request Code for Cercle {} at {} --- {}",
            circle_id, requested_at, code
        )?;

        self.report(&RequestReport {
            circle_id,
            requested_at,
            request_code: code,
        })?;
        Ok(Flow::Continue)
    }

    fn do_accept(&mut self) -> Result<Flow> {
        writeln!(
            self.output,
            "Obtaining an AcceptationCode for a specified RequestCode"
        )?;
        let Some(code) = self.prompt("Please provide a RequestCode: ")? else {
            return Ok(Flow::Closed);
        };

        let request = decode_request(&code)?;
        writeln!(
            self.output,
            "RequestCode OK Cercle {} Date {} Pad {}",
            request.circle_id, request.date, request.offset
        )?;

        let acceptance_code = compute_acceptance(&code)?;
        tracing::info!("✅ acceptance code {} for {}", acceptance_code, code);
        writeln!(
            self.output,
            "Acceptation Code for {} --- {}",
            code, acceptance_code
        )?;

        self.report(&AcceptanceReport {
            request,
            request_code: code,
            acceptance_code,
        })?;
        Ok(Flow::Continue)
    }

    fn do_valid(&mut self) -> Result<Flow> {
        writeln!(
            self.output,
            "Verifying that an AcceptationCode is valid for a RequestCode"
        )?;
        let Some(request_code) = self.prompt("Please provide a RequestCode: ")? else {
            return Ok(Flow::Closed);
        };
        let Some(acceptance_code) = self.prompt("Please provide an AcceptationCode: ")? else {
            return Ok(Flow::Closed);
        };

        let valid = check_acceptance(&request_code, &acceptance_code);
        if valid {
            writeln!(
                self.output,
                "SUCCESS. RequestCode and AcceptationCode matches."
            )?;
        } else {
            tracing::warn!("❌ {} does not answer {}", acceptance_code, request_code);
            writeln!(
                self.output,
                "FAILURE. RequestCode and AcceptationCode do NOT match."
            )?;
        }

        self.report(&ValidationReport {
            request_code,
            acceptance_code,
            valid,
        })?;
        Ok(Flow::Continue)
    }

    /// Shows the numbered menu and returns the chosen action.
    fn do_help(&mut self) -> Result<Option<Action>> {
        writeln!(self.output, "Please select an action:")?;
        for (index, action) in Action::ALL.iter().enumerate() {
            writeln!(self.output, "{}.   {}", index + 1, action.label())?;
        }

        let Some(choice) =
            self.prompt(&format!("What do you want to do? [1-{}] ", Action::ALL.len()))?
        else {
            return Ok(None);
        };

        choice
            .parse::<usize>()
            .ok()
            .and_then(Action::from_menu_number)
            .map(Some)
            .ok_or_else(|| HamedError::InputError {
                field: "action".to_string(),
                value: choice.clone(),
                reason: "You must enter the action's number".to_string(),
            })
    }

    /// Prints `message` and reads one line; `None` once input is exhausted.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn report<T: Serialize>(&mut self, report: &T) -> Result<()> {
        if self.format == OutputFormat::Json {
            writeln!(self.output, "{}", serde_json::to_string(report)?)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::TomlConfig;
    use crate::domain::ports::FixedClock;
    use chrono::NaiveDate;

    fn run_script(first: Action, script: &str) -> (Result<()>, String) {
        let clock = FixedClock(
            NaiveDate::from_ymd_opt(2017, 2, 1)
                .unwrap()
                .and_hms_opt(15, 22, 0)
                .unwrap(),
        );
        let mut output = Vec::new();
        let result = Session::new(script.as_bytes(), &mut output, clock, &TomlConfig::default())
            .run(first);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_title_banner() {
        let (result, output) = run_script(Action::Exit, "");
        assert!(result.is_ok());
        assert!(output.starts_with(TITLE));
        assert!(output.contains(&"-".repeat(TITLE.len())));
    }

    #[test]
    fn test_request_with_blank_date_uses_clock() {
        let (result, output) = run_script(Action::Request, "33\n\n5\n");
        assert!(result.is_ok());
        assert!(output.contains("--- PJJHNGIGH"));
        assert!(output.contains("Please select an action:"));
    }

    #[test]
    fn test_help_reads_menu_number() {
        let (result, output) = run_script(Action::Help, "2\nPJJHNGIGH\n5\n");
        assert!(result.is_ok());
        assert!(output.contains("RequestCode OK Cercle 33 Date 2017-02-01 Pad 15"));
        assert!(output.contains("--- GJIJJ"));
    }

    #[test]
    fn test_help_rejects_bad_number() {
        let (result, _) = run_script(Action::Help, "9\n");
        assert!(matches!(result, Err(HamedError::InputError { .. })));

        let (result, _) = run_script(Action::Help, "accept\n");
        assert!(matches!(result, Err(HamedError::InputError { .. })));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (result, _) = run_script(Action::Valid, "PJJHNGIGH\n");
        assert!(result.is_ok());
    }
}
