use crate::utils::error::Result;
use chrono::{Local, NaiveDate};
use std::io::{BufRead, Write};
use std::str::FromStr;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const NOT_A_NUMBER: &str = "Please enter a whole number.";

/// Line-oriented prompts over any reader/writer pair.
///
/// Every read returns `Ok(None)` once the input is exhausted.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Repeats the prompt until the answer parses as an integer.
    pub fn prompt_number<T: FromStr>(&mut self, text: &str) -> Result<Option<T>> {
        loop {
            let Some(line) = self.prompt(text)? else {
                return Ok(None);
            };
            match line.trim().parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => {
                    tracing::debug!("Rejected non-numeric input: {:?}", line);
                    self.say(NOT_A_NUMBER)?;
                }
            }
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// Today's date, logged as a substitute for an unparseable one.
fn fallback_date(raw: &str) -> NaiveDate {
    tracing::warn!("Error parsing date {:?}. Using current date.", raw);
    Local::now().date_naive()
}

pub fn parse_date_or_today(raw: &str) -> NaiveDate {
    parse_date(raw).unwrap_or_else(|| fallback_date(raw))
}
