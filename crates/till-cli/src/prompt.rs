//! Line-oriented console input and output.

use std::io::{BufRead, Write};
use std::str::FromStr;

use rust_decimal::Decimal;
use till_core::calc::{require_non_negative, require_positive, require_text, ValidationError, ValidationResult};
use till_core::Receipt;

/// How receipts are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Render {
    #[default]
    Text,
    Json,
}

/// Constraint an amount field must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Strictly greater than zero
    Positive,
    /// Zero or more
    NonNegative,
}

impl Bound {
    /// Check a parsed amount. Text that did not parse fails with the same
    /// message as an out-of-bound value.
    pub fn check(self, field: &'static str, value: Option<Decimal>) -> ValidationResult<Decimal> {
        match (self, value) {
            (Bound::Positive, Some(value)) => require_positive(field, value),
            (Bound::Positive, None) => Err(ValidationError::NotPositive(field)),
            (Bound::NonNegative, Some(value)) => require_non_negative(field, value),
            (Bound::NonNegative, None) => Err(ValidationError::Negative(field)),
        }
    }
}

/// Parse a decimal amount, ignoring surrounding whitespace.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim()).ok()
}

/// Reads answers from `input` and writes prompts and messages to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    render: Render,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, render: Render) -> Self {
        Self {
            input,
            output,
            render,
        }
    }

    /// Consume the prompter, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write one line.
    pub fn say(&mut self, line: impl AsRef<str>) -> anyhow::Result<()> {
        writeln!(self.output, "{}", line.as_ref())?;
        Ok(())
    }

    /// Show a prompt and read the answer. `None` once input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Ask for a text field. Prints the rejection and returns `None` if the
    /// answer is blank.
    pub fn ask_text(&mut self, prompt: &str, field: &'static str) -> anyhow::Result<Option<String>> {
        let Some(raw) = self.ask(prompt)? else {
            return Ok(None);
        };
        self.accept(require_text(field, &raw))
    }

    /// Ask for an amount that must satisfy `bound`.
    pub fn ask_amount(&mut self, prompt: &str, field: &'static str, bound: Bound) -> anyhow::Result<Option<Decimal>> {
        let Some(raw) = self.ask(prompt)? else {
            return Ok(None);
        };
        self.accept(bound.check(field, parse_amount(&raw)))
    }

    /// Ask for a whole number greater than zero.
    pub fn ask_count(&mut self, prompt: &str, field: &'static str) -> anyhow::Result<Option<u32>> {
        let Some(raw) = self.ask(prompt)? else {
            return Ok(None);
        };
        let count = raw
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|count| *count > 0)
            .ok_or(ValidationError::NotPositive(field));
        self.accept(count)
    }

    /// Ask a yes/no question; only `Y` (any case) counts as yes.
    pub fn ask_yes(&mut self, prompt: &str) -> anyhow::Result<Option<bool>> {
        Ok(self
            .ask(prompt)?
            .map(|answer| answer.trim().eq_ignore_ascii_case("y")))
    }

    /// Write a receipt in the configured format.
    pub fn show(&mut self, receipt: &Receipt) -> anyhow::Result<()> {
        match self.render {
            Render::Text => {
                self.say("")?;
                write!(self.output, "{}", receipt.to_text())?;
            }
            Render::Json => self.say(receipt.to_json()?)?,
        }
        Ok(())
    }

    fn accept<T>(&mut self, checked: ValidationResult<T>) -> anyhow::Result<Option<T>> {
        match checked {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::debug!(error = %e, "field rejected");
                self.say(e.to_string())?;
                Ok(None)
            }
        }
    }
}
