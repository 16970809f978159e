//! Labelled views of bills and sales for display.

mod billing;
mod sales;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Decimal places shown for money and percentages.
pub const DISPLAY_PLACES: u32 = 2;

/// A titled list of label/value lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Receipt {
    /// Heading line
    pub title: String,
    /// Label/value pairs in display order
    pub lines: Vec<ReceiptLine>,
}

/// Single line of a receipt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReceiptLine {
    pub label: String,
    pub value: String,
}

impl Receipt {
    /// Start an empty receipt.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    /// Append a line.
    pub fn line(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.lines.push(ReceiptLine {
            label: label.into(),
            value: value.into(),
        });
        self
    }

    /// Append a line with a two-decimal amount.
    pub fn amount(self, label: impl Into<String>, value: Decimal) -> Self {
        self.line(label, format_amount(value))
    }

    /// Look up a value by label.
    pub fn value(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.label == label)
            .map(|line| line.value.as_str())
    }

    /// Render as `Label: value` lines under the title.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        text.push_str(&self.title);
        text.push('\n');
        for line in &self.lines {
            text.push_str(&format!("{}: {}\n", line.label, line.value));
        }
        text
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Format an amount with two decimals, rounding halves away from zero.
pub fn format_amount(value: Decimal) -> String {
    let mut rounded =
        value.round_dp_with_strategy(DISPLAY_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(DISPLAY_PLACES);
    rounded.to_string()
}
