//! Sale transaction models.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calc::{SaleCalculator, ValidationResult};
use crate::store::Record;

/// Raw sale fields as collected at the counter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaleInput {
    /// Invoice number
    pub invoice_no: String,
    /// Customer name
    pub customer_name: String,
    /// Item sold
    pub item_name: String,
    /// Units sold
    pub quantity: u32,
    /// Total cost price
    pub purchase_amount: Decimal,
    /// Total selling price
    pub selling_amount: Decimal,
}

/// Profit/loss classification of a sale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SaleStatus {
    /// Selling amount above purchase amount
    #[serde(rename = "PROFIT")]
    Profit,
    /// Selling amount below purchase amount
    #[serde(rename = "LOSS")]
    Loss,
    /// Selling amount equals purchase amount
    #[serde(rename = "BREAK-EVEN")]
    BreakEven,
}

impl SaleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleStatus::Profit => "PROFIT",
            SaleStatus::Loss => "LOSS",
            SaleStatus::BreakEven => "BREAK-EVEN",
        }
    }
}

impl fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of comparing selling and purchase amounts.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SaleOutcome {
    pub status: SaleStatus,
    /// Absolute difference between selling and purchase amounts
    pub result_amount: Decimal,
    /// `result_amount` as a percentage of the purchase amount
    pub result_percent: Decimal,
}

/// A validated sale transaction.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SaleRecord {
    invoice_no: String,
    customer_name: String,
    item_name: String,
    quantity: u32,
    purchase_amount: Decimal,
    selling_amount: Decimal,
    #[serde(flatten)]
    outcome: SaleOutcome,
}

impl SaleRecord {
    pub(crate) fn new(
        invoice_no: String,
        customer_name: String,
        item_name: String,
        input: &SaleInput,
        outcome: SaleOutcome,
    ) -> Self {
        Self {
            invoice_no,
            customer_name,
            item_name,
            quantity: input.quantity,
            purchase_amount: input.purchase_amount,
            selling_amount: input.selling_amount,
            outcome,
        }
    }

    pub fn invoice_no(&self) -> &str {
        &self.invoice_no
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn purchase_amount(&self) -> Decimal {
        self.purchase_amount
    }

    pub fn selling_amount(&self) -> Decimal {
        self.selling_amount
    }

    pub fn outcome(&self) -> &SaleOutcome {
        &self.outcome
    }

    pub fn status(&self) -> SaleStatus {
        self.outcome.status
    }

    pub fn result_amount(&self) -> Decimal {
        self.outcome.result_amount
    }

    pub fn result_percent(&self) -> Decimal {
        self.outcome.result_percent
    }

    /// Recompute the outcome from the stored purchase and selling amounts.
    pub fn recalculate(&mut self, calculator: &SaleCalculator) -> ValidationResult<&SaleOutcome> {
        self.outcome = calculator.compute(self.purchase_amount, self.selling_amount)?;
        Ok(&self.outcome)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Record for SaleRecord {
    const KIND: &'static str = "transaction";

    fn key(&self) -> &str {
        &self.invoice_no
    }
}
