//! Sale profit/loss calculation.

use std::cmp::Ordering;

use rust_decimal::Decimal;

use super::fields::{
    CUSTOMER_NAME, INVOICE_NO, ITEM_NAME, PROFIT_MARGIN, PURCHASE_AMOUNT, QUANTITY, SELLING_AMOUNT,
};
use super::{require_non_negative, require_positive, require_text, ValidationError, ValidationResult};
use crate::models::{SaleInput, SaleOutcome, SaleRecord, SaleStatus};

/// Classifies a sale as profit, loss or break-even.
///
/// The percentage is always relative to the purchase amount.
#[derive(Debug, Clone, Copy, Default)]
pub struct SaleCalculator;

impl SaleCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Compare selling against purchase amount.
    pub fn compute(&self, purchase_amount: Decimal, selling_amount: Decimal) -> ValidationResult<SaleOutcome> {
        require_positive(PURCHASE_AMOUNT, purchase_amount)?;
        require_non_negative(SELLING_AMOUNT, selling_amount)?;

        let (status, result_amount) = match selling_amount.cmp(&purchase_amount) {
            Ordering::Greater => (SaleStatus::Profit, selling_amount - purchase_amount),
            Ordering::Less => (SaleStatus::Loss, purchase_amount - selling_amount),
            Ordering::Equal => (SaleStatus::BreakEven, Decimal::ZERO),
        };

        // purchase_amount > 0, so the division is defined
        let result_percent = result_amount
            .checked_div(purchase_amount)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .ok_or(ValidationError::OutOfRange(PROFIT_MARGIN))?;

        Ok(SaleOutcome {
            status,
            result_amount,
            result_percent,
        })
    }

    /// Validate every field and build a sale record.
    pub fn build(&self, input: SaleInput) -> ValidationResult<SaleRecord> {
        let invoice_no = require_text(INVOICE_NO, &input.invoice_no)?;
        let customer_name = require_text(CUSTOMER_NAME, &input.customer_name)?;
        let item_name = require_text(ITEM_NAME, &input.item_name)?;
        if input.quantity == 0 {
            return Err(ValidationError::NotPositive(QUANTITY));
        }
        let outcome = self.compute(input.purchase_amount, input.selling_amount)?;

        Ok(SaleRecord::new(invoice_no, customer_name, item_name, &input, outcome))
    }
}
