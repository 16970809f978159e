//! Calculators for bills and sales.
//!
//! Both calculators are pure: they validate their inputs, derive amounts with
//! exact decimal arithmetic, and return the result. Storing it is up to the
//! caller.

mod bill;
mod sale;

pub use bill::*;
pub use sale::*;

use rust_decimal::Decimal;
use thiserror::Error;

/// Input validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{0} cannot be empty.")]
    Empty(&'static str),

    #[error("{0} must be greater than 0.")]
    NotPositive(&'static str),

    #[error("{0} cannot be negative.")]
    Negative(&'static str),

    #[error("{0} is out of range.")]
    OutOfRange(&'static str),

    #[error("Discount rate {0} must be between 0 and 1.")]
    InvalidRate(Decimal),
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Field names used in validation messages.
pub mod fields {
    pub const BILL_ID: &str = "Bill Id";
    pub const PATIENT_NAME: &str = "Patient name";
    pub const CONSULTATION_FEE: &str = "Consultation Fee";
    pub const LAB_CHARGES: &str = "Lab Charges";
    pub const MEDICINE_CHARGES: &str = "Medicine Charges";
    pub const GROSS_AMOUNT: &str = "Gross Amount";

    pub const INVOICE_NO: &str = "Invoice number";
    pub const CUSTOMER_NAME: &str = "Customer name";
    pub const ITEM_NAME: &str = "Item name";
    pub const QUANTITY: &str = "Quantity";
    pub const PURCHASE_AMOUNT: &str = "Purchase amount";
    pub const SELLING_AMOUNT: &str = "Selling amount";
    pub const PROFIT_MARGIN: &str = "Profit margin";
}

/// Trim a text field, rejecting it if nothing is left.
pub fn require_text(field: &'static str, value: &str) -> ValidationResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty(field));
    }
    Ok(trimmed.to_string())
}

pub fn require_positive(field: &'static str, value: Decimal) -> ValidationResult<Decimal> {
    if value <= Decimal::ZERO {
        return Err(ValidationError::NotPositive(field));
    }
    Ok(value)
}

pub fn require_non_negative(field: &'static str, value: Decimal) -> ValidationResult<Decimal> {
    if value < Decimal::ZERO {
        return Err(ValidationError::Negative(field));
    }
    Ok(value)
}
