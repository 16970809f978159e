//! Patient bill calculation.

use rust_decimal::Decimal;

use super::fields::{BILL_ID, CONSULTATION_FEE, GROSS_AMOUNT, LAB_CHARGES, MEDICINE_CHARGES, PATIENT_NAME};
use super::{require_non_negative, require_positive, require_text, ValidationError, ValidationResult};
use crate::models::{BillInput, BillRecord, BillTotals};

/// Flat discount applied to insured patients (10%).
pub const DEFAULT_INSURED_DISCOUNT_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Discount rules for bills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillingPolicy {
    insured_discount_rate: Decimal,
}

impl BillingPolicy {
    /// Create a policy. The rate must lie in `[0, 1]` so a discount can never
    /// exceed the gross amount.
    pub fn new(insured_discount_rate: Decimal) -> ValidationResult<Self> {
        if insured_discount_rate < Decimal::ZERO || insured_discount_rate > Decimal::ONE {
            return Err(ValidationError::InvalidRate(insured_discount_rate));
        }
        Ok(Self {
            insured_discount_rate,
        })
    }

    pub fn insured_discount_rate(&self) -> Decimal {
        self.insured_discount_rate
    }
}

impl Default for BillingPolicy {
    fn default() -> Self {
        Self {
            insured_discount_rate: DEFAULT_INSURED_DISCOUNT_RATE,
        }
    }
}

/// Computes bill totals from itemized charges.
#[derive(Debug, Clone, Copy, Default)]
pub struct BillCalculator {
    policy: BillingPolicy,
}

impl BillCalculator {
    /// Create a calculator with the given policy.
    pub fn new(policy: BillingPolicy) -> Self {
        Self { policy }
    }

    /// Compute gross amount, discount and final payable.
    pub fn compute(
        &self,
        consultation_fee: Decimal,
        lab_charges: Decimal,
        medicine_charges: Decimal,
        insured: bool,
    ) -> ValidationResult<BillTotals> {
        require_positive(CONSULTATION_FEE, consultation_fee)?;
        require_non_negative(LAB_CHARGES, lab_charges)?;
        require_non_negative(MEDICINE_CHARGES, medicine_charges)?;

        let gross_amount = consultation_fee
            .checked_add(lab_charges)
            .and_then(|sum| sum.checked_add(medicine_charges))
            .ok_or(ValidationError::OutOfRange(GROSS_AMOUNT))?;

        let discount_amount = if insured {
            gross_amount
                .checked_mul(self.policy.insured_discount_rate)
                .ok_or(ValidationError::OutOfRange(GROSS_AMOUNT))?
        } else {
            Decimal::ZERO
        };

        Ok(BillTotals {
            gross_amount,
            discount_amount,
            final_payable: gross_amount - discount_amount,
        })
    }

    /// Validate every field and build a bill.
    ///
    /// Fields are checked in entry order, so the first bad field is the one
    /// reported.
    pub fn build(&self, input: BillInput) -> ValidationResult<BillRecord> {
        let bill_id = require_text(BILL_ID, &input.bill_id)?;
        let patient_name = require_text(PATIENT_NAME, &input.patient_name)?;
        let totals = self.compute(
            input.consultation_fee,
            input.lab_charges,
            input.medicine_charges,
            input.insured,
        )?;

        Ok(BillRecord::new(bill_id, patient_name, &input, totals))
    }
}
