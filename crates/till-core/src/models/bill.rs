//! Patient bill models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::store::Record;

/// Raw bill fields as collected from the front desk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BillInput {
    /// Bill identifier
    pub bill_id: String,
    /// Patient name
    pub patient_name: String,
    /// Whether the patient has insurance
    pub insured: bool,
    /// Doctor consultation charge
    pub consultation_fee: Decimal,
    /// Lab test charges
    pub lab_charges: Decimal,
    /// Medicine charges
    pub medicine_charges: Decimal,
}

impl BillInput {
    /// Create an input with no lab or medicine charges.
    pub fn new(bill_id: impl Into<String>, patient_name: impl Into<String>, consultation_fee: Decimal) -> Self {
        Self {
            bill_id: bill_id.into(),
            patient_name: patient_name.into(),
            insured: false,
            consultation_fee,
            lab_charges: Decimal::ZERO,
            medicine_charges: Decimal::ZERO,
        }
    }
}

/// Amounts derived from the itemized charges.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct BillTotals {
    /// Sum of all charges before discount
    pub gross_amount: Decimal,
    /// Insurance discount (zero when uninsured)
    pub discount_amount: Decimal,
    /// Amount due after discount
    pub final_payable: Decimal,
}

/// A validated patient bill.
///
/// Fields are read-only: a bill only comes out of
/// [`BillCalculator::build`](crate::calc::BillCalculator::build), so the totals
/// always match the charges they were computed from.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BillRecord {
    bill_id: String,
    patient_name: String,
    insured: bool,
    consultation_fee: Decimal,
    lab_charges: Decimal,
    medicine_charges: Decimal,
    #[serde(flatten)]
    totals: BillTotals,
}

impl BillRecord {
    pub(crate) fn new(bill_id: String, patient_name: String, input: &BillInput, totals: BillTotals) -> Self {
        Self {
            bill_id,
            patient_name,
            insured: input.insured,
            consultation_fee: input.consultation_fee,
            lab_charges: input.lab_charges,
            medicine_charges: input.medicine_charges,
            totals,
        }
    }

    pub fn bill_id(&self) -> &str {
        &self.bill_id
    }

    pub fn patient_name(&self) -> &str {
        &self.patient_name
    }

    pub fn insured(&self) -> bool {
        self.insured
    }

    pub fn consultation_fee(&self) -> Decimal {
        self.consultation_fee
    }

    pub fn lab_charges(&self) -> Decimal {
        self.lab_charges
    }

    pub fn medicine_charges(&self) -> Decimal {
        self.medicine_charges
    }

    pub fn totals(&self) -> &BillTotals {
        &self.totals
    }

    pub fn gross_amount(&self) -> Decimal {
        self.totals.gross_amount
    }

    pub fn discount_amount(&self) -> Decimal {
        self.totals.discount_amount
    }

    pub fn final_payable(&self) -> Decimal {
        self.totals.final_payable
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Record for BillRecord {
    const KIND: &'static str = "bill";

    fn key(&self) -> &str {
        &self.bill_id
    }
}
