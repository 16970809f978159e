//! Bill receipts.

use super::Receipt;
use crate::models::{BillRecord, BillTotals};

impl Receipt {
    /// Totals only, as shown right after a bill is created.
    pub fn for_bill_totals(title: impl Into<String>, totals: &BillTotals) -> Self {
        Receipt::new(title)
            .amount("Gross Amount", totals.gross_amount)
            .amount("Discount Amount", totals.discount_amount)
            .amount("Final Payable", totals.final_payable)
    }

    /// Every field of a bill.
    pub fn for_bill(title: impl Into<String>, bill: &BillRecord) -> Self {
        Receipt::new(title)
            .line("BillId", bill.bill_id())
            .line("Patient", bill.patient_name())
            .line("Insured", if bill.insured() { "Yes" } else { "No" })
            .amount("Consultation Fee", bill.consultation_fee())
            .amount("Lab Charges", bill.lab_charges())
            .amount("Medicine Charges", bill.medicine_charges())
            .amount("Gross Amount", bill.gross_amount())
            .amount("Discount Amount", bill.discount_amount())
            .amount("Final Payable", bill.final_payable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::BillCalculator;
    use crate::models::BillInput;
    use rust_decimal_macros::dec;

    fn make_bill() -> BillRecord {
        BillCalculator::default()
            .build(BillInput {
                bill_id: "B-1".into(),
                patient_name: "Asha".into(),
                insured: true,
                consultation_fee: dec!(500),
                lab_charges: dec!(200),
                medicine_charges: dec!(100),
            })
            .unwrap()
    }

    #[test]
    fn test_totals_receipt() {
        let bill = make_bill();
        let receipt = Receipt::for_bill_totals("Bill created successfully.", bill.totals());

        assert_eq!(receipt.lines.len(), 3);
        assert_eq!(receipt.value("Gross Amount"), Some("800.00"));
        assert_eq!(receipt.value("Discount Amount"), Some("80.00"));
        assert_eq!(receipt.value("Final Payable"), Some("720.00"));
    }

    #[test]
    fn test_full_receipt() {
        let receipt = Receipt::for_bill("Last Bill", &make_bill());
        let text = receipt.to_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 10); // Title + 9 fields
        assert_eq!(lines[0], "Last Bill");
        assert_eq!(lines[1], "BillId: B-1");
        assert_eq!(lines[3], "Insured: Yes");
        assert_eq!(lines[4], "Consultation Fee: 500.00");
        assert_eq!(lines[9], "Final Payable: 720.00");
    }
}
