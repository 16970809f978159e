//! Record lifecycle integration tests.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use till_core::desk::{BillingDesk, SalesDesk};
use till_core::models::{BillInput, SaleInput, SaleStatus};
use till_core::store::{SingleRecordStore, StoreError, StoreState};
use till_core::{BillCalculator, BillRecord, Receipt, TillError, ValidationError};

fn make_bill_input(id: &str, fee: Decimal) -> BillInput {
    BillInput {
        bill_id: id.to_string(),
        patient_name: format!("Patient for {}", id),
        insured: true,
        consultation_fee: fee,
        lab_charges: dec!(200),
        medicine_charges: dec!(100),
    }
}

fn make_sale_input(invoice: &str, purchase: Decimal, selling: Decimal) -> SaleInput {
    SaleInput {
        invoice_no: invoice.to_string(),
        customer_name: "Walk-in".to_string(),
        item_name: "Basmati rice".to_string(),
        quantity: 5,
        purchase_amount: purchase,
        selling_amount: selling,
    }
}

#[test]
fn test_fresh_store_has_nothing() {
    let store: SingleRecordStore<BillRecord> = SingleRecordStore::new();
    assert_eq!(store.get(), Err(StoreError::NotFound("bill")));
}

#[test]
fn test_store_round_trip() {
    let bill = BillCalculator::default()
        .build(make_bill_input("B-1", dec!(500)))
        .unwrap();

    let mut store = SingleRecordStore::new();
    store.put(bill.clone());
    assert_eq!(store.get().unwrap(), &bill);

    store.clear();
    assert_eq!(store.state(), StoreState::Empty);
    assert!(store.get().is_err());
}

#[test]
fn test_zero_fee_stores_nothing() {
    let mut desk = BillingDesk::default();

    let err = desk.create(make_bill_input("B-1", Decimal::ZERO)).unwrap_err();
    assert_eq!(
        err,
        TillError::Validation(ValidationError::NotPositive("Consultation Fee"))
    );
    assert_eq!(desk.state(), StoreState::Empty);
    assert!(desk.last().unwrap_err().is_not_found());
}

#[test]
fn test_billing_session() {
    let mut desk = BillingDesk::default();

    let bill = desk.create(make_bill_input("B-1", dec!(500))).unwrap();
    let receipt = Receipt::for_bill_totals("Bill created successfully.", bill.totals());
    assert_eq!(receipt.value("Final Payable"), Some("720.00"));

    desk.create(make_bill_input("B-2", dec!(100))).unwrap();
    let last = desk.last().unwrap();
    assert_eq!(last.bill_id(), "B-2");
    assert_eq!(last.gross_amount(), dec!(400));

    desk.clear();
    desk.clear();
    assert!(desk.last().is_err());
}

#[test]
fn test_sales_session() {
    let mut desk = SalesDesk::new();
    assert!(desk.recalculate().unwrap_err().is_not_found());

    desk.create(make_sale_input("QM-1", dec!(1000), dec!(1200)))
        .unwrap();
    let sale = desk.recalculate().unwrap();
    assert_eq!(sale.status(), SaleStatus::Profit);
    assert_eq!(sale.result_amount(), dec!(200));
    assert_eq!(sale.result_percent(), dec!(20));

    let err = desk
        .create(make_sale_input("QM-2", Decimal::ZERO, dec!(10)))
        .unwrap_err();
    assert_eq!(err.to_string(), "Purchase amount must be greater than 0.");
    assert_eq!(desk.last().unwrap().invoice_no(), "QM-1");
}

proptest! {
    #[test]
    fn store_returns_what_was_put(cents in 1i64..100_000_000, insured in any::<bool>()) {
        let mut input = make_bill_input("B-prop", Decimal::new(cents, 2));
        input.insured = insured;
        let bill = BillCalculator::default().build(input).unwrap();

        let mut store = SingleRecordStore::new();
        store.put(bill.clone());
        prop_assert_eq!(store.get().unwrap(), &bill);
    }
}
