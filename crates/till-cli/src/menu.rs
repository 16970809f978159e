//! Interactive menus for the two desks.
//!
//! Each menu loops until the exit option is chosen or input runs out.
//! Validation and "nothing to show" errors are printed and the loop carries on.

use std::io::{BufRead, Write};

use till_core::calc::fields;
use till_core::desk::{BillingDesk, SalesDesk};
use till_core::models::{BillInput, SaleInput};
use till_core::Receipt;

use crate::prompt::{Bound, Prompter};

const GOODBYE: &str = "Thank you. Application closed normally.";
const BILL_RULE: &str = "--------------------------------";
const SALE_RULE: &str = "--------------------------------------------";

/// A menu choice as typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Option(i64),
    NotANumber,
}

fn read_choice<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> anyhow::Result<Option<Choice>> {
    Ok(prompter
        .ask("Enter your option: ")?
        .map(|raw| match raw.trim().parse::<i64>() {
            Ok(n) => Choice::Option(n),
            Err(_) => Choice::NotANumber,
        }))
}

// =========================================================================
// Clinic billing
// =========================================================================

/// Run the clinic billing menu.
pub fn run_billing<R: BufRead, W: Write>(desk: &mut BillingDesk, prompter: &mut Prompter<R, W>) -> anyhow::Result<()> {
    loop {
        prompter.say("")?;
        prompter.say("MediSure Clinic Billing")?;
        prompter.say("1. Create New Bill (Enter Patient Details)")?;
        prompter.say("2. View Last Bill")?;
        prompter.say("3. Clear Last Bill")?;
        prompter.say("4. Exit")?;

        let Some(choice) = read_choice(prompter)? else {
            tracing::debug!("input closed, leaving billing menu");
            return Ok(());
        };

        match choice {
            Choice::NotANumber => prompter.say("Invalid input. Please enter a number between 1 and 4.")?,
            Choice::Option(1) => create_bill(desk, prompter)?,
            Choice::Option(2) => view_bill(desk, prompter)?,
            Choice::Option(3) => {
                desk.clear();
                prompter.say("Last bill cleared.")?;
            }
            Choice::Option(4) => {
                prompter.say("")?;
                prompter.say(GOODBYE)?;
                return Ok(());
            }
            Choice::Option(_) => prompter.say("Invalid choice. Please select from 1 to 4.")?,
        }
    }
}

fn create_bill<R: BufRead, W: Write>(desk: &mut BillingDesk, prompter: &mut Prompter<R, W>) -> anyhow::Result<()> {
    let Some(bill_id) = prompter.ask_text("Enter Bill Id: ", fields::BILL_ID)? else {
        return Ok(());
    };
    let Some(patient_name) = prompter.ask_text("Enter Patient Name: ", fields::PATIENT_NAME)? else {
        return Ok(());
    };
    let Some(insured) = prompter.ask_yes("Is the patient insured? (Y/N): ")? else {
        return Ok(());
    };
    let Some(consultation_fee) =
        prompter.ask_amount("Enter Consultation Fee: ", fields::CONSULTATION_FEE, Bound::Positive)?
    else {
        return Ok(());
    };
    let Some(lab_charges) = prompter.ask_amount("Enter Lab Charges: ", fields::LAB_CHARGES, Bound::NonNegative)? else {
        return Ok(());
    };
    let Some(medicine_charges) =
        prompter.ask_amount("Enter Medicine Charges: ", fields::MEDICINE_CHARGES, Bound::NonNegative)?
    else {
        return Ok(());
    };

    let input = BillInput {
        bill_id,
        patient_name,
        insured,
        consultation_fee,
        lab_charges,
        medicine_charges,
    };

    match desk.create(input) {
        Ok(bill) => {
            tracing::info!(bill_id = bill.bill_id(), final_payable = %bill.final_payable(), "bill created");
            let receipt = Receipt::for_bill_totals("Bill created successfully.", bill.totals());
            prompter.show(&receipt)
        }
        Err(e) => prompter.say(e.to_string()),
    }
}

fn view_bill<R: BufRead, W: Write>(desk: &BillingDesk, prompter: &mut Prompter<R, W>) -> anyhow::Result<()> {
    match desk.last() {
        Ok(bill) => {
            prompter.show(&Receipt::for_bill("Last Bill", bill))?;
            prompter.say(BILL_RULE)
        }
        Err(e) => prompter.say(e.to_string()),
    }
}

// =========================================================================
// Retail sales
// =========================================================================

/// Run the retail sales menu.
pub fn run_sales<R: BufRead, W: Write>(desk: &mut SalesDesk, prompter: &mut Prompter<R, W>) -> anyhow::Result<()> {
    loop {
        prompter.say("")?;
        prompter.say("QuickMart Traders")?;
        prompter.say("1. Create New Transaction (Enter Purchase & Selling Details)")?;
        prompter.say("2. View Last Transaction")?;
        prompter.say("3. Calculate Profit/Loss (Recompute & Print)")?;
        prompter.say("4. Clear Last Transaction")?;
        prompter.say("5. Exit")?;

        let Some(choice) = read_choice(prompter)? else {
            tracing::debug!("input closed, leaving sales menu");
            return Ok(());
        };

        match choice {
            Choice::NotANumber => prompter.say("Invalid input. Please enter a number between 1 and 5.")?,
            Choice::Option(1) => create_sale(desk, prompter)?,
            Choice::Option(2) => view_sale(desk, prompter)?,
            Choice::Option(3) => recalculate_sale(desk, prompter)?,
            Choice::Option(4) => {
                desk.clear();
                prompter.say("Last transaction cleared.")?;
            }
            Choice::Option(5) => {
                prompter.say("")?;
                prompter.say(GOODBYE)?;
                return Ok(());
            }
            Choice::Option(_) => prompter.say("Invalid option. Please select 1 to 5.")?,
        }
    }
}

fn create_sale<R: BufRead, W: Write>(desk: &mut SalesDesk, prompter: &mut Prompter<R, W>) -> anyhow::Result<()> {
    let Some(invoice_no) = prompter.ask_text("Enter Invoice No: ", fields::INVOICE_NO)? else {
        return Ok(());
    };
    let Some(customer_name) = prompter.ask_text("Enter Customer Name: ", fields::CUSTOMER_NAME)? else {
        return Ok(());
    };
    let Some(item_name) = prompter.ask_text("Enter Item Name: ", fields::ITEM_NAME)? else {
        return Ok(());
    };
    let Some(quantity) = prompter.ask_count("Enter Quantity: ", fields::QUANTITY)? else {
        return Ok(());
    };
    let Some(purchase_amount) =
        prompter.ask_amount("Enter Purchase Amount (total): ", fields::PURCHASE_AMOUNT, Bound::Positive)?
    else {
        return Ok(());
    };
    let Some(selling_amount) =
        prompter.ask_amount("Enter Selling Amount (total): ", fields::SELLING_AMOUNT, Bound::NonNegative)?
    else {
        return Ok(());
    };

    let input = SaleInput {
        invoice_no,
        customer_name,
        item_name,
        quantity,
        purchase_amount,
        selling_amount,
    };

    match desk.create(input) {
        Ok(sale) => {
            tracing::info!(invoice = sale.invoice_no(), status = %sale.status(), "transaction saved");
            let receipt = Receipt::for_sale_outcome("Transaction saved successfully.", sale.outcome());
            prompter.show(&receipt)
        }
        Err(e) => prompter.say(e.to_string()),
    }
}

fn view_sale<R: BufRead, W: Write>(desk: &SalesDesk, prompter: &mut Prompter<R, W>) -> anyhow::Result<()> {
    match desk.last() {
        Ok(sale) => {
            prompter.show(&Receipt::for_sale("Last Transaction", sale))?;
            prompter.say(SALE_RULE)
        }
        Err(e) => prompter.say(e.to_string()),
    }
}

fn recalculate_sale<R: BufRead, W: Write>(desk: &mut SalesDesk, prompter: &mut Prompter<R, W>) -> anyhow::Result<()> {
    match desk.recalculate() {
        Ok(sale) => {
            let receipt = Receipt::for_sale_outcome("Recalculated Successfully!", sale.outcome());
            prompter.show(&receipt)
        }
        Err(e) => prompter.say(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::Render;
    use std::io::Cursor;
    use till_core::StoreState;

    fn run_billing_script(desk: &mut BillingDesk, script: &str) -> String {
        let mut prompter = Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new(), Render::Text);
        run_billing(desk, &mut prompter).unwrap();
        String::from_utf8(prompter.into_output()).unwrap()
    }

    fn run_sales_script(desk: &mut SalesDesk, script: &str) -> String {
        let mut prompter = Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new(), Render::Text);
        run_sales(desk, &mut prompter).unwrap();
        String::from_utf8(prompter.into_output()).unwrap()
    }

    #[test]
    fn test_billing_create_and_view() {
        let mut desk = BillingDesk::default();
        let out = run_billing_script(&mut desk, "1\nB-1\nAsha\ny\n500\n200\n100\n2\n4\n");

        assert!(out.contains("Bill created successfully."));
        assert!(out.contains("Gross Amount: 800.00"));
        assert!(out.contains("Discount Amount: 80.00"));
        assert!(out.contains("Final Payable: 720.00"));
        assert!(out.contains("Last Bill\nBillId: B-1\nPatient: Asha\nInsured: Yes"));
        assert!(out.contains(GOODBYE));
        assert_eq!(desk.last().unwrap().bill_id(), "B-1");
    }

    #[test]
    fn test_billing_rejects_zero_fee_early() {
        let mut desk = BillingDesk::default();
        let out = run_billing_script(&mut desk, "1\nB-1\nAsha\nn\n0\n4\n");

        assert!(out.contains("Consultation Fee must be greater than 0."));
        assert!(!out.contains("Enter Lab Charges"));
        assert_eq!(desk.state(), StoreState::Empty);
    }

    #[test]
    fn test_billing_empty_id() {
        let mut desk = BillingDesk::default();
        let out = run_billing_script(&mut desk, "1\n   \n4\n");

        assert!(out.contains("Bill Id cannot be empty."));
        assert!(!out.contains("Enter Patient Name"));
    }

    #[test]
    fn test_billing_view_and_clear() {
        let mut desk = BillingDesk::default();
        let out = run_billing_script(&mut desk, "2\n1\nB-1\nAsha\nN\n100\n0\n0\n3\n2\n4\n");

        assert_eq!(
            out.matches("No bill available. Please create a new bill first.").count(),
            2
        );
        assert!(out.contains("Last bill cleared."));
        assert_eq!(desk.state(), StoreState::Empty);
    }

    #[test]
    fn test_billing_bad_menu_input() {
        let mut desk = BillingDesk::default();
        let out = run_billing_script(&mut desk, "abc\n9\n4\n");

        assert!(out.contains("Invalid input. Please enter a number between 1 and 4."));
        assert!(out.contains("Invalid choice. Please select from 1 to 4."));
    }

    #[test]
    fn test_negative_choice_is_out_of_range() {
        let mut desk = BillingDesk::default();
        let out = run_billing_script(&mut desk, "-1\n4\n");
        assert!(out.contains("Invalid choice. Please select from 1 to 4."));
        assert!(!out.contains("Invalid input."));

        let mut desk = SalesDesk::default();
        let out = run_sales_script(&mut desk, "-3\n5\n");
        assert!(out.contains("Invalid option. Please select 1 to 5."));
        assert!(!out.contains("Invalid input."));
    }

    #[test]
    fn test_menu_ends_on_closed_input() {
        let mut desk = BillingDesk::default();
        let out = run_billing_script(&mut desk, "1\nB-1\n");
        assert!(!out.contains(GOODBYE));
        assert_eq!(desk.state(), StoreState::Empty);
    }

    #[test]
    fn test_sales_create_recalculate_view() {
        let mut desk = SalesDesk::new();
        let out = run_sales_script(&mut desk, "3\n1\nQM-1\nMeera\nKettle\n2\n1000\n1200\n3\n2\n5\n");

        assert!(out.contains("No transaction available. Please create a new transaction first."));
        assert!(out.contains("Transaction saved successfully.\nStatus: PROFIT"));
        assert!(out.contains("Recalculated Successfully!\nStatus: PROFIT\nProfit/Loss Amount: 200.00\nProfit Margin (%): 20.00"));
        assert!(out.contains("Invoice No: QM-1"));
        assert!(out.contains("Quantity: 2"));
        assert!(out.contains(SALE_RULE));
    }

    #[test]
    fn test_sales_failure_keeps_previous() {
        let mut desk = SalesDesk::new();
        let script = "1\nQM-1\nMeera\nKettle\n1\n100\n100\n1\nQM-2\nMeera\nKettle\n0\n5\n";
        let out = run_sales_script(&mut desk, script);

        assert!(out.contains("Status: BREAK-EVEN"));
        assert!(out.contains("Quantity must be greater than 0."));
        assert_eq!(desk.last().unwrap().invoice_no(), "QM-1");
    }

    #[test]
    fn test_sales_clear_and_bad_option() {
        let mut desk = SalesDesk::new();
        let out = run_sales_script(&mut desk, "1\nA\nB\nC\n1\n10\n5\n4\n7\nx\n5\n");

        assert!(out.contains("Status: LOSS"));
        assert!(out.contains("Last transaction cleared."));
        assert!(out.contains("Invalid option. Please select 1 to 5."));
        assert!(out.contains("Invalid input. Please enter a number between 1 and 5."));
        assert_eq!(desk.state(), StoreState::Empty);
    }
}
