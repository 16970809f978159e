//! Sale receipts.

use super::Receipt;
use crate::models::{SaleOutcome, SaleRecord};

impl Receipt {
    /// Status, amount and margin of a sale.
    pub fn for_sale_outcome(title: impl Into<String>, outcome: &SaleOutcome) -> Self {
        Receipt::new(title)
            .line("Status", outcome.status.as_str())
            .amount("Profit/Loss Amount", outcome.result_amount)
            .amount("Profit Margin (%)", outcome.result_percent)
    }

    /// Every field of a sale.
    pub fn for_sale(title: impl Into<String>, sale: &SaleRecord) -> Self {
        Receipt::new(title)
            .line("Invoice No", sale.invoice_no())
            .line("Customer", sale.customer_name())
            .line("Item", sale.item_name())
            .line("Quantity", sale.quantity().to_string())
            .amount("Purchase Amount", sale.purchase_amount())
            .amount("Selling Amount", sale.selling_amount())
            .line("Status", sale.status().as_str())
            .amount("Profit/Loss Amount", sale.result_amount())
            .amount("Profit Margin (%)", sale.result_percent())
    }
}
