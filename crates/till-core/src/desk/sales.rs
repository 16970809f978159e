//! Retail sales desk.

use crate::calc::SaleCalculator;
use crate::models::{SaleInput, SaleRecord};
use crate::store::{SingleRecordStore, StoreState};
use crate::TillResult;

/// Creates, shows, recalculates and clears the last sale.
#[derive(Debug, Default)]
pub struct SalesDesk {
    calculator: SaleCalculator,
    store: SingleRecordStore<SaleRecord>,
}

impl SalesDesk {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sale and make it the last transaction.
    ///
    /// On a validation error the previous transaction stays in place.
    pub fn create(&mut self, input: SaleInput) -> TillResult<&SaleRecord> {
        let sale = self.calculator.build(input).map_err(|e| {
            tracing::debug!(error = %e, "sale rejected");
            e
        })?;
        self.store.put(sale);
        Ok(self.store.get()?)
    }

    /// The last transaction created.
    pub fn last(&self) -> TillResult<&SaleRecord> {
        Ok(self.store.get()?)
    }

    /// Recompute profit/loss on the last transaction's stored amounts.
    pub fn recalculate(&mut self) -> TillResult<&SaleRecord> {
        let sale = self.store.get_mut()?;
        sale.recalculate(&self.calculator)?;
        tracing::debug!(invoice = sale.invoice_no(), status = %sale.status(), "sale recalculated");
        Ok(&*sale)
    }

    /// Drop the last transaction, if any.
    pub fn clear(&mut self) -> Option<SaleRecord> {
        self.store.clear()
    }

    pub fn state(&self) -> StoreState {
        self.store.state()
    }
}
