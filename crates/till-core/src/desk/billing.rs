//! Clinic billing desk.

use crate::calc::{BillCalculator, BillingPolicy};
use crate::models::{BillInput, BillRecord};
use crate::store::{SingleRecordStore, StoreState};
use crate::TillResult;

/// Creates, shows and clears the last patient bill.
#[derive(Debug, Default)]
pub struct BillingDesk {
    calculator: BillCalculator,
    store: SingleRecordStore<BillRecord>,
}

impl BillingDesk {
    /// Create a desk using the given discount policy.
    pub fn new(policy: BillingPolicy) -> Self {
        Self {
            calculator: BillCalculator::new(policy),
            store: SingleRecordStore::new(),
        }
    }

    /// Build a bill and make it the last bill.
    ///
    /// On a validation error the previous bill stays in place.
    pub fn create(&mut self, input: BillInput) -> TillResult<&BillRecord> {
        let bill = self.calculator.build(input).map_err(|e| {
            tracing::debug!(error = %e, "bill rejected");
            e
        })?;
        self.store.put(bill);
        Ok(self.store.get()?)
    }

    /// The last bill created.
    pub fn last(&self) -> TillResult<&BillRecord> {
        Ok(self.store.get()?)
    }

    /// Drop the last bill, if any.
    pub fn clear(&mut self) -> Option<BillRecord> {
        self.store.clear()
    }

    pub fn state(&self) -> StoreState {
        self.store.state()
    }
}
