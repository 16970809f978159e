//! Till Core Library
//!
//! Single-record calculators for clinic billing and retail profit/loss.
//!
//! # Architecture
//!
//! ```text
//!   raw fields (BillInput / SaleInput)
//!                 │
//!                 ▼
//!      BillCalculator / SaleCalculator ──✗──► ValidationError
//!                 │                           (store untouched)
//!                 ▼
//!        BillRecord / SaleRecord
//!                 │
//!                 ▼
//!     ┌───────────────────────────┐
//!     │   SingleRecordStore<T>    │   EMPTY ◄──clear── HOLDING
//!     │   put / get / clear       │   EMPTY ───put───► HOLDING ◄─┐
//!     └─────────────┬─────────────┘                    └──put───┘
//!                   │
//!                   ▼
//!               Receipt (text / JSON)
//! ```
//!
//! # Core Principle
//!
//! **A record is never partially built.** Every input is validated before any
//! derived amount is computed, and a failed build leaves the previously held
//! record untouched. All money uses exact decimal arithmetic.
//!
//! # Modules
//!
//! - [`models`]: Domain types (BillRecord, SaleRecord, inputs and outcomes)
//! - [`calc`]: Bill and sale calculators with input validation
//! - [`store`]: Zero-or-one record holder
//! - [`desk`]: Session services pairing a calculator with a store
//! - [`receipt`]: Two-decimal labelled views of records

pub mod calc;
pub mod desk;
pub mod models;
pub mod receipt;
pub mod store;

// Re-export commonly used types
pub use calc::{BillCalculator, BillingPolicy, SaleCalculator, ValidationError};
pub use desk::{BillingDesk, SalesDesk};
pub use models::{BillInput, BillRecord, BillTotals, SaleInput, SaleOutcome, SaleRecord, SaleStatus};
pub use receipt::Receipt;
pub use store::{Record, SingleRecordStore, StoreError, StoreState};

// =========================================================================
// Error Type
// =========================================================================

/// Errors surfaced by desk operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TillError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    NotFound(#[from] StoreError),
}

pub type TillResult<T> = Result<T, TillError>;

impl TillError {
    /// True when the error only means "nothing to show yet".
    pub fn is_not_found(&self) -> bool {
        matches!(self, TillError::NotFound(_))
    }
}
