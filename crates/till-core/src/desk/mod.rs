//! Session services for the two counters.
//!
//! A desk owns one calculator and one [`SingleRecordStore`](crate::store::SingleRecordStore).
//! It is the only place records enter or leave the store.

mod billing;
mod sales;

pub use billing::*;
pub use sales::*;
