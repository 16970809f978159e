//! Domain models for the till system.

mod bill;
mod sale;

pub use bill::*;
pub use sale::*;
