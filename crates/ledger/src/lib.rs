//! AtmBank Ledger - The account ledger manager
//!
//! All account state changes go through this crate.
//!
//! # Key Types
//! - `Atm`: The manager - registration, deposits, withdrawals, balance
//!   checks, and ledger export, over two credential-keyed maps
//! - `export`: Rendering and writing of one account's ledger text

pub mod atm;
pub mod export;

pub use atm::Atm;
pub use atmbank_core::{
    Account, AccountNumber, AtmError, AtmResult, Credential, Pin, Transaction, TransactionKind,
};
pub use export::{render_ledger, write_ledger};
