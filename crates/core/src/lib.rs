//! AtmBank Core - Domain types
//!
//! This crate contains the fundamental types used across AtmBank:
//! - `Credential`: Compound (account number, PIN) map key
//! - `Account`: Owner name and decimal balance
//! - `Transaction`: Structured deposit/withdrawal record rendered to ledger text
//! - `AtmError`: Typed failures for every refused operation

pub mod account;
pub mod credential;
pub mod error;
pub mod transaction;

pub use account::Account;
pub use credential::{AccountNumber, Credential, Pin};
pub use error::{AtmError, AtmResult};
pub use transaction::{Transaction, TransactionKind};
