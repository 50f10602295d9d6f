//! Account - Owner name and balance
//!
//! The account record kept per Credential. Fields are public because the
//! manager hands out direct map access for inspection and test setup; the
//! validated operations are the only writers that maintain the invariants.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One registered account.
///
/// Created at registration, mutated in place by deposits and withdrawals,
/// never deleted. The balance is decimal-exact and non-negative after any
/// validated operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Owner name as given at registration
    pub owner_name: String,
    /// Current balance
    pub balance: Decimal,
}

impl Account {
    /// Create a new Account.
    ///
    /// The initial balance is stored as given; registration performs no
    /// sign or bound check on it.
    pub fn new(owner_name: impl Into<String>, balance: Decimal) -> Self {
        Self {
            owner_name: owner_name.into(),
            balance,
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (balance: {:.2})", self.owner_name, self.balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_account_creation() {
        let account = Account::new("Sam Sepiol", dec!(300.30));
        assert_eq!(account.owner_name, "Sam Sepiol");
        assert_eq!(account.balance, dec!(300.30));
    }

    #[test]
    fn test_initial_balance_stored_as_given() {
        // No sign check at construction; the manager's validated operations
        // are what keep balances non-negative afterwards.
        let account = Account::new("Overdrawn", dec!(-5));
        assert_eq!(account.balance, dec!(-5));
    }

    #[test]
    fn test_account_display() {
        let account = Account::new("Alice", dec!(250.75));
        assert_eq!(account.to_string(), "Alice (balance: 250.75)");
    }

    #[test]
    fn test_serde_roundtrip() {
        let account = Account::new("Sam Sepiol", dec!(300.30));
        let json = serde_json::to_string(&account).unwrap();
        let parsed: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(account, parsed);
    }
}
