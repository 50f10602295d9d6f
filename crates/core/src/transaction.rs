//! Transaction - Structured deposit/withdrawal record
//!
//! The history maps store pre-rendered description strings, so `Transaction`
//! lives only at the append seam: the manager builds one per successful
//! mutation and stores its rendered form. Rendering is the single place the
//! ledger line format is defined.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::Display;

/// Direction of a balance mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum TransactionKind {
    /// Cash paid in
    Deposit,
    /// Cash paid out
    Withdrawal,
}

/// One successful balance mutation, ready to render as a ledger line.
///
/// `balance_after` is the account balance immediately after the mutation
/// was applied; the rendered "Updated Balance" must always equal it.
///
/// # Examples
/// ```
/// use atmbank_core::Transaction;
/// use rust_decimal_macros::dec;
///
/// let tx = Transaction::deposit(dec!(500), dec!(1500));
/// assert_eq!(
///     tx.to_string(),
///     "Deposit - Amount: $500.00, Updated Balance: $1500.00"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Deposit or Withdrawal
    pub kind: TransactionKind,
    /// Amount moved, as validated (non-negative)
    pub amount: Decimal,
    /// Balance right after the mutation
    pub balance_after: Decimal,
}

impl Transaction {
    /// Create a deposit record
    pub fn deposit(amount: Decimal, balance_after: Decimal) -> Self {
        Self {
            kind: TransactionKind::Deposit,
            amount,
            balance_after,
        }
    }

    /// Create a withdrawal record
    pub fn withdrawal(amount: Decimal, balance_after: Decimal) -> Self {
        Self {
            kind: TransactionKind::Withdrawal,
            amount,
            balance_after,
        }
    }
}

// Amounts render with two decimals regardless of the stored scale; the
// stored Decimal keeps full precision.
impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Amount: ${:.2}, Updated Balance: ${:.2}",
            self.kind, self.amount, self.balance_after
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_kind_display() {
        assert_eq!(TransactionKind::Deposit.to_string(), "Deposit");
        assert_eq!(TransactionKind::Withdrawal.to_string(), "Withdrawal");
    }

    #[test]
    fn test_deposit_description() {
        let tx = Transaction::deposit(dec!(40000), dec!(40099.90));
        assert_eq!(
            tx.to_string(),
            "Deposit - Amount: $40000.00, Updated Balance: $40099.90"
        );
    }

    #[test]
    fn test_withdrawal_description() {
        let tx = Transaction::withdrawal(dec!(200.40), dec!(99.90));
        assert_eq!(
            tx.to_string(),
            "Withdrawal - Amount: $200.40, Updated Balance: $99.90"
        );
    }

    #[test]
    fn test_zero_amount_renders_two_decimals() {
        let tx = Transaction::deposit(dec!(0), dec!(300.30));
        assert_eq!(
            tx.to_string(),
            "Deposit - Amount: $0.00, Updated Balance: $300.30"
        );
    }

    #[test]
    fn test_whole_amounts_pad_to_two_decimals() {
        let tx = Transaction::withdrawal(dec!(20), dec!(280.30));
        assert_eq!(
            tx.to_string(),
            "Withdrawal - Amount: $20.00, Updated Balance: $280.30"
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let tx = Transaction::deposit(dec!(500), dec!(1500));
        let json = serde_json::to_string(&tx).unwrap();
        let parsed: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(tx, parsed);
    }
}
