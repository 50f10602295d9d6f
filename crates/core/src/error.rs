//! Error - Typed failures for refused operations
//!
//! Every failure surfaces immediately to the caller; nothing is clamped and
//! a refused operation mutates neither balance nor history. The variants
//! fall into two kinds, exposed as predicates: invalid-argument failures
//! (malformed or disallowed input) and runtime failures (valid request the
//! current state cannot satisfy).

use crate::credential::AccountNumber;
use rust_decimal::Decimal;
use thiserror::Error;

/// Failures raised by the account ledger manager
#[derive(Debug, Error)]
pub enum AtmError {
    // === Invalid-argument failures ===
    #[error("Account already registered: {0}")]
    DuplicateAccount(AccountNumber),

    #[error("Invalid credentials for account {0}")]
    InvalidCredential(AccountNumber),

    #[error("Invalid amount: {0}")]
    InvalidAmount(Decimal),

    // === Runtime failures ===
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    // === Ledger export failures ===
    #[error("Ledger I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for manager operations
pub type AtmResult<T> = Result<T, AtmError>;

impl AtmError {
    /// Create an insufficient funds error
    pub fn insufficient_funds(requested: Decimal, available: Decimal) -> Self {
        Self::InsufficientFunds {
            requested,
            available,
        }
    }

    /// Malformed or disallowed input: duplicate registration, unknown
    /// credentials, negative amount.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::DuplicateAccount(_) | Self::InvalidCredential(_) | Self::InvalidAmount(_)
        )
    }

    /// Valid request the current state cannot satisfy: overdraft.
    pub fn is_runtime_failure(&self) -> bool {
        matches!(self, Self::InsufficientFunds { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        let err = AtmError::DuplicateAccount(11111111);
        assert_eq!(err.to_string(), "Account already registered: 11111111");

        let err = AtmError::InvalidCredential(12345678);
        assert_eq!(err.to_string(), "Invalid credentials for account 12345678");

        let err = AtmError::InvalidAmount(dec!(-50));
        assert_eq!(err.to_string(), "Invalid amount: -50");

        let err = AtmError::insufficient_funds(dec!(200), dec!(100));
        assert_eq!(
            err.to_string(),
            "Insufficient funds: requested 200, available 100"
        );
    }

    #[test]
    fn test_invalid_argument_kind() {
        assert!(AtmError::DuplicateAccount(1).is_invalid_argument());
        assert!(AtmError::InvalidCredential(1).is_invalid_argument());
        assert!(AtmError::InvalidAmount(dec!(-1)).is_invalid_argument());

        assert!(!AtmError::insufficient_funds(dec!(2), dec!(1)).is_invalid_argument());
    }

    #[test]
    fn test_runtime_failure_kind() {
        assert!(AtmError::insufficient_funds(dec!(2), dec!(1)).is_runtime_failure());

        assert!(!AtmError::InvalidCredential(1).is_runtime_failure());
        assert!(!AtmError::InvalidAmount(dec!(-1)).is_runtime_failure());
    }

    #[test]
    fn test_io_is_neither_kind() {
        let err = AtmError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert!(!err.is_invalid_argument());
        assert!(!err.is_runtime_failure());
        assert!(err.to_string().contains("Ledger I/O error"));
    }
}
