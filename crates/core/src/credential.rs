//! Credential - Compound account key
//!
//! Accounts are addressed by the (account number, PIN) pair, never by the
//! account number alone. The pair is one hashable value so both state maps
//! key on it directly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Account number as entered at the terminal.
pub type AccountNumber = u32;

/// Personal identification number paired with the account number.
pub type Pin = u32;

/// Compound key identifying at most one account.
///
/// Equality and hashing cover both fields: the same account number with a
/// different PIN is a different (and normally nonexistent) key. Immutable
/// once an account is registered under it.
///
/// # Examples
/// ```
/// use atmbank_core::Credential;
///
/// let sam = Credential::new(12345678, 1234);
/// assert_eq!(sam, (12345678, 1234).into());
/// assert_ne!(sam, Credential::new(12345678, 9999));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Credential {
    /// Account number
    pub account_number: AccountNumber,
    /// PIN
    pub pin: Pin,
}

impl Credential {
    /// Create a new Credential
    pub fn new(account_number: AccountNumber, pin: Pin) -> Self {
        Self {
            account_number,
            pin,
        }
    }
}

impl From<(AccountNumber, Pin)> for Credential {
    fn from((account_number, pin): (AccountNumber, Pin)) -> Self {
        Self::new(account_number, pin)
    }
}

// The PIN is a secret; Display renders the account number only so the key
// can appear in errors and log fields.
impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.account_number)
    }
}
