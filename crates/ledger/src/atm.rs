//! Atm - The account ledger manager
//!
//! All account state lives here: a map of accounts and a parallel map of
//! transaction history lines, both keyed by `Credential`. Every public
//! operation validates before it mutates, so a returned error means neither
//! map changed.

use crate::export;
use atmbank_core::{
    Account, AccountNumber, AtmError, AtmResult, Credential, Pin, Transaction,
};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::path::Path;

/// The account ledger manager.
///
/// Owns two credential-keyed maps and keeps them key-synchronized:
/// registration inserts into both, and no validated operation adds or
/// removes keys afterwards. State is memory-resident and single-threaded;
/// nothing survives the process.
#[derive(Debug, Default)]
pub struct Atm {
    accounts: HashMap<Credential, Account>,
    transactions: HashMap<Credential, Vec<String>>,
}

impl Atm {
    /// Create an empty manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new account under `(account_number, pin)`.
    ///
    /// Creates the account and its empty transaction history. The initial
    /// balance is stored as given; registration performs no sign or bound
    /// check on it.
    ///
    /// # Errors
    /// [`AtmError::DuplicateAccount`] if the credential is already
    /// registered; the existing account is untouched.
    pub fn register_account(
        &mut self,
        account_number: AccountNumber,
        pin: Pin,
        owner_name: &str,
        initial_balance: Decimal,
    ) -> AtmResult<()> {
        let credential = Credential::new(account_number, pin);
        if self.accounts.contains_key(&credential) {
            return Err(AtmError::DuplicateAccount(account_number));
        }

        self.accounts
            .insert(credential, Account::new(owner_name, initial_balance));
        self.transactions.insert(credential, Vec::new());

        tracing::debug!(account = %credential, owner = owner_name, "Registered account");
        Ok(())
    }

    /// Deposit cash into the matching account.
    ///
    /// Adds the amount to the balance and appends one history line with the
    /// amount and updated balance, both rendered to two decimals. A zero
    /// amount is permitted and still appends a line.
    ///
    /// # Errors
    /// [`AtmError::InvalidCredential`] if no account matches;
    /// [`AtmError::InvalidAmount`] if the amount is negative. Neither
    /// balance nor history changes on failure.
    pub fn deposit(
        &mut self,
        account_number: AccountNumber,
        pin: Pin,
        amount: Decimal,
    ) -> AtmResult<()> {
        let credential = Credential::new(account_number, pin);
        let account = self
            .accounts
            .get_mut(&credential)
            .ok_or(AtmError::InvalidCredential(account_number))?;
        if amount < Decimal::ZERO {
            return Err(AtmError::InvalidAmount(amount));
        }

        account.balance += amount;
        let record = Transaction::deposit(amount, account.balance);
        tracing::debug!(
            account = %credential,
            amount = %amount,
            balance = %account.balance,
            "Deposit applied"
        );

        self.push_history(credential, record);
        Ok(())
    }

    /// Withdraw cash from the matching account.
    ///
    /// Subtracts the amount from the balance and appends one history line
    /// with the amount and updated balance, both rendered to two decimals.
    /// Withdrawing the exact balance is allowed and leaves it at zero.
    ///
    /// # Errors
    /// [`AtmError::InvalidCredential`] if no account matches;
    /// [`AtmError::InvalidAmount`] if the amount is negative;
    /// [`AtmError::InsufficientFunds`] if the amount exceeds the balance.
    /// Neither balance nor history changes on failure.
    pub fn withdraw(
        &mut self,
        account_number: AccountNumber,
        pin: Pin,
        amount: Decimal,
    ) -> AtmResult<()> {
        let credential = Credential::new(account_number, pin);
        let account = self
            .accounts
            .get_mut(&credential)
            .ok_or(AtmError::InvalidCredential(account_number))?;
        if amount < Decimal::ZERO {
            return Err(AtmError::InvalidAmount(amount));
        }
        if amount > account.balance {
            tracing::warn!(
                account = %credential,
                requested = %amount,
                available = %account.balance,
                "Withdrawal exceeds balance"
            );
            return Err(AtmError::insufficient_funds(amount, account.balance));
        }

        account.balance -= amount;
        let record = Transaction::withdrawal(amount, account.balance);
        tracing::debug!(
            account = %credential,
            amount = %amount,
            balance = %account.balance,
            "Withdrawal applied"
        );

        self.push_history(credential, record);
        Ok(())
    }

    /// Current balance of the matching account. Pure read.
    ///
    /// # Errors
    /// [`AtmError::InvalidCredential`] if no account matches.
    pub fn check_balance(&self, account_number: AccountNumber, pin: Pin) -> AtmResult<Decimal> {
        let credential = Credential::new(account_number, pin);
        self.accounts
            .get(&credential)
            .map(|account| account.balance)
            .ok_or(AtmError::InvalidCredential(account_number))
    }

    /// Write the account's ledger to `path`, replacing any existing file
    /// content: the owner-name line, then each history line in append
    /// order.
    ///
    /// # Errors
    /// [`AtmError::InvalidCredential`] if no account matches (no file is
    /// touched); [`AtmError::Io`] if the write fails.
    pub fn print_ledger(
        &self,
        path: impl AsRef<Path>,
        account_number: AccountNumber,
        pin: Pin,
    ) -> AtmResult<()> {
        let path = path.as_ref();
        let credential = Credential::new(account_number, pin);
        let account = self
            .accounts
            .get(&credential)
            .ok_or(AtmError::InvalidCredential(account_number))?;
        let history = self
            .transactions
            .get(&credential)
            .map(Vec::as_slice)
            .unwrap_or_default();

        export::write_ledger(path, account, history)?;
        tracing::debug!(
            account = %credential,
            path = %path.display(),
            lines = history.len() + 1,
            "Ledger written"
        );
        Ok(())
    }

    /// Shared view of the account map.
    pub fn accounts(&self) -> &HashMap<Credential, Account> {
        &self.accounts
    }

    /// Mutable handle to the account map.
    ///
    /// Unchecked escape hatch: mutations made through it bypass every
    /// validation above, and the caller maintains the key-synchronization
    /// and non-negative-balance invariants manually.
    pub fn accounts_mut(&mut self) -> &mut HashMap<Credential, Account> {
        &mut self.accounts
    }

    /// Shared view of the per-account transaction history lines.
    pub fn transactions(&self) -> &HashMap<Credential, Vec<String>> {
        &self.transactions
    }

    /// Mutable handle to the history map.
    ///
    /// Unchecked escape hatch, same contract as [`Atm::accounts_mut`].
    pub fn transactions_mut(&mut self) -> &mut HashMap<Credential, Vec<String>> {
        &mut self.transactions
    }

    // The validated operations keep both maps key-synchronized, so the
    // entry exists; or_default covers a history removed through the
    // unchecked accessors.
    fn push_history(&mut self, credential: Credential, record: Transaction) {
        self.transactions
            .entry(credential)
            .or_default()
            .push(record.to_string());
    }
}
