//! # AtmBank Demos
//!
//! Example scenarios exercising the AtmBank ledger end to end.
//!
//! ## Available Examples
//!
//! 1. **01_cash_machine_session** - Register, deposit, withdraw, export a ledger
//! 2. **02_rejected_operations** - How invalid requests surface as errors
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run -p atmbank-demos --example 01_cash_machine_session
//! cargo run -p atmbank-demos --example 02_rejected_operations
//! ```

// This crate only contains examples, no library code.

#[cfg(test)]
mod tests {
    use atmbank_ledger::Atm;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cash_machine_session_flow() {
        let mut atm = Atm::new();
        atm.register_account(12345678, 1234, "Sam Sepiol", dec!(1000))
            .unwrap();
        atm.deposit(12345678, 1234, dec!(500)).unwrap();
        atm.withdraw(12345678, 1234, dec!(200)).unwrap();

        assert_eq!(atm.check_balance(12345678, 1234).unwrap(), dec!(1300));
    }

    #[test]
    fn test_rejected_operations_flow() {
        let mut atm = Atm::new();
        atm.register_account(11111111, 2222, "Alice", dec!(250.75))
            .unwrap();

        assert!(atm.deposit(11111111, 2222, dec!(-5)).is_err());
        assert!(atm.withdraw(11111111, 2222, dec!(9999)).is_err());
        assert_eq!(atm.check_balance(11111111, 2222).unwrap(), dec!(250.75));
    }
}
