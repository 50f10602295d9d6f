//! # Example 01: Cash Machine Session
//!
//! A full session at the machine:
//! 1. Register an account with an opening balance
//! 2. Deposit and withdraw cash
//! 3. Check the balance
//! 4. Export the ledger to a text file
//!
//! Run with: `cargo run -p atmbank-demos --example 01_cash_machine_session`

use anyhow::Result;
use atmbank_ledger::Atm;
use rust_decimal_macros::dec;
use std::fs;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("=== Example 01: Cash Machine Session ===\n");

    let mut atm = Atm::new();

    // =========================================================================
    // Part 1: Registration
    // =========================================================================

    println!("📋 Registering Sam Sepiol (account 12345678)...");
    atm.register_account(12345678, 1234, "Sam Sepiol", dec!(1000))?;
    println!(
        "   Opening balance: ${:.2}\n",
        atm.check_balance(12345678, 1234)?
    );

    // =========================================================================
    // Part 2: Cash movement
    // =========================================================================

    println!("💰 Depositing $500.00...");
    atm.deposit(12345678, 1234, dec!(500))?;

    println!("🏧 Withdrawing $200.00...");
    atm.withdraw(12345678, 1234, dec!(200))?;

    println!(
        "   Balance is now ${:.2}\n",
        atm.check_balance(12345678, 1234)?
    );

    // =========================================================================
    // Part 3: Ledger export
    // =========================================================================

    let path = std::env::temp_dir().join("atmbank_demo_ledger.txt");
    atm.print_ledger(&path, 12345678, 1234)?;

    println!("📄 Ledger written to {}:\n", path.display());
    print!("{}", fs::read_to_string(&path)?);

    println!("\n✅ Session complete");
    Ok(())
}
