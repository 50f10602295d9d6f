//! # Example 02: Rejected Operations
//!
//! What the machine refuses and how it answers:
//! 1. Registering the same credential twice
//! 2. Checking a balance with the wrong PIN
//! 3. Depositing a negative amount
//! 4. Withdrawing more than the balance
//!
//! Every rejection leaves the account exactly as it was.
//!
//! Run with: `cargo run -p atmbank-demos --example 02_rejected_operations`

use anyhow::Result;
use atmbank_ledger::{Atm, AtmResult};
use rust_decimal_macros::dec;

fn show(result: AtmResult<()>) {
    match result {
        Ok(()) => println!("   ✅ accepted"),
        Err(err) if err.is_invalid_argument() => println!("   ❌ rejected request: {err}"),
        Err(err) => println!("   ❌ failed at runtime: {err}"),
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("=== Example 02: Rejected Operations ===\n");

    let mut atm = Atm::new();
    atm.register_account(11111111, 2222, "Alice", dec!(250.75))?;
    println!("📋 Alice registered with $250.75\n");

    println!("📋 Registering the same credential again...");
    show(atm.register_account(11111111, 2222, "Mallory", dec!(0)));

    println!("🔑 Checking the balance with a wrong PIN...");
    show(atm.check_balance(11111111, 9999).map(|_| ()));

    println!("💰 Depositing a negative amount...");
    show(atm.deposit(11111111, 2222, dec!(-5)));

    println!("🏧 Withdrawing more than the balance...");
    show(atm.withdraw(11111111, 2222, dec!(9999)));

    println!(
        "\nBalance is still ${:.2}",
        atm.check_balance(11111111, 2222)?
    );
    println!("✅ Demo complete");
    Ok(())
}
