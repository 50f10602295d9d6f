//! Export - Render and write one account's ledger
//!
//! A ledger is the owner-name line followed by every stored history line in
//! append order, each line newline-terminated. Rendering is split from
//! writing so the exact text can be asserted without touching a filesystem;
//! the file always contains precisely the rendered bytes.

use atmbank_core::Account;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Render the ledger text for one account.
pub fn render_ledger(account: &Account, history: &[String]) -> String {
    let mut out = String::new();
    out.push_str(&account.owner_name);
    out.push('\n');
    for line in history {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Write the rendered ledger to `path`, truncating any existing content.
///
/// The write is buffered and flushed before the handle is released.
pub fn write_ledger(path: &Path, account: &Account, history: &[String]) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(render_ledger(account, history).as_bytes())?;
    writer.flush()
}
