//! Fuzz target for the connection string parser.
//!
//! Feeds arbitrary strings to the parser to find panics.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_connection_string_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use mssqlodbc_core::parse;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Errors are fine, panics are not
        let _ = parse(input);
    }
});
