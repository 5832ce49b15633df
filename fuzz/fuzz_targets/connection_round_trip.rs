//! Structured fuzz target: build a connection string, parse it back and
//! compare.
//!
//! Only values that cannot collide with the `;`/`=` framing are kept, since
//! the canonical format does not quote them.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_connection_round_trip
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mssqlodbc_core::{Connection, catalog, parse};

#[derive(Debug, Arbitrary)]
struct FuzzConnection {
    driver: u8,
    server: String,
    user: String,
    password: String,
    trusted: bool,
    app_name: String,
    database: String,
    multi_subnet_failover: bool,
}

fn clean(value: &str) -> bool {
    value.trim() == value && !value.contains([';', '=', '{', '}'])
}

fuzz_target!(|input: FuzzConnection| {
    let fields = [
        &input.server,
        &input.user,
        &input.password,
        &input.app_name,
        &input.database,
    ];
    if input.server.is_empty() || !fields.iter().all(|f| clean(f)) {
        return;
    }
    // Without credentials the string renders Trusted_Connection=yes
    if !input.trusted && input.user.is_empty() && input.password.is_empty() {
        return;
    }

    let drivers = catalog::drivers();
    let driver = drivers[input.driver as usize % drivers.len()];
    let installed = [driver];

    let mut cxn = Connection::builder()
        .server(input.server)
        .trusted(input.trusted)
        .app_name(input.app_name)
        .database(input.database)
        .multi_subnet_failover(input.multi_subnet_failover);
    if !input.trusted {
        cxn = cxn.user(input.user).password(input.password);
    }
    let mut cxn = cxn.build();

    let rendered = cxn.connection_string(&installed).expect("valid connection");
    let parsed = parse(&rendered).expect("canonical string parses");
    assert_eq!(parsed, cxn, "round trip of {rendered:?}");
});
