//! Basic usage example for bulwark-validator
//!
//! Run with `RUST_LOG=debug` to see the rejection events.

use bulwark_validator::prelude::*;
use tracing_subscriber::EnvFilter;

fn check(login: Option<&str>, age: Option<i64>) -> Result<(), StructuredError> {
    field("login", login)
        .not_blank()?
        .max_length(50)?
        .format("[_.@A-Za-z0-9-]+")?;
    field("age", age).min(0)?.max(150)?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let inputs = [
        (Some("alice"), Some(30)),
        (Some("   "), Some(30)),
        (None, None),
        (Some("bob"), Some(200)),
        (Some("bob smith"), None),
    ];

    for (login, age) in inputs {
        match check(login, age) {
            Ok(()) => println!("✓ {login:?} / {age:?} is valid"),
            Err(e) => println!(
                "✗ {login:?} / {age:?}: [{}] {} {}",
                e.message_key(),
                e,
                e.arguments()
            ),
        }
    }
}
