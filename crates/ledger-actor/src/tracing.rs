//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter whose level is driven
//! by `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # one line per committed command
//! RUST_LOG=debug cargo run     # full command and query payloads
//! RUST_LOG=ledger_actor=debug,coffeeshop=info cargo run
//! ```
//!
//! With `RUST_LOG=info` an order flowing through the counter looks like:
//!
//! ```text
//! INFO Actor started ledger_type="CounterLedger"
//! INFO Committed ledger_type="CounterLedger" committed=3
//! WARN Rolled back ledger_type="CounterLedger" error=Insufficient stock for Latte (menu_1): 1 available
//! ```
//!
//! `RUST_LOG=debug` adds the client spans and the payloads:
//!
//! ```text
//! DEBUG create_order: Sending request user_id=UserId(1) lines=[OrderLine { menu_id: MenuId(1), quantity: 2 }]
//! DEBUG Execute ledger_type="CounterLedger" command=CreateOrder { .. }
//! ```

/// Initializes the global tracing subscriber.
///
/// Call once per process; a second call panics because the global default is already set.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // ledger_type and span names carry the context
        .compact()
        .init();
}
