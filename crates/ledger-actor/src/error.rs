//! # Framework Errors
//!
//! Transport-level failures between a [`LedgerClient`](crate::LedgerClient) and its
//! [`LedgerActor`](crate::LedgerActor). Business rejections never show up here: they travel
//! back as the ledger's own `Error` type, which must be constructible from these variants.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Ledger actor closed")]
    ActorClosed,
    #[error("Ledger actor dropped response channel")]
    ActorDropped,
}
