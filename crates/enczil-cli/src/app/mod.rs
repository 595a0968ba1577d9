//! Application-level utilities for the Enczil CLI.
//!
//! This module provides:
//! - The per-invocation context (CLI args, lazily loaded config and UI)
//! - Source and destination path resolution
//! - Passphrase handling with retry logic around the core operations

mod context;
mod passphrase;
mod resolver;

pub use context::AppContext;
pub use passphrase::{decrypt_with_retry, encrypt_with_passphrase};
pub use resolver::{ensure_destination_free, resolve_destination, resolve_source};
