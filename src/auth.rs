//! Key identifiers and redacting wrappers for secret material.

pub mod id;
pub mod secret;

pub use id::*;
pub use secret::*;
