//! Keyed storage layer.
//!
//! # Responsibility
//! - Provide the generic in-memory directory used by both books.
//! - Isolate the binary file codec from domain and service code.
//!
//! # Invariants
//! - Directory keys are unique; `add` refuses collisions.
//! - Codec faults other than a missing file are always surfaced.

pub mod codec;
pub mod directory;
