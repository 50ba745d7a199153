//! Use-case facades consumed by the command dispatcher.
//!
//! # Responsibility
//! - Orchestrate field validation and directory mutation per operation.
//! - Keep the dispatcher decoupled from storage and codec details.
//!
//! # Invariants
//! - Every mutation validates its input before touching the directory.

pub mod contact_book;
pub mod note_book;
