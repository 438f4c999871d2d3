//! Domain models for CULINA.
//!
//! These are the core types shared across all crates.

pub mod event;
pub mod role;
pub mod user;
