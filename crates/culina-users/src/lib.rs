//! CULINA Users — the registration and lifecycle engine.
//!
//! Orchestrates signup, role binding, deactivation, profile updates,
//! password changes, and image updates over the repository traits,
//! and announces lifecycle transitions through an [`EventSink`].
//!
//! [`EventSink`]: culina_core::publisher::EventSink

pub mod service;
pub mod sink;

pub use service::UserService;
pub use sink::{MemorySink, TracingSink};
