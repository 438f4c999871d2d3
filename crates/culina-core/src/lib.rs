//! CULINA Core — domain models, repository traits, and shared error
//! types for the user-identity service.

pub mod error;
pub mod models;
pub mod publisher;
pub mod repository;

pub use error::{CulinaError, CulinaResult};
