//! Infrastructure layer: I/O implementations and DI container
//!
//! This layer implements I/O boundary traits, talks to the Vision API
//! and wires up services.

pub mod client;
pub mod credentials;
pub mod di;
pub mod error;
pub mod http;
pub mod traits;

pub use error::{InfraError, InfraResult};
