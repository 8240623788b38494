//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, AnnotateTransport)
//! but are themselves concrete structs, not traits.

mod request_builder;

pub use request_builder::RequestBuilder;
