//! Command-line client for the Google Cloud Vision `images:annotate` API.
//!
//! One run parses the feature switches and image sources, builds a single
//! batch request, submits it, and prints the per-image responses as JSON.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
