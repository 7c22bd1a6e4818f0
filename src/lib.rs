//! Alfred workflow helpers: a concurrent multi-provider translation
//! aggregator plus string transform and timestamp converter workflows.
//!
//! Every binary reads its joined positional arguments, runs one
//! transformation (or one fan-out of network calls) and prints a single
//! JSON response envelope for the launcher.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
