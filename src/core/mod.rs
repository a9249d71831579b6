//! Core adapter layer
//!
//! Capability resolution, schema descriptions, per-provider backends, and
//! the completion facade.

pub mod capabilities;
pub mod catalog;
pub mod client;
pub mod providers;
pub mod schema;
pub mod types;
