//! Unified type system
//!
//! Provider-agnostic request and response shapes shared by the facade and
//! every backend invoker.

pub mod requests;
pub mod responses;

pub use requests::{CompletionRequest, ReasoningEffort, Turn, TurnRole};
pub use responses::CompletionResult;
