//! Primality checking subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP handler (validated n > 0)
//!     → engine.rs (6k±1 wheel trial division)
//!     → bool + message back to handler
//! ```
//!
//! # Design Decisions
//! - Pure functions, no state, no I/O
//! - Total over all i64 inputs (handlers enforce n > 0, the engine does not)
//! - Deterministic: same input always yields the same answer and message

pub mod engine;

pub use engine::{describe, is_prime};
