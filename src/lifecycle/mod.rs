//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Load config → Validate → Bind listener → Serve
//!
//! Shutdown:
//!     SIGTERM/SIGINT → trigger → server drains connections → Exit
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
