//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → handlers.rs (bind + validate the number, call the engine)
//!     → response.rs (wire types) or error.rs (structured failure)
//!     → Send to client
//! ```

pub mod error;
pub mod handlers;
pub mod response;
pub mod server;

pub use error::ApiError;
pub use response::{ErrorResponse, PrimeCheckResponse};
pub use server::HttpServer;
