//! Prime Number API library.
//!
//! A stateless HTTP service exposing a deterministic primality check.
//!
//! # Architecture Overview
//! ```text
//!                  ┌────────────────────────────────────────────┐
//!                  │               PRIME NUMBER API              │
//!                  │                                             │
//!  Client Request  │  ┌─────────┐    ┌──────────┐   ┌─────────┐ │
//!  ────────────────┼─▶│  http   │───▶│ handlers │──▶│  prime  │ │
//!                  │  │ server  │    │ bind +   │   │ engine  │ │
//!                  │  └─────────┘    │ validate │   └────┬────┘ │
//!                  │                 └────┬─────┘        │      │
//!  Client Response │  ┌──────────┐        │              │      │
//!  ◀───────────────┼──│ response │◀───────┴──────────────┘      │
//!                  │  │ / error  │                               │
//!                  │  └──────────┘                               │
//!                  │                                             │
//!                  │  Cross-cutting: config, lifecycle, tracing  │
//!                  └────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod prime;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
