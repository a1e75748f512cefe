//! HTTP surface of the weather gateway.
//!
//! This crate focuses on:
//! - Parsing command-line arguments and loading configuration
//! - Routing `GET /weather` to the core provider
//! - Mapping core errors onto status codes

pub mod cli;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::app;
pub use state::AppState;
