//! HTTP surface of the investment goals service: route wiring, request
//! handlers, status mapping, and process bootstrap.

pub mod api;
pub mod config;
pub mod error;
mod main_lib;
pub mod models;

pub use main_lib::{build_state, init_tracing, AppState};
