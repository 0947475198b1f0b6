//! HTTP/REST API adapter.
//!
//! Inbound adapter implementing the REST endpoints that delegate to the
//! order store.

mod controller;
mod request;
mod response;

pub use controller::{AppState, create_router};
pub use request::*;
pub use response::*;
