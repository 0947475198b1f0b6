//! Infrastructure Layer
//!
//! Adapters around the domain, following hexagonal architecture:
//!
//! - **Driven Adapters (Outbound)**:
//!   - `persistence/`: order store implementations
//!
//! - **Driver Adapters (Inbound)**:
//!   - `http/`: REST API controller

pub mod http;
pub mod persistence;
