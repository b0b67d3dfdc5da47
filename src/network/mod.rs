//! Network layer - HTTP calls to the catalog backend
//!
//! The Network actor receives catalog commands and sends back responses.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
pub use client::CatalogClient;
