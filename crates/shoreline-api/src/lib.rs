//! Async client for the Shoreline lifeguard-operations portal API.
//!
//! The portal is a plain JSON REST service managing four resources:
//! regions, managers, lifeguards, and incident reports. This crate owns
//! the transport layer ([`PortalClient`]) and the typed wire shapes
//! ([`types`]); business rules and client-side state live in
//! `shoreline-core`.
//!
//! Every public method is one HTTP round trip — no retries, caching, or
//! batching. Non-2xx responses are normalized into [`Error::Api`] using
//! the portal's `{detail}` error convention.

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

mod incidents;
mod lifeguards;
mod managers;
mod regions;

pub use client::PortalClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
