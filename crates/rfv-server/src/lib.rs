//! # rfv-server
//!
//! Axum HTTP surface for the three RollForVibes services.
//!
//! - **sessions**: sessions and their key/value attributes
//! - **recordings**: publish a Google Doc per recording and register it
//! - **calendar**: the next upcoming game session
//!
//! One process can serve any subset; see [`config::Service`]. Every service
//! also answers `GET /api/health`. Store work runs on the blocking pool;
//! Google calls go through the collaborator traits held in [`AppState`].

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod health;
pub mod server;

pub use config::{ServerConfig, Service};
pub use error::ApiError;
pub use server::{AppState, RfvServer, build_router};
