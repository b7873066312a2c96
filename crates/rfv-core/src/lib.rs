//! # rfv-core
//!
//! Types shared by every RollForVibes crate:
//!
//! - [`ids`]: branded, time-ordered string identifiers
//! - [`value`]: classification of attribute values into [`value::ValueKind`]
//! - [`time`]: the canonical timestamp encoding used in storage and on the wire

#![deny(unsafe_code)]

pub mod ids;
pub mod time;
pub mod value;

pub use ids::{AttributeId, RecordingId, SessionId};
pub use value::{ValueKind, classify};
