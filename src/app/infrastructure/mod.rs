//! Infrastructure layer - external integrations and utilities.
//!
//! - Platform config locations
//! - Error types

pub mod error;
pub mod platform;
