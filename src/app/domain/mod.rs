//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - The single open document and its dirty flag
//! - Per-platform flavor (titles, prompts, filters, encodings)
//! - Application settings
//! - Message types for the event system

pub mod document;
pub mod flavor;
pub mod messages;
pub mod settings;

pub use document::DocumentSession;
pub use flavor::Flavor;
pub use messages::Message;
pub use settings::AppSettings;
