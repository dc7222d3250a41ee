//! Application layer.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (DocumentSession, Flavor, Settings, Messages)
//! - `controllers/` - Orchestration (SessionController and its confirmation gate)
//! - `services/` - Business operations (encoding fallback, persistence seams, recent files, text_ops)
//! - `infrastructure/` - External integrations (platform paths, error)
//! - `state.rs` - FLTK coordinator, only built with the `gui` feature

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
#[cfg(feature = "gui")]
pub mod state;

// Re-exports for convenient external access
pub use controllers::session::{
    Collaborators, GateResult, OpenOutcome, SaveOutcome, SessionController,
};
pub use domain::{AppSettings, DocumentSession, Flavor, Message};
pub use infrastructure::error::{AppError, Result};
pub use services::encoding::{EncodingPolicy, TextEncoding};
pub use services::recent_files::RecentFiles;
