//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Encoding detection with ordered fallback
//! - Storage, path chooser and prompt seams
//! - Recent files list
//! - Text operations

pub mod encoding;
pub mod persistence;
pub mod recent_files;
pub mod text_ops;
