//! Controllers layer - orchestration and coordination.
//!
//! The session controller owns the document and runs every destructive
//! action (New, Open, Exit) through the unsaved-changes gate.

pub mod session;
