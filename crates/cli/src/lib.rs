//! Terminal-facing helpers for apkforge
//!
//! Provides shared CLI functionality:
//! - Terminal output formatting
//! - Clipboard access
//! - The timed copy acknowledgment

#![warn(missing_docs)]

pub mod ack;
pub mod clipboard;
pub mod output;
