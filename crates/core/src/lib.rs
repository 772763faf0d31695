//! Core utilities for apkforge
//!
//! This crate provides shared functionality used by the generator and the CLI:
//!
//! - **Error handling**: Structured errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based tool configuration with defaults for every table
//!
//! # Example
//!
//! ```rust,no_run
//! use apkforge_core::config::Config;
//!
//! let config = Config::load(None).expect("config should load");
//! println!("ack delay: {}ms", config.schema.clipboard.ack_delay_ms);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;

pub use error::{Error, ErrorCode, Result, ResultExt};
