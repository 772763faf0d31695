//! Configuration loading and schema definitions
//!
//! Tool configuration shared by the generator and the CLI.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
