//! Android project file generation for apkforge
//!
//! This crate turns a flat [`record::ConfigurationRecord`] into the two
//! generated project files:
//! - `AndroidManifest.xml` (permissions, application and activity attributes)
//! - `build.gradle (app)` (SDK bounds, versioning, build types, dependencies)
//!
//! Rendering is a pure function of the record. The [`session::Session`]
//! controller owns the record for interactive editing.
//!
//! # Example
//!
//! ```rust
//! use apkforge_android::record::ConfigurationRecord;
//! use apkforge_android::render::{render, ArtifactKind};
//!
//! let mut record = ConfigurationRecord::default();
//! record.camera_permission = true;
//!
//! let outputs = render(&record);
//! assert!(outputs.get(ArtifactKind::Manifest).contains("android.permission.CAMERA"));
//! ```

#![warn(missing_docs)]

pub mod choices;
pub mod escape;
pub mod fields;
pub mod gradle;
pub mod manifest;
pub mod permissions;
pub mod record;
pub mod render;
pub mod session;
pub mod template;
