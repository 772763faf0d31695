//! Rendering a record into the generated project files
//!
//! [`render`] is a pure function: the same record always yields byte-identical
//! output, and there is no input it rejects.

use crate::escape;
use crate::record::ConfigurationRecord;
use crate::{gradle, manifest};
use apkforge_core::error::{Error, Result};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// A generated project file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// `AndroidManifest.xml`
    Manifest,
    /// `build.gradle (app)`
    BuildScript,
}

impl ArtifactKind {
    /// All artifacts in output order
    pub const ALL: [ArtifactKind; 2] = [ArtifactKind::Manifest, ArtifactKind::BuildScript];

    /// Fixed artifact name
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            ArtifactKind::Manifest => "AndroidManifest.xml",
            ArtifactKind::BuildScript => "build.gradle (app)",
        }
    }

    /// Short identifier used on the command line
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            ArtifactKind::Manifest => "manifest",
            ArtifactKind::BuildScript => "gradle",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

impl FromStr for ArtifactKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manifest" | "androidmanifest.xml" => Ok(ArtifactKind::Manifest),
            "gradle" | "build" | "build.gradle" | "build.gradle (app)" => {
                Ok(ArtifactKind::BuildScript)
            }
            _ => Err(Error::unknown_artifact(s)),
        }
    }
}

/// Rendering switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape interpolated text (XML in the manifest, Groovy strings in the build script)
    pub escape: bool,
}

/// What the templates read from while rendering
pub struct RenderContext<'a> {
    /// Record being rendered
    pub record: &'a ConfigurationRecord,
    /// Rendering switches
    pub options: RenderOptions,
}

impl<'a> RenderContext<'a> {
    /// Create a context over a record
    #[must_use]
    pub fn new(record: &'a ConfigurationRecord, options: RenderOptions) -> Self {
        Self { record, options }
    }

    /// Text for a manifest attribute value
    pub fn xml<'s>(&self, value: &'s str) -> Cow<'s, str> {
        if self.options.escape {
            escape::xml_attribute(value)
        } else {
            Cow::Borrowed(value)
        }
    }

    /// Text for a double-quoted build script string
    pub fn groovy<'s>(&self, value: &'s str) -> Cow<'s, str> {
        if self.options.escape {
            escape::groovy_string(value)
        } else {
            Cow::Borrowed(value)
        }
    }
}

/// The generated files of one render, in output order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutputSet {
    manifest: String,
    build_script: String,
}

impl RenderedOutputSet {
    /// Content of one artifact
    #[must_use]
    pub fn get(&self, kind: ArtifactKind) -> &str {
        match kind {
            ArtifactKind::Manifest => &self.manifest,
            ArtifactKind::BuildScript => &self.build_script,
        }
    }

    /// `(kind, content)` pairs in output order
    pub fn iter(&self) -> impl Iterator<Item = (ArtifactKind, &str)> {
        ArtifactKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }

    /// Number of artifacts
    #[must_use]
    pub fn len(&self) -> usize {
        ArtifactKind::ALL.len()
    }

    /// Always false; a render produces every artifact
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Serialize for RenderedOutputSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (kind, content) in self.iter() {
            map.serialize_entry(kind.file_name(), content)?;
        }
        map.end()
    }
}

/// Render with default options (no escaping)
#[must_use]
pub fn render(record: &ConfigurationRecord) -> RenderedOutputSet {
    render_with(record, RenderOptions::default())
}

/// Render with explicit options
#[must_use]
pub fn render_with(record: &ConfigurationRecord, options: RenderOptions) -> RenderedOutputSet {
    let ctx = RenderContext::new(record, options);
    let outputs = RenderedOutputSet {
        manifest: manifest::render(&ctx),
        build_script: gradle::render(&ctx),
    };

    tracing::debug!(
        package = %record.package_name,
        escape = options.escape,
        permissions = record.granted_permissions().count(),
        manifest_bytes = outputs.manifest.len(),
        build_script_bytes = outputs.build_script.len(),
        "Rendered project files"
    );

    outputs
}
