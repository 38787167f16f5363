//! Asset Manifest Entity
//!
//! Declarative mapping of destination path (relative to the output root) to the
//! instructions that produce it. Entries keep document order so diagnostics and
//! the fingerprint serialization are deterministic.
//!
//! ```toml
//! "vendor.css" = "copy"
//! "app.css" = { type = "less", file = "app.less" }
//! "app.js" = { type = "uglifyjs", files = ["a.js", "b.js"], env = "production" }
//! ```

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::value_objects::{AssetPath, Environment};
use crate::error::{AssetsError, AssetsResult};

/// Bare marker meaning "copy verbatim"
pub const COPY_MARKER: &str = "copy";

/// Kind of compiler an entry is dispatched to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Copy,
    Less,
    Sass,
    #[serde(rename = "uglifyjs", alias = "js", alias = "js-minify")]
    UglifyJs,
    Rollup,
}

impl AssetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Copy => "copy",
            AssetType::Less => "less",
            AssetType::Sass => "sass",
            AssetType::UglifyJs => "uglifyjs",
            AssetType::Rollup => "rollup",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured manifest record
///
/// Fields are optional at this level; [`AssetRecord::task`] enforces which
/// ones each type needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<AssetType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<Environment>,
}

impl AssetRecord {
    pub fn new(kind: AssetType) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = Some(files.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Whether this record takes part in a build for `environment`
    pub fn applies_to(&self, environment: Environment) -> bool {
        self.env.map_or(true, |env| env == environment)
    }

    /// Resolve the typed task, failing if a required field is absent
    pub fn task(&self, destination: &str) -> AssetsResult<AssetTask> {
        let kind = self
            .kind
            .ok_or_else(|| AssetsError::config(destination, "path has no type defined"))?;

        match kind {
            AssetType::Copy => Ok(AssetTask::Copy),
            AssetType::Less => Ok(AssetTask::Less {
                file: self.required_file(destination)?,
            }),
            AssetType::Rollup => Ok(AssetTask::Rollup {
                file: self.required_file(destination)?,
            }),
            AssetType::UglifyJs => match &self.files {
                Some(files) if !files.is_empty() => Ok(AssetTask::UglifyJs {
                    files: files.clone(),
                }),
                _ => Err(AssetsError::config(destination, "no files defined")),
            },
            AssetType::Sass => match (&self.files, &self.file) {
                (Some(files), _) if !files.is_empty() => Ok(AssetTask::Sass {
                    files: files.clone(),
                }),
                (_, Some(file)) if !file.is_empty() => Ok(AssetTask::Sass {
                    files: vec![file.clone()],
                }),
                _ => Err(AssetsError::config(destination, "no file or files defined")),
            },
        }
    }

    fn required_file(&self, destination: &str) -> AssetsResult<String> {
        match &self.file {
            Some(file) if !file.is_empty() => Ok(file.clone()),
            _ => Err(AssetsError::config(destination, "no file defined")),
        }
    }
}

/// Asset specification for one destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSpec {
    /// Bare `"copy"` marker; never filtered by environment
    Copy,
    /// Structured record
    Record(AssetRecord),
}

impl Serialize for AssetSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AssetSpec::Copy => serializer.serialize_str(COPY_MARKER),
            AssetSpec::Record(record) => record.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for AssetSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SpecVisitor;

        impl<'de> Visitor<'de> for SpecVisitor {
            type Value = AssetSpec;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("\"copy\" or an asset table with a `type`")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<AssetSpec, E> {
                if value == COPY_MARKER {
                    Ok(AssetSpec::Copy)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(value), &self))
                }
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<AssetSpec, A::Error> {
                AssetRecord::deserialize(de::value::MapAccessDeserializer::new(map))
                    .map(AssetSpec::Record)
            }
        }

        deserializer.deserialize_any(SpecVisitor)
    }
}

/// Validated, type-specific work for one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetTask {
    Copy,
    Less { file: String },
    /// Each file is compiled independently into the destination directory
    Sass { files: Vec<String> },
    UglifyJs { files: Vec<String> },
    Rollup { file: String },
}

impl AssetTask {
    pub fn asset_type(&self) -> AssetType {
        match self {
            AssetTask::Copy => AssetType::Copy,
            AssetTask::Less { .. } => AssetType::Less,
            AssetTask::Sass { .. } => AssetType::Sass,
            AssetTask::UglifyJs { .. } => AssetType::UglifyJs,
            AssetTask::Rollup { .. } => AssetType::Rollup,
        }
    }
}

/// One destination and its specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub destination: String,
    pub spec: AssetSpec,
}

/// Ordered asset manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, replacing an existing one for the same destination in place
    pub fn insert(&mut self, destination: impl Into<String>, spec: AssetSpec) {
        let destination = destination.into();
        match self.entries.iter_mut().find(|e| e.destination == destination) {
            Some(existing) => existing.spec = spec,
            None => self.entries.push(ManifestEntry { destination, spec }),
        }
    }

    /// Builder-style [`Manifest::insert`]
    pub fn with(mut self, destination: impl Into<String>, spec: AssetSpec) -> Self {
        self.insert(destination, spec);
        self
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn get(&self, destination: &str) -> Option<&AssetSpec> {
        self.entries
            .iter()
            .find(|e| e.destination == destination)
            .map(|e| &e.spec)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check every record up front, regardless of environment
    ///
    /// Dispatch re-derives tasks per build, so this is an early warning for
    /// config loaders rather than a precondition of building.
    pub fn validate(&self) -> AssetsResult<()> {
        for entry in &self.entries {
            AssetPath::new(&entry.destination)
                .map_err(|e| AssetsError::config(&entry.destination, e.to_string()))?;
            if let AssetSpec::Record(record) = &entry.spec {
                record.task(&entry.destination)?;
            }
        }
        Ok(())
    }

    /// Canonical serialization fed into the fingerprint
    pub fn canonical_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl Serialize for Manifest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.destination, &entry.spec)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Manifest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ManifestVisitor;

        impl<'de> Visitor<'de> for ManifestVisitor {
            type Value = Manifest;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of destination paths to asset specifications")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Manifest, A::Error> {
                let mut manifest = Manifest::new();
                while let Some((destination, spec)) = map.next_entry::<String, AssetSpec>()? {
                    if manifest.get(&destination).is_some() {
                        return Err(de::Error::custom(format!(
                            "duplicate destination '{}'",
                            destination
                        )));
                    }
                    manifest.entries.push(ManifestEntry { destination, spec });
                }
                Ok(manifest)
            }
        }

        deserializer.deserialize_map(ManifestVisitor)
    }
}
