//! Writes the OpenAPI document to disk.
//!
//! The document comes from the first [`SchemaSource`] in the chain that
//! builds successfully. Any file already at the output path is rotated to
//! `<path>.backup` before the new one is written.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use serde_json::{Map, Value};

use crate::config::DEFAULT_PORT;
use crate::docs;

pub const BACKUP_SUFFIX: &str = ".backup";

/// One step of the fallback chain.
#[derive(Clone, Copy)]
pub struct SchemaSource {
    pub name: &'static str,
    pub build: fn() -> anyhow::Result<utoipa::openapi::OpenApi>,
}

impl SchemaSource {
    pub const fn new(name: &'static str, build: fn() -> anyhow::Result<utoipa::openapi::OpenApi>) -> Self {
        Self { name, build }
    }
}

/// Full document first, then the reduced greeting/health document.
pub fn default_sources() -> Vec<SchemaSource> {
    vec![
        SchemaSource::new("full", || docs::build_openapi(DEFAULT_PORT)),
        SchemaSource::new("minimal", docs::build_minimal_openapi),
    ]
}

#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("no schema source produced a usable document (tried: {tried})")]
    NoSchema { tried: String },
    #[error("failed to serialize OpenAPI document from `{source_name}`: {error}")]
    Schema { source_name: &'static str, error: serde_json::Error },
    #[error("failed to create directory {path}: {error}")]
    CreateDir { path: PathBuf, error: io::Error },
    #[error("failed to move {from} to {to}: {error}")]
    Backup { from: PathBuf, to: PathBuf, error: io::Error },
    #[error("failed to render JSON: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write {path}: {error}")]
    Write { path: PathBuf, error: io::Error },
    #[error("export cancelled before {stage}")]
    Cancelled { stage: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub path: PathBuf,
    pub backup: Option<PathBuf>,
    pub bytes: u64,
    pub paths: usize,
    pub source: &'static str,
}

pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Walk the chain and return the first document with at least one path.
pub fn resolve_schema(sources: &[SchemaSource]) -> Result<(&'static str, Value), ExportError> {
    for source in sources {
        tracing::info!(source = source.name, "building OpenAPI document");

        let doc = match (source.build)() {
            Ok(doc) => doc,
            Err(err) => {
                tracing::warn!(source = source.name, error = %err, "schema source failed, trying next");
                continue;
            }
        };

        let value = serde_json::to_value(&doc).map_err(|error| ExportError::Schema {
            source_name: source.name,
            error,
        })?;

        if docs::path_count(&value) == 0 {
            tracing::warn!(source = source.name, "schema source produced no paths, trying next");
            continue;
        }

        return Ok((source.name, value));
    }

    let tried = sources.iter().map(|source| source.name).collect::<Vec<_>>().join(", ");
    Err(ExportError::NoSchema { tried })
}

pub fn export_openapi(sources: &[SchemaSource], path: &Path) -> Result<ExportReport, ExportError> {
    export_openapi_cancellable(sources, path, &AtomicBool::new(false))
}

/// Same as [`export_openapi`], but stops before touching the file system
/// again once `cancel` is set. The previous document is left in place
/// unless the rotation already happened.
pub fn export_openapi_cancellable(
    sources: &[SchemaSource],
    path: &Path,
    cancel: &AtomicBool,
) -> Result<ExportReport, ExportError> {
    let (source, doc) = resolve_schema(sources)?;

    check_cancel(cancel, "rotating the previous document")?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|error| ExportError::CreateDir {
            path: parent.to_path_buf(),
            error,
        })?;
    }

    let backup = if path.exists() {
        let to = backup_path(path);
        if to.exists() {
            fs::remove_file(&to).map_err(|error| ExportError::Backup {
                from: path.to_path_buf(),
                to: to.clone(),
                error,
            })?;
        }
        fs::rename(path, &to).map_err(|error| ExportError::Backup {
            from: path.to_path_buf(),
            to: to.clone(),
            error,
        })?;
        tracing::info!(backup = %to.display(), "rotated previous document");
        Some(to)
    } else {
        None
    };

    let paths = docs::path_count(&doc);
    let mut rendered = serde_json::to_string_pretty(&sort_keys(doc))?;
    rendered.push('\n');

    check_cancel(cancel, "writing the new document")?;

    fs::write(path, rendered.as_bytes()).map_err(|error| ExportError::Write {
        path: path.to_path_buf(),
        error,
    })?;

    Ok(ExportReport {
        path: path.to_path_buf(),
        backup,
        bytes: rendered.len() as u64,
        paths,
        source,
    })
}

fn check_cancel(cancel: &AtomicBool, stage: &'static str) -> Result<(), ExportError> {
    if cancel.load(Ordering::SeqCst) {
        return Err(ExportError::Cancelled { stage });
    }
    Ok(())
}

/// Rebuild every object with its keys in lexicographic order, regardless of
/// how `serde_json::Map` orders entries in this build.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let mut sorted = Map::new();
            for (key, value) in entries {
                sorted.insert(key, sort_keys(value));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn sort_keys_orders_nested_objects() {
        let sorted = sort_keys(json!({"b": {"z": 1, "a": [{"y": 1, "x": 2}]}, "a": 0}));
        let rendered = serde_json::to_string(&sorted).unwrap();
        assert_eq!(rendered, r#"{"a":0,"b":{"a":[{"x":2,"y":1}],"z":1}}"#);
    }

    #[test]
    fn backup_path_appends_suffix() {
        assert_eq!(
            backup_path(Path::new("docs/openapi_lite.json")),
            PathBuf::from("docs/openapi_lite.json.backup")
        );
    }

    #[test]
    fn failing_source_falls_through_to_next() {
        let sources = [
            SchemaSource::new("broken", || anyhow::bail!("cannot build")),
            SchemaSource::new("minimal", docs::build_minimal_openapi),
        ];
        let (name, doc) = resolve_schema(&sources).unwrap();
        assert_eq!(name, "minimal");
        assert_eq!(docs::path_count(&doc), 3);
    }

    #[test]
    fn exhausted_chain_lists_every_source() {
        let sources = [
            SchemaSource::new("first", || anyhow::bail!("nope")),
            SchemaSource::new("second", || anyhow::bail!("still nope")),
        ];
        match resolve_schema(&sources).unwrap_err() {
            ExportError::NoSchema { tried } => assert_eq!(tried, "first, second"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
