//! Veil map and fixture file loading

use crate::config::LoadError;
use crate::domain::{Document, VeilMap, VeilMapPatch};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load an arbitrary JSON object from `path`.
pub fn load_document(path: &Path) -> Result<Document, LoadError> {
    let content = read_file(path)?;
    let document = parse_document(&content, path)?;
    tracing::debug!(path = %path.display(), keys = document.len(), "Loaded fixture document");
    Ok(document)
}

/// Decode already-read text as a JSON object. `path` only labels errors.
pub fn parse_document(content: &str, path: &Path) -> Result<Document, LoadError> {
    serde_json::from_str(content)
        .map_err(|source| LoadError::Malformed { path: path.to_path_buf(), source })
}

/// Load a veil map from `path`, starting from an empty map.
pub fn load_map(path: &Path) -> Result<VeilMap, LoadError> {
    load_map_into(path, VeilMap::default())
}

/// Load a veil map from `path` over `base`.
///
/// Lists present in the file replace the ones in `base`; absent or `null`
/// lists keep their `base` value. Unknown keys are ignored.
pub fn load_map_into(path: &Path, base: VeilMap) -> Result<VeilMap, LoadError> {
    let content = read_file(path)?;
    let map = parse_map(&content, path, base)?;
    tracing::debug!(
        path = %path.display(),
        deidentify = map.deidentify.len(),
        timeshift = map.timeshift.len(),
        "Loaded veil map"
    );
    Ok(map)
}

/// Decode already-read text as a veil map over `base`.
///
/// `.yml`/`.yaml` paths are decoded as YAML; everything else as JSON. An
/// empty YAML document names no lists and returns `base` unchanged, while
/// empty JSON is malformed.
pub fn parse_map(content: &str, path: &Path, base: VeilMap) -> Result<VeilMap, LoadError> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let patch: VeilMapPatch = match ext.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(content)
            .map_err(|source| LoadError::MalformedYaml { path: path.to_path_buf(), source })?,
        _ => serde_json::from_str(content)
            .map_err(|source| LoadError::Malformed { path: path.to_path_buf(), source })?,
    };

    Ok(base.apply(patch))
}

fn read_file(path: &Path) -> Result<String, LoadError> {
    let mut file =
        File::open(path).map_err(|source| LoadError::Open { path: path.to_path_buf(), source })?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|source| LoadError::Read { path: path.to_path_buf(), source })?;

    Ok(content)
}
