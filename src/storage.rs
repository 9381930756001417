//
// storage.rs
// Dicom-Iod-rs
//
// Upload directory for the web server: content-hashed names, sanitized stems and
// lookups confined to the store root.
//
// Dicom-Iod-rs contributors - October 2026

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use sha2::{Digest, Sha256};

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create upload directory {}", root.display()))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Stores `bytes` as `<stem>-<hash prefix>.dcm` and returns the stored name.
    pub fn save(&self, original_name: Option<&str>, bytes: &[u8]) -> Result<String> {
        let hash = hex::encode(Sha256::digest(bytes));
        let filename = format!("{}-{}.dcm", safe_stem(original_name), &hash[..12]);
        fs::write(self.root.join(&filename), bytes).context("Failed to persist uploaded file")?;
        Ok(filename)
    }

    /// Canonical path of a stored file; names escaping the root are rejected.
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        let canonical_root = self
            .root
            .canonicalize()
            .unwrap_or_else(|_| self.root.clone());
        let canonical = self
            .root
            .join(name)
            .canonicalize()
            .with_context(|| format!("Stored file {} not found", name))?;
        if !canonical.starts_with(&canonical_root) {
            bail!("Attempt to access file outside storage root");
        }
        Ok(canonical)
    }

    /// Name and path for a file derived from `source_name`, e.g. `scan-1a2b-overlays.dcm`.
    pub fn derived_path(&self, source_name: &str, suffix: &str) -> (String, PathBuf) {
        let filename = format!("{}-{}.dcm", safe_stem(Some(source_name)), suffix);
        let path = self.root.join(&filename);
        (filename, path)
    }
}

fn safe_stem(name: Option<&str>) -> String {
    name.and_then(|n| Path::new(n).file_stem())
        .and_then(|s| s.to_str())
        .map(sanitize_filename)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "dicom".to_string())
}

fn sanitize_filename(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sanitize_strips_dangerous_characters() {
        assert_eq!(sanitize_filename("../weird name 123.dcm"), "weirdname123dcm");
        assert_eq!(safe_stem(Some("../../")), "dicom");
        assert_eq!(safe_stem(None), "dicom");
    }

    #[test]
    fn same_content_gets_same_name() {
        let root = tempdir().expect("tmpdir");
        let store = FileStore::new(root.path()).expect("store");
        let first = store.save(Some("mammo 01.dcm"), b"DICM").expect("save");
        let second = store.save(Some("mammo 01.dcm"), b"DICM").expect("save");
        assert_eq!(first, second);
        assert!(first.starts_with("mammo01-"));
        let (derived, path) = store.derived_path(&first, "overlays");
        assert_eq!(derived, format!("{}-overlays.dcm", first.trim_end_matches(".dcm")));
        assert_eq!(path, root.path().join(&derived));
    }

    #[test]
    fn resolve_rejects_paths_outside_root() {
        let root = tempdir().expect("tmpdir");
        let store_root = root.path().join("uploads");
        let store = FileStore::new(&store_root).expect("store");
        fs::write(root.path().join("escape.dcm"), b"attack").expect("write outside file");

        assert!(store.resolve("../escape.dcm").is_err());
        assert!(store.resolve("missing.dcm").is_err());

        let saved = store.save(Some("patient^file.dcm"), b"abc").expect("save");
        let resolved = store.resolve(&saved).expect("resolve saved");
        assert!(resolved.starts_with(store_root.canonicalize().expect("canonical root")));
    }
}
