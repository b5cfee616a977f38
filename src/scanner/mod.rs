pub mod categories;

pub use categories::FileCategories;

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

use crate::resolver::{classify, extract_dependencies};

/// Filename this tool reserves for its output.
pub const MANIFEST_FILENAME: &str = "fxmanifest.lua";

/// Manifest name used by resources predating fx_version.
pub const LEGACY_MANIFEST_FILENAME: &str = "__resource.lua";

/// True when the base name, case-insensitively, is a manifest this tool (or
/// the legacy resource format) would have produced. Such files are
/// pre-existing output, never input.
pub fn is_reserved_manifest(filename: &str) -> bool {
    let lower = filename.to_lowercase();
    lower == MANIFEST_FILENAME || lower == LEGACY_MANIFEST_FILENAME
}

pub struct ResourceScanner {
    root: PathBuf,
}

impl ResourceScanner {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    pub fn scan(&self) -> FileCategories {
        self.scan_with_observer(|_| {})
    }

    /// Walks the tree and buckets every accepted file. The observer fires
    /// once per accepted file with its root-relative path; it is purely
    /// diagnostic and has no effect on the returned model.
    pub fn scan_with_observer<F>(&self, mut observer: F) -> FileCategories
    where
        F: FnMut(&str),
    {
        let mut categories = FileCategories::new();

        for entry in WalkDir::new(&self.root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let filename = entry.file_name().to_string_lossy();
            if is_reserved_manifest(&filename) {
                debug!("Skipping pre-existing manifest {}", entry.path().display());
                continue;
            }

            let relative = relative_forward_slash(&self.root, entry.path());
            let category = classify(&relative);
            debug!("Classified {} as {:?}", relative, category);

            if category.is_script() {
                // A script that cannot be read keeps its category and simply
                // contributes no dependencies
                match fs::read(entry.path()) {
                    Ok(bytes) => {
                        let text = String::from_utf8_lossy(&bytes);
                        categories.dependencies.extend(extract_dependencies(&text));
                    }
                    Err(e) => {
                        debug!("Could not read {} for dependency scan: {}", relative, e);
                    }
                }
            }

            categories.record(category, &relative);
            observer(&relative);
        }

        categories
    }
}

/// Path relative to the scanned root, joined with forward slashes on every
/// host so manifests stay portable.
fn relative_forward_slash(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
