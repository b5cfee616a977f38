use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    /// Lua loaded on the game client
    ClientScript,
    /// Lua loaded on the server
    ServerScript,
    /// Lua loaded on both sides
    SharedScript,
    /// HTML page served through NUI
    UiPage,
    /// Static asset shipped with the resource
    Asset,
    /// Contributes nothing to the manifest
    Ignore,
}

impl FileCategory {
    /// Script categories additionally get their contents scanned for
    /// dependency declarations.
    pub fn is_script(self) -> bool {
        matches!(
            self,
            FileCategory::ClientScript | FileCategory::ServerScript | FileCategory::SharedScript
        )
    }
}

// Lazy static regexes for performance
static SCRIPT_EXT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\.lua$").unwrap()
});

static MARKUP_EXT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\.html$").unwrap()
});

static ASSET_EXT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\.(js|css|png|jpg|jpeg|gif|svg|ttf|woff|woff2|otf|eot|json|ogg|mp3|wav)$").unwrap()
});

// Execution-context markers, checked over the whole relative path so a
// directory name like client/ marks everything under it. First match wins;
// unmarked scripts fall through to the shared default.
static CONTEXT_MARKERS: Lazy<Vec<(Regex, FileCategory)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"client|cl_").unwrap(), FileCategory::ClientScript),
        (Regex::new(r"server|sv_").unwrap(), FileCategory::ServerScript),
        (Regex::new(r"shared|sh_").unwrap(), FileCategory::SharedScript),
    ]
});

/// Buckets a root-relative path by naming convention. Matching is
/// case-insensitive; the caller stores the path in its original case.
pub fn classify(relative_path: &str) -> FileCategory {
    let lower = relative_path.to_lowercase();

    if SCRIPT_EXT_REGEX.is_match(&lower) {
        for (marker, category) in CONTEXT_MARKERS.iter() {
            if marker.is_match(&lower) {
                return *category;
            }
        }
        return FileCategory::SharedScript;
    }

    if MARKUP_EXT_REGEX.is_match(&lower) {
        return FileCategory::UiPage;
    }

    if ASSET_EXT_REGEX.is_match(&lower) {
        return FileCategory::Asset;
    }

    FileCategory::Ignore
}
