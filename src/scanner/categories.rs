use std::collections::BTreeSet;

use crate::resolver::FileCategory;

/// Aggregate produced by one scan: every accepted file bucketed by the
/// manifest key it renders under, plus the dependency names declared across
/// all scripts. Bucket order is insertion order; the renderer sorts.
#[derive(Debug, Clone, Default)]
pub struct FileCategories {
    pub client_scripts: Vec<String>,
    pub server_scripts: Vec<String>,
    pub shared_scripts: Vec<String>,
    pub files: Vec<String>,
    pub ui_pages: Vec<String>,
    pub dependencies: BTreeSet<String>,
}

impl FileCategories {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files the path under its category's bucket. HTML pages land in both
    /// `ui_pages` and `files` because they render under two manifest keys;
    /// `Ignore` drops the path entirely.
    pub fn record(&mut self, category: FileCategory, relative_path: &str) {
        match category {
            FileCategory::ClientScript => self.client_scripts.push(relative_path.to_string()),
            FileCategory::ServerScript => self.server_scripts.push(relative_path.to_string()),
            FileCategory::SharedScript => self.shared_scripts.push(relative_path.to_string()),
            FileCategory::UiPage => {
                self.ui_pages.push(relative_path.to_string());
                self.files.push(relative_path.to_string());
            }
            FileCategory::Asset => self.files.push(relative_path.to_string()),
            FileCategory::Ignore => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_page_recorded_in_both_buckets() {
        let mut categories = FileCategories::new();
        categories.record(FileCategory::UiPage, "html/ui.html");

        assert_eq!(categories.ui_pages, vec!["html/ui.html"]);
        assert_eq!(categories.files, vec!["html/ui.html"]);
    }

    #[test]
    fn test_ignore_records_nothing() {
        let mut categories = FileCategories::new();
        categories.record(FileCategory::Ignore, "README.md");

        assert!(categories.client_scripts.is_empty());
        assert!(categories.server_scripts.is_empty());
        assert!(categories.shared_scripts.is_empty());
        assert!(categories.files.is_empty());
        assert!(categories.ui_pages.is_empty());
    }
}
