use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{FxgenError, Result};
use crate::scanner::{FileCategories, MANIFEST_FILENAME};

/// Renders a scanned resource into fxmanifest.lua form. Formatting is
/// identical whether the target is the output file or a dry-run stream.
pub struct ManifestGenerator {
    resource_name: String,
}

impl ManifestGenerator {
    pub fn new(resource_name: &str) -> Self {
        Self {
            resource_name: resource_name.to_string(),
        }
    }

    /// Writes the manifest document: fixed header, one line per declared
    /// dependency, then the non-empty script and asset blocks in fixed
    /// order. Every path sequence is sorted before emission so reruns over
    /// an unmodified tree are byte-identical.
    pub fn render<W: Write>(&self, categories: &FileCategories, writer: &mut W) -> io::Result<()> {
        let shared = sorted(&categories.shared_scripts);
        let client = sorted(&categories.client_scripts);
        let server = sorted(&categories.server_scripts);
        let ui_pages = sorted(&categories.ui_pages);
        let files = sorted(&categories.files);

        writeln!(writer, "fx_version 'cerulean'")?;
        writeln!(writer, "game 'gta5'")?;
        writeln!(writer)?;

        writeln!(writer, "author 'Auto-Generated'")?;
        writeln!(writer, "description '{}'", self.resource_name)?;
        writeln!(writer, "version '1.0.0'")?;
        writeln!(writer)?;

        if !categories.dependencies.is_empty() {
            for dependency in &categories.dependencies {
                writeln!(writer, "dependency '{}'", dependency)?;
            }
            writeln!(writer)?;
        }

        let named_blocks: [(&str, &Vec<String>); 4] = [
            ("shared_scripts", &shared),
            ("client_scripts", &client),
            ("server_scripts", &server),
            ("ui_page", &ui_pages),
        ];

        for (key, paths) in named_blocks {
            if !paths.is_empty() {
                write_block(writer, key, paths)?;
                writeln!(writer)?;
            }
        }

        // The files block closes the document without a trailing blank line
        if !files.is_empty() {
            write_block(writer, "files", &files)?;
        }

        Ok(())
    }

    pub fn render_to_string(&self, categories: &FileCategories) -> io::Result<String> {
        let mut buffer = Vec::new();
        self.render(categories, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Creates or truncates `<dir>/fxmanifest.lua` and renders into it.
    /// Any open or write failure surfaces as `ManifestWrite`; no partial
    /// write is ever reported as success.
    pub fn write_to_dir(&self, categories: &FileCategories, dir: &Path) -> Result<PathBuf> {
        let manifest_path = dir.join(MANIFEST_FILENAME);
        let wrap = |e| FxgenError::ManifestWrite(manifest_path.display().to_string(), e);

        let file = File::create(&manifest_path).map_err(wrap)?;
        let mut writer = BufWriter::new(file);

        self.render(categories, &mut writer).map_err(wrap)?;
        writer.flush().map_err(wrap)?;

        Ok(manifest_path)
    }
}

fn write_block<W: Write>(writer: &mut W, key: &str, paths: &[String]) -> io::Result<()> {
    writeln!(writer, "{} {{", key)?;
    for path in paths {
        writeln!(writer, "    '{}',", path)?;
    }
    writeln!(writer, "}}")?;
    Ok(())
}

fn sorted(paths: &[String]) -> Vec<String> {
    let mut sorted = paths.to_vec();
    sorted.sort();
    sorted
}
