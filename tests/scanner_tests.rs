use std::fs;
use std::path::Path;

use tempfile::TempDir;

use fxgen::scanner::ResourceScanner;

fn write_file(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

#[test]
fn test_scan_buckets_discovered_files() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "client/main.lua", "print('client')");
    write_file(temp.path(), "server/sv_init.lua", "dependency 'oxmysql'");
    write_file(temp.path(), "shared/sh_utils.lua", "local utils = {}");
    write_file(temp.path(), "html/ui.html", "<html></html>");
    write_file(temp.path(), "html/app.js", "console.log('ui')");
    write_file(temp.path(), "README.md", "# demo");

    let categories = ResourceScanner::new(temp.path()).scan();

    assert_eq!(categories.client_scripts, vec!["client/main.lua"]);
    assert_eq!(categories.server_scripts, vec!["server/sv_init.lua"]);
    assert_eq!(categories.shared_scripts, vec!["shared/sh_utils.lua"]);
    assert_eq!(categories.ui_pages, vec!["html/ui.html"]);

    let mut files = categories.files.clone();
    files.sort();
    assert_eq!(files, vec!["html/app.js", "html/ui.html"]);

    assert_eq!(categories.dependencies.len(), 1);
    assert!(categories.dependencies.contains("oxmysql"));
}

#[test]
fn test_relative_paths_survive_nesting() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "modules/banking/client/cl_atm.lua", "");

    let categories = ResourceScanner::new(temp.path()).scan();

    assert_eq!(categories.client_scripts, vec!["modules/banking/client/cl_atm.lua"]);
}

#[test]
fn test_existing_manifests_are_excluded() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "FXManifest.lua", "dependency 'should_not_appear'");
    write_file(temp.path(), "__resource.lua", "dependency 'legacy_ghost'");
    write_file(temp.path(), "sv_main.lua", "");

    let categories = ResourceScanner::new(temp.path()).scan();

    // Manifests land in no bucket and contribute no dependencies, even
    // though they carry a script extension
    assert_eq!(categories.server_scripts, vec!["sv_main.lua"]);
    assert!(categories.client_scripts.is_empty());
    assert!(categories.shared_scripts.is_empty());
    assert!(categories.dependencies.is_empty());
}

#[test]
fn test_scan_of_manifest_only_tree_is_empty() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "fxmanifest.lua", "fx_version 'cerulean'");

    let categories = ResourceScanner::new(temp.path()).scan();

    assert!(categories.client_scripts.is_empty());
    assert!(categories.server_scripts.is_empty());
    assert!(categories.shared_scripts.is_empty());
    assert!(categories.files.is_empty());
    assert!(categories.ui_pages.is_empty());
    assert!(categories.dependencies.is_empty());
}

#[test]
fn test_dependencies_deduplicated_across_files() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "sv_one.lua", "dependency 'oxmysql'\ndependency 'es_extended'");
    write_file(temp.path(), "sv_two.lua", "dependency 'oxmysql'");
    write_file(temp.path(), "cl_three.lua", "dependency 'OxMySQL'");

    let categories = ResourceScanner::new(temp.path()).scan();

    let dependencies: Vec<&str> = categories.dependencies.iter().map(|d| d.as_str()).collect();
    assert_eq!(dependencies, vec!["es_extended", "oxmysql"]);
}

#[test]
fn test_non_script_contents_are_not_scanned() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "data/items.json", "{\"dependency\": \"'sneaky'\"}");
    write_file(temp.path(), "notes.txt", "dependency 'ignored'");

    let categories = ResourceScanner::new(temp.path()).scan();

    assert_eq!(categories.files, vec!["data/items.json"]);
    assert!(categories.dependencies.is_empty());
}

#[test]
fn test_observer_fires_for_every_accepted_file() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "fxmanifest.lua", "");
    write_file(temp.path(), "client/main.lua", "");
    write_file(temp.path(), "README.md", "");

    let mut seen = Vec::new();
    ResourceScanner::new(temp.path()).scan_with_observer(|relative| {
        seen.push(relative.to_string());
    });

    seen.sort();
    // Ignored extensions are still observed; pre-existing manifests are not
    assert_eq!(seen, vec!["README.md", "client/main.lua"]);
}

#[test]
fn test_original_case_is_preserved() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "Client/Main.lua", "");

    let categories = ResourceScanner::new(temp.path()).scan();

    assert_eq!(categories.client_scripts, vec!["Client/Main.lua"]);
}

#[test]
fn test_non_utf8_script_still_scans() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("sv_blob.lua");
    let mut bytes = b"dependency 'oxmysql'\n".to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe, 0x00]);
    fs::write(&path, bytes).unwrap();

    let categories = ResourceScanner::new(temp.path()).scan();

    assert_eq!(categories.server_scripts, vec!["sv_blob.lua"]);
    assert!(categories.dependencies.contains("oxmysql"));
}

#[cfg(unix)]
#[test]
fn test_unreadable_script_keeps_its_category() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let path = temp.path().join("sv_locked.lua");
    fs::write(&path, "dependency 'hidden'").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).unwrap();

    // Root ignores permission bits; only assert the soft-fail contract when
    // the read actually fails
    if fs::read(&path).is_ok() {
        return;
    }

    let categories = ResourceScanner::new(temp.path()).scan();

    assert_eq!(categories.server_scripts, vec!["sv_locked.lua"]);
    assert!(categories.dependencies.is_empty());
}
