//! Filesystem repository integration tests
//!
//! End-to-end runs over a small project: catalogs, sources, exclusions and
//! deletion of composite containers.

use assetorganizer::asset::{Asset, AssetType};
use assetorganizer::config::Config;
use assetorganizer::error::AssetError;
use assetorganizer::repository::{AssetRepository, FileSystemAssetRepository};
use std::fs;
use std::path::Path;
use std::time::SystemTime;
use tempfile::TempDir;

fn project_dir() -> TempDir {
    tempfile::Builder::new().prefix("assets").tempdir().unwrap()
}

fn write(path: &Path, contents: &[u8]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn build_project(root: &Path) {
    let catalog = root.join("App/Assets.xcassets");
    write(&catalog.join("Contents.json"), b"{}");
    write(&catalog.join("Icon.imageset/Contents.json"), b"{}");
    write(&catalog.join("Icon.imageset/icon.png"), &[0; 200]);
    write(&catalog.join("Icon.imageset/icon@2x.png"), &[0; 400]);
    write(&catalog.join("Primary.colorset/Contents.json"), &[b' '; 100]);
    write(&catalog.join("Primary.colorset/notes.txt"), &[b' '; 50]);
    write(&catalog.join("Unused.imageset/unused.png"), &[0; 10]);

    write(
        &root.join("App/View.swift"),
        b"let icon = UIImage(named: \"Icon\")\nview.tintColor = .primary\n",
    );
    // Vendored code is excluded, so this reference does not count
    write(&root.join("Pods/Lib/Lib.swift"), b"UIImage(named: \"Unused\")");
    write(&root.join("Pods/Lib/Lib.xcassets/Vendor.imageset/v.png"), &[0; 5]);
}

fn repository(root: &Path) -> FileSystemAssetRepository {
    FileSystemAssetRepository::new(root, &Config::default())
}

#[test]
fn test_find_all_assets() {
    let temp = project_dir();
    build_project(temp.path());

    let assets = repository(temp.path()).find_all_assets().unwrap();
    let names: Vec<_> = assets.iter().map(|a| a.name.as_str()).collect();

    assert_eq!(names, vec!["Icon", "Icon", "Primary", "Unused"]);
    assert_eq!(assets[2].asset_type, AssetType::Color);
    assert_eq!(assets[2].size, 150);
}

#[test]
fn test_analyze_asset_usage() {
    let temp = project_dir();
    build_project(temp.path());
    let repo = repository(temp.path());

    let assets = repo.find_all_assets().unwrap();
    let analyzed = repo.analyze_asset_usage(assets).unwrap();

    let view = temp.path().join("App/View.swift");
    for icon in &analyzed[..2] {
        assert!(icon.is_used);
        assert_eq!(icon.usage_details.len(), 1);
        assert_eq!(icon.usage_details[0].file_path, view);
    }
    assert!(analyzed[2].is_used);
    assert!(!analyzed[3].is_used);
}

#[test]
fn test_find_unused_assets() {
    let temp = project_dir();
    build_project(temp.path());

    let unused = repository(temp.path()).find_unused_assets().unwrap();
    assert_eq!(unused.len(), 1);
    assert_eq!(unused[0].name, "Unused");
}

#[test]
fn test_custom_exclusions_apply_to_sources() {
    let temp = project_dir();
    build_project(temp.path());

    let config = Config {
        excluded_directories: vec!["Carthage".to_string()],
        ..Config::default()
    };
    let repo = FileSystemAssetRepository::new(temp.path(), &config);

    // Pods is scanned now: its catalog appears and its reference counts
    let assets = repo.find_all_assets().unwrap();
    assert_eq!(assets.len(), 5);
    let analyzed = repo.analyze_asset_usage(assets).unwrap();
    let unused = analyzed.iter().find(|a| a.name == "Unused").unwrap();
    assert!(unused.is_used);
}

#[test]
fn test_deleting_image_set_members_removes_the_set() {
    let temp = project_dir();
    build_project(temp.path());
    let repo = repository(temp.path());

    let icons: Vec<Asset> = repo
        .find_all_assets()
        .unwrap()
        .into_iter()
        .filter(|a| a.name == "Icon")
        .collect();
    assert_eq!(icons.len(), 2);

    repo.delete_assets(&icons).unwrap();

    let catalog = temp.path().join("App/Assets.xcassets");
    assert!(!catalog.join("Icon.imageset").exists());
    assert!(catalog.join("Primary.colorset").exists());
}

#[test]
fn test_deleting_color_removes_its_set() {
    let temp = project_dir();
    build_project(temp.path());
    let repo = repository(temp.path());

    let primary: Vec<Asset> = repo
        .find_all_assets()
        .unwrap()
        .into_iter()
        .filter(|a| a.asset_type == AssetType::Color)
        .collect();
    repo.delete_assets(&primary).unwrap();

    assert!(!temp.path().join("App/Assets.xcassets/Primary.colorset").exists());
}

#[test]
fn test_deleting_loose_asset_removes_the_file() {
    let temp = project_dir();
    let catalog = temp.path().join("Assets.xcassets");
    write(&catalog.join("config.json"), b"{}");
    let repo = repository(temp.path());

    let assets = repo.find_all_assets().unwrap();
    assert_eq!(assets.len(), 1);
    repo.delete_assets(&assets).unwrap();

    assert!(!catalog.join("config.json").exists());
    assert!(catalog.exists());
}

#[test]
fn test_failed_deletion_reports_the_asset_path() {
    let temp = project_dir();
    let missing = temp.path().join("Assets.xcassets/ghost.png");
    let ghost = Asset::new("ghost", &missing, AssetType::Image, 1, SystemTime::UNIX_EPOCH);

    let err = repository(temp.path()).delete_assets(&[ghost]).unwrap_err();
    match err {
        AssetError::DeletionFailed { path, .. } => assert_eq!(path, missing),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_failed_deletion_stops_the_batch_without_rollback() {
    let temp = project_dir();
    let catalog = temp.path().join("Assets.xcassets");
    write(&catalog.join("a.json"), b"{}");
    write(&catalog.join("c.json"), b"{}");
    let loose = |name: &str| {
        Asset::new(name, catalog.join(format!("{}.json", name)), AssetType::Data, 2, SystemTime::UNIX_EPOCH)
    };

    let err = repository(temp.path())
        .delete_assets(&[loose("a"), loose("b"), loose("c")])
        .unwrap_err();

    match err {
        AssetError::DeletionFailed { path, .. } => assert_eq!(path, catalog.join("b.json")),
        other => panic!("unexpected error: {}", other),
    }
    // Earlier deletions stay done, later ones never run
    assert!(!catalog.join("a.json").exists());
    assert!(catalog.join("c.json").exists());
}

#[test]
fn test_project_without_catalogs() {
    let temp = project_dir();
    write(&temp.path().join("main.swift"), b"print(1)");

    let repo = repository(temp.path());
    assert!(repo.find_all_assets().unwrap().is_empty());
    assert!(repo.find_unused_assets().unwrap().is_empty());
}
