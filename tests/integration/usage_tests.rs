//! Usage resolution integration tests

use assetorganizer::analysis::UsageResolver;
use assetorganizer::asset::{Asset, AssetType};
use assetorganizer::discovery::SourceFile;
use assetorganizer::matching::{Pattern, PatternMatching};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::SystemTime;

fn asset(name: &str, asset_type: AssetType) -> Asset {
    let dir = match asset_type {
        AssetType::Image => "imageset",
        AssetType::Color => "colorset",
        AssetType::Data => "dataset",
    };
    Asset::new(
        name,
        format!("/proj/Assets.xcassets/{}.{}/Contents.json", name, dir),
        asset_type,
        10,
        SystemTime::UNIX_EPOCH,
    )
}

fn source(path: &str, contents: &str) -> SourceFile {
    SourceFile::new(path, contents)
}

#[test]
fn test_symbol_reference_marks_color_used() {
    let sources = vec![source(
        "/proj/Theme.swift",
        "view.backgroundColor = .primaryColor\nlabel.textColor = .primaryColorExtra\n",
    )];
    let assets = vec![
        asset("PrimaryColor", AssetType::Color),
        asset("primaryColorExtra", AssetType::Color),
        asset("Secondary", AssetType::Color),
    ];

    let resolved = UsageResolver::new().resolve(assets, &sources);

    assert!(resolved[0].is_used);
    assert_eq!(resolved[0].total_usage_count(), 1);
    assert!(resolved[1].is_used);
    assert!(!resolved[2].is_used);
    assert!(resolved[2].usage_details.is_empty());
}

#[test]
fn test_longer_identifier_does_not_count() {
    let sources = vec![source("/proj/A.swift", "let c = Color.primaryColorExtra")];
    let resolved = UsageResolver::new().resolve(vec![asset("PrimaryColor", AssetType::Color)], &sources);
    assert!(!resolved[0].is_used);
}

#[test]
fn test_occurrences_sum_over_patterns() {
    // `UIImage(named: "Icon")` also contains `"Icon"` and `named: "Icon"`
    let sources = vec![
        source("/proj/A.swift", "let a = UIImage(named: \"Icon\")\n"),
        source("/proj/B.swift", "Image(\"Icon\")\n"),
        source("/proj/C.m", "[UIImage imageNamed:@\"Other\"];\n"),
    ];

    let resolved = UsageResolver::new().resolve(vec![asset("Icon", AssetType::Image)], &sources);
    let icon = &resolved[0];

    assert!(icon.is_used);
    assert_eq!(icon.usage_details.len(), 2);
    assert_eq!(icon.usage_details[0].file_path.to_str(), Some("/proj/A.swift"));
    assert_eq!(icon.usage_details[0].occurrences, 3);
    assert_eq!(icon.usage_details[1].file_path.to_str(), Some("/proj/B.swift"));
    // `Image("Icon")`, the bare `Image("` prefix and `"Icon"`
    assert_eq!(icon.usage_details[1].occurrences, 3);
    assert_eq!(icon.total_usage_count(), 6);
}

#[test]
fn test_any_swiftui_initializer_counts_once() {
    let sources = vec![source(
        "/proj/Card.swift",
        "Image(\"other\")\n    .foregroundColor(Color(\"accent\"))\n",
    )];
    let resolved = UsageResolver::new().resolve(
        vec![asset("logo", AssetType::Image), asset("Brand", AssetType::Color)],
        &sources,
    );

    for asset in &resolved {
        assert!(asset.is_used, "{} should be used", asset.name);
        assert_eq!(asset.total_usage_count(), 1);
    }
}

#[test]
fn test_dots_are_stripped_before_matching() {
    let sources = vec![source("/proj/Data.swift", "NSDataAsset(name: \"levelsv2\")")];
    let resolved = UsageResolver::new().resolve(vec![asset("levels.v2", AssetType::Data)], &sources);
    assert!(resolved[0].is_used);
    assert_eq!(resolved[0].name, "levels.v2");
}

#[test]
fn test_data_assets_ignore_symbols() {
    let sources = vec![source("/proj/A.swift", "let x = .config\n")];
    let resolved = UsageResolver::new().resolve(vec![asset("config", AssetType::Data)], &sources);
    assert!(!resolved[0].is_used);
}

#[test]
fn test_storyboard_attribute_reference() {
    let sources = vec![source(
        "/proj/Main.storyboard",
        "<imageView image=\"Logo\" />\n<color name=\"Brand\" />",
    )];
    let resolved = UsageResolver::new().resolve(
        vec![asset("Logo", AssetType::Image), asset("Brand", AssetType::Color)],
        &sources,
    );
    // image="Logo" and "Logo"
    assert_eq!(resolved[0].total_usage_count(), 2);
    // only the bare "Brand"
    assert_eq!(resolved[1].total_usage_count(), 1);
}

#[test]
fn test_no_sources_means_nothing_used() {
    let resolved = UsageResolver::new().resolve(vec![asset("Icon", AssetType::Image)], &[]);
    assert!(!resolved[0].is_used);
}

#[test]
fn test_parallel_and_sequential_agree() {
    let sources: Vec<SourceFile> = (0..20)
        .map(|i| {
            source(
                &format!("/proj/File{}.swift", i),
                &format!("UIImage(named: \"icon-{}\")\nview.tint = .accent{}\n", i % 7, i % 5),
            )
        })
        .collect();
    let assets: Vec<Asset> = (0..10)
        .flat_map(|i| {
            vec![
                asset(&format!("icon-{}", i), AssetType::Image),
                asset(&format!("Accent{}", i), AssetType::Color),
            ]
        })
        .collect();

    let sequential = UsageResolver::new()
        .with_parallel(false)
        .resolve(assets.clone(), &sources);
    let parallel = UsageResolver::new()
        .with_parallel(true)
        .resolve(assets, &sources);

    assert_eq!(sequential.len(), parallel.len());
    for (a, b) in sequential.iter().zip(&parallel) {
        assert_eq!(a.path, b.path);
        assert_eq!(a.is_used, b.is_used);
        assert_eq!(a.usage_details, b.usage_details);
    }
    assert!(sequential.iter().any(|a| a.is_used));
    assert!(sequential.iter().any(|a| !a.is_used));
}

/// Matcher that counts one hit per call and logs how often it was asked
struct CountingMatcher {
    calls: Arc<AtomicUsize>,
}

impl PatternMatching for CountingMatcher {
    fn count_matches(&self, pattern: &Pattern, _text: &str) -> usize {
        self.calls.fetch_add(1, Ordering::SeqCst);
        usize::from(!pattern.is_regex())
    }
}

#[test]
fn test_resolver_asks_matcher_for_every_pattern_and_source() {
    let calls = Arc::new(AtomicUsize::new(0));
    let resolver = UsageResolver::with_matcher(Box::new(CountingMatcher {
        calls: Arc::clone(&calls),
    }))
    .with_parallel(false);

    let sources = vec![source("/a.swift", ""), source("/b.swift", "")];
    let resolved = resolver.resolve(vec![asset("config", AssetType::Data)], &sources);

    // Data assets have exactly one pattern
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(resolved[0].usage_details.len(), 2);
    assert_eq!(resolved[0].total_usage_count(), 2);
}
