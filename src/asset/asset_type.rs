use crate::matching::{search_patterns, Pattern};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Suffix of an asset catalog root directory
pub const CATALOG_EXTENSION: &str = "xcassets";
/// Suffix of a multi-resolution image set directory
pub const IMAGE_SET_EXTENSION: &str = "imageset";
/// Suffix of a named color directory
pub const COLOR_SET_EXTENSION: &str = "colorset";
/// Suffix of a data set directory
pub const DATA_SET_EXTENSION: &str = "dataset";
/// Per-container metadata file
pub const MANIFEST_FILE_NAME: &str = "Contents.json";
/// Base name of the metadata file, used to drop it from results
pub const MANIFEST_BASE_NAME: &str = "Contents";

/// Kind of asset declared in a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Image,
    Color,
    Data,
}

/// Recognized extensions per type, checked in enumeration order
const EXTENSIONS: [(AssetType, &[&str]); 3] = [
    (
        AssetType::Image,
        &["png", "jpg", "jpeg", "gif", "pdf", "svg", IMAGE_SET_EXTENSION],
    ),
    (AssetType::Color, &[COLOR_SET_EXTENSION]),
    (AssetType::Data, &["json", DATA_SET_EXTENSION]),
];

impl AssetType {
    pub const ALL: [AssetType; 3] = [AssetType::Image, AssetType::Color, AssetType::Data];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Image => "image",
            AssetType::Color => "color",
            AssetType::Data => "data",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AssetType::Image => "Image",
            AssetType::Color => "Color",
            AssetType::Data => "Data",
        }
    }

    /// File extensions that identify this type
    pub fn extensions(&self) -> &'static [&'static str] {
        EXTENSIONS
            .iter()
            .find(|(asset_type, _)| asset_type == self)
            .map(|(_, extensions)| *extensions)
            .unwrap_or(&[])
    }

    /// First type (in enumeration order) that registers `extension`
    pub fn from_extension(extension: &str) -> Option<Self> {
        let extension = extension.to_lowercase();
        EXTENSIONS
            .iter()
            .find(|(_, extensions)| extensions.contains(&extension.as_str()))
            .map(|(asset_type, _)| *asset_type)
    }

    /// Candidate reference patterns for an asset of this type
    pub fn search_patterns(&self, asset_name: &str) -> Vec<Pattern> {
        search_patterns(*self, asset_name)
    }
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "image" => Ok(AssetType::Image),
            "color" => Ok(AssetType::Color),
            "data" => Ok(AssetType::Data),
            other => Err(format!("unknown asset type '{}' (expected image, color or data)", other)),
        }
    }
}

/// Infer the type of a file found inside a catalog.
///
/// Files inside an image set or color set take the type of their set.
/// Anything else is matched by extension, falling back to `Data`.
pub fn determine_asset_type(path: &Path) -> AssetType {
    let extension = lowercase_extension(path);
    let parent_extension = path.parent().map(lowercase_extension).unwrap_or_default();
    let path_str = path.to_string_lossy();

    if path_str.contains(&format!(".{}/", IMAGE_SET_EXTENSION))
        || parent_extension == IMAGE_SET_EXTENSION
    {
        return AssetType::Image;
    }
    if path_str.contains(&format!(".{}/", COLOR_SET_EXTENSION))
        || parent_extension == COLOR_SET_EXTENSION
    {
        return AssetType::Color;
    }

    AssetType::from_extension(&extension).unwrap_or(AssetType::Data)
}

fn lowercase_extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default()
}
