//! The embedded table of planet images and its validation.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

/// NASA public-domain planet and exoplanet images, in download order.
pub const PLANET_IMAGES: &[(&str, &str)] = &[
    ("earth.jpg", "https://images.nasa.gov/details-PIA18033"),
    ("mars.jpg", "https://images.nasa.gov/details-PIA24420"),
    ("venus.jpg", "https://images.nasa.gov/details-PIA00271"),
    ("europa.jpg", "https://images.nasa.gov/details-PIA19048"),
    (
        "kepler442b.jpg",
        "https://exoplanets.nasa.gov/system/resources/detail_files/2207_kepler442b_art2.jpg",
    ),
    (
        "teegardensb.jpg",
        "https://exoplanets.nasa.gov/system/resources/detail_files/2534_teegarden_art.jpg",
    ),
    (
        "toi700d.jpg",
        "https://exoplanets.nasa.gov/system/resources/detail_files/2486_toi700d_art.jpg",
    ),
    (
        "proximab.jpg",
        "https://exoplanets.nasa.gov/system/resources/detail_files/2420_proxima_b_art.jpg",
    ),
    (
        "trappist1e.jpg",
        "https://exoplanets.nasa.gov/system/resources/detail_files/2325_trappist1_art.jpg",
    ),
    (
        "kepler186f.jpg",
        "https://exoplanets.nasa.gov/system/resources/detail_files/2287_kepler186f_art.jpg",
    ),
    (
        "k218b.jpg",
        "https://exoplanets.nasa.gov/system/resources/detail_files/2375_k2_18b_art.jpg",
    ),
    (
        "kepler62f.jpg",
        "https://exoplanets.nasa.gov/system/resources/detail_files/2266_kepler62f_art.jpg",
    ),
    (
        "kepler452b.jpg",
        "https://exoplanets.nasa.gov/system/resources/detail_files/2288_kepler452b_art.jpg",
    ),
    (
        "gliese667cc.jpg",
        "https://exoplanets.nasa.gov/system/resources/detail_files/2241_gliese667cc_art.jpg",
    ),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate filename in catalog: {0}")]
    DuplicateFilename(String),
    #[error("filename must be a bare file name: {0:?}")]
    InvalidFilename(String),
}

/// One (filename, source URL) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    pub filename: String,
    pub url: String,
}

impl ImageEntry {
    pub fn new(filename: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            url: url.into(),
        }
    }
}

impl fmt::Display for ImageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <- {}", self.filename, self.url)
    }
}

/// Immutable, ordered set of entries with unique filenames.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<ImageEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<ImageEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !is_bare_file_name(&entry.filename) {
                return Err(CatalogError::InvalidFilename(entry.filename.clone()));
            }
            if !seen.insert(entry.filename.as_str()) {
                return Err(CatalogError::DuplicateFilename(entry.filename.clone()));
            }
        }
        Ok(Self { entries })
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Self, CatalogError> {
        Self::new(
            pairs
                .iter()
                .map(|(filename, url)| ImageEntry::new(*filename, *url))
                .collect(),
        )
    }

    /// The built-in planet table.
    pub fn planets() -> Result<Self, CatalogError> {
        Self::from_pairs(PLANET_IMAGES)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn is_bare_file_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}
