use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{debug, warn};

use super::client::CatalogClient;
use super::record::{parse_line, ShipRecord};

/// Catalog compiled into the binary
pub const BUNDLED_CATALOG: &str = include_str!("../../data/ships.csv");

/// Where the catalog text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Bundled,
    File(PathBuf),
    Url(String),
}

impl CatalogSource {
    /// Interpret a command-line value: `http(s)://` means URL, anything else a path
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None => CatalogSource::Bundled,
            Some(s) if s.starts_with("http://") || s.starts_with("https://") => {
                CatalogSource::Url(s.to_string())
            }
            Some(s) => CatalogSource::File(PathBuf::from(s)),
        }
    }

    fn read_text(&self) -> Result<String> {
        match self {
            CatalogSource::Bundled => Ok(BUNDLED_CATALOG.to_string()),
            CatalogSource::File(path) => {
                let bytes = std::fs::read(path)
                    .with_context(|| format!("Failed to read catalog: {:?}", path))?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            CatalogSource::Url(url) => CatalogClient::new()?.fetch_text(url),
        }
    }
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogSource::Bundled => write!(f, "bundled catalog"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Immutable, file-ordered list of ships
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    ships: Vec<ShipRecord>,
}

impl Catalog {
    pub fn ships(&self) -> &[ShipRecord] {
        &self.ships
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShipRecord> {
        self.ships.iter()
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// First record with the given id
    pub fn find(&self, id: &str) -> Option<&ShipRecord> {
        self.ships.iter().find(|s| s.id == id)
    }

    /// Ids that occur on more than one row, in first-seen order
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for ship in &self.ships {
            let id = ship.id.as_str();
            if !seen.insert(id) && reported.insert(id) {
                duplicates.push(id);
            }
        }
        duplicates
    }
}

impl From<Vec<ShipRecord>> for Catalog {
    fn from(ships: Vec<ShipRecord>) -> Self {
        Self { ships }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ShipRecord;
    type IntoIter = std::slice::Iter<'a, ShipRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.ships.iter()
    }
}

/// Parse catalog text. Rows with too few columns are dropped.
pub fn parse_catalog(text: &str) -> Catalog {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut ships = Vec::new();

    for (line_no, line) in text.trim().split('\n').enumerate() {
        match parse_line(line) {
            Some(ship) => ships.push(ship),
            None => debug!(line = line_no + 1, "dropping catalog row with too few columns"),
        }
    }

    let catalog = Catalog { ships };
    for id in catalog.duplicate_ids() {
        warn!(id, "ship id appears on more than one catalog row");
    }
    catalog
}

/// Load the catalog from a source. Never fails: an unreadable source gives an empty catalog.
pub fn load_catalog(source: &CatalogSource) -> Catalog {
    match source.read_text() {
        Ok(text) => parse_catalog(&text),
        Err(e) => {
            warn!(source = %source, error = %format!("{:#}", e), "catalog unavailable, starting empty");
            Catalog::default()
        }
    }
}
