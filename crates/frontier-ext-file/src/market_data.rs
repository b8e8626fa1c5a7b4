//! File-based and in-memory price history sources.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use serde::Deserialize;
use tracing::debug;

use frontier_traits::error::TraitError;
use frontier_traits::ids::AssetId;
use frontier_traits::market_data::{PriceHistory, PriceHistorySource, PricePoint};

// =============================================================================
// CSV PRICE SOURCE
// =============================================================================

/// CSV record for daily closes.
#[derive(Debug, Deserialize)]
struct PriceRecord {
    date: NaiveDate,
    asset: String,
    close: f64,
}

/// CSV-based price source.
///
/// The file is in long format with a `date,asset,close` header, one row per
/// asset per trading day. Dates are `YYYY-MM-DD`. Rows may come in any
/// order.
pub struct CsvPriceSource {
    file_path: PathBuf,
    histories: DashMap<AssetId, PriceHistory>,
}

impl CsvPriceSource {
    /// Create a new CSV price source.
    ///
    /// A missing file yields an empty source.
    pub fn new(file_path: impl AsRef<Path>) -> Result<Self, TraitError> {
        let source = Self {
            file_path: file_path.as_ref().to_path_buf(),
            histories: DashMap::new(),
        };
        source.reload()?;
        Ok(source)
    }

    /// Path of the backing file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Reload prices from file, replacing the current contents.
    pub fn reload(&self) -> Result<(), TraitError> {
        if !self.file_path.exists() {
            self.histories.clear();
            return Ok(()); // Empty source
        }

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&self.file_path)
            .map_err(|e| TraitError::IoError(e.to_string()))?;

        let mut grouped: HashMap<AssetId, Vec<PricePoint>> = HashMap::new();
        for result in reader.deserialize() {
            let record: PriceRecord = result.map_err(|e| TraitError::ParseError(e.to_string()))?;
            if !record.close.is_finite() || record.close <= 0.0 {
                return Err(TraitError::ParseError(format!(
                    "{} on {}: close must be positive, got {}",
                    record.asset, record.date, record.close
                )));
            }
            grouped
                .entry(AssetId::new(&record.asset))
                .or_default()
                .push(PricePoint::new(record.date, record.close));
        }

        self.histories.clear();
        for (asset, points) in grouped {
            debug!(asset = %asset, rows = points.len(), "loaded price history");
            self.histories
                .insert(asset.clone(), PriceHistory::new(asset, points));
        }

        Ok(())
    }

    /// Number of assets loaded.
    pub fn len(&self) -> usize {
        self.histories.len()
    }

    /// True when no prices are loaded.
    pub fn is_empty(&self) -> bool {
        self.histories.is_empty()
    }
}

#[async_trait]
impl PriceHistorySource for CsvPriceSource {
    async fn history(&self, asset: &AssetId) -> Result<PriceHistory, TraitError> {
        lookup(&self.histories, asset)
    }

    async fn available_assets(&self) -> Result<Vec<AssetId>, TraitError> {
        Ok(sorted_keys(&self.histories))
    }
}

// =============================================================================
// IN-MEMORY PRICE SOURCE
// =============================================================================

/// Price source populated in code.
#[derive(Default)]
pub struct InMemoryPriceSource {
    histories: DashMap<AssetId, PriceHistory>,
}

impl InMemoryPriceSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the history of an asset.
    pub fn insert(&self, history: PriceHistory) {
        self.histories.insert(history.asset.clone(), history);
    }

    /// Insert or replace an asset's closes.
    pub fn insert_points(&self, asset: impl Into<AssetId>, points: Vec<PricePoint>) {
        let asset = asset.into();
        self.histories
            .insert(asset.clone(), PriceHistory::new(asset, points));
    }

    /// Builder-style [`insert_points`](Self::insert_points).
    pub fn with_points(self, asset: impl Into<AssetId>, points: Vec<PricePoint>) -> Self {
        self.insert_points(asset, points);
        self
    }

    /// Remove an asset, returning its history.
    pub fn remove(&self, asset: &AssetId) -> Option<PriceHistory> {
        self.histories.remove(asset).map(|(_, history)| history)
    }
}

#[async_trait]
impl PriceHistorySource for InMemoryPriceSource {
    async fn history(&self, asset: &AssetId) -> Result<PriceHistory, TraitError> {
        lookup(&self.histories, asset)
    }

    async fn available_assets(&self) -> Result<Vec<AssetId>, TraitError> {
        Ok(sorted_keys(&self.histories))
    }
}

fn lookup(
    histories: &DashMap<AssetId, PriceHistory>,
    asset: &AssetId,
) -> Result<PriceHistory, TraitError> {
    histories
        .get(asset)
        .map(|h| h.clone())
        .ok_or_else(|| TraitError::NotFound(format!("asset {asset}")))
}

fn sorted_keys(histories: &DashMap<AssetId, PriceHistory>) -> Vec<AssetId> {
    let mut assets: Vec<AssetId> = histories.iter().map(|e| e.key().clone()).collect();
    assets.sort();
    assets
}
