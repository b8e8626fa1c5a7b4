//! Ordered asset universe.

use crate::error::{FrontierError, FrontierResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// An ordered sequence of unique asset identifiers.
///
/// Order defines the indexing of every weight vector the engine produces.
/// Identifiers are trimmed and upper-cased on construction, so `" spy"` and
/// `"SPY"` name the same asset.
///
/// # Example
///
/// ```rust
/// use frontier_core::types::AssetSet;
///
/// let assets = AssetSet::new(["aapl", " msft "]).unwrap();
/// assert_eq!(assets.len(), 2);
/// assert_eq!(assets.index_of("MSFT"), Some(1));
/// assert!(AssetSet::new(["AAPL", "aapl"]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct AssetSet {
    ids: Vec<String>,
}

impl AssetSet {
    /// Minimum number of assets that span a frontier.
    pub const MIN_ASSETS: usize = 2;

    /// Creates an asset set, normalizing and validating the identifiers.
    pub fn new<I, S>(ids: I) -> FrontierResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids: Vec<String> = ids
            .into_iter()
            .map(|id| id.as_ref().trim().to_uppercase())
            .collect();

        if ids.len() < Self::MIN_ASSETS {
            return Err(FrontierError::validation(format!(
                "at least {} assets are required, got {}",
                Self::MIN_ASSETS,
                ids.len()
            )));
        }

        let mut seen = HashSet::with_capacity(ids.len());
        for id in &ids {
            if id.is_empty() {
                return Err(FrontierError::validation("asset identifier is empty"));
            }
            if !seen.insert(id.as_str()) {
                return Err(FrontierError::validation(format!(
                    "duplicate asset identifier: {id}"
                )));
            }
        }

        Ok(Self { ids })
    }

    /// Parses a comma-separated list such as `"SPY, AGG,GLD"`.
    pub fn parse_list(list: &str) -> FrontierResult<Self> {
        Self::new(list.split(',').filter(|s| !s.trim().is_empty()))
    }

    /// Number of assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Always false; an asset set holds at least two identifiers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Identifiers in order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.ids
    }

    /// Iterates over the identifiers in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Position of an identifier, compared after normalization.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        let id = id.trim().to_uppercase();
        self.ids.iter().position(|candidate| *candidate == id)
    }
}

impl TryFrom<Vec<String>> for AssetSet {
    type Error = FrontierError;

    fn try_from(ids: Vec<String>) -> FrontierResult<Self> {
        Self::new(ids)
    }
}

impl From<AssetSet> for Vec<String> {
    fn from(set: AssetSet) -> Self {
        set.ids
    }
}

impl fmt::Display for AssetSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ids.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FrontierErrorKind;

    #[test]
    fn test_normalizes_identifiers() {
        let assets = AssetSet::new([" spy", "Agg "]).unwrap();
        assert_eq!(assets.as_slice(), &["SPY".to_string(), "AGG".to_string()]);
        assert_eq!(assets.to_string(), "SPY, AGG");
    }

    #[test]
    fn test_rejects_invalid_sets() {
        let single = AssetSet::new(["SPY"]).unwrap_err();
        assert_eq!(single.kind(), FrontierErrorKind::Validation);

        let empty_id = AssetSet::new(["SPY", "  "]).unwrap_err();
        assert!(empty_id.to_string().contains("empty"));

        let dup = AssetSet::new(["spy", "SPY"]).unwrap_err();
        assert!(dup.to_string().contains("duplicate"));
    }

    #[test]
    fn test_parse_list() {
        let assets = AssetSet::parse_list("spy, agg,,gld").unwrap();
        assert_eq!(assets.len(), 3);
        assert_eq!(assets.index_of("gld"), Some(2));
        assert_eq!(assets.index_of("QQQ"), None);
    }

    #[test]
    fn test_serde() {
        let assets: AssetSet = serde_json::from_str(r#"["spy","agg"]"#).unwrap();
        assert_eq!(serde_json::to_string(&assets).unwrap(), r#"["SPY","AGG"]"#);

        let bad: Result<AssetSet, _> = serde_json::from_str(r#"["spy"]"#);
        assert!(bad.is_err());
    }
}
