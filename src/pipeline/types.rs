use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Search constraints entered by the user
///
/// Every field is optional: an empty string or `None` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Free text matched against address and suburb
    pub search_term: String,
    /// Minimum price (AUD), inclusive
    pub min_price: Option<f64>,
    /// Maximum price (AUD), inclusive
    pub max_price: Option<f64>,
    /// Minimum size in square feet, inclusive
    pub min_sqft: Option<f64>,
    /// Maximum size in square feet, inclusive
    pub max_sqft: Option<f64>,
    /// Exact suburb name
    pub suburb: String,
    /// Earliest listing date, `YYYY-MM-DD`
    pub date_from: String,
    /// Latest listing date, `YYYY-MM-DD`
    pub date_to: String,
}

impl FilterState {
    /// True when at least one constraint is set
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty()
            || self.min_price.is_some()
            || self.max_price.is_some()
            || self.min_sqft.is_some()
            || self.max_sqft.is_some()
            || !self.suburb.is_empty()
            || !self.date_from.is_empty()
            || !self.date_to.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Parse a numeric bound typed into a filter field.
///
/// Any finite number is a bound, fractions included. Blank, malformed or
/// non-finite input means the bound is unset.
pub fn parse_bound(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Ordering applied to the displayed listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    PriceAsc,
    PriceDesc,
    #[default]
    DateNewest,
    DateOldest,
    SizeAsc,
    SizeDesc,
}

impl SortOption {
    pub const ALL: [SortOption; 6] = [
        SortOption::DateNewest,
        SortOption::DateOldest,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::SizeAsc,
        SortOption::SizeDesc,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::DateNewest => "date-newest",
            SortOption::DateOldest => "date-oldest",
            SortOption::SizeAsc => "size-asc",
            SortOption::SizeDesc => "size-desc",
        }
    }

    /// Label shown in the sort selector
    pub fn label(&self) -> &'static str {
        match self {
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::DateNewest => "Newest First",
            SortOption::DateOldest => "Oldest First",
            SortOption::SizeAsc => "Size: Small to Large",
            SortOption::SizeDesc => "Size: Large to Small",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortOption(pub String);

impl fmt::Display for UnknownSortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sort option '{}'", self.0)
    }
}

impl std::error::Error for UnknownSortOption {}

impl FromStr for SortOption {
    type Err = UnknownSortOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|option| option.key() == s)
            .ok_or_else(|| UnknownSortOption(s.to_string()))
    }
}

/// Which listings the page shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    All,
    Favorites,
}

/// Aggregate metrics over a set of listings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total: usize,
    pub avg_price: u64,
    pub min_price: u64,
    pub max_price: u64,
    pub avg_sqft: u64,
    pub by_suburb: BTreeMap<String, usize>,
    pub by_type: BTreeMap<String, usize>,
}

impl Stats {
    /// Number of distinct suburbs
    pub fn suburb_count(&self) -> usize {
        self.by_suburb.len()
    }
}
