use crate::models::Property;
use crate::pipeline::types::FilterState;
use std::collections::BTreeSet;
use tracing::debug;

/// Select the listings that satisfy every active constraint.
///
/// Always runs over the full collection; output keeps input order.
pub fn filter_properties<'a>(properties: &'a [Property], filters: &FilterState) -> Vec<&'a Property> {
    let term = filters.search_term.to_lowercase();

    let filtered: Vec<&Property> = properties
        .iter()
        .filter(|p| term.is_empty() || matches_term(p, &term))
        .filter(|p| filters.suburb.is_empty() || p.suburb == filters.suburb)
        .filter(|p| filters.min_price.map_or(true, |min| p.price as f64 >= min))
        .filter(|p| filters.max_price.map_or(true, |max| p.price as f64 <= max))
        .filter(|p| filters.min_sqft.map_or(true, |min| f64::from(p.sqft) >= min))
        .filter(|p| filters.max_sqft.map_or(true, |max| f64::from(p.sqft) <= max))
        // ISO dates compare chronologically as plain strings
        .filter(|p| filters.date_from.is_empty() || p.date.as_str() >= filters.date_from.as_str())
        .filter(|p| filters.date_to.is_empty() || p.date.as_str() <= filters.date_to.as_str())
        .collect();

    debug!("Filter kept {} of {} properties", filtered.len(), properties.len());
    filtered
}

fn matches_term(property: &Property, lowercase_term: &str) -> bool {
    property.address.to_lowercase().contains(lowercase_term)
        || property.suburb.to_lowercase().contains(lowercase_term)
}

/// Sorted, deduplicated suburb names for the suburb selector
pub fn available_suburbs(properties: &[Property]) -> Vec<&str> {
    properties
        .iter()
        .map(|p| p.suburb.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
