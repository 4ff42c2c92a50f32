use crate::models::Property;
use crate::pipeline::types::SortOption;
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Return a newly ordered copy of `properties`.
///
/// Uses a stable sort, so listings with equal keys keep their relative
/// order. `None` (an unrecognised sort key) leaves the order unchanged.
pub fn sort_properties<'a>(properties: &[&'a Property], sort: Option<SortOption>) -> Vec<&'a Property> {
    let mut sorted = properties.to_vec();
    let Some(sort) = sort else {
        return sorted;
    };

    match sort {
        SortOption::PriceAsc => sorted.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOption::PriceDesc => sorted.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOption::DateNewest => sorted.sort_by(|a, b| compare_dates(b, a)),
        SortOption::DateOldest => sorted.sort_by(|a, b| compare_dates(a, b)),
        SortOption::SizeAsc => sorted.sort_by(|a, b| a.sqft.cmp(&b.sqft)),
        SortOption::SizeDesc => sorted.sort_by(|a, b| b.sqft.cmp(&a.sqft)),
    }

    sorted
}

/// Parse a listing date; `None` when it is not a valid `YYYY-MM-DD` date
pub fn listing_date(property: &Property) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&property.date, "%Y-%m-%d").ok()
}

// Unparseable dates order before every valid date
fn compare_dates(a: &Property, b: &Property) -> Ordering {
    listing_date(a).cmp(&listing_date(b))
}
