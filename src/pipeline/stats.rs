use crate::models::Property;
use crate::pipeline::types::Stats;

/// Bucket used for listings without a property type
pub const UNKNOWN_TYPE: &str = "Unknown";

/// Summarise a collection in a single pass.
///
/// An empty collection yields all-zero stats.
pub fn calculate_stats<'a, I>(properties: I) -> Stats
where
    I: IntoIterator<Item = &'a Property>,
{
    let mut stats = Stats::default();
    let mut price_sum: u128 = 0;
    let mut sqft_sum: u128 = 0;

    for property in properties {
        if stats.total == 0 {
            stats.min_price = property.price;
            stats.max_price = property.price;
        } else {
            stats.min_price = stats.min_price.min(property.price);
            stats.max_price = stats.max_price.max(property.price);
        }
        stats.total += 1;
        price_sum += u128::from(property.price);
        sqft_sum += u128::from(property.sqft);

        *stats.by_suburb.entry(property.suburb.clone()).or_insert(0) += 1;
        let property_type = property.property_type.as_deref().unwrap_or(UNKNOWN_TYPE);
        *stats.by_type.entry(property_type.to_string()).or_insert(0) += 1;
    }

    if stats.total > 0 {
        stats.avg_price = rounded_mean(price_sum, stats.total);
        stats.avg_sqft = rounded_mean(sqft_sum, stats.total);
    }

    stats
}

// Half rounds up, matching Math.round on positive values
fn rounded_mean(sum: u128, count: usize) -> u64 {
    let count = count as u128;
    ((sum * 2 + count) / (count * 2)) as u64
}
