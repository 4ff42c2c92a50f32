use crate::models::Property;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for everything that can supply the listing catalogue
/// This keeps the page independent of where the listings come from
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Load the full set of listings
    async fn load(&self) -> Result<Vec<Property>>;

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;
}
