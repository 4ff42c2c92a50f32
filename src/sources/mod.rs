pub mod file;
pub mod http;
pub mod sample;
pub mod traits;

pub use file::JsonFileSource;
pub use http::HttpSource;
pub use sample::SampleSource;
pub use traits::ListingSource;

use crate::models::Property;
use anyhow::Result;
use std::collections::HashSet;
use tracing::info;

/// Build a source from its textual form: `sample`, `file:<path>` or an
/// `http(s)://` URL
pub fn source_from_spec(spec: &str) -> Result<Box<dyn ListingSource>> {
    let spec = spec.trim();
    if spec.eq_ignore_ascii_case("sample") {
        return Ok(Box::new(SampleSource::new()));
    }
    if let Some(path) = spec.strip_prefix("file:") {
        return Ok(Box::new(JsonFileSource::new(path)));
    }
    if spec.starts_with("http://") || spec.starts_with("https://") {
        return Ok(Box::new(HttpSource::new(spec)?));
    }
    anyhow::bail!("Unknown listing source '{}' (expected sample, file:<path> or a URL)", spec)
}

/// Load the catalogue, rejecting sets where two listings share an id
pub async fn load_catalogue(source: &dyn ListingSource) -> Result<Vec<Property>> {
    let properties = source.load().await?;

    let mut seen = HashSet::with_capacity(properties.len());
    for property in &properties {
        if !seen.insert(property.id) {
            anyhow::bail!(
                "{} source returned duplicate property id {}",
                source.source_name(),
                property.id
            );
        }
    }

    info!("Loaded {} properties from {} source", properties.len(), source.source_name());
    Ok(properties)
}
