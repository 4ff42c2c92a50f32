use crate::models::Property;
use crate::sources::traits::ListingSource;
use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

/// Built-in Melbourne catalogue used when no other source is configured
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleSource;

impl SampleSource {
    pub fn new() -> Self {
        Self
    }

    /// The built-in listings
    pub fn properties(&self) -> Vec<Property> {
        vec![
            listing(1, "123 Collins Street", "Melbourne CBD", 850_000, 1200, (2, 2), "Apartment", "2024-11-15", "photo-1545324418-cc1a3fa10c00"),
            listing(2, "45 Brunswick Street", "Fitzroy", 1_200_000, 1800, (3, 2), "Townhouse", "2024-11-20", "photo-1580587771525-78b9dba3b914"),
            listing(3, "78 Chapel Street", "South Yarra", 950_000, 1400, (2, 2), "Apartment", "2024-12-01", "photo-1512917774080-9991f1c4c750"),
            listing(4, "156 Lygon Street", "Carlton", 780_000, 1100, (2, 1), "Apartment", "2024-11-28", "photo-1560448204-e02f11c3d0e2"),
            listing(5, "89 Acland Street", "St Kilda", 1_350_000, 2000, (3, 2), "House", "2024-12-05", "photo-1568605114967-8130f3a36994"),
            listing(6, "234 Toorak Road", "Toorak", 2_100_000, 2800, (4, 3), "House", "2024-12-08", "photo-1600596542815-ffad4c1539a9"),
            listing(7, "67 Smith Street", "Collingwood", 720_000, 950, (1, 1), "Apartment", "2024-11-18", "photo-1522708323590-d24dbb6b0267"),
            listing(8, "12 Victoria Street", "Richmond", 890_000, 1300, (2, 2), "Apartment", "2024-12-03", "photo-1600607687939-ce8a6c25118c"),
            listing(9, "345 High Street", "Prahran", 1_050_000, 1600, (3, 2), "Townhouse", "2024-11-25", "photo-1600585154340-be6161a56a0c"),
            listing(10, "98 Sydney Road", "Brunswick", 680_000, 900, (2, 1), "Apartment", "2024-12-10", "photo-1600566753190-17f0baa2a6c3"),
            listing(11, "210 Beach Road", "Brighton", 1_850_000, 2400, (4, 3), "House", "2024-12-12", "photo-1600047509807-ba8f99d2cdde"),
            listing(12, "55 Johnston Street", "Fitzroy", 795_000, 1050, (2, 1), "Apartment", "2024-11-22", "photo-1600607687644-c7171b42498b"),
        ]
    }
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: u64,
    address: &str,
    suburb: &str,
    price: u64,
    sqft: u32,
    (bedrooms, bathrooms): (u32, u32),
    property_type: &str,
    date: &str,
    photo: &str,
) -> Property {
    let mut property = Property::new(id, address, suburb, price, sqft, date);
    property.bedrooms = Some(bedrooms);
    property.bathrooms = Some(bathrooms);
    property.property_type = Some(property_type.to_string());
    property.image_url = Some(format!("https://images.unsplash.com/{}?w=800&q=80", photo));
    property
}

#[async_trait]
impl ListingSource for SampleSource {
    async fn load(&self) -> Result<Vec<Property>> {
        info!("📋 Using built-in sample listings");
        Ok(self.properties())
    }

    fn source_name(&self) -> &'static str {
        "Sample"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_ids_are_unique() {
        let properties = SampleSource::new().properties();
        let ids: HashSet<u64> = properties.iter().map(|p| p.id).collect();
        assert_eq!(properties.len(), 12);
        assert_eq!(ids.len(), properties.len());
    }

    #[tokio::test]
    async fn test_load_returns_catalogue() {
        let loaded = SampleSource::new().load().await.unwrap();
        assert_eq!(loaded[0].address, "123 Collins Street");
        assert_eq!(loaded[0].property_type.as_deref(), Some("Apartment"));
    }
}
