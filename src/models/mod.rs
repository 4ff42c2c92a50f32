use serde::{Deserialize, Serialize};

/// Stable identifier of a listing
pub type PropertyId = u64;

/// Market status of a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ListingStatus {
    Available,
    Pending,
    Sold,
}

/// Agent responsible for a listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Agent {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Core property data model
///
/// Field names serialize in camelCase so catalogue files keep the shape the
/// web frontend used (`propertyType`, `yearBuilt`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: PropertyId,
    pub address: String,
    pub suburb: String,
    pub price: u64,
    pub sqft: u32,
    /// ISO calendar date, `YYYY-MM-DD`
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_built: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parking: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lot_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooling: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_plan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_tour: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ListingStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<Agent>,
}

impl Property {
    /// Listing with only the required fields set
    pub fn new(
        id: PropertyId,
        address: impl Into<String>,
        suburb: impl Into<String>,
        price: u64,
        sqft: u32,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            address: address.into(),
            suburb: suburb.into(),
            price,
            sqft,
            date: date.into(),
            bedrooms: None,
            bathrooms: None,
            property_type: None,
            year_built: None,
            parking: None,
            lot_size: None,
            heating: None,
            cooling: None,
            image_url: None,
            images: Vec::new(),
            floor_plan: None,
            virtual_tour: None,
            description: None,
            features: Vec::new(),
            status: None,
            agent: None,
        }
    }

    /// Images to show in a gallery, falling back to the single cover image
    pub fn gallery(&self) -> Vec<&str> {
        if !self.images.is_empty() {
            return self.images.iter().map(String::as_str).collect();
        }
        self.image_url.as_deref().into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_are_omitted_from_json() {
        let property = Property::new(1, "123 Collins Street", "Melbourne CBD", 850_000, 1200, "2024-11-15");
        let json = serde_json::to_value(&property).unwrap();

        assert_eq!(json["suburb"], "Melbourne CBD");
        assert!(json.get("bedrooms").is_none());
        assert!(json.get("features").is_none());
    }

    #[test]
    fn test_reads_camel_case_catalogue_fields() {
        let json = r#"{
            "id": 7,
            "address": "67 Smith Street",
            "suburb": "Collingwood",
            "price": 720000,
            "sqft": 950,
            "date": "2024-11-18",
            "propertyType": "Apartment",
            "yearBuilt": 2015,
            "status": "Pending",
            "agent": {"name": "Jo Smith", "phone": "0400 000 000", "email": "jo@example.com"}
        }"#;

        let property: Property = serde_json::from_str(json).unwrap();
        assert_eq!(property.property_type.as_deref(), Some("Apartment"));
        assert_eq!(property.year_built, Some(2015));
        assert_eq!(property.status, Some(ListingStatus::Pending));
        assert_eq!(property.bedrooms, None);
    }

    #[test]
    fn test_gallery_falls_back_to_cover_image() {
        let mut property = Property::new(1, "a", "b", 1, 1, "2024-01-01");
        assert!(property.gallery().is_empty());

        property.image_url = Some("cover.jpg".to_string());
        assert_eq!(property.gallery(), vec!["cover.jpg"]);

        property.images = vec!["one.jpg".to_string(), "two.jpg".to_string()];
        assert_eq!(property.gallery(), vec!["one.jpg", "two.jpg"]);
    }
}
