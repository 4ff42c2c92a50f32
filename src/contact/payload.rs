use crate::contact::error::ContactError;
use crate::format::format_price;
use crate::models::{Property, PropertyId};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// What the user typed into the enquiry form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactRequest {
    /// Every field is required and the email needs a local part and a domain
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("message", &self.message),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }

        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(ContactError::InvalidEmail(email.to_string())),
        }
    }
}

/// Message prefilled into the form for `property`
pub fn default_message(property: &Property) -> String {
    format!(
        "I'm interested in {}, {} listed at {}. Please contact me with more information.",
        property.address,
        property.suburb,
        format_price(property.price)
    )
}

/// Property details attached to an enquiry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetails {
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub sqft: u32,
    pub year_built: Option<u32>,
}

/// Enquiry as sent to the contact backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub property_id: PropertyId,
    pub property_address: String,
    pub property_suburb: String,
    pub property_price: u64,
    pub property_type: Option<String>,
    pub property_details: PropertyDetails,
    /// RFC 3339 UTC timestamp
    pub timestamp: String,
    pub page_url: String,
}

impl ContactPayload {
    pub fn new(request: ContactRequest, property: &Property, page_url: &str, timestamp: DateTime<Utc>) -> Self {
        Self {
            name: request.name,
            email: request.email,
            phone: request.phone,
            message: request.message,
            property_id: property.id,
            property_address: property.address.clone(),
            property_suburb: property.suburb.clone(),
            property_price: property.price,
            property_type: property.property_type.clone(),
            property_details: PropertyDetails {
                bedrooms: property.bedrooms,
                bathrooms: property.bathrooms,
                sqft: property.sqft,
                year_built: property.year_built,
            },
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            page_url: page_url.to_string(),
        }
    }
}
