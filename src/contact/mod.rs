pub mod error;
pub mod payload;
pub mod submitter;

pub use error::ContactError;
pub use payload::{default_message, ContactPayload, ContactRequest, PropertyDetails};
pub use submitter::{ContactSubmitter, HttpSubmitter, SimulatedSubmitter};

use crate::models::Property;
use chrono::Utc;
use tracing::info;

/// Validate an enquiry about `property` and hand it to `submitter`
pub async fn send_enquiry(
    submitter: &dyn ContactSubmitter,
    request: ContactRequest,
    property: &Property,
    page_url: &str,
) -> Result<ContactPayload, ContactError> {
    request.validate()?;
    let payload = ContactPayload::new(request, property, page_url, Utc::now());
    info!("Sending enquiry for property {} via {} channel", property.id, submitter.channel_name());
    submitter.submit(&payload).await?;
    Ok(payload)
}
