use thiserror::Error;

/// Why a contact enquiry could not be sent
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("failed to reach contact endpoint")]
    Transport(#[from] reqwest::Error),

    #[error("contact endpoint rejected the message: {0}")]
    Rejected(reqwest::StatusCode),
}
