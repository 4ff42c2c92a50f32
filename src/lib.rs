//! Property listing portal: catalogue loading, filtering, sorting, stats,
//! persisted favorites and recently viewed lists, CSV export and contact
//! enquiries.

pub mod config;
pub mod contact;
pub mod export;
pub mod format;
pub mod models;
pub mod pipeline;
pub mod sources;
pub mod store;

pub use models::{Agent, ListingStatus, Property, PropertyId};
