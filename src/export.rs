use crate::models::Property;
use chrono::NaiveDate;
use std::fmt::Display;

pub const CSV_HEADER: &str = "Address,Suburb,Price,Sqft,Bedrooms,Bathrooms,Type,Date";

/// Render listings as CSV text, one row per listing in the given order.
///
/// Address and suburb are quoted; absent optional fields leave the cell empty.
pub fn to_csv<'a, I>(properties: I) -> String
where
    I: IntoIterator<Item = &'a Property>,
{
    let mut lines = vec![CSV_HEADER.to_string()];
    for p in properties {
        let row = [
            quoted(&p.address),
            quoted(&p.suburb),
            p.price.to_string(),
            p.sqft.to_string(),
            optional(p.bedrooms.as_ref()),
            optional(p.bathrooms.as_ref()),
            optional(p.property_type.as_ref()),
            p.date.clone(),
        ];
        lines.push(row.join(","));
    }
    lines.join("\n")
}

/// Download name for an export made on `date`
pub fn export_filename(date: NaiveDate) -> String {
    format!("properties-{}.csv", date.format("%Y-%m-%d"))
}

fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn optional<T: Display>(value: Option<&T>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}
