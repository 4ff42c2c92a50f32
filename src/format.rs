use chrono::NaiveDate;

/// Format a whole-dollar AUD amount, e.g. `$1,200,000`
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    grouped.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format an ISO listing date as `15 Nov 2024`.
///
/// Input that is not a `YYYY-MM-DD` date is returned unchanged.
pub fn format_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%-d %b %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_groups_thousands() {
        assert_eq!(format_price(0), "$0");
        assert_eq!(format_price(999), "$999");
        assert_eq!(format_price(1000), "$1,000");
        assert_eq!(format_price(850_000), "$850,000");
        assert_eq!(format_price(1_200_000), "$1,200,000");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-11-15"), "15 Nov 2024");
        assert_eq!(format_date("2024-12-01"), "1 Dec 2024");
        assert_eq!(format_date("soon"), "soon");
    }
}
