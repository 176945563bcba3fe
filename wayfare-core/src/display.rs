//! Fixed-locale (en-US, euro) presentation helpers.

use chrono::NaiveDate;

/// "Feb 14, 2026"
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// "2/14/2026", used for a favorite's `date_added`.
pub fn format_added_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// "€12.50"
pub fn format_amount(amount: f64) -> String {
    format!("€{:.2}", amount)
}

/// Capitalizes the first letter: "activity" -> "Activity"
pub fn category_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_date() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 4).unwrap();
        assert_eq!(format_display_date(date), "Feb 4, 2026");
    }

    #[test]
    fn test_format_added_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 6).unwrap();
        assert_eq!(format_added_date(date), "10/6/2026");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(12.5), "€12.50");
        assert_eq!(format_amount(0.0), "€0.00");
        assert_eq!(format_amount(149.75), "€149.75");
    }

    #[test]
    fn test_category_label() {
        assert_eq!(category_label("activity"), "Activity");
        assert_eq!(category_label("food"), "Food");
        assert_eq!(category_label(""), "");
    }
}
