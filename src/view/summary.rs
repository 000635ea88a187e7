use crate::criteria::FilterCriteria;
use colored::Colorize;
use std::fmt::Write as _;

/// Format the applied-filters block shown above the table: a badge with the
/// active count and one bullet per active criterion.
pub fn format_applied_filters(criteria: &FilterCriteria) -> String {
    let mut out = String::new();
    let count = criteria.active_filter_count();

    let _ = writeln!(
        out,
        "{}",
        format!("Applied Filters ({})", count).bold().bright_blue()
    );
    for label in criteria.active_filter_labels() {
        let _ = writeln!(out, "  - {}", label);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{DateRange, PriceRange};

    #[test]
    fn test_no_filters_shows_zero_badge() {
        colored::control::set_override(false);
        let out = format_applied_filters(&FilterCriteria::default());
        assert!(out.contains("Applied Filters (0)"));
        assert!(!out.contains("- "));
    }

    #[test]
    fn test_active_filters_are_listed() {
        colored::control::set_override(false);
        let criteria = FilterCriteria::new()
            .with_name("Lamp")
            .with_price(PriceRange::new(10.0, 50.0))
            .with_dates(DateRange::new(Some("2024-01-01".parse().unwrap()), None));

        let out = format_applied_filters(&criteria);
        assert!(out.contains("Applied Filters (3)"));
        assert!(out.contains("Name: Lamp"));
        assert!(out.contains("Price: $10 - $50"));
        assert!(out.contains("Created: 01-Jan-24 to any"));
    }
}
