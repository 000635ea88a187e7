use crate::config::DisplayRules;
use crate::dataset::Record;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

/// Create a table with the shared styling used across the viewer
pub fn create_styled_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.iter().map(|h| Cell::new(h)).collect::<Vec<_>>());
    table
}

/// Render one page of records as a table string.
pub fn render_record_table(records: &[&Record], display: &DisplayRules) -> String {
    let mut table = create_styled_table(&[
        "ID",
        "Name",
        "Category",
        "Subcategory",
        "Created At",
        "Updated At",
        "Price",
        "Sale Price",
    ]);

    for record in records {
        table.add_row(vec![
            Cell::new(record.id).set_alignment(CellAlignment::Right),
            Cell::new(&record.name),
            Cell::new(&record.category),
            Cell::new(&record.subcategory),
            Cell::new(record.created_at.format(&display.date_format)),
            Cell::new(record.updated_at.format(&display.date_format)),
            Cell::new(format!("{}{:.2}", display.currency, record.price))
                .set_alignment(CellAlignment::Right),
            Cell::new(format!("{}{:.2}", display.currency, record.sale_price))
                .set_alignment(CellAlignment::Right),
        ]);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record {
            id: 42,
            name: "Aurora Desk Lamp".to_string(),
            category: "Home".to_string(),
            subcategory: "Lighting".to_string(),
            created_at: "2024-01-04".parse().unwrap(),
            updated_at: "2024-03-12".parse().unwrap(),
            price: 34.5,
            sale_price: 29.99,
        }
    }

    #[test]
    fn test_render_contains_formatted_dates_and_prices() {
        let record = sample();
        let rows = vec![&record];
        let out = render_record_table(&rows, &DisplayRules::default());

        assert!(out.contains("Aurora Desk Lamp"));
        assert!(out.contains("04-Jan-24"));
        assert!(out.contains("12-Mar-24"));
        assert!(out.contains("$34.50"));
        assert!(out.contains("$29.99"));
    }

    #[test]
    fn test_render_empty_page_still_has_header() {
        let out = render_record_table(&[], &DisplayRules::default());
        assert!(out.contains("Category"));
        assert!(out.contains("Sale Price"));
    }
}
