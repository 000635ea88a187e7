mod pager;
mod summary;
mod table;

pub use pager::Pager;
pub use summary::format_applied_filters;
pub use table::{create_styled_table, render_record_table};

use crate::config::DisplayRules;
use crate::criteria::FilterCriteria;
use crate::dataset::Record;
use std::fmt::Write as _;

/// Render the applied-filters block, one table page, and the pager footer.
pub fn render_page(
    visible: &[&Record],
    criteria: &FilterCriteria,
    pager: &Pager,
    display: &DisplayRules,
) -> String {
    let mut out = String::new();
    let _ = write!(out, "{}", format_applied_filters(criteria));
    let _ = writeln!(out, "{}", render_record_table(pager.slice(visible), display));
    let _ = writeln!(out, "{}", pager.footer(visible.len()));
    out
}

/// Serialize the visible records as pretty-printed JSON.
pub fn records_to_json(visible: &[&Record]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(visible)
}
