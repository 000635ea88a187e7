use crate::dataset::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default price bounds. A range equal to `(DEFAULT_PRICE_MIN,
/// DEFAULT_PRICE_MAX)` encodes "no price constraint".
pub const DEFAULT_PRICE_MIN: f64 = 0.0;
pub const DEFAULT_PRICE_MAX: f64 = 100.0;

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_PRICE_MIN,
            max: DEFAULT_PRICE_MAX,
        }
    }
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether this range is the no-constraint sentinel.
    pub fn is_default(&self) -> bool {
        self.min == DEFAULT_PRICE_MIN && self.max == DEFAULT_PRICE_MAX
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Inclusive creation-date bounds. Both `None` means no constraint; a
/// half-open range also passes everything, though it still counts as an
/// active filter in the badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn is_unset(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Only a fully specified range constrains.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => date >= start && date <= end,
            _ => true,
        }
    }
}

/// The committed (or drafted) filter state. Always fully specified: "no
/// constraint" is encoded by sentinel values, never by absent fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-sensitive substring match against the record name; empty matches
    /// everything.
    pub name: String,
    /// Exact category match; empty matches everything.
    pub category: String,
    /// Exact subcategory match; empty matches everything.
    pub subcategory: String,
    pub price: PriceRange,
    pub dates: DateRange,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = subcategory.into();
        self
    }

    pub fn with_price(mut self, range: PriceRange) -> Self {
        self.price = range;
        self
    }

    pub fn with_dates(mut self, range: DateRange) -> Self {
        self.dates = range;
        self
    }

    /// Apply all five predicates, conjunctively.
    pub fn matches(&self, record: &Record) -> bool {
        let name_match = record.name.contains(&self.name);

        let category_match = self.category.is_empty() || record.category == self.category;

        let subcategory_match =
            self.subcategory.is_empty() || record.subcategory == self.subcategory;

        let price_match = self.price.is_default() || self.price.contains(record.price);

        let date_match = self.dates.contains(record.created_at);

        name_match && category_match && subcategory_match && price_match && date_match
    }

    /// How many of the five fields deviate from their no-constraint
    /// sentinel. Drives the "Applied Filters (N)" badge.
    pub fn active_filter_count(&self) -> usize {
        self.active_filter_labels().len()
    }

    /// Human-readable descriptions of the active criteria, in table order.
    pub fn active_filter_labels(&self) -> Vec<String> {
        let mut labels = Vec::new();
        if !self.name.is_empty() {
            labels.push(format!("Name: {}", self.name));
        }
        if !self.category.is_empty() {
            labels.push(format!("Category: {}", self.category));
        }
        if !self.subcategory.is_empty() {
            labels.push(format!("Subcategory: {}", self.subcategory));
        }
        if !self.price.is_default() {
            labels.push(format!("Price: ${} - ${}", self.price.min, self.price.max));
        }
        if !self.dates.is_unset() {
            let fmt = |d: Option<NaiveDate>| match d {
                Some(d) => d.format("%d-%b-%y").to_string(),
                None => "any".to_string(),
            };
            labels.push(format!(
                "Created: {} to {}",
                fmt(self.dates.start),
                fmt(self.dates.end)
            ));
        }
        labels
    }
}
