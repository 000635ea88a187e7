use crate::criteria::{DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN, FilterCriteria};
use crate::dataset::Record;
use std::str::FromStr;

/// A single editable field of the draft criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Category,
    Subcategory,
    PriceMin,
    PriceMax,
    DateStart,
    DateEnd,
}

impl FromStr for DraftField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(DraftField::Name),
            "category" | "cat" => Ok(DraftField::Category),
            "subcategory" | "sub" => Ok(DraftField::Subcategory),
            "price-min" | "min" => Ok(DraftField::PriceMin),
            "price-max" | "max" => Ok(DraftField::PriceMax),
            "date-start" | "start" => Ok(DraftField::DateStart),
            "date-end" | "end" => Ok(DraftField::DateEnd),
            _ => Err(format!(
                "Unknown field '{}'. Fields: name, category, subcategory, \
                 price-min, price-max, date-start, date-end",
                s
            )),
        }
    }
}

/// The filter editing panel: a two-state machine (closed/open) owning a
/// draft copy of the criteria.
///
/// The draft is reset to defaults on every open→closed transition, whatever
/// the cause — dismissing without applying abandons the edits rather than
/// resuming them next time. Committing packages the whole draft as one
/// [`FilterCriteria`] value and then closes.
#[derive(Debug, Clone, Default)]
pub struct FilterEditor {
    open: bool,
    /// Display-only context carried by the opening transition; unused by the
    /// filtering logic itself.
    selected: Option<Record>,
    draft: FilterCriteria,
}

impl FilterEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> Option<&Record> {
        if self.open { self.selected.as_ref() } else { None }
    }

    pub fn draft(&self) -> &FilterCriteria {
        &self.draft
    }

    /// Transition closed→open, carrying the record whose row was activated.
    /// Opening while already open only replaces the selection.
    pub fn open(&mut self, selected: Option<Record>) {
        self.open = true;
        self.selected = selected;
    }

    /// Transition open→closed and discard the draft. Safe to call while
    /// already closed.
    pub fn close(&mut self) {
        self.open = false;
        self.selected = None;
        self.draft = FilterCriteria::default();
    }

    /// Mutate exactly one draft field from raw user text.
    ///
    /// Numeric fields silently coerce unparseable input to the bound's
    /// default (min→0, max→100); date fields clear the bound instead. No
    /// min ≤ max validation is enforced anywhere.
    pub fn update_field(&mut self, field: DraftField, raw: &str) {
        match field {
            DraftField::Name => self.draft.name = raw.to_string(),
            DraftField::Category => self.draft.category = raw.to_string(),
            DraftField::Subcategory => self.draft.subcategory = raw.to_string(),
            DraftField::PriceMin => {
                self.draft.price.min = raw.trim().parse().unwrap_or(DEFAULT_PRICE_MIN);
            }
            DraftField::PriceMax => {
                self.draft.price.max = raw.trim().parse().unwrap_or(DEFAULT_PRICE_MAX);
            }
            DraftField::DateStart => self.draft.dates.start = raw.trim().parse().ok(),
            DraftField::DateEnd => self.draft.dates.end = raw.trim().parse().ok(),
        }
    }

    /// Package the draft as the new committed criteria, then close (which
    /// resets the draft). Returns `None` when the editor is not open; the
    /// caller feeds the value to [`crate::engine::FilterEngine::apply_criteria`].
    pub fn commit(&mut self) -> Option<FilterCriteria> {
        if !self.open {
            return None;
        }
        let criteria = self.draft.clone();
        self.close();
        Some(criteria)
    }
}
