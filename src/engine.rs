use crate::criteria::FilterCriteria;
use crate::dataset::Record;

/// Owns the committed filter criteria and derives the visible record set.
///
/// Criteria are replaced wholesale via [`FilterEngine::apply_criteria`]; there
/// is no field-level mutation path. Derivation is a full pass over the record
/// set every time, which is fine for a small static dataset.
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    criteria: FilterCriteria,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Replace the committed criteria with a new value.
    pub fn apply_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// Reset the committed criteria to the all-defaults sentinel.
    pub fn clear_criteria(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    pub fn active_filter_count(&self) -> usize {
        self.criteria.active_filter_count()
    }

    /// Records passing every committed predicate, in dataset order.
    pub fn derive_visible<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        records
            .iter()
            .filter(|record| self.criteria.matches(record))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::PriceRange;

    fn records() -> Vec<Record> {
        serde_json::from_str(
            r#"[
                { "id": 1, "name": "Widget", "category": "A", "subcategory": "X",
                  "createdAt": "2024-01-01", "updatedAt": "2024-01-02",
                  "price": 20.0, "sale_price": 18.0 },
                { "id": 2, "name": "Gadget", "category": "B", "subcategory": "Y",
                  "createdAt": "2024-06-01", "updatedAt": "2024-06-02",
                  "price": 80.0, "sale_price": 75.0 }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_category_scenario() {
        let records = records();
        let mut engine = FilterEngine::new();
        engine.apply_criteria(FilterCriteria::new().with_category("A"));

        let visible = engine.derive_visible(&records);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 1);
    }

    #[test]
    fn test_clear_restores_full_dataset() {
        let records = records();
        let mut engine = FilterEngine::new();
        engine.apply_criteria(
            FilterCriteria::new()
                .with_name("Widget")
                .with_price(PriceRange::new(0.0, 30.0)),
        );
        assert_eq!(engine.derive_visible(&records).len(), 1);

        engine.clear_criteria();
        assert_eq!(engine.derive_visible(&records).len(), records.len());
        assert_eq!(engine.active_filter_count(), 0);
    }
}
