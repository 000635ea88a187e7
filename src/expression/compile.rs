use super::error::ExpressionParseError;
use super::parser::{CriterionKey, FilterExpression};
use crate::criteria::{
    DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN, DateRange, FilterCriteria, PriceRange,
};
use chrono::NaiveDate;

/// Convert a FilterExpression into one FilterCriteria value
///
/// Range values use `LOW..HIGH` syntax; either side of a price range may be
/// omitted and falls back to the default bound (`price:..50` means 0..50).
/// Either side of a date range may be omitted, yielding a half-open range.
pub fn to_criteria(expr: &FilterExpression) -> Result<FilterCriteria, ExpressionParseError> {
    let mut criteria = FilterCriteria::new();

    if let Some(name) = expr.value_for(&CriterionKey::Name) {
        criteria = criteria.with_name(name);
    }
    if let Some(category) = expr.value_for(&CriterionKey::Category) {
        criteria = criteria.with_category(category);
    }
    if let Some(subcategory) = expr.value_for(&CriterionKey::Subcategory) {
        criteria = criteria.with_subcategory(subcategory);
    }
    if let Some(raw) = expr.value_for(&CriterionKey::Price) {
        criteria = criteria.with_price(parse_price_range(raw)?);
    }
    if let Some(raw) = expr.value_for(&CriterionKey::Created) {
        criteria = criteria.with_dates(parse_date_range(raw)?);
    }

    Ok(criteria)
}

fn parse_price_range(raw: &str) -> Result<PriceRange, ExpressionParseError> {
    let Some((low, high)) = raw.split_once("..") else {
        return Err(ExpressionParseError::InvalidPriceRange(raw.to_string()));
    };

    let min = if low.trim().is_empty() {
        DEFAULT_PRICE_MIN
    } else {
        low.trim()
            .parse()
            .map_err(|_| ExpressionParseError::InvalidPriceRange(raw.to_string()))?
    };
    let max = if high.trim().is_empty() {
        DEFAULT_PRICE_MAX
    } else {
        high.trim()
            .parse()
            .map_err(|_| ExpressionParseError::InvalidPriceRange(raw.to_string()))?
    };

    Ok(PriceRange::new(min, max))
}

fn parse_date_range(raw: &str) -> Result<DateRange, ExpressionParseError> {
    let Some((start, end)) = raw.split_once("..") else {
        return Err(ExpressionParseError::InvalidDateRange(raw.to_string()));
    };

    let parse_bound = |s: &str| -> Result<Option<NaiveDate>, ExpressionParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }
        s.parse()
            .map(Some)
            .map_err(|_| ExpressionParseError::InvalidDateRange(raw.to_string()))
    };

    let range = DateRange::new(parse_bound(start)?, parse_bound(end)?);
    if range.is_unset() {
        return Err(ExpressionParseError::InvalidDateRange(raw.to_string()));
    }
    Ok(range)
}

/// Print warnings for criteria that silently match everything
///
/// This helps users spot ranges that look constraining but are not: an
/// inverted price range matches no record's price, and a half-open date
/// range does not constrain at all.
pub fn print_criteria_warnings(criteria: &FilterCriteria) {
    if !criteria.price.is_default() && criteria.price.min > criteria.price.max {
        eprintln!(
            "Warning: price range {}..{} has min > max and matches nothing",
            criteria.price.min, criteria.price.max
        );
    }
    let half_open = criteria.dates.start.is_some() != criteria.dates.end.is_some();
    if half_open {
        eprintln!(
            "Warning: a date range needs both bounds to take effect; a half-open range matches everything"
        );
    }
}
