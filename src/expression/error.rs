use thiserror::Error;

/// Errors that can occur when parsing filter expressions
#[derive(Debug, Error)]
pub enum ExpressionParseError {
    #[error(
        "Unknown criterion key: '{0}'. Valid keys are: name (n), category (c), subcategory (s), price (p), created (d)"
    )]
    UnknownKey(String),

    #[error("Empty value for criterion '{0}'")]
    EmptyValue(String),

    #[error("Invalid price range '{0}'. Expected MIN..MAX, e.g. price:10..50")]
    InvalidPriceRange(String),

    #[error("Invalid date range '{0}'. Expected START..END with YYYY-MM-DD dates, e.g. created:2024-01-01..2024-06-30")]
    InvalidDateRange(String),

    #[error("Invalid filter expression: {0}")]
    InvalidExpression(String),
}
