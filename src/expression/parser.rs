use super::error::ExpressionParseError;
use std::str::FromStr;

/// The criteria a term can target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriterionKey {
    /// Substring match against the record name (case-sensitive)
    Name,
    /// Exact category match
    Category,
    /// Exact subcategory match
    Subcategory,
    /// Inclusive price range, MIN..MAX
    Price,
    /// Inclusive creation-date range, START..END
    Created,
}

impl FromStr for CriterionKey {
    type Err = ExpressionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" | "n" => Ok(CriterionKey::Name),
            "category" | "cat" | "c" => Ok(CriterionKey::Category),
            "subcategory" | "sub" | "s" => Ok(CriterionKey::Subcategory),
            "price" | "p" => Ok(CriterionKey::Price),
            "created" | "date" | "d" => Ok(CriterionKey::Created),
            _ => Err(ExpressionParseError::UnknownKey(s.to_string())),
        }
    }
}

impl CriterionKey {
    /// Get the canonical name of this criterion key
    pub fn canonical_name(&self) -> &'static str {
        match self {
            CriterionKey::Name => "name",
            CriterionKey::Category => "category",
            CriterionKey::Subcategory => "subcategory",
            CriterionKey::Price => "price",
            CriterionKey::Created => "created",
        }
    }
}

/// A single criterion term (e.g. "category:Home" or "price:10..50")
#[derive(Debug, Clone)]
pub struct CriterionTerm {
    pub key: CriterionKey,
    pub value: String,
}

impl CriterionTerm {
    /// Parse a single term from a string
    pub fn parse(s: &str) -> Result<Self, ExpressionParseError> {
        let parts: Vec<&str> = s.splitn(2, ':').collect();
        if parts.len() != 2 {
            return Err(ExpressionParseError::InvalidExpression(format!(
                "Expected 'key:value' format, got: {}",
                s
            )));
        }

        let key: CriterionKey = parts[0].parse()?;
        let value = parts[1].trim().trim_matches('"').to_string();

        if value.is_empty() {
            return Err(ExpressionParseError::EmptyValue(
                key.canonical_name().to_string(),
            ));
        }

        Ok(CriterionTerm { key, value })
    }
}

/// A complete filter expression consisting of multiple terms
#[derive(Debug, Clone, Default)]
pub struct FilterExpression {
    /// All terms (combined with AND logic; a repeated key keeps the last value)
    pub terms: Vec<CriterionTerm>,
}

impl FilterExpression {
    /// Create a new empty filter expression
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Parse a filter expression from a string
    ///
    /// Terms are separated by whitespace; quoted values may contain spaces.
    pub fn parse(s: &str) -> Result<Self, ExpressionParseError> {
        let mut terms = Vec::new();

        for part in split_preserving_quotes(s) {
            if part.contains(':') {
                terms.push(CriterionTerm::parse(part)?);
            } else if !part.is_empty() {
                return Err(ExpressionParseError::InvalidExpression(format!(
                    "Expected 'key:value' format, got: {}",
                    part
                )));
            }
        }

        Ok(FilterExpression { terms })
    }

    /// Check if this expression is empty (no criteria)
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The last value given for a key, if any
    pub fn value_for(&self, key: &CriterionKey) -> Option<&str> {
        self.terms
            .iter()
            .rev()
            .find(|t| &t.key == key)
            .map(|t| t.value.as_str())
    }
}

/// Split a string by whitespace while preserving quoted segments
fn split_preserving_quotes(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ' ' | '\t' if !in_quotes => {
                if i > start {
                    let part = &s[start..i];
                    if !part.trim().is_empty() {
                        parts.push(part.trim());
                    }
                }
                start = i + 1;
            }
            _ => {}
        }
    }

    // Add the last part
    if start < s.len() {
        let part = &s[start..];
        if !part.trim().is_empty() {
            parts.push(part.trim());
        }
    }

    parts
}
