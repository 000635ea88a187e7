//! Filter expression parsing and compilation
//!
//! This module provides a compact expression syntax for specifying filter
//! criteria on the command line. Instead of one flag per criterion, users
//! give a single expression of whitespace-separated terms.
//!
//! # Syntax
//!
//! ```text
//! key:value             A criterion; different keys combine with AND
//! key:"quoted value"    Values with spaces
//! key:LOW..HIGH         Range criteria (price, created)
//! ```
//!
//! # Criterion keys
//!
//! - `name:` / `n:` - substring match against the record name (case-sensitive)
//! - `category:` / `cat:` / `c:` - exact category match
//! - `subcategory:` / `sub:` / `s:` - exact subcategory match
//! - `price:` / `p:` - inclusive price range, MIN..MAX (either side optional)
//! - `created:` / `date:` / `d:` - inclusive creation-date range, START..END
//!
//! # Examples
//!
//! ```text
//! category:Home                           # One category only
//! name:Lamp price:..50                    # Lamps up to $50
//! n:"Desk Lamp" c:Home                    # Quoted substring
//! created:2024-01-01..2024-06-30          # First-half-of-2024 records
//! ```

pub mod compile;
pub mod error;
pub mod parser;

pub use compile::{print_criteria_warnings, to_criteria};
pub use error::ExpressionParseError;
pub use parser::{CriterionKey, CriterionTerm, FilterExpression};
